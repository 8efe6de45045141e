//! Text normalization shared by every text-comparison step.
//!
//! Jobs and résumé skill text must pass through the same pipeline so both
//! sides of a similarity comparison live in the same term space.

/// Fixed English stopword list, checked against lowercased tokens.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Reduces a token to its base form with plural-suffix rules.
/// Short-stem guards keep words like "gas", "glass" and "bus" intact.
pub fn lemmatize(token: &str) -> String {
    let n = token.len();
    if n > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..n - 3]);
    }
    if n > 4 && (token.ends_with("sses") || token.ends_with("shes") || token.ends_with("ches")) {
        return token[..n - 2].to_string();
    }
    if n > 3 && token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us") {
        return token[..n - 1].to_string();
    }
    token.to_string()
}

/// Normalizes raw text: lowercase, strip characters outside `[a-zA-Z\s]`,
/// tokenize on whitespace, drop stopwords, lemmatize, join single-spaced.
///
/// Total function: never fails, output may be empty. Idempotent — a lemma
/// that lands on a stopword is dropped so a second pass changes nothing.
pub fn normalize(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphabetic() || c.is_whitespace() { c } else { ' ' })
        .collect();

    lowered
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .map(lemmatize)
        .filter(|t| !is_stop_word(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased alphanumeric tokens with stopwords removed. Mirrors the
/// normalizer's tokenization but keeps digits and skips lemmatization —
/// used by the skill extractor's token-presence check.
pub fn content_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty() && !is_stop_word(t))
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips() {
        assert_eq!(normalize("Rust, C++ & Go!"), "rust c go");
    }

    #[test]
    fn test_normalize_drops_stopwords() {
        assert_eq!(
            normalize("experience with the design of systems"),
            "experience design system"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Developed REST APIs using Python and Flask frameworks.",
            "Managed 12 wills and estates",
            "",
            "   \n\t  ",
            "databases libraries glasses buses",
        ];
        for s in &inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lemmatize_plurals() {
        assert_eq!(lemmatize("libraries"), "library");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("models"), "model");
        assert_eq!(lemmatize("pipelines"), "pipeline");
    }

    #[test]
    fn test_lemmatize_short_stem_guards() {
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("glass"), "glass");
        assert_eq!(lemmatize("bus"), "bus");
        assert_eq!(lemmatize("css"), "css");
    }

    #[test]
    fn test_content_tokens_keep_digits() {
        let tokens = content_tokens("Python3 and SQL since 2019");
        assert!(tokens.contains(&"python3".to_string()));
        assert!(tokens.contains(&"2019".to_string()));
        assert!(!tokens.contains(&"and".to_string()));
    }
}
