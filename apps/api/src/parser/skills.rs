//! Skill extraction — fixed technology vocabulary plus noun-phrase
//! candidates, filtered through a personal-info exclusion list.
//!
//! Naive substring matching over free text produces many false positives;
//! vocabulary-first ordering and the exclusion list are the noise-reduction
//! strategy, not an optimization.

use crate::textproc;

/// Known technology terms, matched case-insensitively. Checked before any
/// noun-phrase candidate so vocabulary hits keep priority in the capped list.
const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "node.js", "html", "css", "sql",
    "mongodb", "postgresql", "docker", "kubernetes", "aws", "azure", "gcp",
    "machine learning", "data science", "tensorflow", "pytorch", "pandas",
    "numpy", "scikit-learn", "flask", "django", "spring", "angular", "vue.js",
    "git", "jenkins", "ansible", "terraform", "linux", "bash", "c++", "c#",
    "php", "ruby", "swift", "kotlin", "scala", "go", "rust", "r", "matlab",
    "excel", "tableau", "power bi", "hadoop", "spark", "kafka", "redis",
    "elasticsearch", "nginx", "apache", "mysql", "oracle", "firebase",
    "graphql", "rest api", "microservices", "devops", "agile", "scrum",
];

/// Terms that mark a candidate as personal info or résumé boilerplate
/// rather than a skill. Checked as substrings of the cleaned candidate.
const PERSONAL_INFO_TERMS: &[&str] = &[
    "university", "college", "school", "name", "email", "phone", "address",
    "street", "city", "state", "zip", "john", "doe", "example", "gmail", "com",
    "senior", "software", "engineer", "developer", "manager", "team", "leader",
    "experience", "education", "project", "skill", "bachelor", "master", "phd",
    "bs", "ms", "ba", "ma", "b.sc", "m.sc", "technologies", "technology",
    "corporation", "corp", "inc", "ltd", "company", "llc", "international",
];

const MAX_SKILLS: usize = 20;

/// Extracts up to 20 skills in discovery order: vocabulary terms first, then
/// noun-phrase candidates, deduplicated case-insensitively and title-cased.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens = textproc::content_tokens(text);

    let mut found: Vec<String> = Vec::new();
    let candidates = SKILL_VOCABULARY
        .iter()
        .map(|s| s.to_string())
        .chain(noun_phrase_candidates(text));

    for candidate in candidates {
        if found.len() == MAX_SKILLS {
            break;
        }
        let candidate = candidate.trim();
        let present = lowered.contains(candidate) || tokens.iter().any(|t| t == candidate);
        if !present {
            continue;
        }

        let clean = title_case(candidate);
        let clean_lower = clean.to_lowercase();
        if clean.len() <= 1 {
            continue;
        }
        if PERSONAL_INFO_TERMS.iter().any(|t| clean_lower.contains(t)) {
            continue;
        }
        if !clean.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
            continue;
        }
        if found.iter().any(|f| f.eq_ignore_ascii_case(&clean)) {
            continue;
        }
        found.push(clean);
    }

    found
}

/// Heuristic phrase chunking: within punctuation-free segments, contiguous
/// runs of non-stopword alphabetic tokens become candidates, truncated to
/// three tokens. A stand-in for a real noun-phrase chunker — exact output
/// is implementation-defined, so callers assert only on vocabulary hits.
fn noun_phrase_candidates(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut phrases = Vec::new();

    for segment in lowered.split(|c: char| !c.is_ascii_alphabetic() && !c.is_ascii_whitespace()) {
        let mut run: Vec<&str> = Vec::new();
        for token in segment.split_whitespace().chain(std::iter::once("")) {
            if token.is_empty() || textproc::is_stop_word(token) {
                if !run.is_empty() {
                    let end = run.len().min(3);
                    phrases.push(run[..end].join(" "));
                    run.clear();
                }
                continue;
            }
            run.push(token);
        }
    }

    phrases
}

/// Title-cases each alphabetic run: first letter uppercased, rest lowered.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Smith\n\nSkills: Python, SQL, Docker, Machine Learning\nBuilt services with Flask and deployed on AWS.\nEducation: B.S. at State University";

    #[test]
    fn test_vocabulary_skills_found_title_cased() {
        let skills = extract_skills(SAMPLE);
        assert!(skills.contains(&"Python".to_string()), "{skills:?}");
        assert!(skills.contains(&"Sql".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"Flask".to_string()));
        assert!(skills.contains(&"Aws".to_string()));
    }

    #[test]
    fn test_exclusion_is_substring_based() {
        // "machine learning" and "matlab" both contain the excluded term
        // "ma"; "bash" contains "ba". Substring exclusion drops them even
        // though they sit in the vocabulary.
        let skills = extract_skills("Machine Learning, MATLAB and bash scripting");
        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("machine learning")), "{skills:?}");
        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("matlab")));
        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("bash")));
    }

    #[test]
    fn test_at_most_20_skills() {
        // A text that mentions the entire vocabulary.
        let text = SKILL_VOCABULARY.join(" and also ");
        let skills = extract_skills(&text);
        assert!(skills.len() <= 20, "{}", skills.len());
    }

    #[test]
    fn test_no_case_insensitive_duplicates() {
        let skills = extract_skills("python PYTHON Python sql SQL");
        let mut lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let before = lowered.len();
        lowered.sort();
        lowered.dedup();
        assert_eq!(before, lowered.len());
    }

    #[test]
    fn test_no_personal_info_terms() {
        let skills = extract_skills(SAMPLE);
        for skill in &skills {
            let lower = skill.to_lowercase();
            for term in PERSONAL_INFO_TERMS {
                assert!(!lower.contains(term), "{skill} contains {term}");
            }
        }
    }

    #[test]
    fn test_vocabulary_hits_precede_noun_phrases() {
        let skills = extract_skills("Orchestration tooling: kubernetes");
        let kube = skills.iter().position(|s| s == "Kubernetes");
        assert!(kube.is_some(), "{skills:?}");
        if let Some(other) = skills.iter().position(|s| s == "Orchestration Tooling") {
            assert!(kube.unwrap() < other);
        }
    }

    #[test]
    fn test_punctuated_vocabulary_terms_are_dropped() {
        // `c++` survives matching but fails the alphanumeric-with-spaces
        // filter after cleanup, same as dotted terms like node.js.
        let skills = extract_skills("Fluent in c++ and node.js");
        assert!(!skills.iter().any(|s| s.contains('+') || s.contains('.')), "{skills:?}");
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_title_case_matches_expected_shape() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("python3"), "Python3");
    }
}
