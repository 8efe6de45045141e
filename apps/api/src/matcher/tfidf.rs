//! Sparse TF-IDF vector space with cosine similarity.
//!
//! Vocabulary and inverse document frequencies are fixed at fit time;
//! queries are projected with `transform`, where out-of-vocabulary terms
//! contribute zero weight. Refitting is the only way to change the space.

use std::collections::HashMap;

/// Sparse vector: (term index, weight) pairs sorted by index.
pub type SparseVec = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
    doc_vectors: Vec<SparseVec>,
}

impl TfIdfModel {
    /// Fits vocabulary, smoothed idf, and one L2-normalized vector per
    /// document. Documents are expected to be pre-normalized text; tokens
    /// shorter than two characters are ignored.
    pub fn fit(docs: &[String]) -> Self {
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_term_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(docs.len());

        for doc in docs {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for token in tokenize(doc) {
                let next_id = vocab.len();
                let id = *vocab.entry(token.to_string()).or_insert(next_id);
                *counts.entry(id).or_insert(0) += 1;
            }
            doc_term_counts.push(counts);
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1, never zero or negative.
        let n_docs = docs.len();
        let mut df = vec![0usize; vocab.len()];
        for counts in &doc_term_counts {
            for &id in counts.keys() {
                df[id] += 1;
            }
        }
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n_docs as f64) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let doc_vectors = doc_term_counts
            .into_iter()
            .map(|counts| weigh_and_normalize(counts, &idf))
            .collect();

        TfIdfModel {
            vocab,
            idf,
            doc_vectors,
        }
    }

    /// Projects a query document into the fitted space. Terms outside the
    /// fitted vocabulary are dropped; an all-OOV or empty query yields the
    /// zero vector.
    pub fn transform(&self, doc: &str) -> SparseVec {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(doc) {
            if let Some(&id) = self.vocab.get(token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        weigh_and_normalize(counts, &self.idf)
    }

    /// Cosine similarity between a query vector and fitted document `i`.
    /// Both vectors are unit length, so this is a sparse dot product.
    pub fn similarity_to_doc(&self, query: &SparseVec, i: usize) -> f64 {
        dot(query, &self.doc_vectors[i])
    }

    pub fn doc_count(&self) -> usize {
        self.doc_vectors.len()
    }
}

fn tokenize(doc: &str) -> impl Iterator<Item = &str> {
    doc.split_whitespace().filter(|t| t.len() >= 2)
}

fn weigh_and_normalize(counts: HashMap<usize, usize>, idf: &[f64]) -> SparseVec {
    let mut vec: SparseVec = counts
        .into_iter()
        .map(|(id, count)| (id, count as f64 * idf[id]))
        .collect();
    vec.sort_by_key(|&(id, _)| id);

    let norm = vec.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in &mut vec {
            entry.1 /= norm;
        }
    }
    vec
}

fn dot(a: &SparseVec, b: &SparseVec) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_doc_has_similarity_one() {
        let model = TfIdfModel::fit(&docs(&["python flask api", "rust tokio axum"]));
        let query = model.transform("python flask api");
        let sim = model.similarity_to_doc(&query, 0);
        assert!((sim - 1.0).abs() < 1e-9, "sim = {sim}");
    }

    #[test]
    fn test_disjoint_docs_have_zero_similarity() {
        let model = TfIdfModel::fit(&docs(&["python flask", "rust tokio"]));
        let query = model.transform("python flask");
        assert_eq!(model.similarity_to_doc(&query, 1), 0.0);
    }

    #[test]
    fn test_oov_terms_contribute_zero() {
        let model = TfIdfModel::fit(&docs(&["python flask", "rust tokio"]));
        let with_oov = model.transform("python flask quantum blockchain");
        let without = model.transform("python flask");
        let a = model.similarity_to_doc(&with_oov, 0);
        let b = model.similarity_to_doc(&without, 0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_is_zero_vector() {
        let model = TfIdfModel::fit(&docs(&["python flask", "rust tokio"]));
        let query = model.transform("");
        assert!(query.is_empty());
        assert_eq!(model.similarity_to_doc(&query, 0), 0.0);
    }

    #[test]
    fn test_similarity_in_unit_range() {
        let model = TfIdfModel::fit(&docs(&[
            "python machine learning pandas",
            "python web flask",
            "rust systems",
        ]));
        let query = model.transform("python pandas");
        for i in 0..model.doc_count() {
            let sim = model.similarity_to_doc(&query, i);
            assert!((0.0..=1.0 + 1e-9).contains(&sim), "sim = {sim}");
        }
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common() {
        // "python" appears in both docs, "pandas" only in one; a query for
        // both should land closer to the pandas doc.
        let model = TfIdfModel::fit(&docs(&["python pandas", "python flask"]));
        let query = model.transform("pandas");
        assert!(model.similarity_to_doc(&query, 0) > model.similarity_to_doc(&query, 1));
    }

    #[test]
    fn test_single_char_tokens_ignored() {
        let model = TfIdfModel::fit(&docs(&["r c python"]));
        let query = model.transform("r c");
        assert!(query.is_empty());
    }
}
