// Job matching: TF-IDF similarity ranking and exact skill-overlap scoring.
// The two metrics are independent and both are surfaced — overlap measures
// literal skill intersection, cosine similarity measures textual relevance.

pub mod engine;
pub mod handlers;
pub mod tfidf;
