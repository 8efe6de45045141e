use serde::{Deserialize, Serialize};

/// A single job record as delivered by a job feed. Owned by the corpus;
/// the corpus is replaced wholesale on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub company: String,
    pub location: String,
    pub url: String,
    pub created_at: String,
}

/// Salary estimate for a title, already adjusted for location by the
/// matcher (the provider returns base figures only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub avg: u32,
}

/// Exact skill-overlap score against one job, computed per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    /// 0–100, rounded to 2 decimals. 0 when the job requires no skills.
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required_skills: usize,
    pub salary: SalaryRange,
}

/// One ranked entry returned by `recommend`. Carries two independent
/// metrics: cosine similarity over the TF-IDF space (textual relevance)
/// and exact skill overlap (literal intersection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub match_score: f64,
    /// Cosine similarity scaled to 0–100, rounded to 2 decimals.
    pub similarity_score: f64,
    pub matching_skills_count: usize,
    pub total_required_skills: usize,
    pub salary: SalaryRange,
}
