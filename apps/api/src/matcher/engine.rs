//! Job corpus with its fitted TF-IDF space, and the engine that keeps the
//! two in sync.
//!
//! Invariant: a `JobIndex` only ever exists with vectors fit against its own
//! postings — `fit` is the sole constructor, and the engine swaps whole
//! indexes under a write lock so a query can never see a vector space from a
//! different corpus generation.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matcher::tfidf::TfIdfModel;
use crate::models::job::{JobPosting, MatchResult, Recommendation, SalaryRange};
use crate::providers::jobs::JobFeed;
use crate::providers::trends;
use crate::textproc;

pub const DEFAULT_TOP_N: usize = 5;

/// An immutable corpus snapshot: postings plus their fitted vector space.
pub struct JobIndex {
    postings: Vec<JobPosting>,
    model: TfIdfModel,
}

impl JobIndex {
    /// Fits the vector space over every posting's combined text. This is
    /// the only constructor, so postings and vectors cannot drift apart.
    pub fn fit(postings: Vec<JobPosting>) -> Self {
        let docs: Vec<String> = postings.iter().map(job_document).collect();
        JobIndex {
            model: TfIdfModel::fit(&docs),
            postings,
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Ranks all postings by cosine similarity to the résumé's skill text,
    /// descending, ties broken by corpus order. Each entry also carries the
    /// independently computed exact skill overlap and a location-adjusted
    /// salary estimate.
    pub fn recommend(&self, resume_skills: &[String], top_n: usize) -> Vec<Recommendation> {
        let skill_text = textproc::normalize(&resume_skills.join(" "));
        let query = self.model.transform(&skill_text);

        let mut ranked: Vec<(usize, f64)> = (0..self.postings.len())
            .map(|i| (i, self.model.similarity_to_doc(&query, i)))
            .collect();
        // Stable sort: equal similarities keep corpus order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .into_iter()
            .take(top_n)
            .map(|(i, similarity)| {
                let job = &self.postings[i];
                let (matching, _missing) = skill_overlap(resume_skills, &job.required_skills);
                Recommendation {
                    id: job.id.clone(),
                    title: job.title.clone(),
                    company: job.company.clone(),
                    location: job.location.clone(),
                    url: job.url.clone(),
                    match_score: overlap_percentage(matching.len(), job.required_skills.len()),
                    similarity_score: round2(similarity * 100.0),
                    matching_skills_count: matching.len(),
                    total_required_skills: job.required_skills.len(),
                    salary: adjusted_salary(&job.title, &job.location),
                }
            })
            .collect()
    }

    /// Exact skill-set overlap against one job, looked up by
    /// case-insensitive title. Independent of the vector space.
    pub fn match_score(
        &self,
        resume_skills: &[String],
        job_title: &str,
    ) -> Result<MatchResult, AppError> {
        let job = self
            .postings
            .iter()
            .find(|j| j.title.eq_ignore_ascii_case(job_title))
            .ok_or_else(|| {
                AppError::NotFound(format!("Job title '{job_title}' not found in corpus"))
            })?;

        let (matching, missing) = skill_overlap(resume_skills, &job.required_skills);
        Ok(MatchResult {
            job_title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            url: job.url.clone(),
            match_score: overlap_percentage(matching.len(), job.required_skills.len()),
            matching_skills: matching.into_iter().collect(),
            missing_skills: missing.into_iter().collect(),
            total_required_skills: job.required_skills.len(),
            salary: adjusted_salary(&job.title, &job.location),
        })
    }
}

fn job_document(job: &JobPosting) -> String {
    textproc::normalize(&format!(
        "{} {} {}",
        job.title,
        job.description,
        job.required_skills.join(" ")
    ))
}

/// Lowercased set intersection and difference, in sorted order.
fn skill_overlap(
    resume_skills: &[String],
    required: &[String],
) -> (BTreeSet<String>, BTreeSet<String>) {
    let resume: BTreeSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let required: BTreeSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    let matching = required.intersection(&resume).cloned().collect();
    let missing = required.difference(&resume).cloned().collect();
    (matching, missing)
}

/// 100 × matching / required, 0 when the job requires no skills.
fn overlap_percentage(matching: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    round2(matching as f64 / required as f64 * 100.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn adjusted_salary(title: &str, location: &str) -> SalaryRange {
    let base = trends::salary_for(title);
    let m = trends::location_multiplier(location);
    SalaryRange {
        min: (base.min as f64 * m) as u32,
        max: (base.max as f64 * m) as u32,
        avg: (base.avg as f64 * m) as u32,
    }
}

/// Owns the live `JobIndex` and the feed it is refreshed from.
///
/// Refresh-then-query is atomic: `refresh` holds the write lock across the
/// refit, and every query clones out of a read-locked snapshot. A failed
/// fetch keeps the last-good index.
pub struct CareerEngine {
    feed: Arc<dyn JobFeed>,
    index: RwLock<JobIndex>,
}

impl CareerEngine {
    pub async fn bootstrap(feed: Arc<dyn JobFeed>) -> Self {
        let postings = match feed.fetch().await {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Initial job fetch failed, starting with an empty corpus: {e}");
                Vec::new()
            }
        };
        info!("Job corpus fitted with {} postings", postings.len());
        CareerEngine {
            feed,
            index: RwLock::new(JobIndex::fit(postings)),
        }
    }

    /// Re-fetches the corpus and refits the vector space. On fetch failure
    /// the previous index stays in place.
    pub async fn refresh(&self) -> usize {
        match self.feed.fetch().await {
            Ok(postings) => {
                let count = postings.len();
                let mut index = self.index.write().await;
                *index = JobIndex::fit(postings);
                info!("Job corpus refreshed: {count} postings");
                count
            }
            Err(e) => {
                let index = self.index.read().await;
                warn!(
                    "Job fetch failed, keeping last-good corpus of {} postings: {e}",
                    index.postings().len()
                );
                index.postings().len()
            }
        }
    }

    pub async fn recommend(&self, resume_skills: &[String], top_n: usize) -> Vec<Recommendation> {
        self.index.read().await.recommend(resume_skills, top_n)
    }

    pub async fn match_score(
        &self,
        resume_skills: &[String],
        job_title: &str,
    ) -> Result<MatchResult, AppError> {
        self.index.read().await.match_score(resume_skills, job_title)
    }

    pub async fn postings_snapshot(&self) -> Vec<JobPosting> {
        self.index.read().await.postings().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn job(title: &str, location: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: format!("{title} role"),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            company: "Acme".to_string(),
            location: location.to_string(),
            url: String::new(),
            created_at: "2023-05-01".to_string(),
        }
    }

    fn sample_index() -> JobIndex {
        JobIndex::fit(vec![
            job(
                "Software Engineer",
                "Remote",
                &["Python", "JavaScript", "React", "REST API", "SQL"],
            ),
            job("Data Scientist", "Boston, MA", &["Python", "R", "Machine Learning"]),
            job("Oddball Role", "Remote", &[]),
        ])
    }

    #[test]
    fn test_match_score_known_scenario() {
        let index = sample_index();
        let result = index
            .match_score(&skills(&["Python", "SQL"]), "Software Engineer")
            .unwrap();
        assert_eq!(result.match_score, 40.0);
        assert_eq!(result.matching_skills, vec!["python", "sql"]);
        assert_eq!(
            result.missing_skills,
            vec!["javascript", "react", "rest api"]
        );
        assert_eq!(result.total_required_skills, 5);
    }

    #[test]
    fn test_match_score_title_lookup_is_case_insensitive() {
        let index = sample_index();
        assert!(index.match_score(&skills(&["Python"]), "software engineer").is_ok());
    }

    #[test]
    fn test_match_score_unknown_title_is_not_found() {
        let index = sample_index();
        let err = index.match_score(&skills(&["Python"]), "Astronaut").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_match_score_zero_required_skills_is_zero_not_nan() {
        let index = sample_index();
        let result = index.match_score(&skills(&["Python"]), "Oddball Role").unwrap();
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.total_required_skills, 0);
    }

    #[test]
    fn test_match_score_superset_is_100() {
        let index = sample_index();
        let result = index
            .match_score(
                &skills(&["python", "r", "machine learning", "sql"]),
                "Data Scientist",
            )
            .unwrap();
        assert_eq!(result.match_score, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_recommend_caps_at_top_n() {
        let index = sample_index();
        assert_eq!(index.recommend(&skills(&["Python"]), 2).len(), 2);
        assert_eq!(index.recommend(&skills(&["Python"]), 10).len(), 3);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let index = sample_index();
        let a = index.recommend(&skills(&["Python", "SQL"]), 5);
        let b = index.recommend(&skills(&["Python", "SQL"]), 5);
        let titles_a: Vec<&str> = a.iter().map(|r| r.title.as_str()).collect();
        let titles_b: Vec<&str> = b.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn test_recommend_empty_skills_still_returns_top_n() {
        // An empty skill list projects to the zero vector; every similarity
        // is zero and the stable sort preserves corpus order.
        let index = sample_index();
        let recs = index.recommend(&[], 3);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "Software Engineer");
        assert!(recs.iter().all(|r| r.similarity_score == 0.0));
    }

    #[test]
    fn test_recommend_ranks_relevant_job_first() {
        let index = sample_index();
        let recs = index.recommend(&skills(&["Machine Learning", "R"]), 3);
        assert_eq!(recs[0].title, "Data Scientist");
        assert!(recs[0].similarity_score > 0.0);
    }

    #[test]
    fn test_recommend_salary_is_location_adjusted() {
        let index = sample_index();
        let recs = index.recommend(&skills(&["Python"]), 3);
        let ds = recs.iter().find(|r| r.title == "Data Scientist").unwrap();
        // Boston multiplier 1.2 over the base 125k average.
        assert_eq!(ds.salary.avg, 150_000);
    }

    #[tokio::test]
    async fn test_engine_refresh_keeps_last_good_on_failure() {
        struct FlakyFeed {
            fail: std::sync::atomic::AtomicBool,
        }

        #[async_trait::async_trait]
        impl JobFeed for FlakyFeed {
            async fn fetch(&self) -> anyhow::Result<Vec<JobPosting>> {
                if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
                    anyhow::bail!("feed unavailable");
                }
                Ok(vec![job("Software Engineer", "Remote", &["Python"])])
            }
        }

        let feed = Arc::new(FlakyFeed {
            fail: std::sync::atomic::AtomicBool::new(false),
        });
        let engine = CareerEngine::bootstrap(feed.clone()).await;
        assert_eq!(engine.postings_snapshot().await.len(), 1);

        feed.fail.store(true, std::sync::atomic::Ordering::SeqCst);
        let kept = engine.refresh().await;
        assert_eq!(kept, 1);
        assert!(engine
            .match_score(&skills(&["Python"]), "Software Engineer")
            .await
            .is_ok());
    }
}
