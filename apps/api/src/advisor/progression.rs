//! Future-skill prediction — a fixed progression map expanded against the
//! trending-skills source. Deterministic template expansion, not inference.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::providers::trends::{SkillTrend, TrendingSkill};

/// A predicted next skill with trend metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPrediction {
    pub skill: String,
    pub trend: SkillTrend,
    pub growth_rate: f64,
    /// 0.0–1.0; 0.8 when the successor matched a trending entry by name.
    pub similarity_score: f64,
    pub description: String,
}

/// Which skills commonly follow a given skill, strongest successor first.
static PROGRESSION_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        ("python", &["machine learning", "data science", "deep learning", "ai engineering", "flask", "django"]),
        ("javascript", &["react", "node.js", "vue.js", "angular", "full stack development", "express"]),
        ("java", &["spring", "microservices", "cloud architecture", "devops", "spring boot"]),
        ("react", &["react native", "next.js", "redux", "front end architecture", "gatsby"]),
        ("node.js", &["express", "mongodb", "microservices", "api development", "nestjs"]),
        ("machine learning", &["deep learning", "neural networks", "computer vision", "nlp", "tensorflow", "pytorch"]),
        ("data science", &["big data", "data engineering", "ai", "statistics", "pandas", "numpy"]),
        ("docker", &["kubernetes", "containerization", "devops", "cloud", "docker swarm"]),
        ("aws", &["cloud architecture", "serverless", "lambda", "cloud security", "ec2", "s3"]),
        ("sql", &["postgresql", "mysql", "database design", "data modeling", "mongodb"]),
        ("html", &["css", "responsive design", "front end development", "sass"]),
        ("css", &["sass", "bootstrap", "tailwind", "responsive design", "material ui"]),
        ("tensorflow", &["pytorch", "keras", "deep learning", "computer vision"]),
        ("pytorch", &["tensorflow", "deep learning", "nlp", "computer vision"]),
        ("angular", &["angularjs", "typescript", "rxjs", "ngrx"]),
        ("vue.js", &["nuxt.js", "vuex", "typescript", "vue router"]),
        ("spring", &["spring boot", "spring security", "microservices", "hibernate"]),
        ("kubernetes", &["helm", "istio", "prometheus", "docker"]),
        ("react native", &["flutter", "ionic", "xamarin", "expo"]),
        ("graphql", &["apollo", "relay", "prisma", "nestjs"]),
    ];
    entries.iter().copied().collect()
});

const MAX_PREDICTIONS: usize = 5;
const SUCCESSORS_PER_SKILL: usize = 3;

/// Stable FNV-1a 64-bit hash. Used for the fallback growth rate so output
/// is identical across processes and platforms.
fn fnv1a64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in s.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Fallback growth rate in 25.0–44.0 for successors with no trending entry.
fn fallback_growth_rate(skill: &str) -> f64 {
    (25 + (fnv1a64(skill) % 20)) as f64
}

/// Predicts up to five future skills for the caller's current skill set.
///
/// Successors come from the progression map (up to three per held skill),
/// enriched with trend metadata when they match a trending entry by name.
/// Deduplicated by lowercase name, backfilled from trending skills to five,
/// then sorted descending by (growth_rate, similarity_score).
pub fn predict_future_skills(
    current_skills: &[String],
    trending: &[TrendingSkill],
) -> Vec<SkillPrediction> {
    let mut predictions: Vec<SkillPrediction> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for skill in current_skills {
        let Some(successors) = PROGRESSION_MAP.get(skill.to_lowercase().as_str()) else {
            continue;
        };
        for successor in successors.iter().take(SUCCESSORS_PER_SKILL) {
            let key = successor.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            let trend_info = trending
                .iter()
                .find(|t| t.skill.eq_ignore_ascii_case(successor));
            let description = match trend_info {
                Some(t) => format!(
                    "Natural progression from {skill} expertise - {}",
                    t.description
                ),
                None => format!("Natural progression from {skill} expertise"),
            };
            predictions.push(SkillPrediction {
                skill: title_words(successor),
                trend: trend_info.map_or(SkillTrend::Increasing, |t| t.trend),
                growth_rate: trend_info.map_or_else(|| fallback_growth_rate(successor), |t| t.growth_rate),
                similarity_score: if trend_info.is_some() { 0.8 } else { 0.0 },
                description,
            });
        }
    }

    // Backfill from the trending source when the map produced fewer than 5.
    if predictions.len() < MAX_PREDICTIONS {
        for t in trending {
            let key = t.skill.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            predictions.push(SkillPrediction {
                skill: t.skill.clone(),
                trend: t.trend,
                growth_rate: t.growth_rate,
                similarity_score: 0.0,
                description: t.description.clone(),
            });
            if predictions.len() >= MAX_PREDICTIONS {
                break;
            }
        }
    }

    predictions.sort_by(|a, b| {
        (b.growth_rate, b.similarity_score)
            .partial_cmp(&(a.growth_rate, a.similarity_score))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    predictions.truncate(MAX_PREDICTIONS);
    predictions
}

/// Uppercases the first letter of each whitespace-separated word.
fn title_words(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
