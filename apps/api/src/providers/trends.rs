use serde::{Deserialize, Serialize};

use crate::models::job::SalaryRange;

/// Market direction label for a trending or predicted skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTrend {
    #[serde(rename = "increasing")]
    Increasing,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "rapidly increasing")]
    RapidlyIncreasing,
    #[serde(rename = "steadily increasing")]
    SteadilyIncreasing,
}

/// One in-demand skill as reported by the trending source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingSkill {
    pub skill: String,
    pub trend: SkillTrend,
    pub growth_rate: f64,
    pub description: String,
}

fn trending(skill: &str, trend: SkillTrend, growth_rate: f64, description: &str) -> TrendingSkill {
    TrendingSkill {
        skill: skill.to_string(),
        trend,
        growth_rate,
        description: description.to_string(),
    }
}

/// Skills currently in rising market demand, most aggressive growth first
/// within their source ordering.
pub fn trending_skills() -> Vec<TrendingSkill> {
    vec![
        trending(
            "Artificial Intelligence",
            SkillTrend::RapidlyIncreasing,
            35.2,
            "AI skills are in high demand across industries",
        ),
        trending(
            "Cloud Architecture",
            SkillTrend::SteadilyIncreasing,
            28.7,
            "Cloud skills continue to grow as more companies migrate to cloud platforms",
        ),
        trending(
            "Cybersecurity",
            SkillTrend::RapidlyIncreasing,
            32.1,
            "Security skills are critical as cyber threats become more sophisticated",
        ),
        trending(
            "Data Engineering",
            SkillTrend::SteadilyIncreasing,
            26.5,
            "Data engineering skills are essential for managing big data pipelines",
        ),
        trending(
            "DevOps",
            SkillTrend::Stable,
            15.3,
            "DevOps practices are now standard in software development",
        ),
    ]
}

const BASE_SALARIES: &[(&str, SalaryRange)] = &[
    ("Software Engineer", SalaryRange { min: 80_000, max: 140_000, avg: 110_000 }),
    ("Data Scientist", SalaryRange { min: 90_000, max: 160_000, avg: 125_000 }),
    ("DevOps Engineer", SalaryRange { min: 85_000, max: 150_000, avg: 117_500 }),
    ("Frontend Developer", SalaryRange { min: 70_000, max: 130_000, avg: 100_000 }),
    ("Backend Developer", SalaryRange { min: 75_000, max: 135_000, avg: 105_000 }),
    ("Machine Learning Engineer", SalaryRange { min: 100_000, max: 180_000, avg: 140_000 }),
    ("Full Stack Developer", SalaryRange { min: 75_000, max: 140_000, avg: 107_500 }),
    ("Cybersecurity Analyst", SalaryRange { min: 70_000, max: 130_000, avg: 100_000 }),
    ("Backend Engineer", SalaryRange { min: 80_000, max: 145_000, avg: 112_500 }),
];

const DEFAULT_SALARY: SalaryRange = SalaryRange {
    min: 60_000,
    max: 120_000,
    avg: 90_000,
};

/// Base salary estimate for a job title, unadjusted for location.
/// The location multiplier is the caller's responsibility.
pub fn salary_for(job_title: &str) -> SalaryRange {
    BASE_SALARIES
        .iter()
        .find(|(title, _)| title.eq_ignore_ascii_case(job_title))
        .map(|(_, range)| range.clone())
        .unwrap_or(DEFAULT_SALARY)
}

/// Cost-of-market multiplier by location substring.
pub fn location_multiplier(location: &str) -> f64 {
    let lower = location.to_lowercase();
    if lower.contains("san francisco") || lower.contains("new york") {
        1.3
    } else if lower.contains("seattle") || lower.contains("boston") {
        1.2
    } else if lower.contains("austin") || lower.contains("denver") {
        1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_skills_are_fixed_and_ordered() {
        let skills = trending_skills();
        assert_eq!(skills.len(), 5);
        assert_eq!(skills[0].skill, "Artificial Intelligence");
        assert_eq!(skills[0].trend, SkillTrend::RapidlyIncreasing);
    }

    #[test]
    fn test_trend_serializes_with_spaces() {
        let json = serde_json::to_string(&SkillTrend::RapidlyIncreasing).unwrap();
        assert_eq!(json, r#""rapidly increasing""#);
        let back: SkillTrend = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillTrend::RapidlyIncreasing);
    }

    #[test]
    fn test_salary_known_title_case_insensitive() {
        let salary = salary_for("data scientist");
        assert_eq!(salary.avg, 125_000);
    }

    #[test]
    fn test_salary_unknown_title_gets_default() {
        assert_eq!(salary_for("Basket Weaver"), DEFAULT_SALARY);
    }

    #[test]
    fn test_location_multipliers() {
        assert_eq!(location_multiplier("San Francisco, CA"), 1.3);
        assert_eq!(location_multiplier("Boston, MA"), 1.2);
        assert_eq!(location_multiplier("Austin, TX"), 1.1);
        assert_eq!(location_multiplier("Remote"), 1.0);
    }
}
