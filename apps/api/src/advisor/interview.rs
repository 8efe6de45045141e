//! Interview-question generation from a parsed résumé.
//!
//! Questions come from fixed template banks filled in with the candidate's
//! skills, employer, and project names. Output is sorted by relevance,
//! shuffled within each category, and interleaved across categories so a
//! candidate sees variety rather than twenty technical questions in a row.
//! The shuffle RNG is seedable for reproducible output.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Experience,
    Project,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One generated interview question. Ids are 1-based and sequential within
/// a single result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: u32,
    pub question: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
    pub relevance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

const TECHNICAL_TEMPLATES: &[(&str, Difficulty)] = &[
    ("Explain the concept of {skill} and how you've applied it in your projects.", Difficulty::Medium),
    ("What challenges have you faced while working with {skill} and how did you overcome them?", Difficulty::Hard),
    ("Describe a project where you used {skill} and what you learned from it.", Difficulty::Medium),
    ("How do you stay updated with the latest developments in {skill}?", Difficulty::Easy),
    ("What are the best practices you follow when working with {skill}?", Difficulty::Medium),
    ("Compare and contrast {skill} with similar technologies.", Difficulty::Hard),
    ("How would you optimize performance when working with {skill}?", Difficulty::Hard),
];

const BEHAVIORAL_TEMPLATES: &[(&str, Difficulty)] = &[
    ("Tell me about a time when you had to work under pressure. How did you handle it?", Difficulty::Medium),
    ("Describe a situation where you had to solve a complex problem. What was your approach?", Difficulty::Hard),
    ("Tell me about a time when you had to work with a difficult team member. How did you handle it?", Difficulty::Medium),
    ("Describe a situation where you had to learn a new technology quickly. How did you approach it?", Difficulty::Medium),
    ("Tell me about a time when you made a mistake. How did you handle it?", Difficulty::Medium),
    ("Describe a time when you had to convince someone to see things your way.", Difficulty::Hard),
    ("Tell me about a time when you had to make a difficult decision with incomplete information.", Difficulty::Hard),
];

const EXPERIENCE_TEMPLATES: &[(&str, Difficulty)] = &[
    ("Based on your experience at {company}, what was the most challenging project you worked on?", Difficulty::Hard),
    ("What was your biggest achievement in your previous role?", Difficulty::Medium),
    ("How did you contribute to your team's success at {company}?", Difficulty::Medium),
    ("What did you learn from your experience working on {project}?", Difficulty::Medium),
    ("How did you handle conflicts or disagreements in your previous role?", Difficulty::Hard),
    ("Describe a time when you had to adapt to significant changes at work.", Difficulty::Medium),
    ("What would you do differently in your previous role, knowing what you know now?", Difficulty::Hard),
];

const PROJECT_TEMPLATES: &[(&str, Difficulty)] = &[
    ("Tell me about the {project} project. What was your role and contribution?", Difficulty::Medium),
    ("What challenges did you face while working on {project} and how did you overcome them?", Difficulty::Hard),
    ("What technologies did you use in the {project} project and why?", Difficulty::Medium),
    ("What would you do differently if you were to work on {project} again?", Difficulty::Hard),
    ("How did the {project} project impact the business or organization?", Difficulty::Medium),
    ("Describe the most technically challenging aspect of the {project} project.", Difficulty::Hard),
    ("How did you ensure the quality and reliability of the {project} project?", Difficulty::Medium),
];

const GENERAL_QUESTIONS: &[(&str, Difficulty)] = &[
    ("Why do you want to work for our company?", Difficulty::Medium),
    ("Where do you see yourself in 5 years?", Difficulty::Medium),
    ("What are your strengths and weaknesses?", Difficulty::Medium),
    ("Why should we hire you?", Difficulty::Hard),
    ("What motivates you in your work?", Difficulty::Easy),
    ("How do you handle failure?", Difficulty::Medium),
    ("Describe your ideal work environment.", Difficulty::Easy),
];

/// Skills whose Medium technical questions get bumped to Hard.
const COMPLEX_SKILLS: &[&str] = &[
    "machine learning",
    "deep learning",
    "neural networks",
    "cloud architecture",
    "devops",
];

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:at|with|for)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)").unwrap()
});

static PROJECT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Project|System|Platform|Application))")
        .unwrap()
});

const MAX_QUESTIONS: usize = 20;
const MIN_BEFORE_GENERAL: usize = 10;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Generates up to 20 interview questions for the given résumé. A fixed
/// seed produces identical output for identical input.
pub fn predict_interview_questions(
    resume: &ResumeRecord,
    seed: Option<u64>,
) -> Vec<InterviewQuestion> {
    let mut questions: Vec<InterviewQuestion> = Vec::new();

    // Technical: top 5 skills, top 4 templates each. Complexity of the
    // skill itself can raise a Medium question to Hard.
    for (i, skill) in resume.skills.iter().take(5).enumerate() {
        let is_complex = COMPLEX_SKILLS
            .iter()
            .any(|c| c.eq_ignore_ascii_case(skill));
        for (template, base_difficulty) in TECHNICAL_TEMPLATES.iter().take(4) {
            let difficulty = match (base_difficulty, is_complex) {
                (Difficulty::Medium, true) => Difficulty::Hard,
                _ => *base_difficulty,
            };
            questions.push(InterviewQuestion {
                id: 0,
                question: template.replace("{skill}", skill),
                category: QuestionCategory::Technical,
                difficulty,
                relevance_score: round2(0.8 - (i as f64 * 0.1)),
                skill: Some(skill.clone()),
                project: None,
            });
        }
    }

    // Behavioral: top 5, fixed text.
    for (i, (text, difficulty)) in BEHAVIORAL_TEMPLATES.iter().take(5).enumerate() {
        questions.push(InterviewQuestion {
            id: 0,
            question: (*text).to_string(),
            category: QuestionCategory::Behavioral,
            difficulty: *difficulty,
            relevance_score: round2(0.7 - (i as f64 * 0.05)),
            skill: None,
            project: None,
        });
    }

    // Experience: top 3 templates against the first employer name found.
    if let Some(company) = COMPANY_RE
        .captures(&resume.experience)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    {
        for (i, (template, difficulty)) in EXPERIENCE_TEMPLATES.iter().take(3).enumerate() {
            questions.push(InterviewQuestion {
                id: 0,
                question: template.replace("{company}", &company),
                category: QuestionCategory::Experience,
                difficulty: *difficulty,
                relevance_score: round2(0.9 - (i as f64 * 0.1)),
                skill: None,
                project: None,
            });
        }
    }

    // Project: top 2 named projects, top 3 templates each.
    let project_names: Vec<String> = PROJECT_NAME_RE
        .captures_iter(&resume.projects)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .take(2)
        .collect();
    for (i, name) in project_names.iter().enumerate() {
        for (template, difficulty) in PROJECT_TEMPLATES.iter().take(3) {
            questions.push(InterviewQuestion {
                id: 0,
                question: template.replace("{project}", name),
                category: QuestionCategory::Project,
                difficulty: *difficulty,
                relevance_score: round2(0.85 - (i as f64 * 0.1)),
                skill: None,
                project: Some(name.clone()),
            });
        }
    }

    // Pad with general questions when the résumé was too thin.
    if questions.len() < MIN_BEFORE_GENERAL {
        for (i, (text, difficulty)) in GENERAL_QUESTIONS.iter().enumerate() {
            questions.push(InterviewQuestion {
                id: 0,
                question: (*text).to_string(),
                category: QuestionCategory::General,
                difficulty: *difficulty,
                relevance_score: round2(0.5 - (i as f64 * 0.05)),
                skill: None,
                project: None,
            });
        }
    }

    if questions.is_empty() {
        tracing::warn!("question generation produced nothing, using the generic fallback set");
        return fallback_questions();
    }

    // Most relevant first; stable sort keeps generation order for ties.
    questions.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Group by category in order of first appearance, shuffle within each
    // group, then round-robin across groups.
    let mut groups: Vec<(QuestionCategory, Vec<InterviewQuestion>)> = Vec::new();
    for q in questions {
        match groups.iter_mut().find(|(cat, _)| *cat == q.category) {
            Some((_, bucket)) => bucket.push(q),
            None => groups.push((q.category, vec![q])),
        }
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    for (_, bucket) in &mut groups {
        bucket.shuffle(&mut rng);
    }

    let max_len = groups.iter().map(|(_, b)| b.len()).max().unwrap_or(0);
    let mut interleaved: Vec<InterviewQuestion> = Vec::new();
    for i in 0..max_len {
        for (_, bucket) in &groups {
            if let Some(q) = bucket.get(i) {
                interleaved.push(q.clone());
            }
        }
    }

    let mut seen: Vec<String> = Vec::new();
    let mut unique: Vec<InterviewQuestion> = Vec::new();
    for q in interleaved {
        if seen.contains(&q.question) {
            continue;
        }
        seen.push(q.question.clone());
        unique.push(q);
    }

    unique.truncate(MAX_QUESTIONS);
    for (i, q) in unique.iter_mut().enumerate() {
        q.id = (i + 1) as u32;
    }
    unique
}

/// Generic questions returned when generation produced nothing usable.
pub fn fallback_questions() -> Vec<InterviewQuestion> {
    let fixed = [
        ("Tell me about yourself.", Difficulty::Easy),
        ("What interests you about this position?", Difficulty::Medium),
        ("What are your career goals?", Difficulty::Medium),
    ];
    fixed
        .iter()
        .enumerate()
        .map(|(i, (text, difficulty))| InterviewQuestion {
            id: (i + 1) as u32,
            question: (*text).to_string(),
            category: QuestionCategory::General,
            difficulty: *difficulty,
            relevance_score: 1.0,
            skill: None,
            project: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ResumeRecord {
        ResumeRecord {
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "Sql".to_string(),
            ],
            experience: "Senior Engineer at Acme Corp\nBuilt data pipelines".to_string(),
            projects: "Built the Billing Platform for internal finance teams".to_string(),
            ..ResumeRecord::default()
        }
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let questions = predict_interview_questions(&sample_resume(), Some(7));
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, (i + 1) as u32);
        }
    }

    #[test]
    fn test_capped_at_twenty() {
        let mut resume = sample_resume();
        resume.skills = vec![
            "Python", "Java", "Go", "Rust", "Sql", "React",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let questions = predict_interview_questions(&resume, Some(1));
        assert!(questions.len() <= 20);
    }

    #[test]
    fn test_complex_skill_elevates_difficulty() {
        let resume = ResumeRecord {
            skills: vec!["Machine Learning".to_string()],
            ..ResumeRecord::default()
        };
        let questions = predict_interview_questions(&resume, Some(3));
        let technical: Vec<_> = questions
            .iter()
            .filter(|q| q.category == QuestionCategory::Technical)
            .collect();
        assert!(!technical.is_empty());
        // Medium templates become Hard; the one Easy template stays Easy.
        assert!(technical
            .iter()
            .all(|q| q.difficulty != Difficulty::Medium));
    }

    #[test]
    fn test_company_name_fills_experience_templates() {
        let questions = predict_interview_questions(&sample_resume(), Some(5));
        assert!(questions
            .iter()
            .any(|q| q.question.contains("Acme Corp")));
    }

    #[test]
    fn test_project_name_extracted_and_used() {
        let questions = predict_interview_questions(&sample_resume(), Some(5));
        let project: Vec<_> = questions
            .iter()
            .filter(|q| q.category == QuestionCategory::Project)
            .collect();
        assert!(!project.is_empty());
        assert!(project
            .iter()
            .all(|q| q.question.contains("Billing Platform")));
    }

    #[test]
    fn test_empty_resume_still_yields_questions() {
        let questions = predict_interview_questions(&ResumeRecord::default(), Some(11));
        // Behavioral plus general padding; no skill-parameterized questions.
        assert!(questions.len() >= 10);
        assert!(questions
            .iter()
            .all(|q| q.category != QuestionCategory::Technical));
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let a = predict_interview_questions(&sample_resume(), Some(42));
        let b = predict_interview_questions(&sample_resume(), Some(42));
        let texts_a: Vec<&str> = a.iter().map(|q| q.question.as_str()).collect();
        let texts_b: Vec<&str> = b.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts_a, texts_b);
    }

    #[test]
    fn test_no_duplicate_question_text() {
        let questions = predict_interview_questions(&sample_resume(), Some(9));
        let mut texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        let before = texts.len();
        texts.sort();
        texts.dedup();
        assert_eq!(before, texts.len());
    }

    #[test]
    fn test_fallback_questions_shape() {
        let fallback = fallback_questions();
        assert_eq!(fallback.len(), 3);
        assert_eq!(fallback[0].id, 1);
        assert_eq!(fallback[0].question, "Tell me about yourself.");
    }
}
