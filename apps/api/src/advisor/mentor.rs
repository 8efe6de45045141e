//! Rule-based career mentor. Classifies the query into an intent from
//! fixed keyword lists, then fills a response template from the caller's
//! skills, experience, and the current job corpus.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;
use crate::providers::trends::TrendingSkill;

/// Query intent, checked in declaration order; first keyword hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorIntent {
    Learning,
    Project,
    Career,
    Resource,
    General,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorReply {
    pub response: String,
    pub intent: MentorIntent,
    pub skills_analyzed: Vec<String>,
    pub confidence: f64,
}

const LEARNING_KEYWORDS: &[&str] = &[
    "learn", "skill", "course", "study", "education", "improve", "develop",
];
const PROJECT_KEYWORDS: &[&str] = &["project", "build", "create", "develop", "make"];
const CAREER_KEYWORDS: &[&str] = &["career", "job", "position", "role", "work", "employment"];
const RESOURCE_KEYWORDS: &[&str] = &[
    "resource", "youtube", "coursera", "udemy", "tutorial", "guide",
];

/// Project idea templates keyed by skill family.
const PROJECT_TEMPLATES: &[(&str, &[&str])] = &[
    ("python", &[
        "Build a web scraper to collect and analyze data from multiple sources",
        "Create a machine learning model to predict stock prices or weather patterns",
        "Develop a personal finance tracker with data visualization",
    ]),
    ("javascript", &[
        "Build a real-time chat application using WebSockets",
        "Create a task management app with drag-and-drop functionality",
        "Develop a browser extension for productivity enhancement",
    ]),
    ("react", &[
        "Build a social media dashboard with real-time updates",
        "Create an e-commerce platform with payment integration",
        "Develop a portfolio website with interactive animations",
    ]),
    ("data science", &[
        "Analyze public health data to identify trends and patterns",
        "Build a recommendation system for movies or products",
        "Create a dashboard to visualize business metrics",
    ]),
    ("machine learning", &[
        "Develop an image classification model for specific use cases",
        "Create a natural language processing tool for sentiment analysis",
        "Build a predictive maintenance system for industrial equipment",
    ]),
];

/// Learning resource lists keyed by skill family.
const RESOURCE_TABLE: &[(&str, &[&str])] = &[
    ("python", &[
        "Coursera: Python for Everybody by University of Michigan",
        "YouTube: Corey Schafer's Python Tutorials",
        "Book: 'Automate the Boring Stuff with Python'",
    ]),
    ("javascript", &[
        "freeCodeCamp: JavaScript Algorithms and Data Structures",
        "YouTube: The Net Ninja's JavaScript Tutorials",
        "Book: 'Eloquent JavaScript' by Marijn Haverbeke",
    ]),
    ("react", &[
        "Udemy: React - The Complete Guide by Maximilian Schwarzmuller",
        "YouTube: React Tutorial for Beginners by Programming with Mosh",
        "Official React Documentation and Tutorial",
    ]),
    ("data science", &[
        "Coursera: IBM Data Science Professional Certificate",
        "Kaggle Learn Micro-Courses",
        "Book: 'Python for Data Analysis' by Wes McKinney",
    ]),
    ("machine learning", &[
        "Coursera: Machine Learning by Andrew Ng",
        "fast.ai: Practical Deep Learning for Coders",
        "Book: 'Hands-On Machine Learning' by Aurelien Geron",
    ]),
];

fn classify_intent(query: &str) -> MentorIntent {
    let lower = query.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    if hit(LEARNING_KEYWORDS) {
        MentorIntent::Learning
    } else if hit(PROJECT_KEYWORDS) {
        MentorIntent::Project
    } else if hit(CAREER_KEYWORDS) {
        MentorIntent::Career
    } else if hit(RESOURCE_KEYWORDS) {
        MentorIntent::Resource
    } else {
        MentorIntent::General
    }
}

/// Skills from the résumé whose name occurs verbatim in the query.
fn skills_in_query(query: &str, skills: &[String]) -> Vec<String> {
    let lower = query.to_lowercase();
    skills
        .iter()
        .filter(|s| lower.contains(&s.to_lowercase()))
        .cloned()
        .collect()
}

/// First `n` characters, not bytes, so truncation never splits a char.
fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Entries from a keyed table matching any of the given skills. Matching is
/// bidirectional substring, so "Machine Learning" hits the
/// "machine learning" key and "js" style short names still resolve.
fn table_hits(
    table: &'static [(&'static str, &'static [&'static str])],
    skills: &[String],
) -> Vec<&'static str> {
    let mut hits = Vec::new();
    for skill in skills {
        let skill_lower = skill.to_lowercase();
        for (key, entries) in table {
            if skill_lower.contains(key) || key.contains(skill_lower.as_str()) {
                hits.extend_from_slice(entries);
            }
        }
    }
    hits
}

fn learning_guidance(query: &str, skills: &[String], trending: &[TrendingSkill]) -> String {
    let query_skills = skills_in_query(query, skills);
    if let Some(skill) = query_skills.first() {
        return format!(
            "To improve your {skill} skills, I recommend: 1) Practice with real-world projects, \
             2) Take online courses from platforms like Coursera or Udemy, \
             3) Join relevant communities for knowledge sharing, \
             4) Contribute to open-source projects. \
             Would you like specific resource recommendations for {skill}?"
        );
    }

    let held: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    match trending.iter().find(|t| !held.contains(&t.skill.to_lowercase())) {
        Some(suggestion) => format!(
            "Based on current market trends, I recommend learning {}. {}. \
             With a growth rate of {}%, this skill is highly valuable right now.",
            suggestion.skill, suggestion.description, suggestion.growth_rate
        ),
        None => "You have a strong skill set! To continue growing, consider deepening your \
                 expertise in your current skills or exploring adjacent technologies."
            .to_string(),
    }
}

fn project_suggestions(query: &str, skills: &[String]) -> String {
    let query_skills = skills_in_query(query, skills);
    let basis: Vec<String> = if query_skills.is_empty() {
        skills.iter().take(3).cloned().collect()
    } else {
        query_skills
    };
    let suggestions = table_hits(PROJECT_TEMPLATES, &basis);

    match suggestions.first() {
        Some(first) => {
            let second = suggestions
                .get(1)
                .copied()
                .unwrap_or("Build a personal website showcasing your work");
            let third = suggestions
                .get(2)
                .copied()
                .unwrap_or("Contribute to an open-source project");
            format!(
                "Here are some project ideas to prove your skills: 1) {first}, 2) {second}, \
                 3) {third}. These projects will help demonstrate your practical abilities \
                 to potential employers."
            )
        }
        None => "I'd be happy to suggest projects! Could you tell me more about what specific \
                 skills you'd like to showcase or what type of project interests you?"
            .to_string(),
    }
}

fn career_advice(skills: &[String], experience: &str, postings: &[JobPosting]) -> String {
    // Rank the first ten postings by how many of the caller's skills appear
    // in their requirements; insertion order breaks ties.
    let mut matches: Vec<(&str, usize)> = Vec::new();
    for job in postings.iter().take(10) {
        let required = job.required_skills.join(" ").to_lowercase();
        let count = skills
            .iter()
            .filter(|s| required.contains(&s.to_lowercase()))
            .count();
        if count > 0 {
            matches.push((job.title.as_str(), count));
        }
    }
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    match matches.first() {
        Some((title, count)) => format!(
            "Based on your skills, you're well-suited for roles like {title}. You match \
             {count} required skills for this position. To strengthen your profile, consider \
             gaining experience in the remaining required skills. Your current experience in \
             '{}...' shows good foundation. Would you like specific advice on transitioning \
             to {title}?",
            truncate_chars(experience, 100)
        ),
        None => format!(
            "Your skill set is quite unique! To enhance your career prospects, consider \
             specializing in a specific domain or acquiring skills that are in high demand. \
             Based on your experience '{}...', you might want to explore roles that value \
             diverse skill sets.",
            truncate_chars(experience, 100)
        ),
    }
}

fn resource_recommendations(query: &str, skills: &[String]) -> String {
    let query_skills = skills_in_query(query, skills);
    let basis: Vec<String> = if query_skills.is_empty() {
        skills.iter().take(3).cloned().collect()
    } else {
        query_skills
    };
    let recommendations = table_hits(RESOURCE_TABLE, &basis);

    match recommendations.first() {
        Some(first) => {
            let second = recommendations
                .get(1)
                .copied()
                .unwrap_or("Join relevant online communities");
            let third = recommendations
                .get(2)
                .copied()
                .unwrap_or("Practice on platforms like HackerRank or LeetCode");
            format!(
                "Here are some excellent resources: 1) {first}, 2) {second}, 3) {third}. \
                 These will help you master the skills effectively."
            )
        }
        None => "I recommend starting with foundational resources like freeCodeCamp, Coursera, \
                 or edX courses. These platforms offer comprehensive learning paths for various \
                 technologies. What specific skill would you like to focus on?"
            .to_string(),
    }
}

fn general_guidance(resume: &ResumeRecord) -> String {
    let top_skills: Vec<&str> = resume.skills.iter().take(5).map(String::as_str).collect();
    format!(
        "You have skills in {} and experience in '{}...'. Here's some general advice: \
         Focus on building a strong portfolio that showcases your skills and projects. \
         Network with professionals in your field through industry events. \
         Stay updated with industry trends by following relevant blogs and publications. \
         Consider obtaining certifications in your area of expertise to validate your skills. \
         Set specific, measurable career goals and create a plan to achieve them. \
         Would you like more specific guidance on any particular aspect of your career \
         development?",
        top_skills.join(", "),
        truncate_chars(&resume.experience, 50)
    )
}

/// Answers a free-form career question against the caller's résumé and the
/// current job corpus.
pub fn mentor_response(
    query: &str,
    resume: &ResumeRecord,
    trending: &[TrendingSkill],
    postings: &[JobPosting],
) -> MentorReply {
    let intent = classify_intent(query);
    let response = match intent {
        MentorIntent::Learning => learning_guidance(query, &resume.skills, trending),
        MentorIntent::Project => project_suggestions(query, &resume.skills),
        MentorIntent::Career => career_advice(&resume.skills, &resume.experience, postings),
        MentorIntent::Resource => resource_recommendations(query, &resume.skills),
        MentorIntent::General | MentorIntent::Error => general_guidance(resume),
    };

    MentorReply {
        response,
        intent,
        skills_analyzed: resume.skills.iter().take(5).cloned().collect(),
        confidence: 0.85,
    }
}

/// Reply used when a request cannot be processed at all, such as an empty
/// query.
pub fn fallback_reply() -> MentorReply {
    MentorReply {
        response: "I'm sorry, I'm having trouble processing your request right now. \
                   Could you rephrase your question?"
            .to_string(),
        intent: MentorIntent::Error,
        skills_analyzed: Vec::new(),
        confidence: 0.0,
    }
}
