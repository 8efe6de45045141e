//! Section extraction — locates experience / education / projects blocks in
//! free-form résumé text.
//!
//! Résumés have no fixed schema, so each section runs an ordered strategy
//! chain and degrades instead of failing:
//!   1. labeled-section regexes, first match wins
//!   2. line scan keyed on section keywords
//!   3. (education only) degree/institution co-occurrence scan
//! Worst case is the section's fixed sentinel string, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

pub const EXPERIENCE_SENTINEL: &str = "No experience section found";
pub const EDUCATION_SENTINEL: &str = "No education section found";
pub const PROJECTS_SENTINEL: &str = "No projects section found";

/// Strategy table for one target section.
struct SectionSpec {
    /// Ordered labeled-section patterns; the first that matches wins.
    label_patterns: Vec<Regex>,
    /// Optional header echo stripped from regex-tier captures.
    label_strip: Option<Regex>,
    /// Collapsed blank lines are replaced with this.
    blank_join: &'static str,
    /// Keyword that opens the section during the line scan.
    scan_start: Regex,
    /// A different section's keyword; closes the scan once lines exist.
    scan_stop: Regex,
    sentinel: &'static str,
}

fn labeled(label: &str) -> Regex {
    // Capture runs to a blank line, the next `Word:` header, or end of text.
    Regex::new(&format!(
        r"(?i){label}[:\n\s]*([\s\S]*?)(?:\n\s*\n|\n[A-Z][a-z]+:|$)"
    ))
    .unwrap()
}

static EXPERIENCE: Lazy<SectionSpec> = Lazy::new(|| SectionSpec {
    label_patterns: [
        "work experience",
        "professional experience",
        "employment",
        "experience",
    ]
    .iter()
    .map(|l| labeled(l))
    .collect(),
    label_strip: None,
    blank_join: "\n",
    scan_start: Regex::new(r"(?i)(experience|employment|work)").unwrap(),
    scan_stop: Regex::new(r"(?i)(education|skills|objective)").unwrap(),
    sentinel: EXPERIENCE_SENTINEL,
});

static EDUCATION: Lazy<SectionSpec> = Lazy::new(|| SectionSpec {
    label_patterns: [
        "education",
        "academic background",
        "qualifications",
        "degrees",
    ]
    .iter()
    .map(|l| labeled(l))
    .collect(),
    label_strip: Some(
        Regex::new(r"(?im)^(education|academic background|qualifications|degrees)\s*:?").unwrap(),
    ),
    blank_join: "\n",
    scan_start: Regex::new(r"(?i)(education|academic|qualifications|degrees)").unwrap(),
    scan_stop: Regex::new(
        r"(?i)(experience|skills|work|employment|objective|summary|projects|references)",
    )
    .unwrap(),
    sentinel: EDUCATION_SENTINEL,
});

static PROJECTS: Lazy<SectionSpec> = Lazy::new(|| SectionSpec {
    label_patterns: ["project experience", "key projects", "projects"]
        .iter()
        .map(|l| labeled(l))
        .collect(),
    label_strip: Some(
        Regex::new(r"(?im)^(projects|project experience|key projects)\s*:?").unwrap(),
    ),
    blank_join: "\n\n",
    scan_start: Regex::new(r"(?i)(projects|project experience|key projects)").unwrap(),
    scan_stop: Regex::new(r"(?i)(education|skills|experience|work|employment)").unwrap(),
    sentinel: PROJECTS_SENTINEL,
});

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Lines that look like education content even outside a labeled section.
const EDUCATION_LINE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "b.sc",
    "m.sc",
    "gpa",
    "graduated",
    "diploma",
];

static DEGREE_INSTITUTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)(bachelor|master|phd|b\.s\.|m\.s\.|b\.a\.|m\.a\.|b\.sc|m\.sc)[^\n]*?(university|college|institute)",
        )
        .unwrap(),
        Regex::new(
            r"(?i)(university|college|institute)[^\n]*?(bachelor|master|phd|b\.s\.|m\.s\.|b\.a\.|m\.a\.|b\.sc|m\.sc)",
        )
        .unwrap(),
        Regex::new(r"(?i)(university|college|institute)[^\n]*?\d{4}[^\n]*?\d{4}").unwrap(),
    ]
});

pub fn extract_experience(text: &str) -> String {
    run(&EXPERIENCE, text, None)
}

pub fn extract_education(text: &str) -> String {
    let found = run(&EDUCATION, text, Some(&education_line_hit));
    if found != EDUCATION_SENTINEL {
        return found;
    }
    education_cooccurrence_tier(text).unwrap_or_else(|| EDUCATION_SENTINEL.to_string())
}

pub fn extract_projects(text: &str) -> String {
    run(&PROJECTS, text, None)
}

fn education_line_hit(line: &str) -> bool {
    let lower = line.to_lowercase();
    EDUCATION_LINE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn run(spec: &SectionSpec, text: &str, also_collect: Option<&dyn Fn(&str) -> bool>) -> String {
    if let Some(found) = regex_tier(spec, text) {
        return found;
    }
    line_scan_tier(spec, text, also_collect).unwrap_or_else(|| {
        tracing::debug!("no section located, using sentinel: {}", spec.sentinel);
        spec.sentinel.to_string()
    })
}

/// Tier 1: labeled-section regexes, first match wins. The capture is
/// blank-line-collapsed and stripped of a repeated header echo.
fn regex_tier(spec: &SectionSpec, text: &str) -> Option<String> {
    for pattern in &spec.label_patterns {
        if let Some(caps) = pattern.captures(text) {
            let mut section = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            section = BLANK_LINES.replace_all(&section, spec.blank_join).to_string();
            if let Some(strip) = &spec.label_strip {
                section = strip.replace_all(&section, "").trim().to_string();
            }
            if !section.is_empty() {
                return Some(section);
            }
        }
    }
    None
}

/// Tier 2: line scan. Opens on a section keyword and collects lines until a
/// line from a *different* section appears — but a stop line only terminates
/// once at least one line has been collected; before that it resets the
/// toggle and scanning continues. `also_collect` admits lines that look like
/// section content even outside the toggled region.
fn line_scan_tier(
    spec: &SectionSpec,
    text: &str,
    also_collect: Option<&dyn Fn(&str) -> bool>,
) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        if !in_section && spec.scan_start.is_match(line) {
            in_section = true;
            continue;
        }
        if in_section && spec.scan_stop.is_match(line) {
            if collected.is_empty() {
                in_section = false;
                continue;
            }
            break;
        }
        if in_section || also_collect.is_some_and(|f| f(line)) {
            collected.push(line);
        }
    }

    let joined = collected.join("\n").trim().to_string();
    (!joined.is_empty()).then_some(joined)
}

/// Tier 3 (education): degree/institution co-occurrences anywhere in the
/// text, deduplicated in first-seen order.
fn education_cooccurrence_tier(text: &str) -> Option<String> {
    let mut seen: Vec<String> = Vec::new();
    for pattern in DEGREE_INSTITUTION_RES.iter() {
        for m in pattern.find_iter(text) {
            let hit = m.as_str().trim().to_string();
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(&hit)) {
                seen.push(hit);
            }
        }
    }
    (!seen.is_empty()).then(|| seen.join("\n"))
}
