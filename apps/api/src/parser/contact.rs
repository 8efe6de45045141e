use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Extracts name, emails, and phone numbers.
///
/// Emails and phones are all non-overlapping matches in order of appearance.
/// The name is the first of the first three lines that is non-empty after
/// trimming and contains an alphabetic character; empty string if none does.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let emails = EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phones = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let name = text
        .lines()
        .take(3)
        .map(str::trim)
        .find(|line| !line.is_empty() && line.chars().any(|c| c.is_alphabetic()))
        .unwrap_or("")
        .to_string();

    ContactInfo {
        name,
        emails,
        phones,
    }
}
