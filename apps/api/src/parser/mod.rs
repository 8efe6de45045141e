// Résumé parsing pipeline: contact + skill extraction and section location.
// Extraction never fails — missing sections come back as sentinel strings.

pub mod contact;
pub mod handlers;
pub mod sections;
pub mod skills;

use std::path::Path;

use crate::errors::AppError;
use crate::extract::{self, DocumentKind};
use crate::models::resume::ResumeRecord;

/// Parses raw résumé text into a structured record. Total: any text yields
/// a record, with sentinels standing in for sections that were not found.
pub fn parse_text(text: &str) -> ResumeRecord {
    ResumeRecord {
        contact: contact::extract_contact_info(text),
        skills: skills::extract_skills(text),
        experience: sections::extract_experience(text),
        education: sections::extract_education(text),
        projects: sections::extract_projects(text),
    }
}

/// Reads a document from disk and parses it. The only failure mode is text
/// extraction itself; parsing the extracted text cannot fail.
pub fn parse_file(path: &Path, kind: DocumentKind) -> Result<ResumeRecord, AppError> {
    let text = extract::extract_text(path, kind)?;
    Ok(parse_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::PROJECTS_SENTINEL;

    const FULL_RESUME: &str = "John Doe\njohn.doe@example.com\n(555) 123-4567\n\nExperience:\nSoftware Engineer at Acme Corp\nBuilt REST APIs with Python and Flask\n\nEducation:\nB.S. Computer Science, State University\n\nProjects:\nInventory Platform using React and PostgreSQL\n";

    #[test]
    fn test_full_parse_populates_every_field() {
        let record = parse_text(FULL_RESUME);
        assert_eq!(record.contact.name, "John Doe");
        assert_eq!(record.contact.emails, vec!["john.doe@example.com"]);
        assert!(record.skills.contains(&"Python".to_string()), "{:?}", record.skills);
        assert!(record.experience.contains("Acme Corp"));
        assert!(record.education.contains("State University"));
        assert!(record.projects.contains("Inventory Platform"));
    }

    #[test]
    fn test_parse_never_fails_on_unstructured_text() {
        let record = parse_text("a shopping list: milk, eggs, bread");
        assert_eq!(record.projects, PROJECTS_SENTINEL);
        assert!(record.contact.emails.is_empty());
    }

    #[test]
    fn test_parse_file_plain_text() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{FULL_RESUME}").unwrap();
        let record = parse_file(file.path(), DocumentKind::Text).unwrap();
        assert_eq!(record.contact.name, "John Doe");
        assert!(record.experience.contains("Acme Corp"));
    }

    #[test]
    fn test_parse_empty_text() {
        let record = parse_text("");
        assert!(record.skills.is_empty());
        assert_eq!(record.contact.name, "");
    }
}
