use serde::{Deserialize, Serialize};

/// Contact details pulled from the top of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Structured résumé produced by one parse call. Immutable after
/// construction and never persisted — a transient value handed to the
/// matcher and advisor layers.
///
/// Missing fields on deserialization default to empty, per the permissive
/// input policy: callers may send partial records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub contact: ContactInfo,
    /// At most 20 skills, deduplicated case-insensitively, title-cased,
    /// in discovery order (vocabulary hits before noun-phrase hits).
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ResumeRecord = serde_json::from_str(r#"{"skills": ["Python"]}"#).unwrap();
        assert_eq!(record.skills, vec!["Python"]);
        assert!(record.experience.is_empty());
        assert!(record.contact.name.is_empty());
    }

    #[test]
    fn test_round_trips_through_json() {
        let record = ResumeRecord {
            contact: ContactInfo {
                name: "Jane Smith".to_string(),
                emails: vec!["jane@example.org".to_string()],
                phones: vec![],
            },
            skills: vec!["Python".to_string(), "Sql".to_string()],
            experience: "Built data pipelines".to_string(),
            education: "BSc".to_string(),
            projects: "Billing Platform".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.contact, record.contact);
        assert_eq!(back.skills, record.skills);
    }
}
