//! Structured candidate profile.
//!
//! Every field is optional: source documents vary widely and the model may
//! fail to populate any given field. Doc comments on the fields double as the
//! descriptions in the JSON schema embedded in the extraction prompt.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Details about the candidate's experience at a specific company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyRecord {
    /// Company name where candidate worked.
    pub company: Option<String>,
    /// Start date (YYYY-MM-DD) of employment.
    pub duration_from: Option<String>,
    /// End date (YYYY-MM-DD) of employment.
    pub duration_to: Option<String>,
    /// Job role/title in the company.
    pub role: Option<String>,
    /// Industry or sector of the company.
    pub industry_of_the_company: Option<String>,
    /// Brief 2-3 sentence summary of key responsibilities, no more than 120 words.
    pub summary_of_work: Option<Vec<String>>,
}

/// Candidate information, including personal details, skills, and work experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeProfile {
    /// Full name of the candidate.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Current address.
    pub address: Option<String>,
    /// Total work experience in years.
    pub total_experience: Option<f64>,
    /// Dictionary of skills, grouped by domain.
    pub skills: Option<HashMap<String, Vec<String>>>,
    /// List of past companies with job details.
    pub companies: Option<Vec<CompanyRecord>>,
}

impl ResumeProfile {
    /// True when no field is populated, i.e. the input was not a resume.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// JSON schema of the profile, as embedded in the extraction prompt.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ResumeProfile);
        serde_json::to_value(schema).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_optional() {
        let profile: ResumeProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());

        let profile: ResumeProfile =
            serde_json::from_str(r#"{"name": null, "companies": null, "skills": null}"#).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_partial_profile() {
        let profile: ResumeProfile = serde_json::from_str(
            r#"{
                "name": "Jane Doe",
                "total_experience": 6.5,
                "skills": {"Backend": ["Rust", "Go"]},
                "companies": [{"company": "Acme", "role": null}]
            }"#,
        )
        .unwrap();

        assert!(!profile.is_empty());
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.total_experience, Some(6.5));
        assert_eq!(profile.skills.unwrap()["Backend"], vec!["Rust", "Go"]);
        let companies = profile.companies.unwrap();
        assert_eq!(companies[0].company.as_deref(), Some("Acme"));
        assert!(companies[0].role.is_none());
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(serde_json::from_str::<ResumeProfile>(r#"{"name": 42}"#).is_err());
        assert!(serde_json::from_str::<ResumeProfile>(r#"{"total_experience": "five"}"#).is_err());
        assert!(serde_json::from_str::<ResumeProfile>(r#"{"companies": {"company": "Acme"}}"#).is_err());
    }

    #[test]
    fn test_schema_lists_fields_and_descriptions() {
        let schema = ResumeProfile::json_schema().to_string();
        for field in [
            "name",
            "phone",
            "email",
            "address",
            "total_experience",
            "skills",
            "companies",
            "industry_of_the_company",
            "summary_of_work",
        ] {
            assert!(schema.contains(field), "schema is missing {field}");
        }
        assert!(schema.contains("Total work experience in years."));
    }
}
