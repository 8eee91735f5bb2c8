// src/api/types.rs
use serde::{Deserialize, Serialize};

/// Body for `POST /tailor-resume`. `job_url` serializes as `null` when the
/// URL field was left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailorRequest {
    pub resume: String,
    pub job_desc: String,
    pub job_url: Option<String>,
}

/// Body for `POST /scrape-job`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub job_url: String,
}

/// Success body of `POST /tailor-resume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailorResult {
    pub tailored_resume: String,
    #[serde(default)]
    pub key_skills_extracted: Vec<String>,
    #[serde(default)]
    pub optimization_notes: String,
}

/// Success body of `POST /scrape-job`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub job_description: String,
}

/// Failure body shape the service uses for every endpoint.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tailor_request_serializes_missing_url_as_null() {
        let request = TailorRequest {
            resume: "Experienced engineer...".to_string(),
            job_desc: "Looking for backend dev".to_string(),
            job_url: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["job_url"].is_null());
        assert_eq!(json["resume"], "Experienced engineer...");
    }

    #[test]
    fn tailor_result_tolerates_missing_optional_fields() {
        let result: TailorResult =
            serde_json::from_str(r#"{"tailored_resume":"text"}"#).unwrap();
        assert_eq!(result.tailored_resume, "text");
        assert!(result.key_skills_extracted.is_empty());
        assert!(result.optimization_notes.is_empty());
    }

    #[test]
    fn skills_keep_insertion_order() {
        let result: TailorResult = serde_json::from_str(
            r#"{"tailored_resume":"t","key_skills_extracted":["Go","SQL","Rust"],"optimization_notes":"n"}"#,
        )
        .unwrap();
        assert_eq!(result.key_skills_extracted, vec!["Go", "SQL", "Rust"]);
    }
}
