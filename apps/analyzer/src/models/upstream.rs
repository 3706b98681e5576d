//! Wire types for the external CV-parsing service.
//!
//! Every field carries `#[serde(default)]`: a response missing expected
//! fields degrades to empty sequences / zero years instead of failing the
//! whole transformation.

use serde::{Deserialize, Serialize};

/// The candidate record extracted from the uploaded CV.
/// Immutable once produced by the parsing service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    /// Order significant for display; uniqueness is whatever the service emits.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

/// One job description the service matched the CV against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JdMatch {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_overview: String,
    #[serde(default)]
    pub benefits: String,
    /// Comma-delimited; may be empty.
    #[serde(default)]
    pub required_skills: String,
    /// Taken as given by the service; see `ValidationMode` for whether the
    /// scorer re-verifies these against `required_skills`.
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub cv_years: f64,
    #[serde(default)]
    pub jd_years: f64,
    #[serde(default)]
    pub is_match: bool,
}

/// Full response body of `POST /upload_cv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedCvResponse {
    #[serde(default)]
    pub cv_data: CvData,
    #[serde(default)]
    pub bit_string: String,
    #[serde(default)]
    pub matched_jds: Vec<JdMatch>,
}
