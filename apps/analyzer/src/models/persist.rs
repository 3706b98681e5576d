//! Payload for the persistence backend's CV write endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::upstream::CvData;

/// Projects are not extracted by the parsing service yet.
const PROJECTS_PLACEHOLDER: &str = "Not specified in CV";

/// Normalized CV record accepted by `POST /user/cv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvRecord {
    pub user_id: Uuid,
    /// Comma-joined skill list.
    pub skills: String,
    pub projects: String,
    /// Newline-joined experience entries.
    pub experience: String,
    /// Newline-joined education entries.
    pub education: String,
}

impl CvRecord {
    pub fn from_parsed(user_id: Uuid, cv: &CvData) -> Self {
        Self {
            user_id,
            skills: cv.skills.join(", "),
            projects: PROJECTS_PLACEHOLDER.to_string(),
            experience: cv.experience.join("\n"),
            education: cv.education.join("\n"),
        }
    }
}
