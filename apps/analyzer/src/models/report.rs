//! Display models produced by the analysis pipeline.
//!
//! All derived, never persisted: a report is rebuilt whole from a single
//! upstream response and replaces any prior result as one unit.

use serde::{Deserialize, Serialize};

/// One recommended role, derived from one matched job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub title: String,
    /// `round(matched / required * 100)`; 100 when the role lists no
    /// requirements (a role with no requirements cannot be failed).
    pub match_percentage: u32,
    pub description: String,
    /// Parsed, trimmed, empty-free; order follows the raw requirement string.
    pub required_skills: Vec<String>,
    /// Copied verbatim from the upstream response.
    pub matched_skills: Vec<String>,
    pub required_years: f64,
    pub candidate_years: f64,
    /// True when the candidate's years fall short of the role's.
    pub has_experience_gap: bool,
}

/// Strengths vs improvement areas across all recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Candidate skills, verbatim and in CV order.
    pub strengths: Vec<String>,
    /// Skills required somewhere but missing from the CV, first 4 only.
    pub improvements: Vec<String>,
}

/// The full display model for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysisReport {
    pub name: String,
    pub skills: Vec<String>,
    /// e.g. "3 years"; "N/A years" when the service matched no jobs.
    pub experience_summary: String,
    pub suggested_roles: Vec<RoleRecommendation>,
    pub gap_analysis: GapAnalysis,
}
