//! The CV-to-role match computation pipeline.
//!
//! Every function in this module tree is total: no I/O, no panics, no
//! errors. Failures in an analysis run are therefore always attributable to
//! the network boundary in `client`/`analyzer`.

pub mod experience;
pub mod gap_analysis;
pub mod recommend;
pub mod scoring;
pub mod skills;

pub use experience::has_experience_gap;
pub use gap_analysis::aggregate_gap_analysis;
pub use recommend::RecommendationBuilder;
pub use scoring::{MatchScorer, ValidationMode};
pub use skills::{normalize_skill, parse_required_skills, skills_equal};
