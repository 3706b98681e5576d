//! Match-percentage scoring between a role's required skills and a
//! candidate's matched skills.

use crate::matching::skills::skills_equal;

/// How much the scorer trusts the upstream `matched_skills` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Count `matched` as given, without checking membership in `required`.
    /// This mirrors the upstream contract; the result is still capped at 100
    /// so an over-reporting service cannot push the percentage out of range.
    #[default]
    Lenient,
    /// Count only matched entries that appear (case-insensitively) in
    /// `required` before applying the formula.
    Strict,
}

/// Computes an integer match percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    mode: ValidationMode,
}

impl MatchScorer {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// `round(matched / required * 100)`.
    ///
    /// A role with no listed requirements cannot be failed, so empty
    /// `required` scores 100 regardless of `matched`.
    pub fn score(&self, required: &[String], matched: &[String]) -> u32 {
        if required.is_empty() {
            return 100;
        }

        let matched_count = match self.mode {
            ValidationMode::Lenient => matched.len(),
            ValidationMode::Strict => matched
                .iter()
                .filter(|m| required.iter().any(|r| skills_equal(r, m)))
                .count(),
        };

        let pct = (matched_count as f64 / required.len() as f64 * 100.0).round() as u32;
        pct.min(100)
    }
}
