//! Skill token parsing and normalization.
//!
//! Normalization is the single point of case-insensitive comparison for the
//! whole pipeline. Display always keeps the original casing; the normalized
//! form is for comparison only, never storage.

/// Canonical comparison form of a skill token: trimmed and lower-cased.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive skill equality on trimmed forms.
pub fn skills_equal(a: &str, b: &str) -> bool {
    normalize_skill(a) == normalize_skill(b)
}

/// Splits a comma-delimited requirement string into an ordered token list.
///
/// Tokens are trimmed and empty segments dropped. Duplicates are preserved
/// deliberately: the upstream data contains them and downstream counts must
/// reflect the list as emitted.
pub fn parse_required_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
