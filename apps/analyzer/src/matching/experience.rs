//! Experience-gap check.

/// True when the candidate's years of experience fall short of the role's.
///
/// Years missing from the upstream response deserialize to `0.0`, so a role
/// with no stated requirement never flags a gap.
pub fn has_experience_gap(candidate_years: f64, required_years: f64) -> bool {
    candidate_years < required_years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_years_is_a_gap() {
        assert!(has_experience_gap(2.0, 5.0));
    }

    #[test]
    fn test_equal_years_is_not_a_gap() {
        assert!(!has_experience_gap(5.0, 5.0));
    }

    #[test]
    fn test_more_years_is_not_a_gap() {
        assert!(!has_experience_gap(8.0, 5.0));
    }

    #[test]
    fn test_missing_requirement_defaults_to_no_gap() {
        assert!(!has_experience_gap(0.0, 0.0));
        assert!(!has_experience_gap(3.0, 0.0));
    }
}
