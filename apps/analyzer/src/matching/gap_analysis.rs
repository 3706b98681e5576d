//! Strengths-vs-improvements summary across all matched roles.

use std::collections::HashSet;

use crate::matching::skills::{normalize_skill, parse_required_skills};
use crate::models::report::GapAnalysis;
use crate::models::upstream::JdMatch;

/// At most this many improvement areas are surfaced to the candidate.
const IMPROVEMENT_CAP: usize = 4;

/// Builds the gap analysis for one run.
///
/// Strengths are the candidate's skills verbatim, in CV order. Improvements
/// are required-skill tokens from any job that the candidate does not hold
/// (case-insensitively), in first-occurrence order across jobs, capped at 4.
/// The union dedupes on the exact trimmed token; differently-cased variants
/// of a missing skill each keep their slot, matching the upstream data
/// as emitted.
pub fn aggregate_gap_analysis(candidate_skills: &[String], jobs: &[JdMatch]) -> GapAnalysis {
    let strengths: HashSet<String> = candidate_skills.iter().map(|s| normalize_skill(s)).collect();

    let mut seen = HashSet::new();
    let mut improvements = Vec::new();

    'outer: for jd in jobs {
        for token in parse_required_skills(&jd.required_skills) {
            if !seen.insert(token.clone()) {
                continue;
            }
            if strengths.contains(&normalize_skill(&token)) {
                continue;
            }
            improvements.push(token);
            if improvements.len() == IMPROVEMENT_CAP {
                break 'outer;
            }
        }
    }

    GapAnalysis {
        strengths: candidate_skills.to_vec(),
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd(required: &str) -> JdMatch {
        JdMatch {
            required_skills: required.to_string(),
            ..JdMatch::default()
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strengths_are_candidate_skills_verbatim() {
        let candidate = skills(&["JavaScript", "SQL"]);
        let analysis = aggregate_gap_analysis(&candidate, &[]);
        assert_eq!(analysis.strengths, candidate);
        assert!(analysis.improvements.is_empty());
    }

    #[test]
    fn test_improvements_exclude_held_skills_case_insensitively() {
        let candidate = skills(&["JavaScript", "SQL"]);
        let jobs = vec![jd("javascript, Docker, sql, Kubernetes")];
        let analysis = aggregate_gap_analysis(&candidate, &jobs);
        assert_eq!(analysis.improvements, vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_improvements_follow_first_occurrence_order_across_jobs() {
        let candidate = skills(&["Go"]);
        let jobs = vec![jd("Terraform,Go"), jd("Kafka,Terraform"), jd("Redis")];
        let analysis = aggregate_gap_analysis(&candidate, &jobs);
        assert_eq!(analysis.improvements, vec!["Terraform", "Kafka", "Redis"]);
    }

    #[test]
    fn test_improvements_capped_at_four() {
        let jobs = vec![jd("a,b,c"), jd("d,e,f")];
        let analysis = aggregate_gap_analysis(&[], &jobs);
        assert_eq!(analysis.improvements, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_improvement_matches_any_strength() {
        let candidate = skills(&["Rust", "Python", "SQL"]);
        let jobs = vec![jd("RUST,python,Docker, SQL ,Helm")];
        let analysis = aggregate_gap_analysis(&candidate, &jobs);
        for improvement in &analysis.improvements {
            assert!(
                !candidate
                    .iter()
                    .any(|s| crate::matching::skills::skills_equal(s, improvement)),
                "{improvement} is already a strength"
            );
        }
        assert_eq!(analysis.improvements, vec!["Docker", "Helm"]);
    }
}
