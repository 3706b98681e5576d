//! Builds the ordered recommendation list and the full analysis report from
//! one upstream response.

use crate::matching::experience::has_experience_gap;
use crate::matching::scoring::MatchScorer;
use crate::matching::skills::parse_required_skills;
use crate::models::report::{CvAnalysisReport, RoleRecommendation};
use crate::models::upstream::{JdMatch, ParsedCvResponse};

const DESCRIPTION_PLACEHOLDER: &str = "No description available.";
const NAME_PLACEHOLDER: &str = "Candidate";

/// Pure transformation from matched job descriptions to recommendations.
/// Output order mirrors the upstream response; no independent sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationBuilder {
    scorer: MatchScorer,
}

impl RecommendationBuilder {
    pub fn new(scorer: MatchScorer) -> Self {
        Self { scorer }
    }

    /// One recommendation per job, in input order. Empty input is a valid,
    /// non-error state and yields an empty list.
    pub fn build(&self, jobs: &[JdMatch]) -> Vec<RoleRecommendation> {
        jobs.iter().map(|jd| self.build_one(jd)).collect()
    }

    fn build_one(&self, jd: &JdMatch) -> RoleRecommendation {
        let required_skills = parse_required_skills(&jd.required_skills);
        let match_percentage = self.scorer.score(&required_skills, &jd.matched_skills);

        RoleRecommendation {
            title: jd.job_title.clone(),
            match_percentage,
            description: if jd.job_overview.is_empty() {
                DESCRIPTION_PLACEHOLDER.to_string()
            } else {
                jd.job_overview.clone()
            },
            required_skills,
            matched_skills: jd.matched_skills.clone(),
            required_years: jd.jd_years,
            candidate_years: jd.cv_years,
            has_experience_gap: has_experience_gap(jd.cv_years, jd.jd_years),
        }
    }

    /// Assembles the complete display model for one analysis run.
    pub fn build_report(&self, response: &ParsedCvResponse) -> CvAnalysisReport {
        let cv = &response.cv_data;

        let experience_summary = match response.matched_jds.first() {
            Some(jd) => format!("{} years", jd.cv_years),
            None => "N/A years".to_string(),
        };

        CvAnalysisReport {
            name: if cv.name.is_empty() {
                NAME_PLACEHOLDER.to_string()
            } else {
                cv.name.clone()
            },
            skills: cv.skills.clone(),
            experience_summary,
            suggested_roles: self.build(&response.matched_jds),
            gap_analysis: crate::matching::gap_analysis::aggregate_gap_analysis(
                &cv.skills,
                &response.matched_jds,
            ),
        }
    }
}
