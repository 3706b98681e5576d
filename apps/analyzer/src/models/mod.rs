pub mod jobs;
pub mod persist;
pub mod report;
pub mod upstream;

pub use jobs::{JdRow, JobListing};
pub use persist::CvRecord;
pub use report::{CvAnalysisReport, GapAnalysis, RoleRecommendation};
pub use upstream::{CvData, JdMatch, ParsedCvResponse};
