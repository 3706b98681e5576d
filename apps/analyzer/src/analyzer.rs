//! Request-lifecycle orchestrator: one analysis at a time, run to completion.
//!
//! Sequence per request: file gate → parse call → persistence write →
//! transformation. The two network calls are awaited sequentially; there is
//! no fan-out and no cancellation of an in-flight run.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::{CvParser, CvStore};
use crate::errors::AnalysisError;
use crate::matching::recommend::RecommendationBuilder;
use crate::models::persist::CvRecord;
use crate::models::report::CvAnalysisReport;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Progress milestones surfaced to the display layer, matching the stages of
/// the run: upload started, parse finished, report ready.
const PROGRESS_UPLOADING: u8 = 30;
const PROGRESS_PARSED: u8 = 70;
const PROGRESS_DONE: u8 = 100;

/// True for the document types the parsing service accepts. Checked before
/// any network call or state change.
pub fn is_supported_document(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub struct Analyzer {
    parser: Arc<dyn CvParser>,
    store: Arc<dyn CvStore>,
    builder: RecommendationBuilder,
    in_progress: AtomicBool,
    progress: watch::Sender<u8>,
}

impl Analyzer {
    pub fn new(
        parser: Arc<dyn CvParser>,
        store: Arc<dyn CvStore>,
        builder: RecommendationBuilder,
    ) -> Self {
        let (progress, _) = watch::channel(0);
        Self {
            parser,
            store,
            builder,
            in_progress: AtomicBool::new(false),
            progress,
        }
    }

    /// Observe progress (0–100). Resets to 0 when a run fails.
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Runs one full analysis. Fails fast on unsupported file types and when
    /// another analysis is already in flight; otherwise runs to completion.
    pub async fn analyze(
        &self,
        file_name: &str,
        content: Bytes,
        user_id: Uuid,
    ) -> Result<CvAnalysisReport, AnalysisError> {
        if !is_supported_document(file_name) {
            return Err(AnalysisError::UnsupportedFileType(file_name.to_string()));
        }

        // Single-flight gate.
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AnalysisError::AnalysisInProgress);
        }

        let result = self.run(file_name, content, user_id).await;
        if result.is_err() {
            // Leave the caller in a pre-analysis state, nothing partial.
            let _ = self.progress.send(0);
        }
        self.in_progress.store(false, Ordering::Release);
        result
    }

    async fn run(
        &self,
        file_name: &str,
        content: Bytes,
        user_id: Uuid,
    ) -> Result<CvAnalysisReport, AnalysisError> {
        let _ = self.progress.send(PROGRESS_UPLOADING);
        let response = self.parser.parse(file_name, content).await?;
        let _ = self.progress.send(PROGRESS_PARSED);

        // The persisted record is best-effort: a write failure must not
        // discard an analysis the candidate is waiting on.
        let record = CvRecord::from_parsed(user_id, &response.cv_data);
        if let Err(e) = self.store.save(&record).await {
            warn!("CV record not persisted: {e}");
        }

        let report = self.builder.build_report(&response);
        let _ = self.progress.send(PROGRESS_DONE);
        info!(
            "Analysis complete for {}: {} roles, best match {}%",
            report.name,
            report.suggested_roles.len(),
            report
                .suggested_roles
                .first()
                .map(|r| r.match_percentage)
                .unwrap_or(0)
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    use crate::models::upstream::{CvData, JdMatch, ParsedCvResponse};

    fn sample_response() -> ParsedCvResponse {
        ParsedCvResponse {
            cv_data: CvData {
                name: "Linh Tran".to_string(),
                skills: vec!["JavaScript".to_string(), "SQL".to_string()],
                experience: vec!["Backend developer".to_string()],
                education: vec!["BSc".to_string()],
                ..CvData::default()
            },
            matched_jds: vec![JdMatch {
                job_title: "Fullstack Engineer".to_string(),
                required_skills: "JavaScript,SQL,Docker".to_string(),
                matched_skills: vec!["JavaScript".to_string(), "SQL".to_string()],
                cv_years: 3.0,
                jd_years: 5.0,
                ..JdMatch::default()
            }],
            ..ParsedCvResponse::default()
        }
    }

    struct StubParser {
        response: Option<ParsedCvResponse>,
        hold: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl CvParser for StubParser {
        async fn parse(
            &self,
            _file_name: &str,
            _content: Bytes,
        ) -> Result<ParsedCvResponse, AnalysisError> {
            if let Some(hold) = &self.hold {
                hold.notified().await;
            }
            self.response.clone().ok_or(AnalysisError::ParserService {
                status: 502,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    struct StubStore {
        fail: bool,
        saved: Mutex<Vec<CvRecord>>,
    }

    impl StubStore {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CvStore for StubStore {
        async fn save(&self, record: &CvRecord) -> Result<(), AnalysisError> {
            if self.fail {
                return Err(AnalysisError::Backend("write refused".to_string()));
            }
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn analyzer(parser: StubParser, store: Arc<StubStore>) -> Analyzer {
        Analyzer::new(Arc::new(parser), store, RecommendationBuilder::default())
    }

    #[test]
    fn test_supported_document_extensions() {
        assert!(is_supported_document("cv.pdf"));
        assert!(is_supported_document("My CV.DOCX"));
        assert!(is_supported_document("resume.doc"));
        assert!(!is_supported_document("cv.txt"));
        assert!(!is_supported_document("cv"));
        assert!(!is_supported_document("archive.pdf.zip"));
    }

    #[tokio::test]
    async fn test_full_run_produces_report_and_persists() {
        let store = Arc::new(StubStore::new(false));
        let analyzer = analyzer(
            StubParser {
                response: Some(sample_response()),
                hold: None,
            },
            store.clone(),
        );

        let user_id = Uuid::new_v4();
        let report = analyzer
            .analyze("cv.pdf", Bytes::from_static(b"%PDF-"), user_id)
            .await
            .unwrap();

        assert_eq!(report.name, "Linh Tran");
        assert_eq!(report.suggested_roles[0].match_percentage, 67);
        assert!(report.suggested_roles[0].has_experience_gap);
        assert_eq!(report.gap_analysis.improvements, vec!["Docker"]);
        assert_eq!(*analyzer.progress().borrow(), 100);

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].user_id, user_id);
        assert_eq!(saved[0].skills, "JavaScript, SQL");
    }

    #[tokio::test]
    async fn test_unsupported_file_rejected_before_any_state_change() {
        let store = Arc::new(StubStore::new(false));
        let analyzer = analyzer(
            StubParser {
                response: Some(sample_response()),
                hold: None,
            },
            store.clone(),
        );

        let err = analyzer
            .analyze("cv.txt", Bytes::new(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFileType(_)));
        assert_eq!(*analyzer.progress().borrow(), 0);
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_failure_resets_progress_and_releases_gate() {
        let store = Arc::new(StubStore::new(false));
        let analyzer = analyzer(
            StubParser {
                response: None,
                hold: None,
            },
            store.clone(),
        );

        let err = analyzer
            .analyze("cv.pdf", Bytes::new(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ParserService { .. }));
        assert_eq!(*analyzer.progress().borrow(), 0);
        assert!(!analyzer.in_progress.load(Ordering::Acquire));
    }

    #[tokio::test]
    async fn test_store_failure_does_not_fail_the_analysis() {
        let store = Arc::new(StubStore::new(true));
        let analyzer = analyzer(
            StubParser {
                response: Some(sample_response()),
                hold: None,
            },
            store,
        );

        let report = analyzer
            .analyze("cv.pdf", Bytes::new(), Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(report.suggested_roles.len(), 1);
    }

    #[tokio::test]
    async fn test_second_analysis_rejected_while_one_is_in_flight() {
        let hold = Arc::new(Notify::new());
        let store = Arc::new(StubStore::new(false));
        let analyzer = Arc::new(analyzer(
            StubParser {
                response: Some(sample_response()),
                hold: Some(hold.clone()),
            },
            store,
        ));

        let first = {
            let analyzer = analyzer.clone();
            tokio::spawn(
                async move { analyzer.analyze("cv.pdf", Bytes::new(), Uuid::new_v4()).await },
            )
        };

        // Wait until the first run has reached the (held) parse call.
        let mut progress = analyzer.progress();
        progress.wait_for(|p| *p == 30).await.unwrap();

        let err = analyzer
            .analyze("other.pdf", Bytes::new(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::AnalysisInProgress));

        hold.notify_one();
        assert!(first.await.unwrap().is_ok());
    }
}
