use thiserror::Error;

/// Engine-level error type.
///
/// The transformation functions in `matching` are total and never construct
/// one of these; every variant here is attributable to the request boundary
/// (file gate, upstream call, persistence write), which keeps pipeline tests
/// free of error plumbing.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Unsupported file type: '{0}'. Only PDF, DOC, and DOCX files are supported")]
    UnsupportedFileType(String),

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("CV parsing service error (status {status}): {message}")]
    ParserService { status: u16, message: String },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed service response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
