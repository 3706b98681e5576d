//! HTTP clients for the two external collaborators: the CV-parsing service
//! and the persistence backend.
//!
//! Both sit behind traits so the pipeline and orchestrator are testable
//! without a network. Production code uses the `Http*` implementations.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AnalysisError;
use crate::models::jobs::JdRow;
use crate::models::persist::CvRecord;
use crate::models::upstream::ParsedCvResponse;

const UPLOAD_CV_ENDPOINT: &str = "/upload_cv";
const SAVE_CV_ENDPOINT: &str = "/user/cv";
const LIST_JD_ENDPOINT: &str = "/user/jd";

/// The parsing service can take a while on large documents.
const PARSER_TIMEOUT_SECS: u64 = 120;
const BACKEND_TIMEOUT_SECS: u64 = 30;

/// Seam over the external CV-parsing service.
#[async_trait]
pub trait CvParser: Send + Sync {
    async fn parse(&self, file_name: &str, content: Bytes)
        -> Result<ParsedCvResponse, AnalysisError>;
}

/// Seam over the persistence backend.
#[async_trait]
pub trait CvStore: Send + Sync {
    async fn save(&self, record: &CvRecord) -> Result<(), AnalysisError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing service client
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpParserClient {
    client: Client,
    base_url: String,
}

impl HttpParserClient {
    pub fn new(base_url: String) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(PARSER_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CvParser for HttpParserClient {
    /// Uploads the document as multipart (field name `pdf_file`, matching the
    /// service contract) and decodes the parse response.
    async fn parse(
        &self,
        file_name: &str,
        content: Bytes,
    ) -> Result<ParsedCvResponse, AnalysisError> {
        let url = format!("{}{}", self.base_url, UPLOAD_CV_ENDPOINT);
        let form = Form::new().part(
            "pdf_file",
            Part::bytes(content.to_vec()).file_name(file_name.to_string()),
        );

        info!("Uploading {file_name} to the CV parsing service");
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::ParserService {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Parsing service response: {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence backend client
// ────────────────────────────────────────────────────────────────────────────

/// Envelope the backend wraps every JSON response in.
#[derive(Debug, Deserialize)]
struct BackendEnvelope<T> {
    #[allow(dead_code)]
    message: String,
    #[serde(default)]
    data: Option<T>,
}

pub struct HttpBackendClient {
    client: Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(base_url: String) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(BACKEND_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Fetches all open job descriptions for the browse-jobs surface.
    pub async fn fetch_job_listings(&self) -> Result<Vec<JdRow>, AnalysisError> {
        let url = format!("{}{}", self.base_url, LIST_JD_ENDPOINT);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Backend(format!(
                "job listing fetch failed with status {status}"
            )));
        }

        let envelope: BackendEnvelope<Vec<JdRow>> = response.json().await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl CvStore for HttpBackendClient {
    async fn save(&self, record: &CvRecord) -> Result<(), AnalysisError> {
        let url = format!("{}{}", self.base_url, SAVE_CV_ENDPOINT);
        let response = self.client.post(&url).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::Backend(format!(
                "CV save failed with status {status}: {message}"
            )));
        }

        info!("CV record for user {} saved", record.user_id);
        Ok(())
    }
}
