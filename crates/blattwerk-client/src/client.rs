// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async HTTP client for the document-processing service.
//
// One multipart POST per submission attempt: every staged file as a repeated
// `files` part, every non-empty option value as a text part keyed by its
// field name. The response is classified by content type — JSON means a
// structured analysis, anything else is an opaque download.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::registry::OperationDescriptor;
use blattwerk_core::session::StagedFile;

use crate::outcome::{AnalysisReport, SubmissionOutcome, disposition_filename};

/// Reason surfaced when a failure body carries no parseable detail.
const GENERIC_FAILURE: &str = "The service could not process the request.";

/// Async client bound to one processing-service base URL.
///
/// The underlying connection pool is reused across submissions; all methods
/// require a Tokio runtime.
#[derive(Clone)]
pub struct ProcessingClient {
    base_url: String,
    http: reqwest::Client,
}

impl ProcessingClient {
    /// Create a new client targeting the given service base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(BlattwerkError::Config("service URL is empty".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| BlattwerkError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            http,
        })
    }

    /// The service base URL this client is targeting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one job to the operation's endpoint.
    ///
    /// Issues exactly one request. Non-success statuses become
    /// [`BlattwerkError::Processing`] carrying the server-declared reason
    /// when the body was parseable; transport failures become
    /// [`BlattwerkError::Request`].
    #[instrument(skip(self, op, files, options), fields(op = op.key))]
    pub async fn submit(
        &self,
        op: &OperationDescriptor,
        files: &[StagedFile],
        options: &HashMap<String, String>,
    ) -> Result<SubmissionOutcome> {
        let submission = Uuid::new_v4();
        let url = format!("{}{}", self.base_url, op.endpoint);

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(mime_for_name(&file.name))
                .map_err(|e| BlattwerkError::Request(format!("file part {}: {e}", file.name)))?;
            form = form.part("files", part);
        }
        // Iterate the descriptor, not the map: keeps part order stable and
        // drops any key the operation never declared.
        for field in op.fields {
            if let Some(value) = options.get(field.name)
                && !value.is_empty()
            {
                form = form.text(field.name, value.clone());
            }
        }

        info!(%submission, url = %url, files = files.len(), "submitting job");
        let response = self.http.post(&url).multipart(form).send().await.map_err(|e| {
            error!(%submission, error = %e, "transport failure");
            BlattwerkError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = failure_detail(&body);
            error!(%submission, status = status.as_u16(), detail = %detail, "job rejected");
            return Err(BlattwerkError::Processing {
                status: status.as_u16(),
                detail,
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.contains("application/json") {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| BlattwerkError::Request(e.to_string()))?;
            let report: AnalysisReport = serde_json::from_slice(&bytes)
                .map_err(|e| BlattwerkError::MalformedResponse(format!("analysis payload: {e}")))?;
            info!(%submission, words = report.total_words, pages = report.pages, "analysis received");
            Ok(SubmissionOutcome::Analysis(report))
        } else {
            let filename = response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .and_then(disposition_filename);
            let bytes = response
                .bytes()
                .await
                .map_err(|e| BlattwerkError::Request(e.to_string()))?
                .to_vec();
            debug!(%submission, bytes = bytes.len(), "download received");
            Ok(SubmissionOutcome::Download { bytes, filename })
        }
    }
}

/// Pull the human-readable reason out of a failure body.
///
/// The service answers errors as `{"detail": "..."}`; anything else gets the
/// generic reason.
fn failure_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(ToString::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// MIME type for an uploaded file, from its extension.
fn mime_for_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_url() {
        assert!(ProcessingClient::new("   ").is_err());
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = ProcessingClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn failure_detail_prefers_server_reason() {
        assert_eq!(failure_detail(r#"{"detail":"bad password"}"#), "bad password");
    }

    #[test]
    fn failure_detail_falls_back_on_garbage() {
        assert_eq!(failure_detail("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(failure_detail(""), GENERIC_FAILURE);
        // Parseable JSON without a string detail is still generic.
        assert_eq!(failure_detail(r#"{"detail": 42}"#), GENERIC_FAILURE);
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for_name("scan.PDF"), "application/pdf");
        assert_eq!(mime_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_name("notes"), "application/octet-stream");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        // Port 1 is practically never listening; the connect fails fast.
        let client = ProcessingClient::new("http://127.0.0.1:1").unwrap();
        let op = blattwerk_core::registry::lookup("merge").unwrap();
        let files = [StagedFile::new("a.pdf", vec![1, 2, 3])];

        let err = client.submit(op, &files, &HashMap::new()).await.unwrap_err();
        assert!(matches!(err, BlattwerkError::Request(_)));
    }
}
