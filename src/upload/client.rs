//! Blocking HTTP client for the analysis backend
//!
//! One pre-configured client bound to a single base URL. The only call it
//! knows how to make is the multipart upload.

use crate::config::AppConfig;
use crate::upload::types::{AnalysisResult, SelectedFile};
use crate::Result;
use reqwest::blocking::multipart;
use tracing::debug;

/// HTTP client for `POST /upload`
pub struct AnalysisClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a client bound to the configured backend address
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    /// Post the file as multipart field `file` and parse the JSON analysis.
    ///
    /// Any non-2xx status, transport failure, or unreadable file surfaces
    /// as an error; there is no retry.
    pub fn upload(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        let bytes = std::fs::read(&file.path)?;
        debug!(name = %file.name, size = bytes.len(), url = %self.upload_url(), "posting file for analysis");

        let part = multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.media_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()?
            .error_for_status()?;

        let result = response.json::<AnalysisResult>()?;
        Ok(result)
    }
}
