//! HTTP client for backend communication.

use std::time::Duration;

use reqwest::blocking::{Client, Response, multipart};

use super::Backend;
use super::types::{
    BackendError, HealthResponse, LanguagesResponse, SpeakersResponse, SynthesizeRequest,
};

/// Synthesis of a long sentence on CPU can take minutes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client for `base_url`.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, BackendError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(BackendError::RequestFailed(if body.is_empty() {
        format!("Status: {status}")
    } else {
        format!("Status: {status}: {body}")
    }))
}

impl Backend for HttpBackend {
    fn health(&self) -> Result<HealthResponse, BackendError> {
        self.get("/health", &[])?
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn languages(&self, model: &str) -> Result<Vec<String>, BackendError> {
        let response: LanguagesResponse = self
            .get("/languages", &[("model", model)])?
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(response.languages)
    }

    fn speakers(&self, model: &str) -> Result<Vec<String>, BackendError> {
        let response: SpeakersResponse = self
            .get("/speakers", &[("model", model)])?
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(response.speakers)
    }

    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/synthesize", self.base_url);

        let mut form = multipart::Form::new();
        for (key, value) in request.form_fields() {
            form = form.text(key, value);
        }

        if let Some(path) = &request.speaker_wav {
            let audio_data = std::fs::read(path)
                .map_err(|_| BackendError::FileNotFound(path.display().to_string()))?;

            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("speaker.wav");

            let file_part = multipart::Part::bytes(audio_data)
                .file_name(file_name.to_string())
                .mime_str("audio/wav")
                .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

            form = form.part("speaker_wav", file_part);
        }

        tracing::debug!(%url, language = %request.language, "POST synthesize");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        check_status(response)?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
