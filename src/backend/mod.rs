//! Backend communication with the TTS model server.
//!
//! The model runs in an external server process. This module provides the
//! trait the engine talks to and the blocking HTTP implementation of it.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{
    BackendError, Device, HealthResponse, LanguagesResponse, SpeakersResponse, SynthesizeRequest,
};

/// Trait for TTS backend communication.
///
/// This trait abstracts the HTTP communication with the model server,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Check backend health and accelerator availability.
    fn health(&self) -> Result<HealthResponse, BackendError>;

    /// Language codes supported by `model`. Empty when the model is monolingual.
    fn languages(&self, model: &str) -> Result<Vec<String>, BackendError>;

    /// Built-in speaker names of `model`. Empty when the model has none.
    fn speakers(&self, model: &str) -> Result<Vec<String>, BackendError>;

    /// Synthesize speech from text.
    ///
    /// # Returns
    /// Raw WAV audio data
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError>;
}

/// Create a backend client for the server at `base_url`.
pub fn create_backend(base_url: &str) -> Result<HttpBackend, BackendError> {
    HttpBackend::new(base_url)
}
