//! Backend request/response types.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Emotion;

/// Errors that can occur when communicating with the backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Compute device the backend runs the model on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health check response from backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub cuda_available: bool,
    #[serde(default)]
    pub gpu: Option<String>,
}

/// Languages supported by a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Built-in speakers of a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakersResponse {
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// Parameters for one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeRequest {
    pub text: String,
    pub model: String,
    pub language: String,
    /// Reference audio for voice cloning.
    pub speaker_wav: Option<PathBuf>,
    pub device: Device,
    pub seed: Option<i64>,
    pub temperature: f32,
    pub emotion: Emotion,
    pub speed: f32,
}

impl SynthesizeRequest {
    /// Create a new synthesis request with neutral defaults.
    pub fn new(
        text: impl Into<String>,
        model: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            language: language.into(),
            speaker_wav: None,
            device: Device::Cpu,
            seed: None,
            temperature: crate::config::DEFAULT_TEMPERATURE,
            emotion: Emotion::Neutral,
            speed: 1.0,
        }
    }

    /// Set the speaker reference audio.
    pub fn with_speaker_wav(mut self, path: impl Into<PathBuf>) -> Self {
        self.speaker_wav = Some(path.into());
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = emotion;
        self
    }

    /// Set the speech speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Text form fields sent alongside the reference audio.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("text", self.text.clone()),
            ("model", self.model.clone()),
            ("language", self.language.clone()),
            ("device", self.device.as_str().to_string()),
            ("temperature", self.temperature.to_string()),
            ("emotion", self.emotion.as_str().to_string()),
            ("speed", self.speed.to_string()),
        ];

        if let Some(seed) = self.seed {
            fields.push(("seed", seed.to_string()));
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_request_builder() {
        let request = SynthesizeRequest::new("Hallo Welt", "xtts_v2", "de")
            .with_speaker_wav("inputs/anna.wav")
            .with_device(Device::Cuda)
            .with_seed(Some(7))
            .with_temperature(0.85)
            .with_emotion(Emotion::Happy)
            .with_speed(1.5);

        assert_eq!(request.text, "Hallo Welt");
        assert_eq!(request.language, "de");
        assert_eq!(request.speaker_wav, Some(PathBuf::from("inputs/anna.wav")));
        assert_eq!(request.device, Device::Cuda);
        assert_eq!(request.seed, Some(7));
        assert_eq!(request.temperature, 0.85);
        assert_eq!(request.emotion, Emotion::Happy);
        assert_eq!(request.speed, 1.5);
    }

    #[test]
    fn test_synthesize_request_defaults() {
        let request = SynthesizeRequest::new("Hello", "xtts_v2", "en");

        assert_eq!(request.speaker_wav, None);
        assert_eq!(request.device, Device::Cpu);
        assert_eq!(request.seed, None);
        assert_eq!(request.emotion, Emotion::Neutral);
        assert_eq!(request.speed, 1.0);
    }

    #[test]
    fn test_form_fields_include_seed_only_when_set() {
        let without = SynthesizeRequest::new("Hello", "xtts_v2", "en");
        assert!(!without.form_fields().iter().any(|(k, _)| *k == "seed"));

        let with = without.with_seed(Some(42));
        assert!(
            with.form_fields()
                .iter()
                .any(|(k, v)| *k == "seed" && v == "42")
        );
    }

    #[test]
    fn test_form_fields_values() {
        let request = SynthesizeRequest::new("Hello", "xtts_v2", "en")
            .with_device(Device::Cuda)
            .with_emotion(Emotion::Dull);

        let fields = request.form_fields();

        assert!(fields.contains(&("device", "cuda".to_string())));
        assert!(fields.contains(&("emotion", "Dull".to_string())));
        assert!(fields.contains(&("model", "xtts_v2".to_string())));
    }

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{
            "status": "healthy",
            "cuda_available": true,
            "gpu": "NVIDIA RTX 4090"
        }"#;

        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "healthy");
        assert!(response.cuda_available);
        assert_eq!(response.gpu, Some("NVIDIA RTX 4090".to_string()));
    }

    #[test]
    fn test_health_response_defaults_to_no_cuda() {
        let response: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();

        assert!(!response.cuda_available);
        assert_eq!(response.gpu, None);
    }

    #[test]
    fn test_languages_response_deserialize() {
        let json = r#"{"languages": ["en", "de", "fr"]}"#;

        let response: LanguagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.languages, vec!["en", "de", "fr"]);
    }

    #[test]
    fn test_languages_response_missing_field_is_empty() {
        let response: LanguagesResponse = serde_json::from_str("{}").unwrap();

        assert!(response.languages.is_empty());
    }

    #[test]
    fn test_device_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Device::Cuda).unwrap(), "\"cuda\"");
        assert_eq!(Device::Cpu.to_string(), "cpu");
    }
}
