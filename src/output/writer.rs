//! Output folder writing: audio files and the run manifest.

use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Errors that can occur while writing output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Invalid output name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// One generated audio file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub file: String,
    /// 1-based sentence index.
    pub sentence: usize,
    /// 1-based variation index.
    pub variation: usize,
    pub text: String,
    pub seed: Option<i64>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
}

/// Record of a synthesis run, written next to the audio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub created_at: String,
    pub model: String,
    pub language: String,
    pub speaker: String,
    pub emotion: String,
    pub speed: f32,
    pub device: String,
    pub files: Vec<ManifestEntry>,
}

/// File name for one variation of one sentence.
///
/// Indices are 0-based on input and 1-based in the name:
/// `<base>_<sentence:03>_<slug>_<variation>.wav`.
pub fn variation_file_name(
    base_name: &str,
    sentence_index: usize,
    slug: &str,
    variation_index: usize,
) -> String {
    format!(
        "{base_name}_{:03}_{slug}_{}.wav",
        sentence_index + 1,
        variation_index + 1
    )
}

/// Duration in seconds of an in-memory WAV buffer.
pub fn wav_duration(bytes: &[u8]) -> Option<f32> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).ok()?;
    reader_duration(&reader)
}

/// Duration in seconds of an opened WAV stream, `None` for a zero sample rate.
pub fn reader_duration<R: Read>(reader: &hound::WavReader<R>) -> Option<f32> {
    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return None;
    }
    Some(reader.duration() as f32 / sample_rate as f32)
}

/// Writes generated audio into the output folder.
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Get the output folder path.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Reject names that are not a single plain path component.
    pub fn validate_name(name: &str) -> Result<(), OutputError> {
        if name.is_empty() {
            return Err(OutputError::InvalidName("Name cannot be empty".to_string()));
        }

        // Separators are rejected outright; `components()` drops a trailing `/`
        // and only splits on `\` on Windows.
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_normal || name.contains(['/', '\\']) {
            return Err(OutputError::InvalidName(format!(
                "Name must be a plain file name: {name}"
            )));
        }

        Ok(())
    }

    /// Write audio bytes to `<output_dir>/<file_name>`, creating the folder.
    pub fn write_audio(&self, file_name: &str, audio: &[u8]) -> Result<PathBuf, OutputError> {
        Self::validate_name(file_name)?;

        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(file_name);
        std::fs::write(&path, audio)?;

        Ok(path)
    }

    /// Write the run manifest as pretty JSON.
    pub fn write_manifest(&self, manifest: &RunManifest) -> Result<PathBuf, OutputError> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(MANIFEST_FILE_NAME);
        let json = serde_json::to_string_pretty(manifest)?;
        std::fs::write(&path, json)?;

        Ok(path)
    }
}
