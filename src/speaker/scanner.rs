//! Input folder scanning for speaker references and text files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output::reader_duration;

/// Errors that can occur while scanning the input folder.
#[derive(Error, Debug)]
pub enum SpeakerError {
    #[error("Input folder not found: {0}")]
    DirNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A speaker reference WAV found in the input folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    /// File name, used as the display name.
    pub name: String,
    pub path: PathBuf,
    /// Length of the reference in seconds, when the WAV header is readable.
    pub duration: Option<f32>,
}

/// List speaker reference WAV files in `dir`, sorted by file name.
///
/// Returns an empty vector when the folder holds no WAV files.
pub fn list_speakers(dir: &Path) -> Result<Vec<Speaker>, SpeakerError> {
    let speakers = files_with_extension(dir, "wav")?
        .into_iter()
        .map(|(name, path)| {
            let duration = reference_duration(&path);
            Speaker {
                name,
                path,
                duration,
            }
        })
        .collect();

    Ok(speakers)
}

/// List plain-text input files in `dir`, sorted by file name.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>, SpeakerError> {
    Ok(files_with_extension(dir, "txt")?
        .into_iter()
        .map(|(_, path)| path)
        .collect())
}

fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<(String, PathBuf)>, SpeakerError> {
    if !dir.is_dir() {
        return Err(SpeakerError::DirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if matches && let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push((name.to_string(), path.clone()));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn reference_duration(path: &Path) -> Option<f32> {
    match hound::WavReader::open(path) {
        Ok(reader) => reader_duration(&reader),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Unreadable WAV header");
            None
        }
    }
}
