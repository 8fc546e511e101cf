//! Variation engine implementation.

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use super::variation::plan_variations;
use crate::backend::{Backend, BackendError, Device, SynthesizeRequest};
use crate::cli::Emotion;
use crate::output::{
    ManifestEntry, OutputError, OutputWriter, RunManifest, variation_file_name, wav_duration,
};
use crate::text;

/// Errors that can occur during synthesis runs.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("Output error: {0}")]
    OutputError(#[from] OutputError),

    #[error("No sentences to synthesize")]
    NoSentences,
}

/// Everything needed to render a batch of variations.
#[derive(Debug, Clone)]
pub struct SynthesisJob {
    pub sentences: Vec<String>,
    pub language: String,
    pub speaker_wav: PathBuf,
    pub emotion: Emotion,
    pub speed: f32,
    /// Variations per sentence.
    pub variations: usize,
    pub base_seed: Option<i64>,
    pub base_temperature: f32,
    /// Prefix of every output file name.
    pub base_name: String,
}

/// A file written by a synthesis run.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub path: PathBuf,
    pub entry: ManifestEntry,
}

/// Drives the backend model through a batch of variations.
pub struct VariationEngine<B: Backend> {
    backend: B,
    model: String,
    device: Device,
}

impl<B: Backend> VariationEngine<B> {
    /// Create an engine for `model`, running on CPU until a device is selected.
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            device: Device::Cpu,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Choose the compute device once for the whole run.
    ///
    /// CUDA is used only when requested and reported available by the backend.
    /// An unreachable backend falls back to CPU; the first real call will fail.
    pub fn select_device(&mut self, use_cuda: bool) -> Device {
        self.device = if !use_cuda {
            Device::Cpu
        } else {
            match self.backend.health() {
                Ok(health) if health.cuda_available => {
                    tracing::info!(gpu = ?health.gpu, "Using CUDA");
                    Device::Cuda
                }
                Ok(_) => {
                    tracing::warn!("CUDA requested but not available on the backend, using CPU");
                    Device::Cpu
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Health check failed, using CPU");
                    Device::Cpu
                }
            }
        };

        self.device
    }

    /// Languages of the model, or `None` if it does not support language selection.
    pub fn list_languages(&self) -> Result<Option<Vec<String>>, EngineError> {
        let languages = self.backend.languages(&self.model)?;
        Ok(if languages.is_empty() {
            None
        } else {
            Some(languages)
        })
    }

    /// Built-in speakers of the model.
    pub fn list_model_speakers(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.backend.speakers(&self.model)?)
    }

    /// Render every variation of every sentence, one file per backend call.
    ///
    /// `on_saved` is called after each file is written. The manifest is
    /// written once all variations succeeded; the first failure aborts the run.
    pub fn synthesize_variations<F>(
        &self,
        job: &SynthesisJob,
        writer: &OutputWriter,
        mut on_saved: F,
    ) -> Result<RunManifest, EngineError>
    where
        F: FnMut(&GeneratedAudio),
    {
        if job.sentences.is_empty() {
            return Err(EngineError::NoSentences);
        }

        let variations = plan_variations(job.variations, job.base_seed, job.base_temperature);
        let mut files = Vec::with_capacity(job.sentences.len() * variations.len());

        for (sentence_index, sentence) in job.sentences.iter().enumerate() {
            let slug = text::slug(sentence);

            for variation in &variations {
                tracing::info!(
                    sentence = sentence_index + 1,
                    variation = variation.index + 1,
                    seed = ?variation.seed,
                    temperature = variation.temperature,
                    "Generating variation"
                );

                let request = SynthesizeRequest::new(sentence.as_str(), &self.model, &job.language)
                    .with_speaker_wav(job.speaker_wav.clone())
                    .with_device(self.device)
                    .with_seed(variation.seed)
                    .with_temperature(variation.temperature)
                    .with_emotion(job.emotion)
                    .with_speed(job.speed);

                let audio = self.backend.synthesize(&request)?;

                let file_name =
                    variation_file_name(&job.base_name, sentence_index, &slug, variation.index);
                let path = writer.write_audio(&file_name, &audio)?;

                let duration = wav_duration(&audio);
                if duration.is_none() {
                    tracing::warn!(file = %file_name, "Backend returned audio without a readable WAV header");
                }

                let generated = GeneratedAudio {
                    path,
                    entry: ManifestEntry {
                        file: file_name,
                        sentence: sentence_index + 1,
                        variation: variation.index + 1,
                        text: sentence.clone(),
                        seed: variation.seed,
                        temperature: variation.temperature,
                        duration,
                    },
                };
                on_saved(&generated);
                files.push(generated.entry);
            }
        }

        let manifest = RunManifest {
            created_at: Utc::now().to_rfc3339(),
            model: self.model.clone(),
            language: job.language.clone(),
            speaker: job
                .speaker_wav
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            emotion: job.emotion.to_string(),
            speed: job.speed,
            device: self.device.to_string(),
            files,
        };
        writer.write_manifest(&manifest)?;

        Ok(manifest)
    }
}
