//! Prompt-then-generate session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::backend::Backend;
use crate::engine::{EngineError, SynthesisJob, VariationEngine};
use crate::output::{OutputWriter, RunManifest};
use crate::prompt::{PromptError, Prompter};
use crate::speaker::{SpeakerError, list_speakers, list_text_files};
use crate::text::split_sentences;

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("The model does not offer any languages")]
    NoLanguages,

    #[error("The text contains no sentences to speak")]
    NoSentences,

    #[error("No WAV files found in folder '{}'", .0.display())]
    NoSpeakers(PathBuf),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to read input folder: {0}")]
    Speaker(#[from] SpeakerError),

    #[error("Failed to synthesize speech: {0}")]
    Engine(#[from] EngineError),
}

/// Folders and sampling defaults that are fixed before the session starts.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub base_seed: Option<i64>,
    pub base_temperature: f32,
}

/// Ask for every generation parameter, then render all variations.
///
/// Nothing is written to `settings.output_dir` until every answer has been
/// accepted, so a rejected answer leaves the file system untouched.
pub fn run_session<B, R, W>(
    engine: &VariationEngine<B>,
    prompter: &mut Prompter<R, W>,
    settings: &SessionSettings,
) -> Result<RunManifest, SessionError>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let languages = engine.list_languages()?.ok_or(SessionError::NoLanguages)?;
    let language = prompter.choose_language(&languages)?;

    let text_files = list_text_files(&settings.input_dir)?;
    let text = prompter.choose_text(&text_files)?;
    let sentences = split_sentences(&text);
    if sentences.is_empty() {
        return Err(SessionError::NoSentences);
    }

    let variations = prompter.variation_count()?;
    let base_name = prompter.base_name()?;

    let speakers = list_speakers(&settings.input_dir)?;
    if speakers.is_empty() {
        return Err(SessionError::NoSpeakers(settings.input_dir.clone()));
    }
    let speaker = prompter.choose_speaker(&speakers)?;
    let emotion = prompter.choose_emotion()?;
    let speed = prompter.speed()?;

    let job = SynthesisJob {
        sentences,
        language,
        speaker_wav: speaker.path,
        emotion,
        speed,
        variations,
        base_seed: settings.base_seed,
        base_temperature: settings.base_temperature,
        base_name,
    };

    prompter.say(&format!(
        "Generating {} file(s): {} sentence(s) x {} variation(s)...",
        job.sentences.len() * job.variations,
        job.sentences.len(),
        job.variations
    ))?;
    prompter.say(&format!("  Speaker: {}", job.speaker_wav.display()))?;
    prompter.say(&format!("  Emotion: {}", job.emotion))?;
    prompter.say(&format!("  Speed: {:.2}x", job.speed))?;

    let writer = OutputWriter::new(&settings.output_dir);
    let manifest = engine.synthesize_variations(&job, &writer, |generated| {
        let entry = &generated.entry;
        let line = match entry.duration {
            Some(duration) => format!(
                "Audio saved: {} ({duration:.2}s, temperature {:.2})",
                generated.path.display(),
                entry.temperature
            ),
            None => format!("Audio saved: {}", generated.path.display()),
        };
        // Progress output is best effort; the file is already on disk.
        let _ = prompter.say(&line);
    })?;

    prompter.say(&format!(
        "Done: {} file(s) written to {}",
        manifest.files.len(),
        settings.output_dir.display()
    ))?;

    Ok(manifest)
}
