//! Console prompts over arbitrary reader/writer pairs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::Emotion;
use crate::output::OutputWriter;
use crate::speaker::Speaker;

pub const DEFAULT_BASE_NAME: &str = "output";
pub const DEFAULT_SPEED: f32 = 1.0;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Invalid language '{given}'! Available languages: {}", .available.join(", "))]
    InvalidLanguage {
        given: String,
        available: Vec<String>,
    },

    #[error("No speaker WAV files available")]
    NoSpeakers,

    #[error("Invalid selection: '{0}'")]
    InvalidSelection(String),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid output name: {0}")]
    InvalidName(String),

    #[error("No text entered")]
    EmptyText,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parse a 1-based menu answer into a 0-based index.
pub fn parse_menu_choice(answer: &str, len: usize) -> Result<usize, PromptError> {
    match answer.trim().parse::<usize>() {
        Ok(choice) if (1..=len).contains(&choice) => Ok(choice - 1),
        _ => Err(PromptError::InvalidSelection(answer.trim().to_string())),
    }
}

/// Interactive question/answer session.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line. End of input reads as empty.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Print one line of information.
    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask for a language code from `languages`.
    pub fn choose_language(&mut self, languages: &[String]) -> Result<String, PromptError> {
        self.say(&format!("Available languages: {}", languages.join(", ")))?;
        self.say("Choose a language from the list above.")?;

        let answer = self.ask("Language: ")?;
        if languages.iter().any(|l| *l == answer) {
            Ok(answer)
        } else {
            Err(PromptError::InvalidLanguage {
                given: answer,
                available: languages.to_vec(),
            })
        }
    }

    /// Ask for the text to speak, typed or read from one of `text_files`.
    pub fn choose_text(&mut self, text_files: &[PathBuf]) -> Result<String, PromptError> {
        let text = if text_files.is_empty() {
            self.ask("Enter the text to speak: ")?
        } else {
            self.say("Text source:")?;
            self.say("0: Type text")?;
            for (idx, path) in text_files.iter().enumerate() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.say(&format!("{}: {name}", idx + 1))?;
            }

            let answer = self.ask("Number of the text source: ")?;
            if answer == "0" {
                self.ask("Enter the text to speak: ")?
            } else {
                let idx = parse_menu_choice(&answer, text_files.len())?;
                tracing::debug!(path = %text_files[idx].display(), "Reading text file");
                std::fs::read_to_string(&text_files[idx])?
            }
        };

        if text.trim().is_empty() {
            return Err(PromptError::EmptyText);
        }

        Ok(text)
    }

    /// Ask how many variations to render.
    ///
    /// Only plain digits count; anything else, including `0` and signed
    /// numbers, means 1.
    pub fn variation_count(&mut self) -> Result<usize, PromptError> {
        let answer = self.ask("How many variations should be generated? (default: 1): ")?;
        let digits_only = !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit());

        Ok(match answer.parse::<usize>() {
            Ok(count) if digits_only && count > 0 => count,
            _ => {
                if !answer.is_empty() {
                    tracing::warn!(answer = %answer, "Not a positive number, generating 1 variation");
                }
                1
            }
        })
    }

    /// Ask for the output file prefix.
    pub fn base_name(&mut self) -> Result<String, PromptError> {
        let answer =
            self.ask(&format!("Base name for output files (default: '{DEFAULT_BASE_NAME}'): "))?;

        if answer.is_empty() {
            return Ok(DEFAULT_BASE_NAME.to_string());
        }

        OutputWriter::validate_name(&answer).map_err(|e| PromptError::InvalidName(e.to_string()))?;
        Ok(answer)
    }

    /// Ask which speaker reference to clone.
    pub fn choose_speaker(&mut self, speakers: &[Speaker]) -> Result<Speaker, PromptError> {
        if speakers.is_empty() {
            return Err(PromptError::NoSpeakers);
        }

        self.say("Available speakers:")?;
        for (idx, speaker) in speakers.iter().enumerate() {
            match speaker.duration {
                Some(duration) => {
                    self.say(&format!("{}: {} ({duration:.1}s)", idx + 1, speaker.name))?
                }
                None => self.say(&format!("{}: {}", idx + 1, speaker.name))?,
            }
        }

        let answer = self.ask("Number of the speaker: ")?;
        let idx = parse_menu_choice(&answer, speakers.len())?;
        Ok(speakers[idx].clone())
    }

    /// Ask for the emotion. Empty input means Neutral.
    pub fn choose_emotion(&mut self) -> Result<Emotion, PromptError> {
        self.say("Available emotions:")?;
        for (idx, emotion) in Emotion::ALL.iter().enumerate() {
            self.say(&format!("{}: {emotion}", idx + 1))?;
        }

        let answer = self.ask("Number of the emotion (default: 1): ")?;
        if answer.is_empty() {
            return Ok(Emotion::default());
        }

        let idx = parse_menu_choice(&answer, Emotion::ALL.len())?;
        Ok(Emotion::ALL[idx])
    }

    /// Ask for the speech speed multiplier.
    pub fn speed(&mut self) -> Result<f32, PromptError> {
        let answer = self.ask(&format!(
            "Speech speed ({MIN_SPEED} to {MAX_SPEED}, default: {DEFAULT_SPEED}): "
        ))?;

        if answer.is_empty() {
            return Ok(DEFAULT_SPEED);
        }

        match answer.parse::<f32>() {
            Ok(speed) if (MIN_SPEED..=MAX_SPEED).contains(&speed) => Ok(speed),
            _ => Err(PromptError::InvalidNumber(answer)),
        }
    }
}
