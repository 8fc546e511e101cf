//! CLI argument definitions.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

/// Generate spoken-audio variations of text with a multilingual TTS model.
#[derive(Parser, Debug)]
#[command(name = "tts-variations")]
#[command(about = "Generate spoken-audio variations of text with a multilingual TTS model")]
#[command(version)]
pub struct Args {
    /// Configuration file (default: ./config.json, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Folder with speaker reference WAVs and optional text files
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Folder the generated audio is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Backend server URL (overrides the config file)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List the languages of the configured model and exit
    #[arg(long)]
    pub list_languages: bool,

    /// List speaker reference WAVs in the input folder and exit
    #[arg(long)]
    pub list_speakers: bool,

    /// List the built-in speakers of the configured model and exit
    #[arg(long)]
    pub list_model_speakers: bool,
}

/// Emotion the speaker should convey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Dull,
}

impl Emotion {
    /// All emotions in menu order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Dull,
    ];

    /// Returns the name sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Dull => "Dull",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
