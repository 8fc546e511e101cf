//! tts-variations: generate spoken-audio variations of text.
//!
//! This crate drives a multilingual text-to-speech model hosted by an external
//! backend server. Each sentence of the input is rendered several times with a
//! perturbed seed and sampling temperature, one WAV file per variation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod output;
pub mod prompt;
pub mod session;
pub mod speaker;
pub mod text;
