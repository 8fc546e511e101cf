//! Variation engine.
//!
//! Derives per-variation sampling parameters and coordinates the backend
//! and the output writer to render a batch of audio files.

mod tts;
mod variation;

pub use tts::{EngineError, GeneratedAudio, SynthesisJob, VariationEngine};
pub use variation::{
    MAX_TEMPERATURE, MIN_TEMPERATURE, TEMPERATURE_STEP, Variation, derive_seed,
    derive_temperature, plan_variations,
};
