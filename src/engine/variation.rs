//! Per-variation seed and temperature derivation.

/// Lowest temperature a variation may use.
pub const MIN_TEMPERATURE: f32 = 0.7;
/// Highest temperature a variation may use.
pub const MAX_TEMPERATURE: f32 = 1.3;
/// Temperature added per variation index.
pub const TEMPERATURE_STEP: f32 = 0.1;

/// One synthesis run of a sentence with perturbed sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    /// 0-based position in the batch.
    pub index: usize,
    /// `None` leaves seeding to the backend.
    pub seed: Option<i64>,
    pub temperature: f32,
}

impl Variation {
    pub fn derive(index: usize, base_seed: Option<i64>, base_temperature: f32) -> Self {
        Self {
            index,
            seed: base_seed.map(|seed| derive_seed(seed, index)),
            temperature: derive_temperature(base_temperature, index),
        }
    }
}

/// Seed of variation `index`: `base + index`.
pub fn derive_seed(base: i64, index: usize) -> i64 {
    base.wrapping_add(index as i64)
}

/// Temperature of variation `index`, clamped to `[0.7, 1.3]`.
pub fn derive_temperature(base: f32, index: usize) -> f32 {
    (base + TEMPERATURE_STEP * index as f32).clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}

/// Variations `0..count` in order.
pub fn plan_variations(count: usize, base_seed: Option<i64>, base_temperature: f32) -> Vec<Variation> {
    (0..count)
        .map(|index| Variation::derive(index, base_seed, base_temperature))
        .collect()
}
