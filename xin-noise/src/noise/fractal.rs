//! Parameters for octave-combined (fractal) noise.

use std::num::NonZeroU32;

use serde::Deserialize;

use crate::NoiseError;

const DEFAULT_OCTAVES: NonZeroU32 = NonZeroU32::MIN.saturating_add(5);
const DEFAULT_PERSISTENCE: f64 = 0.5;
const DEFAULT_LACUNARITY: f64 = 2.0;

/// Octave count, amplitude decay and frequency growth of a fractal sum.
///
/// A value of this type always has at least one octave and finite
/// multipliers. Amplitude sums that still cancel to zero or overflow make
/// [`PerlinNoise::fractal_with`](crate::PerlinNoise::fractal_with) return `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawFractalParams")]
pub struct FractalParams {
    octaves: NonZeroU32,
    persistence: f64,
    lacunarity: f64,
}

impl FractalParams {
    /// Validates and builds a parameter set.
    ///
    /// Zero octaves and non-finite multipliers are rejected. Any finite
    /// persistence or lacunarity is accepted, including values above 1.
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Result<Self, NoiseError> {
        let octaves = NonZeroU32::new(octaves).ok_or(NoiseError::ZeroOctaves)?;
        Ok(Self {
            octaves,
            persistence: finite("persistence", persistence)?,
            lacunarity: finite("lacunarity", lacunarity)?,
        })
    }

    /// Number of octaves summed.
    #[must_use]
    pub fn octaves(&self) -> NonZeroU32 {
        self.octaves
    }

    /// Amplitude multiplier applied after each octave.
    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Frequency multiplier applied after each octave.
    #[must_use]
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Returns a copy with a different octave count.
    pub fn with_octaves(self, octaves: u32) -> Result<Self, NoiseError> {
        Self::new(octaves, self.persistence, self.lacunarity)
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, NoiseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::NonFiniteParameter { name, value })
    }
}

/// Unvalidated on-disk form; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawFractalParams {
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl Default for RawFractalParams {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES.get(),
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

impl TryFrom<RawFractalParams> for FractalParams {
    type Error = NoiseError;

    fn try_from(raw: RawFractalParams) -> Result<Self, Self::Error> {
        Self::new(raw.octaves, raw.persistence, raw.lacunarity)
    }
}
