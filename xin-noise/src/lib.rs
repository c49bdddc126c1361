//! # Xin Noise
//!
//! Seeded improved Perlin noise. A [`PerlinNoise`] owns a permutation table and
//! a matching gradient table built from an integer seed, and samples 2D/3D
//! scalar fields or octave-combined ("fractal") sums from them.
//!
//! Output is bit-reproducible for a given seed: the table builder consumes a
//! fixed-width xorshift stream in a fixed order, so two samplers built from the
//! same seed agree on every value.
//!
//! ```
//! use xin_noise::{FractalParams, PerlinNoise};
//!
//! let noise = PerlinNoise::new(123);
//! let value = noise.noise_3d(0.3, 0.7, 0.2);
//! assert!((-1.0..=1.0).contains(&value));
//!
//! let params = FractalParams::new(4, 0.6, 1.9)?;
//! let detail = noise.fractal_with(0.3, 0.7, 0.2, &params);
//! assert!(detail.is_finite());
//! # Ok::<(), xin_noise::NoiseError>(())
//! ```

pub mod error;
pub mod noise;
pub mod random;

pub use error::NoiseError;
pub use noise::{FractalParams, NoiseTables, PerlinNoise};
