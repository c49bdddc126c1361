//! Errors raised while configuring noise sampling.

use thiserror::Error;

/// Errors that can occur when building fractal sampling parameters.
///
/// Sampling itself never fails; every check happens when a
/// [`FractalParams`](crate::FractalParams) is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A fractal sum needs at least one octave to normalise against.
    #[error("fractal noise requires at least one octave")]
    ZeroOctaves,
    /// A fractal parameter was NaN or infinite.
    #[error("fractal parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
