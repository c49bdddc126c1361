//! Seeded improved Perlin noise.
//!
//! [`NoiseTables`] turns a seed into a permutation table and a gradient table;
//! [`PerlinNoise`] samples single octaves and fractal sums from them.

mod fractal;
pub mod math;
mod perlin;
pub mod tables;

pub use fractal::FractalParams;
pub use perlin::{PerlinNoise, entropy_seed};
pub use tables::{Gradient, NoiseTables};
