//! Seeded improved Perlin noise sampler.

// Noise code uses mathematical single-letter variables (x, y, z, u, v, w)
#![allow(clippy::many_single_char_names)]

use super::{
    FractalParams, NoiseTables,
    math::{fade, lattice_floor, lerp},
    tables::dot,
};

/// Improved Perlin noise generator.
///
/// Owns one permutation table and one gradient table and nothing else, so
/// sampling takes `&self` and may run from many threads at once. Re-seeding
/// takes `&mut self` and swaps in freshly built tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerlinNoise {
    tables: NoiseTables,
}

impl PerlinNoise {
    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            tables: NoiseTables::build(seed),
        }
    }

    /// Creates a generator from a non-reproducible seed, see [`entropy_seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Rebuilds both tables from `seed`, replacing the old ones wholesale.
    pub fn seed(&mut self, seed: i64) {
        self.tables = NoiseTables::build(seed);
    }

    /// The tables this generator samples from.
    #[must_use]
    pub fn tables(&self) -> &NoiseTables {
        &self.tables
    }

    /// Samples 2D noise. Exactly `noise_3d(x, y, 0.0)`.
    #[inline]
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise_3d(x, y, 0.0)
    }

    /// Samples 3D noise. The result lies in `[-1, 1]` for finite input.
    ///
    /// Gradients with three non-zero components can push the interpolated sum
    /// slightly past the unit bound, so it is clamped. In-range values are
    /// returned untouched. NaN or infinite coordinates give an unspecified value.
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let (cx, x) = lattice_floor(x);
        let (cy, y) = lattice_floor(y);
        let (cz, z) = lattice_floor(z);

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let t = &self.tables;
        let a = t.hash(cx) + cy;
        let aa = t.hash(a) + cz;
        let ab = t.hash(a + 1) + cz;
        let b = t.hash(cx + 1) + cy;
        let ba = t.hash(b) + cz;
        let bb = t.hash(b + 1) + cz;

        let raw = lerp(
            lerp(
                lerp(
                    self.grad(aa, x, y, z),
                    self.grad(ba, x - 1.0, y, z),
                    u,
                ),
                lerp(
                    self.grad(ab, x, y - 1.0, z),
                    self.grad(bb, x - 1.0, y - 1.0, z),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    self.grad(aa + 1, x, y, z - 1.0),
                    self.grad(ba + 1, x - 1.0, y, z - 1.0),
                    u,
                ),
                lerp(
                    self.grad(ab + 1, x, y - 1.0, z - 1.0),
                    self.grad(bb + 1, x - 1.0, y - 1.0, z - 1.0),
                    u,
                ),
                v,
            ),
            w,
        );

        raw.clamp(-1.0, 1.0)
    }

    /// Fractal sum with the default parameters (6 octaves, persistence 0.5,
    /// lacunarity 2.0).
    #[must_use]
    pub fn fractal(&self, x: f64, y: f64, z: f64) -> f64 {
        self.fractal_with(x, y, z, &FractalParams::default())
    }

    /// Weighted sum of `params.octaves()` samples at rising frequency and
    /// falling amplitude, divided by the summed amplitudes.
    ///
    /// With `persistence > 1` the result may leave `[-1, 1]`. Returns `0.0`
    /// when the amplitudes sum to zero or overflow, as with `persistence = -1`
    /// over an even octave count.
    #[must_use]
    pub fn fractal_with(&self, x: f64, y: f64, z: f64, params: &FractalParams) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..params.octaves().get() {
            total += self.noise_3d(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;

            amplitude *= params.persistence();
            frequency *= params.lacunarity();
        }

        if max_value == 0.0 || !max_value.is_finite() {
            return 0.0;
        }
        total / max_value
    }

    /// Gradient contribution of the corner whose hash is `perm[index]`.
    #[inline]
    fn grad(&self, index: usize, x: f64, y: f64, z: f64) -> f64 {
        let hash = self.tables.hash(index);
        dot(self.tables.gradient(hash), x, y, z)
    }
}

/// Picks a non-reproducible seed in `0..65536`.
#[must_use]
pub fn entropy_seed() -> i64 {
    let seed = i64::from(rand::random::<u16>());
    log::trace!("Picked entropy seed {seed}");
    seed
}

impl Default for PerlinNoise {
    /// Same as [`PerlinNoise::from_entropy`].
    fn default() -> Self {
        Self::from_entropy()
    }
}
