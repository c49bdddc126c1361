//! Permutation and gradient tables for improved Perlin noise.

use std::array;

use crate::random::XorShift32;

/// Number of distinct lattice hashes.
pub const PERIOD: usize = 256;

/// Length of the doubled tables, so `perm[i + 1]` never needs a wrap.
pub const TABLE_SIZE: usize = PERIOD * 2;

/// A gradient with components in `{-1, 0, 1}`.
pub type Gradient = [i8; 3];

/// Selects the gradient for a permutation value from its low four bits.
///
/// Eight vector shapes, with signs picked by `h < 8`, `h < 4 || h == 12 ||
/// h == 14` and `h & 1`.
#[must_use]
pub fn gradient_for(value: u8) -> Gradient {
    let h = value & 15;
    let u = if h < 8 { 1 } else { -1 };
    let v = if h < 4 || h == 12 || h == 14 { 1 } else { -1 };
    let w = if h & 1 == 1 { 1 } else { -1 };

    match h & 7 {
        0 => [u, v, 0],
        1 => [-v, u, 0],
        2 => [0, u, v],
        3 => [0, -v, u],
        4 => [u, 0, v],
        5 => [-v, 0, u],
        6 => [v, 0, u],
        _ => [u, v, w],
    }
}

/// Dot product of a gradient with an offset vector.
#[inline]
#[must_use]
pub fn dot(gradient: Gradient, x: f64, y: f64, z: f64) -> f64 {
    f64::from(gradient[0]) * x + f64::from(gradient[1]) * y + f64::from(gradient[2]) * z
}

/// The permutation table and the gradient table derived from it.
///
/// The first 256 permutation entries are a bijection on `0..=255` and the
/// second 256 repeat them. `gradients[i]` is always `gradient_for(permutation[i])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseTables {
    permutation: [u8; TABLE_SIZE],
    gradients: [Gradient; TABLE_SIZE],
}

impl NoiseTables {
    /// Builds both tables from a seed. Any seed is accepted.
    #[must_use]
    pub fn build(seed: i64) -> Self {
        let mut random = XorShift32::from_seed(seed);
        log::debug!(
            "Building noise tables for seed {seed} (state {})",
            random.state()
        );

        let mut p: [u8; PERIOD] = array::from_fn(|i| i as u8);

        // Fisher-Yates, high index first
        for i in (1..PERIOD).rev() {
            let j = random.next_index(i + 1, PERIOD - 1);
            p.swap(i, j);
        }

        let permutation: [u8; TABLE_SIZE] = array::from_fn(|i| p[i & (PERIOD - 1)]);
        let gradients = array::from_fn(|i| gradient_for(permutation[i]));

        Self {
            permutation,
            gradients,
        }
    }

    /// The 512-entry permutation table.
    #[must_use]
    pub fn permutation(&self) -> &[u8; TABLE_SIZE] {
        &self.permutation
    }

    /// The 512-entry gradient table.
    #[must_use]
    pub fn gradients(&self) -> &[Gradient; TABLE_SIZE] {
        &self.gradients
    }

    /// Permutation value at `index` widened for further hashing.
    #[inline]
    pub(crate) fn hash(&self, index: usize) -> usize {
        usize::from(self.permutation[index])
    }

    #[inline]
    pub(crate) fn gradient(&self, index: usize) -> Gradient {
        self.gradients[index]
    }
}
