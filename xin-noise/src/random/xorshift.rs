/// Divisor mapping the absolute 32-bit state onto `[0, 1]`.
const STATE_SCALE: f64 = 2_147_483_647.0;

/// 32-bit xorshift stream (shift triple 13/17/5) on a signed state.
///
/// The state is an `i32` so `>>` is an arithmetic shift and `<<` discards the
/// high bits, which is what keeps table construction bit-reproducible.
/// A zero state is a fixed point: every draw from it is `0.0`.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: i32,
}

impl XorShift32 {
    /// Creates a stream from a seed, keeping its low 32 bits as the working state.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        Self { state: seed as i32 }
    }

    /// Current working state.
    #[must_use]
    pub fn state(&self) -> i32 {
        self.state
    }

    fn next_state(&mut self) -> i32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Advances the stream and returns `|state| / 2147483647`.
    ///
    /// The result lies in `[0, 1)` except for the single state `i32::MIN`,
    /// which maps just above `1.0`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_state()).abs() / STATE_SCALE
    }

    /// Draws `floor(next_f64() * bound)`, clamped to `max_index`.
    pub fn next_index(&mut self, bound: usize, max_index: usize) -> usize {
        scale_draw(self.next_f64(), bound).min(max_index)
    }
}

#[inline]
fn scale_draw(draw: f64, bound: usize) -> usize {
    (draw * bound as f64).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_sequence_matches_reference() {
        let mut rng = XorShift32::from_seed(123);
        let states: Vec<i32> = (0..3)
            .map(|_| {
                rng.next_f64();
                rng.state()
            })
            .collect();
        assert_eq!(states, [31_682_556, -276_305_998, 2_101_636_938]);
    }

    #[test]
    fn test_draws_match_reference() {
        let mut rng = XorShift32::from_seed(123);
        assert_eq!(rng.next_f64().to_bits(), 0.014_753_339_819_029_598_f64.to_bits());
        assert_eq!(rng.next_f64().to_bits(), 0.128_665_006_779_443_95_f64.to_bits());
        assert_eq!(rng.next_f64().to_bits(), 0.978_650_962_458_295_3_f64.to_bits());
    }

    #[test]
    fn test_negative_seed_uses_arithmetic_shift() {
        let mut rng = XorShift32::from_seed(-7);
        rng.next_f64();
        assert_eq!(rng.state(), 1_777_881);
        rng.next_f64();
        assert_eq!(rng.state(), -469_341_703);
    }

    #[test]
    fn test_wide_seed_keeps_low_bits() {
        let wide = XorShift32::from_seed(5_000_000_000);
        assert_eq!(wide.state(), 705_032_704);
        assert_eq!(XorShift32::from_seed(-1).state(), -1);
    }

    #[test]
    fn test_zero_seed_is_fixed_point() {
        let mut rng = XorShift32::from_seed(0);
        for _ in 0..16 {
            assert_eq!(rng.next_f64().to_bits(), 0.0_f64.to_bits());
        }
    }

    #[test]
    fn test_index_clamped_for_min_state() {
        let draw = f64::from(i32::MIN).abs() / STATE_SCALE;
        assert!(draw > 1.0);
        assert_eq!(scale_draw(draw, 256), 256);
        assert_eq!(scale_draw(draw, 256).min(255), 255);
        assert_eq!(scale_draw(draw, 10), 10);
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = XorShift32::from_seed(987);
        for bound in (1..=256).rev() {
            assert!(rng.next_index(bound, 255) < bound);
        }
    }
}
