//! Interpolation helpers shared by the samplers.

/// Wraps lattice cells into the permutation table's period of 256.
pub const PERIOD_MASK: i64 = 255;

/// Quintic fade curve `t³(t(6t − 15) + 10)`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `(1 − t)·a + t·b`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Splits a coordinate into its wrapped lattice cell and fractional offset.
///
/// The cell is `floor(v) & 255`; the offset is `v − floor(v)` in `[0, 1)`.
/// Non-finite input yields an unspecified (but non-panicking) result.
#[inline]
#[must_use]
pub fn lattice_floor(v: f64) -> (usize, f64) {
    let floored = v.floor();
    let cell = (floored as i64) & PERIOD_MASK;
    (cell as usize, v - floored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(fade(1.0).to_bits(), 1.0_f64.to_bits());
        assert_eq!(fade(0.5).to_bits(), 0.5_f64.to_bits());
    }

    #[test]
    fn test_fade_is_quintic_not_cubic() {
        let t: f64 = 0.25;
        let cubic = t * t * (3.0 - 2.0 * t);
        let quintic = 6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3);
        assert!((fade(t) - quintic).abs() < 1e-15);
        assert!((fade(t) - cubic).abs() > 1e-3);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 6.0, 0.0).to_bits(), 2.0_f64.to_bits());
        assert_eq!(lerp(2.0, 6.0, 1.0).to_bits(), 6.0_f64.to_bits());
        assert_eq!(lerp(2.0, 6.0, 0.25).to_bits(), 3.0_f64.to_bits());
    }

    #[test]
    fn test_lattice_floor_wraps() {
        assert_eq!(lattice_floor(1.5), (1, 0.5));
        assert_eq!(lattice_floor(-0.25), (255, 0.75));
        assert_eq!(lattice_floor(256.0), (0, 0.0));
        assert_eq!(lattice_floor(-256.5), (255, 0.5));
        assert_eq!(lattice_floor(5.0e9 + 0.5).0, (5_000_000_000_i64 & 255) as usize);
    }

    #[test]
    fn test_lattice_floor_non_finite_does_not_panic() {
        let _ = lattice_floor(f64::NAN);
        let _ = lattice_floor(f64::INFINITY);
        let _ = lattice_floor(f64::NEG_INFINITY);
    }
}
