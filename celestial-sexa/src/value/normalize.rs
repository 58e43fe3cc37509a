//! Range reduction for right ascension.
//!
//! Right ascension is cyclic and never negative, so it is stored in [0, 2pi).
//! The reduction uses `libm::fmod` (via [`crate::math::fmod`]) and then shifts
//! negative remainders up by one turn.

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
///
/// Non-finite input comes out as NaN, so the formatter can still report it.
///
/// ```
/// use celestial_sexa::value::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);  // -90 deg -> 270 deg
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
///
/// let y = wrap_0_2pi(5.0 * PI);  // 900 deg -> 180 deg
/// assert!((y - PI).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        let shifted = w + TWOPI;
        // A remainder of -1e-20 rounds back up to exactly one turn.
        if shifted >= TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_wrap_0_2pi_basic() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert!((wrap_0_2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
        assert!((wrap_0_2pi(5.0 * PI) - PI).abs() < 1e-14);
    }

    #[test]
    fn test_wrap_0_2pi_full_turn() {
        assert_eq!(wrap_0_2pi(TWOPI), 0.0);
        assert_eq!(wrap_0_2pi(-TWOPI), 0.0);
    }

    #[test]
    fn test_wrap_0_2pi_tiny_negative_stays_in_range() {
        let w = wrap_0_2pi(-1e-20);
        assert!((0.0..TWOPI).contains(&w));
    }

    #[test]
    fn test_wrap_0_2pi_nan() {
        assert!(wrap_0_2pi(f64::NAN).is_nan());
    }
}
