//! Decomposition of a float into sexagesimal segments.
//!
//! A value in hours or degrees is split into one, two or three segments. All
//! but the last are whole numbers; the last carries the fraction, rounded to
//! the requested precision.
//!
//! # Rounding and carry
//!
//! The last segment is rounded with Rust's correctly rounded decimal
//! formatting. Rounding can push it to exactly 60 (`59.9996″` at two digits),
//! in which case it becomes 0 and the segment to its left gains one. That can
//! in turn push minutes to 60, which carries into the first segment. The first
//! segment has no modulus; if the carry gives it an extra digit, the renderer
//! reports a width overflow.
//!
//! ```
//! use celestial_sexa::segments::decompose;
//! use celestial_sexa::specifier::SegmentCount;
//! use celestial_sexa::DisplayUnit;
//!
//! // 9° 59′ 59.9996″
//! let v = 9.0 + 59.0 / 60.0 + 59.9996 / 3600.0;
//! let d = decompose(v, DisplayUnit::Degrees, SegmentCount::Three, 2).unwrap();
//! assert_eq!(d.segments, [10, 0, 0]);
//! assert_eq!(d.fraction, "00");
//! ```
//!
//! # Precision limit
//!
//! An `f64` carries about 16 significant decimal digits. The integer digits of
//! the last segment use some of them, and asking for more fraction digits than
//! remain would only print rounding noise. Such requests fail with
//! [`SexaError::PrecisionOverflow`](crate::SexaError::PrecisionOverflow).

use crate::constants::{SEXAGESIMAL_BASE, SIGNIFICANT_DIGITS};
use crate::errors::{SexaError, SexaResult};
use crate::math::{floor, integer_digits};
use crate::specifier::SegmentCount;
use crate::value::DisplayUnit;

/// Sign, whole segments and fraction digits of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    /// Only true if some printed digit is non-zero.
    pub negative: bool,
    /// One to three segments; all but the first are below 60.
    pub segments: Vec<u64>,
    /// Digits after the decimal separator of the last segment.
    pub fraction: String,
}

impl Decomposed {
    /// True if every segment and fraction digit is zero.
    pub fn is_zero(&self) -> bool {
        self.segments.iter().all(|&s| s == 0) && self.fraction.bytes().all(|b| b == b'0')
    }
}

/// Fraction digits available for `abs` when printed with `count` segments.
///
/// ```
/// use celestial_sexa::segments::available_precision;
/// use celestial_sexa::specifier::SegmentCount;
///
/// assert_eq!(available_precision(1.0, SegmentCount::Three), 12);
/// assert_eq!(available_precision(360.0, SegmentCount::Three), 9);
/// assert_eq!(available_precision(0.0005, SegmentCount::Three), 15);
/// ```
pub fn available_precision(abs: f64, count: SegmentCount) -> usize {
    SIGNIFICANT_DIGITS.saturating_sub(last_segment_digits(abs, count))
}

/// Integer digits of `abs` expressed in the unit of the last segment.
fn last_segment_digits(abs: f64, count: SegmentCount) -> usize {
    let scale = match count {
        SegmentCount::One => 1.0,
        SegmentCount::Two => 60.0,
        SegmentCount::Three => 3600.0,
    };
    integer_digits(abs * scale)
}

/// Splits `value` (in `unit`) into `count` segments rounded to `precision`.
///
/// # Errors
///
/// - [`SexaError::NotFinite`] for NaN and infinities
/// - [`SexaError::PrecisionOverflow`] if the value is too large for the
///   requested precision
pub fn decompose(
    value: f64,
    unit: DisplayUnit,
    count: SegmentCount,
    precision: usize,
) -> SexaResult<Decomposed> {
    if let Some(err) = SexaError::not_finite(value) {
        return Err(err);
    }
    let abs = value.abs();
    let digits = last_segment_digits(abs, count);
    let available = SIGNIFICANT_DIGITS.saturating_sub(digits);
    if digits > SIGNIFICANT_DIGITS || precision > available {
        return Err(SexaError::precision_overflow(unit, precision, available));
    }

    let n = count.get();
    let mut segments = Vec::with_capacity(n);
    let mut x = abs;
    for _ in 1..n {
        let whole = floor(x);
        segments.push(whole as u64);
        x = (x - whole) * 60.0;
    }

    let rounded = format!("{x:.precision$}");
    let (int_part, fraction) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.to_string()),
        None => (rounded.as_str(), String::new()),
    };
    let last = int_part
        .parse::<u64>()
        .map_err(|_| SexaError::precision_overflow(unit, precision, available))?;
    segments.push(last);

    for i in (1..n).rev() {
        if segments[i] >= SEXAGESIMAL_BASE {
            segments[i] -= SEXAGESIMAL_BASE;
            segments[i - 1] += 1;
        }
    }

    let mut d = Decomposed {
        negative: value < 0.0,
        segments,
        fraction,
    };
    if d.negative && d.is_zero() {
        d.negative = false;
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OverflowKind;

    fn dms(v: f64, precision: usize) -> Decomposed {
        decompose(v, DisplayUnit::Degrees, SegmentCount::Three, precision).unwrap()
    }

    #[test]
    fn test_three_segments() {
        let d = dms(23.0 + 26.0 / 60.0 + 44.0 / 3600.0, 0);
        assert_eq!(d.segments, [23, 26, 44]);
        assert_eq!(d.fraction, "");
        assert!(!d.negative);
    }

    #[test]
    fn test_fraction_digits() {
        let d = dms(12.345678, 2);
        assert_eq!(d.segments, [12, 20, 44]);
        assert_eq!(d.fraction, "44");
    }

    #[test]
    fn test_negative() {
        let d = dms(-(13.0 + 47.0 / 60.0 + 22.0 / 3600.0), 0);
        assert!(d.negative);
        assert_eq!(d.segments, [13, 47, 22]);
    }

    #[test]
    fn test_seconds_carry_into_minutes() {
        let d = dms(1.0 + 25.0 / 60.0 + 59.9996 / 3600.0, 2);
        assert_eq!(d.segments, [1, 26, 0]);
        assert_eq!(d.fraction, "00");
    }

    #[test]
    fn test_carry_through_minutes_into_degrees() {
        let d = dms(1.0 + 59.0 / 60.0 + 59.9999 / 3600.0, 2);
        assert_eq!(d.segments, [2, 0, 0]);
        assert_eq!(d.fraction, "00");
    }

    #[test]
    fn test_two_segment_carry() {
        let d = decompose(10.999999, DisplayUnit::Hours, SegmentCount::Two, 2).unwrap();
        assert_eq!(d.segments, [11, 0]);
        assert_eq!(d.fraction, "00");
    }

    #[test]
    fn test_one_segment_rounds_up() {
        let d = decompose(9.9996, DisplayUnit::Degrees, SegmentCount::One, 3).unwrap();
        assert_eq!(d.segments, [10]);
        assert_eq!(d.fraction, "000");
    }

    #[test]
    fn test_one_segment_small_value() {
        let d = decompose(0.089876, DisplayUnit::Degrees, SegmentCount::One, 6).unwrap();
        assert_eq!(d.segments, [0]);
        assert_eq!(d.fraction, "089876");
    }

    #[test]
    fn test_negative_zero_after_rounding() {
        let d = dms(-1e-7, 0);
        assert!(!d.negative);
        assert!(d.is_zero());

        let d = dms(-0.0, 0);
        assert!(!d.negative);
    }

    #[test]
    fn test_not_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = decompose(v, DisplayUnit::Hours, SegmentCount::One, 0).unwrap_err();
            assert_eq!(err.kind(), OverflowKind::NotFinite);
        }
    }

    #[test]
    fn test_precision_limit() {
        assert!(decompose(360.0, DisplayUnit::Degrees, SegmentCount::Three, 9).is_ok());
        let err = decompose(360.0, DisplayUnit::Degrees, SegmentCount::Three, 10).unwrap_err();
        assert_eq!(
            err,
            SexaError::precision_overflow(DisplayUnit::Degrees, 10, 9)
        );
    }

    #[test]
    fn test_huge_value_overflows_at_zero_precision() {
        let err = decompose(1e300, DisplayUnit::Degrees, SegmentCount::One, 0).unwrap_err();
        assert_eq!(err.kind(), OverflowKind::Precision);
    }

    #[test]
    fn test_large_value_leaves_no_room_for_seconds() {
        // 1e14 degrees is 3.6e17 arcseconds: more digits than an f64 holds.
        let err = decompose(1e14, DisplayUnit::Degrees, SegmentCount::Three, 0).unwrap_err();
        assert_eq!(err.kind(), OverflowKind::Precision);
        assert!(decompose(1e14, DisplayUnit::Degrees, SegmentCount::One, 0).is_ok());
    }

    #[test]
    fn test_magnitude_beyond_f64_range_in_seconds() {
        // 1e305 degrees is finite, but not in arcseconds.
        for n in [SegmentCount::One, SegmentCount::Two, SegmentCount::Three] {
            let err = decompose(1e305, DisplayUnit::Degrees, n, 0).unwrap_err();
            assert_eq!(err.kind(), OverflowKind::Precision);
        }
        let err = decompose(-f64::MAX, DisplayUnit::Hours, SegmentCount::Three, 2).unwrap_err();
        assert_eq!(err.kind(), OverflowKind::Precision);
    }

    #[test]
    fn test_huge_precision_does_not_overflow_the_check() {
        let err = decompose(1.0, DisplayUnit::Degrees, SegmentCount::One, usize::MAX).unwrap_err();
        assert_eq!(err.kind(), OverflowKind::Precision);
    }

    #[test]
    fn test_available_precision_shrinks_with_magnitude() {
        assert_eq!(available_precision(0.0, SegmentCount::One), 15);
        assert_eq!(available_precision(1.0, SegmentCount::Three), 12);
        assert_eq!(available_precision(360.0, SegmentCount::Three), 9);
        assert_eq!(available_precision(360.0, SegmentCount::One), 13);
    }
}
