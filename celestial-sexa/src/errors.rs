//! Error types for sexagesimal formatting.
//!
//! Two disjoint classes of failure exist, and they travel on different channels:
//!
//! | Type | Cause | Channel |
//! |------|-------|---------|
//! | [`SexaError`] | The value cannot be shown in the requested format (overflow) | Stored on the [`Formatted`](crate::Formatted) wrapper, field filled with `*` |
//! | [`SpecError`] | The format specifier itself is malformed | Written inline into the output, e.g. `%!z(BADVERB)` |
//!
//! A value overflow is a data condition: the caller gets a complete field of
//! asterisks and may inspect the wrapper afterwards for the reason. A specifier
//! error is a programming error and is never recorded on the wrapper.
//!
//! ```
//! use celestial_sexa::{Angle, FmtAngle, OverflowKind};
//!
//! let f = FmtAngle::new(Angle::from_dms(false, 135, 0, 0.0));
//! assert_eq!(f.format("%2s"), "**********");
//! let err = f.err().unwrap();
//! assert_eq!(err.kind(), OverflowKind::Width);
//! assert_eq!(err.to_string(), "Degrees overflow width");
//! ```

use crate::value::DisplayUnit;
use core::fmt;
use thiserror::Error;

/// Classification of value overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    /// Integer digits of the first segment exceed the requested width.
    Width,
    /// Requested precision exceeds the digits the `f64` can represent.
    Precision,
    /// NaN or infinity.
    NotFinite,
}

/// The three non-finite `f64` classes, named the way they print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    NaN,
    PosInf,
    NegInf,
}

impl NonFinite {
    /// Classifies `x`, returning `None` for finite values.
    pub fn classify(x: f64) -> Option<Self> {
        if x.is_nan() {
            Some(Self::NaN)
        } else if x == f64::INFINITY {
            Some(Self::PosInf)
        } else if x == f64::NEG_INFINITY {
            Some(Self::NegInf)
        } else {
            None
        }
    }
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NaN => "NaN",
            Self::PosInf => "+Inf",
            Self::NegInf => "-Inf",
        })
    }
}

/// A value that cannot be expressed in the requested format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SexaError {
    /// The first segment needs more digits than the specifier's width.
    #[error("{unit} overflow width")]
    WidthOverflow {
        unit: DisplayUnit,
        width: usize,
        digits: usize,
    },

    /// More fractional digits requested than the value's magnitude allows.
    #[error("{unit} value too large for precision {requested} (at most {available} digits)")]
    PrecisionOverflow {
        unit: DisplayUnit,
        requested: usize,
        available: usize,
    },

    /// NaN, +Inf or -Inf.
    #[error("{value} overflows any format")]
    NotFinite { value: NonFinite },
}

/// Convenience alias for `Result<T, SexaError>`.
pub type SexaResult<T> = Result<T, SexaError>;

impl SexaError {
    /// Creates a [`WidthOverflow`](Self::WidthOverflow) error.
    pub fn width_overflow(unit: DisplayUnit, width: usize, digits: usize) -> Self {
        Self::WidthOverflow {
            unit,
            width,
            digits,
        }
    }

    /// Creates a [`PrecisionOverflow`](Self::PrecisionOverflow) error.
    pub fn precision_overflow(unit: DisplayUnit, requested: usize, available: usize) -> Self {
        Self::PrecisionOverflow {
            unit,
            requested,
            available,
        }
    }

    /// Creates a [`NotFinite`](Self::NotFinite) error, or `None` if `x` is finite.
    pub fn not_finite(x: f64) -> Option<Self> {
        NonFinite::classify(x).map(|value| Self::NotFinite { value })
    }

    pub fn kind(&self) -> OverflowKind {
        match self {
            Self::WidthOverflow { .. } => OverflowKind::Width,
            Self::PrecisionOverflow { .. } => OverflowKind::Precision,
            Self::NotFinite { .. } => OverflowKind::NotFinite,
        }
    }
}

/// A malformed format specifier.
///
/// The `Display` form is the diagnostic token written into the output in place
/// of the formatted value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The verb is not one of `s v c d m n o h i j`.
    #[error("%!{0}(BADVERB)")]
    BadVerb(char),

    /// The specifier ends before a verb.
    #[error("%!(NOVERB)")]
    NoVerb,

    /// The width is not a representable number.
    #[error("%!(BADWIDTH)")]
    BadWidth,

    /// The precision is not a representable number.
    #[error("%!(BADPREC)")]
    BadPrecision,

    /// Missing `%` or text after the verb.
    #[error("%!(BADSPEC {0})")]
    Syntax(String),
}
