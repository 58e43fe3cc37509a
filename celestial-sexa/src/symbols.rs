//! Unit glyphs and decimal separators.
//!
//! A [`Symbols`] table holds everything the formatter prints that is not a
//! digit or a sign:
//!
//! | Field | Default | Used for |
//! |-------|---------|----------|
//! | `dms_units` | `°` `′` `″` | [`Angle`](crate::Angle) segments |
//! | `hms_units` | `ʰ` `ᵐ` `ˢ` | [`HourAngle`](crate::HourAngle), [`RA`](crate::RA), [`Time`](crate::Time) segments |
//! | `dec_sep` | `.` | decimal separator |
//! | `dec_combine` | U+0323 combining dot below | combined-unit verbs `c`, `n`, `i` |
//!
//! An empty `dec_sep` is a valid mode for fixed-column output with an implied
//! decimal point: the fraction digits follow the integer digits directly.
//!
//! # Process-wide default
//!
//! Formatting without an explicit table uses [`default_symbols`]. The default
//! can be replaced exactly once, before anything reads it, with
//! [`set_default_symbols`]; after that it is immutable, so concurrent
//! formatting needs no locking.
//!
//! ```
//! use celestial_sexa::Symbols;
//!
//! let ascii = Symbols::default()
//!     .with_dms_units(["d", "m", "s"])
//!     .with_hms_units(["h", "m", "s"]);
//! assert_eq!(ascii.insert_unit("1.25", "s"), "1s.25");
//! ```

use crate::value::DisplayUnit;
use once_cell::sync::OnceCell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glyph table for units and decimal separators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Symbols {
    /// Degree, arcminute and arcsecond glyphs.
    pub dms_units: [String; 3],
    /// Hour, minute and second glyphs.
    pub hms_units: [String; 3],
    /// Plain decimal separator.
    pub dec_sep: String,
    /// Combining mark placed after the unit glyph by the combined-unit verbs.
    pub dec_combine: String,
}

pub const DMS_UNITS: [&str; 3] = ["°", "′", "″"];
pub const HMS_UNITS: [&str; 3] = ["ʰ", "ᵐ", "ˢ"];
pub const DEC_SEP: &str = ".";
pub const DEC_COMBINE: &str = "\u{0323}";

impl Default for Symbols {
    fn default() -> Self {
        Self {
            dms_units: DMS_UNITS.map(String::from),
            hms_units: HMS_UNITS.map(String::from),
            dec_sep: DEC_SEP.to_string(),
            dec_combine: DEC_COMBINE.to_string(),
        }
    }
}

impl Symbols {
    /// A table with every glyph empty, including the decimal separator.
    pub fn empty() -> Self {
        Self {
            dms_units: Default::default(),
            hms_units: Default::default(),
            dec_sep: String::new(),
            dec_combine: String::new(),
        }
    }

    pub fn with_dms_units(mut self, units: [&str; 3]) -> Self {
        self.dms_units = units.map(String::from);
        self
    }

    pub fn with_hms_units(mut self, units: [&str; 3]) -> Self {
        self.hms_units = units.map(String::from);
        self
    }

    pub fn with_dec_sep(mut self, sep: &str) -> Self {
        self.dec_sep = sep.to_string();
        self
    }

    pub fn with_dec_combine(mut self, combine: &str) -> Self {
        self.dec_combine = combine.to_string();
        self
    }

    /// The three segment glyphs for values displayed in `unit`.
    #[inline]
    pub fn units(&self, unit: DisplayUnit) -> &[String; 3] {
        match unit {
            DisplayUnit::Degrees => &self.dms_units,
            DisplayUnit::Hours => &self.hms_units,
        }
    }

    /// All non-empty segment glyphs of both sets.
    pub(crate) fn segment_glyphs(&self) -> impl Iterator<Item = &str> {
        self.dms_units
            .iter()
            .chain(self.hms_units.iter())
            .map(String::as_str)
            .filter(|g| !g.is_empty())
    }
}

static DEFAULT: OnceCell<Symbols> = OnceCell::new();

/// The process-wide default table.
///
/// Initialized with [`Symbols::default`] on first use unless
/// [`set_default_symbols`] ran earlier.
pub fn default_symbols() -> &'static Symbols {
    DEFAULT.get_or_init(Symbols::default)
}

/// Installs the process-wide default table.
///
/// Succeeds only once and only before the default is first read. On failure
/// the rejected table is handed back.
///
/// ```
/// use celestial_sexa::{default_symbols, set_default_symbols, Symbols};
///
/// // Something already formatted with the default, so the table is fixed.
/// let _ = default_symbols();
/// assert!(set_default_symbols(Symbols::empty()).is_err());
/// ```
pub fn set_default_symbols(symbols: Symbols) -> Result<(), Symbols> {
    DEFAULT.set(symbols)
}
