//! Placement of a unit glyph on a formatted decimal numeral.
//!
//! Three conventions exist for the last, decimal segment of a sexagesimal
//! value. Given the numeral `45.6` and the arcsecond glyph:
//!
//! | Convention | Result | Function |
//! |------------|--------|----------|
//! | following | `45.6″` | plain concatenation |
//! | combined | `45″̣6` | [`Symbols::combine_unit`] |
//! | inserted | `45″.6` | [`Symbols::insert_unit`] |
//!
//! The combined form replaces the decimal separator with the unit glyph
//! followed by a combining mark (by default U+0323, combining dot below), so
//! the dot renders under the unit. How well that looks depends on the font;
//! monospace fonts in terminals and editors are the usual offenders.
//!
//! [`Symbols::strip_unit`] reverses either transform. It only accepts strings
//! that unambiguously came from one of them and never guesses.
//!
//! The free functions in this module use the process-wide
//! [`default_symbols`](crate::default_symbols).
//!
//! ```
//! use celestial_sexa::units::{combine_unit, insert_unit, strip_unit};
//!
//! assert_eq!(insert_unit("1.25", "°"), "1°.25");
//! assert_eq!(combine_unit("1.25", "°"), "1°\u{0323}25");
//!
//! let (s, ok) = strip_unit("1°.25", "°");
//! assert_eq!((s.as_ref(), ok), ("1.25", true));
//! ```

use crate::symbols::{default_symbols, Symbols};
use std::borrow::Cow;

impl Symbols {
    #[inline]
    fn find_sep(&self, d: &str) -> Option<usize> {
        if self.dec_sep.is_empty() {
            return None;
        }
        d.find(self.dec_sep.as_str())
    }

    /// Inserts `unit` immediately before the decimal separator of `d`.
    ///
    /// If `d` has no separator, or the table's separator is empty, the unit
    /// is appended instead: `0125` becomes `0125°`.
    pub fn insert_unit(&self, d: &str, unit: &str) -> String {
        match self.find_sep(d) {
            Some(i) => {
                let mut out = String::with_capacity(d.len() + unit.len());
                out.push_str(&d[..i]);
                out.push_str(unit);
                out.push_str(&d[i..]);
                out
            }
            None => format!("{d}{unit}"),
        }
    }

    /// Replaces the decimal separator of `d` with `unit` and the combining mark.
    ///
    /// Same fallback as [`insert_unit`](Self::insert_unit) when there is no
    /// separator.
    pub fn combine_unit(&self, d: &str, unit: &str) -> String {
        match self.find_sep(d) {
            Some(i) => {
                let frac = &d[i + self.dec_sep.len()..];
                let mut out =
                    String::with_capacity(d.len() + unit.len() + self.dec_combine.len());
                out.push_str(&d[..i]);
                out.push_str(unit);
                out.push_str(&self.dec_combine);
                out.push_str(frac);
                out
            }
            None => format!("{d}{unit}"),
        }
    }

    /// Removes `unit` placed by [`insert_unit`](Self::insert_unit) or
    /// [`combine_unit`](Self::combine_unit), restoring the decimal separator.
    ///
    /// Returns the stripped numeral and `true`, or `d` unchanged and `false`
    /// when:
    ///
    /// - `unit` does not occur, or occurs more than once
    /// - the table's decimal separator is empty
    /// - another segment glyph of the table occurs (multi-segment strings)
    /// - `unit` is followed by anything other than the separator, the
    ///   combining mark, or the end of a numeral that has no separator
    ///
    /// ```
    /// use celestial_sexa::Symbols;
    ///
    /// let sym = Symbols::default();
    /// assert_eq!(sym.strip_unit("1°\u{0323}25", "°"), ("1.25".into(), true));
    /// assert_eq!(sym.strip_unit("1°25′44.5″", "°"), ("1°25′44.5″".into(), false));
    /// assert_eq!(sym.strip_unit("1°25", "°"), ("1°25".into(), false));
    /// ```
    pub fn strip_unit<'a>(&self, d: &'a str, unit: &str) -> (Cow<'a, str>, bool) {
        let unchanged = (Cow::Borrowed(d), false);
        if unit.is_empty() || self.dec_sep.is_empty() {
            return unchanged;
        }
        let Some(xu) = d.find(unit) else {
            return unchanged;
        };
        let head = &d[..xu];
        let tail = &d[xu + unit.len()..];
        if tail.contains(unit) {
            return unchanged;
        }
        let multi_segment = self
            .segment_glyphs()
            .filter(|g| *g != unit)
            .any(|g| head.contains(g) || tail.contains(g));
        if multi_segment {
            return unchanged;
        }

        if tail.starts_with(self.dec_sep.as_str()) {
            return (Cow::Owned(format!("{head}{tail}")), true);
        }
        if !self.dec_combine.is_empty() {
            if let Some(frac) = tail.strip_prefix(self.dec_combine.as_str()) {
                return (Cow::Owned(format!("{head}{}{frac}", self.dec_sep)), true);
            }
        }
        // Appended form: a numeral printed without fraction.
        if tail.is_empty() && !head.contains(self.dec_sep.as_str()) {
            return (Cow::Borrowed(head), true);
        }
        unchanged
    }
}

/// [`Symbols::insert_unit`] with the default table.
pub fn insert_unit(d: &str, unit: &str) -> String {
    default_symbols().insert_unit(d, unit)
}

/// [`Symbols::combine_unit`] with the default table.
pub fn combine_unit(d: &str, unit: &str) -> String {
    default_symbols().combine_unit(d, unit)
}

/// [`Symbols::strip_unit`] with the default table.
pub fn strip_unit<'a>(d: &'a str, unit: &str) -> (Cow<'a, str>, bool) {
    default_symbols().strip_unit(d, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(d: &str, unit: &str) -> (String, bool) {
        let (s, ok) = strip_unit(d, unit);
        (s.into_owned(), ok)
    }

    #[test]
    fn test_combine_unit() {
        assert_eq!(combine_unit("1.25", "°"), "1°\u{0323}25");
    }

    #[test]
    fn test_insert_unit() {
        assert_eq!(insert_unit("1.25", "°"), "1°.25");
    }

    #[test]
    fn test_no_separator_appends() {
        assert_eq!(insert_unit("0125", "°"), "0125°");
        assert_eq!(combine_unit("0125", "°"), "0125°");

        let no_sep = Symbols::empty();
        assert_eq!(no_sep.insert_unit("0125", "°"), "0125°");
        assert_eq!(no_sep.combine_unit("0125", "°"), "0125°");
    }

    #[test]
    fn test_strip_inverts_insert_and_combine() {
        for d in ["1.25", "1.", "1", ".25"] {
            for sym in ["°", "\"", "h", "ʰ"] {
                let inserted = insert_unit(d, sym);
                assert_ne!(inserted, d);
                assert_eq!(stripped(&inserted, sym), (d.to_string(), true));

                let combined = combine_unit(d, sym);
                assert_ne!(combined, d);
                assert_eq!(stripped(&combined, sym), (d.to_string(), true));
            }
        }
    }

    #[test]
    fn test_strip_missing_unit() {
        assert_eq!(stripped("1.25", "°"), ("1.25".to_string(), false));
    }

    #[test]
    fn test_strip_wrong_unit() {
        assert_eq!(stripped("1.25ʰ", "°"), ("1.25ʰ".to_string(), false));
    }

    #[test]
    fn test_strip_multiple_segments() {
        assert_eq!(
            stripped("1°25′44.5″", "°"),
            ("1°25′44.5″".to_string(), false)
        );
        assert_eq!(
            stripped("1°25′44″.5", "″"),
            ("1°25′44″.5".to_string(), false)
        );
    }

    #[test]
    fn test_strip_missing_separator() {
        assert_eq!(stripped("1°25", "°"), ("1°25".to_string(), false));
    }

    #[test]
    fn test_strip_repeated_unit() {
        assert_eq!(stripped("1°.2°5", "°"), ("1°.2°5".to_string(), false));
    }

    #[test]
    fn test_strip_following_form_with_fraction_is_rejected() {
        assert_eq!(stripped("1.25°", "°"), ("1.25°".to_string(), false));
    }

    #[test]
    fn test_strip_empty_separator() {
        let no_sep = Symbols::empty();
        let (s, ok) = no_sep.strip_unit("1°.25", "°");
        assert_eq!((s.as_ref(), ok), ("1°.25", false));
        let (s, ok) = no_sep.strip_unit("0125°", "°");
        assert_eq!((s.as_ref(), ok), ("0125°", false));
    }

    #[test]
    fn test_strip_unchanged_input_is_borrowed() {
        let (s, ok) = strip_unit("1°25", "°");
        assert!(!ok);
        assert!(matches!(s, Cow::Borrowed(_)));
    }

    #[test]
    fn test_custom_separator() {
        let comma = Symbols::default().with_dec_sep(",");
        assert_eq!(comma.insert_unit("1,25", "°"), "1°,25");
        assert_eq!(comma.combine_unit("1,25", "°"), "1°\u{0323}25");
        let (s, ok) = comma.strip_unit("1°\u{0323}25", "°");
        assert_eq!((s.as_ref(), ok), ("1,25", true));
    }
}
