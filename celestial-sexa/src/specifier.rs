//! Format specifier parsing.
//!
//! A specifier has the shape
//!
//! ```text
//! %[flags][width][.precision]verb
//! ```
//!
//! The verb picks how many segments are printed and where the unit glyph of
//! the last, decimal segment goes:
//!
//! ```text
//! decimal-unit convention:            following  combined  inserted
//!
//! three segments, decimal in seconds:     s (v)      c         d
//! two segments, decimal in minutes:       m          n         o
//! one segment, decimal in hr/deg:         h          i         j
//! ```
//!
//! Flags:
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `+` | always print a sign |
//! | ` ` | leave a space where `+` would go (`+` wins) |
//! | `#` | print every segment, even leading zeros |
//! | `0` | zero-pad segments after the first; with a width, the first too |
//!
//! A width fixes the layout: it is the number of digits of the first segment
//! (not the total field width), implies `#`, implies ` ` unless `+` is given,
//! and space-pads unless `0` is given. Precision is the number of digits after
//! the decimal separator of the last segment and defaults to 0.
//!
//! ```
//! use celestial_sexa::specifier::{Convention, Directive, SegmentCount, SignPolicy};
//!
//! let d = Directive::parse("%+03.2c").unwrap();
//! assert_eq!(d.segments, SegmentCount::Three);
//! assert_eq!(d.convention, Convention::Combined);
//! assert_eq!(d.sign, SignPolicy::Always);
//! assert!(d.zero_pad && d.show_all);
//! assert_eq!((d.width, d.precision), (3, 2));
//! ```

use crate::constants::MAX_FIELD;
use crate::errors::SpecError;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of segments printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentCount {
    /// Decimal hours or degrees.
    One = 1,
    /// Whole hours or degrees, decimal minutes.
    Two = 2,
    /// Whole hours or degrees, whole minutes, decimal seconds.
    Three = 3,
}

impl SegmentCount {
    #[inline]
    pub fn get(self) -> usize {
        self as usize
    }
}

/// Placement of the unit glyph on the decimal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `45.6″`
    Following,
    /// `45″̣6`
    Combined,
    /// `45″.6`
    Inserted,
}

/// Which sign glyph, if any, a non-negative value gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPolicy {
    /// `+` for non-negative values.
    Always,
    /// A space for non-negative values.
    Space,
    /// Nothing for non-negative values.
    Minus,
    /// Never a sign and no sign column; used for right ascension.
    Suppressed,
}

/// Flag characters of a specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub plus: bool,
    pub space: bool,
    pub sharp: bool,
    pub zero: bool,
}

/// A validated format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub segments: SegmentCount,
    pub convention: Convention,
    pub sign: SignPolicy,
    pub zero_pad: bool,
    pub show_all: bool,
    /// Digits of the first segment; 0 means unbounded.
    pub width: usize,
    pub precision: usize,
}

const VERBS: [(char, SegmentCount, Convention); 10] = [
    ('s', SegmentCount::Three, Convention::Following),
    ('v', SegmentCount::Three, Convention::Following),
    ('c', SegmentCount::Three, Convention::Combined),
    ('d', SegmentCount::Three, Convention::Inserted),
    ('m', SegmentCount::Two, Convention::Following),
    ('n', SegmentCount::Two, Convention::Combined),
    ('o', SegmentCount::Two, Convention::Inserted),
    ('h', SegmentCount::One, Convention::Following),
    ('i', SegmentCount::One, Convention::Combined),
    ('j', SegmentCount::One, Convention::Inserted),
];

/// Looks up the segment count and unit convention of a verb.
pub fn lookup_verb(verb: char) -> Option<(SegmentCount, Convention)> {
    VERBS
        .iter()
        .find(|(v, _, _)| *v == verb)
        .map(|&(_, n, c)| (n, c))
}

static SPEC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xs)
        ^%
        (?P<flags>[+\x20\#0]*)           # flags: plus, space, sharp, zero
        (?P<width>[0-9]*)                # width
        (?:\.(?P<prec>[0-9]*))?          # precision, a bare '.' is 0
        (?P<verb>.?)                     # verb
        (?P<rest>.*)                     # anything left over is an error
        $
        "#,
    )
    .unwrap()
});

impl Directive {
    /// Builds a directive from already-separated specifier parts.
    ///
    /// A width of `Some(0)` is the same as no width.
    ///
    /// # Errors
    ///
    /// - [`SpecError::BadWidth`] or [`SpecError::BadPrecision`] above
    ///   [`MAX_FIELD`]
    /// - [`SpecError::BadVerb`] if `verb` is not in the verb table
    pub fn new(
        flags: Flags,
        width: Option<usize>,
        precision: Option<usize>,
        verb: char,
    ) -> Result<Self, SpecError> {
        let width = width.unwrap_or(0);
        if width > MAX_FIELD {
            return Err(SpecError::BadWidth);
        }
        let precision = precision.unwrap_or(0);
        if precision > MAX_FIELD {
            return Err(SpecError::BadPrecision);
        }
        let (segments, convention) = lookup_verb(verb).ok_or(SpecError::BadVerb(verb))?;
        Ok(Self::build(flags, width, precision, segments, convention))
    }

    /// Verb `s` with the given flags, as used by `Display`.
    ///
    /// Width and precision are clamped to [`MAX_FIELD`].
    pub fn with_flags(flags: Flags, width: Option<usize>, precision: Option<usize>) -> Self {
        Self::build(
            flags,
            width.unwrap_or(0).min(MAX_FIELD),
            precision.unwrap_or(0).min(MAX_FIELD),
            SegmentCount::Three,
            Convention::Following,
        )
    }

    fn build(
        flags: Flags,
        width: usize,
        precision: usize,
        segments: SegmentCount,
        convention: Convention,
    ) -> Self {
        let sign = if flags.plus {
            SignPolicy::Always
        } else if flags.space || width > 0 {
            SignPolicy::Space
        } else {
            SignPolicy::Minus
        };

        Self {
            segments,
            convention,
            sign,
            zero_pad: flags.zero,
            show_all: flags.sharp || width > 0,
            width,
            precision,
        }
    }

    /// Parses a complete specifier such as `%+03.2s`.
    ///
    /// # Errors
    ///
    /// | Input | Error |
    /// |-------|-------|
    /// | `%3` | [`SpecError::NoVerb`] |
    /// | `%z` | [`SpecError::BadVerb`] |
    /// | width or precision above [`MAX_FIELD`] | [`SpecError::BadWidth`], [`SpecError::BadPrecision`] |
    /// | `3s`, `%ss` | [`SpecError::Syntax`] |
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let caps = SPEC_REGEX
            .captures(spec)
            .ok_or_else(|| SpecError::Syntax(spec.to_string()))?;

        let mut flags = Flags::default();
        for c in caps["flags"].chars() {
            match c {
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.sharp = true,
                _ => flags.zero = true,
            }
        }

        let width = match &caps["width"] {
            "" => None,
            w => Some(w.parse::<usize>().map_err(|_| SpecError::BadWidth)?),
        };

        let precision = match caps.name("prec").map(|m| m.as_str()) {
            None => None,
            Some("") => Some(0),
            Some(p) => Some(p.parse::<usize>().map_err(|_| SpecError::BadPrecision)?),
        };

        let Some(verb) = caps["verb"].chars().next() else {
            return Err(SpecError::NoVerb);
        };
        if !caps["rest"].is_empty() {
            return Err(SpecError::Syntax(spec.to_string()));
        }

        Self::new(flags, width, precision, verb)
    }

    /// Drops all sign handling: no glyph and no sign column.
    #[inline]
    pub fn unsigned(mut self) -> Self {
        self.sign = SignPolicy::Suppressed;
        self
    }

    /// Sign glyph for a value of the given sign.
    #[inline]
    pub(crate) fn sign_glyph(&self, negative: bool) -> &'static str {
        match self.sign {
            SignPolicy::Suppressed => "",
            _ if negative => "-",
            SignPolicy::Always => "+",
            SignPolicy::Space => " ",
            SignPolicy::Minus => "",
        }
    }
}

/// `%s`: three segments, unit following, no padding.
impl Default for Directive {
    fn default() -> Self {
        Self {
            segments: SegmentCount::Three,
            convention: Convention::Following,
            sign: SignPolicy::Minus,
            zero_pad: false,
            show_all: false,
            width: 0,
            precision: 0,
        }
    }
}

impl FromStr for Directive {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_table() {
        let cases = [
            ('s', SegmentCount::Three, Convention::Following),
            ('v', SegmentCount::Three, Convention::Following),
            ('c', SegmentCount::Three, Convention::Combined),
            ('d', SegmentCount::Three, Convention::Inserted),
            ('m', SegmentCount::Two, Convention::Following),
            ('n', SegmentCount::Two, Convention::Combined),
            ('o', SegmentCount::Two, Convention::Inserted),
            ('h', SegmentCount::One, Convention::Following),
            ('i', SegmentCount::One, Convention::Combined),
            ('j', SegmentCount::One, Convention::Inserted),
        ];
        for (verb, n, c) in cases {
            let d = Directive::parse(&format!("%{verb}")).unwrap();
            assert_eq!((d.segments, d.convention), (n, c), "verb {verb}");
        }
    }

    #[test]
    fn test_bad_verb() {
        assert_eq!(Directive::parse("%z"), Err(SpecError::BadVerb('z')));
        assert_eq!(Directive::parse("%-s"), Err(SpecError::Syntax("%-s".into())));
        assert_eq!(Directive::parse("%ʰ"), Err(SpecError::BadVerb('ʰ')));
    }

    #[test]
    fn test_no_verb() {
        assert_eq!(Directive::parse("%"), Err(SpecError::NoVerb));
        assert_eq!(Directive::parse("%+3.2"), Err(SpecError::NoVerb));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(Directive::parse("3s"), Err(SpecError::Syntax(_))));
        assert!(matches!(Directive::parse("%ss"), Err(SpecError::Syntax(_))));
        assert!(matches!(Directive::parse(""), Err(SpecError::Syntax(_))));
    }

    #[test]
    fn test_bad_width_and_precision() {
        assert_eq!(
            Directive::parse("%99999999999999999999999s"),
            Err(SpecError::BadWidth)
        );
        assert_eq!(
            Directive::parse("%.99999999999999999999999s"),
            Err(SpecError::BadPrecision)
        );
    }

    #[test]
    fn test_width_and_precision_limits() {
        assert_eq!(Directive::parse("%65535s").unwrap().width, 65535);
        assert_eq!(Directive::parse("%65536s"), Err(SpecError::BadWidth));
        assert_eq!(Directive::parse("%.65535h").unwrap().precision, 65535);
        assert_eq!(Directive::parse("%.65536h"), Err(SpecError::BadPrecision));
        assert_eq!(
            Directive::new(Flags::default(), Some(70_000), None, 'z'),
            Err(SpecError::BadWidth)
        );
    }

    #[test]
    fn test_with_flags_clamps() {
        let flags = Flags {
            plus: true,
            ..Flags::default()
        };
        let d = Directive::with_flags(flags, Some(usize::MAX), Some(usize::MAX));
        assert_eq!((d.width, d.precision), (MAX_FIELD, MAX_FIELD));
        assert_eq!(d.segments, SegmentCount::Three);
        assert_eq!(d.convention, Convention::Following);
        assert_eq!(d.sign, SignPolicy::Always);
        assert_eq!(
            Directive::with_flags(Flags::default(), None, None),
            Directive::default()
        );
    }

    #[test]
    fn test_defaults() {
        let d = Directive::parse("%s").unwrap();
        assert_eq!(d, Directive::default());
        assert_eq!(d.sign, SignPolicy::Minus);
        assert!(!d.show_all && !d.zero_pad);
    }

    #[test]
    fn test_plus_beats_space() {
        assert_eq!(Directive::parse("% +s").unwrap().sign, SignPolicy::Always);
        assert_eq!(Directive::parse("%+ s").unwrap().sign, SignPolicy::Always);
        assert_eq!(Directive::parse("% s").unwrap().sign, SignPolicy::Space);
    }

    #[test]
    fn test_sharp_and_zero() {
        let d = Directive::parse("%#0s").unwrap();
        assert!(d.show_all);
        assert!(d.zero_pad);
        assert_eq!(d.width, 0);
    }

    #[test]
    fn test_width_implies_sharp_and_space() {
        let d = Directive::parse("%3s").unwrap();
        assert_eq!(d.width, 3);
        assert!(d.show_all);
        assert!(!d.zero_pad);
        assert_eq!(d.sign, SignPolicy::Space);

        let d = Directive::parse("%+03s").unwrap();
        assert_eq!(d.sign, SignPolicy::Always);
        assert!(d.zero_pad);
    }

    #[test]
    fn test_precision() {
        assert_eq!(Directive::parse("%.6h").unwrap().precision, 6);
        assert_eq!(Directive::parse("%.h").unwrap().precision, 0);
        assert_eq!(Directive::parse("%2.1m").unwrap().precision, 1);
    }

    #[test]
    fn test_unsigned() {
        let d = Directive::parse("%+2s").unwrap().unsigned();
        assert_eq!(d.sign, SignPolicy::Suppressed);
        assert_eq!(d.sign_glyph(false), "");
        assert_eq!(d.sign_glyph(true), "");
    }

    #[test]
    fn test_sign_glyphs() {
        let plus = Directive::parse("%+s").unwrap();
        assert_eq!(plus.sign_glyph(false), "+");
        assert_eq!(plus.sign_glyph(true), "-");
        let space = Directive::parse("% s").unwrap();
        assert_eq!(space.sign_glyph(false), " ");
        let minus = Directive::default();
        assert_eq!(minus.sign_glyph(false), "");
        assert_eq!(minus.sign_glyph(true), "-");
    }

    #[test]
    fn test_from_str() {
        let d: Directive = "%0o".parse().unwrap();
        assert_eq!(d.segments, SegmentCount::Two);
        assert_eq!(d.convention, Convention::Inserted);
    }

    #[test]
    fn test_new_with_zero_width() {
        let d = Directive::new(Flags::default(), Some(0), None, 's').unwrap();
        assert_eq!(d.width, 0);
        assert!(!d.show_all);
    }
}
