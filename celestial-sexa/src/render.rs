//! Rendering of decomposed segments into text.
//!
//! [`render`] is the pure entry point: it takes a value, a [`Directive`] and a
//! [`Symbols`] table and returns the text together with the overflow error, if
//! any. The [`Formatted`](crate::Formatted) wrapper is a thin layer on top that
//! stores the error for callers going through `Display`.
//!
//! # Layout
//!
//! ```text
//!  sign  first  unit  second  unit  last[.fraction]  unit
//!   -     023    °      26     ′         44.5         ″
//! ```
//!
//! - Leading zero segments are dropped unless `#` or a width is given. The
//!   last segment is always printed.
//! - With a width the sign occupies the leftmost column, except for
//!   space-padded one-segment formats where it sits right before the digits.
//! - The unit of the last segment is attached by the verb's convention.
//!
//! # Overflow
//!
//! A value that does not fit is replaced by a run of `*` as wide as the field
//! would have been, so columns of fixed-width output stay aligned:
//!
//! ```
//! use celestial_sexa::render::render_spec;
//! use celestial_sexa::{default_symbols, Angle, OverflowKind};
//!
//! let ok = render_spec(&Angle::from_dms(false, 23, 26, 44.0), "%03s", default_symbols());
//! assert_eq!(ok.text, " 023°26′44″");
//!
//! let too_wide = render_spec(&Angle::from_dms(false, 4423, 26, 44.0), "%03s", default_symbols());
//! assert_eq!(too_wide.text, "***********");
//! assert_eq!(too_wide.error.unwrap().kind(), OverflowKind::Width);
//! ```

use crate::constants::{OVERFLOW_FILL, SIGNIFICANT_DIGITS};
use crate::errors::SexaError;
use crate::math::{integer_digits, u64_digits};
use crate::segments::{decompose, Decomposed};
use crate::specifier::{Convention, Directive};
use crate::symbols::Symbols;
use crate::value::{DisplayUnit, Sexagesimal};

/// Output of one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The formatted field, the overflow marker, or a specifier diagnostic.
    pub text: String,
    /// Set only when `text` is the overflow marker.
    pub error: Option<SexaError>,
}

impl Rendered {
    fn ok(text: String) -> Self {
        Self { text, error: None }
    }
}

/// Renders `value` with `directive`.
///
/// Unsigned types ([`RA`](crate::RA)) have their sign policy suppressed.
pub fn render<T: Sexagesimal + ?Sized>(
    value: &T,
    directive: &Directive,
    symbols: &Symbols,
) -> Rendered {
    let directive = if T::SIGNED {
        *directive
    } else {
        directive.unsigned()
    };
    render_value(value.display_value(), T::UNIT, &directive, symbols)
}

/// Parses `spec` and renders `value` with it.
///
/// A malformed specifier yields its diagnostic token as text and no error.
pub fn render_spec<T: Sexagesimal + ?Sized>(value: &T, spec: &str, symbols: &Symbols) -> Rendered {
    match Directive::parse(spec) {
        Ok(directive) => render(value, &directive, symbols),
        Err(err) => Rendered::ok(err.to_string()),
    }
}

/// Renders a raw value already expressed in `unit`.
pub fn render_value(
    value: f64,
    unit: DisplayUnit,
    directive: &Directive,
    symbols: &Symbols,
) -> Rendered {
    let d = match decompose(value, unit, directive.segments, directive.precision) {
        Ok(d) => d,
        Err(err) => return overflow(value, unit, directive, symbols, err),
    };

    let digits = u64_digits(d.segments[0]);
    if directive.width > 0 && digits > directive.width {
        let err = SexaError::width_overflow(unit, directive.width, digits);
        return overflow(value, unit, directive, symbols, err);
    }

    Rendered::ok(assemble(&d, unit, directive, symbols))
}

fn assemble(d: &Decomposed, unit: DisplayUnit, directive: &Directive, symbols: &Symbols) -> String {
    let glyphs = symbols.units(unit);
    let n = d.segments.len();
    let sign = directive.sign_glyph(d.negative);
    let floating_sign = n == 1 && directive.width > 0 && !directive.zero_pad;

    let mut first = 0;
    if !directive.show_all {
        while first + 1 < n && d.segments[first] == 0 {
            first += 1;
        }
    }

    let mut out = String::new();
    if !floating_sign {
        out.push_str(sign);
    }
    for (i, &seg) in d.segments.iter().enumerate().skip(first) {
        let int_text = if floating_sign {
            pad_left(format!("{sign}{seg}"), directive.width + sign.len(), ' ')
        } else {
            segment_text(seg, i, directive)
        };

        if i + 1 < n {
            out.push_str(&int_text);
            out.push_str(&glyphs[i]);
            continue;
        }

        let mut numeral = int_text;
        if directive.precision > 0 {
            numeral.push_str(&symbols.dec_sep);
            numeral.push_str(&d.fraction);
        }
        let glyph = glyphs[i].as_str();
        match directive.convention {
            Convention::Following => {
                out.push_str(&numeral);
                out.push_str(glyph);
            }
            Convention::Combined => out.push_str(&symbols.combine_unit(&numeral, glyph)),
            Convention::Inserted => out.push_str(&symbols.insert_unit(&numeral, glyph)),
        }
    }
    out
}

/// Integer text of the segment at `position`, padded per the directive.
fn segment_text(v: u64, position: usize, directive: &Directive) -> String {
    let text = v.to_string();
    let w = directive.width;
    if position == 0 {
        match (w, directive.zero_pad) {
            (0, _) => text,
            (w, true) => pad_left(text, w, '0'),
            (w, false) => pad_left(text, w, ' '),
        }
    } else if directive.zero_pad {
        pad_left(text, 2, '0')
    } else if w > 0 {
        pad_left(text, 2, ' ')
    } else {
        text
    }
}

/// Right-aligns ASCII `s` in `width` columns.
fn pad_left(s: String, width: usize, fill: char) -> String {
    let n = width.saturating_sub(s.len());
    if n == 0 {
        return s;
    }
    let mut out = String::with_capacity(n + s.len());
    out.extend(std::iter::repeat(fill).take(n));
    out.push_str(&s);
    out
}

/// Builds the all-`*` field for `value`.
///
/// The length is that of the same format with every segment shown and a first
/// segment as wide as the width, or as the value's integer digits when no
/// width was given.
fn overflow(
    value: f64,
    unit: DisplayUnit,
    directive: &Directive,
    symbols: &Symbols,
    err: SexaError,
) -> Rendered {
    let width = if directive.width > 0 {
        directive.width
    } else if value.is_finite() {
        integer_digits(value.abs()).min(SIGNIFICANT_DIGITS)
    } else {
        1
    };
    let n = directive.segments.get();
    let shape = Decomposed {
        negative: value < 0.0,
        segments: vec![0; n],
        fraction: "0".repeat(directive.precision),
    };
    let shape_directive = Directive {
        show_all: true,
        width,
        ..*directive
    };
    let len = assemble(&shape, unit, &shape_directive, symbols)
        .chars()
        .count();

    Rendered {
        text: std::iter::repeat(OVERFLOW_FILL).take(len).collect(),
        error: Some(err),
    }
}
