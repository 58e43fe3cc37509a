//! Sexagesimal formatting of angles, hour angles, right ascension and time.
//!
//! `celestial-sexa` prints astronomical quantities as degrees/minutes/seconds
//! or hours/minutes/seconds, with printf-style specifiers that control segment
//! count, unit placement, padding, sign and precision. Values that do not fit
//! a fixed-width field are replaced by `*`s rather than breaking column
//! alignment.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`value`] | [`Angle`], [`HourAngle`], [`RA`], [`Time`] and the [`Sexagesimal`] trait |
//! | [`specifier`] | Parsing `%[flags][width][.precision]verb` into a [`Directive`] |
//! | [`segments`] | Splitting a float into rounded segments with carry |
//! | [`render`] | Laying segments out as text, overflow markers |
//! | [`fmt`] | [`Formatted`] wrapper: `Display` plus an error slot |
//! | [`symbols`] | Unit glyph and separator table, process-wide default |
//! | [`units`] | Inserting, combining and stripping unit glyphs on numerals |
//! | [`constants`] | Unit conversions and formatting limits |
//! | [`errors`] | [`SexaError`], [`SpecError`] |
//!
//! # Verbs
//!
//! | | unit following | unit combined | unit inserted |
//! |---|---|---|---|
//! | three segments | `s`, `v` | `c` | `d` |
//! | two segments | `m` | `n` | `o` |
//! | one segment | `h` | `i` | `j` |
//!
//! ```
//! use celestial_sexa::{Angle, FmtAngle, FmtRA, RA};
//!
//! let dec = FmtAngle::new(Angle::from_dms(true, 13, 47, 22.0));
//! assert_eq!(dec.to_string(), "-13°47′22″");
//! assert_eq!(dec.format("%+03.1c"), "-013°47′22″\u{0323}0");
//! assert_eq!(dec.format("%.3h"), "-13.789°");
//!
//! let ra = FmtRA::new(RA::from_hms(5, 34, 31.94));
//! assert_eq!(ra.format("%02.1s"), "05ʰ34ᵐ31.9ˢ");
//! ```
//!
//! # Design Notes
//!
//! - **Width counts first-segment digits**: `%3s` means three digits of degrees,
//!   not a three-character field. A width also implies `#` and a sign column.
//!
//! - **No panics on bad input**: a malformed specifier prints a diagnostic
//!   token such as `%!z(BADVERB)`, an unrepresentable value prints `*`s.
//!
//! - **Right ascension is unsigned**: [`RA`] ignores `+` and space flags and
//!   never reserves a sign column.

pub mod constants;
pub mod errors;
pub mod fmt;
pub mod math;
pub mod render;
pub mod segments;
pub mod specifier;
pub mod symbols;
pub mod units;
pub mod value;

pub use errors::{NonFinite, OverflowKind, SexaError, SexaResult, SpecError};
pub use fmt::{FmtAngle, FmtHourAngle, FmtRA, FmtTime, Formatted};
pub use render::{render, render_spec, Rendered};
pub use specifier::Directive;
pub use symbols::{default_symbols, set_default_symbols, Symbols};
pub use value::{Angle, DisplayUnit, HourAngle, Sexagesimal, Time, RA};
