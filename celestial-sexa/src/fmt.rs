//! `Display` integration and the fallible formatting wrapper.
//!
//! [`Formatted`] pairs a value with an optional [`Symbols`] table and an error
//! slot. Formatting never fails at the `std::fmt` level: an overflowing value
//! prints as `*`s and the reason is left in the slot for the caller to check.
//!
//! Two ways in:
//!
//! - `Display`, with Rust's own format flags mapped onto the sexagesimal ones:
//!   `+` is `+`, `#` is `#`, `0` is `0`, width and precision carry over. Output
//!   is always three segments with the unit following (verb `s`).
//! - [`Formatted::format`], which takes a full specifier and so reaches every
//!   verb and the space flag.
//!
//! ```
//! use celestial_sexa::{Angle, FmtAngle};
//!
//! let f = FmtAngle::new(Angle::from_dms(false, 23, 26, 44.0));
//! assert_eq!(format!("{f}"), "23°26′44″");
//! assert_eq!(format!("{f:+03.1}"), "+023°26′44.0″");
//! assert_eq!(f.format("%.4h"), "23.4456°");
//! assert!(f.err().is_none());
//! ```
//!
//! The error slot holds the outcome of the most recent call only; each call
//! clears it first.

use crate::errors::SexaError;
use crate::render::render;
use crate::specifier::{Directive, Flags};
use crate::symbols::{default_symbols, Symbols};
use crate::value::{Angle, HourAngle, Sexagesimal, Time, RA};
use core::cell::RefCell;
use core::fmt;
use std::sync::Arc;

/// A value together with the outcome of its last formatting.
#[derive(Debug, Clone)]
pub struct Formatted<T> {
    pub value: T,
    symbols: Option<Arc<Symbols>>,
    err: RefCell<Option<SexaError>>,
}

pub type FmtAngle = Formatted<Angle>;
pub type FmtHourAngle = Formatted<HourAngle>;
pub type FmtRA = Formatted<RA>;
pub type FmtTime = Formatted<Time>;

impl<T: Sexagesimal> Formatted<T> {
    /// Wraps `value`, formatting with the process-wide default symbols.
    pub fn new(value: T) -> Self {
        Self {
            value,
            symbols: None,
            err: RefCell::new(None),
        }
    }

    /// Uses `symbols` instead of the default table.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use celestial_sexa::{Angle, FmtAngle, Symbols};
    ///
    /// let ascii = Arc::new(Symbols::default().with_dms_units(["d", "m", "s"]));
    /// let f = FmtAngle::new(Angle::from_dms(true, 5, 3, 7.0)).with_symbols(ascii);
    /// assert_eq!(f.to_string(), "-5d3m7s");
    /// ```
    pub fn with_symbols(mut self, symbols: Arc<Symbols>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// The table in effect for this value.
    pub fn symbols(&self) -> &Symbols {
        self.symbols.as_deref().unwrap_or_else(|| default_symbols())
    }

    /// The overflow of the last formatting call, if there was one.
    pub fn err(&self) -> Option<SexaError> {
        self.err.borrow().clone()
    }

    /// Like [`err`](Self::err), but leaves the slot empty.
    pub fn take_err(&self) -> Option<SexaError> {
        self.err.borrow_mut().take()
    }

    /// Formats with a full specifier such as `%+03.2c`.
    ///
    /// A malformed specifier produces its diagnostic token, e.g.
    /// `%!z(BADVERB)`, and leaves the error slot empty.
    pub fn format(&self, spec: &str) -> String {
        match Directive::parse(spec) {
            Ok(directive) => self.render(&directive),
            Err(err) => {
                *self.err.borrow_mut() = None;
                err.to_string()
            }
        }
    }

    fn render(&self, directive: &Directive) -> String {
        let rendered = render(&self.value, directive, self.symbols());
        if let Some(err) = &rendered.error {
            log::debug!("{} replaced by overflow marker: {err}", T::UNIT);
        }
        *self.err.borrow_mut() = rendered.error;
        rendered.text
    }
}

impl<T: Sexagesimal> From<T> for Formatted<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Sexagesimal> fmt::Display for Formatted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = Flags {
            plus: f.sign_plus(),
            space: false,
            sharp: f.alternate(),
            zero: f.sign_aware_zero_pad(),
        };
        let directive = Directive::with_flags(flags, f.width(), f.precision());
        f.write_str(&self.render(&directive))
    }
}
