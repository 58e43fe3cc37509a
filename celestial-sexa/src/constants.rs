#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Radians per hour of angle (15 degrees).
#[allow(clippy::excessive_precision)]
pub const HOUR_TO_RAD: f64 = 2.617993877991494365385536e-1;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Base of every non-first sexagesimal segment.
pub const SEXAGESIMAL_BASE: u64 = 60;

/// Decimal digits a formatted value may carry before rounding starts
/// inventing digits the `f64` mantissa does not hold.
///
/// Counted over the integer digits of the final segment plus the requested
/// precision: 12 digits of arcseconds at 1°, 9 at 360°, 15 below 10″.
pub const SIGNIFICANT_DIGITS: usize = 16;

/// Largest width or precision a specifier may carry.
pub const MAX_FIELD: usize = u16::MAX as usize;

/// Character emitted in place of every column of an overflowing field.
pub const OVERFLOW_FILL: char = '*';
