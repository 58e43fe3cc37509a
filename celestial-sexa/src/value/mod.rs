mod normalize;
mod ops;
mod quantity;
#[cfg(feature = "serde")]
mod serde_;

pub use normalize::wrap_0_2pi;
pub use quantity::{Angle, DisplayUnit, HourAngle, Sexagesimal, Time, RA};
