//! Arithmetic operators for the signed quantity types.
//!
//! [`Angle`], [`HourAngle`] and [`Time`] support `+`, `-`, scalar `*` and `/`,
//! and unary `-`. [`RA`](super::RA) has none: sums of right ascensions are not
//! right ascensions, and a negated RA would break its range invariant.

use super::quantity::{Angle, HourAngle, Time};
use core::ops::*;

macro_rules! impl_ops {
    ($t:ty, $get:ident, $new:path) => {
        impl Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $new(self.$get() + rhs.$get())
            }
        }

        impl Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $new(self.$get() - rhs.$get())
            }
        }

        impl Mul<f64> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, k: f64) -> Self {
                $new(self.$get() * k)
            }
        }

        impl Div<f64> for $t {
            type Output = $t;
            #[inline]
            fn div(self, k: f64) -> Self {
                $new(self.$get() / k)
            }
        }

        impl Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> Self {
                $new(-self.$get())
            }
        }
    };
}

impl_ops!(Angle, radians, Angle::from_radians);
impl_ops!(HourAngle, radians, HourAngle::from_radians);
impl_ops!(Time, seconds, Time::from_seconds);
