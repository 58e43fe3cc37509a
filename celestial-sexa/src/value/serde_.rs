//! Each quantity serializes as its bare native-unit `f64`.

use super::quantity::{Angle, HourAngle, Time, RA};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_serde {
    ($t:ty, $get:ident, $new:path) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_f64(self.$get())
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let v = f64::deserialize(d)?;
                Ok($new(v))
            }
        }
    };
}

impl_serde!(Angle, radians, Angle::from_radians);
impl_serde!(HourAngle, radians, HourAngle::from_radians);
impl_serde!(RA, radians, RA::from_radians);
impl_serde!(Time, seconds, Time::from_seconds);
