//! Shared serialization utilities for the storefront API client.

use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};

/// A numeric field that tolerates both JSON number tokens and quoted
/// number strings.
///
/// The storefront emits the same field as `1998` on one app and `"1998"`
/// on another, so decoding into `u64` directly would fail on half the
/// catalog. The raw token is preserved as received; callers convert on
/// demand through [`Number::as_u64`] and [`Number::as_f64`].
///
/// Fields that are absent from the payload default to the empty token,
/// for which every conversion returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Number(String);

impl Number {
    /// The raw token as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the token as an unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Interpret the token as a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string containing a number")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Number(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Number(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Number(v.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.parse::<f64>().is_ok() {
            Ok(Number(v.to_string()))
        } else {
            Err(E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}
