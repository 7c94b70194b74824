//! RFC 7519 `NumericDate`.
//!
//! Serializes as whole Unix seconds and deserializes from any JSON number,
//! truncating toward zero. Sub-second precision is dropped in both
//! directions; the codec is lossy but deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use std::fmt;

/// Absolute UTC instant carried by the `exp`, `nbf` and `iat` claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericDate(DateTime<Utc>);

impl NumericDate {
    /// Calendar date and time in UTC. `None` when the fields do not form a
    /// valid instant.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }

    /// Whole seconds since the Unix epoch.
    #[must_use]
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The current instant shifted by `offset`, e.g. for an expiry.
    #[must_use]
    pub fn from_now(offset: Duration) -> Self {
        Self(Utc::now() + offset)
    }

    /// Seconds since the Unix epoch, floored.
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// The wrapped instant, including any sub-second part it was built with.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for NumericDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<NumericDate> for DateTime<Utc> {
    fn from(value: NumericDate) -> Self {
        value.0
    }
}

impl Serialize for NumericDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix_timestamp())
    }
}

impl<'de> Deserialize<'de> for NumericDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumericDateVisitor)
    }
}

struct NumericDateVisitor;

impl NumericDateVisitor {
    fn seconds<E: de::Error>(secs: i64) -> Result<NumericDate, E> {
        NumericDate::from_unix(secs).ok_or_else(|| {
            E::custom(format_args!(
                "numeric date could not be unmarshalled ({secs} is out of range)"
            ))
        })
    }
}

impl Visitor<'_> for NumericDateVisitor {
    type Value = NumericDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON number of seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::seconds(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| {
            E::custom(format_args!(
                "numeric date could not be unmarshalled ({v} is out of range)"
            ))
        })?;
        Self::seconds(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() || v < i64::MIN as f64 || v >= i64::MAX as f64 {
            return Err(E::custom(format_args!(
                "numeric date could not be unmarshalled ({v} is out of range)"
            )));
        }
        // `as` truncates toward zero
        Self::seconds(v as i64)
    }
}
