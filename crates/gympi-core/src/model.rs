//! Telemetry data model as served by the GymPi cloud API.
//!
//! Records are read-only snapshots: the dashboard never mutates them, it
//! replaces them wholesale on every fetch.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Aggregate statistics for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStats {
    pub total_workouts: u64,
    pub total_exercises: u64,
    pub average_heart_rate: f64,
}

/// One entry of the `/api/devices` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub device_id: String,
    pub stats: DeviceStats,
}

/// One heart-rate measurement. Its x-position is its index in the parent
/// workout's sample list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub value: f64,
    /// Capture time in epoch seconds, as recorded on the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl HeartRateSample {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            timestamp: None,
        }
    }
}

/// One completed training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: Timestamp,
    pub workout_name: String,
    pub completed_exercises: u64,
    #[serde(default)]
    pub heart_rate_data: Vec<HeartRateSample>,
}

/// Point in time accepted as either epoch milliseconds or an ISO-8601 string.
///
/// Naive date-times carry no offset and are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Build from epoch milliseconds.
    #[must_use]
    pub fn from_millis(ms: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(ms).single().map(Self)
    }

    /// Parse an ISO-8601 / RFC 3339 string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(naive.and_utc()));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    /// The instant in UTC.
    #[must_use]
    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("epoch milliseconds or an ISO-8601 date-time string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Timestamp::from_millis(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        let ms = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(ms)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        if !v.is_finite() {
            return Err(E::custom("timestamp is not finite"));
        }
        self.visit_i64(v.round() as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Timestamp::parse(v).ok_or_else(|| E::custom(format!("unrecognised timestamp: {v:?}")))
    }
}

/// Decode a `/api/devices` body.
pub fn decode_devices(body: &[u8]) -> Result<Vec<DeviceSummary>, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Decode a `/workout/history/{id}` body.
pub fn decode_history(body: &[u8]) -> Result<Vec<WorkoutRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
