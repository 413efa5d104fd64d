//! Microsecond-precision timestamp type
//!
//! Every document records when it was created and when it was last replaced.
//!
//! ## Precision
//!
//! Timestamps are stored as microseconds since Unix epoch (1970-01-01 00:00:00 UTC).
//! On the wire and in snapshots they are RFC 3339 strings in UTC with exactly six
//! fractional digits, so ordering survives a save/load cycle.
//!
//! The representable range is the Unix epoch through
//! `9999-12-31T23:59:59.999999Z`, the last instant RFC 3339 can write with a
//! four-digit year. Values outside it are rejected when parsed.
//!
//! ## Usage
//!
//! ```
//! use rafdb_core::Timestamp;
//!
//! let created = Timestamp::now();
//! let updated = Timestamp::after(created);
//! assert!(updated > created);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Microsecond-precision timestamp
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are always in microseconds
/// - Timestamps are comparable and orderable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Last representable instant (9999-12-31T23:59:59.999999Z)
    pub const MAX: Timestamp = Timestamp(253_402_300_799_999_999);

    /// Create a timestamp for the current moment
    ///
    /// Returns epoch (0) if the system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_micros() as u64)
    }

    /// Current time, but strictly later than `previous`
    ///
    /// If the clock has not advanced past `previous` (same microsecond, or the
    /// clock was stepped backwards) the result is `previous + 1µs`.
    pub fn after(previous: Timestamp) -> Self {
        let now = Self::now();
        if now > previous {
            now
        } else {
            Timestamp(previous.0.saturating_add(1))
        }
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from microseconds, rejecting values past [`Timestamp::MAX`]
    pub fn try_from_micros(micros: u64) -> Result<Self, String> {
        let ts = Timestamp(micros);
        if ts.is_representable() {
            Ok(ts)
        } else {
            Err(format!(
                "timestamp {}µs is past the last representable instant {}",
                micros,
                Timestamp::MAX.to_rfc3339()
            ))
        }
    }

    /// True if this timestamp can be written as RFC 3339 and read back
    #[inline]
    pub const fn is_representable(&self) -> bool {
        self.0 <= Self::MAX.0
    }

    /// Get microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Format as an RFC 3339 UTC string with microsecond precision
    ///
    /// Values past [`Timestamp::MAX`] are clamped to it for display. Snapshot
    /// encoding refuses them instead.
    pub fn to_rfc3339(&self) -> String {
        let micros = self.0.min(Self::MAX.0) as i64;
        DateTime::<Utc>::from_timestamp_micros(micros)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Parse an RFC 3339 string
    ///
    /// Sub-microsecond precision is truncated. Instants before the Unix epoch
    /// or past [`Timestamp::MAX`] are rejected.
    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| format!("invalid timestamp '{}': {}", s, e))?;
        let micros = u64::try_from(dt.timestamp_micros())
            .map_err(|_| format!("timestamp '{}' is before the Unix epoch", s))?;
        Timestamp::try_from_micros(micros)
            .map_err(|_| format!("timestamp '{}' is past 9999-12-31T23:59:59.999999Z", s))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<u64> for Timestamp {
    fn from(micros: u64) -> Self {
        Timestamp::from_micros(micros)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 timestamp string or microseconds since the Unix epoch")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Timestamp::parse_rfc3339(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        Timestamp::try_from_micros(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        let micros = u64::try_from(v).map_err(|_| E::custom("negative timestamp"))?;
        self.visit_u64(micros)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
