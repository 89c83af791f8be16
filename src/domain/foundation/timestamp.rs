//! UTC instants for entity bookkeeping and token claims.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Seconds outside chrono's range become the epoch.
    pub fn from_unix_secs(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn now_falls_between_surrounding_clock_reads() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn unix_secs_roundtrip() {
        // 2024-01-15T00:00:00Z
        let instant = Timestamp::from_unix_secs(1_705_276_800);
        let date = instant.as_datetime().date_naive();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 15));
        assert_eq!(instant.as_unix_secs(), 1_705_276_800);
    }

    #[test]
    fn plus_minutes_moves_forward() {
        let ts = Timestamp::from_unix_secs(1000);
        assert_eq!(ts.plus_minutes(30).as_unix_secs(), 1000 + 30 * 60);
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let encoded = serde_json::to_value(Timestamp::from_unix_secs(1705276800)).unwrap();
        assert!(encoded.as_str().unwrap().starts_with("2024-01-15T00:00:00"));
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_unix_secs(10);
        let later = Timestamp::from_unix_secs(20);
        assert!(earlier < later);
    }
}
