use cosmwasm_std::Timestamp;
use thiserror::Error;

use crate::{MAX_QUERY_BYTES, MIN_TIMESTAMP_FRESHNESS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} exceeds length limit of 128 bytes")]
    TooLong { field: &'static str },

    #[error("Timestamp freshness must be at least 120 seconds")]
    FreshnessTooShort,
}

pub fn validate_query_bytes(field: &'static str, data: &[u8]) -> Result<(), ValidationError> {
    if data.len() > MAX_QUERY_BYTES {
        Err(ValidationError::TooLong { field })
    } else {
        Ok(())
    }
}

pub fn validate_timestamp_freshness(seconds: u64) -> Result<(), ValidationError> {
    if seconds < MIN_TIMESTAMP_FRESHNESS {
        Err(ValidationError::FreshnessTooShort)
    } else {
        Ok(())
    }
}

/// A report is fresh if it is not from the future and younger than `window` seconds.
pub fn is_fresh(timestamp: Timestamp, now: Timestamp, window: u64) -> bool {
    let ts = timestamp.seconds();
    let now = now.seconds();
    ts <= now && now - ts < window
}

/// A feed value counts toward the median unless it is from the future or
/// older than `window` seconds. Unlike [`is_fresh`] the bound is inclusive.
pub fn is_within_window(timestamp: Timestamp, now: Timestamp, window: u64) -> bool {
    let ts = timestamp.seconds();
    let now = now.seconds();
    ts <= now && now - ts <= window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_query_bytes_works() {
        validate_query_bytes("query_id", b"1").unwrap();
        validate_query_bytes("query_data", b"").unwrap();
        validate_query_bytes("query_id", &[7u8; MAX_QUERY_BYTES]).unwrap();

        let err = validate_query_bytes("query_data", &[7u8; MAX_QUERY_BYTES + 1]).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { field: "query_data" });
    }

    #[test]
    fn validate_timestamp_freshness_works() {
        validate_timestamp_freshness(120).unwrap();
        validate_timestamp_freshness(3600).unwrap();
        let err = validate_timestamp_freshness(119).unwrap_err();
        assert_eq!(err, ValidationError::FreshnessTooShort);
    }

    #[test]
    fn is_fresh_works() {
        let now = Timestamp::from_seconds(1_700_000_000);

        assert!(is_fresh(now, now, 3600));
        assert!(is_fresh(now.minus_seconds(500), now, 3600));
        assert!(is_fresh(now.minus_seconds(3599), now, 3600));
        // age equal to the window is already stale
        assert!(!is_fresh(now.minus_seconds(3600), now, 3600));
        assert!(!is_fresh(now.minus_seconds(3610), now, 3600));
        // future
        assert!(!is_fresh(now.plus_seconds(1), now, 3600));

        // sub-second precision is ignored
        assert!(is_fresh(now.plus_nanos(999_999_999), now.plus_nanos(1), 3600));
    }

    #[test]
    fn is_within_window_works() {
        let now = Timestamp::from_seconds(1_700_000_000);

        assert!(is_within_window(now, now, 3600));
        assert!(is_within_window(now.minus_seconds(3599), now, 3600));
        // age equal to the window still counts
        assert!(is_within_window(now.minus_seconds(3600), now, 3600));
        assert!(!is_within_window(now.minus_seconds(3601), now, 3600));
        assert!(!is_within_window(now.plus_seconds(1), now, 3600));
    }
}
