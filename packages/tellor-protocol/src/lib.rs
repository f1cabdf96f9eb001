mod checks;
mod last_value;
mod msgs;

pub use checks::{
    is_fresh, is_within_window, validate_query_bytes, validate_timestamp_freshness,
    ValidationError,
};
pub use last_value::{LastValue, LastValueError, LAST_VALUE_KEY, LAST_VALUE_LEN};
pub use msgs::{MedianizerExecuteMsg, MedianizerQueryMsg, QueryIdResponse};

/// Upper bound for `query_id` and `query_data` in bytes
pub const MAX_QUERY_BYTES: usize = 128;

/// The maximum number of feeds a medianizer aggregates
pub const MAX_FEEDS: usize = 5;

/// Default max age of a value in seconds. Used for report acceptance
/// as well as for inclusion in the median.
pub const DEFAULT_TIMESTAMP_FRESHNESS: u64 = 3600;

/// Deployments with a shorter freshness window are rejected
pub const MIN_TIMESTAMP_FRESHNESS: u64 = 120;
