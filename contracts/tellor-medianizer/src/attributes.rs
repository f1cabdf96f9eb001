//! Event attribute keys
//!
//! Indexers and relayers match on these. Renaming one is a breaking change.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";
/// The feed that triggered the aggregation
pub const ATTR_FEED: &str = "feed";
pub const ATTR_FEEDS: &str = "feeds";
/// Number of feeds whose value was included in the median
pub const ATTR_FRESH_VALUES: &str = "fresh_values";
pub const ATTR_MEDIAN: &str = "median";
pub const ATTR_MEDIAN_TIMESTAMP: &str = "median_timestamp";
/// "true" if a new median was stored, "false" if no feed had a fresh value
pub const ATTR_MEDIAN_UPDATED: &str = "median_updated";
