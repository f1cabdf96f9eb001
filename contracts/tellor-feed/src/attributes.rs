//! Event attribute keys
//!
//! Indexers and relayers match on these. Renaming one is a breaking change.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";
pub const ATTR_REPORTER: &str = "reporter";
pub const ATTR_AMOUNT: &str = "amount";
pub const ATTR_STAKING_STATUS: &str = "staking_status";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_TIMESTAMP: &str = "timestamp";
pub const ATTR_REPORTER_REWARD: &str = "reporter_reward";
pub const ATTR_GOVERNANCE_FEE: &str = "governance_fee";
pub const ATTR_RECIPIENT: &str = "recipient";
