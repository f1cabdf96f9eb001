use thiserror::Error;

use cosmwasm_std::StdError;
use tellor_protocol::{LastValueError, ValidationError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Feed returned a malformed last value: {0}")]
    LastValue(#[from] LastValueError),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("This contract does not accept funds")]
    UnexpectedFunds,

    #[error("Query ID must not be empty")]
    EmptyQueryId,

    // Activation
    #[error("At least one feed must be provided")]
    NoFeeds,

    #[error("At most 5 feeds can be aggregated")]
    TooManyFeeds,

    #[error("Feed {feed} was provided more than once")]
    DuplicateFeed { feed: String },

    #[error("Sender is not a registered feed")]
    UnknownFeed,
}
