use thiserror::Error;

use cosmwasm_std::{StdError, Timestamp, Uint128};
use tellor_protocol::ValidationError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized.")]
    Unauthorized,

    // Instantiation
    #[error("Query ID must not be empty")]
    EmptyQueryId,

    #[error("Stake denom must not be empty")]
    EmptyDenom,

    #[error("Stake amount must not be zero")]
    ZeroStakeAmount,

    // Payments
    #[error("This message does not accept funds")]
    UnexpectedFunds,

    #[error("Must send exactly one coin")]
    TooManyOrNoCoins,

    #[error("Wrong denom, expected {expected}")]
    WrongDenom { expected: String },

    #[error("Stake must be exactly {expected}, got {got}")]
    WrongStakeAmount { expected: Uint128, got: Uint128 },

    #[error("Tip must not be zero")]
    ZeroTip,

    // Staking
    #[error("A reporter is already staked on this feed")]
    AlreadyStaked,

    #[error("Reporter is not staked")]
    NotStaked,

    #[error("Withdrawal was already requested")]
    WithdrawalAlreadyRequested,

    #[error("Withdrawal was not requested")]
    WithdrawalNotRequested,

    #[error("Stake is locked until {unlocked_at}")]
    StakeLocked { unlocked_at: Timestamp },

    // Reporting
    #[error("Query ID does not match this feed")]
    QueryIdMismatch,

    #[error("Report timestamp is outside of the freshness window")]
    StaleTimestamp,

    #[error("Medianizer is not set")]
    MedianizerUnset,

    #[error("Medianizer tracks a different query ID")]
    MedianizerQueryIdMismatch,
}
