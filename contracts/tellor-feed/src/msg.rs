use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary, Timestamp, Uint128, Uint64};
use tellor_protocol::LastValue;

use crate::state::{Config, StakingStatus};

#[cw_serde]
pub struct InstantiateMsg {
    /// The multisig that can slash the reporter and reconfigure the feed
    pub governance: String,
    /// What is reported. At most 128 bytes.
    pub query_id: HexBinary,
    /// Description of what is queried, e.g. asset pair and source. At most 128 bytes.
    pub query_data: Binary,
    /// The medianizer aggregating this feed. Can be set later via `ChangeMedianizer`.
    pub medianizer: Option<String>,
    /// Max age of a report timestamp in seconds. Defaults to one hour.
    pub timestamp_freshness: Option<u64>,
    /// Defaults to 200000
    pub stake_amount: Option<Uint128>,
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stake to become the reporter of this feed.
    /// Exactly the stake amount must be sent along.
    Stake {},
    /// Adds the sent funds to the reward of the next report
    Tip {},
    /// Submits a value. Only the staked reporter can do this.
    Report {
        query_id: HexBinary,
        value: Uint64,
        timestamp: Timestamp,
    },
    /// Locks the stake. It can be withdrawn once the lock period passed.
    RequestWithdraw {},
    /// Sends the full contract balance back to the reporter
    Withdraw {},
    /// Sends the full contract balance to governance and removes the reporter
    SlashReporter {},
    ChangeGovernance {
        new_governance: String,
    },
    ChangeMedianizer {
        new_medianizer: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    /// The reporter slot
    #[returns(StakerResponse)]
    Staker {},
    /// The most recent report
    #[returns(LastValueResponse)]
    LastValue {},
    /// Retained reports, oldest first
    #[returns(HistoryResponse)]
    HistoryAsc {
        offset: Option<u32>,
        limit: Option<u32>,
    },
    /// Retained reports, newest first
    #[returns(HistoryResponse)]
    HistoryDesc {
        offset: Option<u32>,
        limit: Option<u32>,
    },
    /// The reward paid out with the next report
    #[returns(TipAmountResponse)]
    TipAmount {},
}

#[cw_serde]
pub struct MigrateMsg {}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct StakerResponse {
    pub status: StakingStatus,
    pub reporter: Option<Addr>,
    /// Set while a withdrawal is pending
    pub lock_timestamp: Option<Timestamp>,
}

#[cw_serde]
pub struct LastValueResponse {
    pub last_value: Option<LastValue>,
}

#[cw_serde]
pub struct HistoryResponse {
    pub reports: Vec<LastValue>,
}

#[cw_serde]
pub struct TipAmountResponse {
    pub amount: Uint128,
}
