use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};
use tellor_protocol::QueryIdResponse;

use crate::state::{Config, Median};

#[cw_serde]
pub struct InstantiateMsg {
    pub governance: String,
    /// The query this medianizer aggregates. At most 128 bytes.
    pub query_id: HexBinary,
    /// Max age of a feed value in seconds. Defaults to one hour.
    pub timestamp_freshness: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers the feeds to aggregate, replacing any previous set.
    /// Takes 1 to 5 distinct addresses. Only governance can do this.
    ActivateContract { feeds: Vec<String> },
    /// Reads the last value of every registered feed and stores the median of the fresh ones.
    /// Must be sent by a registered feed.
    GetValues {},
    ChangeGovernance { new_governance: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    /// The query ID this medianizer tracks. Feeds check it before reporting.
    #[returns(QueryIdResponse)]
    QueryId {},
    #[returns(FeedsResponse)]
    Feeds {},
    /// The latest aggregate
    #[returns(MedianResponse)]
    Median {},
}

#[cw_serde]
pub struct MigrateMsg {}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct FeedsResponse {
    pub feeds: Vec<Addr>,
}

#[cw_serde]
pub struct MedianResponse {
    pub median: Option<Median>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_json, to_json_binary};
    use tellor_protocol::{MedianizerExecuteMsg, MedianizerQueryMsg};

    #[test]
    fn feed_messages_are_understood() {
        // What a feed sends must deserialize into our own messages
        let raw = to_json_binary(&MedianizerExecuteMsg::GetValues {}).unwrap();
        let msg: ExecuteMsg = from_json(raw).unwrap();
        assert_eq!(msg, ExecuteMsg::GetValues {});

        let raw = to_json_binary(&MedianizerQueryMsg::QueryId {}).unwrap();
        let msg: QueryMsg = from_json(raw).unwrap();
        assert_eq!(msg, QueryMsg::QueryId {});
    }
}
