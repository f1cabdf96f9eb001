//! Messages one contract sends to another. These mirror the relevant parts of the
//! medianizer's own message types and must stay wire compatible with them.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;

#[cw_serde]
pub enum MedianizerExecuteMsg {
    /// Recomputes the median from all registered feeds
    GetValues {},
}

#[cw_serde]
pub enum MedianizerQueryMsg {
    QueryId {},
}

#[cw_serde]
pub struct QueryIdResponse {
    pub query_id: HexBinary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::to_json_vec;

    #[test]
    fn messages_serialize_to_snake_case() {
        assert_eq!(
            to_json_vec(&MedianizerExecuteMsg::GetValues {}).unwrap(),
            br#"{"get_values":{}}"#
        );
        assert_eq!(
            to_json_vec(&MedianizerQueryMsg::QueryId {}).unwrap(),
            br#"{"query_id":{}}"#
        );
    }
}
