use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, HexBinary, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Can slash the reporter and change governance or medianizer
    pub governance: Addr,
    /// The medianizer which aggregates this feed. Reports are rejected as long as this is unset.
    pub medianizer: Option<Addr>,
    pub query_id: HexBinary,
    pub query_data: Binary,
    /// The exact amount a reporter has to stake
    pub stake_amount: Uint128,
    /// Denom of stakes, tips and payouts
    pub denom: String,
    /// Max age of a report timestamp in seconds
    pub timestamp_freshness: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
