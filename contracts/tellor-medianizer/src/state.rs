use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Timestamp, Uint64};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Can activate feeds and change governance
    pub governance: Addr,
    /// The query all registered feeds report for
    pub query_id: HexBinary,
    /// Max age of a feed value in seconds to be included in the median
    pub timestamp_freshness: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// The feeds to aggregate in registration order. Empty until activated.
pub const FEEDS: Item<Vec<Addr>> = Item::new("feeds");

#[cw_serde]
#[derive(Copy)]
pub struct Median {
    pub value: Uint64,
    /// Timestamp of the feed value the median was taken from,
    /// or the aggregation time if it is an average of two values.
    pub timestamp: Timestamp,
}

/// Unset until the first aggregation with at least one fresh value
pub const MEDIAN: Item<Median> = Item::new("median");
