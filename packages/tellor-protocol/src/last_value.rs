use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint64};
use thiserror::Error;

/// Raw storage key under which a feed keeps its most recent report.
/// Other contracts read it via a raw query, so this must never change.
pub const LAST_VALUE_KEY: &[u8] = b"last_value";

/// Encoded length: 8 bytes timestamp (seconds) followed by 8 bytes value, both big endian
pub const LAST_VALUE_LEN: usize = 16;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LastValueError {
    #[error("Last value must be 16 bytes long, got {0}")]
    InvalidLength(usize),
}

/// The latest report of a feed
#[cw_serde]
#[derive(Copy)]
pub struct LastValue {
    pub timestamp: Timestamp,
    pub value: Uint64,
}

impl LastValue {
    pub fn to_bytes(&self) -> [u8; LAST_VALUE_LEN] {
        let mut out = [0u8; LAST_VALUE_LEN];
        out[..8].copy_from_slice(&self.timestamp.seconds().to_be_bytes());
        out[8..].copy_from_slice(&self.value.u64().to_be_bytes());
        out
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, LastValueError> {
        let data: &[u8; LAST_VALUE_LEN] = data
            .try_into()
            .map_err(|_| LastValueError::InvalidLength(data.len()))?;
        let mut ts = [0u8; 8];
        let mut value = [0u8; 8];
        ts.copy_from_slice(&data[..8]);
        value.copy_from_slice(&data[8..]);
        let ts = u64::from_be_bytes(ts);
        let value = u64::from_be_bytes(value);
        Ok(Self {
            timestamp: Timestamp::from_seconds(ts),
            value: Uint64::new(value),
        })
    }
}
