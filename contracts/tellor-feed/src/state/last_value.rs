use cosmwasm_std::{StdError, StdResult, Storage};
use tellor_protocol::{LastValue, LAST_VALUE_KEY};

/// Stores the report under the raw key the medianizer reads from
pub fn save_last_value(storage: &mut dyn Storage, report: &LastValue) {
    storage.set(LAST_VALUE_KEY, &report.to_bytes());
}

pub fn load_last_value(storage: &dyn Storage) -> StdResult<Option<LastValue>> {
    storage
        .get(LAST_VALUE_KEY)
        .map(|data| LastValue::from_slice(&data).map_err(|e| StdError::generic_err(e.to_string())))
        .transpose()
}
