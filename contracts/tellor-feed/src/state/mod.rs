mod config;
mod history;
mod last_value;
mod staker;

use cosmwasm_std::Uint128;
use cw_storage_plus::Item;

pub use config::{Config, CONFIG};
pub use history::{history_asc, history_desc, history_len, history_push, MAX_HISTORY_LEN};
pub use last_value::{load_last_value, save_last_value};
pub use staker::{Staker, StakingStatus, STAKER};

/// Reward collected from tippers that is paid out with the next report
pub const TIP_AMOUNT: Item<Uint128> = Item::new("tip_amount");
