use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::Item;

/// The reporter slot of a feed. There is at most one reporter at a time.
#[cw_serde]
pub enum Staker {
    Unstaked,
    Staked {
        reporter: Addr,
    },
    /// Withdrawal was requested at `since`. The reporter can no longer report.
    Locked {
        reporter: Addr,
        since: Timestamp,
    },
}

impl Staker {
    pub fn reporter(&self) -> Option<&Addr> {
        match self {
            Staker::Unstaked => None,
            Staker::Staked { reporter } | Staker::Locked { reporter, .. } => Some(reporter),
        }
    }

    pub fn status(&self) -> StakingStatus {
        match self {
            Staker::Unstaked => StakingStatus::Unstaked,
            Staker::Staked { .. } => StakingStatus::Staked,
            Staker::Locked { .. } => StakingStatus::Locked,
        }
    }

    pub fn lock_timestamp(&self) -> Option<Timestamp> {
        match self {
            Staker::Locked { since, .. } => Some(*since),
            _ => None,
        }
    }
}

#[cw_serde]
#[derive(Copy)]
pub enum StakingStatus {
    Unstaked,
    Staked,
    Locked,
}

impl StakingStatus {
    /// Numeric status code as used in events: 0 unstaked, 1 staked, 2 locked
    pub fn code(&self) -> u8 {
        match self {
            StakingStatus::Unstaked => 0,
            StakingStatus::Staked => 1,
            StakingStatus::Locked => 2,
        }
    }
}

pub const STAKER: Item<Staker> = Item::new("staker");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staker_accessors_work() {
        let reporter = Addr::unchecked("reporter");

        let staker = Staker::Unstaked;
        assert_eq!(staker.reporter(), None);
        assert_eq!(staker.status().code(), 0);
        assert_eq!(staker.lock_timestamp(), None);

        let staker = Staker::Staked {
            reporter: reporter.clone(),
        };
        assert_eq!(staker.reporter(), Some(&reporter));
        assert_eq!(staker.status().code(), 1);
        assert_eq!(staker.lock_timestamp(), None);

        let staker = Staker::Locked {
            reporter: reporter.clone(),
            since: Timestamp::from_seconds(42),
        };
        assert_eq!(staker.reporter(), Some(&reporter));
        assert_eq!(staker.status().code(), 2);
        assert_eq!(staker.lock_timestamp(), Some(Timestamp::from_seconds(42)));
    }
}
