use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Deque;
use tellor_protocol::LastValue;

/// Number of reports retained. The oldest report is evicted first.
pub const MAX_HISTORY_LEN: u32 = 15;

const HISTORY: Deque<LastValue> = Deque::new("history");

/// Appends a report, evicting the oldest one if the history is full
pub fn history_push(storage: &mut dyn Storage, report: &LastValue) -> StdResult<()> {
    if HISTORY.len(storage)? >= MAX_HISTORY_LEN {
        HISTORY.pop_front(storage)?;
    }
    HISTORY.push_back(storage, report)
}

pub fn history_len(storage: &dyn Storage) -> StdResult<u32> {
    HISTORY.len(storage)
}

/// Reports from oldest to newest
pub fn history_asc(
    storage: &dyn Storage,
    offset: usize,
    limit: usize,
) -> StdResult<Vec<LastValue>> {
    HISTORY.iter(storage)?.skip(offset).take(limit).collect()
}

/// Reports from newest to oldest
pub fn history_desc(
    storage: &dyn Storage,
    offset: usize,
    limit: usize,
) -> StdResult<Vec<LastValue>> {
    HISTORY
        .iter(storage)?
        .rev()
        .skip(offset)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{testing::MockStorage, Timestamp, Uint64};

    fn report(n: u64) -> LastValue {
        LastValue {
            timestamp: Timestamp::from_seconds(1_000 + n),
            value: Uint64::new(n),
        }
    }

    #[test]
    fn history_push_works() {
        let mut storage = MockStorage::new();
        assert_eq!(history_len(&storage).unwrap(), 0);
        assert_eq!(history_asc(&storage, 0, 100).unwrap(), Vec::<LastValue>::new());

        history_push(&mut storage, &report(1)).unwrap();
        history_push(&mut storage, &report(2)).unwrap();
        assert_eq!(history_len(&storage).unwrap(), 2);
        assert_eq!(
            history_asc(&storage, 0, 100).unwrap(),
            vec![report(1), report(2)]
        );
        assert_eq!(
            history_desc(&storage, 0, 100).unwrap(),
            vec![report(2), report(1)]
        );
        assert_eq!(history_desc(&storage, 1, 100).unwrap(), vec![report(1)]);
        assert_eq!(history_asc(&storage, 0, 1).unwrap(), vec![report(1)]);
    }

    #[test]
    fn history_push_evicts_oldest_first() {
        let mut storage = MockStorage::new();
        for n in 1..=MAX_HISTORY_LEN as u64 {
            history_push(&mut storage, &report(n)).unwrap();
        }
        assert_eq!(history_len(&storage).unwrap(), MAX_HISTORY_LEN);

        for n in 16..=40 {
            history_push(&mut storage, &report(n)).unwrap();
            assert_eq!(history_len(&storage).unwrap(), MAX_HISTORY_LEN);
        }

        let all = history_asc(&storage, 0, 100).unwrap();
        let expected: Vec<LastValue> = (26..=40).map(report).collect();
        assert_eq!(all, expected);
    }
}
