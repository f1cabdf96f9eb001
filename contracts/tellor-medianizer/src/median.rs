use tellor_protocol::MAX_FEEDS;

/// Median of the non-zero entries of `values`. Zero marks an absent or stale feed.
///
/// For an even number of values the two middle ones are averaged (rounded down).
/// Returns `None` if all values are zero.
pub fn median(mut values: [u64; MAX_FEEDS]) -> Option<u64> {
    sort_top_descending(&mut values);
    let count = values.iter().filter(|v| **v != 0).count();
    match count {
        5 => Some(values[2]),
        4 => Some(average(values[1], values[2])),
        3 => Some(values[1]),
        2 => Some(average(values[0], values[1])),
        1 => Some(values[0]),
        _ => None,
    }
}

/// Partial selection sort. After pass `i` position `i` holds the largest value of `values[i..]`.
/// Four passes order the whole array.
fn sort_top_descending(values: &mut [u64; MAX_FEEDS]) {
    for i in 0..MAX_FEEDS - 1 {
        for j in i + 1..MAX_FEEDS {
            if values[j] > values[i] {
                values.swap(i, j);
            }
        }
    }
}

/// Rounded down mean that cannot overflow
fn average(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}
