//! Numbered pagination for the user admin table.

use std::ops::RangeInclusive;

/// Users shown per table page.
pub const USERS_PAGE_SIZE: u32 = 3;

/// Number of pages needed to show `total` rows, `limit` at a time.
#[must_use]
pub fn page_count(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
}

/// Page numbers to render as buttons, starting at one. Empty when there are
/// no rows.
#[must_use]
pub fn page_numbers(total: u64, limit: u32) -> RangeInclusive<u32> {
    1..=page_count(total, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 3), 0);
        assert_eq!(page_count(3, 3), 1);
        assert_eq!(page_count(4, 3), 2);
        assert_eq!(page_count(7, 3), 3);
    }

    #[test]
    fn zero_limit_counts_rows() {
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn page_numbers_start_at_one() {
        assert_eq!(page_numbers(7, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page_numbers(0, 3).count(), 0);
    }
}
