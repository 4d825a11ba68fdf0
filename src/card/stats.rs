//! Counter aggregation for card stats panels.
//!
//! A showcased item may name linked items (e.g. alternate uploads of the same
//! mod) whose counters are folded into the displayed totals without appearing
//! as separate cards. Aggregation is a pure fieldwise sum — no I/O, no
//! mutation of the fetched metadata.

use crate::workshop::ItemDetails;

/// The three counters displayed on a card, summed over primary + linked items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTotals {
    pub views: u64,
    pub downloads: u64,
    pub favorites: u64,
}

impl StatTotals {
    pub fn from_item(item: &ItemDetails) -> Self {
        Self {
            views: item.views,
            downloads: item.downloads,
            favorites: item.favorites,
        }
    }

    fn add(self, other: Self) -> Self {
        Self {
            views: self.views.saturating_add(other.views),
            downloads: self.downloads.saturating_add(other.downloads),
            favorites: self.favorites.saturating_add(other.favorites),
        }
    }
}

/// Sum each counter over `{primary} ∪ linked`.
///
/// With no linked items this is exactly the primary's raw counters.
pub fn aggregate(primary: &ItemDetails, linked: &[ItemDetails]) -> StatTotals {
    linked
        .iter()
        .map(StatTotals::from_item)
        .fold(StatTotals::from_item(primary), StatTotals::add)
}

/// Format a counter with thousands separators: `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(views: u64, downloads: u64, favorites: u64) -> ItemDetails {
        ItemDetails {
            id: 0,
            title: String::new(),
            preview_url: String::new(),
            views,
            downloads,
            favorites,
        }
    }

    // =========================================================================
    // aggregate tests
    // =========================================================================

    #[test]
    fn aggregate_without_linked_equals_primary() {
        let totals = aggregate(&item(10, 20, 30), &[]);
        assert_eq!(
            totals,
            StatTotals {
                views: 10,
                downloads: 20,
                favorites: 30
            }
        );
    }

    #[test]
    fn aggregate_sums_linked_counters() {
        // 10 views primary + 5 and 7 linked → 22 displayed
        let totals = aggregate(&item(10, 1, 2), &[item(5, 10, 20), item(7, 100, 200)]);
        assert_eq!(totals.views, 22);
        assert_eq!(totals.downloads, 111);
        assert_eq!(totals.favorites, 222);
    }

    #[test]
    fn aggregate_all_zero() {
        let totals = aggregate(&item(0, 0, 0), &[item(0, 0, 0)]);
        assert_eq!(totals, StatTotals::default());
    }

    #[test]
    fn aggregate_saturates_instead_of_overflowing() {
        let totals = aggregate(&item(u64::MAX, 0, 0), &[item(1, 0, 0)]);
        assert_eq!(totals.views, u64::MAX);
    }

    // =========================================================================
    // format_count tests
    // =========================================================================

    #[test]
    fn format_count_small_values_unchanged() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
