use log::debug;
use std::collections::BTreeMap;

use crate::items::Item;

use super::{PurchaseStatistics, StatisticsBucket};

/// Groups items by purchase month, purchase year and category.
///
/// Each item lands in exactly one bucket of each grouping, so every
/// grouping sums to the grand total.
pub fn aggregate(items: &[Item]) -> PurchaseStatistics {
    let mut stats = PurchaseStatistics::new();
    for item in items {
        stats.add_item(item);
    }
    debug!(
        "Aggregated {} item(s) into {} month(s), {} year(s), {} categories",
        stats.count,
        stats.by_month.len(),
        stats.by_year.len(),
        stats.by_category.len()
    );
    stats
}

/// All twelve month buckets of `year` in calendar order, zero-filling months
/// without purchases. Chart shaping only; buckets of other years are ignored.
pub fn fill_months(
    by_month: &BTreeMap<String, StatisticsBucket>,
    year: i32,
) -> Vec<(String, StatisticsBucket)> {
    (1..=12)
        .map(|month| {
            let key = format!("{:04}-{:02}", year, month);
            let bucket = by_month.get(&key).cloned().unwrap_or_default();
            (key, bucket)
        })
        .collect()
}
