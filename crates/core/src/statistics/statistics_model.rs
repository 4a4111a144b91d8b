//! Purchase statistics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::items::Item;
use crate::utils::time_utils::{month_key, year_key};

/// Spend rollup for one month, year or category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsBucket {
    pub total: Decimal,
    pub count: usize,
    /// Ids of the member items, in input order
    pub item_ids: Vec<String>,
}

impl StatisticsBucket {
    fn add(&mut self, item: &Item) {
        self.total += item.price;
        self.count += 1;
        self.item_ids.push(item.id.clone());
    }

    /// Mean price of the member items; 0 for an empty bucket.
    pub fn average(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        (self.total / Decimal::from(self.count)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// Member items looked up in `items`, in bucket order.
    pub fn members<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        self.item_ids
            .iter()
            .filter_map(|id| items.iter().find(|item| &item.id == id))
            .collect()
    }
}

/// Spend grouped by month (`YYYY-MM`), year (`YYYY`) and raw category key.
///
/// Keys iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseStatistics {
    pub by_month: BTreeMap<String, StatisticsBucket>,
    pub by_year: BTreeMap<String, StatisticsBucket>,
    pub by_category: BTreeMap<String, StatisticsBucket>,
    pub total: Decimal,
    pub count: usize,
}

impl PurchaseStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item to its month, year and category bucket and to the total.
    pub fn add_item(&mut self, item: &Item) {
        self.by_month
            .entry(month_key(item.purchase_date))
            .or_default()
            .add(item);
        self.by_year
            .entry(year_key(item.purchase_date))
            .or_default()
            .add(item);
        self.by_category
            .entry(item.category.key().to_string())
            .or_default()
            .add(item);
        self.total += item.price;
        self.count += 1;
    }

    /// Mean price over all items; 0 when there are none.
    pub fn average(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        (self.total / Decimal::from(self.count)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// Years with at least one purchase, newest first.
    pub fn years(&self) -> Vec<String> {
        self.by_year.keys().rev().cloned().collect()
    }

    /// Month buckets belonging to `year` that have purchases.
    pub fn months_for_year(&self, year: i32) -> BTreeMap<String, StatisticsBucket> {
        let prefix = format!("{:04}-", year);
        self.by_month
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, bucket)| (key.clone(), bucket.clone()))
            .collect()
    }
}
