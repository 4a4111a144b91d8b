//! Dashboard models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which purchases the spend and value cards cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", tag = "kind", content = "year")]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

/// Headline figures of the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub filter: YearFilter,
    /// Spend on the filtered items
    pub total_purchase: Decimal,
    /// Estimated value of the filtered items
    pub current_value: Decimal,
    /// current_value - total_purchase
    pub change: Decimal,
    /// change / total_purchase * 100; 0 when nothing was spent
    pub change_percent: Decimal,
    /// All items, regardless of the filter
    pub item_count: usize,
    /// Expiring warranties across all items
    pub expiring_warranties: usize,
    /// Items in their resale window across all items
    pub sellable_items: usize,
    /// Purchase years, newest first
    pub available_years: Vec<i32>,
}
