use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::advisor::items_to_sell;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::valuation::value_items;
use crate::vault::VaultState;
use crate::warranty::WarrantyTracker;

use super::{DashboardSummary, YearFilter};

/// Builds the dashboard cards.
///
/// Spend and value follow the year filter; warranty and resale counts always
/// cover the whole vault.
pub fn dashboard_summary(
    state: &VaultState,
    filter: YearFilter,
    tracker: &WarrantyTracker,
    today: NaiveDate,
) -> DashboardSummary {
    let registry = state.registry();
    let filtered: Vec<_> = state
        .items
        .iter()
        .filter(|item| match filter {
            YearFilter::All => true,
            YearFilter::Year(year) => item.purchase_date.year() == year,
        })
        .cloned()
        .collect();

    // Items that cannot be valued drop out of both sums.
    let valuations = value_items(&filtered, &registry, today);
    let total_purchase: Decimal = valuations.iter().map(|v| v.purchase_price).sum();
    let current_value: Decimal = valuations.iter().map(|v| v.current_value).sum();
    let change = current_value - total_purchase;
    let change_percent = if total_purchase > Decimal::ZERO {
        (change / total_purchase * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    let mut available_years: Vec<i32> = state
        .items
        .iter()
        .map(|item| item.purchase_date.year())
        .collect();
    available_years.sort_unstable_by(|a, b| b.cmp(a));
    available_years.dedup();

    let summary = DashboardSummary {
        filter,
        total_purchase,
        current_value: current_value.round_dp(DISPLAY_DECIMAL_PRECISION),
        change: change.round_dp(DISPLAY_DECIMAL_PRECISION),
        change_percent,
        item_count: state.items.len(),
        expiring_warranties: tracker.expiring_items(&state.items, today).len(),
        sellable_items: items_to_sell(&state.items, &registry, today).len(),
        available_years,
    };
    debug!(
        "Dashboard: {} item(s), {} expiring, {} sellable",
        summary.item_count, summary.expiring_warranties, summary.sellable_items
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CustomCategory;
    use crate::items::fixtures::{date, item};
    use crate::valuation::DepreciationCurve;

    fn state() -> VaultState {
        let today = date(2024, 6, 1);
        let mut phone = item("phone", "electronics", today - chrono::Duration::days(450), dec!(1000));
        phone.warranty_months = 24;
        // Expires 2024-06-20: 19 days left
        let mut ring = item("ring", "custom_jewel", date(2023, 6, 20), dec!(500));
        ring.warranty_months = 12;
        VaultState::new(
            vec![phone, ring],
            vec![CustomCategory {
                id: "custom_jewel".to_string(),
                name: "Jewelry".to_string(),
                depreciation_curve: DepreciationCurve::None,
            }],
        )
    }

    #[test]
    fn test_summary_all_years() {
        let today = date(2024, 6, 1);
        let summary = dashboard_summary(&state(), YearFilter::All, &WarrantyTracker::default(), today);

        assert_eq!(summary.total_purchase, dec!(1500));
        // phone ~612.12 + ring 500
        assert!(summary.current_value > dec!(1110) && summary.current_value < dec!(1114));
        assert!(summary.change < Decimal::ZERO);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.expiring_warranties, 1);
        assert_eq!(summary.sellable_items, 1);
        assert_eq!(summary.available_years, vec![2023]);
    }

    #[test]
    fn test_summary_year_filter_keeps_global_counts() {
        let today = date(2024, 6, 1);
        let summary = dashboard_summary(
            &state(),
            YearFilter::Year(2022),
            &WarrantyTracker::default(),
            today,
        );
        assert_eq!(summary.total_purchase, Decimal::ZERO);
        assert_eq!(summary.change_percent, Decimal::ZERO);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.expiring_warranties, 1);
        assert_eq!(summary.sellable_items, 1);
    }

    #[test]
    fn test_unvaluable_items_leave_both_totals() {
        let today = date(2024, 6, 1);
        let mut state = state();
        state
            .items
            .push(item("preorder", "electronics", date(2024, 7, 1), dec!(2000)));

        let summary = dashboard_summary(&state, YearFilter::All, &WarrantyTracker::default(), today);
        assert_eq!(summary.total_purchase, dec!(1500));
        assert!(summary.current_value > dec!(1110) && summary.current_value < dec!(1114));
        assert!(summary.change_percent > dec!(-26) && summary.change_percent < dec!(-25));
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_year_filter_serialization() {
        assert_eq!(
            serde_json::to_string(&YearFilter::Year(2024)).unwrap(),
            r#"{"kind":"year","year":2024}"#
        );
        assert_eq!(serde_json::to_string(&YearFilter::All).unwrap(), r#"{"kind":"all"}"#);
    }
}
