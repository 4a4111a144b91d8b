use chrono::NaiveDate;

use crate::advisor::{analyze_item, items_to_sell, SellCandidate, SellRecommendation};
use crate::categories::CategoryOption;
use crate::dashboard::{dashboard_summary, DashboardSummary, YearFilter};
use crate::errors::{Error, Result};
use crate::items::Item;
use crate::settings::VaultConfig;
use crate::statistics::{aggregate, PurchaseStatistics};
use crate::valuation::{value_item, value_items, ItemValuation};
use crate::warranty::{
    inspection_checklist, InspectionChecklist, WarrantyAlert, WarrantyStatus, WarrantyTracker,
};

use super::VaultState;

/// Read-side entry point used by the presentation layer.
pub trait VaultServiceTrait: Send + Sync {
    fn config(&self) -> &VaultConfig;

    /// Today's date in the configured timezone.
    fn today(&self) -> NaiveDate;

    fn dashboard(&self, state: &VaultState, filter: YearFilter, today: NaiveDate)
        -> DashboardSummary;

    fn valuation(&self, state: &VaultState, item_id: &str, today: NaiveDate)
        -> Result<ItemValuation>;

    fn valuations(&self, state: &VaultState, today: NaiveDate) -> Vec<ItemValuation>;

    fn warranty_status(&self, state: &VaultState, item_id: &str, today: NaiveDate)
        -> Result<WarrantyStatus>;

    fn expiring_warranties(&self, state: &VaultState, today: NaiveDate) -> Vec<WarrantyAlert>;

    fn reminders_due(&self, state: &VaultState, today: NaiveDate) -> Vec<WarrantyAlert>;

    /// Pre-expiry checklist for an item, chosen by its resolved curve.
    fn inspection_checklist(&self, state: &VaultState, item_id: &str) -> Result<InspectionChecklist>;

    fn sell_recommendation(&self, state: &VaultState, item_id: &str, today: NaiveDate)
        -> Result<SellRecommendation>;

    fn items_to_sell(&self, state: &VaultState, today: NaiveDate) -> Vec<SellCandidate>;

    fn statistics(&self, state: &VaultState) -> PurchaseStatistics;

    fn category_options(&self, state: &VaultState) -> Vec<CategoryOption>;
}

pub struct VaultService {
    config: VaultConfig,
    tracker: WarrantyTracker,
}

impl VaultService {
    pub fn new(config: VaultConfig) -> Self {
        let tracker = WarrantyTracker::new(&config);
        Self { config, tracker }
    }
}

impl Default for VaultService {
    fn default() -> Self {
        Self::new(VaultConfig::default())
    }
}

fn find_item<'a>(state: &'a VaultState, item_id: &str) -> Result<&'a Item> {
    state
        .find_item(item_id)
        .ok_or_else(|| Error::ItemNotFound(item_id.to_string()))
}

impl VaultServiceTrait for VaultService {
    fn config(&self) -> &VaultConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.config.today()
    }

    fn dashboard(
        &self,
        state: &VaultState,
        filter: YearFilter,
        today: NaiveDate,
    ) -> DashboardSummary {
        dashboard_summary(state, filter, &self.tracker, today)
    }

    fn valuation(
        &self,
        state: &VaultState,
        item_id: &str,
        today: NaiveDate,
    ) -> Result<ItemValuation> {
        value_item(find_item(state, item_id)?, &state.registry(), today)
    }

    fn valuations(&self, state: &VaultState, today: NaiveDate) -> Vec<ItemValuation> {
        value_items(&state.items, &state.registry(), today)
    }

    fn warranty_status(
        &self,
        state: &VaultState,
        item_id: &str,
        today: NaiveDate,
    ) -> Result<WarrantyStatus> {
        self.tracker.status(find_item(state, item_id)?, today)
    }

    fn expiring_warranties(&self, state: &VaultState, today: NaiveDate) -> Vec<WarrantyAlert> {
        self.tracker.expiring_items(&state.items, today)
    }

    fn reminders_due(&self, state: &VaultState, today: NaiveDate) -> Vec<WarrantyAlert> {
        self.tracker.reminders_due(&state.items, today)
    }

    fn inspection_checklist(&self, state: &VaultState, item_id: &str) -> Result<InspectionChecklist> {
        let item = find_item(state, item_id)?;
        Ok(inspection_checklist(
            state.registry().resolve_curve(&item.category),
        ))
    }

    fn sell_recommendation(
        &self,
        state: &VaultState,
        item_id: &str,
        today: NaiveDate,
    ) -> Result<SellRecommendation> {
        analyze_item(find_item(state, item_id)?, &state.registry(), today)
    }

    fn items_to_sell(&self, state: &VaultState, today: NaiveDate) -> Vec<SellCandidate> {
        items_to_sell(&state.items, &state.registry(), today)
    }

    fn statistics(&self, state: &VaultState) -> PurchaseStatistics {
        aggregate(&state.items)
    }

    fn category_options(&self, state: &VaultState) -> Vec<CategoryOption> {
        state.registry().options()
    }
}
