use chrono::NaiveDate;
use log::warn;

use crate::constants::DEFAULT_EXPIRING_WINDOW_DAYS;
use crate::errors::{CalculatorError, Result};
use crate::items::Item;
use crate::settings::VaultConfig;
use crate::utils::time_utils::{add_calendar_months, days_between};

use super::{WarrantyAlert, WarrantyState, WarrantyStatus};

/// Warranty status with the default 30-day expiring window.
///
/// The expiry date is the purchase date plus `warranty_months` calendar
/// months. A day missing from the target month rolls into the next one.
pub fn warranty_status(
    purchase_date: NaiveDate,
    warranty_months: u32,
    today: NaiveDate,
) -> Result<WarrantyStatus> {
    status_with_window(
        purchase_date,
        warranty_months,
        today,
        DEFAULT_EXPIRING_WINDOW_DAYS,
    )
}

fn status_with_window(
    purchase_date: NaiveDate,
    warranty_months: u32,
    today: NaiveDate,
    expiring_window_days: i64,
) -> Result<WarrantyStatus> {
    let expiry_date = add_calendar_months(purchase_date, warranty_months)
        .ok_or(CalculatorError::ExpiryOutOfRange(purchase_date))?;
    let days_remaining = days_between(today, expiry_date);

    Ok(WarrantyStatus {
        expiry_date,
        days_remaining,
        state: WarrantyState::classify(days_remaining, expiring_window_days),
    })
}

/// Warranty tracker bound to the configured thresholds.
#[derive(Debug, Clone)]
pub struct WarrantyTracker {
    expiring_window_days: i64,
    reminder_days: i64,
}

impl WarrantyTracker {
    pub fn new(config: &VaultConfig) -> Self {
        Self {
            expiring_window_days: config.expiring_window_days,
            reminder_days: config.reminder_days,
        }
    }

    pub fn status(&self, item: &Item, today: NaiveDate) -> Result<WarrantyStatus> {
        status_with_window(
            item.purchase_date,
            item.warranty_months,
            today,
            self.expiring_window_days,
        )
    }

    /// Items whose warranty is in the expiring window, soonest first.
    pub fn expiring_items(&self, items: &[Item], today: NaiveDate) -> Vec<WarrantyAlert> {
        let mut alerts: Vec<_> = self
            .alerts(items, today)
            .filter(|alert| alert.status.is_expiring())
            .collect();
        alerts.sort_by_key(|alert| alert.status.days_remaining);
        alerts
    }

    /// Items whose reminder fires today: expiring with exactly
    /// `reminder_days` left.
    pub fn reminders_due(&self, items: &[Item], today: NaiveDate) -> Vec<WarrantyAlert> {
        self.alerts(items, today)
            .filter(|alert| {
                alert.status.is_expiring() && alert.status.days_remaining == self.reminder_days
            })
            .collect()
    }

    fn alerts<'a>(
        &'a self,
        items: &'a [Item],
        today: NaiveDate,
    ) -> impl Iterator<Item = WarrantyAlert> + 'a {
        items.iter().filter_map(move |item| match self.status(item, today) {
            Ok(status) => Some(WarrantyAlert {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                status,
            }),
            Err(e) => {
                warn!("Skipping warranty check of item {}: {}", item.id, e);
                None
            }
        })
    }
}

impl Default for WarrantyTracker {
    fn default() -> Self {
        Self::new(&VaultConfig::default())
    }
}
