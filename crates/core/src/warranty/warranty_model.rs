//! Warranty domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mutually exclusive warranty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyState {
    Active,
    Expiring,
    Expired,
}

impl WarrantyState {
    /// Classifies a signed day count. Expired takes precedence, then
    /// expiring, so every integer maps to exactly one state.
    pub fn classify(days_remaining: i64, expiring_window_days: i64) -> Self {
        if days_remaining <= 0 {
            WarrantyState::Expired
        } else if days_remaining <= expiring_window_days {
            WarrantyState::Expiring
        } else {
            WarrantyState::Active
        }
    }
}

/// Derived warranty status of an item on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyStatus {
    pub expiry_date: NaiveDate,
    /// Negative once the warranty has lapsed
    pub days_remaining: i64,
    pub state: WarrantyState,
}

impl WarrantyStatus {
    pub fn is_active(&self) -> bool {
        self.state == WarrantyState::Active
    }

    pub fn is_expiring(&self) -> bool {
        self.state == WarrantyState::Expiring
    }

    pub fn is_expired(&self) -> bool {
        self.state == WarrantyState::Expired
    }
}

/// An item whose warranty needs attention, with its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyAlert {
    pub item_id: String,
    pub item_name: String,
    pub status: WarrantyStatus,
}

/// What to check on an item before its warranty lapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionChecklist {
    pub checks: Vec<InspectionCheck>,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionCheck {
    pub title: String,
    pub detail: String,
}
