//! Sell advisor domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::items::Item;
use crate::valuation::DepreciationCurve;

/// How time-sensitive a sell recommendation is.
///
/// Ordered most urgent first: High < Medium < Low, so sorting ascending puts
/// the items to act on at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    #[default]
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one item against its curve's resale windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellRecommendation {
    pub should_sell: bool,
    pub urgency: Urgency,
    /// Empty when no window fired
    pub rationale: String,
    pub value_percent: Decimal,
    pub months_owned: Decimal,
    /// Curve whose windows were consulted
    pub curve: DepreciationCurve,
}

impl SellRecommendation {
    pub fn hold(curve: DepreciationCurve, months_owned: Decimal, value_percent: Decimal) -> Self {
        Self {
            should_sell: false,
            urgency: Urgency::Low,
            rationale: String::new(),
            value_percent,
            months_owned,
            curve,
        }
    }
}

/// An item the advisor recommends selling, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellCandidate {
    pub item: Item,
    pub recommendation: SellRecommendation,
}
