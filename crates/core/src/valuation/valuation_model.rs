//! Depreciation curves and the curve parameter table.
//!
//! The table is the single source for both the depreciation factors and the
//! resale sweet-spot windows, so the valuation engine and the sell advisor
//! cannot drift apart.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::advisor::Urgency;

/// Named depreciation model mapping ownership duration to a value multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepreciationCurve {
    Electronics,
    Appliances,
    Vehicles,
    #[default]
    Generic,
    /// Non-depreciating assets: jewelry, art, collectibles.
    None,
}

impl DepreciationCurve {
    pub const ALL: [DepreciationCurve; 5] = [
        DepreciationCurve::Electronics,
        DepreciationCurve::Appliances,
        DepreciationCurve::Vehicles,
        DepreciationCurve::Generic,
        DepreciationCurve::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepreciationCurve::Electronics => "electronics",
            DepreciationCurve::Appliances => "appliances",
            DepreciationCurve::Vehicles => "vehicles",
            DepreciationCurve::Generic => "generic",
            DepreciationCurve::None => "none",
        }
    }

    /// Label shown next to a custom category.
    pub fn label(&self) -> &'static str {
        match self {
            DepreciationCurve::Electronics => "Like electronics",
            DepreciationCurve::Appliances => "Like appliances",
            DepreciationCurve::Vehicles => "Like vehicles",
            DepreciationCurve::Generic => "Generic",
            DepreciationCurve::None => "No depreciation",
        }
    }

    pub fn depreciates(&self) -> bool {
        !matches!(self, DepreciationCurve::None)
    }

    /// Parameters for this curve.
    pub fn profile(&self) -> CurveProfile {
        match self {
            DepreciationCurve::Electronics => CurveProfile {
                immediate_factor: dec!(0.75),
                annual_decay: dec!(0.85),
                sell_windows: vec![
                    SellWindow {
                        months_owned: inclusive(dec!(12), dec!(24)),
                        value_percent: inclusive(dec!(45), dec!(70)),
                        urgency: Urgency::Medium,
                        escalation: Some(Escalation {
                            from_months: dec!(18),
                            urgency: Urgency::High,
                        }),
                        rationale: RationaleTemplate::PeakResale,
                    },
                    // Past the sweet spot but still worth something
                    SellWindow {
                        months_owned: (Bound::Excluded(dec!(24)), Bound::Unbounded),
                        value_percent: (Bound::Excluded(dec!(40)), Bound::Unbounded),
                        urgency: Urgency::Medium,
                        escalation: None,
                        rationale: RationaleTemplate::LosingValueFast,
                    },
                ],
            },
            DepreciationCurve::Appliances => CurveProfile {
                immediate_factor: dec!(0.80),
                annual_decay: dec!(0.95),
                sell_windows: vec![SellWindow {
                    months_owned: inclusive(dec!(24), dec!(48)),
                    value_percent: inclusive(dec!(55), dec!(75)),
                    urgency: Urgency::Low,
                    escalation: None,
                    rationale: RationaleTemplate::ReplacementWindow,
                }],
            },
            DepreciationCurve::Vehicles => CurveProfile {
                immediate_factor: dec!(0.85),
                annual_decay: dec!(0.90),
                sell_windows: vec![SellWindow {
                    months_owned: inclusive(dec!(18), dec!(36)),
                    value_percent: inclusive(dec!(50), dec!(70)),
                    urgency: Urgency::Low,
                    escalation: Some(Escalation {
                        from_months: dec!(24),
                        urgency: Urgency::Medium,
                    }),
                    rationale: RationaleTemplate::GoodMoment,
                }],
            },
            DepreciationCurve::Generic => CurveProfile {
                immediate_factor: dec!(0.85),
                annual_decay: dec!(0.92),
                sell_windows: vec![SellWindow {
                    months_owned: inclusive(dec!(12), dec!(30)),
                    value_percent: inclusive(dec!(45), dec!(70)),
                    urgency: Urgency::Low,
                    escalation: None,
                    rationale: RationaleTemplate::ConsiderReplacing,
                }],
            },
            DepreciationCurve::None => CurveProfile {
                immediate_factor: Decimal::ONE,
                annual_decay: Decimal::ONE,
                sell_windows: Vec::new(),
            },
        }
    }
}

impl fmt::Display for DepreciationCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn inclusive(start: Decimal, end: Decimal) -> (Bound<Decimal>, Bound<Decimal>) {
    (Bound::Included(start), Bound::Included(end))
}

/// Factors and resale windows of one curve.
#[derive(Debug, Clone)]
pub struct CurveProfile {
    /// Share of the price kept right after purchase
    pub immediate_factor: Decimal,
    /// Share of the value kept per year of ownership after the first month
    pub annual_decay: Decimal,
    /// Evaluated in order; the first matching window wins
    pub sell_windows: Vec<SellWindow>,
}

impl CurveProfile {
    /// First window containing both the ownership duration and the value share.
    pub fn matching_window(
        &self,
        months_owned: Decimal,
        value_percent: Decimal,
    ) -> Option<&SellWindow> {
        self.sell_windows
            .iter()
            .find(|window| window.contains(months_owned, value_percent))
    }
}

/// Urgency bump once the item has been owned long enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalation {
    pub from_months: Decimal,
    pub urgency: Urgency,
}

/// Which sentence explains a fired window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationaleTemplate {
    PeakResale,
    LosingValueFast,
    ReplacementWindow,
    GoodMoment,
    ConsiderReplacing,
}

impl RationaleTemplate {
    /// Renders the rationale with figures rounded to whole numbers.
    pub fn render(&self, months_owned: Decimal, value_percent: Decimal) -> String {
        let months = round_whole(months_owned);
        let percent = round_whole(value_percent);
        match self {
            RationaleTemplate::PeakResale => format!(
                "Owned for {} months and still worth {}% of its price. This is the ideal moment to sell before it loses more value.",
                months, percent
            ),
            RationaleTemplate::LosingValueFast => format!(
                "Still worth {}% of its price but losing value quickly. Consider selling.",
                percent
            ),
            RationaleTemplate::ReplacementWindow => format!(
                "Still worth {}% of its price. If you plan to replace it, this is a good moment.",
                percent
            ),
            RationaleTemplate::GoodMoment => format!(
                "Owned for {} months and worth {}% of its price. A good moment to sell.",
                months, percent
            ),
            RationaleTemplate::ConsiderReplacing => format!(
                "Worth {}% of the original price. Consider selling if you want to replace it.",
                percent
            ),
        }
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Resale sweet spot: an ownership-duration range and a value-percent range
/// that must both contain the item.
#[derive(Debug, Clone, Copy)]
pub struct SellWindow {
    pub months_owned: (Bound<Decimal>, Bound<Decimal>),
    pub value_percent: (Bound<Decimal>, Bound<Decimal>),
    pub urgency: Urgency,
    pub escalation: Option<Escalation>,
    pub rationale: RationaleTemplate,
}

impl SellWindow {
    pub fn contains(&self, months_owned: Decimal, value_percent: Decimal) -> bool {
        self.months_owned.contains(&months_owned) && self.value_percent.contains(&value_percent)
    }

    pub fn urgency_for(&self, months_owned: Decimal) -> Urgency {
        match self.escalation {
            Some(escalation) if months_owned >= escalation.from_months => escalation.urgency,
            _ => self.urgency,
        }
    }
}

/// Valuation of one item on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValuation {
    pub item_id: String,
    pub curve: DepreciationCurve,
    pub purchase_price: Decimal,
    pub current_value: Decimal,
    /// current / price * 100; 0 for a zero price
    pub value_percent: Decimal,
    /// Elapsed days / 30
    pub months_owned: Decimal,
}

impl ItemValuation {
    /// Current value minus purchase price (negative for a loss).
    pub fn change(&self) -> Decimal {
        self.current_value - self.purchase_price
    }
}
