use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::categories::CategoryRegistry;
use crate::errors::Result;
use crate::items::Item;
use crate::valuation::{value_item, DepreciationCurve};

use super::{SellCandidate, SellRecommendation};

/// Checks ownership duration and value share against the curve's resale
/// windows. Both must fall inside the same window for a recommendation.
pub fn evaluate_sell_window(
    curve: DepreciationCurve,
    months_owned: Decimal,
    value_percent: Decimal,
) -> SellRecommendation {
    let profile = curve.profile();
    match profile.matching_window(months_owned, value_percent) {
        Some(window) => SellRecommendation {
            should_sell: true,
            urgency: window.urgency_for(months_owned),
            rationale: window.rationale.render(months_owned, value_percent),
            value_percent,
            months_owned,
            curve,
        },
        None => SellRecommendation::hold(curve, months_owned, value_percent),
    }
}

/// Sell analysis for one item.
///
/// Items on the `none` curve have no decay to time and are never advised to
/// sell; neither are zero-priced items, whose value share is undefined.
pub fn analyze_item(
    item: &Item,
    registry: &CategoryRegistry<'_>,
    today: NaiveDate,
) -> Result<SellRecommendation> {
    let valuation = value_item(item, registry, today)?;

    if !valuation.curve.depreciates() || item.price.is_zero() {
        return Ok(SellRecommendation::hold(
            valuation.curve,
            valuation.months_owned,
            valuation.value_percent,
        ));
    }

    Ok(evaluate_sell_window(
        valuation.curve,
        valuation.months_owned,
        valuation.value_percent,
    ))
}

/// Items currently in their resale sweet spot, most urgent first.
///
/// Items that cannot be analyzed are logged and left out.
pub fn items_to_sell(
    items: &[Item],
    registry: &CategoryRegistry<'_>,
    today: NaiveDate,
) -> Vec<SellCandidate> {
    let mut candidates: Vec<SellCandidate> = items
        .iter()
        .filter_map(|item| match analyze_item(item, registry, today) {
            Ok(recommendation) if recommendation.should_sell => Some(SellCandidate {
                item: item.clone(),
                recommendation,
            }),
            Ok(_) => None,
            Err(e) => {
                warn!("Skipping sell analysis of item {}: {}", item.id, e);
                None
            }
        })
        .collect();

    candidates.sort_by_key(|candidate| candidate.recommendation.urgency);
    debug!("{} of {} item(s) in their resale window", candidates.len(), items.len());
    candidates
}
