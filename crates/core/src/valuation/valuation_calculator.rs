use chrono::NaiveDate;
use log::warn;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::categories::CategoryRegistry;
use crate::constants::{DAYS_PER_MONTH, DECIMAL_PRECISION};
use crate::errors::{CalculatorError, Result};
use crate::items::Item;
use crate::utils::time_utils::days_between;

use super::{DepreciationCurve, ItemValuation};

/// Ownership duration in simplified 30-day months.
///
/// A purchase date after `today` is rejected rather than producing a
/// negative duration.
pub fn calculate_months_owned(purchase_date: NaiveDate, today: NaiveDate) -> Result<Decimal> {
    let days = days_between(purchase_date, today);
    if days < 0 {
        return Err(CalculatorError::FuturePurchaseDate {
            purchase_date,
            today,
        }
        .into());
    }
    Ok(Decimal::from(days) / Decimal::from(DAYS_PER_MONTH))
}

/// Estimated current value of an item bought for `price` on `purchase_date`.
///
/// Within the first month the value is `price * immediate_factor`; after that
/// it decays continuously as `annual_decay ^ years_owned`. The `none` curve
/// always returns `price` unchanged.
pub fn calculate_current_value(
    price: Decimal,
    purchase_date: NaiveDate,
    curve: DepreciationCurve,
    today: NaiveDate,
) -> Result<Decimal> {
    let months_owned = calculate_months_owned(purchase_date, today)?;
    if !curve.depreciates() {
        return Ok(price);
    }

    let profile = curve.profile();
    let after_drop = price * profile.immediate_factor;
    if months_owned < Decimal::ONE {
        return Ok(after_drop.round_dp(DECIMAL_PRECISION).max(Decimal::ZERO));
    }

    let years_owned = months_owned / dec!(12);
    let decay = profile
        .annual_decay
        .checked_powd(years_owned)
        .ok_or_else(|| {
            CalculatorError::Calculation(format!(
                "{} ^ {} overflowed",
                profile.annual_decay, years_owned
            ))
        })?;

    Ok((after_drop * decay)
        .round_dp(DECIMAL_PRECISION)
        .max(Decimal::ZERO))
}

/// Current value as a percentage of the purchase price; 0 for a zero price.
pub fn calculate_value_percent(current_value: Decimal, price: Decimal) -> Decimal {
    if price.is_zero() {
        return Decimal::ZERO;
    }
    (current_value / price * dec!(100)).round_dp(DECIMAL_PRECISION)
}

/// Values one item, resolving its curve through the registry.
pub fn value_item(
    item: &Item,
    registry: &CategoryRegistry<'_>,
    today: NaiveDate,
) -> Result<ItemValuation> {
    let curve = registry.resolve_curve(&item.category);
    let months_owned = calculate_months_owned(item.purchase_date, today)?;
    let current_value = calculate_current_value(item.price, item.purchase_date, curve, today)?;

    Ok(ItemValuation {
        item_id: item.id.clone(),
        curve,
        purchase_price: item.price,
        current_value,
        value_percent: calculate_value_percent(current_value, item.price),
        months_owned,
    })
}

/// Values every item, skipping (and logging) the ones that fail.
pub fn value_items(
    items: &[Item],
    registry: &CategoryRegistry<'_>,
    today: NaiveDate,
) -> Vec<ItemValuation> {
    items
        .iter()
        .filter_map(|item| match value_item(item, registry, today) {
            Ok(valuation) => Some(valuation),
            Err(e) => {
                warn!("Skipping valuation of item {}: {}", item.id, e);
                None
            }
        })
        .collect()
}
