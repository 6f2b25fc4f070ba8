//! Discount engines
//!
//! Line-item pass: per-charge coupons against recurring charges, with price
//! overrides taking precedence over catalog amounts. Subscription pass:
//! subscription-level coupons against the recurring subtotal. Usage-metered
//! charges pass through at full effective amount and are never discounted.

use billing_contracts::{Charge, Coupon, CouponKind};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::models::PreviewError;

/// Discount a single coupon yields against a base amount.
///
/// FIXED coupons are capped at the base (a 20-off coupon on a 15 charge
/// discounts 15); PERCENTAGE coupons take `percentage_off / 100` of the
/// base. A coupon missing its value field contributes zero.
pub fn coupon_discount(coupon: &Coupon, base: Decimal) -> Decimal {
    match coupon.kind {
        CouponKind::Fixed => coupon
            .amount_off
            .unwrap_or_default()
            .min(base)
            .max(Decimal::ZERO),
        CouponKind::Percentage => {
            base * coupon.percentage_off.unwrap_or_default() / Decimal::ONE_HUNDRED
        }
    }
}

/// Resolve a charge's effective amount: the override entry wins over the
/// catalog amount when present.
pub fn effective_amount(
    charge: &Charge,
    price_overrides: &HashMap<String, String>,
) -> Result<Decimal, PreviewError> {
    match price_overrides.get(&charge.id) {
        Some(raw) => Decimal::from_str(raw).map_err(|source| PreviewError::InvalidAmount {
            charge_id: charge.id.clone(),
            value: raw.clone(),
            source,
        }),
        None => Ok(charge.amount),
    }
}

/// Result of the line-item discount pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemTotals {
    /// Recurring charges after per-charge discounts, floored at zero each.
    pub recurring_total: Decimal,
    /// Usage charges at full effective amount; no coupon touches these.
    pub usage_total: Decimal,
    /// Discount per recurring charge id (zero entries included).
    pub per_charge_discounts: BTreeMap<String, Decimal>,
    pub total_discount: Decimal,
}

/// Apply line-item coupons to the recurring charges and pass usage charges
/// through untouched.
pub fn apply_line_item_discounts(
    recurring: &[&Charge],
    usage: &[&Charge],
    price_overrides: &HashMap<String, String>,
    line_item_coupons: &HashMap<String, Coupon>,
) -> Result<LineItemTotals, PreviewError> {
    let mut recurring_total = Decimal::ZERO;
    let mut usage_total = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut per_charge_discounts = BTreeMap::new();

    for charge in recurring {
        let amount = effective_amount(charge, price_overrides)?;
        let discount = match line_item_coupons.get(&charge.id) {
            Some(coupon) => coupon_discount(coupon, amount),
            None => Decimal::ZERO,
        };

        per_charge_discounts.insert(charge.id.clone(), discount);
        total_discount += discount;
        recurring_total += (amount - discount).max(Decimal::ZERO);
    }

    for charge in usage {
        usage_total += effective_amount(charge, price_overrides)?;
    }

    Ok(LineItemTotals {
        recurring_total,
        usage_total,
        per_charge_discounts,
        total_discount,
    })
}

/// Total subscription-level discount against the recurring subtotal.
///
/// Each coupon is computed independently against the same base and the
/// results are summed, not compounded sequentially. Known simplification,
/// preserved deliberately.
pub fn subscription_discount(coupons: &[Coupon], recurring_subtotal: Decimal) -> Decimal {
    coupons
        .iter()
        .map(|coupon| coupon_discount(coupon, recurring_subtotal))
        .sum()
}
