//! Invoice preview assembly
//!
//! Orchestrates classification, both discount engines, addon aggregation
//! and tax into one itemized breakdown, then projects the billing timeline.
//! Discounts apply before tax; tax is computed on the post-discount plan
//! plus addons, never on pre-discount amounts.

use billing_contracts::{BillingPeriod, Charge, InvoiceCadence, ResolvedCatalogs};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{InvoiceBreakdown, InvoicePreview, PreviewError, PreviewRequest};
use crate::services::addons::aggregate_addons;
use crate::services::anchor::first_invoice_date;
use crate::services::classify::classify;
use crate::services::discounts::{apply_line_item_discounts, subscription_discount};
use crate::services::tax::compute_tax;
use crate::services::timeline::build_timeline;

/// Compute the full first-invoice preview for a subscription.
///
/// Pure and deterministic: identical inputs (including identical resolved
/// catalogs) produce an identical preview. Recoverable data gaps surface as
/// warnings on the result; only malformed input errors.
///
/// # Errors
/// * `PreviewError::EmptyPhases` - no phase to anchor the first invoice on
/// * `PreviewError::InvalidAmount` - unparseable price-override amount
pub fn compute_invoice_preview(
    request: &PreviewRequest,
    catalogs: &ResolvedCatalogs,
) -> Result<InvoicePreview, PreviewError> {
    let first_phase = request.phases.first().ok_or(PreviewError::EmptyPhases)?;

    let classified = classify(&request.charges);

    // The plan's period comes from the first charge; recurring charges are
    // assumed uniform in currency within one preview.
    let billing_period = request
        .charges
        .first()
        .map(|charge| charge.billing_period)
        .unwrap_or(BillingPeriod::Monthly);
    let currency = classified
        .recurring
        .first()
        .map(|charge| charge.currency.clone())
        .unwrap_or_else(|| "USD".to_string());

    let line_items = apply_line_item_discounts(
        &classified.recurring,
        &classified.usage,
        &request.price_overrides,
        &request.line_item_coupons,
    )?;

    // Subscription coupons reduce only the recurring subtotal; usage
    // charges rejoin after discounting, addons stay separate.
    let sub_discount = subscription_discount(&request.subscription_coupons, line_items.recurring_total);
    let plan_subtotal = line_items.recurring_total + line_items.usage_total;
    let plan_after_discount =
        (line_items.recurring_total - sub_discount).max(Decimal::ZERO) + line_items.usage_total;

    let addons = aggregate_addons(
        &request.addon_requests,
        &catalogs.addons,
        billing_period,
        &currency,
    );

    let total_before_tax = plan_after_discount + addons.total;
    let tax = compute_tax(
        total_before_tax,
        &request.tax_rate_overrides,
        &currency,
        &catalogs.tax_rates,
    );
    let net_payable = total_before_tax + tax.amount;

    let invoice_date = first_invoice_date(
        first_phase.start_date,
        billing_period,
        first_phase.billing_cycle,
    );

    let breakdown = InvoiceBreakdown {
        plan_subtotal,
        subscription_discount: sub_discount,
        line_item_discount_total: line_items.total_discount,
        per_charge_discounts: line_items.per_charge_discounts,
        addon_total: addons.total,
        addon_line_items: addons.line_items,
        tax_amount: tax.amount,
        net_payable,
        currency,
        first_invoice_date: invoice_date,
        billing_description: billing_description(&request.charges, billing_period, invoice_date),
    };

    let summary = coupon_summary(
        request.line_item_coupons.len(),
        request.subscription_coupons.len(),
        line_items.total_discount,
    );
    let timeline = build_timeline(&request.phases, &breakdown, summary);

    let mut warnings = addons.warnings;
    warnings.extend(tax.warnings);

    Ok(InvoicePreview {
        breakdown,
        timeline,
        warnings,
    })
}

/// Human-readable duration of one billing period.
fn period_duration(period: BillingPeriod) -> &'static str {
    match period {
        BillingPeriod::Daily => "1 day",
        BillingPeriod::Weekly => "1 week",
        BillingPeriod::Monthly => "1 month",
        BillingPeriod::Quarterly => "3 months",
        BillingPeriod::HalfYearly => "6 months",
        BillingPeriod::Annual => "1 year",
    }
}

fn has_advance_charge(charges: &[Charge]) -> bool {
    charges
        .iter()
        .any(|charge| charge.invoice_cadence == InvoiceCadence::Advance)
}

/// One-line billing cadence description: immediate when any charge bills in
/// advance, otherwise dated to the first invoice.
fn billing_description(
    charges: &[Charge],
    period: BillingPeriod,
    invoice_date: NaiveDate,
) -> String {
    let duration = period_duration(period);
    if has_advance_charge(charges) {
        format!("Bills immediately for {}", duration)
    } else {
        format!(
            "Bills on {} for {}",
            invoice_date.format("%b %-d, %Y"),
            duration
        )
    }
}

/// Coupon-count summary, pluralized exactly; None when no coupon applies.
fn coupon_summary(
    line_item_count: usize,
    subscription_count: usize,
    line_item_discount_total: Decimal,
) -> Option<String> {
    let total = line_item_count + subscription_count;
    if total == 0 {
        return None;
    }

    let mut summary = format!(
        "{} coupon{} applied",
        total,
        if total == 1 { "" } else { "s" }
    );
    if line_item_count > 0 && line_item_discount_total > Decimal::ZERO {
        summary.push_str(&format!(
            " ({} line-item, {} subscription)",
            line_item_count, subscription_count
        ));
    }
    Some(summary)
}
