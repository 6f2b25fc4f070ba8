use billing_contracts::{AddonRequest, Charge, Coupon, SubscriptionPhase, TaxRateOverride};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

// ============================================================================
// Input
// ============================================================================

/// Everything the engine needs for one preview. Collaborators resolve the
/// reference catalogs separately; see `billing_contracts::ResolvedCatalogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub charges: Vec<Charge>,
    /// Ordered, non-overlapping; must be non-empty.
    pub phases: Vec<SubscriptionPhase>,
    /// Subscription-level coupons, applied to the recurring subtotal.
    #[serde(default)]
    pub subscription_coupons: Vec<Coupon>,
    /// Per-charge amount replacements; decimal strings keyed by charge id.
    #[serde(default)]
    pub price_overrides: HashMap<String, String>,
    /// Coupons bound to one specific charge, keyed by charge id.
    #[serde(default)]
    pub line_item_coupons: HashMap<String, Coupon>,
    #[serde(default)]
    pub tax_rate_overrides: Vec<TaxRateOverride>,
    #[serde(default)]
    pub addon_requests: Vec<AddonRequest>,
}

// ============================================================================
// Output
// ============================================================================

/// One matched addon's contribution, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonLineItem {
    pub name: String,
    pub amount: Decimal,
}

/// The itemized first-invoice breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBreakdown {
    pub plan_subtotal: Decimal,
    pub subscription_discount: Decimal,
    pub line_item_discount_total: Decimal,
    /// Discount applied per recurring charge, keyed by charge id.
    pub per_charge_discounts: BTreeMap<String, Decimal>,
    pub addon_total: Decimal,
    pub addon_line_items: Vec<AddonLineItem>,
    pub tax_amount: Decimal,
    pub net_payable: Decimal,
    pub currency: String,
    pub first_invoice_date: NaiveDate,
    pub billing_description: String,
}

/// A display event on the subscription's billing timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineEvent {
    PhaseStart {
        date: NaiveDate,
        label: String,
    },
    FirstInvoice {
        date: NaiveDate,
        breakdown: InvoiceBreakdown,
        /// E.g. "2 coupons applied (1 line-item, 1 subscription)".
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coupon_summary: Option<String>,
    },
    SubscriptionEnd {
        date: NaiveDate,
    },
}

/// A degraded-but-successful condition observed during computation. The
/// preview still renders; callers (and tests) can assert on these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreviewWarning {
    /// An auto-applied override referenced a code absent from the catalog.
    UnknownTaxRateCode { tax_rate_code: String },
    /// A requested addon no longer exists in the catalog.
    AddonNotInCatalog { addon_id: String },
    /// The addon exists but has no flat-fee price for this period/currency.
    NoMatchingAddonPrice { addon_id: String },
}

/// Complete preview: breakdown, timeline, and any warnings gathered along
/// the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePreview {
    #[serde(flatten)]
    pub breakdown: InvoiceBreakdown,
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub warnings: Vec<PreviewWarning>,
}

// ============================================================================
// Error
// ============================================================================

/// Malformed caller input. Recoverable conditions (missing tax rate,
/// unmatched addon) are `PreviewWarning`s, not errors.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Subscription must have at least one phase")]
    EmptyPhases,

    #[error("Invalid amount '{value}' for charge {charge_id}: {source}")]
    InvalidAmount {
        charge_id: String,
        value: String,
        source: rust_decimal::Error,
    },
}
