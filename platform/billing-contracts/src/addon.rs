use crate::charge::BillingPeriod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to attach an addon to a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonRequest {
    pub addon_id: String,
}

/// One price on an addon catalog entry, tagged by charge kind so matching
/// can pattern-match exhaustively instead of probing loose fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddonPrice {
    FlatFee {
        billing_period: BillingPeriod,
        /// ISO currency code, compared case-insensitively.
        currency: String,
        amount: Decimal,
    },
    UsageMetered {
        billing_period: BillingPeriod,
        currency: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meter_name: Option<String>,
    },
}

/// An addon as returned by the addon catalog, with its nested price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonCatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prices: Vec<AddonPrice>,
}
