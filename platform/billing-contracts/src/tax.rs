use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Publication status of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Published,
    Draft,
    Archived,
}

/// A tax-rate association on a subscription. Only overrides with
/// `auto_apply` set participate in preview computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateOverride {
    /// ISO currency code, compared case-insensitively.
    pub currency: String,
    /// Foreign key into the tax-rate catalog.
    pub tax_rate_code: String,
    pub auto_apply: bool,
}

/// A tax-rate catalog entry as returned by the tax service. Exactly one of
/// `percentage_value` and `fixed_value` is meaningful; percentage takes
/// precedence when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateResponse {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 0-100 rate applied to the taxable base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_value: Option<Decimal>,
    /// Absolute amount added regardless of the base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<Decimal>,
    pub status: EntityStatus,
}
