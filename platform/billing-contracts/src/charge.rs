use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Billing period of a charge or addon price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    HalfYearly,
    Annual,
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillingPeriod::Daily => "daily",
            BillingPeriod::Weekly => "weekly",
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::HalfYearly => "half-yearly",
            BillingPeriod::Annual => "annual",
        };
        write!(f, "{}", s)
    }
}

/// Raised when a caller hands over a billing period string outside the
/// supported set. Malformed input, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown billing period: {0}")]
pub struct UnknownBillingPeriod(pub String);

impl FromStr for BillingPeriod {
    type Err = UnknownBillingPeriod;

    /// Case-insensitive parse of catalog billing-period values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DAILY" => Ok(BillingPeriod::Daily),
            "WEEKLY" => Ok(BillingPeriod::Weekly),
            "MONTHLY" => Ok(BillingPeriod::Monthly),
            "QUARTERLY" => Ok(BillingPeriod::Quarterly),
            "HALF_YEARLY" => Ok(BillingPeriod::HalfYearly),
            "ANNUAL" => Ok(BillingPeriod::Annual),
            _ => Err(UnknownBillingPeriod(s.to_string())),
        }
    }
}

/// Charge pricing model. Flat-fee charges bill a fixed amount per period;
/// usage-metered charges bill on consumption and are never discounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeKind {
    FlatFee,
    UsageMetered,
}

/// Whether a charge is invoiced at the start or the end of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceCadence {
    Advance,
    Arrears,
}

/// A priced line item on a plan. Immutable once loaded into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    pub name: String,
    pub kind: ChargeKind,
    /// Currency-exact amount; decimal string on the wire.
    pub amount: Decimal,
    /// ISO currency code, compared case-insensitively.
    pub currency: String,
    pub billing_period: BillingPeriod,
    pub invoice_cadence: InvoiceCadence,
    /// Meter backing a usage-metered charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_period_wire_format() {
        assert_eq!(
            serde_json::to_string(&BillingPeriod::HalfYearly).unwrap(),
            "\"HALF_YEARLY\""
        );
        let period: BillingPeriod = serde_json::from_str("\"QUARTERLY\"").unwrap();
        assert_eq!(period, BillingPeriod::Quarterly);
    }

    #[test]
    fn test_billing_period_from_str_case_insensitive() {
        assert_eq!("monthly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Monthly);
        assert_eq!("HALF_YEARLY".parse::<BillingPeriod>().unwrap(), BillingPeriod::HalfYearly);
    }

    #[test]
    fn test_billing_period_from_str_unknown() {
        let err = "fortnightly".parse::<BillingPeriod>().unwrap_err();
        assert_eq!(err, UnknownBillingPeriod("fortnightly".to_string()));
    }

    #[test]
    fn test_charge_amount_is_decimal_string_on_wire() {
        let charge = Charge {
            id: "price_001".to_string(),
            name: "Base plan".to_string(),
            kind: ChargeKind::FlatFee,
            amount: "49.99".parse().unwrap(),
            currency: "USD".to_string(),
            billing_period: BillingPeriod::Monthly,
            invoice_cadence: InvoiceCadence::Advance,
            meter_name: None,
        };

        let json = serde_json::to_value(&charge).unwrap();
        assert_eq!(json["amount"], "49.99");
        assert_eq!(json["kind"], "FLAT_FEE");
        assert_eq!(json["invoice_cadence"], "ADVANCE");

        let back: Charge = serde_json::from_value(json).unwrap();
        assert_eq!(back, charge);
    }
}
