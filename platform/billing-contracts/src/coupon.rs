use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a coupon's reduction is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    Fixed,
    Percentage,
}

/// How often a coupon re-applies over the subscription's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponCadence {
    Once,
    Repeated,
    Forever,
}

/// A discount definition. Applied either to one specific charge
/// (line-item) or to the aggregate recurring subtotal (subscription-level).
///
/// Redemption counters are informational only; the preview engine reports
/// them but never rejects an over-redeemed coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub name: String,
    pub kind: CouponKind,
    /// Absolute reduction; required when kind is FIXED.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<Decimal>,
    /// 0-100 reduction; required when kind is PERCENTAGE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_off: Option<Decimal>,
    pub cadence: CouponCadence,
    /// None means unlimited redemptions.
    #[serde(default)]
    pub max_redemptions: Option<i64>,
    #[serde(default)]
    pub total_redemptions: i64,
}
