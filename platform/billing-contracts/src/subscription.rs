use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Convention anchoring the first invoice of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    /// One period-length after the start date, preserving the day offset.
    Anniversary,
    /// The next natural calendar boundary for the period.
    Calendar,
}

/// One segment of a subscription's schedule. A subscription is an ordered,
/// non-overlapping sequence of phases; the first phase anchors the first
/// invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPhase {
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub billing_cycle: BillingCycle,
}
