//! Shared billing models for the invoice preview pipeline.
//!
//! These types mirror the wire representation used by the pricing catalog:
//! enums serialize as SCREAMING_SNAKE_CASE tags, monetary amounts as
//! currency-exact decimal strings.

pub mod addon;
pub mod catalog;
pub mod charge;
pub mod coupon;
pub mod subscription;
pub mod tax;

pub use addon::{AddonCatalogEntry, AddonPrice, AddonRequest};
pub use catalog::ResolvedCatalogs;
pub use charge::{BillingPeriod, Charge, ChargeKind, InvoiceCadence, UnknownBillingPeriod};
pub use coupon::{Coupon, CouponCadence, CouponKind};
pub use subscription::{BillingCycle, SubscriptionPhase};
pub use tax::{EntityStatus, TaxRateOverride, TaxRateResponse};
