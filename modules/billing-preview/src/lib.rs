//! Subscription invoice preview engine.
//!
//! Given fully-resolved inputs (charges, coupons, phases, tax overrides and
//! the reference catalogs), computes the first invoice date, an itemized
//! discount/tax/total breakdown, and a chronological billing timeline. Every
//! computation here is pure and deterministic: identical inputs yield an
//! identical preview, so recomputation on input change is a plain re-call.

pub mod models;
pub mod services;

pub use models::{
    AddonLineItem, InvoiceBreakdown, InvoicePreview, PreviewError, PreviewRequest, PreviewWarning,
    TimelineEvent,
};
pub use services::preview::compute_invoice_preview;
