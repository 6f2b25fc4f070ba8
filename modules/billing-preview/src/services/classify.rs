//! Charge classification
//!
//! Partitions a charge list into its recurring (flat-fee) and usage-metered
//! subsets. All downstream discount math operates only on the recurring
//! subset.

use billing_contracts::{Charge, ChargeKind};

/// A stable partition of a charge list. Order is preserved within each
/// subset; no charge is duplicated or dropped.
#[derive(Debug, Default)]
pub struct ClassifiedCharges<'a> {
    pub recurring: Vec<&'a Charge>,
    pub usage: Vec<&'a Charge>,
}

/// Partition charges by pricing model.
pub fn classify(charges: &[Charge]) -> ClassifiedCharges<'_> {
    let mut classified = ClassifiedCharges::default();
    for charge in charges {
        match charge.kind {
            ChargeKind::FlatFee => classified.recurring.push(charge),
            ChargeKind::UsageMetered => classified.usage.push(charge),
        }
    }
    classified
}
