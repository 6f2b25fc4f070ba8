//! Tax computation
//!
//! Applies auto-apply tax-rate overrides against the post-discount,
//! pre-tax total. Multiple applicable taxes stack additively. An override
//! whose code cannot be resolved against the catalog contributes zero and
//! is reported as a warning; a missing or unpublished tax rate must never
//! abort the preview.

use billing_contracts::{TaxRateOverride, TaxRateResponse};
use rust_decimal::Decimal;

use crate::models::PreviewWarning;

/// Total tax plus any unresolved-code warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxComputation {
    pub amount: Decimal,
    pub warnings: Vec<PreviewWarning>,
}

/// Compute the total tax on `base` for the given overrides.
///
/// Only overrides with `auto_apply` set and a case-insensitive currency
/// match participate. A resolved rate applies its percentage value when
/// present, otherwise its fixed value; a rate carrying neither contributes
/// nothing.
pub fn compute_tax(
    base: Decimal,
    overrides: &[TaxRateOverride],
    currency: &str,
    tax_rates: &[TaxRateResponse],
) -> TaxComputation {
    let mut computation = TaxComputation::default();

    let applicable = overrides
        .iter()
        .filter(|o| o.auto_apply && o.currency.eq_ignore_ascii_case(currency));

    for tax_override in applicable {
        match tax_rates.iter().find(|rate| rate.code == tax_override.tax_rate_code) {
            Some(rate) => {
                if let Some(percentage) = rate.percentage_value {
                    computation.amount += base * percentage / Decimal::ONE_HUNDRED;
                } else if let Some(fixed) = rate.fixed_value {
                    computation.amount += fixed;
                }
            }
            None => {
                // Rate may have been deleted or never published.
                tracing::warn!(
                    "Tax rate data not found for code {}, skipping",
                    tax_override.tax_rate_code
                );
                computation.warnings.push(PreviewWarning::UnknownTaxRateCode {
                    tax_rate_code: tax_override.tax_rate_code.clone(),
                });
            }
        }
    }

    computation
}
