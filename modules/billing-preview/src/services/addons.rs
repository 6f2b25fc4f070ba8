//! Addon aggregation
//!
//! Matches requested addons against the resolved catalog and sums the
//! matched flat-fee prices. A deleted addon or a price list with no exact
//! (period, currency, flat-fee) match is skipped with a warning; the
//! preview still renders.

use billing_contracts::{AddonCatalogEntry, AddonPrice, AddonRequest, BillingPeriod};
use rust_decimal::Decimal;

use crate::models::{AddonLineItem, PreviewWarning};

/// Aggregated addon contribution plus its per-addon display breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddonAggregate {
    pub total: Decimal,
    pub line_items: Vec<AddonLineItem>,
    pub warnings: Vec<PreviewWarning>,
}

/// Sum the flat-fee prices of the requested addons that match the plan's
/// billing period and currency. Usage-billed addon prices never aggregate
/// here. The first matching price in an entry's list wins.
pub fn aggregate_addons(
    requests: &[AddonRequest],
    catalog: &[AddonCatalogEntry],
    billing_period: BillingPeriod,
    currency: &str,
) -> AddonAggregate {
    let mut aggregate = AddonAggregate::default();

    for request in requests {
        let Some(addon) = catalog.iter().find(|entry| entry.id == request.addon_id) else {
            tracing::warn!("Addon {} not found in catalog, skipping", request.addon_id);
            aggregate.warnings.push(PreviewWarning::AddonNotInCatalog {
                addon_id: request.addon_id.clone(),
            });
            continue;
        };

        let matched = addon.prices.iter().find_map(|price| match price {
            AddonPrice::FlatFee {
                billing_period: price_period,
                currency: price_currency,
                amount,
            } if *price_period == billing_period
                && price_currency.eq_ignore_ascii_case(currency) =>
            {
                Some(*amount)
            }
            AddonPrice::FlatFee { .. } | AddonPrice::UsageMetered { .. } => None,
        });

        match matched {
            Some(amount) => {
                aggregate.total += amount;
                aggregate.line_items.push(AddonLineItem {
                    name: addon.name.clone(),
                    amount,
                });
            }
            None => {
                tracing::warn!(
                    "Addon {} has no {} {} flat-fee price, skipping",
                    addon.id,
                    billing_period,
                    currency
                );
                aggregate.warnings.push(PreviewWarning::NoMatchingAddonPrice {
                    addon_id: addon.id.clone(),
                });
            }
        }
    }

    aggregate
}
