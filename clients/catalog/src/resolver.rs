//! Reference-data resolution
//!
//! Assembles the `ResolvedCatalogs` a preview needs from the provider
//! traits. Fetches are skipped entirely when the preview inputs cannot use
//! them: no tax override means no tax-rate round-trip, no addon request
//! means no addon round-trip. Recomputation after an input change is a
//! plain re-call with the current inputs.

use billing_contracts::{AddonRequest, ResolvedCatalogs, TaxRateOverride};

use crate::{AddonCatalogProvider, CatalogError, TaxRateProvider};

/// The unique tax-rate codes referenced by a set of overrides, sorted for
/// stable cache keying.
pub fn unique_tax_codes(overrides: &[TaxRateOverride]) -> Vec<String> {
    let mut codes: Vec<String> = overrides
        .iter()
        .map(|tax_override| tax_override.tax_rate_code.clone())
        .collect();
    codes.sort();
    codes.dedup();
    codes
}

/// Resolve the catalogs for one preview invocation.
pub async fn resolve_reference_data(
    addon_catalog: &dyn AddonCatalogProvider,
    tax_rates: &dyn TaxRateProvider,
    addon_requests: &[AddonRequest],
    tax_rate_overrides: &[TaxRateOverride],
) -> Result<ResolvedCatalogs, CatalogError> {
    let addons = if addon_requests.is_empty() {
        Vec::new()
    } else {
        addon_catalog.list_addons().await?
    };

    let codes = unique_tax_codes(tax_rate_overrides);
    let tax_rates = if codes.is_empty() {
        Vec::new()
    } else {
        tax_rates.list_tax_rates(&codes).await?
    };

    Ok(ResolvedCatalogs { addons, tax_rates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use billing_contracts::{AddonCatalogEntry, EntityStatus, TaxRateResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProviders {
        addon_calls: AtomicUsize,
        tax_calls: AtomicUsize,
    }

    #[async_trait]
    impl AddonCatalogProvider for &CountingProviders {
        async fn list_addons(&self) -> Result<Vec<AddonCatalogEntry>, CatalogError> {
            self.addon_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    #[async_trait]
    impl TaxRateProvider for &CountingProviders {
        async fn list_tax_rates(
            &self,
            codes: &[String],
        ) -> Result<Vec<TaxRateResponse>, CatalogError> {
            self.tax_calls.fetch_add(1, Ordering::SeqCst);
            Ok(codes
                .iter()
                .map(|code| TaxRateResponse {
                    code: code.clone(),
                    name: None,
                    percentage_value: None,
                    fixed_value: None,
                    status: EntityStatus::Published,
                })
                .collect())
        }
    }

    fn tax_override(code: &str) -> TaxRateOverride {
        TaxRateOverride {
            currency: "USD".to_string(),
            tax_rate_code: code.to_string(),
            auto_apply: true,
        }
    }

    #[test]
    fn test_unique_tax_codes_sorted_and_deduped() {
        let overrides = vec![tax_override("VAT"), tax_override("CITY"), tax_override("VAT")];
        assert_eq!(unique_tax_codes(&overrides), vec!["CITY", "VAT"]);
    }

    #[tokio::test]
    async fn test_skips_tax_fetch_without_referenced_codes() {
        let providers = CountingProviders::default();

        let resolved = resolve_reference_data(
            &&providers,
            &&providers,
            &[AddonRequest {
                addon_id: "addon_1".to_string(),
            }],
            &[],
        )
        .await
        .unwrap();

        assert!(resolved.tax_rates.is_empty());
        assert_eq!(providers.tax_calls.load(Ordering::SeqCst), 0);
        assert_eq!(providers.addon_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_skips_addon_fetch_without_requests() {
        let providers = CountingProviders::default();

        let resolved =
            resolve_reference_data(&&providers, &&providers, &[], &[tax_override("VAT")])
                .await
                .unwrap();

        assert_eq!(providers.addon_calls.load(Ordering::SeqCst), 0);
        assert_eq!(providers.tax_calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolved.tax_rates.len(), 1);
    }
}
