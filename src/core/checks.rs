use crate::core::catalog::Catalog;
use crate::domain::model::{CheckResult, PaymentMethod};
use crate::domain::ports::CurrencyFormatter;

const SAMPLE_AMOUNT: u64 = 123;

/// Fixed battery of catalog integrity checks, run at startup or in tests to
/// catch data-entry errors in the static tables before they reach users.
/// Checks are independent, order-stable and purely diagnostic.
pub fn run_checks(catalog: &Catalog, formatter: &dyn CurrencyFormatter) -> Vec<CheckResult> {
    let mut results = Vec::new();

    // 1) every category has tiers
    for category in catalog.categories() {
        let tiers = catalog.tiers_for(&category.id);
        results.push(CheckResult {
            name: format!("tiers for {}", category.id),
            passed: !tiers.is_empty(),
            detail: serde_json::to_string(tiers).unwrap_or_default(),
        });
    }

    // 2) currency formatting produces text
    let sample = formatter.format(SAMPLE_AMOUNT);
    results.push(CheckResult {
        name: "currency format returns text".to_string(),
        passed: !sample.trim().is_empty(),
        detail: sample,
    });

    // 3) payment methods present
    results.push(CheckResult {
        name: "payment methods count".to_string(),
        passed: PaymentMethod::ALL.len() >= 3,
        detail: PaymentMethod::ALL
            .iter()
            .map(|m| m.id())
            .collect::<Vec<_>>()
            .join(","),
    });

    // 4) default selection resolves
    let default_tier = catalog
        .categories()
        .first()
        .and_then(|category| catalog.first_tier(&category.id));
    results.push(CheckResult {
        name: "default tier exists".to_string(),
        passed: default_tier.map(|t| !t.label.is_empty()).unwrap_or(false),
        detail: default_tier
            .map(|t| t.label.clone())
            .unwrap_or_else(|| "<none>".to_string()),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFormatter(&'static str);

    impl CurrencyFormatter for FixedFormatter {
        fn format(&self, _amount: u64) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_builtin_catalog_passes_all_checks() {
        let catalog = Catalog::builtin();
        let results = run_checks(&catalog, &FixedFormatter("123 ر.س."));
        // five per-category checks plus three fixed ones
        assert_eq!(results.len(), 8);
        for check in &results {
            assert!(check.passed, "check failed: {} — {}", check.name, check.detail);
        }
    }

    #[test]
    fn test_check_order_is_stable() {
        let catalog = Catalog::builtin();
        let first = run_checks(&catalog, &FixedFormatter("123 ر.س."));
        let second = run_checks(&catalog, &FixedFormatter("123 ر.س."));
        let names: Vec<_> = first.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, second.iter().map(|c| c.name.clone()).collect::<Vec<_>>());
        assert_eq!(names[0], "tiers for maintenance");
        assert_eq!(names[5], "currency format returns text");
    }

    #[test]
    fn test_blank_currency_output_fails_check() {
        let catalog = Catalog::builtin();
        let results = run_checks(&catalog, &FixedFormatter("   "));
        let currency_check = results
            .iter()
            .find(|c| c.name == "currency format returns text")
            .unwrap();
        assert!(!currency_check.passed);
    }
}
