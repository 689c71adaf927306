use crate::domain::model::{PriceTier, ServiceCategory};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique};

/// Read-only registry of service categories and their priced tiers.
/// Initialized once at startup and never mutated afterwards. Category order
/// is registration order; tier order within a category is insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<ServiceCategory>,
    tiers: Vec<Vec<PriceTier>>,
}

impl Catalog {
    /// Builds a catalog from (category, tiers) pairs, rejecting empty
    /// catalogs, duplicate category ids, tierless categories and duplicate
    /// tier labels within a category.
    pub fn new(entries: Vec<(ServiceCategory, Vec<PriceTier>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(BookingError::ConfigError {
                message: "Catalog has no categories".to_string(),
            });
        }

        validate_unique(
            "category id",
            entries.iter().map(|(category, _)| category.id.as_str()),
        )?;

        for (category, tiers) in &entries {
            validate_non_empty_string("category id", &category.id)?;
            validate_non_empty_string("category name", &category.name)?;
            if tiers.is_empty() {
                return Err(BookingError::ConfigError {
                    message: format!("Category '{}' has no tiers", category.id),
                });
            }
            validate_unique(
                &format!("tier label in '{}'", category.id),
                tiers.iter().map(|tier| tier.label.as_str()),
            )?;
        }

        let (categories, tiers): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        Ok(Self { categories, tiers })
    }

    /// All categories in fixed registration order.
    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Tier sequence for a category. Unknown ids yield an empty slice,
    /// never an error.
    pub fn tiers_for(&self, category_id: &str) -> &[PriceTier] {
        self.categories
            .iter()
            .position(|c| c.id == category_id)
            .map(|index| self.tiers[index].as_slice())
            .unwrap_or(&[])
    }

    /// Default-selection policy: the first tier of a category. Shared by
    /// category selection and tier resolution so the fallback rule is
    /// defined once.
    pub fn first_tier(&self, category_id: &str) -> Option<&PriceTier> {
        self.tiers_for(category_id).first()
    }

    /// Resolves the authoritative tier for a (category, label) pair.
    /// An exact label match wins; an unknown label falls back to the first
    /// tier, which is what gets priced when a caller's selection has drifted
    /// out of sync with the catalog. A category without tiers is an
    /// integrity violation, not a normal runtime case.
    pub fn resolve_tier(&self, category_id: &str, requested_label: &str) -> Result<&PriceTier> {
        let tiers = self.tiers_for(category_id);
        if let Some(tier) = tiers.iter().find(|t| t.label == requested_label) {
            return Ok(tier);
        }
        tiers
            .first()
            .ok_or_else(|| BookingError::ResolutionIntegrityViolation {
                category: category_id.to_string(),
            })
    }

    /// The built-in catalog shipped with the marketplace: five categories,
    /// three tiers each. Deployments can replace it with a TOML file.
    pub fn builtin() -> Self {
        fn category(id: &str, name: &str, description: &str) -> ServiceCategory {
            ServiceCategory {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
            }
        }
        fn tier(label: &str, price: u64) -> PriceTier {
            PriceTier {
                label: label.to_string(),
                price,
            }
        }

        Self {
            categories: vec![
                category(
                    "maintenance",
                    "خدمات صيانة",
                    "فنيون مختصون لصيانة كهرباء/سباكة/نجارة وأعمال منزلية",
                ),
                category(
                    "cleaning",
                    "خدمات تنظيف",
                    "تنظيف منازل، مفروشات، تعقيم، وتنظيف بعد الصيانة",
                ),
                category(
                    "electrician",
                    "عامل كهربائي",
                    "تمديدات وفحص أعطال وتركيب وحدات إنارة وأجهزة",
                ),
                category(
                    "plumber",
                    "عامل سباكة",
                    "كشف تسريبات، تركيب خلاطات وسخانات، صيانة خطوط",
                ),
                category("carwash", "تنظيف سيارات", "غسيل وتلميع متنقل أمام باب منزلك"),
            ],
            tiers: vec![
                vec![
                    tier("زيارة فحص سريعة", 69),
                    tier("ساعة عمل", 149),
                    tier("باقة يوم عمل", 699),
                ],
                vec![
                    tier("غرفة واحدة", 99),
                    tier("شقة صغيرة", 199),
                    tier("فيلا كاملة", 499),
                ],
                vec![
                    tier("كشف عطل", 99),
                    tier("تركيب وحدة إنارة", 129),
                    tier("باقة تمديدات", 399),
                ],
                vec![
                    tier("كشف تسريب", 99),
                    tier("تركيب سخان/خلاط", 149),
                    tier("تنظيف مجرى", 179),
                ],
                vec![
                    tier("غسيل خارجي", 59),
                    tier("خارجي + داخلي", 89),
                    tier("تلميع سريع", 149),
                ],
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
