#[cfg(feature = "cli")]
pub mod cli;

use crate::core::catalog::Catalog;
use crate::domain::model::{PriceTier, ServiceCategory};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML catalog definition so deployments can override the built-in tables:
///
/// ```toml
/// [[category]]
/// id = "cleaning"
/// name = "خدمات تنظيف"
/// description = "تنظيف منازل ومفروشات"
///
/// [[category.tier]]
/// label = "غرفة واحدة"
/// price = 99
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "category")]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "tier", default)]
    pub tiers: Vec<TierConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    pub label: String,
    pub price: u64,
}

impl CatalogConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Builds the validated catalog; structural problems (no categories,
    /// duplicate ids, tierless categories, duplicate labels) are rejected
    /// here rather than discovered at resolution time.
    pub fn into_catalog(self) -> Result<Catalog> {
        let entries = self
            .categories
            .into_iter()
            .map(|category| {
                let tiers = category
                    .tiers
                    .into_iter()
                    .map(|tier| PriceTier {
                        label: tier.label,
                        price: tier.price,
                    })
                    .collect();
                (
                    ServiceCategory {
                        id: category.id,
                        name: category.name,
                        description: category.description,
                    },
                    tiers,
                )
            })
            .collect();
        Catalog::new(entries)
    }
}
