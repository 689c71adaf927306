pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::CatalogConfig;

pub use adapters::{currency::SarFormatter, gateway::StubGateway};
pub use crate::core::{
    catalog::Catalog, checks::run_checks, draft::BookingDraft, engine::BookingEngine,
};
pub use domain::model::{
    CheckResult, Confirmation, MissingField, PaymentMethod, PriceTier, ServiceCategory,
};
pub use domain::ports::{CurrencyFormatter, SubmissionGateway};
pub use utils::error::{BookingError, Result};
