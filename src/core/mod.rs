pub mod catalog;
pub mod checks;
pub mod draft;
pub mod engine;

pub use crate::domain::model::{
    CheckResult, Confirmation, MissingField, PaymentMethod, PriceTier, ServiceCategory,
};
pub use crate::domain::ports::{CurrencyFormatter, SubmissionGateway};
pub use crate::utils::error::Result;
