use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A priced package within a category. Prices are whole currency units;
/// tier order within a category is meaningful (the first tier is the default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub label: String,
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    ApplePay,
    Mada,
    Mastercard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::ApplePay,
        PaymentMethod::Mada,
        PaymentMethod::Mastercard,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::ApplePay => "applepay",
            PaymentMethod::Mada => "mada",
            PaymentMethod::Mastercard => "mastercard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::Mada => "مدى",
            PaymentMethod::Mastercard => "Mastercard",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Required draft field reported by `validate_for_submission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Date,
    Time,
    Address,
    Phone,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::Date => "date",
            MissingField::Time => "time",
            MissingField::Address => "address",
            MissingField::Phone => "phone",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful submission outcome carrying the opaque booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub booking_id: String,
}

/// One integrity check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}
