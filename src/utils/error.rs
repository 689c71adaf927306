use crate::domain::model::MissingField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Unknown service category: {id}")]
    InvalidCategory { id: String },

    #[error("Booking draft is incomplete, missing: {}", join_missing(.missing))]
    IncompleteDraft { missing: Vec<MissingField> },

    #[error("Category '{category}' resolves to no price tier")]
    ResolutionIntegrityViolation { category: String },

    #[error("Submission gateway failure: {reason}")]
    GatewayFailure { reason: String },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Catalog configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog file parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn join_missing(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(MissingField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, BookingError>;
