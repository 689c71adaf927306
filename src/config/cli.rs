use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "doorstep-booking")]
#[command(about = "Catalog preflight checks and trial bookings for the doorstep marketplace")]
pub struct CliConfig {
    /// TOML catalog file; the built-in catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, default_value = "ar-SA")]
    pub locale: String,

    #[arg(long, default_value = "SAR")]
    pub currency: String,

    /// Stub gateway processing delay in milliseconds
    #[arg(long, default_value = "900")]
    pub delay_ms: u64,

    /// Run a trial booking against the stub gateway after the checks
    #[arg(long)]
    pub demo: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("locale", &self.locale)?;
        validate_non_empty_string("currency", &self.currency)?;
        Ok(())
    }
}
