use crate::core::draft::BookingDraft;
use crate::domain::model::Confirmation;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary to the external payment/booking backend. May be slow and may
/// fail independently of input validity; callers must validate the draft
/// before invoking it and must code against this trait, never against the
/// stub's timing behavior.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, draft: &BookingDraft) -> Result<Confirmation>;
}

/// External currency rendering, configured with a locale and currency code.
/// Must return a non-empty string for any amount.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: u64) -> String;
}
