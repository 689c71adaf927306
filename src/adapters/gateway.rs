use crate::core::draft::BookingDraft;
use crate::domain::model::Confirmation;
use crate::domain::ports::SubmissionGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Trial-mode gateway: waits a fixed delay, then always confirms with a
/// freshly generated identifier. A real payment provider replaces this
/// behind the same port.
#[derive(Debug, Clone)]
pub struct StubGateway {
    delay: Duration,
}

impl StubGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(900))
    }
}

#[async_trait]
impl SubmissionGateway for StubGateway {
    async fn submit(&self, draft: &BookingDraft) -> Result<Confirmation> {
        tracing::debug!(
            category = %draft.category_id(),
            tier = %draft.tier_label(),
            "Stub gateway simulating payment"
        );
        tokio::time::sleep(self.delay).await;

        let raw = Uuid::new_v4().simple().to_string();
        let booking_id = format!("BK-{}", raw[..8].to_uppercase());
        Ok(Confirmation { booking_id })
    }
}
