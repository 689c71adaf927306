use crate::core::catalog::Catalog;
use crate::core::draft::BookingDraft;
use crate::domain::model::{Confirmation, PaymentMethod};
use crate::domain::ports::SubmissionGateway;
use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;

/// Drives one booking session: owns the catalog, the active draft and the
/// gateway. Refuses to submit an incomplete draft, allows a single in-flight
/// submission at a time, preserves the draft on gateway failure and resets it
/// after a confirmed booking.
pub struct BookingEngine<G: SubmissionGateway> {
    catalog: Catalog,
    draft: BookingDraft,
    gateway: G,
    in_flight: bool,
}

impl<G: SubmissionGateway> BookingEngine<G> {
    pub fn new(catalog: Catalog, gateway: G) -> Result<Self> {
        let draft = BookingDraft::new(&catalog)?;
        Ok(Self {
            catalog,
            draft,
            gateway,
            in_flight: false,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn select_category(&mut self, category_id: &str) -> Result<()> {
        self.draft.select_category(&self.catalog, category_id)
    }

    pub fn select_tier(&mut self, label: impl Into<String>) {
        self.draft.select_tier(label);
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.set_date(date);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.set_time(time);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.draft.set_address(address);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.set_phone(phone);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.set_notes(notes);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.draft.set_payment_method(method);
    }

    pub fn current_price(&self) -> Result<u64> {
        self.draft.current_price(&self.catalog)
    }

    /// Validates the draft, then forwards it unchanged to the gateway and
    /// surfaces whatever result comes back unaltered. The gateway is never
    /// invoked for an incomplete draft, and a second submission is rejected
    /// while one is pending.
    pub async fn submit(&mut self) -> Result<Confirmation> {
        if self.in_flight {
            return Err(BookingError::SubmissionInFlight);
        }
        let missing = self.draft.validate_for_submission();
        if !missing.is_empty() {
            tracing::debug!(
                missing = ?missing,
                "Refusing submission of incomplete draft"
            );
            return Err(BookingError::IncompleteDraft { missing });
        }

        tracing::info!(
            category = %self.draft.category_id(),
            tier = %self.draft.tier_label(),
            payment = %self.draft.payment_method().id(),
            "Dispatching booking submission"
        );
        self.in_flight = true;
        let result = self.gateway.submit(&self.draft).await;
        self.in_flight = false;

        match result {
            Ok(confirmation) => {
                tracing::info!(booking_id = %confirmation.booking_id, "Booking confirmed");
                self.draft.reset(&self.catalog)?;
                Ok(confirmation)
            }
            Err(e) => {
                // Draft kept as-is so the user can retry.
                tracing::warn!("Submission failed: {}", e);
                Err(e)
            }
        }
    }
}
