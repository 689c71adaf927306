use crate::core::catalog::Catalog;
use crate::domain::model::{MissingField, PaymentMethod};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::is_blank;
use chrono::NaiveDate;

/// In-progress booking request. All mutation goes through named operations;
/// one draft exists per booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    category_id: String,
    tier_label: String,
    date: Option<NaiveDate>,
    time: String,
    address: String,
    phone: String,
    notes: String,
    payment_method: PaymentMethod,
}

impl BookingDraft {
    /// Fresh draft defaulted to the first category, its first tier and the
    /// first payment method.
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let first_category = catalog
            .categories()
            .first()
            .ok_or_else(|| BookingError::ConfigError {
                message: "Catalog has no categories".to_string(),
            })?;
        let first_tier = catalog.first_tier(&first_category.id).ok_or_else(|| {
            BookingError::ResolutionIntegrityViolation {
                category: first_category.id.clone(),
            }
        })?;

        Ok(Self {
            category_id: first_category.id.clone(),
            tier_label: first_tier.label.clone(),
            date: None,
            time: String::new(),
            address: String::new(),
            phone: String::new(),
            notes: String::new(),
            payment_method: PaymentMethod::default(),
        })
    }

    /// Switches the draft to another category and resets the tier selection
    /// to that category's first tier, so no stale cross-category tier label
    /// survives the switch. Unknown ids are rejected and prior state kept.
    pub fn select_category(&mut self, catalog: &Catalog, category_id: &str) -> Result<()> {
        if catalog.category(category_id).is_none() {
            return Err(BookingError::InvalidCategory {
                id: category_id.to_string(),
            });
        }
        let first_tier = catalog.first_tier(category_id).ok_or_else(|| {
            BookingError::ResolutionIntegrityViolation {
                category: category_id.to_string(),
            }
        })?;
        self.tier_label = first_tier.label.clone();
        self.category_id = category_id.to_string();
        Ok(())
    }

    /// Stores the tier label verbatim. Not validated here: price resolution
    /// applies the first-tier fallback when the label is absent.
    pub fn select_tier(&mut self, label: impl Into<String>) {
        self.tier_label = label.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn tier_label(&self) -> &str {
        &self.tier_label
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Authoritative price of the current selection, via the resolver's
    /// fallback policy.
    pub fn current_price(&self, catalog: &Catalog) -> Result<u64> {
        Ok(catalog.resolve_tier(&self.category_id, &self.tier_label)?.price)
    }

    /// Reports every missing one of {date, time, address, phone}. Notes and
    /// payment method are never required. Pure: does not mutate the draft.
    pub fn validate_for_submission(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(MissingField::Date);
        }
        if is_blank(&self.time) {
            missing.push(MissingField::Time);
        }
        if is_blank(&self.address) {
            missing.push(MissingField::Address);
        }
        if is_blank(&self.phone) {
            missing.push(MissingField::Phone);
        }
        missing
    }

    /// Back to defaults, as after a successful or abandoned submission.
    pub fn reset(&mut self, catalog: &Catalog) -> Result<()> {
        *self = Self::new(catalog)?;
        Ok(())
    }
}
