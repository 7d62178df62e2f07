//! Registration form state machine.
//!
//! DESIGN
//! ======
//! Submission runs Idle → validate → Submitting → Success | Failed → Idle.
//! Validation happens synchronously before anything leaves the page; a
//! validation failure never issues a network request. Success clears every
//! field; failure keeps them so the user can correct and resubmit. No
//! automatic retries.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::ValidationError;
use crate::util::phone;

/// Thai message for a submission that failed after validation passed.
/// The underlying image or network error is logged, not shown.
pub const SUBMIT_FAILED_MESSAGE: &str = "ส่งข้อมูลไม่สำเร็จ ลองใหม่อีกครั้งนะครับ";

/// Submission lifecycle phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// Normalizing the receipt image and sending the POST.
    Submitting,
    /// Transport completed without error; fields were cleared.
    Success,
    /// Validation or submission failed; carries the user-facing message.
    Failed(String),
}

/// Field values and lifecycle for the registration card.
///
/// The selected `web_sys::File` itself lives in a browser-local signal on the
/// page; this struct only mirrors whether one is attached, which keeps the
/// machine testable outside the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    /// Selected product/branch option, when the campaign configures any.
    pub product: Option<String>,
    /// Whether a receipt image is currently attached.
    pub has_receipt: bool,
    pub phase: FormPhase,
}

impl RegistrationForm {
    /// Check required fields, in the order the page reports them.
    ///
    /// # Errors
    ///
    /// The first failing field: empty name, malformed phone, missing
    /// receipt, then missing product (only when options are configured).
    pub fn validate(&self, product_required: bool) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !phone::is_valid_phone(self.phone.trim()) {
            return Err(ValidationError::InvalidPhone);
        }
        if !self.has_receipt {
            return Err(ValidationError::MissingReceipt);
        }
        if product_required && self.product.is_none() {
            return Err(ValidationError::MissingProduct);
        }
        Ok(())
    }

    /// True while a submit attempt is in flight.
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Enter the Submitting phase. Call only after `validate` passed.
    pub fn begin_submit(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    /// Record success: clear every field and show the confirmation.
    pub fn complete(&mut self) {
        *self = Self {
            phase: FormPhase::Success,
            ..Self::default()
        };
    }

    /// Record failure with a user-facing message. Field values are kept.
    pub fn fail(&mut self, message: String) {
        self.phase = FormPhase::Failed(message);
    }

    /// Dismiss the success or error dialog and return to Idle.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, FormPhase::Success | FormPhase::Failed(_)) {
            self.phase = FormPhase::Idle;
        }
    }
}
