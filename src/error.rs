//! Error taxonomy for the registration page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the component that started the operation and
//! collapsed into a short user-facing message; nothing propagates past the
//! page. `Display` implementations are the English diagnostic form used for
//! console logging; the Thai strings shown to users come from the
//! `user_message` accessors and the message constants next to the state
//! machines that use them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Thai message shown when the endpoint URL was never configured.
pub const UNCONFIGURED_MESSAGE: &str = "ยังไม่ได้ตั้งค่า URL ของระบบลงทะเบียน";

/// Top-level error for submission flow and remote operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No endpoint URL was supplied at build time; remote operations are disabled.
    #[error("remote endpoint is not configured")]
    Unconfigured,
    /// A required form field is missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The receipt image could not be decoded or re-encoded.
    #[error(transparent)]
    Image(#[from] ImageError),
    /// Transport-level failure on any request (connection, fetch rejection, unparsable body).
    #[error("network error: {0}")]
    Network(String),
}

/// A required field failed local validation. The submission never reaches the
/// network when one of these is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field is empty after trimming.
    #[error("name is empty")]
    EmptyName,
    /// The phone field is not 9-10 ASCII digits.
    #[error("phone is not 9-10 digits")]
    InvalidPhone,
    /// No receipt image has been attached.
    #[error("no receipt image attached")]
    MissingReceipt,
    /// The campaign configures product options but none is selected.
    #[error("no product option selected")]
    MissingProduct,
}

impl ValidationError {
    /// Thai message displayed in the error dialog for this field.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::EmptyName => "กรุณากรอกชื่อ–นามสกุลครับ",
            Self::InvalidPhone => "กรุณากรอกเบอร์โทรเป็นตัวเลข 9–10 หลักครับ",
            Self::MissingReceipt => "กรุณาอัปโหลดรูปถ่ายบิลก่อนส่งฟอร์มครับ",
            Self::MissingProduct => "กรุณาเลือกสาขาที่ซื้อครับ (น้ำโสม/กลางใหญ่)",
        }
    }
}

/// Receipt image normalization failure. Terminal for the attempt; the page
/// asks the user to pick a file and resubmit rather than retrying.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// The browser could not decode the selected file as an image.
    #[error("image decode failed")]
    Decode,
    /// A canvas drawing surface or the JPEG encoder was unavailable.
    #[error("drawing surface unavailable: {0}")]
    RenderSurface(String),
}
