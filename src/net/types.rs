//! Wire DTOs for the registration endpoint.
//!
//! DESIGN
//! ======
//! The endpoint is a spreadsheet-backed script service with loose typing:
//! phone numbers and row references come back as JSON strings or numbers
//! depending on how the sheet stored them. Deserializers here tolerate both
//! so one odd row never breaks the whole panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Compressed receipt image attached to a registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Original filename as picked by the user.
    pub name: String,
    /// MIME type of the re-encoded bytes; always `image/jpeg`.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Base64-encoded JPEG bytes, without a data-URI prefix.
    pub data: String,
}

/// One registration as POSTed to the endpoint. Built fresh per submission and
/// dropped once the request completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    /// Registrant full name.
    pub name: String,
    /// Contact phone number, 9-10 digits.
    pub phone: String,
    /// Selected product/branch option, when the campaign configures any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Normalized receipt image.
    pub bill: FilePayload,
}

/// `?action=count` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CountResponse {
    /// Whether the endpoint could produce a count.
    pub success: bool,
    /// Total registrations recorded so far.
    #[serde(default)]
    pub count: Option<u32>,
}

/// `?action=list_participants` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListResponse {
    /// Whether the endpoint could produce the list.
    pub success: bool,
    /// Every registrant, unordered; the panel sorts before display.
    #[serde(default)]
    pub participants: Option<Vec<Participant>>,
}

/// Public list row. The phone number is masked before rendering and the
/// unmasked form never leaves the in-memory list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Participant {
    /// Registrant display name.
    pub name: String,
    /// Contact phone number; string or number on the wire.
    #[serde(default, deserialize_with = "deserialize_string_from_value")]
    pub phone: String,
    /// Product/branch option recorded at registration, if any.
    #[serde(default)]
    pub product: Option<String>,
}

/// `?action=random` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DrawResponse {
    /// Whether a winner could be selected.
    pub success: bool,
    /// The selected winner when `success` is true.
    #[serde(default)]
    pub winner: Option<Winner>,
    /// Server-provided failure explanation, surfaced verbatim when present.
    #[serde(default)]
    pub message: Option<String>,
}

/// Drawn winner, owned entirely by the endpoint; the client only displays it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Winner {
    /// Sheet row of the winning registration; opaque to the client.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub row: Option<i64>,
    /// Submission timestamp as formatted by the endpoint.
    #[serde(default)]
    pub timestamp: String,
    /// Winner display name.
    pub name: String,
    /// Winner phone number, shown unmasked to the operator.
    #[serde(default, deserialize_with = "deserialize_string_from_value")]
    pub phone: String,
    /// Product/branch option recorded at registration, if any.
    #[serde(default)]
    pub product: Option<String>,
    /// Link to the stored receipt image, if the endpoint kept one.
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom("expected integer-compatible string")),
        other => Err(D::Error::custom(format!(
            "expected number or null, got {other}"
        ))),
    }
}
