//! Phone number validation and display masking.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Accept exactly 9 or 10 ASCII digits, nothing else.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    (9..=10).contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Mask the middle of a phone number for the public list view.
///
/// Numbers with 6 or more characters keep the first 3 and last 3 and replace
/// the middle with `xxx`; shorter values are shown as-is.
#[must_use]
pub fn mask_phone(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 6 {
        return raw.to_owned();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}xxx{tail}")
}
