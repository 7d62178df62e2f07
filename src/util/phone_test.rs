use super::*;

// =============================================================
// is_valid_phone
// =============================================================

#[test]
fn accepts_nine_and_ten_digit_numbers() {
    assert!(is_valid_phone("081234567"));
    assert!(is_valid_phone("0812345678"));
}

#[test]
fn rejects_wrong_lengths() {
    assert!(!is_valid_phone(""));
    assert!(!is_valid_phone("08123456"));
    assert!(!is_valid_phone("08123456789"));
}

#[test]
fn rejects_non_digit_characters() {
    assert!(!is_valid_phone("081-234-567"));
    assert!(!is_valid_phone("081 234 5678"));
    assert!(!is_valid_phone("08123456a7"));
}

#[test]
fn rejects_thai_digits() {
    // Thai numerals are digits in the Unicode sense but not ASCII.
    assert!(!is_valid_phone("๐๘๑๒๓๔๕๖๗๘"));
}

// =============================================================
// mask_phone
// =============================================================

#[test]
fn masks_ten_digit_number() {
    assert_eq!(mask_phone("0812345678"), "081xxx678");
}

#[test]
fn masks_six_character_boundary() {
    assert_eq!(mask_phone("123456"), "123xxx456");
}

#[test]
fn leaves_short_numbers_unmasked() {
    assert_eq!(mask_phone("12345"), "12345");
    assert_eq!(mask_phone(""), "");
}

#[test]
fn masks_by_characters_not_bytes() {
    assert_eq!(mask_phone("๐๘๑๒๓๔๕๖๗๘"), "๐๘๑xxx๖๗๘");
}
