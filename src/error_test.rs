use super::*;

#[test]
fn validation_errors_map_to_thai_messages() {
    assert_eq!(
        ValidationError::MissingReceipt.user_message(),
        "กรุณาอัปโหลดรูปถ่ายบิลก่อนส่งฟอร์มครับ"
    );
    assert_eq!(
        ValidationError::MissingProduct.user_message(),
        "กรุณาเลือกสาขาที่ซื้อครับ (น้ำโสม/กลางใหญ่)"
    );
}

#[test]
fn validation_error_messages_are_distinct() {
    let variants = [
        ValidationError::EmptyName,
        ValidationError::InvalidPhone,
        ValidationError::MissingReceipt,
        ValidationError::MissingProduct,
    ];
    for (i, a) in variants.iter().enumerate() {
        for b in variants.iter().skip(i + 1) {
            assert_ne!(a.user_message(), b.user_message());
        }
    }
}

#[test]
fn validation_error_converts_into_top_level_error() {
    let err: Error = ValidationError::EmptyName.into();
    assert_eq!(err, Error::Validation(ValidationError::EmptyName));
    assert_eq!(err.to_string(), "name is empty");
}

#[test]
fn image_error_converts_into_top_level_error() {
    let err: Error = ImageError::Decode.into();
    assert_eq!(err.to_string(), "image decode failed");
    let err: Error = ImageError::RenderSurface("no 2d context".to_owned()).into();
    assert_eq!(err.to_string(), "drawing surface unavailable: no 2d context");
}

#[test]
fn network_error_formats_cause() {
    let err = Error::Network("fetch aborted".to_owned());
    assert_eq!(err.to_string(), "network error: fetch aborted");
}
