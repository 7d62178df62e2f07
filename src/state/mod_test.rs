use super::*;

#[test]
fn refresh_signal_starts_at_zero() {
    assert_eq!(RefreshSignal::new().count(), 0);
}

#[test]
fn bump_increments_exactly_once() {
    let refresh = RefreshSignal::new();
    refresh.bump();
    assert_eq!(refresh.count(), 1);
    refresh.bump();
    assert_eq!(refresh.count(), 2);
}
