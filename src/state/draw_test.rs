use super::*;

fn winner(name: &str) -> Winner {
    Winner {
        row: Some(3),
        timestamp: "2026-08-01T09:30:00.000Z".to_owned(),
        name: name.to_owned(),
        phone: "0812345678".to_owned(),
        product: Some("น้ำโสม".to_owned()),
        image_url: None,
    }
}

fn participant(name: &str) -> Participant {
    Participant {
        name: name.to_owned(),
        phone: "0812345678".to_owned(),
        product: None,
    }
}

// =============================================================
// DrawScope
// =============================================================

#[test]
fn scope_product_filter_and_label() {
    let scoped = DrawScope::Product("น้ำโสม".to_owned());
    assert_eq!(scoped.product(), Some("น้ำโสม"));
    assert_eq!(scoped.label(), "น้ำโสม");
    assert_eq!(DrawScope::All.product(), None);
    assert_eq!(DrawScope::All.label(), "ทั้งหมด");
}

// =============================================================
// draw_disabled
// =============================================================

#[test]
fn draw_disabled_without_known_count() {
    let state = DrawPanelState::default();
    assert!(state.draw_disabled(true));
}

#[test]
fn draw_disabled_with_zero_count() {
    let state = DrawPanelState {
        total_registered: Some(0),
        ..DrawPanelState::default()
    };
    assert!(state.draw_disabled(true));
}

#[test]
fn draw_enabled_with_positive_count_and_configured_endpoint() {
    let state = DrawPanelState {
        total_registered: Some(5),
        ..DrawPanelState::default()
    };
    assert!(!state.draw_disabled(true));
}

#[test]
fn draw_disabled_when_unconfigured() {
    let state = DrawPanelState {
        total_registered: Some(5),
        ..DrawPanelState::default()
    };
    assert!(state.draw_disabled(false));
}

#[test]
fn draw_disabled_while_a_draw_is_in_flight() {
    let mut state = DrawPanelState {
        total_registered: Some(5),
        ..DrawPanelState::default()
    };
    state.begin_draw(DrawScope::All);
    assert!(state.draw_disabled(true));
}

// =============================================================
// Draw lifecycle
// =============================================================

#[test]
fn begin_draw_clears_previous_winner_and_error() {
    let mut state = DrawPanelState {
        winner: Some(winner("ก่อนหน้า")),
        error: Some("เก่า".to_owned()),
        ..DrawPanelState::default()
    };
    state.begin_draw(DrawScope::All);
    assert_eq!(state.winner, None);
    assert_eq!(state.error, None);
    assert_eq!(state.drawing, Some(DrawScope::All));
}

#[test]
fn finish_draw_with_winner_replaces_display() {
    let mut state = DrawPanelState::default();
    state.begin_draw(DrawScope::All);
    state.finish_draw(Ok(winner("สมชาย")));
    assert_eq!(state.winner.as_ref().map(|w| w.name.as_str()), Some("สมชาย"));
    assert_eq!(state.drawing, None);
    assert_eq!(state.error, None);
}

#[test]
fn failed_draw_leaves_no_winner_on_display() {
    // The previous winner was already cleared optimistically by begin_draw.
    let mut state = DrawPanelState {
        winner: Some(winner("ก่อนหน้า")),
        ..DrawPanelState::default()
    };
    state.begin_draw(DrawScope::Product("น้ำโสม".to_owned()));
    state.finish_draw(Err("ไม่มีข้อมูล".to_owned()));
    assert_eq!(state.winner, None);
    assert_eq!(state.error.as_deref(), Some("ไม่มีข้อมูล"));
    assert_eq!(state.drawing, None);
}

// =============================================================
// apply_count
// =============================================================

#[test]
fn count_success_stores_value() {
    let mut state = DrawPanelState::default();
    state.begin_refresh();
    state.apply_count(Ok(CountResponse {
        success: true,
        count: Some(12),
    }));
    assert_eq!(state.total_registered, Some(12));
    assert!(!state.loading_count);
}

#[test]
fn count_success_without_value_defaults_to_zero() {
    let mut state = DrawPanelState::default();
    state.apply_count(Ok(CountResponse {
        success: true,
        count: None,
    }));
    assert_eq!(state.total_registered, Some(0));
}

#[test]
fn count_refusal_shows_zero() {
    let mut state = DrawPanelState::default();
    state.apply_count(Ok(CountResponse {
        success: false,
        count: None,
    }));
    assert_eq!(state.total_registered, Some(0));
}

#[test]
fn count_transport_failure_shows_unknown() {
    let mut state = DrawPanelState {
        total_registered: Some(9),
        ..DrawPanelState::default()
    };
    state.apply_count(Err(Error::Network("offline".to_owned())));
    assert_eq!(state.total_registered, None);
}

// =============================================================
// apply_participants
// =============================================================

#[test]
fn participants_are_sorted_by_name() {
    let mut state = DrawPanelState::default();
    state.begin_refresh();
    state.apply_participants(Ok(ListResponse {
        success: true,
        participants: Some(vec![
            participant("สมชาย"),
            participant("กานดา"),
            participant("ขวัญใจ"),
        ]),
    }));
    let names: Vec<&str> = state.participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["กานดา", "ขวัญใจ", "สมชาย"]);
    assert!(!state.loading_list);
}

#[test]
fn participant_refusal_keeps_previous_list() {
    let mut state = DrawPanelState {
        participants: vec![participant("กานดา")],
        ..DrawPanelState::default()
    };
    state.apply_participants(Ok(ListResponse {
        success: false,
        participants: None,
    }));
    assert_eq!(state.participants.len(), 1);
}

#[test]
fn participant_transport_failure_empties_list() {
    let mut state = DrawPanelState {
        participants: vec![participant("กานดา")],
        ..DrawPanelState::default()
    };
    state.apply_participants(Err(Error::Network("offline".to_owned())));
    assert!(state.participants.is_empty());
}

#[test]
fn count_and_list_results_are_independent() {
    let mut state = DrawPanelState::default();
    state.begin_refresh();
    state.apply_count(Err(Error::Network("offline".to_owned())));
    state.apply_participants(Ok(ListResponse {
        success: true,
        participants: Some(vec![participant("กานดา")]),
    }));
    assert_eq!(state.total_registered, None);
    assert_eq!(state.participants.len(), 1);
}

// =============================================================
// draw_outcome
// =============================================================

#[test]
fn successful_draw_yields_winner() {
    let result = Ok(DrawResponse {
        success: true,
        winner: Some(winner("สมชาย")),
        message: None,
    });
    assert_eq!(draw_outcome(result, &DrawScope::All).unwrap().name, "สมชาย");
}

#[test]
fn refusal_surfaces_server_message_verbatim() {
    let result = Ok(DrawResponse {
        success: false,
        winner: None,
        message: Some("ยังไม่มีผู้ลงทะเบียนสาขานี้".to_owned()),
    });
    let scope = DrawScope::Product("น้ำโสม".to_owned());
    assert_eq!(
        draw_outcome(result, &scope),
        Err("ยังไม่มีผู้ลงทะเบียนสาขานี้".to_owned())
    );
}

#[test]
fn refusal_without_message_names_the_scope() {
    let result = Ok(DrawResponse {
        success: false,
        winner: None,
        message: None,
    });
    let scope = DrawScope::Product("น้ำโสม".to_owned());
    assert_eq!(
        draw_outcome(result, &scope),
        Err("ยังไม่มีข้อมูลสำหรับสุ่มรางวัลสำหรับสินค้า: น้ำโสม".to_owned())
    );
    let result = Ok(DrawResponse {
        success: false,
        winner: None,
        message: None,
    });
    assert_eq!(
        draw_outcome(result, &DrawScope::All),
        Err("ยังไม่มีข้อมูลสำหรับสุ่มรางวัลสำหรับสินค้า: ทั้งหมด".to_owned())
    );
}

#[test]
fn success_without_winner_falls_back_to_no_data_message() {
    let result = Ok(DrawResponse {
        success: true,
        winner: None,
        message: None,
    });
    assert!(draw_outcome(result, &DrawScope::All).is_err());
}

#[test]
fn transport_failure_uses_generic_message() {
    let result = Err(Error::Network("offline".to_owned()));
    assert_eq!(
        draw_outcome(result, &DrawScope::All),
        Err(DRAW_FAILED_MESSAGE.to_owned())
    );
}

#[test]
fn unconfigured_endpoint_uses_configuration_message() {
    let result = Err(Error::Unconfigured);
    assert_eq!(
        draw_outcome(result, &DrawScope::All),
        Err(UNCONFIGURED_MESSAGE.to_owned())
    );
}
