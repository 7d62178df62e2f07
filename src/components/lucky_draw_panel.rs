//! Admin panel: live registrant count, masked list, random winner draws.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decoupled from the registration form except for the shared refresh
//! signal. On mount and on every refresh bump the panel issues two
//! independent reads (count + list); each draw button carries its own
//! in-flight state through `DrawScope`, so drawing one branch does not put
//! a spinner on the others.

use leptos::prelude::*;

use crate::components::participant_list::ParticipantList;
use crate::components::winner_card::WinnerCard;
use crate::config::{Campaign, Endpoint};
use crate::error::UNCONFIGURED_MESSAGE;
use crate::state::RefreshSignal;
use crate::state::draw::{DrawPanelState, DrawScope};

/// Lucky-draw panel for the campaign operator.
#[component]
pub fn LuckyDrawPanel() -> impl IntoView {
    let endpoint = expect_context::<Endpoint>();
    let campaign = expect_context::<Campaign>();
    let refresh = expect_context::<RefreshSignal>();
    let state = RwSignal::new(DrawPanelState::default());
    let configured = endpoint.is_configured();

    // Refetch on mount and whenever a submission bumps the refresh signal.
    Effect::new({
        let endpoint = endpoint.clone();
        move |_| {
            refresh.track();
            if !endpoint.is_configured() {
                return;
            }
            state.update(DrawPanelState::begin_refresh);
            #[cfg(feature = "hydrate")]
            {
                let endpoint = endpoint.clone();
                leptos::task::spawn_local(async move {
                    // Independent reads; one failing never blocks the other.
                    let (count, list) = futures::join!(
                        crate::net::api::fetch_count(&endpoint),
                        crate::net::api::fetch_participants(&endpoint),
                    );
                    state.update(|s| {
                        s.apply_count(count);
                        s.apply_participants(list);
                    });
                });
            }
        }
    });

    let draw_disabled = move || state.get().draw_disabled(configured);

    let count_label = move || {
        let s = state.get();
        if s.loading_count {
            "กำลังโหลด...".to_owned()
        } else {
            format!("ลงทะเบียนแล้ว {} คน", s.total_registered.unwrap_or(0))
        }
    };

    let toggle_label = move || {
        let s = state.get();
        if s.show_list {
            "ซ่อนรายชื่อผู้ลงทะเบียน".to_owned()
        } else {
            format!("แสดงรายชื่อผู้ลงทะเบียน ({} คน)", s.participants.len())
        }
    };

    let product_buttons = campaign
        .product_options
        .iter()
        .map(|option| {
            let option = *option;
            let busy =
                move || state.get().drawing == Some(DrawScope::Product(option.to_owned()));
            let on_click = {
                let endpoint = endpoint.clone();
                move |_| {
                    start_draw(state, endpoint.clone(), DrawScope::Product(option.to_owned()));
                }
            };
            view! {
                <button
                    type="button"
                    class="draw-panel__button"
                    disabled=draw_disabled
                    on:click=on_click
                >
                    {move || {
                        if busy() {
                            format!("สุ่ม {option}...")
                        } else {
                            format!("สุ่มรางวัล {option}")
                        }
                    }}
                </button>
            }
        })
        .collect_view();

    let on_draw_all = {
        let endpoint = endpoint.clone();
        move |_| start_draw(state, endpoint.clone(), DrawScope::All)
    };
    let all_busy = move || state.get().drawing == Some(DrawScope::All);

    view! {
        <div class="draw-panel">
            <div class="draw-panel__header">
                <div>
                    <p class="draw-panel__title">"แผงจัดการลุ้นรางวัล"</p>
                    <p class="draw-panel__subtitle">
                        "สำหรับเจ้าของกิจกรรม / แอดมินดูผลแบบง่าย ๆ"
                    </p>
                </div>
                <div class="draw-panel__count-pill">{count_label}</div>
            </div>

            <div class="draw-panel__actions">
                <p class="draw-panel__prompt">"กดปุ่มเพื่อสุ่มผู้โชคดีตามสินค้า:"</p>
                <div class="draw-panel__buttons">
                    {product_buttons}
                    <button
                        type="button"
                        class="draw-panel__button draw-panel__button--all"
                        disabled=draw_disabled
                        on:click=on_draw_all
                    >
                        {move || {
                            if all_busy() {
                                "กำลังสุ่มทั้งหมด...".to_owned()
                            } else {
                                "สุ่มรางวัลทั้งหมด".to_owned()
                            }
                        }}
                    </button>
                </div>
                <p class="draw-panel__note">
                    "* ทุกชื่อที่ลงทะเบียน (มีชื่อ+เบอร์) จะมีสิทธิ์ลุ้นเท่ากันทุกคน"
                </p>
            </div>

            <div class="draw-panel__list-section">
                <button
                    type="button"
                    class="draw-panel__toggle"
                    on:click=move |_| state.update(|s| s.show_list = !s.show_list)
                >
                    {toggle_label}
                </button>
                <Show when=move || state.get().show_list>
                    <ParticipantList state=state/>
                </Show>
            </div>

            {move || state.get().winner.map(|winner| view! { <WinnerCard winner=winner/> })}

            <Show when=move || state.get().error.is_some()>
                <p class="draw-panel__error">
                    {move || state.get().error.unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

/// Kick off a draw for `scope`. No-ops while another draw is in flight.
fn start_draw(state: RwSignal<DrawPanelState>, endpoint: Endpoint, scope: DrawScope) {
    if state.with_untracked(|s| s.drawing.is_some()) {
        return;
    }
    if !endpoint.is_configured() {
        state.update(|s| s.error = Some(UNCONFIGURED_MESSAGE.to_owned()));
        return;
    }
    state.update(|s| s.begin_draw(scope.clone()));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::draw_winner(&endpoint, scope.product()).await;
        if let Err(err) = &result {
            log::error!("draw request failed: {err}");
        }
        let outcome = crate::state::draw::draw_outcome(result, &scope);
        state.update(|s| s.finish_draw(outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (endpoint, scope);
}
