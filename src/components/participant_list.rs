//! Masked registrant list for the admin panel.
//!
//! Phone numbers are masked at render time; the unmasked values never leave
//! the in-memory list.

use leptos::prelude::*;

use crate::state::draw::DrawPanelState;
use crate::util::phone::mask_phone;

/// Scrollable list of registrants with masked phone numbers.
#[component]
pub fn ParticipantList(state: RwSignal<DrawPanelState>) -> impl IntoView {
    view! {
        <div class="participant-list">
            <Show
                when=move || !state.get().loading_list
                fallback=|| {
                    view! { <div class="participant-list__loading">"กำลังโหลดรายชื่อ..."</div> }
                }
            >
                <Show
                    when=move || !state.get().participants.is_empty()
                    fallback=|| {
                        view! { <p class="participant-list__empty">"ยังไม่มีผู้ลงทะเบียนในระบบ"</p> }
                    }
                >
                    <ul class="participant-list__rows">
                        {move || {
                            state
                                .get()
                                .participants
                                .into_iter()
                                .map(|participant| {
                                    let masked = mask_phone(&participant.phone);
                                    view! {
                                        <li class="participant-list__row">
                                            <span class="participant-list__name">
                                                {participant.name}
                                            </span>
                                            <span class="participant-list__meta">
                                                {participant
                                                    .product
                                                    .map(|product| {
                                                        view! {
                                                            <span class="participant-list__badge">{product}</span>
                                                        }
                                                    })}
                                                {format!("({masked})")}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
