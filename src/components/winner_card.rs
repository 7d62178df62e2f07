//! Winner display card for the admin panel.

use leptos::prelude::*;

use crate::net::types::Winner;

/// Card showing the most recently drawn winner. The phone number is shown
/// unmasked; this view is for the campaign operator.
#[component]
pub fn WinnerCard(winner: Winner) -> impl IntoView {
    let product = winner.product.unwrap_or_else(|| "ไม่ระบุ".to_owned());
    view! {
        <div class="winner-card">
            <p class="winner-card__heading">"🎉 ผู้โชคดีที่สุ่มได้"</p>
            <p class="winner-card__name">{winner.name}</p>
            <p class="winner-card__line">{format!("เบอร์: {}", winner.phone)}</p>
            <p class="winner-card__line">{format!("สินค้า: {product}")}</p>
            {winner
                .image_url
                .map(|url| {
                    view! {
                        <div class="winner-card__receipt">
                            <p class="winner-card__hint">"รูปบิลที่ใช้ร่วมลุ้นรางวัล:"</p>
                            <a
                                href=url
                                target="_blank"
                                rel="noreferrer"
                                class="winner-card__link"
                            >
                                "เปิดดูรูปบิล"
                            </a>
                        </div>
                    }
                })}
        </div>
    }
}
