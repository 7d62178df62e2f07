//! Full-screen status overlays for the submission flow.
//!
//! The loading overlay blocks until the POST settles; success and error are
//! dismissible and return the form to Idle.

use leptos::prelude::*;

/// Blocking overlay shown while a submission is in flight.
#[component]
pub fn LoadingDialog() -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="overlay__card">
                <div class="overlay__spinner"></div>
                <p class="overlay__title">"กำลังส่งข้อมูลลงทะเบียน..."</p>
                <p class="overlay__hint">"อย่าปิดหน้านี้จนกว่าจะส่งเสร็จนะครับ"</p>
            </div>
        </div>
    }
}

/// Dismissible confirmation after a completed submission.
#[component]
pub fn SuccessDialog(on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="overlay__card">
                <p class="overlay__title">"ส่งข้อมูลเรียบร้อยแล้ว 🎉"</p>
                <p class="overlay__hint">"ขอบคุณที่ร่วมลงทะเบียนลุ้นรางวัล"</p>
                <button
                    class="overlay__button overlay__button--accent"
                    on:click=move |_| on_dismiss.run(())
                >
                    "ปิดหน้าต่าง"
                </button>
            </div>
        </div>
    }
}

/// Dismissible error report carrying the user-facing message.
#[component]
pub fn ErrorDialog(message: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="overlay__card">
                <p class="overlay__title">"มีข้อผิดพลาด"</p>
                <p class="overlay__hint">{message}</p>
                <button class="overlay__button" on:click=move |_| on_dismiss.run(())>
                    "ปิด"
                </button>
            </div>
        </div>
    }
}
