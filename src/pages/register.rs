//! The campaign page: registration card plus the lucky-draw panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form field signals and the submission flow. The selected file
//! and its preview URL are browser-local; everything the state machine
//! needs to validate lives in `RegistrationForm`. After a successful POST
//! the page bumps the shared refresh signal so the panel refetches.

use leptos::prelude::*;

use crate::components::dialogs::{ErrorDialog, LoadingDialog, SuccessDialog};
use crate::components::lucky_draw_panel::LuckyDrawPanel;
use crate::config::{Campaign, Endpoint};
use crate::error::UNCONFIGURED_MESSAGE;
use crate::state::RefreshSignal;
use crate::state::form::{FormPhase, RegistrationForm};

/// The single campaign screen.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let endpoint = expect_context::<Endpoint>();
    let campaign = expect_context::<Campaign>();
    let refresh = expect_context::<RefreshSignal>();

    let form = RwSignal::new(RegistrationForm::default());
    let preview = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let bill_file = RwSignal::new_local(None::<web_sys::File>);
    let receipt_input = NodeRef::<leptos::html::Input>::new();

    let on_receipt_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                preview.set(Some(url));
            }
            bill_file.set(Some(file));
            form.update(|f| f.has_receipt = true);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = {
        let endpoint = endpoint.clone();
        let product_required = campaign.product_required();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if form.with_untracked(RegistrationForm::submitting) {
                return;
            }
            if !endpoint.is_configured() {
                form.update(|f| f.fail(UNCONFIGURED_MESSAGE.to_owned()));
                return;
            }
            if let Err(invalid) = form.with_untracked(|f| f.validate(product_required)) {
                form.update(|f| f.fail(invalid.user_message().to_owned()));
                return;
            }
            form.update(RegistrationForm::begin_submit);
            #[cfg(feature = "hydrate")]
            {
                use crate::state::form::SUBMIT_FAILED_MESSAGE;

                let Some(file) = bill_file.get_untracked() else {
                    form.update(|f| f.fail(SUBMIT_FAILED_MESSAGE.to_owned()));
                    return;
                };
                let endpoint = endpoint.clone();
                leptos::task::spawn_local(async move {
                    match normalize_and_submit(&endpoint, form.get_untracked(), &file).await {
                        Ok(()) => {
                            form.update(RegistrationForm::complete);
                            bill_file.set(None);
                            preview.set(None);
                            if let Some(input) = receipt_input.get_untracked() {
                                input.set_value("");
                            }
                            refresh.bump();
                        }
                        Err(err) => {
                            log::error!("submission failed: {err}");
                            form.update(|f| f.fail(SUBMIT_FAILED_MESSAGE.to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = refresh;
        }
    };

    let dismiss = Callback::new(move |()| form.update(RegistrationForm::dismiss));
    let dialogs = move || match form.get().phase {
        FormPhase::Submitting => view! { <LoadingDialog/> }.into_any(),
        FormPhase::Success => view! { <SuccessDialog on_dismiss=dismiss/> }.into_any(),
        FormPhase::Failed(message) => {
            view! { <ErrorDialog message=message on_dismiss=dismiss/> }.into_any()
        }
        FormPhase::Idle => ().into_any(),
    };

    let product_options = campaign.product_options;
    let title = campaign.title;

    view! {
        {dialogs}
        <div class="register-page">
            <div class="register-page__column">
                <p class="register-page__headline">{title}</p>

                <div class="register-card">
                    <div class="register-card__header">
                        <div>
                            <p class="register-card__kicker">"กิจกรรมลุ้นรางวัล"</p>
                            <p class="register-card__title">"ลงทะเบียนรับสิทธิ์"</p>
                        </div>
                        <div class="register-card__badge">"ง่าย ๆ แค่กรอกและอัปโหลดบิล"</div>
                    </div>

                    <p class="register-card__intro">
                        "กรอกชื่อ เบอร์โทร สินค้า และอัปโหลดรูปถ่ายบิลซื้อสินค้าของคุณให้ครบ เพื่อร่วมลุ้นรางวัลจากเรา"
                    </p>

                    <form class="register-form" on:submit=on_submit>
                        <div class="register-form__field">
                            <label class="register-form__label">
                                "ชื่อ–นามสกุล " <span class="register-form__required">"*"</span>
                            </label>
                            <input
                                class="register-form__input"
                                name="name"
                                placeholder="เช่น อภิสรา จันทวิเศษ"
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    form.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                        </div>

                        <div class="register-form__field">
                            <label class="register-form__label">
                                "เบอร์โทรศัพท์ " <span class="register-form__required">"*"</span>
                            </label>
                            <input
                                class="register-form__input"
                                name="phone"
                                type="tel"
                                placeholder="เช่น 0812345678"
                                prop:value=move || form.get().phone
                                on:input=move |ev| {
                                    form.update(|f| f.phone = event_target_value(&ev));
                                }
                            />
                            <p class="register-form__hint">"กรุณากรอกเฉพาะตัวเลข 9–10 หลัก"</p>
                        </div>

                        <Show when=move || !product_options.is_empty()>
                            <div class="register-form__field">
                                <label class="register-form__label">
                                    "สาขาที่ซื้อในบิล " <span class="register-form__required">"*"</span>
                                </label>
                                <div class="register-form__options">
                                    {product_options
                                        .iter()
                                        .map(|option| {
                                            let value = *option;
                                            view! {
                                                <label
                                                    class="register-form__option"
                                                    class=("register-form__option--selected", move || {
                                                        form.get().product.as_deref() == Some(value)
                                                    })
                                                >
                                                    <input
                                                        type="radio"
                                                        name="product"
                                                        value=value
                                                        prop:checked=move || {
                                                            form.get().product.as_deref() == Some(value)
                                                        }
                                                        on:change=move |_| {
                                                            form.update(|f| f.product = Some(value.to_owned()));
                                                        }
                                                    />
                                                    <span>{value}</span>
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Show>

                        <div class="register-form__field">
                            <label class="register-form__label">
                                "รูปถ่ายบิล / ใบเสร็จ " <span class="register-form__required">"*"</span>
                            </label>
                            <label class="register-form__upload">
                                <div class="register-form__upload-text">
                                    <p class="register-form__upload-title">"เลือกรูปถ่ายบิลของคุณ"</p>
                                    <p class="register-form__hint">
                                        "รองรับไฟล์ .jpg, .jpeg, .png ขนาดไม่ใหญ่เกินไป"
                                    </p>
                                </div>
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="register-form__file"
                                    node_ref=receipt_input
                                    on:change=on_receipt_change
                                />
                            </label>
                            <Show when=move || preview.get().is_some()>
                                <div class="register-form__preview">
                                    <p class="register-form__hint">"พรีวิวรูปบิล:"</p>
                                    <img
                                        class="register-form__preview-image"
                                        alt="bill preview"
                                        src=move || preview.get().unwrap_or_default()
                                    />
                                </div>
                            </Show>
                        </div>

                        <button
                            type="submit"
                            class="register-form__submit"
                            disabled=move || form.get().submitting()
                        >
                            {move || {
                                if form.get().submitting() {
                                    "กำลังส่งข้อมูล..."
                                } else {
                                    "ส่งข้อมูลลงทะเบียน"
                                }
                            }}
                        </button>
                    </form>

                    <p class="register-card__footnote">
                        "ข้อมูลนี้ใช้สำหรับติดต่อกลับและบันทึกในระบบกิจกรรมเท่านั้น"
                    </p>
                </div>

                <LuckyDrawPanel/>
            </div>
        </div>
    }
}

/// Normalize the receipt and POST the assembled submission.
///
/// The underlying image or network error propagates for logging; the caller
/// shows only the generic failure message.
#[cfg(feature = "hydrate")]
async fn normalize_and_submit(
    endpoint: &Endpoint,
    fields: RegistrationForm,
    file: &web_sys::File,
) -> Result<(), crate::error::Error> {
    use crate::net::types::RegistrationRequest;
    use crate::util::image;

    let bill = image::compress_to_jpeg_base64(file, image::MAX_IMAGE_DIMENSION).await?;
    let request = RegistrationRequest {
        name: fields.name.trim().to_owned(),
        phone: fields.phone.trim().to_owned(),
        product: fields.product,
        bill,
    };
    crate::net::api::submit_registration(endpoint, &request).await
}
