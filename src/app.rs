//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::config::{Campaign, Endpoint};
use crate::pages::register::RegisterPage;
use crate::state::RefreshSignal;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="th">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the endpoint configuration, campaign copy, and the shared
/// refresh signal; the campaign ships a single screen, so there is no
/// router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Endpoint::from_build_env());
    provide_context(Campaign::default());
    provide_context(RefreshSignal::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/luckydraw.css"/>
        <Title text="ส.เจริญหลังคาเหล็ก ทุกบิลลุ้นรางวัล"/>

        <RegisterPage/>
    }
}
