//! Root component: theme injection, header and the session gate.

use leptos::*;
use leptos_meta::{provide_meta_context, Style};

use crate::auth::{provide_auth_ctx, AuthProvider};
use crate::dashboard::Dashboard;
use crate::login::Login;
use crate::state::{
    api_base_default, provide_app_ctx, supabase_anon_key_default, supabase_url_default,
};
use crate::theme::GLOBAL_CSS;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let _ctx = provide_app_ctx(api_base_default());
    let auth = provide_auth_ctx(AuthProvider {
        url: supabase_url_default(),
        anon_key: supabase_anon_key_default(),
    });
    let session = auth.session;

    let logout = {
        let auth = auth.clone();
        move |_| {
            #[cfg(target_arch = "wasm32")]
            {
                let auth = auth.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    // The session signal flips the view once sign-out lands.
                    auth.sign_out().await;
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &auth;
            }
        }
    };

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <div class="app-shell">
            <header class="app-header">
                <h1 class="brand">"Crypto Paper Trader"</h1>
                <div class="header-right">
                    <span class="header-note">"Simulation active • v1.0"</span>
                    <Show when=move || session.get().is_some()>
                        <span class="header-user mono">
                            {move || {
                                session
                                    .get()
                                    .and_then(|s| s.email)
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button class="btn-logout" on:click=logout.clone()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="app-main">
                <Show
                    when=move || session.get().is_some()
                    fallback=|| view! { <Login/> }
                >
                    <Dashboard/>
                </Show>
            </main>
        </div>
    }
}
