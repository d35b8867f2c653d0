//! Email/password sign-in form for the unauthenticated branch.
//!
//! Failures render inline with the provider's message and leave the form
//! usable; success is observed by the session gate through the shared
//! session signal, not handled here.

use leptos::*;

use crate::auth::use_auth_ctx;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth_ctx();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal::<Option<String>>(None);
    let loading = create_rw_signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(target_arch = "wasm32")]
        {
            let auth = auth.clone();
            let email_val = email.get_untracked();
            let password_val = password.get_untracked();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(message) = auth.sign_in(&email_val, &password_val).await {
                    error.set(Some(message));
                }
                loading.set(false);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &auth;
            loading.set(false);
        }
    };

    view! {
        <div class="login-wrap">
            <div class="login-card">
                <div class="login-head">
                    <h2>"Admin area"</h2>
                    <p>"Sign in with your credentials to manage the bot."</p>
                </div>
                <form class="login-form" on:submit=submit>
                    <div class="input-stack">
                        <label class="input-label" for="login-email">"E-mail"</label>
                        <input
                            id="login-email"
                            name="email"
                            type="email"
                            placeholder="you@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="input-stack">
                        <label class="input-label" for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            name="password"
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || error.get().is_some()>
                        <div class="login-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <button class="btn-primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Verifying..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
