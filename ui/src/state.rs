//! App-wide context and build-profile configuration.
//!
//! Deployment overrides come from globals on the JS scope
//! (`PAPERTRADER_API_BASE`, `PAPERTRADER_SUPABASE_URL`,
//! `PAPERTRADER_SUPABASE_ANON_KEY`); native builds use the compiled-in
//! defaults.

use leptos::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

pub fn api_base_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("PAPERTRADER_API_BASE")
            .unwrap_or_else(|| "http://localhost:8006/api".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "http://localhost:8006/api".to_string()
    }
}

pub fn supabase_url_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("PAPERTRADER_SUPABASE_URL")
            .unwrap_or_else(|| "http://localhost:54321".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "http://localhost:54321".to_string()
    }
}

pub fn supabase_anon_key_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("PAPERTRADER_SUPABASE_ANON_KEY").unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[derive(Clone)]
pub struct AppCtx {
    pub api_base: RwSignal<String>,
}

pub fn provide_app_ctx(api_base: String) -> AppCtx {
    let ctx = AppCtx {
        api_base: create_rw_signal(api_base),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
