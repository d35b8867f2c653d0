//! Identity-provider capability for the session gate.
//!
//! The provider client (Supabase GoTrue over REST) is injected through
//! Leptos context rather than reached as a global, and the held session
//! lives in a signal: subscribing to that signal is the session-change
//! notification stream. Sign-out flips the view by changing the signal,
//! never by the caller poking view state directly.

use leptos::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "papertrader-session";

/// Authenticated identity handle issued by the provider. Opaque to the rest
/// of the app: components only observe presence/absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        matches!(self.expires_at, Some(exp) if exp <= now_secs)
    }
}

/// Connection details for the identity provider.
#[derive(Clone)]
pub struct AuthProvider {
    pub url: String,
    pub anon_key: String,
}

#[cfg(target_arch = "wasm32")]
impl AuthProvider {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

/// Injected auth capability: provider client plus the reactive session.
#[derive(Clone)]
pub struct AuthCtx {
    pub provider: AuthProvider,
    pub session: RwSignal<Option<Session>>,
}

pub fn provide_auth_ctx(provider: AuthProvider) -> AuthCtx {
    #[cfg(target_arch = "wasm32")]
    let initial = restore_session();
    #[cfg(not(target_arch = "wasm32"))]
    let initial: Option<Session> = None;

    let ctx = AuthCtx {
        provider,
        session: create_rw_signal(initial),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_auth_ctx() -> AuthCtx {
    use_context::<AuthCtx>().expect("AuthCtx not provided")
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<TokenUser>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Deserialize)]
struct TokenUser {
    #[serde(default)]
    email: Option<String>,
}

/// GoTrue error payload; field name varies across endpoints.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Human-readable message from a failed provider response.
pub fn auth_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<AuthErrorBody>(body)
        .ok()
        .and_then(|b| b.error_description.or(b.msg))
        .unwrap_or_else(|| format!("Sign-in failed (HTTP {status})"))
}

#[cfg(target_arch = "wasm32")]
impl AuthCtx {
    /// Exchange credentials for a session. On success the session signal
    /// changes, which is what flips the gated view.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        use gloo_net::http::Request;

        let url = format!(
            "{}?grant_type=password",
            self.provider.endpoint("/auth/v1/token")
        );
        let resp = Request::post(&url)
            .header("apikey", &self.provider.anon_key)
            .json(&PasswordGrant { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_error_message(status, &body));
        }

        let token: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        let session = Session {
            access_token: token.access_token,
            expires_at: token.expires_at,
            email: token.user.and_then(|u| u.email),
        };
        let _ = save_session(&session);
        self.session.set(Some(session));
        Ok(())
    }

    /// Revoke the session provider-side (best effort) and clear it locally.
    /// The view reacts to the signal change.
    pub async fn sign_out(&self) {
        use gloo_net::http::Request;

        if let Some(session) = self.session.get_untracked() {
            let _ = Request::post(&self.provider.endpoint("/auth/v1/logout"))
                .header("apikey", &self.provider.anon_key)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .send()
                .await;
        }
        let _ = clear_session();
        self.session.set(None);
    }
}

// ---------- Session persistence (localStorage) ------------------------------

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn save_session(session: &Session) -> Option<()> {
    let storage = local_storage()?;
    let json = serde_json::to_string(session).ok()?;
    storage.set_item(SESSION_KEY, &json).ok()
}

#[cfg(target_arch = "wasm32")]
fn clear_session() -> Option<()> {
    local_storage()?.remove_item(SESSION_KEY).ok()
}

/// Restore the stored session, dropping it when expired.
#[cfg(target_arch = "wasm32")]
fn restore_session() -> Option<Session> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
    let session: Session = serde_json::from_str(&raw).ok()?;
    if session.is_expired(chrono::Utc::now().timestamp()) {
        let _ = storage.remove_item(SESSION_KEY);
        return None;
    }
    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expiry() {
        let session = Session {
            access_token: "t".into(),
            expires_at: Some(1000),
            email: None,
        };
        assert!(session.is_expired(1000));
        assert!(session.is_expired(1001));
        assert!(!session.is_expired(999));

        let open_ended = Session {
            access_token: "t".into(),
            expires_at: None,
            email: None,
        };
        assert!(!open_ended.is_expired(i64::MAX));
    }

    #[test]
    fn auth_error_prefers_provider_description() {
        assert_eq!(
            auth_error_message(400, r#"{"error_description": "Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            auth_error_message(422, r#"{"msg": "Email not confirmed"}"#),
            "Email not confirmed"
        );
        assert_eq!(
            auth_error_message(500, "<html>oops</html>"),
            "Sign-in failed (HTTP 500)"
        );
    }

    #[test]
    fn session_roundtrip() {
        let session = Session {
            access_token: "jwt".into(),
            expires_at: Some(1_714_400_000),
            email: Some("admin@example.com".into()),
        };
        let json = serde_json::to_string(&session).unwrap();
        let decoded: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, session);
    }
}
