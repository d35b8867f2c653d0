//! HTTP client for the bot backend plus the poll-ordering guard.
//!
//! Endpoints (all JSON): `GET /status`, `GET /history`, `POST /start`,
//! `POST /stop`, `POST /config`. Non-2xx responses may carry a `detail`
//! message which is surfaced to the user for `start` failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use trader_core::{StatusSnapshot, TradeRecord};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{detail}")]
    Http { status: u16, detail: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Error payload shape used by the backend (FastAPI-style `detail`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Build an [`ApiError::Http`] from a non-2xx response body, preferring the
/// backend's `detail` message over the raw body.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });
    ApiError::Http { status, detail }
}

/// Risk-engine tunables accepted by `POST /config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub max_position_size_pct: f64,
    pub stop_loss_pct: f64,
    pub max_drawdown_limit: f64,
}

/// Thin client over the bot's REST API.
#[derive(Clone)]
pub struct BotApi {
    base: String,
}

impl BotApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }
}

#[cfg(target_arch = "wasm32")]
impl BotApi {
    pub async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_json("/status").await
    }

    pub async fn history(&self) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_json("/history").await
    }

    pub async fn start(&self) -> Result<(), ApiError> {
        self.post_empty("/start").await
    }

    pub async fn stop(&self) -> Result<(), ApiError> {
        self.post_empty("/stop").await
    }

    pub async fn update_config(&self, config: &ConfigUpdate) -> Result<(), ApiError> {
        use gloo_net::http::Request;

        let resp = Request::post(&self.url("/config"))
            .json(config)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(resp).await.map(|_| ())
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = Self::check(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        use gloo_net::http::Request;

        let resp = Request::post(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(resp).await.map(|_| ())
    }

    async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_body(status, &body))
    }
}

/// Orders poll completions so a slow cycle can never overwrite a newer
/// one. Each cycle takes a ticket with `begin`; a completion applies only
/// if `try_commit` accepts its ticket.
#[derive(Debug, Default)]
pub struct PollSequencer {
    issued: u64,
    applied: u64,
}

impl PollSequencer {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn try_commit(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequencer_accepts_in_order_completions() {
        let mut seq = PollSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        assert!(seq.try_commit(a));
        assert!(seq.try_commit(b));
    }

    #[test]
    fn sequencer_discards_stale_completions() {
        let mut seq = PollSequencer::default();
        let slow = seq.begin();
        let fast = seq.begin();
        assert!(seq.try_commit(fast));
        // The older cycle finishes late; its result must be dropped.
        assert!(!seq.try_commit(slow));
        // Replays of an applied ticket are dropped too.
        assert!(!seq.try_commit(fast));
    }

    #[test]
    fn error_body_prefers_detail_field() {
        let err = error_from_body(400, r#"{"detail": "Kill switch active. Reset required."}"#);
        assert_eq!(err.to_string(), "Kill switch active. Reset required.");
    }

    #[test]
    fn error_body_falls_back_to_raw_text_then_status() {
        assert_eq!(
            error_from_body(502, "upstream unavailable").to_string(),
            "upstream unavailable"
        );
        assert_eq!(error_from_body(500, "  ").to_string(), "HTTP 500");
    }

    #[test]
    fn config_update_serializes_all_fields() {
        let cfg = ConfigUpdate {
            max_position_size_pct: 0.25,
            stop_loss_pct: 0.05,
            max_drawdown_limit: 0.2,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("max_position_size_pct"));
        assert!(json.contains("stop_loss_pct"));
        assert!(json.contains("max_drawdown_limit"));
    }

    #[test]
    fn urls_normalize_trailing_slash() {
        let api = BotApi::new("http://localhost:8006/api/");
        assert_eq!(api.url("/status"), "http://localhost:8006/api/status");
    }
}
