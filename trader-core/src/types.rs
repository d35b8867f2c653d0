use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Side of an executed order as reported by the history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Display label used in the trade feed.
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    /// CSS tone class for pills and chart markers.
    pub fn tone_class(&self) -> &'static str {
        match self {
            TradeSide::Buy => "side-buy",
            TradeSide::Sell => "side-sell",
        }
    }
}

/// One executed order from `GET /history`.
///
/// Ordering is whatever the backend returned; the chart pipeline re-sorts
/// by `filled_at` before filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub side: TradeSide,
    pub filled_price: f64,
    pub quantity: f64,
    pub filled_at: DateTime<Utc>,
    pub status: String,
}

impl TradeRecord {
    /// Notional value of the fill.
    pub fn total(&self) -> f64 {
        self.filled_price * self.quantity
    }

    /// Display label for the fill status (`filled` gets a friendly name,
    /// anything else passes through unchanged).
    pub fn status_label(&self) -> String {
        if self.status == "filled" {
            "Filled".to_string()
        } else {
            self.status.clone()
        }
    }
}

/// Subsystem health labels reported inside the status payload.
///
/// The backend may report more subsystems over time; unknown keys are
/// ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMap {
    #[serde(default)]
    pub market_api: Option<String>,
}

/// Latest full state of the remote trading engine, from `GET /status`.
///
/// Snapshots are provider-authoritative: each poll replaces the previous
/// one wholesale and nothing on the client ever mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub running: bool,
    #[serde(default)]
    pub current_price: Option<f64>,
    pub balance: f64,
    #[serde(default)]
    pub total_equity: Option<f64>,
    pub holdings: f64,
    #[serde(default)]
    pub kill_switch: bool,
    #[serde(default)]
    pub fatal_error: Option<String>,
    #[serde(default)]
    pub health: HealthMap,
    #[serde(default)]
    pub db_type: Option<String>,
    /// Epoch seconds of the engine's last market-data update.
    #[serde(default)]
    pub last_update: Option<f64>,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl StatusSnapshot {
    /// Total equity with fallback to plain balance when the engine has not
    /// priced the holdings yet.
    pub fn equity_or_balance(&self) -> f64 {
        self.total_equity.unwrap_or(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_with_optional_fields_absent() {
        let json = r#"{"running": false, "balance": 1000.0, "holdings": 0.0}"#;
        let snap: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert!(!snap.running);
        assert_eq!(snap.balance, 1000.0);
        assert!(snap.current_price.is_none());
        assert!(snap.fatal_error.is_none());
        assert!(snap.last_update.is_none());
        assert!(snap.logs.is_empty());
        assert!(snap.health.market_api.is_none());
    }

    #[test]
    fn status_decodes_full_payload() {
        let json = r#"{
            "running": true,
            "balance": 9500.25,
            "holdings": 0.0015,
            "orders": 3,
            "kill_switch": false,
            "logs": ["[INFO] tick", "[ERROR] feed stalled"],
            "current_price": 612345.67,
            "total_equity": 10418.77,
            "last_update": 1714400000.5,
            "health": {"market_api": "connected"},
            "fatal_error": null,
            "db_type": "SQLite (Local)"
        }"#;
        let snap: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert!(snap.running);
        assert_eq!(snap.health.market_api.as_deref(), Some("connected"));
        assert_eq!(snap.db_type.as_deref(), Some("SQLite (Local)"));
        assert_eq!(snap.equity_or_balance(), 10418.77);
    }

    #[test]
    fn equity_falls_back_to_balance() {
        let snap = StatusSnapshot {
            balance: 1234.5,
            ..Default::default()
        };
        assert_eq!(snap.equity_or_balance(), 1234.5);
    }

    #[test]
    fn trade_side_wire_casing() {
        let trades: Vec<TradeRecord> = serde_json::from_str(
            r#"[
                {"side": "buy", "filled_price": 100000.0, "quantity": 0.001,
                 "filled_at": "2024-01-01T10:00:00Z", "status": "filled"},
                {"side": "sell", "filled_price": 110000.0, "quantity": 0.001,
                 "filled_at": "2024-01-02T10:00:00Z", "status": "filled"}
            ]"#,
        )
        .unwrap();
        assert_eq!(trades[0].side, TradeSide::Buy);
        assert_eq!(trades[1].side, TradeSide::Sell);
        assert_eq!(trades[0].total(), 100.0);
        assert_eq!(trades[0].status_label(), "Filled");
    }

    #[test]
    fn unknown_status_passes_through() {
        let trade = TradeRecord {
            side: TradeSide::Buy,
            filled_price: 1.0,
            quantity: 1.0,
            filled_at: Utc::now(),
            status: "pending".into(),
        };
        assert_eq!(trade.status_label(), "pending");
    }
}
