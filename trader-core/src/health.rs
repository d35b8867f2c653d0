//! Derived health indicators shown in the diagnostics grid.
//!
//! The backend reports raw labels (`health.market_api`, `db_type`,
//! `last_update`); everything rendered is derived here by thresholding and
//! mapping, never stored.

use crate::types::StatusSnapshot;

/// Seconds after which the engine's last update counts as stale.
pub const FRESH_WINDOW_SECS: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Ok,
    Warn,
    Error,
}

impl HealthLevel {
    pub fn tone_class(&self) -> &'static str {
        match self {
            HealthLevel::Ok => "status-good",
            HealthLevel::Warn => "status-warn",
            HealthLevel::Error => "status-error",
        }
    }
}

/// One cell of the diagnostics grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthIndicator {
    pub label: &'static str,
    pub level: HealthLevel,
    pub detail: String,
}

fn market_api(snapshot: &StatusSnapshot) -> HealthIndicator {
    let (level, detail) = match snapshot.health.market_api.as_deref() {
        Some("connected") => (HealthLevel::Ok, "Ticker feed".to_string()),
        Some("error") => (HealthLevel::Error, "No data".to_string()),
        _ => (HealthLevel::Warn, "No data".to_string()),
    };
    HealthIndicator {
        label: "Market API",
        level,
        detail,
    }
}

fn engine(snapshot: &StatusSnapshot) -> HealthIndicator {
    HealthIndicator {
        label: "Trading engine",
        level: if snapshot.running {
            HealthLevel::Ok
        } else {
            HealthLevel::Warn
        },
        detail: if snapshot.running {
            "Running".to_string()
        } else {
            "Stopped".to_string()
        },
    }
}

fn database(snapshot: &StatusSnapshot) -> HealthIndicator {
    HealthIndicator {
        label: "Database",
        level: HealthLevel::Ok,
        detail: snapshot
            .db_type
            .clone()
            .unwrap_or_else(|| "Connected".to_string()),
    }
}

fn latency(snapshot: &StatusSnapshot, now_secs: f64) -> HealthIndicator {
    let (level, detail) = match snapshot.last_update {
        Some(last) => {
            let age = now_secs - last;
            let level = if age < FRESH_WINDOW_SECS {
                HealthLevel::Ok
            } else {
                HealthLevel::Warn
            };
            (level, format!("{age:.1}s ago"))
        }
        None => (HealthLevel::Warn, "N/A".to_string()),
    };
    HealthIndicator {
        label: "Latency",
        level,
        detail,
    }
}

/// All four indicators in grid order.
pub fn derive_health(snapshot: &StatusSnapshot, now_secs: f64) -> Vec<HealthIndicator> {
    vec![
        market_api(snapshot),
        engine(snapshot),
        database(snapshot),
        latency(snapshot, now_secs),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthMap;

    fn snap() -> StatusSnapshot {
        StatusSnapshot::default()
    }

    #[test]
    fn missing_last_update_is_warn_with_na() {
        let indicator = latency(&snap(), 1000.0);
        assert_eq!(indicator.level, HealthLevel::Warn);
        assert_eq!(indicator.detail, "N/A");
    }

    #[test]
    fn fresh_update_is_ok() {
        let mut s = snap();
        s.last_update = Some(995.0);
        let indicator = latency(&s, 1000.0);
        assert_eq!(indicator.level, HealthLevel::Ok);
        assert_eq!(indicator.detail, "5.0s ago");
    }

    #[test]
    fn stale_update_is_warn() {
        let mut s = snap();
        s.last_update = Some(1000.0 - FRESH_WINDOW_SECS);
        assert_eq!(latency(&s, 1000.0).level, HealthLevel::Warn);
    }

    #[test]
    fn market_api_maps_backend_labels() {
        let mut s = snap();
        s.health = HealthMap {
            market_api: Some("connected".into()),
        };
        assert_eq!(market_api(&s).level, HealthLevel::Ok);
        s.health.market_api = Some("error".into());
        assert_eq!(market_api(&s).level, HealthLevel::Error);
        s.health.market_api = None;
        assert_eq!(market_api(&s).level, HealthLevel::Warn);
    }

    #[test]
    fn engine_and_database_follow_snapshot() {
        let mut s = snap();
        s.running = true;
        s.db_type = Some("PostgreSQL (Supabase)".into());
        let all = derive_health(&s, 0.0);
        assert_eq!(all.len(), 4);
        assert_eq!(all[1].level, HealthLevel::Ok);
        assert_eq!(all[2].detail, "PostgreSQL (Supabase)");
        s.running = false;
        s.db_type = None;
        let all = derive_health(&s, 0.0);
        assert_eq!(all[1].level, HealthLevel::Warn);
        assert_eq!(all[2].detail, "Connected");
    }
}
