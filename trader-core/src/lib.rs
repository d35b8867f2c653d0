//! Domain core for the paper-trader dashboard.
//!
//! Everything here is pure data and pure functions: wire types for the bot
//! backend, the chart data pipeline, health derivation, display formatting
//! and the swipe-gesture model. No browser dependencies, so the whole crate
//! compiles and tests natively.

pub mod chart;
pub mod format;
pub mod health;
pub mod swipe;
pub mod types;

pub use chart::{build_chart_series, ChartPoint, ChartSeries, Timeframe};
pub use health::{derive_health, HealthIndicator, HealthLevel};
pub use swipe::{swipe_label, SwipeModel};
pub use types::{HealthMap, StatusSnapshot, TradeRecord, TradeSide};
