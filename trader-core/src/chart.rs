//! Chart data pipeline: trade history in, plottable series out.
//!
//! The pipeline is a pure function of `(trades, timeframe, now)` — `now`
//! only anchors the timeframe cutoff. Steps run in a fixed order: stable
//! sort by fill time, cutoff filter, projection to chart points, OLS
//! trendline fit, trend attachment by positional index.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{TradeRecord, TradeSide};

/// Charting window selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    Last30Days,
    Last60Days,
    All,
}

impl Timeframe {
    pub const ALL_FRAMES: [Timeframe; 3] =
        [Timeframe::Last30Days, Timeframe::Last60Days, Timeframe::All];

    /// Short name used in button labels and empty-state copy.
    pub fn name(&self) -> &'static str {
        match self {
            Timeframe::Last30Days => "30d",
            Timeframe::Last60Days => "60d",
            Timeframe::All => "all",
        }
    }

    /// Oldest fill time admitted into the chart. "All" uses a far-past
    /// sentinel rather than skipping the filter so the pipeline shape stays
    /// identical across frames.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Timeframe::Last30Days => now - Duration::days(30),
            Timeframe::Last60Days => now - Duration::days(60),
            Timeframe::All => Utc
                .with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

/// A trade projected into chart-plottable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    pub side: TradeSide,
    pub quantity: f64,
    /// `price * quantity`, shown in the tooltip.
    pub total: f64,
    /// OLS trend value at this point's index; `None` when fewer than two
    /// points survived the filter.
    pub trend: Option<f64>,
}

/// Output of the pipeline: ordered points plus the raw trendline values.
///
/// `trendline` is either empty or exactly `points.len()` long.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub trendline: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max over prices and trend values, for the vertical scale.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        let values = self
            .points
            .iter()
            .map(|p| p.price)
            .chain(self.trendline.iter().copied());
        for v in values {
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        bounds
    }
}

/// Ordinary least squares over `(index, price)`. Returns `(slope,
/// intercept)`, or `None` for fewer than two points. With index as x the
/// denominator `n*Σx² − (Σx)²` is zero only when n ≤ 1, which the length
/// guard already excludes.
fn ols_fit(prices: &[f64]) -> Option<(f64, f64)> {
    let n = prices.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, y) in prices.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / nf;
    Some((slope, intercept))
}

/// Run the full pipeline for one timeframe.
pub fn build_chart_series(
    trades: &[TradeRecord],
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> ChartSeries {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    // Stable: fills with identical timestamps keep their history order.
    sorted.sort_by(|a, b| a.filled_at.cmp(&b.filled_at));

    let cutoff = timeframe.cutoff(now);
    let mut points: Vec<ChartPoint> = sorted
        .into_iter()
        .filter(|t| t.filled_at >= cutoff)
        .map(|t| ChartPoint {
            date: t.filled_at,
            price: t.filled_price,
            side: t.side,
            quantity: t.quantity,
            total: t.filled_price * t.quantity,
            trend: None,
        })
        .collect();

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let trendline: Vec<f64> = match ols_fit(&prices) {
        Some((slope, intercept)) => (0..points.len())
            .map(|i| slope * i as f64 + intercept)
            .collect(),
        None => Vec::new(),
    };

    for (point, trend) in points.iter_mut().zip(trendline.iter()) {
        point.trend = Some(*trend);
    }

    ChartSeries { points, trendline }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(side: TradeSide, price: f64, qty: f64, at: &str) -> TradeRecord {
        TradeRecord {
            side,
            filled_price: price,
            quantity: qty,
            filled_at: at.parse().unwrap(),
            status: "filled".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-02-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn two_trade_trendline_passes_through_both_points() {
        let trades = vec![
            trade(TradeSide::Buy, 100_000.0, 0.001, "2024-01-01T10:00:00Z"),
            trade(TradeSide::Sell, 110_000.0, 0.001, "2024-01-02T10:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::All, now());
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].price, 100_000.0);
        assert!((series.points[0].total - 100.0).abs() < 1e-9);
        assert!((series.points[1].total - 110.0).abs() < 1e-9);
        // slope 10000, intercept 100000
        assert!((series.trendline[0] - 100_000.0).abs() < 1e-6);
        assert!((series.trendline[1] - 110_000.0).abs() < 1e-6);
        assert_eq!(series.points[0].trend, Some(series.trendline[0]));
    }

    #[test]
    fn five_point_fixture_matches_closed_form() {
        // y = [100, 102, 101, 105, 107] over x = 0..4:
        // slope = 1.7, intercept = 99.6 (hand-computed).
        let prices = [100.0, 102.0, 101.0, 105.0, 107.0];
        let trades: Vec<TradeRecord> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| {
                trade(
                    TradeSide::Buy,
                    *p,
                    1.0,
                    &format!("2024-01-0{}T00:00:00Z", i + 1),
                )
            })
            .collect();
        let series = build_chart_series(&trades, Timeframe::All, now());
        let (slope, intercept) = ols_fit(&prices).unwrap();
        assert!((slope - 1.7).abs() < 1e-9);
        assert!((intercept - 99.6).abs() < 1e-9);
        for (i, t) in series.trendline.iter().enumerate() {
            assert!((t - (slope * i as f64 + intercept)).abs() < 1e-9);
        }
    }

    #[test]
    fn unsorted_input_is_sorted_ascending() {
        let trades = vec![
            trade(TradeSide::Sell, 110_000.0, 0.001, "2024-01-02T10:00:00Z"),
            trade(TradeSide::Buy, 100_000.0, 0.001, "2024-01-01T10:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::All, now());
        assert_eq!(series.points[0].side, TradeSide::Buy);
        assert_eq!(series.points[1].side, TradeSide::Sell);
    }

    #[test]
    fn equal_timestamps_keep_history_order() {
        let trades = vec![
            trade(TradeSide::Buy, 1.0, 1.0, "2024-01-01T10:00:00Z"),
            trade(TradeSide::Sell, 2.0, 1.0, "2024-01-01T10:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::All, now());
        assert_eq!(series.points[0].side, TradeSide::Buy);
        assert_eq!(series.points[1].side, TradeSide::Sell);
    }

    #[test]
    fn all_timeframe_includes_pre_2000_trades() {
        let trades = vec![
            trade(TradeSide::Buy, 50.0, 1.0, "1999-06-01T00:00:00Z"),
            trade(TradeSide::Sell, 60.0, 1.0, "2024-01-15T00:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::All, now());
        assert_eq!(series.points.len(), 2);
    }

    #[test]
    fn thirty_day_window_drops_old_trades() {
        let trades = vec![
            trade(TradeSide::Buy, 50.0, 1.0, "2023-11-01T00:00:00Z"),
            trade(TradeSide::Sell, 60.0, 1.0, "2024-01-15T00:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::Last30Days, now());
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].price, 60.0);
        // One survivor: no trendline, no trend values.
        assert!(series.trendline.is_empty());
        assert_eq!(series.points[0].trend, None);
    }

    #[test]
    fn filtering_is_idempotent() {
        let trades = vec![
            trade(TradeSide::Buy, 50.0, 1.0, "2023-11-01T00:00:00Z"),
            trade(TradeSide::Buy, 55.0, 1.0, "2024-01-10T00:00:00Z"),
            trade(TradeSide::Sell, 60.0, 1.0, "2024-01-15T00:00:00Z"),
        ];
        let once = build_chart_series(&trades, Timeframe::Last30Days, now());
        let surviving: Vec<TradeRecord> = trades
            .iter()
            .filter(|t| t.filled_at >= Timeframe::Last30Days.cutoff(now()))
            .cloned()
            .collect();
        let twice = build_chart_series(&surviving, Timeframe::Last30Days, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_and_singleton_inputs_yield_no_trendline() {
        let none = build_chart_series(&[], Timeframe::All, now());
        assert!(none.is_empty());
        assert!(none.trendline.is_empty());

        let one = build_chart_series(
            &[trade(TradeSide::Buy, 10.0, 1.0, "2024-01-01T00:00:00Z")],
            Timeframe::All,
            now(),
        );
        assert_eq!(one.points.len(), 1);
        assert!(one.trendline.is_empty());
    }

    #[test]
    fn price_bounds_cover_prices_and_trend() {
        let trades = vec![
            trade(TradeSide::Buy, 100.0, 1.0, "2024-01-01T00:00:00Z"),
            trade(TradeSide::Sell, 200.0, 1.0, "2024-01-02T00:00:00Z"),
        ];
        let series = build_chart_series(&trades, Timeframe::All, now());
        let (lo, hi) = series.price_bounds().unwrap();
        assert!(lo <= 100.0);
        assert!(hi >= 200.0);
        assert!(build_chart_series(&[], Timeframe::All, now())
            .price_bounds()
            .is_none());
    }
}
