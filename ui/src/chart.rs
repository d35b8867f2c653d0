//! SVG price chart: execution prices, dashed OLS trendline, buy/sell
//! markers and a hover inspector. The data pipeline lives in
//! `trader_core::chart`; this module only projects points into view-box
//! coordinates.

use chrono::Utc;
use leptos::*;
use trader_core::chart::{build_chart_series, ChartPoint, ChartSeries, Timeframe};
use trader_core::format::{format_axis_price, format_brl, format_quantity, format_trade_date};
use trader_core::{TradeRecord, TradeSide};

const VIEW_W: f64 = 920.0;
const VIEW_H: f64 = 360.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;
const MARKER_HALF: f64 = 6.0;

/// Horizontal position of point `i` out of `n`, inside the plot area. A
/// lone point sits centered.
fn x_at(i: usize, n: usize) -> f64 {
    let span = VIEW_W - PAD_LEFT - PAD_RIGHT;
    if n <= 1 {
        PAD_LEFT + span / 2.0
    } else {
        PAD_LEFT + span * i as f64 / (n - 1) as f64
    }
}

/// Vertical position of `value` between the series bounds. A flat series
/// (lo == hi) maps to mid-height.
fn y_at(value: f64, lo: f64, hi: f64) -> f64 {
    let span = VIEW_H - PAD_TOP - PAD_BOTTOM;
    if (hi - lo).abs() < f64::EPSILON {
        PAD_TOP + span / 2.0
    } else {
        PAD_TOP + span * (1.0 - (value - lo) / (hi - lo))
    }
}

/// SVG `points` attribute for a polyline over `values`.
fn polyline_points(values: &[f64], lo: f64, hi: f64, n: usize) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, n), y_at(*v, lo, hi)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Triangle marker path points: up for buys, down for sells.
fn marker_points(x: f64, y: f64, side: TradeSide) -> String {
    let h = MARKER_HALF;
    match side {
        TradeSide::Buy => format!(
            "{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            x,
            y - h,
            x - h,
            y + h,
            x + h,
            y + h
        ),
        TradeSide::Sell => format!(
            "{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            x,
            y + h,
            x - h,
            y - h,
            x + h,
            y - h
        ),
    }
}

fn frame_label(tf: Timeframe) -> &'static str {
    match tf {
        Timeframe::Last30Days => "30D",
        Timeframe::Last60Days => "60D",
        Timeframe::All => "ALL",
    }
}

#[component]
pub fn PriceChart(trades: RwSignal<Vec<TradeRecord>>) -> impl IntoView {
    let timeframe = create_rw_signal(Timeframe::Last30Days);
    let hovered = create_rw_signal::<Option<usize>>(None);

    let series = create_memo(move |_| {
        build_chart_series(&trades.get(), timeframe.get(), Utc::now())
    });

    let frame_buttons = move || {
        Timeframe::ALL_FRAMES
            .iter()
            .map(|tf| {
                let tf = *tf;
                let class = move || {
                    if timeframe.get() == tf {
                        "frame-btn active"
                    } else {
                        "frame-btn"
                    }
                };
                view! {
                    <button class=class on:click=move |_| {
                        timeframe.set(tf);
                        hovered.set(None);
                    }>
                        {frame_label(tf)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-card">
            <div class="chart-head">
                <div>
                    <h3 class="panel-title">"Execution history"</h3>
                    <p class="chart-subtitle mono">"Fill price + linear trend"</p>
                </div>
                <div class="frame-switch">{frame_buttons}</div>
            </div>
            {move || {
                let s = series.get();
                if s.is_empty() {
                    return view! {
                        <div class="chart-empty">
                            <p>"Waiting for trade data..."</p>
                            <p class="chart-empty-sub">
                                {format!("No trades found in window ({})", timeframe.get().name())}
                            </p>
                        </div>
                    }
                    .into_view();
                }
                view! {
                    <div class="chart-body" on:mouseleave=move |_| hovered.set(None)>
                        <ChartSvg series=s hovered=hovered/>
                        <ChartInspector series=series hovered=hovered/>
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
fn ChartSvg(series: ChartSeries, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let n = series.points.len();
    let (lo, hi) = series.price_bounds().unwrap_or((0.0, 1.0));

    let prices: Vec<f64> = series.points.iter().map(|p| p.price).collect();
    let price_line = polyline_points(&prices, lo, hi, n);
    let trend_line = if series.trendline.is_empty() {
        None
    } else {
        Some(polyline_points(&series.trendline, lo, hi, n))
    };

    // Three horizontal gridlines with axis labels.
    let ticks: Vec<(f64, String)> = [hi, (lo + hi) / 2.0, lo]
        .iter()
        .map(|v| (y_at(*v, lo, hi), format_axis_price(*v)))
        .collect();

    let first_date = series.points.first().map(|p| p.date.format("%d/%m").to_string());
    let last_date = series.points.last().map(|p| p.date.format("%d/%m").to_string());

    let markers = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = x_at(i, n);
            let y = y_at(p.price, lo, hi);
            let class = match p.side {
                TradeSide::Buy => "marker marker-buy",
                TradeSide::Sell => "marker marker-sell",
            };
            view! {
                <polygon
                    class=class
                    points=marker_points(x, y, p.side)
                    on:mouseenter=move |_| hovered.set(Some(i))
                />
            }
        })
        .collect_view();

    view! {
        <svg class="chart-svg" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") preserveAspectRatio="none">
            {ticks
                .into_iter()
                .map(|(y, label)| {
                    view! {
                        <g>
                            <line class="gridline" x1=PAD_LEFT y1=y x2={VIEW_W - PAD_RIGHT} y2=y></line>
                            <text class="axis-label" x={PAD_LEFT - 8.0} y={y + 4.0} text-anchor="end">
                                {label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
            {first_date.map(|d| view! {
                <text class="axis-label" x=PAD_LEFT y={VIEW_H - 8.0}>{d}</text>
            })}
            {last_date.map(|d| view! {
                <text class="axis-label" x={VIEW_W - PAD_RIGHT} y={VIEW_H - 8.0} text-anchor="end">{d}</text>
            })}
            {trend_line.map(|points| view! {
                <polyline class="trend-line" points=points></polyline>
            })}
            <polyline class="price-line" points=price_line></polyline>
            {markers}
        </svg>
    }
}

#[component]
fn ChartInspector(
    series: Memo<ChartSeries>,
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    let point = move || -> Option<ChartPoint> {
        let idx = hovered.get()?;
        series.get().points.get(idx).cloned()
    };

    view! {
        <div class="chart-inspector">
            {move || match point() {
                Some(p) => view! {
                    <div class="inspector-card">
                        <span class="inspector-date">
                            {format_trade_date(p.date, Utc::now())}
                        </span>
                        <span class="inspector-price">{format_brl(p.price)}</span>
                        <span class=format!("pill {}", p.side.tone_class())>{p.side.label()}</span>
                        <span class="mono">{format!("Qty: {}", format_quantity(p.quantity))}</span>
                        <span class="mono">{format!("Total: {}", format_brl(p.total))}</span>
                        {p.trend.map(|t| view! {
                            <span class="mono inspector-trend">{format!("Trend: {}", format_brl(t))}</span>
                        })}
                    </div>
                }
                .into_view(),
                None => view! {
                    <div class="inspector-card inspector-idle">
                        "Hover a marker for fill details"
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_is_centered() {
        let x = x_at(0, 1);
        assert!((x - (PAD_LEFT + (VIEW_W - PAD_LEFT - PAD_RIGHT) / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn endpoints_span_plot_area() {
        assert!((x_at(0, 5) - PAD_LEFT).abs() < 1e-9);
        assert!((x_at(4, 5) - (VIEW_W - PAD_RIGHT)).abs() < 1e-9);
    }

    #[test]
    fn y_axis_inverts_and_handles_flat_series() {
        // Higher prices sit closer to the top of the view box.
        assert!(y_at(200.0, 100.0, 200.0) < y_at(100.0, 100.0, 200.0));
        let mid = PAD_TOP + (VIEW_H - PAD_TOP - PAD_BOTTOM) / 2.0;
        assert!((y_at(50.0, 50.0, 50.0) - mid).abs() < 1e-9);
    }

    #[test]
    fn polyline_has_one_pair_per_value() {
        let pts = polyline_points(&[1.0, 2.0, 3.0], 1.0, 3.0, 3);
        assert_eq!(pts.split(' ').count(), 3);
    }

    #[test]
    fn buy_marker_points_up() {
        // Apex above the base for buys, below for sells.
        let buy = marker_points(10.0, 100.0, TradeSide::Buy);
        let sell = marker_points(10.0, 100.0, TradeSide::Sell);
        assert!(buy.starts_with("10.0,94.0"));
        assert!(sell.starts_with("10.0,106.0"));
    }
}
