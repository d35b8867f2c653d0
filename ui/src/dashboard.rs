//! Authenticated dashboard: polling data client, command dispatch and the
//! presentation grid (stat cards, diagnostics, trade feed, chart, logs).

use leptos::*;
use trader_core::format::{
    format_brl, format_holdings, format_quantity, format_trade_date, log_tone_class,
};
use trader_core::{derive_health, StatusSnapshot, TradeRecord};

use crate::api::BotApi;
use crate::chart::PriceChart;
use crate::state::use_app_ctx;
use crate::swipe::SwipeButton;

#[cfg(target_arch = "wasm32")]
use crate::api::PollSequencer;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

/// Poll cadence for status + history.
pub const POLL_INTERVAL_MS: u32 = 2_000;

#[cfg(target_arch = "wasm32")]
const CONNECTION_LOST: &str =
    "Connection to the server lost. Check that the backend is running.";

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_ctx();
    let api = BotApi::new(ctx.api_base.get_untracked());

    let status = create_rw_signal::<Option<StatusSnapshot>>(None);
    let history = create_rw_signal::<Vec<TradeRecord>>(Vec::new());
    let conn_error = create_rw_signal::<Option<String>>(None);
    let command_loading = create_rw_signal(false);
    // Bumped after a successful command so the UI catches up before the
    // next tick.
    let refresh = create_rw_signal(0u32);

    // Liveness token: timers and completions check it before touching
    // state, so nothing writes after unmount.
    let alive = create_rw_signal(true);
    on_cleanup(move || alive.set(false));

    #[cfg(target_arch = "wasm32")]
    let fetch_cycle = {
        let api = api.clone();
        let sequencer = store_value(PollSequencer::default());
        move || {
            let api = api.clone();
            let Some(ticket) = sequencer.try_update_value(|s| s.begin()) else {
                return;
            };
            spawn_local(async move {
                let fetched_status = api.status().await;
                let fetched_history = api.history().await;
                if !alive.get_untracked() {
                    return;
                }
                if !sequencer.try_update_value(|s| s.try_commit(ticket)).unwrap_or(false) {
                    return;
                }
                match (fetched_status, fetched_history) {
                    (Ok(s), Ok(h)) => {
                        status.set(Some(s));
                        history.set(h);
                        conn_error.set(None);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        logging::error!("poll failed: {e}");
                        conn_error.set(Some(CONNECTION_LOST.to_string()));
                    }
                }
            });
        }
    };
    #[cfg(not(target_arch = "wasm32"))]
    let fetch_cycle = move || {};

    #[cfg(target_arch = "wasm32")]
    {
        // Immediate first fetch, then the fixed-cadence loop. The loop owns
        // no state; it just re-triggers cycles while the component lives.
        let tick = fetch_cycle.clone();
        tick();
        let tick = fetch_cycle.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if !alive.get_untracked() {
                    break;
                }
                tick();
            }
        });

        // One extra cycle right after a successful command.
        let tick = fetch_cycle.clone();
        create_effect(move |prev: Option<u32>| {
            let n = refresh.get();
            if prev.is_some() {
                tick();
            }
            n
        });
    }

    let on_swipe = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            let running = status
                .get_untracked()
                .map(|s| s.running)
                .unwrap_or(false);
            if command_loading.get_untracked() {
                return;
            }
            command_loading.set(true);
            #[cfg(target_arch = "wasm32")]
            spawn_local(async move {
                let result = if running { api.stop().await } else { api.start().await };
                match result {
                    Ok(()) => refresh.update(|n| *n += 1),
                    Err(e) if running => {
                        // Stop failures stay quiet; see DESIGN.md on the
                        // start/stop asymmetry.
                        logging::error!("stop failed: {e}");
                    }
                    Err(e) => {
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
                if alive.get_untracked() {
                    command_loading.set(false);
                }
            });
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (api, running);
                command_loading.set(false);
            }
        })
    };

    let running = Signal::derive(move || status.get().map(|s| s.running).unwrap_or(false));
    let has_data = move || status.get().is_some();

    let retry = fetch_cycle.clone();

    view! {
        <div class="dash">
            <Show
                when=has_data
                fallback=move || {
                    let retry = retry.clone();
                    view! {
                        <Show
                            when=move || conn_error.get().is_some()
                            fallback=|| view! { <div class="dash-loading"><div class="spinner"></div></div> }
                        >
                            <div class="dash-offline">
                                <div class="offline-icon">"!"</div>
                                <p>{move || conn_error.get().unwrap_or_default()}</p>
                                <button class="btn-retry" on:click={let retry = retry.clone(); move |_| retry()}>
                                    "Try again"
                                </button>
                            </div>
                        </Show>
                    }
                }
            >
                <FatalBanner status=status/>

                <div class="card-grid">
                    <StatCard
                        label="Operational status"
                        value=Signal::derive(move || {
                            if running.get() { "ACTIVE".to_string() } else { "STOPPED".to_string() }
                        })
                        sub=Signal::derive(move || {
                            if running.get() {
                                "Trading engine online".to_string()
                            } else {
                                "Awaiting command".to_string()
                            }
                        })
                        tone=Signal::derive(move || {
                            if running.get() { "tone-positive" } else { "tone-muted" }
                        })
                    />
                    <StatCard
                        label="Bitcoin price (live)"
                        value=Signal::derive(move || {
                            status
                                .get()
                                .and_then(|s| s.current_price)
                                .map(format_brl)
                                .unwrap_or_else(|| "Loading...".to_string())
                        })
                        sub=Signal::derive(|| "Global market ticker".to_string())
                        tone=Signal::derive(|| "tone-price")
                    />
                    <StatCard
                        label="Total equity"
                        value=Signal::derive(move || {
                            status.get().map(|s| format_brl(s.equity_or_balance())).unwrap_or_default()
                        })
                        sub=Signal::derive(move || {
                            status
                                .get()
                                .map(|s| match s.total_equity {
                                    Some(eq) => format!(
                                        "{} (BRL) + {} (BTC)",
                                        format_brl(s.balance),
                                        format_brl(eq - s.balance)
                                    ),
                                    None => "Available capital".to_string(),
                                })
                                .unwrap_or_default()
                        })
                        tone=Signal::derive(|| "tone-plain")
                    />
                    <div class="stat-card command-card">
                        <span class="card-label">"Command center"</span>
                        <SwipeButton running=running loading=command_loading on_swipe=on_swipe/>
                    </div>
                    <StatCard
                        label="Risk protection"
                        value=Signal::derive(move || {
                            if status.get().map(|s| s.kill_switch).unwrap_or(false) {
                                "TRIPPED".to_string()
                            } else {
                                "ARMED".to_string()
                            }
                        })
                        sub=Signal::derive(move || {
                            if status.get().map(|s| s.kill_switch).unwrap_or(false) {
                                "Trading disabled".to_string()
                            } else {
                                "Watching drawdown".to_string()
                            }
                        })
                        tone=Signal::derive(move || {
                            if status.get().map(|s| s.kill_switch).unwrap_or(false) {
                                "tone-negative"
                            } else {
                                "tone-info"
                            }
                        })
                    />
                    <StatCard
                        label="Crypto wallet"
                        value=Signal::derive(move || {
                            status.get().map(|s| format_holdings(s.holdings)).unwrap_or_default()
                        })
                        sub=Signal::derive(|| "Current position".to_string())
                        tone=Signal::derive(|| "tone-accent")
                    />
                </div>

                <HealthGrid status=status/>
                <TradeFeed history=history/>
                <div class="panel chart-panel">
                    <PriceChart trades=history/>
                </div>
                <LogPanel status=status/>
            </Show>
        </div>
    }
}

#[component]
fn FatalBanner(status: RwSignal<Option<StatusSnapshot>>) -> impl IntoView {
    view! {
        <Show when=move || status.get().and_then(|s| s.fatal_error).is_some()>
            <div class="fatal-banner">
                <h3>"The bot stopped due to critical errors"</h3>
                <p class="mono">
                    {move || status.get().and_then(|s| s.fatal_error).unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] sub: Signal<String>,
    #[prop(into)] tone: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class=move || format!("stat-card {}", tone.get())>
            <span class="card-label">{label}</span>
            <h3 class="card-value">{move || value.get()}</h3>
            <p class="card-sub">{move || sub.get()}</p>
        </div>
    }
}

#[component]
fn HealthGrid(status: RwSignal<Option<StatusSnapshot>>) -> impl IntoView {
    view! {
        <div class="panel health-panel">
            <h3 class="panel-title">"System diagnostics"</h3>
            <div class="health-grid">
                {move || {
                    let snapshot = status.get().unwrap_or_default();
                    let now_secs = chrono::Utc::now().timestamp() as f64;
                    derive_health(&snapshot, now_secs)
                        .into_iter()
                        .map(|h| {
                            view! {
                                <div class=format!("health-item {}", h.level.tone_class())>
                                    <span class="health-label">{h.label}</span>
                                    <span class="health-detail mono">{h.detail}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn TradeFeed(history: RwSignal<Vec<TradeRecord>>) -> impl IntoView {
    view! {
        <div class="panel feed-panel">
            <div class="feed-header">
                <h2 class="panel-title">"Execution feed"</h2>
                <span class="pill pill-muted mono">"LIVE"</span>
            </div>
            <div class="feed-scroll">
                <table class="feed-table">
                    <thead>
                        <tr>
                            <th>"Side"</th>
                            <th>"Price (BRL)"</th>
                            <th>"Qty (BTC)"</th>
                            <th>"Total"</th>
                            <th>"Date/Time"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let trades = history.get();
                            if trades.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="feed-empty">
                                            "No execution history available"
                                        </td>
                                    </tr>
                                }
                                .into_view();
                            }
                            let now = chrono::Utc::now();
                            trades
                                .iter()
                                .rev()
                                .map(|t| {
                                    view! {
                                        <tr>
                                            <td>
                                                <span class=format!("pill {}", t.side.tone_class())>
                                                    {t.side.label()}
                                                </span>
                                            </td>
                                            <td class="mono">{format_brl(t.filled_price)}</td>
                                            <td class="mono">{format_quantity(t.quantity)}</td>
                                            <td class="mono">{format_brl(t.total())}</td>
                                            <td>{format_trade_date(t.filled_at, now)}</td>
                                            <td>
                                                <span class="dot"></span>
                                                {t.status_label()}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn LogPanel(status: RwSignal<Option<StatusSnapshot>>) -> impl IntoView {
    view! {
        <Show when=move || status.get().map(|s| !s.logs.is_empty()).unwrap_or(false)>
            <div class="panel log-panel">
                <h3 class="panel-title">"System logs / errors"</h3>
                <div class="log-scroll mono">
                    {move || {
                        status
                            .get()
                            .map(|s| s.logs)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|line| {
                                let tone = log_tone_class(&line);
                                view! { <div class=tone>{line}</div> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
