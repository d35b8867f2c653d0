//! Swipe-to-confirm control for start/stop.
//!
//! Pointer events feed offsets into `trader_core::swipe::SwipeModel`; a
//! release past the threshold fires the bound command once, then the handle
//! auto-resets after `reset_delay_ms` whether or not the command succeeded
//! (deliberate: the next poll reflects the real state either way).

use leptos::*;
use trader_core::swipe::{swipe_label, SwipeModel};

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SwipeButton(
    #[prop(into)] running: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_swipe: Callback<()>,
    #[prop(default = 2_000)] reset_delay_ms: u32,
) -> impl IntoView {
    let model = create_rw_signal(SwipeModel::default());
    // Pointer x at gesture start, minus the handle offset at that moment.
    let origin = create_rw_signal::<Option<f64>>(None);

    let schedule_reset = move || {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            TimeoutFuture::new(reset_delay_ms).await;
            model.try_update(|m| m.reset());
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = reset_delay_ms;
            model.update(|m| m.reset());
        }
    };

    let finish_gesture = move || {
        if origin.get_untracked().is_none() {
            return;
        }
        origin.set(None);
        let fired = model
            .try_update(|m| m.release())
            .unwrap_or(false);
        if fired {
            on_swipe.call(());
            schedule_reset();
        }
    };

    view! {
        <div class="swipe-track">
            <div
                class=move || {
                    if running.get() {
                        "swipe-bg swipe-bg-stop"
                    } else {
                        "swipe-bg swipe-bg-start"
                    }
                }
                style=move || format!("opacity: {:.3}", 0.5 + 0.5 * model.get().progress())
            >
                <span class="swipe-label">
                    {move || {
                        if loading.get() {
                            "Processing...".to_string()
                        } else {
                            format!("{} >>>", swipe_label(running.get()))
                        }
                    }}
                </span>
            </div>
            <div
                class=move || {
                    let base = if running.get() {
                        "swipe-handle swipe-handle-stop"
                    } else {
                        "swipe-handle swipe-handle-start"
                    };
                    if loading.get() {
                        format!("{base} swipe-disabled")
                    } else {
                        base.to_string()
                    }
                }
                style=move || format!("transform: translateX({:.1}px)", model.get().position())
                on:pointerdown=move |ev| {
                    if loading.get_untracked() {
                        return;
                    }
                    ev.prevent_default();
                    let offset = model.get_untracked().position();
                    origin.set(Some(f64::from(ev.client_x()) - offset));
                }
                on:pointermove=move |ev| {
                    if let Some(start) = origin.get_untracked() {
                        let x = f64::from(ev.client_x());
                        model.update(|m| m.drag_to(x - start));
                    }
                }
                on:pointerup=move |_| finish_gesture()
                on:pointercancel=move |_| {
                    origin.set(None);
                    model.update(|m| m.reset());
                }
            >
                <span class="swipe-glyph">{move || if running.get() { "■" } else { "▶" }}</span>
            </div>
        </div>
    }
}
