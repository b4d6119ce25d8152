use annotator_core::{Placeholder, PlaceholderKind, RenderMode};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use crate::canvas::visualization::{draw_visualization, VizOutcome};
use crate::state::AppState;

fn mode_class(active: bool) -> &'static str {
    if active { "mode-btn sel" } else { "mode-btn" }
}

fn slider_value(ev: &web_sys::Event) -> Option<f32> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.value().parse::<f32>().ok()
}

#[component]
pub fn AudioPreview() -> impl IntoView {
    let state = expect_context::<AppState>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let overlay: RwSignal<Option<Placeholder>> = RwSignal::new(None);
    let draw_gen = StoredValue::new(0u64);
    let resize_tick = RwSignal::new(0u32);

    let resize_handle = window_event_listener(ev::resize, move |_| {
        resize_tick.update(|t| *t = t.wrapping_add(1));
    });
    on_cleanup(move || resize_handle.remove());

    // Redraw from scratch whenever the audio, mode, calibration or size changes
    Effect::new(move || {
        let status = state.audio.get();
        let mode = state.render_mode.get();
        let config = state.render_config.get();
        resize_tick.track();

        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: HtmlCanvasElement = canvas_el.clone();

        let generation = draw_gen.get_value().wrapping_add(1);
        draw_gen.set_value(generation);

        wasm_bindgen_futures::spawn_local(async move {
            let is_stale = move || draw_gen.try_get_value().map_or(true, |g| g != generation);
            let outcome = draw_visualization(&canvas, &status, mode, &config, &is_stale).await;
            if is_stale() {
                return;
            }
            match outcome {
                VizOutcome::Drawn => {
                    let _ = overlay.try_set(None);
                }
                VizOutcome::Placeholder(p) => {
                    if p.kind == PlaceholderKind::Error {
                        log::error!("Visualization unavailable: {}", p.message);
                    }
                    let _ = overlay.try_set(Some(p));
                }
                VizOutcome::Superseded => {}
            }
        });
    });

    let on_gain = move |ev: web_sys::Event| {
        if let Some(v) = slider_value(&ev) {
            state.render_config.update(|c| c.gain = v.max(0.1));
        }
    };
    let on_floor = move |ev: web_sys::Event| {
        if let Some(v) = slider_value(&ev) {
            let floor = v.clamp(0.0, 255.0) as u8;
            state.render_config.update(|c| *c = c.with_gray_floor(floor));
        }
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Audio Preview"</h2>
            <audio
                class="audio-player"
                controls=true
                src=move || state.audio_url.get().unwrap_or_default()
            >
                "Your browser does not support the audio element."
            </audio>
            <div class="viz-toolbar">
                {[RenderMode::Waveform, RenderMode::SpectrogramProxy]
                    .into_iter()
                    .map(|mode| view! {
                        <button
                            class=move || mode_class(state.render_mode.get() == mode)
                            on:click=move |_| state.render_mode.set(mode)
                        >{mode.label()}</button>
                    })
                    .collect_view()}
                {move || (state.render_mode.get() == RenderMode::SpectrogramProxy).then(|| view! {
                    <label class="setting-row">
                        <span class="setting-label">
                            {move || format!("Gain: {:.1}", state.render_config.with(|c| c.gain))}
                        </span>
                        <input
                            type="range"
                            class="setting-range"
                            min="0.5"
                            max="10"
                            step="0.1"
                            prop:value=move || state.render_config.with(|c| c.gain.to_string())
                            on:input=on_gain
                        />
                    </label>
                    <label class="setting-row">
                        <span class="setting-label">
                            {move || format!("Floor: {}", state.render_config.with(|c| c.gray_floor))}
                        </span>
                        <input
                            type="range"
                            class="setting-range"
                            min="0"
                            max="120"
                            step="1"
                            prop:value=move || state.render_config.with(|c| c.gray_floor.to_string())
                            on:input=on_floor
                        />
                    </label>
                })}
            </div>
            <div class="viz-container">
                <canvas node_ref=canvas_ref class="viz-canvas" />
                {move || overlay.get().map(|p| view! {
                    <div class=format!("viz-placeholder {}", kind_class(p.kind))>{p.message}</div>
                })}
            </div>
        </section>
    }
}

fn kind_class(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::Unavailable => "unavailable",
        PlaceholderKind::Error => "error",
        PlaceholderKind::NotReady => "not-ready",
    }
}
