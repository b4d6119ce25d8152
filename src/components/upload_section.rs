use annotator_core::arpabet::unrecognized;
use annotator_core::session::prepare_annotations;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use crate::audio::loader::load_file;
use crate::state::AppState;

fn submit(state: &AppState) {
    state.is_processing.set(true);
    let has_audio = state.audio_name.with_untracked(Option::is_some);
    let input = state.phonemes_input.get_untracked();

    match prepare_annotations(has_audio, &input) {
        Ok(store) => {
            let unknown: Vec<String> = unrecognized(store.items().iter().map(|a| a.text.as_str()))
                .into_iter()
                .map(str::to_string)
                .collect();
            log::info!("Loaded {} phonemes for annotation", store.len());
            state.annotations.set(store);
            state.data_loaded.set(true);
            state.notify("Data Loaded", "Audio and phonemes are ready for annotation.");
            if !unknown.is_empty() {
                state.notify(
                    "Unrecognized Phonemes",
                    format!("Not in the ARPAbet table: {}", unknown.join(", ")),
                );
            }
        }
        Err(e) => state.notify_error(e.title(), e.to_string()),
    }
    state.is_processing.set(false);
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        // A cancelled picker leaves the current file in place
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            load_file(&state, file);
        }
    };

    let disabled = move || {
        state.is_processing.get()
            || state.phonemes_input.with(|p| p.trim().is_empty())
            || state.audio_name.with(Option::is_none)
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Upload Data"</h2>
            <p class="card-desc">"Upload your .wav audio file and enter the expected phoneme sequence."</p>
            <div class="upload-grid">
                <label class="field">
                    <span class="field-label">"Audio File (.wav)"</span>
                    <input id="audio-file" type="file" accept=".wav,audio/wav" on:change=on_file />
                </label>
                <label class="field">
                    <span class="field-label">"Phoneme Sequence"</span>
                    <textarea
                        id="phonemes"
                        rows="3"
                        placeholder="Enter space-separated phonemes (e.g., P AE T)"
                        prop:value=move || state.phonemes_input.get()
                        on:input=move |ev| state.phonemes_input.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
            <button class="btn primary" disabled=disabled on:click=move |_| submit(&state)>
                {move || if state.is_processing.get() { "Processing..." } else { "Load Data for Annotation" }}
            </button>
        </section>
    }
}
