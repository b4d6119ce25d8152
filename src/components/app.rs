use leptos::prelude::*;
use crate::components::annotation_section::AnnotationSection;
use crate::components::audio_preview::AudioPreview;
use crate::components::toaster::Toaster;
use crate::components::upload_section::UploadSection;
use crate::download::download_annotations;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <main class="app">
            <header class="app-header">
                <h1>"Phoneme Annotator"</h1>
                <p class="subtitle">"Annotate speech files with ease and precision."</p>
            </header>
            <hr class="separator" />
            <UploadSection />
            <Workspace />
        </main>
        <Toaster />
        <footer class="app-footer">
            {format!("\u{a9} {year} Phoneme Annotator. All rights reserved.")}
        </footer>
    }
}

/// Preview, annotation list and download, shown once data is loaded.
#[component]
fn Workspace() -> impl IntoView {
    let state = expect_context::<AppState>();
    let ready = move || state.data_loaded.get() && state.audio_name.with(Option::is_some);
    let has_annotations = move || state.annotations.with(|a| !a.is_empty());

    move || {
        ready().then(|| view! {
            <AudioPreview />
            <AnnotationSection />
            {move || has_annotations().then(|| view! {
                <div class="download-row">
                    <button class="btn primary" on:click=move |_| download_annotations(&state)>
                        "Download Annotations"
                    </button>
                </div>
            })}
        })
    }
}
