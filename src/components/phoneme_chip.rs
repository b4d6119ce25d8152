use annotator_core::annotation::{PhonemeAnnotation, PhonemeStatus};
use leptos::prelude::*;
use crate::state::AppState;

/// Statuses offered in the chip popover.
const CHOICES: [PhonemeStatus; 4] = [
    PhonemeStatus::Correct,
    PhonemeStatus::Deleted,
    PhonemeStatus::Substituted,
    PhonemeStatus::Inserted,
];

fn status_icon(status: PhonemeStatus) -> &'static str {
    match status {
        PhonemeStatus::Pending => "\u{270e}",
        PhonemeStatus::Correct => "\u{2714}",
        PhonemeStatus::Deleted => "\u{2716}",
        PhonemeStatus::Substituted => "\u{26a0}",
        PhonemeStatus::Inserted => "+",
    }
}

fn apply(state: &AppState, id: &str, status: PhonemeStatus, substitution: &str) {
    let result = state
        .annotations
        .try_update(|store| store.update(id, status, Some(substitution)));
    if let Some(Err(e)) = result {
        log::error!("Annotation update failed: {e}");
        state.notify_error("Update Failed", e.to_string());
    }
}

fn remove(state: &AppState, index: usize) {
    match state.annotations.try_update(|store| store.remove(index)) {
        Some(Ok(_)) => state.notify("Phoneme Removed", format!("Phoneme at index {} removed.", index + 1)),
        Some(Err(e)) => state.notify_error("Remove Failed", e.to_string()),
        None => {}
    }
}

#[component]
pub fn PhonemeChip(annotation: PhonemeAnnotation, index: usize) -> impl IntoView {
    let state = expect_context::<AppState>();
    let open = RwSignal::new(false);
    let current = RwSignal::new(annotation.status);
    let substitution = RwSignal::new(annotation.substitution_text.clone().unwrap_or_default());

    let id = StoredValue::new(annotation.id.clone());
    let status = annotation.status;
    let text = annotation.text.clone();
    let popover_text = text.clone();
    let sub_label = annotation
        .substitution_text
        .clone()
        .filter(|_| status == PhonemeStatus::Substituted)
        .map(|s| format!("\u{2192} {s}"));

    let on_save = move |_| {
        id.with_value(|id| apply(&state, id, current.get_untracked(), &substitution.get_untracked()));
        open.set(false);
    };

    view! {
        <div class="chip-wrap">
            <button
                class=format!("chip {}", status.as_str())
                title=status.label()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="chip-main">
                    <span class="chip-icon">{status_icon(status)}</span>
                    <span class="chip-text">{text}</span>
                </span>
                {sub_label.map(|s| view! { <span class="chip-sub">{s}</span> })}
            </button>
            {move || open.get().then(|| view! {
                <div class="popover">
                    <h4>"Annotate: "<span class="mono">{popover_text.clone()}</span></h4>
                    <div class="radio-group">
                        {CHOICES.into_iter().map(|choice| view! {
                            <label class="radio-row">
                                <input
                                    type="radio"
                                    name=move || format!("status-{}", id.get_value())
                                    prop:checked=move || current.get() == choice
                                    on:change=move |_| current.set(choice)
                                />
                                {choice.label()}
                            </label>
                        }).collect_view()}
                    </div>
                    {move || (current.get() == PhonemeStatus::Substituted).then(|| view! {
                        <label class="field">
                            <span class="field-label">"Pronounced Phoneme"</span>
                            <input
                                class="input small"
                                placeholder="Enter phoneme"
                                list="arpabet-symbols"
                                prop:value=move || substitution.get()
                                on:input=move |ev| substitution.set(event_target_value(&ev))
                            />
                        </label>
                    })}
                    <div class="popover-actions">
                        <button class="btn primary small" on:click=on_save>"Apply Annotation"</button>
                        <button class="btn danger small" on:click=move |_| {
                            open.set(false);
                            remove(&state, index);
                        }>"Remove"</button>
                    </div>
                </div>
            })}
        </div>
    }
}
