use annotator_core::arpabet::ARPABET;
use leptos::prelude::*;
use crate::components::phoneme_chip::PhonemeChip;
use crate::state::AppState;

/// Parse a 1-based position typed by the user. Blank or invalid means append.
fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().map(|p| p.saturating_sub(1))
}

fn insert(state: &AppState, text: &str, position: &str) -> bool {
    let index = parse_position(position).unwrap_or(usize::MAX);
    match state.annotations.try_update(|store| store.insert(text, index)) {
        Some(Ok(_)) => {
            state.notify("Phoneme Inserted", format!("Phoneme \"{}\" inserted.", text.trim()));
            true
        }
        Some(Err(e)) => {
            state.notify_error("Insert Failed", e.to_string());
            false
        }
        None => false,
    }
}

#[component]
pub fn AnnotationSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let new_text = RwSignal::new(String::new());
    let new_position = RwSignal::new(String::new());

    let on_insert = move |_| {
        let text = new_text.get_untracked();
        if insert(&state, &text, &new_position.get_untracked()) {
            new_text.set(String::new());
            new_position.set(String::new());
        }
    };

    let tally = move || {
        let t = state.annotations.with(|a| a.tally());
        format!("{} of {} reviewed", t.reviewed(), t.total())
    };

    view! {
        <section class="card">
            <div class="card-head">
                <h2 class="card-title">"Phoneme Annotation"</h2>
                <span class="tally">{tally}</span>
            </div>
            <p class="card-desc">"Click on a phoneme to annotate it."</p>
            <datalist id="arpabet-symbols">
                {ARPABET.iter().map(|s| view! { <option value=*s /> }).collect_view()}
            </datalist>
            {move || {
                let items = state.annotations.with(|a| a.items().to_vec());
                if items.is_empty() {
                    view! { <p class="empty">"No phonemes to annotate."</p> }.into_any()
                } else {
                    view! {
                        <div class="chip-list">
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(index, annotation)| view! { <PhonemeChip annotation=annotation index=index /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
            <div class="insert-row">
                <input
                    class="input small"
                    placeholder="Inserted phoneme"
                    list="arpabet-symbols"
                    prop:value=move || new_text.get()
                    on:input=move |ev| new_text.set(event_target_value(&ev))
                />
                <input
                    class="input small position"
                    type="number"
                    min="1"
                    placeholder="Position"
                    prop:value=move || new_position.get()
                    on:input=move |ev| new_position.set(event_target_value(&ev))
                />
                <button
                    class="btn small"
                    disabled=move || new_text.with(|t| t.trim().is_empty())
                    on:click=on_insert
                >"Insert Phoneme"</button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_is_one_based() {
        assert_eq!(parse_position("1"), Some(0));
        assert_eq!(parse_position(" 3 "), Some(2));
    }

    #[test]
    fn test_parse_position_zero_means_front() {
        assert_eq!(parse_position("0"), Some(0));
    }

    #[test]
    fn test_parse_position_blank_or_junk() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("abc"), None);
        assert_eq!(parse_position("-2"), None);
    }
}
