use annotator_core::session::validate_audio_upload;
use leptos::prelude::*;
use web_sys::File;
use crate::audio::decoder::decode_file;
use crate::state::AppState;
use crate::types::AudioStatus;

/// Forget the current recording and any decode still in flight.
pub fn clear_audio(state: &AppState) {
    state.decode_seq.update_value(|seq| seq.cancel());
    state.set_audio_url(None);
    state.audio_name.set(None);
    state.audio.set(AudioStatus::Empty);
}

/// Accept a newly picked file: validate it, reset the session, and start
/// decoding. Only the newest decode may publish its result.
pub fn load_file(state: &AppState, file: File) {
    let name = file.name();
    if let Err(e) = validate_audio_upload(&name, &file.type_()) {
        log::warn!("Rejected upload {name:?} ({})", file.type_());
        state.notify_error(e.title(), e.to_string());
        clear_audio(state);
        return;
    }

    match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(url) => state.set_audio_url(Some(url)),
        Err(e) => {
            log::error!("Failed to create object URL: {e:?}");
            state.set_audio_url(None);
        }
    }
    state.audio_name.set(Some(name.clone()));
    state.annotations.update(|a| a.clear());
    state.data_loaded.set(false);
    state.phonemes_input.set(String::new());
    state.notify("Audio File Selected", format!("{name} is ready."));

    let ticket = state.decode_seq.try_update_value(|seq| seq.begin());
    let Some(ticket) = ticket else { return };
    state.audio.set(AudioStatus::Decoding);

    let state = *state;
    wasm_bindgen_futures::spawn_local(async move {
        let result = decode_file(&file).await;
        let current = state
            .decode_seq
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false);
        if !current {
            log::info!("Discarding superseded decode of {name:?}");
            return;
        }
        match result {
            Ok(audio) => {
                log::info!(
                    "Decoded {name:?}: {} samples ({:.2}s at {} Hz)",
                    audio.samples.len(),
                    audio.duration_secs,
                    audio.sample_rate
                );
                state.audio.set(AudioStatus::Ready(audio));
            }
            Err(e) => {
                log::error!("Decoding {name:?} failed: {e}");
                state.audio.set(AudioStatus::Failed(e.placeholder()));
            }
        }
    });
}
