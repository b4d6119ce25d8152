use annotator_core::annotation::AnnotationStore;
use annotator_core::decode::DecodeSequencer;
use annotator_core::{RenderConfig, RenderMode};
use leptos::prelude::*;
use crate::types::{AudioStatus, Notice, NoticeVariant};

/// Most toasts kept on screen at once; older ones are dropped first.
pub const MAX_NOTICES: usize = 4;

/// How long a toast stays up.
pub const NOTICE_TIMEOUT_MS: i32 = 5000;

#[derive(Clone, Copy)]
pub struct AppState {
    pub audio_name: RwSignal<Option<String>>,
    /// Object URL backing the `<audio>` element.
    pub audio_url: RwSignal<Option<String>>,
    pub audio: RwSignal<AudioStatus>,
    pub phonemes_input: RwSignal<String>,
    pub annotations: RwSignal<AnnotationStore>,
    pub data_loaded: RwSignal<bool>,
    pub is_processing: RwSignal<bool>,
    pub render_mode: RwSignal<RenderMode>,
    pub render_config: RwSignal<RenderConfig>,
    pub notices: RwSignal<Vec<Notice>>,
    pub next_notice_id: StoredValue<u64>,
    pub decode_seq: StoredValue<DecodeSequencer>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            audio_name: RwSignal::new(None),
            audio_url: RwSignal::new(None),
            audio: RwSignal::new(AudioStatus::Empty),
            phonemes_input: RwSignal::new(String::new()),
            annotations: RwSignal::new(AnnotationStore::new()),
            data_loaded: RwSignal::new(false),
            is_processing: RwSignal::new(false),
            render_mode: RwSignal::new(RenderMode::Waveform),
            render_config: RwSignal::new(RenderConfig::default()),
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
            decode_seq: StoredValue::new(DecodeSequencer::new()),
        }
    }

    pub fn notify(&self, title: &str, description: impl Into<String>) {
        self.push(title, description.into(), NoticeVariant::Default);
    }

    pub fn notify_error(&self, title: &str, description: impl Into<String>) {
        self.push(title, description.into(), NoticeVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, title: &str, description: String, variant: NoticeVariant) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id + 1);
        let notice = Notice {
            id,
            title: title.to_string(),
            description,
            variant,
        };
        self.notices.update(|list| push_notice(list, notice));

        let state = *self;
        wasm_bindgen_futures::spawn_local(async move {
            crate::sleep_ms(NOTICE_TIMEOUT_MS).await;
            state.dismiss(id);
        });
    }

    /// Replace the audio object URL, revoking the previous one.
    pub fn set_audio_url(&self, url: Option<String>) {
        if let Some(old) = self.audio_url.get_untracked() {
            if let Err(e) = web_sys::Url::revoke_object_url(&old) {
                log::warn!("Failed to revoke object URL: {e:?}");
            }
        }
        self.audio_url.set(url);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a notice, dropping the oldest beyond [`MAX_NOTICES`].
pub fn push_notice(list: &mut Vec<Notice>, notice: Notice) {
    list.push(notice);
    if list.len() > MAX_NOTICES {
        let excess = list.len() - MAX_NOTICES;
        list.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64) -> Notice {
        Notice {
            id,
            title: format!("n{id}"),
            description: String::new(),
            variant: NoticeVariant::Default,
        }
    }

    #[test]
    fn test_default_state_is_empty_session() {
        let state = AppState::default();
        assert_eq!(state.audio.get_untracked(), AudioStatus::Empty);
        assert_eq!(state.render_mode.get_untracked(), RenderMode::Waveform);
        assert!(state.annotations.with_untracked(AnnotationStore::is_empty));
        assert!(!state.data_loaded.get_untracked());
        assert!(state.notices.with_untracked(Vec::is_empty));
    }

    #[test]
    fn test_push_notice_drops_oldest() {
        let mut list = Vec::new();
        for id in 0..6 {
            push_notice(&mut list, notice(id));
        }
        let ids: Vec<u64> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_push_notice_under_limit_keeps_all() {
        let mut list = Vec::new();
        push_notice(&mut list, notice(7));
        push_notice(&mut list, notice(8));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 7);
    }
}
