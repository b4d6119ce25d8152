use annotator_core::export::{export_annotations, ExportError};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use crate::state::AppState;

/// Offer `contents` as a file download through a temporary anchor.
pub fn offer_download(file_name: &str, contents: &str, mime: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let href = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not an anchor element"))?;
    link.set_href(&href);
    link.set_download(file_name);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&href)
}

/// Export the current annotations as `<audio-basename>_annotations.json`.
pub fn download_annotations(state: &AppState) {
    let result = state.annotations.with_untracked(|store| {
        state
            .audio_name
            .with_untracked(|name| export_annotations(store, name.as_deref()))
    });
    let export = match result {
        Ok(export) => export,
        Err(ExportError::NoAnnotations) => {
            state.notify_error("No Annotations", ExportError::NoAnnotations.to_string());
            return;
        }
        Err(e) => {
            log::error!("{e}");
            state.notify_error("Download Failed", e.to_string());
            return;
        }
    };

    match offer_download(&export.file_name, &export.json, "application/json") {
        Ok(()) => {
            log::info!("Saved annotations to {}", export.file_name);
            state.notify(
                "Annotations Downloaded",
                format!("Annotations saved to {}", export.file_name),
            );
        }
        Err(e) => {
            log::error!("Download failed: {e:?}");
            state.notify_error("Download Failed", "The browser refused the download.");
        }
    }
}
