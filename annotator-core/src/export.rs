use crate::annotation::AnnotationStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There are no annotations to download.")]
    NoAnnotations,
    #[error("failed to serialize annotations: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A ready-to-download annotation document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationExport {
    pub file_name: String,
    pub json: String,
}

/// `<audio-basename>_annotations.json`, or `phonemes_annotations.json`
/// when no recording name is known.
pub fn annotations_file_name(audio_name: Option<&str>) -> String {
    let base = match audio_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        },
        None => "phonemes",
    };
    format!("{base}_annotations.json")
}

/// Pretty-printed (2-space) JSON array of the annotations.
pub fn export_annotations(
    store: &AnnotationStore,
    audio_name: Option<&str>,
) -> Result<AnnotationExport, ExportError> {
    if store.is_empty() {
        return Err(ExportError::NoAnnotations);
    }
    let json = serde_json::to_string_pretty(store.items())?;
    Ok(AnnotationExport {
        file_name: annotations_file_name(audio_name),
        json,
    })
}
