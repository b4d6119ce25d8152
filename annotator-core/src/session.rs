//! Checks run before audio and phonemes are accepted for annotation.

use crate::annotation::{AnnotationError, AnnotationStore};
use thiserror::Error;

const WAV_MIME_TYPES: [&str; 4] = ["audio/wav", "audio/x-wav", "audio/wave", "audio/vnd.wave"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please upload a .wav audio file.")]
    InvalidFileType,
    #[error("Please upload an audio file.")]
    MissingAudio,
    #[error("Please enter the phoneme sequence.")]
    MissingPhonemes,
    #[error("The phoneme sequence is empty or invalid.")]
    EmptySequence,
}

impl SessionError {
    /// Short heading for the notification.
    pub fn title(&self) -> &'static str {
        match self {
            SessionError::InvalidFileType => "Invalid File Type",
            SessionError::MissingAudio => "Missing Audio",
            SessionError::MissingPhonemes => "Missing Phonemes",
            SessionError::EmptySequence => "No Phonemes",
        }
    }
}

/// Accept WAV uploads only. Some browsers report an empty MIME type, in which
/// case the file extension decides.
pub fn validate_audio_upload(file_name: &str, mime: &str) -> Result<(), SessionError> {
    let mime = mime.trim().to_ascii_lowercase();
    let ok = if mime.is_empty() {
        file_name.to_ascii_lowercase().ends_with(".wav")
    } else {
        WAV_MIME_TYPES.contains(&mime.as_str())
    };
    if ok {
        Ok(())
    } else {
        Err(SessionError::InvalidFileType)
    }
}

/// Build a fresh annotation list from the reference sequence.
pub fn prepare_annotations(
    audio_present: bool,
    phonemes_text: &str,
) -> Result<AnnotationStore, SessionError> {
    if !audio_present {
        return Err(SessionError::MissingAudio);
    }
    if phonemes_text.trim().is_empty() {
        return Err(SessionError::MissingPhonemes);
    }
    AnnotationStore::from_sequence(phonemes_text).map_err(|e| match e {
        AnnotationError::EmptySequence => SessionError::EmptySequence,
        other => {
            log::error!("unexpected error building annotations: {other}");
            SessionError::EmptySequence
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_mime_variants_accepted() {
        for mime in ["audio/wav", "audio/x-wav", "Audio/WAVE", "audio/vnd.wave"] {
            assert_eq!(validate_audio_upload("a.wav", mime), Ok(()), "{mime}");
        }
    }

    #[test]
    fn test_other_types_rejected() {
        assert_eq!(validate_audio_upload("a.mp3", "audio/mpeg"), Err(SessionError::InvalidFileType));
        assert_eq!(validate_audio_upload("a.wav", "text/plain"), Err(SessionError::InvalidFileType));
    }

    #[test]
    fn test_blank_mime_falls_back_to_extension() {
        assert_eq!(validate_audio_upload("Take1.WAV", ""), Ok(()));
        assert_eq!(validate_audio_upload("take1.flac", ""), Err(SessionError::InvalidFileType));
    }

    #[test]
    fn test_prepare_checks_in_order() {
        assert_eq!(prepare_annotations(false, "P AE T"), Err(SessionError::MissingAudio));
        assert_eq!(prepare_annotations(true, "   "), Err(SessionError::MissingPhonemes));
        let store = prepare_annotations(true, "P AE T").unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_titles() {
        assert_eq!(SessionError::EmptySequence.title(), "No Phonemes");
        assert_eq!(SessionError::InvalidFileType.to_string(), "Please upload a .wav audio file.");
    }
}
