pub mod annotation_section;
pub mod app;
pub mod audio_preview;
pub mod phoneme_chip;
pub mod toaster;
pub mod upload_section;
