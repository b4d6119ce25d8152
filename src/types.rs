use annotator_core::{DecodedAudio, Placeholder};

/// Where the uploaded recording is in its decode.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AudioStatus {
    #[default]
    Empty,
    Decoding,
    Ready(DecodedAudio),
    Failed(Placeholder),
}

impl AudioStatus {
    pub fn samples(&self) -> Option<&[f32]> {
        match self {
            AudioStatus::Ready(audio) => Some(&audio.samples[..]),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A toast shown in the corner for a few seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}
