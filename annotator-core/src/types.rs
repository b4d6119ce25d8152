use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Mono audio produced by a decoder.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedAudio {
    /// Per-frame mean of the source channels.
    pub samples: Arc<Vec<f32>>,
    pub sample_rate: u32,
    /// Channel count of the source before downmixing.
    pub channels: u32,
    pub duration_secs: f64,
}

impl DecodedAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u32) -> Self {
        let duration_secs = if sample_rate > 0 {
            samples.len() as f64 / sample_rate as f64
        } else {
            0.0
        };
        Self {
            samples: Arc::new(samples),
            sample_rate,
            channels,
            duration_secs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Per-column min/max amplitude envelope.
    #[default]
    #[serde(rename = "waveform")]
    Waveform,
    /// Per-column, per-band RMS drawn as gray levels. No frequency transform.
    #[serde(rename = "spectrogram")]
    SpectrogramProxy,
}

impl RenderMode {
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Waveform => "Waveform",
            RenderMode::SpectrogramProxy => "Spectrogram",
        }
    }
}

/// Input shape accepted from callers that speak JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub samples: Option<Vec<f32>>,
    /// Carried for callers; the renderers ignore it.
    #[serde(default)]
    pub sample_rate: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mode: RenderMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderKind {
    Unavailable,
    Error,
    NotReady,
}

/// Text shown instead of pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub message: String,
}

impl Placeholder {
    pub fn no_audio() -> Self {
        Self {
            kind: PlaceholderKind::Unavailable,
            message: "No audio loaded.".into(),
        }
    }

    pub fn decoding() -> Self {
        Self {
            kind: PlaceholderKind::Unavailable,
            message: "Decoding audio...".into(),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            kind: PlaceholderKind::NotReady,
            message: "Visualization area not ready.".into(),
        }
    }

    pub fn processing_error() -> Self {
        Self {
            kind: PlaceholderKind::Error,
            message: "Error processing audio".into(),
        }
    }

    pub fn read_error() -> Self {
        Self {
            kind: PlaceholderKind::Error,
            message: "Error reading audio file".into(),
        }
    }
}
