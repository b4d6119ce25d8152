use crate::raster::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("gain must be positive and finite (got {0})")]
    Gain(f32),
    #[error("gray floor {floor} plus span {span} exceeds 255")]
    GrayRange { floor: u8, span: u8 },
    #[error("{0} must be at least 1")]
    Zero(&'static str),
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Calibration and colors shared by both render modes.
///
/// `gain` and the gray floor/span were tuned by eye for speech recordings, so
/// they live here rather than in the algorithms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub background: Rgb,
    pub waveform_color: Rgb,
    /// Multiplier applied to band RMS before clamping to 1.0.
    pub gain: f32,
    /// Darkest gray a painted band can have.
    pub gray_floor: u8,
    /// Gray levels added on top of the floor at full intensity.
    pub gray_span: u8,
    pub min_bands: u32,
    /// Target vertical pixels per band.
    pub px_per_band: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: [10, 10, 10],
            waveform_color: [102, 170, 102],
            gain: 3.5,
            gray_floor: 55,
            gray_span: 200,
            min_bands: 8,
            px_per_band: 4,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gain.is_finite() && self.gain > 0.0) {
            return Err(ConfigError::Gain(self.gain));
        }
        if self.gray_floor as u16 + self.gray_span as u16 > 255 {
            return Err(ConfigError::GrayRange {
                floor: self.gray_floor,
                span: self.gray_span,
            });
        }
        if self.min_bands == 0 {
            return Err(ConfigError::Zero("minBands"));
        }
        if self.px_per_band == 0 {
            return Err(ConfigError::Zero("pxPerBand"));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Copy with the floor moved, shrinking the span so the top stays at 255.
    pub fn with_gray_floor(&self, floor: u8) -> Self {
        Self {
            gray_floor: floor,
            gray_span: 255 - floor,
            ..self.clone()
        }
    }
}
