use crate::config::RenderConfig;

/// Root-mean-square of a slice; 0.0 for an empty slice.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}

/// Map band RMS to a 0..=1 intensity using the configured gain.
pub fn rms_to_intensity(rms: f32, config: &RenderConfig) -> f32 {
    (rms * config.gain).clamp(0.0, 1.0)
}

/// Map intensity to a gray level. Never darker than the configured floor,
/// so quiet bands stay visible against the background.
pub fn intensity_to_gray(intensity: f32, config: &RenderConfig) -> u8 {
    let span = (intensity.clamp(0.0, 1.0) * config.gray_span as f32).floor() as u16;
    (span + config.gray_floor as u16).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_known_values() {
        assert_eq!(rms(&[]), 0.0);
        assert_eq!(rms(&[0.25, -0.25, 0.25]), 0.25);
        assert_eq!(rms(&[1.0, -1.0]), 1.0);
        assert!((rms(&[3.0, 4.0]) - (12.5f32).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_gray_floor_and_ceiling() {
        let cfg = RenderConfig::default();
        assert_eq!(intensity_to_gray(0.0, &cfg), 55);
        assert_eq!(intensity_to_gray(1.0, &cfg), 255);
        assert_eq!(intensity_to_gray(rms_to_intensity(0.25, &cfg), &cfg), 230);
        assert_eq!(intensity_to_gray(rms_to_intensity(0.5, &cfg), &cfg), 255);
    }
}
