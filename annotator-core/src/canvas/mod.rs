pub mod colors;
pub mod spectrogram_renderer;
pub mod waveform_renderer;

use crate::config::RenderConfig;
use crate::raster::RasterSurface;
use crate::types::{Placeholder, RenderMode, RenderRequest};

/// Either pixels or the text to show in their place.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    Rendered(RasterSurface),
    Placeholder(Placeholder),
}

impl RenderOutcome {
    pub fn surface(&self) -> Option<&RasterSurface> {
        match self {
            RenderOutcome::Rendered(s) => Some(s),
            RenderOutcome::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            RenderOutcome::Placeholder(p) => Some(p),
            RenderOutcome::Rendered(_) => None,
        }
    }
}

/// Render `samples` onto a fresh `width` x `height` surface.
///
/// Missing or empty audio, a zero-sized surface and an invalid config are
/// reported as placeholders, never as panics. Every call starts from scratch.
pub fn render_surface(
    samples: Option<&[f32]>,
    width: u32,
    height: u32,
    mode: RenderMode,
    config: &RenderConfig,
) -> Result<RasterSurface, Placeholder> {
    let samples = match samples {
        Some(s) if !s.is_empty() => s,
        _ => return Err(Placeholder::no_audio()),
    };
    if let Err(e) = config.validate() {
        log::error!("Rejected render config: {e}");
        return Err(Placeholder::processing_error());
    }
    let mut surface = RasterSurface::new(width, height, config.background)
        .map_err(|_| Placeholder::not_ready())?;

    match mode {
        RenderMode::Waveform => waveform_renderer::draw_waveform(&mut surface, samples, config),
        RenderMode::SpectrogramProxy => {
            spectrogram_renderer::draw_spectrogram(&mut surface, samples, config)
        }
    }
    Ok(surface)
}

pub fn render(request: &RenderRequest, config: &RenderConfig) -> RenderOutcome {
    match render_surface(
        request.samples.as_deref(),
        request.width,
        request.height,
        request.mode,
        config,
    ) {
        Ok(surface) => RenderOutcome::Rendered(surface),
        Err(placeholder) => {
            log::debug!("render skipped: {}", placeholder.message);
            RenderOutcome::Placeholder(placeholder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaceholderKind;

    fn request(samples: Option<Vec<f32>>, width: u32, height: u32, mode: RenderMode) -> RenderRequest {
        RenderRequest { samples, sample_rate: 16_000, width, height, mode }
    }

    #[test]
    fn test_missing_audio_is_unavailable() {
        let cfg = RenderConfig::default();
        for samples in [None, Some(vec![])] {
            let out = render(&request(samples, 10, 10, RenderMode::Waveform), &cfg);
            let p = out.placeholder().unwrap();
            assert_eq!(p.kind, PlaceholderKind::Unavailable);
            assert_eq!(p.message, "No audio loaded.");
        }
    }

    #[test]
    fn test_zero_extent_is_not_ready() {
        let cfg = RenderConfig::default();
        for mode in [RenderMode::Waveform, RenderMode::SpectrogramProxy] {
            for (w, h) in [(0, 10), (10, 0), (0, 0)] {
                let out = render(&request(Some(vec![0.1; 50]), w, h, mode), &cfg);
                assert_eq!(out.placeholder().unwrap().kind, PlaceholderKind::NotReady);
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let cfg = RenderConfig::default();
        let samples: Vec<f32> = (0..4410).map(|i| ((i as f32) * 0.05).sin() * 0.6).collect();
        for mode in [RenderMode::Waveform, RenderMode::SpectrogramProxy] {
            let a = render_surface(Some(&samples), 120, 48, mode, &cfg).unwrap();
            let b = render_surface(Some(&samples), 120, 48, mode, &cfg).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.to_rgba(), b.to_rgba());
        }
    }

    #[test]
    fn test_resize_recomputes_from_scratch() {
        let cfg = RenderConfig::default();
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0) - 0.5).collect();
        let small = render_surface(Some(&samples), 20, 10, RenderMode::Waveform, &cfg).unwrap();
        let large = render_surface(Some(&samples), 40, 20, RenderMode::Waveform, &cfg).unwrap();
        let large_again = render_surface(Some(&samples), 40, 20, RenderMode::Waveform, &cfg).unwrap();
        assert_eq!((small.width(), small.height()), (20, 10));
        assert_eq!(large, large_again);
    }

    #[test]
    fn test_invalid_config_is_error_placeholder() {
        let cfg = RenderConfig { min_bands: 0, ..RenderConfig::default() };
        let err = render_surface(Some(&[0.1; 64]), 8, 3, RenderMode::SpectrogramProxy, &cfg)
            .unwrap_err();
        assert_eq!(err.kind, PlaceholderKind::Error);
        assert_eq!(err, Placeholder::processing_error());

        let cfg = RenderConfig { gain: f32::NAN, ..RenderConfig::default() };
        let out = render(&request(Some(vec![0.1; 64]), 8, 3, RenderMode::Waveform), &cfg);
        assert_eq!(out.placeholder().unwrap().kind, PlaceholderKind::Error);
    }

    #[test]
    fn test_modes_differ() {
        let cfg = RenderConfig::default();
        let samples = vec![0.3f32; 256];
        let w = render_surface(Some(&samples), 16, 32, RenderMode::Waveform, &cfg).unwrap();
        let s = render_surface(Some(&samples), 16, 32, RenderMode::SpectrogramProxy, &cfg).unwrap();
        assert_ne!(w, s);
    }
}
