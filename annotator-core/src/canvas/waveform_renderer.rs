use crate::config::RenderConfig;
use crate::raster::RasterSurface;

/// Min/max amplitude of the samples behind one output column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnEnvelope {
    pub min: f32,
    pub max: f32,
}

impl ColumnEnvelope {
    pub const SILENCE: ColumnEnvelope = ColumnEnvelope { min: 0.0, max: 0.0 };
}

/// Half-open sample range `[start, end)` for column `x`.
///
/// With at least one sample per column the buffer is split proportionally.
/// With fewer samples than columns each column takes one sample, so columns
/// past the end of the data fall outside the buffer.
pub fn column_range(x: usize, num_samples: usize, width: usize) -> (usize, usize) {
    if num_samples >= width {
        let n = num_samples as u64;
        let w = width as u64;
        let start = (x as u64 * n / w) as usize;
        let end = ((x as u64 + 1) * n / w) as usize;
        (start, end)
    } else {
        (x, x + 1)
    }
}

/// Per-column envelope, one entry per column. Columns past the data are silent.
pub fn waveform_envelope(samples: &[f32], width: usize) -> Vec<ColumnEnvelope> {
    let n = samples.len();
    (0..width)
        .map(|x| {
            let (start, end) = column_range(x, n, width);
            if start >= n {
                return ColumnEnvelope::SILENCE;
            }
            let slice = &samples[start..end.min(n).max(start + 1)];
            let mut min_val = f32::MAX;
            let mut max_val = f32::MIN;
            for &s in slice {
                if s < min_val { min_val = s; }
                if s > max_val { max_val = s; }
            }
            ColumnEnvelope { min: min_val, max: max_val }
        })
        .collect()
}

/// Vertical position of an amplitude: +1.0 at the top edge, -1.0 at the bottom.
pub fn amplitude_to_y(amplitude: f32, height: u32) -> f64 {
    let center_y = height as f64 / 2.0;
    center_y - amplitude as f64 * center_y
}

/// Pixel row for a y position, saturated to the surface.
fn y_to_row(y: f64, height: u32) -> u32 {
    let max_row = height.saturating_sub(1) as f64;
    y.floor().clamp(0.0, max_row) as u32
}

/// Draw the min/max envelope, one vertical run per column.
/// Equal ends still leave a one-pixel mark, so silence reads as a centerline.
pub fn draw_waveform(surface: &mut RasterSurface, samples: &[f32], config: &RenderConfig) {
    surface.fill(config.background);

    let width = surface.width();
    let height = surface.height();
    let envelope = waveform_envelope(samples, width as usize);

    for (x, col) in envelope.iter().enumerate() {
        let top = y_to_row(amplitude_to_y(col.max, height), height);
        let bottom = y_to_row(amplitude_to_y(col.min, height), height);
        surface.vline(x as u32, top, bottom, config.waveform_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> RasterSurface {
        RasterSurface::new(w, h, RenderConfig::default().background).unwrap()
    }

    #[test]
    fn test_every_column_is_drawn() {
        let cfg = RenderConfig::default();
        let samples: Vec<f32> = (0..997).map(|i| ((i as f32) * 0.37).sin() * 0.8).collect();
        let mut s = surface(64, 40);
        draw_waveform(&mut s, &samples, &cfg);
        for x in 0..64 {
            assert!(!s.painted_rows(x, cfg.background).is_empty(), "column {x} is blank");
        }
    }

    #[test]
    fn test_envelope_bounded_by_source_range() {
        let samples: Vec<f32> = (0..503).map(|i| ((i * 7919) % 200) as f32 / 100.0 - 1.0).collect();
        let width = 37;
        let env = waveform_envelope(&samples, width);
        assert_eq!(env.len(), width);
        for (x, col) in env.iter().enumerate() {
            let (start, end) = column_range(x, samples.len(), width);
            let src = &samples[start..end];
            let lo = src.iter().copied().fold(f32::MAX, f32::min);
            let hi = src.iter().copied().fold(f32::MIN, f32::max);
            assert!(col.min <= col.max);
            assert_eq!(col.min, lo);
            assert_eq!(col.max, hi);
        }
    }

    #[test]
    fn test_silence_is_centerline() {
        let cfg = RenderConfig::default();
        let mut s = surface(20, 10);
        draw_waveform(&mut s, &vec![0.0; 400], &cfg);
        for x in 0..20 {
            assert_eq!(s.painted_rows(x, cfg.background), vec![5]);
        }
    }

    #[test]
    fn test_alternating_full_scale_spans_height() {
        let cfg = RenderConfig::default();
        let samples: Vec<f32> = (0..200).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let env = waveform_envelope(&samples, 50);
        assert!(env.iter().all(|c| c.min == -1.0 && c.max == 1.0));

        let mut s = surface(50, 16);
        draw_waveform(&mut s, &samples, &cfg);
        for x in 0..50 {
            assert_eq!(s.painted_rows(x, cfg.background), (0..16).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_fewer_samples_than_columns() {
        let cfg = RenderConfig::default();
        let env = waveform_envelope(&[0.5, -0.25, 0.75], 6);
        assert_eq!(env[0], ColumnEnvelope { min: 0.5, max: 0.5 });
        assert_eq!(env[1], ColumnEnvelope { min: -0.25, max: -0.25 });
        assert_eq!(env[2], ColumnEnvelope { min: 0.75, max: 0.75 });
        for col in &env[3..] {
            assert_eq!(*col, ColumnEnvelope::SILENCE);
        }

        let mut s = surface(6, 8);
        draw_waveform(&mut s, &[0.5, -0.25, 0.75], &cfg);
        for x in 3..6 {
            assert_eq!(s.painted_rows(x, cfg.background), vec![4]);
        }
    }

    #[test]
    fn test_one_sample_per_column_end_to_end() {
        let cfg = RenderConfig::default();
        let samples = [0.5, 0.5, -0.5, -0.5];
        let mut s = surface(4, 100);
        draw_waveform(&mut s, &samples, &cfg);
        assert_eq!(s.painted_rows(0, cfg.background), vec![25]);
        assert_eq!(s.painted_rows(1, cfg.background), vec![25]);
        assert_eq!(s.painted_rows(2, cfg.background), vec![75]);
        assert_eq!(s.painted_rows(3, cfg.background), vec![75]);
    }

    #[test]
    fn test_out_of_range_amplitude_clips_to_edge() {
        let cfg = RenderConfig::default();
        let mut s = surface(1, 10);
        draw_waveform(&mut s, &[3.0, -3.0], &cfg);
        assert_eq!(s.painted_rows(0, cfg.background), (0..10).collect::<Vec<_>>());
    }
}
