//! Energy-band view drawn where a spectrogram would be.
//!
//! Each column is one time segment; each segment is cut into contiguous
//! sub-slices ("bands") by sample position and painted with the band's RMS
//! as a gray level. No frequency transform is involved: band 0 is drawn at
//! the bottom only so the picture reads like a spectrogram.

use crate::canvas::colors::{intensity_to_gray, rms, rms_to_intensity};
use crate::config::RenderConfig;
use crate::raster::RasterSurface;

/// Number of bands for a surface of `height` rows. Always at least one.
pub fn band_count(height: u32, config: &RenderConfig) -> u32 {
    config.min_bands.max(height / config.px_per_band.max(1)).max(1)
}

/// Gray level per band for every column. `None` marks a band with no
/// samples, which is left as background.
pub fn spectrogram_grid(
    samples: &[f32],
    width: usize,
    bands: usize,
    config: &RenderConfig,
) -> Vec<Vec<Option<u8>>> {
    let n = samples.len();
    let silence = Some(intensity_to_gray(0.0, config));

    (0..width)
        .map(|i| {
            let segment = match segment_slice(samples, i, width) {
                Some(seg) => seg,
                // Past the end of the data
                None => return vec![silence; bands],
            };
            debug_assert!(n > 0);

            let per_band = (segment.len() / bands.max(1)).max(1);
            (0..bands)
                .map(|j| {
                    let start = j * per_band;
                    if start >= segment.len() {
                        return None;
                    }
                    let end = (start + per_band).min(segment.len());
                    let energy = rms(&segment[start..end]);
                    Some(intensity_to_gray(rms_to_intensity(energy, config), config))
                })
                .collect()
        })
        .collect()
}

/// Samples of time segment `i`, or `None` past the end of the data.
fn segment_slice(samples: &[f32], i: usize, width: usize) -> Option<&[f32]> {
    let n = samples.len();
    let per_segment = (n / width).max(1);
    let start = i * per_segment;
    if start >= n {
        return None;
    }
    Some(&samples[start..(start + per_segment).min(n)])
}

/// Paint the band grid onto `surface`, band 0 at the bottom.
pub fn draw_spectrogram(surface: &mut RasterSurface, samples: &[f32], config: &RenderConfig) {
    surface.fill(config.background);

    let width = surface.width();
    let height = surface.height();
    let bands = band_count(height, config);
    let band_height = height as f64 / bands as f64;
    // Rounded up so neighbouring bands never leave a gap row
    let rect_height = band_height.ceil() as u32;

    let grid = spectrogram_grid(samples, width as usize, bands as usize, config);
    for (x, column) in grid.iter().enumerate() {
        for (j, gray) in column.iter().enumerate() {
            let Some(g) = *gray else { continue };
            let y = (height as f64 - (j as f64 + 1.0) * band_height).max(0.0);
            surface.fill_rect(x as u32, y.floor() as u32, 1, rect_height, [g, g, g]);
        }
    }
}
