//! Owned RGB pixel grid that the renderers draw into.
//!
//! Row 0 is the top of the surface. The browser side converts the grid to
//! RGBA with [`RasterSurface::to_rgba`] and hands it to `ImageData`.

use thiserror::Error;

/// One pixel, `[r, g, b]`.
pub type Rgb = [u8; 3];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("surface extent must be non-zero (got {width}x{height})")]
    EmptyExtent { width: u32, height: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterSurface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyExtent { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let idx = self.index(col, row);
                self.pixels[idx] = color;
            }
        }
    }

    /// Vertical run from `y0` to `y1` inclusive, in either order, clipped.
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, color: Rgb) {
        if x >= self.width {
            return;
        }
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let bottom = bottom.min(self.height - 1);
        for row in top..=bottom {
            let idx = self.index(x, row);
            self.pixels[idx] = color;
        }
    }

    /// Rows of column `x` that differ from `background`, top to bottom.
    pub fn painted_rows(&self, x: u32, background: Rgb) -> Vec<u32> {
        (0..self.height)
            .filter(|&y| self.pixel(x, y).is_some_and(|p| p != background))
            .collect()
    }

    /// RGBA bytes, row-major, alpha 255.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &[r, g, b] in &self.pixels {
            out.extend_from_slice(&[r, g, b, 255]);
        }
        out
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
