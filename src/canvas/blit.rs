use annotator_core::RasterSurface;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

pub fn get_canvas_ctx(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Displayed size of the canvas in CSS pixels, rounded down.
pub fn display_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width().max(0.0) as u32, rect.height().max(0.0) as u32)
}

/// Match the canvas backing store to `width` x `height`.
pub fn sync_canvas_size(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
}

/// Copy a rendered surface into the top-left of the canvas.
pub fn blit_surface(canvas: &HtmlCanvasElement, surface: &RasterSurface) {
    let Some(ctx) = get_canvas_ctx(canvas) else {
        log::error!("Canvas has no 2d context");
        return;
    };
    let rgba = surface.to_rgba();
    let image_data =
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(&rgba[..]), surface.width(), surface.height());
    match image_data {
        Ok(img) => {
            if let Err(e) = ctx.put_image_data(&img, 0.0, 0.0) {
                log::error!("Failed to draw ImageData: {e:?}");
            }
        }
        Err(e) => {
            log::error!("Failed to create ImageData: {e:?}");
        }
    }
}

/// Clear the canvas to the background color.
pub fn clear(canvas: &HtmlCanvasElement, background: [u8; 3]) {
    let Some(ctx) = get_canvas_ctx(canvas) else { return };
    let [r, g, b] = background;
    ctx.set_fill_style_str(&format!("rgb({r},{g},{b})"));
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}
