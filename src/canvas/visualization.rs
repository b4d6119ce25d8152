use annotator_core::readiness::{Readiness, ReadinessPoll, ReadinessPolicy};
use annotator_core::{render_surface, Placeholder, RenderConfig, RenderMode};
use web_sys::HtmlCanvasElement;
use crate::canvas::blit::{blit_surface, clear, display_size, sync_canvas_size};
use crate::types::AudioStatus;

pub enum VizOutcome {
    Drawn,
    Placeholder(Placeholder),
    /// A newer draw started while this one was waiting for layout.
    Superseded,
}

/// Draw the recording onto `canvas` once it has a non-zero size.
///
/// The canvas is polled for up to the policy's budget; if layout never gives
/// it an extent the not-ready placeholder is returned instead.
pub async fn draw_visualization<F>(
    canvas: &HtmlCanvasElement,
    status: &AudioStatus,
    mode: RenderMode,
    config: &RenderConfig,
    is_stale: F,
) -> VizOutcome
where
    F: Fn() -> bool,
{
    let samples = match status {
        AudioStatus::Ready(audio) => audio.samples.clone(),
        AudioStatus::Empty => return placeholder(canvas, config, Placeholder::no_audio()),
        AudioStatus::Decoding => return placeholder(canvas, config, Placeholder::decoding()),
        AudioStatus::Failed(p) => return placeholder(canvas, config, p.clone()),
    };

    let mut poll = ReadinessPoll::new(ReadinessPolicy::default());
    let (width, height) = loop {
        let (w, h) = display_size(canvas);
        match poll.observe(w, h) {
            Readiness::Ready { width, height } => break (width, height),
            Readiness::Retry { after_ms } => {
                crate::sleep_ms(after_ms as i32).await;
                if is_stale() {
                    return VizOutcome::Superseded;
                }
            }
            Readiness::TimedOut => {
                log::warn!("Visualization canvas still empty after {} ms", poll.waited_ms());
                return VizOutcome::Placeholder(Placeholder::not_ready());
            }
        }
    };

    sync_canvas_size(canvas, width, height);
    match render_surface(Some(&samples[..]), width, height, mode, config) {
        Ok(surface) => {
            blit_surface(canvas, &surface);
            VizOutcome::Drawn
        }
        Err(p) => placeholder(canvas, config, p),
    }
}

fn placeholder(canvas: &HtmlCanvasElement, config: &RenderConfig, p: Placeholder) -> VizOutcome {
    let (w, h) = display_size(canvas);
    if w > 0 && h > 0 {
        sync_canvas_size(canvas, w, h);
        clear(canvas, config.background);
    }
    VizOutcome::Placeholder(p)
}
