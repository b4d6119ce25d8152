//! Rendering and data model behind the phoneme annotator.
//!
//! Everything here is plain Rust with no browser dependency: the web crate
//! feeds decoded samples in and blits the resulting [`raster::RasterSurface`].

pub mod annotation;
pub mod arpabet;
pub mod canvas;
pub mod config;
pub mod decode;
pub mod export;
pub mod raster;
pub mod readiness;
pub mod session;
pub mod types;

pub use canvas::{render, render_surface, RenderOutcome};
pub use config::RenderConfig;
pub use raster::RasterSurface;
pub use types::{DecodedAudio, Placeholder, PlaceholderKind, RenderMode, RenderRequest};
