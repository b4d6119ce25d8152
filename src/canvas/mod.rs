pub mod blit;
pub mod visualization;
