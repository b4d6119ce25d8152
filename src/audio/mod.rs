pub mod decoder;
pub mod loader;
