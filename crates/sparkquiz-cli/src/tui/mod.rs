//! Terminal front end for Sparkquiz

pub mod app;
pub mod canvas;
pub mod events;
pub mod raster;

// Re-exports
pub use app::App;
