//! Sparkquiz Core - Quiz state machine and animation engine
//!
//! This crate provides everything that happens between two display frames:
//! - Question model and CSV ingestion with a built-in fallback set
//! - Quiz session state machine (intro, quiz, result)
//! - Particle system, click ripples, and the cursor trail
//! - Result animations (fireworks, balloons, bubbles)
//! - Layout and render-to-draw-commands, independent of any graphics backend

pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod paths;
pub mod presenter;
mod presenter_tests;
pub mod questions;
pub mod render;
pub mod result_fx;
pub mod scene;
pub mod session;

// Re-exports for convenience
pub use color::Rgb;
pub use config::Config;
pub use error::{ConfigError, QuestionError};
pub use geometry::{Rect, Vec2, Viewport};
pub use input::Input;
pub use presenter::{Presenter, PresenterOptions};
pub use questions::{LoadReport, Question};
pub use render::{DrawCommand, TextAlign};
pub use result_fx::ResultMode;
pub use session::{QuizSession, Screen, SessionEvent};
