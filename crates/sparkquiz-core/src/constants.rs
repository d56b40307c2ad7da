//! Presentation constants
//!
//! Centralized location for the timing and layout numbers shared across modules.
//! Effect-specific tuning lives next to the effect that uses it.

/// Frame-count timing. One tick is one logical frame.
pub mod timing {
    /// Frames the answer feedback stays on screen before auto-advancing
    pub const FEEDBACK_DELAY_FRAMES: u32 = 45;

    /// Intro screen emits an ambient sparkle every N frames
    pub const INTRO_SPARKLE_EVERY: u64 = 3;

    /// A hovered option emits a sparkle every N frames
    pub const HOVER_SPARKLE_EVERY: u64 = 4;

    /// Default frame interval for front ends (~60fps)
    pub const DEFAULT_FRAME_MS: u64 = 16;
}

/// Option box highlight intensities
pub mod flash {
    /// Flash applied to the box the user picked
    pub const SELECTED: f32 = 140.0;

    /// Flash applied to the true answer after a wrong pick
    pub const REVEAL: f32 = 80.0;

    /// Flash lost per frame
    pub const DECAY: f32 = 10.0;
}

/// Pointer marker drawn over everything else
pub mod cursor {
    pub const RING_RADIUS: f32 = 8.0;

    /// Ring radius swings by this much either way
    pub const RING_PULSE: f32 = 2.0;
    pub const RING_STROKE: f32 = 2.0;
    pub const DOT_RADIUS: f32 = 2.5;

    /// Farthest any cursor pixel reaches from the pointer
    pub const EXTENT: f32 = RING_RADIUS + RING_PULSE + RING_STROKE / 2.0;
}

/// Proportional layout
pub mod layout {
    /// Horizontal margin kept free on both sides
    pub const MARGIN: f32 = 32.0;

    pub const MIN_FONT: f32 = 14.0;
    pub const MAX_FONT: f32 = 22.0;

    /// Widest an option box may get
    pub const MAX_BOX_WIDTH: f32 = 900.0;
    pub const MIN_BOX_HEIGHT: f32 = 56.0;
    pub const MIN_BOX_GAP: f32 = 14.0;

    /// First option box starts at this fraction of the viewport height
    pub const OPTIONS_TOP: f32 = 0.38;

    pub const START_BUTTON_WIDTH: f32 = 220.0;
    pub const START_BUTTON_HEIGHT: f32 = 54.0;

    pub const PROGRESS_MAX_WIDTH: f32 = 800.0;
    pub const PROGRESS_HEIGHT: f32 = 12.0;
    pub const PROGRESS_TOP: f32 = 0.16;
}

/// Config and log locations
pub mod app {
    /// Config directory name (under the home directory)
    pub const CONFIG_DIR_NAME: &str = ".sparkquiz";

    pub const CONFIG_FILE_NAME: &str = "config.toml";

    pub const LOGS_DIR_NAME: &str = "logs";

    /// Question file used when neither CLI nor config names one
    pub const DEFAULT_QUESTIONS_FILE: &str = "questions.csv";
}
