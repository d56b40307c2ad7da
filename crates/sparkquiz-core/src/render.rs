//! Backend-agnostic draw commands
//!
//! [`Presenter::render`](crate::Presenter::render) produces a flat list of
//! these every frame, in painter's order. A front end only has to know how to
//! rasterize eight primitives.

use crate::color::Rgb;
use crate::geometry::{Rect, Vec2};

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `position` is the left edge, vertically centered
    Left,
    /// `position` is the center of the first line
    #[default]
    Center,
}

/// Relative text size, resolved by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Body,
    Bold,
    Heading,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole viewport
    Clear(Rgb),
    /// Filled rectangle with rounded corners
    Rect {
        rect: Rect,
        radius: f32,
        color: Rgb,
        alpha: u8,
    },
    /// Stroked rectangle with rounded corners
    RectOutline {
        rect: Rect,
        radius: f32,
        color: Rgb,
        alpha: u8,
        stroke: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: u8,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: u8,
        stroke: f32,
    },
    /// Filled axis-aligned ellipse; `radii` are half the width and height
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Rgb,
        alpha: u8,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb,
        alpha: u8,
        stroke: f32,
    },
    Text {
        position: Vec2,
        text: String,
        color: Rgb,
        align: TextAlign,
        style: TextStyle,
        /// Wrap width in logical units, if the text may wrap
        max_width: Option<f32>,
    },
}

impl DrawCommand {
    /// Single-line text helper
    pub fn text(position: Vec2, text: impl Into<String>, color: Rgb, style: TextStyle) -> Self {
        DrawCommand::Text {
            position,
            text: text.into(),
            color,
            align: TextAlign::Center,
            style,
            max_width: None,
        }
    }

    /// True for primitives that carry a fully transparent color
    pub fn is_invisible(&self) -> bool {
        match self {
            DrawCommand::Rect { alpha, .. }
            | DrawCommand::RectOutline { alpha, .. }
            | DrawCommand::Circle { alpha, .. }
            | DrawCommand::CircleOutline { alpha, .. }
            | DrawCommand::Ellipse { alpha, .. }
            | DrawCommand::Line { alpha, .. } => *alpha == 0,
            DrawCommand::Clear(_) | DrawCommand::Text { .. } => false,
        }
    }
}
