//! Software rasterizer for draw commands
//!
//! Shapes are blended into an RGB framebuffer with two pixels per terminal
//! cell (upper and lower half). Text is not rasterized; it is laid out into
//! cell-aligned [`Label`]s that the canvas widget overlays afterwards.

use sparkquiz_core::color::Rgb;
use sparkquiz_core::render::TextStyle;
use sparkquiz_core::{DrawCommand, Rect, TextAlign, Vec2, Viewport};
use unicode_width::UnicodeWidthStr;

// ============================================================================
// CONSTANTS & CONFIGURATION
// ============================================================================

/// Units per framebuffer pixel on large terminals
pub const BASE_UNITS_PER_PIXEL: f32 = 8.0;

/// Smallest logical height the quiz layout is given. Below this the four
/// option boxes and the feedback caption no longer fit under the question.
pub const MIN_LOGICAL_HEIGHT: f32 = 540.0;

/// Mapping between terminal cells and logical units
///
/// A framebuffer pixel is square in logical units and one cell is one pixel
/// wide and two pixels tall. Short terminals get more units per pixel so the
/// logical viewport never drops below [`MIN_LOGICAL_HEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub units_per_pixel: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            units_per_pixel: BASE_UNITS_PER_PIXEL,
        }
    }
}

impl CellMetrics {
    pub fn for_terminal(rows: u16) -> Self {
        let pixel_rows = (rows as f32 * 2.0).max(1.0);
        Self {
            units_per_pixel: BASE_UNITS_PER_PIXEL.max(MIN_LOGICAL_HEIGHT / pixel_rows),
        }
    }

    pub fn cell_width(self) -> f32 {
        self.units_per_pixel
    }

    pub fn cell_height(self) -> f32 {
        self.units_per_pixel * 2.0
    }

    pub fn viewport(self, cols: u16, rows: u16) -> Viewport {
        Viewport::new(
            cols as f32 * self.cell_width(),
            rows as f32 * self.cell_height(),
        )
    }

    /// Logical point at the center of cell (`col`, `row`)
    pub fn cell_center(self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_width(),
            (row as f32 + 0.5) * self.cell_height(),
        )
    }

    /// Cell containing a logical point
    pub fn cell_at(self, point: Vec2) -> (i32, i32) {
        (
            (point.x / self.cell_width()).floor() as i32,
            (point.y / self.cell_height()).floor() as i32,
        )
    }
}

/// Logical viewport for a terminal of `cols` x `rows` cells
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    CellMetrics::for_terminal(rows).viewport(cols, rows)
}

// ============================================================================
// FRAMEBUFFER
// ============================================================================

/// Row-major opaque pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when the size is unchanged
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgb::BLACK; width as usize * height as usize];
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Pixel at (x, y); black outside the buffer
    pub fn get(&self, x: u16, y: u16) -> Rgb {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize]
        } else {
            Rgb::BLACK
        }
    }

    /// Blend `color` over the pixel at (x, y). Out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 || alpha == 0 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = if alpha == 255 {
            color
        } else {
            self.pixels[idx].lerp(color, alpha as f32 / 255.0)
        };
    }
}

// ============================================================================
// TEXT LABELS
// ============================================================================

/// One line of text anchored to a terminal cell
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub col: i32,
    pub row: i32,
    pub text: String,
    pub color: Rgb,
    pub bold: bool,
}

#[allow(clippy::too_many_arguments)]
fn layout_text(
    metrics: CellMetrics,
    position: Vec2,
    text: &str,
    color: Rgb,
    align: TextAlign,
    style: TextStyle,
    max_width: Option<f32>,
    labels: &mut Vec<Label>,
) {
    let lines: Vec<String> = match max_width {
        Some(width) => {
            let cells = ((width / metrics.cell_width()).floor() as usize).max(1);
            textwrap::wrap(text, cells)
                .into_iter()
                .map(|line| line.into_owned())
                .collect()
        }
        None => vec![text.to_string()],
    };
    if lines.is_empty() {
        return;
    }

    let (anchor_col, anchor_row) = metrics.cell_at(position);
    let first_row = match align {
        TextAlign::Center => anchor_row,
        TextAlign::Left => anchor_row - (lines.len() as i32 - 1) / 2,
    };
    let bold = matches!(style, TextStyle::Bold | TextStyle::Heading);

    for (i, line) in lines.into_iter().enumerate() {
        let col = match align {
            TextAlign::Center => anchor_col - (line.width() as i32) / 2,
            TextAlign::Left => anchor_col,
        };
        labels.push(Label {
            col,
            row: first_row + i as i32,
            text: line,
            color,
            bold,
        });
    }
}

// ============================================================================
// SHAPES
// ============================================================================

/// Logical point to fractional pixel coordinates
fn to_pixels(p: Vec2, upp: f32) -> (f32, f32) {
    (p.x / upp, p.y / upp)
}

/// Pixel range covering [lo, hi) in pixel space, clamped to the buffer
fn span(lo: f32, hi: f32, limit: u16) -> std::ops::Range<i32> {
    let start = lo.floor().max(0.0) as i32;
    let end = (hi.ceil() as i32).min(limit as i32);
    start..end.max(start)
}

/// Signed distance from a pixel-space point to a rounded rectangle
fn rounded_rect_distance(px: f32, py: f32, rect: Rect, radius: f32) -> f32 {
    let radius = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let center = rect.center();
    let qx = (px - center.x).abs() - (rect.w / 2.0 - radius);
    let qy = (py - center.y).abs() - (rect.h / 2.0 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

fn rect_to_pixels(rect: Rect, upp: f32) -> Rect {
    Rect::new(rect.x / upp, rect.y / upp, rect.w / upp, rect.h / upp)
}

/// Tiny shapes still light the pixel under their center
fn plot_center(fb: &mut Framebuffer, center: (f32, f32), color: Rgb, alpha: u8) {
    fb.blend(center.0.floor() as i32, center.1.floor() as i32, color, alpha);
}

fn fill_rect(fb: &mut Framebuffer, upp: f32, rect: Rect, radius: f32, color: Rgb, alpha: u8) {
    let r = rect_to_pixels(rect, upp);
    let radius = radius / upp;
    if r.w < 1.0 && r.h < 1.0 {
        let c = r.center();
        plot_center(fb, (c.x, c.y), color, alpha);
        return;
    }
    for y in span(r.y, r.y + r.h, fb.height()) {
        for x in span(r.x, r.x + r.w, fb.width()) {
            if rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, r, radius) <= 0.0 {
                fb.blend(x, y, color, alpha);
            }
        }
    }
}

fn stroke_rect(
    fb: &mut Framebuffer,
    upp: f32,
    rect: Rect,
    radius: f32,
    color: Rgb,
    alpha: u8,
    stroke: f32,
) {
    let r = rect_to_pixels(rect, upp);
    let radius = radius / upp;
    let width = (stroke / upp).max(1.0);
    for y in span(r.y - 1.0, r.y + r.h + 1.0, fb.height()) {
        for x in span(r.x - 1.0, r.x + r.w + 1.0, fb.width()) {
            let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, r, radius);
            if d <= 0.0 && d > -width {
                fb.blend(x, y, color, alpha);
            }
        }
    }
}

fn fill_ellipse(
    fb: &mut Framebuffer,
    upp: f32,
    center: Vec2,
    radii: Vec2,
    color: Rgb,
    alpha: u8,
) {
    let (cx, cy) = to_pixels(center, upp);
    let rx = radii.x / upp;
    let ry = radii.y / upp;
    if rx < 0.5 || ry < 0.5 {
        plot_center(fb, (cx, cy), color, alpha);
        return;
    }
    for y in span(cy - ry, cy + ry, fb.height()) {
        for x in span(cx - rx, cx + rx, fb.width()) {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                fb.blend(x, y, color, alpha);
            }
        }
    }
}

fn stroke_circle(
    fb: &mut Framebuffer,
    upp: f32,
    center: Vec2,
    radius: f32,
    color: Rgb,
    alpha: u8,
    stroke: f32,
) {
    let (cx, cy) = to_pixels(center, upp);
    let r = radius / upp;
    if r < 0.5 {
        plot_center(fb, (cx, cy), color, alpha);
        return;
    }
    let half = (stroke / upp / 2.0).max(0.5);
    let outer = r + half;
    for y in span(cy - outer, cy + outer, fb.height()) {
        for x in span(cx - outer, cx + outer, fb.width()) {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if ((dx * dx + dy * dy).sqrt() - r).abs() <= half {
                fb.blend(x, y, color, alpha);
            }
        }
    }
}

fn draw_line(fb: &mut Framebuffer, upp: f32, from: Vec2, to: Vec2, color: Rgb, alpha: u8) {
    let (x0, y0) = to_pixels(from, upp);
    let (x1, y1) = to_pixels(to, upp);
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        fb.blend(x.floor() as i32, y.floor() as i32, color, alpha);
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Paint `commands` in order and return the text labels they produced
pub fn rasterize(
    commands: &[DrawCommand],
    metrics: CellMetrics,
    fb: &mut Framebuffer,
) -> Vec<Label> {
    let mut labels = Vec::new();
    let upp = metrics.units_per_pixel;

    for command in commands {
        if command.is_invisible() {
            continue;
        }
        match command {
            DrawCommand::Clear(color) => fb.fill(*color),
            DrawCommand::Rect {
                rect,
                radius,
                color,
                alpha,
            } => fill_rect(fb, upp, *rect, *radius, *color, *alpha),
            DrawCommand::RectOutline {
                rect,
                radius,
                color,
                alpha,
                stroke,
            } => stroke_rect(fb, upp, *rect, *radius, *color, *alpha, *stroke),
            DrawCommand::Circle {
                center,
                radius,
                color,
                alpha,
            } => fill_ellipse(fb, upp, *center, Vec2::new(*radius, *radius), *color, *alpha),
            DrawCommand::CircleOutline {
                center,
                radius,
                color,
                alpha,
                stroke,
            } => stroke_circle(fb, upp, *center, *radius, *color, *alpha, *stroke),
            DrawCommand::Ellipse {
                center,
                radii,
                color,
                alpha,
            } => fill_ellipse(fb, upp, *center, *radii, *color, *alpha),
            DrawCommand::Line {
                from,
                to,
                color,
                alpha,
                ..
            } => draw_line(fb, upp, *from, *to, *color, *alpha),
            DrawCommand::Text {
                position,
                text,
                color,
                align,
                style,
                max_width,
            } => layout_text(
                metrics,
                *position,
                text,
                *color,
                *align,
                *style,
                *max_width,
                &mut labels,
            ),
        }
    }

    labels
}
