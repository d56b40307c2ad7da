//! Half-block canvas widget
//!
//! Each terminal cell shows two framebuffer pixels: the upper one as the
//! foreground of `▀` and the lower one as the background. Labels are written
//! on top, keeping the averaged pixel color behind each glyph. The cells under
//! the cursor are repainted last so no label hides it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use sparkquiz_core::color::Rgb;
use sparkquiz_core::constants::cursor;
use sparkquiz_core::Vec2;
use unicode_width::UnicodeWidthStr;

use super::raster::{CellMetrics, Framebuffer, Label};

const UPPER_HALF: char = '▀';

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Cells the cursor can touch around `pointer`, in canvas coordinates
pub fn cursor_cells(metrics: CellMetrics, pointer: Vec2) -> Rect {
    let reach = Vec2::new(cursor::EXTENT, cursor::EXTENT);
    let (left, top) = metrics.cell_at(pointer - reach);
    let (right, bottom) = metrics.cell_at(pointer + reach);
    let clamp = |v: i32| v.clamp(0, u16::MAX as i32) as u16;
    let (x, y) = (clamp(left), clamp(top));
    Rect::new(
        x,
        y,
        clamp(right).saturating_add(1).saturating_sub(x),
        clamp(bottom).saturating_add(1).saturating_sub(y),
    )
}

pub struct QuizCanvas<'a> {
    framebuffer: &'a Framebuffer,
    labels: &'a [Label],
    cursor: Option<Rect>,
}

impl<'a> QuizCanvas<'a> {
    pub fn new(framebuffer: &'a Framebuffer, labels: &'a [Label]) -> Self {
        Self {
            framebuffer,
            labels,
            cursor: None,
        }
    }

    /// Keep these cells as plain pixels, above any label
    pub fn cursor(mut self, cells: Option<Rect>) -> Self {
        self.cursor = cells;
        self
    }

    fn paint_cell(&self, col: u16, row: u16, area: Rect, buf: &mut Buffer) {
        if col >= area.width.min(self.framebuffer.width())
            || row >= area.height.min(self.framebuffer.height().div_ceil(2))
        {
            return;
        }
        let top = self.framebuffer.get(col, row * 2);
        let bottom = self.framebuffer.get(col, row * 2 + 1);
        if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
            cell.set_char(UPPER_HALF)
                .set_style(Style::reset().fg(to_color(top)).bg(to_color(bottom)));
        }
    }

    fn paint_pixels(&self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                self.paint_cell(col, row, area, buf);
            }
        }
    }

    fn paint_label(&self, label: &Label, area: Rect, buf: &mut Buffer) {
        if label.row < 0 || label.row >= area.height as i32 {
            return;
        }
        let row = label.row as u16;

        // Clip on the left by dropping leading characters
        let mut col = label.col;
        let mut text = label.text.as_str();
        while col < 0 {
            let mut chars = text.chars();
            let Some(c) = chars.next() else {
                return;
            };
            col += c.to_string().width().max(1) as i32;
            text = chars.as_str();
        }
        if col >= area.width as i32 || text.is_empty() {
            return;
        }
        let col = col as u16;
        let available = (area.width - col) as usize;
        let span = text.width().min(available) as u16;

        // Behind each glyph, the average of the two half pixels
        for dx in 0..span {
            let x = col + dx;
            let top = self.framebuffer.get(x, row * 2);
            let bottom = self.framebuffer.get(x, row * 2 + 1);
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + row)) {
                cell.set_char(' ').set_bg(to_color(top.lerp(bottom, 0.5)));
            }
        }

        let mut style = Style::default().fg(to_color(label.color));
        if label.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_stringn(area.x + col, area.y + row, text, available, style);
    }
}

impl Widget for QuizCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paint_pixels(area, buf);
        for label in self.labels {
            self.paint_label(label, area, buf);
        }
        if let Some(cells) = self.cursor {
            for row in cells.top()..cells.bottom() {
                for col in cells.left()..cells.right() {
                    self.paint_cell(col, row, area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framebuffer() -> Framebuffer {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill(Rgb::WHITE);
        fb.blend(0, 0, Rgb::new(255, 0, 0), 255);
        fb.blend(0, 1, Rgb::new(0, 0, 255), 255);
        fb
    }

    #[test]
    fn cells_carry_upper_and_lower_pixels() {
        let fb = framebuffer();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        QuizCanvas::new(&fb, &[]).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
        assert_eq!(buf[(3, 1)].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn labels_overlay_text() {
        let fb = framebuffer();
        let labels = vec![Label {
            col: 1,
            row: 1,
            text: "hi".to_string(),
            color: Rgb::BLACK,
            bold: true,
        }];
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        QuizCanvas::new(&fb, &labels).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "h");
        assert_eq!(buf[(2, 1)].symbol(), "i");
        assert_eq!(buf[(1, 1)].fg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 1)].bg, Color::Rgb(255, 255, 255));
        assert!(buf[(1, 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(3, 1)].symbol(), "▀");
    }

    #[test]
    fn labels_are_clipped_to_area() {
        let fb = framebuffer();
        let labels = vec![
            Label {
                col: -2,
                row: 0,
                text: "abcdef".to_string(),
                color: Rgb::BLACK,
                bold: false,
            },
            Label {
                col: 0,
                row: 7,
                text: "gone".to_string(),
                color: Rgb::BLACK,
                bold: false,
            },
        ];
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        QuizCanvas::new(&fb, &labels).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "c");
        assert_eq!(buf[(3, 0)].symbol(), "f");
    }

    #[test]
    fn cursor_cells_stay_above_labels() {
        let fb = framebuffer();
        let labels = vec![Label {
            col: 0,
            row: 0,
            text: "abcd".to_string(),
            color: Rgb::BLACK,
            bold: true,
        }];
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        QuizCanvas::new(&fb, &labels)
            .cursor(Some(Rect::new(0, 0, 2, 1)))
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "▀");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
        assert!(!buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(1, 0)].symbol(), "▀");
        assert_eq!(buf[(2, 0)].symbol(), "c");
    }

    #[test]
    fn cursor_cells_cover_the_ring() {
        let metrics = CellMetrics::default();
        // Pointer in the middle of cell (10, 5): the ring reaches one cell
        // to each side and spills into the rows above and below
        let cells = cursor_cells(metrics, metrics.cell_center(10, 5));
        assert_eq!(cells, Rect::new(9, 4, 3, 3));

        let corner = cursor_cells(metrics, Vec2::new(0.0, 0.0));
        assert_eq!((corner.x, corner.y), (0, 0));
    }
}
