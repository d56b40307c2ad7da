//! Proportional screen layout
//!
//! Every rectangle is derived from the viewport size alone. A resize throws
//! the old geometry away and recomputes it; nothing is cached across sizes.

use crate::constants::layout::*;
use crate::geometry::{Rect, Vec2, Viewport};
use crate::questions::OPTION_COUNT;

/// Gap between the last option box and the feedback caption
const FEEDBACK_OFFSET: f32 = 24.0;

/// Question text anchor and wrap width
const QUESTION_TOP: f32 = 0.28;
const QUESTION_MAX_WIDTH: f32 = 1000.0;

/// One answer slot on the quiz screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionBox {
    pub rect: Rect,
    /// Pointer is inside the box this frame
    pub hovered: bool,
    /// Highlight overlay opacity, decays toward 0
    pub flash: f32,
}

#[derive(Debug, Clone)]
pub struct Layout {
    viewport: Viewport,
    base_font: f32,
    boxes: [OptionBox; OPTION_COUNT],
    start_button: Rect,
    start_hovered: bool,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        let mut layout = Self {
            viewport,
            base_font: MIN_FONT,
            boxes: [OptionBox::default(); OPTION_COUNT],
            start_button: Rect::default(),
            start_hovered: false,
        };
        layout.resize(viewport);
        layout
    }

    /// Recompute every rectangle from `viewport`. Hover and flash state reset.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.base_font = (viewport.width / 50.0).clamp(MIN_FONT, MAX_FONT);

        let box_w = (viewport.width - MARGIN * 2.0).min(MAX_BOX_WIDTH).max(0.0);
        let box_h = MIN_BOX_HEIGHT.max(self.base_font * 2.4);
        let gap = MIN_BOX_GAP.max(self.base_font * 0.6);
        let x = viewport.center_x() - box_w / 2.0;
        let top = viewport.height * OPTIONS_TOP;

        for (i, slot) in self.boxes.iter_mut().enumerate() {
            *slot = OptionBox {
                rect: Rect::new(x, top + i as f32 * (box_h + gap), box_w, box_h),
                hovered: false,
                flash: 0.0,
            };
        }

        self.start_button = Rect::new(
            viewport.center_x() - START_BUTTON_WIDTH / 2.0,
            viewport.height * 0.5,
            START_BUTTON_WIDTH,
            START_BUTTON_HEIGHT,
        );
        self.start_hovered = false;

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            base_font = self.base_font,
            "Layout recomputed"
        );
    }

    /// Recompute hover flags from the pointer; no pointer means nothing is hovered
    pub fn update_hover(&mut self, pointer: Option<Vec2>) {
        for slot in &mut self.boxes {
            slot.hovered = pointer.is_some_and(|p| slot.rect.contains(p));
        }
        self.start_hovered = pointer.is_some_and(|p| self.start_button.contains(p));
    }

    /// Index of the option box containing `point`
    pub fn option_at(&self, point: Vec2) -> Option<usize> {
        self.boxes.iter().position(|b| b.rect.contains(point))
    }

    pub fn hovered_option(&self) -> Option<usize> {
        self.boxes.iter().position(|b| b.hovered)
    }

    /// Raise the flash on a box; a stronger flash already running is kept
    pub fn flash(&mut self, index: usize, intensity: f32) {
        if let Some(slot) = self.boxes.get_mut(index) {
            slot.flash = slot.flash.max(intensity);
        }
    }

    pub fn decay_flash(&mut self, amount: f32) {
        for slot in &mut self.boxes {
            slot.flash = (slot.flash - amount).max(0.0);
        }
    }

    pub fn clear_flash(&mut self) {
        for slot in &mut self.boxes {
            slot.flash = 0.0;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn base_font(&self) -> f32 {
        self.base_font
    }

    pub fn boxes(&self) -> &[OptionBox; OPTION_COUNT] {
        &self.boxes
    }

    pub fn start_button(&self) -> Rect {
        self.start_button
    }

    pub fn start_hovered(&self) -> bool {
        self.start_hovered
    }

    /// Progress bar track, centered near the top
    pub fn progress_track(&self) -> Rect {
        let w = (self.viewport.width - MARGIN * 2.0)
            .min(PROGRESS_MAX_WIDTH)
            .max(0.0);
        Rect::new(
            self.viewport.center_x() - w / 2.0,
            self.viewport.height * PROGRESS_TOP,
            w,
            PROGRESS_HEIGHT,
        )
    }

    /// Bottom-center anchor of the question text
    pub fn question_anchor(&self) -> Vec2 {
        Vec2::new(self.viewport.center_x(), self.viewport.height * QUESTION_TOP)
    }

    /// Wrap width for the question text
    pub fn question_width(&self) -> f32 {
        (self.viewport.width - MARGIN * 2.0)
            .min(QUESTION_MAX_WIDTH)
            .max(0.0)
    }

    /// Top-center anchor of the feedback caption, just below the last box
    pub fn feedback_anchor(&self) -> Vec2 {
        let last = self.boxes[OPTION_COUNT - 1].rect;
        Vec2::new(self.viewport.center_x(), last.bottom() + FEEDBACK_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_follow_proportional_rules() {
        let layout = Layout::new(Viewport::new(1000.0, 700.0));
        assert_eq!(layout.base_font(), 20.0);

        let boxes = layout.boxes();
        assert_eq!(boxes[0].rect, Rect::new(50.0, 266.0, 900.0, 56.0));
        for pair in boxes.windows(2) {
            let gap = pair[1].rect.y - pair[0].rect.bottom();
            assert!((gap - 14.0).abs() < 1e-4, "gap was {}", gap);
            assert_eq!(pair[0].rect.x, pair[1].rect.x);
        }
    }

    #[test]
    fn font_is_clamped() {
        assert_eq!(Layout::new(Viewport::new(400.0, 600.0)).base_font(), 14.0);
        assert_eq!(Layout::new(Viewport::new(2400.0, 900.0)).base_font(), 22.0);
    }

    #[test]
    fn narrow_viewport_keeps_margins() {
        let layout = Layout::new(Viewport::new(500.0, 800.0));
        let rect = layout.boxes()[0].rect;
        assert_eq!(rect.w, 436.0);
        assert_eq!(rect.x, 32.0);
    }

    #[test]
    fn resize_recomputes_and_resets_state() {
        let mut layout = Layout::new(Viewport::new(1000.0, 700.0));
        layout.flash(2, 140.0);
        layout.update_hover(Some(layout.boxes()[1].rect.center()));
        assert_eq!(layout.hovered_option(), Some(1));

        layout.resize(Viewport::new(800.0, 600.0));
        assert_eq!(layout.boxes()[0].rect.y, 228.0);
        assert_eq!(layout.boxes()[0].rect.w, 736.0);
        assert_eq!(layout.hovered_option(), None);
        assert!(layout.boxes().iter().all(|b| b.flash == 0.0));
        assert_eq!(layout.start_button(), Rect::new(290.0, 300.0, 220.0, 54.0));
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut layout = Layout::new(Viewport::new(1000.0, 700.0));
        let inside = layout.boxes()[3].rect.center();

        layout.update_hover(Some(inside));
        assert_eq!(layout.hovered_option(), Some(3));
        assert_eq!(layout.option_at(inside), Some(3));

        layout.update_hover(Some(Vec2::new(5.0, 5.0)));
        assert_eq!(layout.hovered_option(), None);

        layout.update_hover(Some(layout.start_button().center()));
        assert!(layout.start_hovered());

        layout.update_hover(None);
        assert!(!layout.start_hovered());
    }

    #[test]
    fn flash_decays_to_zero() {
        let mut layout = Layout::new(Viewport::new(1000.0, 700.0));
        layout.flash(0, 140.0);
        layout.flash(1, 80.0);
        layout.flash(7, 80.0);

        for _ in 0..8 {
            layout.decay_flash(10.0);
        }
        assert_eq!(layout.boxes()[0].flash, 60.0);
        assert_eq!(layout.boxes()[1].flash, 0.0);

        for _ in 0..10 {
            layout.decay_flash(10.0);
        }
        assert!(layout.boxes().iter().all(|b| b.flash == 0.0));
    }

    #[test]
    fn feedback_sits_below_last_box() {
        let layout = Layout::new(Viewport::new(1000.0, 700.0));
        let last = layout.boxes()[3].rect;
        assert_eq!(layout.feedback_anchor(), Vec2::new(500.0, last.bottom() + 24.0));
    }
}
