//! Scene composition
//!
//! Paint order per frame: background, cursor trail, the active screen,
//! particles, ripples, and the cursor on top of everything.

use crate::color::{alpha, palette, Rgb};
use crate::constants::cursor;
use crate::geometry::{Rect, Vec2};
use crate::presenter::Presenter;
use crate::questions::OPTION_LABELS;
use crate::render::{DrawCommand, TextAlign, TextStyle};
use crate::session::Screen;

const TITLE: &str = "Interactive Quiz";
const SUBTITLE: &str = "Questions load from a CSV file; your score picks the celebration";
const START_LABEL: &str = "Start";

const CORRECT_CAPTION: &str = "Correct! Well done!";
const WRONG_CAPTION: &str = "Not quite, keep going!";

const SCORE_HEADING: &str = "Your score";
const RESTART_HINT: &str = "Press R to restart";

const BOX_RADIUS: f32 = 12.0;
const BOX_SHADOW_OFFSET: f32 = 6.0;
const BOX_LABEL_PAD: f32 = 18.0;
const BUTTON_RADIUS: f32 = 14.0;

/// Warm highlight blended into the start button
const BUTTON_HIGHLIGHT: Rgb = Rgb::from_hex(0xFFF096);
const BUTTON_LABEL: Rgb = Rgb::from_hex(0x32323C);

impl Presenter {
    /// Build this frame's draw list
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(256);
        out.push(DrawCommand::Clear(palette::BACKGROUND));

        if self.show_trail {
            self.effects.trail.draw(&mut out);
        }

        match self.session.screen() {
            Screen::Intro => self.draw_intro(&mut out),
            Screen::Quiz => self.draw_quiz(&mut out),
            Screen::Result => self.draw_result(&mut out),
        }

        self.effects.particles.draw(self.frame, &mut out);
        self.effects.ripples.draw(&mut out);
        self.draw_cursor(&mut out);
        out
    }

    fn draw_intro(&self, out: &mut Vec<DrawCommand>) {
        let viewport = self.layout.viewport();
        let cx = viewport.center_x();

        out.push(DrawCommand::text(
            Vec2::new(cx, viewport.height * 0.25),
            TITLE,
            palette::TEXT,
            TextStyle::Heading,
        ));
        out.push(DrawCommand::Text {
            position: Vec2::new(cx, viewport.height * 0.35),
            text: SUBTITLE.to_string(),
            color: palette::DIM,
            align: TextAlign::Center,
            style: TextStyle::Body,
            max_width: Some(self.layout.question_width()),
        });

        let button = self.layout.start_button();
        let pulse = (self.frame as f32 * 0.1).sin() * 12.0;
        let glow = if self.layout.start_hovered() { 110.0 } else { 45.0 };
        out.push(DrawCommand::Rect {
            rect: button.inflate(6.0),
            radius: BUTTON_RADIUS,
            color: palette::PRIMARY,
            alpha: alpha(glow + pulse),
        });
        out.push(DrawCommand::Rect {
            rect: button,
            radius: BUTTON_RADIUS,
            color: palette::PRIMARY.lerp(BUTTON_HIGHLIGHT, 0.4),
            alpha: 255,
        });
        out.push(DrawCommand::text(
            button.center(),
            START_LABEL,
            BUTTON_LABEL,
            TextStyle::Bold,
        ));
    }

    fn draw_quiz(&self, out: &mut Vec<DrawCommand>) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let font = self.layout.base_font();

        self.draw_progress(out);

        let anchor = self.layout.question_anchor();
        out.push(DrawCommand::Text {
            position: Vec2::new(anchor.x, anchor.y - font),
            text: question.text().to_string(),
            color: palette::TEXT,
            align: TextAlign::Center,
            style: TextStyle::Heading,
            max_width: Some(self.layout.question_width()),
        });

        let selected = self.session.selected_option();
        for (i, slot) in self.layout.boxes().iter().enumerate() {
            let rect = slot.rect;

            out.push(DrawCommand::Rect {
                rect: rect.offset(0.0, BOX_SHADOW_OFFSET),
                radius: BOX_RADIUS,
                color: palette::SHADOW,
                alpha: if slot.hovered { 80 } else { 50 },
            });
            out.push(DrawCommand::Rect {
                rect,
                radius: BOX_RADIUS,
                color: if slot.hovered {
                    Rgb::WHITE
                } else {
                    palette::OPTION_FILL
                },
                alpha: if slot.hovered { 200 } else { 160 },
            });
            out.push(DrawCommand::RectOutline {
                rect,
                radius: BOX_RADIUS,
                color: if slot.hovered {
                    palette::PRIMARY
                } else {
                    palette::OPTION_BORDER
                },
                alpha: if slot.hovered { 255 } else { 80 },
                stroke: 2.0,
            });

            if slot.flash > 0.0 {
                let color = match selected {
                    Some(_) if question.is_correct(i) => palette::CORRECT,
                    Some(picked) if picked == i => palette::WRONG,
                    _ => palette::PRIMARY,
                };
                out.push(DrawCommand::Rect {
                    rect,
                    radius: BOX_RADIUS,
                    color,
                    alpha: alpha(slot.flash),
                });
            }

            out.push(DrawCommand::Text {
                position: Vec2::new(rect.x + BOX_LABEL_PAD, rect.center().y),
                text: format!("{}. {}", OPTION_LABELS[i], question.options()[i]),
                color: palette::TEXT,
                align: TextAlign::Left,
                style: TextStyle::Body,
                max_width: Some((rect.w - BOX_LABEL_PAD * 2.0).max(0.0)),
            });

            if selected == Some(i) {
                out.push(DrawCommand::RectOutline {
                    rect: rect.inflate(3.0),
                    radius: BUTTON_RADIUS,
                    color: palette::DIM,
                    alpha: 120,
                    stroke: 3.0,
                });
            }
        }

        if let Some(correct) = self.session.last_answer_correct() {
            let (caption, color) = if correct {
                (CORRECT_CAPTION, palette::CORRECT)
            } else {
                (WRONG_CAPTION, palette::WRONG)
            };
            let anchor = self.layout.feedback_anchor();
            out.push(DrawCommand::text(
                Vec2::new(anchor.x, anchor.y + font * 0.5),
                caption,
                color,
                TextStyle::Bold,
            ));
        }
    }

    fn draw_progress(&self, out: &mut Vec<DrawCommand>) {
        let track = self.layout.progress_track();
        let index = self.session.current_index();
        let total = self.session.question_count();

        out.push(DrawCommand::Rect {
            rect: track,
            radius: 6.0,
            color: palette::OPTION_BORDER,
            alpha: 90,
        });

        let filled = if total > 0 {
            track.w * index as f32 / total as f32
        } else {
            0.0
        };
        if filled > 0.0 {
            out.push(DrawCommand::Rect {
                rect: Rect::new(track.x, track.y, filled, track.h),
                radius: 6.0,
                color: palette::PRIMARY,
                alpha: 255,
            });
        }

        let glow = 20.0 + 10.0 * (self.frame as f32 * 0.15).sin();
        out.push(DrawCommand::Rect {
            rect: track.inflate(3.0),
            radius: 8.0,
            color: palette::PRIMARY,
            alpha: alpha(glow),
        });

        out.push(DrawCommand::text(
            Vec2::new(
                track.center().x,
                track.y - 10.0 - self.layout.base_font() * 0.5,
            ),
            format!("Question {} / {}", index + 1, total),
            palette::TEXT,
            TextStyle::Body,
        ));
    }

    fn draw_result(&self, out: &mut Vec<DrawCommand>) {
        let viewport = self.layout.viewport();
        let cx = viewport.center_x();
        let score = self.session.score();
        let total = self.session.question_count();
        let percent = (self.session.ratio() * 100.0).floor() as u32;

        out.push(DrawCommand::text(
            Vec2::new(cx, viewport.height * 0.22),
            SCORE_HEADING,
            palette::TEXT,
            TextStyle::Heading,
        ));
        out.push(DrawCommand::text(
            Vec2::new(cx, viewport.height * 0.32),
            format!("{} / {} ({}%)", score, total, percent),
            palette::PRIMARY,
            TextStyle::Heading,
        ));

        let mode = self.results.mode().unwrap_or_else(|| self.session.result_mode());
        out.push(DrawCommand::text(
            Vec2::new(cx, viewport.height * 0.44),
            mode.caption(),
            palette::TEXT,
            TextStyle::Bold,
        ));

        self.results.draw(out);

        out.push(DrawCommand::text(
            Vec2::new(cx, viewport.height - 48.0),
            RESTART_HINT,
            palette::DIM,
            TextStyle::Body,
        ));
    }

    fn draw_cursor(&self, out: &mut Vec<DrawCommand>) {
        let Some(pointer) = self.pointer else {
            return;
        };
        out.push(DrawCommand::CircleOutline {
            center: pointer,
            radius: cursor::RING_RADIUS + cursor::RING_PULSE * (self.frame as f32 * 0.2).sin(),
            color: palette::CURSOR_RING,
            alpha: 220,
            stroke: cursor::RING_STROKE,
        });
        out.push(DrawCommand::Circle {
            center: pointer,
            radius: cursor::DOT_RADIUS,
            color: palette::CURSOR_DOT,
            alpha: 220,
        });
    }
}
