//! Terminal event translation
//!
//! Maps crossterm events onto presenter inputs. Mouse positions become the
//! logical point at the center of the reported cell under the current
//! [`CellMetrics`].

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use sparkquiz_core::Input;

use super::raster::{viewport_for, CellMetrics};

/// What the app should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Forward(Input),
    Quit,
}

pub fn translate(event: &Event, metrics: CellMetrics) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, metrics),
        Event::Resize(cols, rows) => Some(Action::Forward(Input::Resized(viewport_for(
            *cols, *rows,
        )))),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Forward(Input::Confirm)),
        KeyCode::Char(c) => Some(Action::Forward(Input::Key(c))),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, metrics: CellMetrics) -> Option<Action> {
    let point = metrics.cell_center(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Forward(Input::PointerDown(point))),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(Action::Forward(Input::PointerMoved(point)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkquiz_core::{Vec2, Viewport};

    fn translate(event: &Event) -> Option<Action> {
        super::translate(event, CellMetrics::default())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(
            translate(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn confirm_and_letters() {
        assert_eq!(
            translate(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Forward(Input::Confirm))
        );
        assert_eq!(
            translate(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::Forward(Input::Confirm))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('B'), KeyModifiers::SHIFT)),
            Some(Action::Forward(Input::Key('B')))
        );
        assert_eq!(translate(&key(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(event)), None);
    }

    #[test]
    fn mouse_maps_to_cell_centers() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2)),
            Some(Action::Forward(Input::PointerDown(Vec2::new(28.0, 40.0))))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved, 0, 0)),
            Some(Action::Forward(Input::PointerMoved(Vec2::new(4.0, 8.0))))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }

    #[test]
    fn resize_maps_to_logical_viewport() {
        assert_eq!(
            translate(&Event::Resize(100, 40)),
            Some(Action::Forward(Input::Resized(Viewport::new(800.0, 640.0))))
        );
        assert_eq!(
            translate(&Event::Resize(80, 24)),
            Some(Action::Forward(Input::Resized(Viewport::new(900.0, 540.0))))
        );
    }

    #[test]
    fn mouse_follows_scaled_cells() {
        let metrics = CellMetrics::for_terminal(24);
        assert_eq!(
            super::translate(&mouse(MouseEventKind::Moved, 2, 1), metrics),
            Some(Action::Forward(Input::PointerMoved(Vec2::new(28.125, 33.75))))
        );
    }
}
