//! Mouse event handling.
//!
//! Wheel columns register their areas in the interaction registry during
//! render. Presses and wheel ticks are hit-tested there; drags and releases
//! belong to whichever column the press started on.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_press(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => Action::DragMove { row: y },
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => Action::DragEnd,
        _ => Action::None,
    }
}
