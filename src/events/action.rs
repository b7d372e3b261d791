//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App applies them to the pickers.

use crate::app::Column;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Focus ===
    /// Focus the next column
    FocusNext,
    /// Focus the previous column
    FocusPrev,
    /// Focus a clicked column
    Focus(Column),

    // === Stepping ===
    /// Move the focused column up one item
    Up,
    /// Move the focused column down one item
    Down,
    /// Mouse wheel up over a column
    ScrollUp(Column),
    /// Mouse wheel down over a column
    ScrollDown(Column),
    /// Type a value into the focused digit
    SetDigit(u8),

    // === Drag gestures ===
    /// Left button pressed on a column
    DragStart { column: Column, row: u16 },
    /// Pointer moved while pressed
    DragMove { row: u16 },
    /// Left button released
    DragEnd,

    /// No action
    None,
}
