//! Component-level mouse interactivity.
//!
//! Columns register their screen regions during render, and mouse events
//! are routed to the column under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a column:
//! registry.register(InteractiveRegion::column(Column::Day, ClickRegion::from(area)));
//!
//! // In the mouse handler:
//! let action = registry.handle_press(x, y);
//! ```

use ratatui::layout::Rect;

use crate::app::Column;
use crate::events::Action;

/// Screen rectangle used for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// A column's region on screen.
#[derive(Debug, Clone, Copy)]
pub struct InteractiveRegion {
    pub column: Column,
    pub bounds: ClickRegion,
    /// Whether a press starts a drag (digits only take wheel ticks)
    pub draggable: bool,
}

impl InteractiveRegion {
    /// A wheel column: draggable and scrollable
    pub fn column(column: Column, bounds: ClickRegion) -> Self {
        Self {
            column,
            bounds,
            draggable: true,
        }
    }

    /// A digit column: scrollable and focusable only
    pub fn digit(column: Column, bounds: ClickRegion) -> Self {
        Self {
            draggable: false,
            ..Self::column(column, bounds)
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Region under (x, y); later registrations draw on top and win
    pub fn region_at(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions.iter().rev().find(|r| r.contains(x, y))
    }

    /// Press: starts a drag on wheels, focuses digits
    pub fn handle_press(&self, x: u16, y: u16) -> Action {
        match self.region_at(x, y) {
            Some(region) if region.draggable => Action::DragStart {
                column: region.column,
                row: y,
            },
            Some(region) => Action::Focus(region.column),
            None => Action::None,
        }
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.region_at(x, y)
            .map(|r| Action::ScrollUp(r.column))
            .unwrap_or(Action::None)
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.region_at(x, y)
            .map(|r| Action::ScrollDown(r.column))
            .unwrap_or(Action::None)
    }
}
