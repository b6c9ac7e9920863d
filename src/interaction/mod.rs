mod hover_frame;

pub use hover_frame::{BrushFrame, HoverFrame, MarkerLine, TooltipRow, TooltipState};

use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, TimeWindow};

/// Hover axis of the cursor state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    Idle,
    Hovering,
}

/// Brush axis of the cursor state machine; orthogonal to [`HoverMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushPhase {
    Inactive,
    Dragging,
}

/// Interactive chart surface a pointer event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Per-category rows; x-domain follows the brush window.
    CategoryRows,
    /// Aggregate stacked view; always spans the whole match.
    Aggregate,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 2] = [Self::CategoryRows, Self::Aggregate];
}

/// Read-only copy of the cursor handed to renderers and subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub mode: HoverMode,
    pub active_time_index: Option<usize>,
    pub active_surface: Option<SurfaceKind>,
    pub pointer: Option<ScreenPoint>,
    pub brush_phase: BrushPhase,
    pub brush_range: Option<TimeWindow>,
}

impl CursorSnapshot {
    /// Brush window, or the whole match when nothing was brushed yet.
    #[must_use]
    pub fn effective_window(&self, duration: usize) -> TimeWindow {
        self.brush_range.unwrap_or(TimeWindow::full(duration))
    }
}

/// The only mutable state shared across charts.
///
/// Written exclusively by the viewer engine's pointer and brush handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    mode: HoverMode,
    active_time_index: Option<usize>,
    active_surface: Option<SurfaceKind>,
    pointer: Option<ScreenPoint>,
    brush_phase: BrushPhase,
    brush_anchor: Option<usize>,
    brush_range: Option<TimeWindow>,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            mode: HoverMode::Idle,
            active_time_index: None,
            active_surface: None,
            pointer: None,
            brush_phase: BrushPhase::Inactive,
            brush_anchor: None,
            brush_range: None,
        }
    }
}

impl CursorState {
    #[must_use]
    pub fn mode(self) -> HoverMode {
        self.mode
    }

    #[must_use]
    pub fn active_time_index(self) -> Option<usize> {
        self.active_time_index
    }

    #[must_use]
    pub fn brush_phase(self) -> BrushPhase {
        self.brush_phase
    }

    #[must_use]
    pub fn brush_range(self) -> Option<TimeWindow> {
        self.brush_range
    }

    #[must_use]
    pub fn brush_anchor(self) -> Option<usize> {
        self.brush_anchor
    }

    #[must_use]
    pub fn snapshot(self) -> CursorSnapshot {
        CursorSnapshot {
            mode: self.mode,
            active_time_index: self.active_time_index,
            active_surface: self.active_surface,
            pointer: self.pointer,
            brush_phase: self.brush_phase,
            brush_range: self.brush_range,
        }
    }

    pub fn on_hover(&mut self, time_index: usize, surface: SurfaceKind, pointer: ScreenPoint) {
        self.mode = HoverMode::Hovering;
        self.active_time_index = Some(time_index);
        self.active_surface = Some(surface);
        self.pointer = Some(pointer);
    }

    pub fn on_pointer_leave(&mut self) {
        self.mode = HoverMode::Idle;
        self.active_time_index = None;
        self.active_surface = None;
        self.pointer = None;
    }

    pub fn on_brush_start(&mut self, anchor: usize) {
        self.brush_phase = BrushPhase::Dragging;
        self.brush_anchor = Some(anchor);
    }

    /// Stores a brushed window; degenerate windows reset to the whole match.
    pub fn set_brush_range(&mut self, window: TimeWindow, duration: usize) {
        self.brush_range = Some(if window.is_degenerate() {
            TimeWindow::full(duration)
        } else {
            window
        });
    }

    pub fn on_brush_end(&mut self) {
        self.brush_phase = BrushPhase::Inactive;
        self.brush_anchor = None;
    }

    pub fn on_brush_clear(&mut self, duration: usize) {
        self.on_brush_end();
        self.brush_range = Some(TimeWindow::full(duration));
    }
}

#[cfg(test)]
mod tests {
    use super::{BrushPhase, CursorState, HoverMode, SurfaceKind};
    use crate::core::{ScreenPoint, TimeWindow};

    #[test]
    fn leave_resets_hover_axis_only() {
        let mut state = CursorState::default();
        state.set_brush_range(TimeWindow::new(10, 20), 100);
        state.on_hover(12, SurfaceKind::Aggregate, ScreenPoint::new(5.0, 5.0));
        state.on_pointer_leave();

        assert_eq!(state.mode(), HoverMode::Idle);
        assert_eq!(state.active_time_index(), None);
        assert_eq!(state.brush_range(), Some(TimeWindow::new(10, 20)));
    }

    #[test]
    fn degenerate_brush_resets_to_full_match() {
        let mut state = CursorState::default();
        state.on_brush_start(40);
        state.set_brush_range(TimeWindow::new(40, 40), 100);
        assert_eq!(state.brush_range(), Some(TimeWindow::full(100)));
        assert_eq!(state.brush_phase(), BrushPhase::Dragging);
    }
}
