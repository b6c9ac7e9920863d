use tracing::{debug, warn};

use crate::charts::{compute_marker_lines, visible_event_count};
use crate::core::{PlayerSlot, TimeWindow};
use crate::extensions::CursorUpdate;
use crate::interaction::{BrushFrame, BrushPhase};
use crate::render::Renderer;

use super::ViewerEngine;

impl<R: Renderer> ViewerEngine<R> {
    #[must_use]
    pub fn brush_phase(&self) -> BrushPhase {
        self.cursor.brush_phase()
    }

    #[must_use]
    pub fn brush_range(&self) -> Option<TimeWindow> {
        self.cursor.brush_range()
    }

    /// Starts a brush gesture on the aggregate view at a column-local offset.
    ///
    /// A new gesture replaces any previous selection.
    pub fn brush_start(&mut self, local_x: f64) -> BrushFrame {
        let anchor = self.aggregate.time.pixel_to_time_index(local_x);
        self.cursor.on_brush_start(anchor);
        self.apply_brush_window(TimeWindow::new(anchor, anchor))
    }

    /// Extends the active gesture; ignored when no gesture is in progress.
    pub fn brush_move(&mut self, local_x: f64) -> Option<BrushFrame> {
        let anchor = self.cursor.brush_anchor()?;
        let current = self.aggregate.time.pixel_to_time_index(local_x);
        Some(self.apply_brush_window(TimeWindow::new(anchor, current)))
    }

    /// Finishes the gesture; the selection persists until cleared or replaced.
    pub fn brush_end(&mut self, local_x: f64) -> Option<BrushFrame> {
        let frame = self.brush_move(local_x);
        self.cursor.on_brush_end();
        frame
    }

    /// Drops the selection and shows the whole match again.
    pub fn brush_clear(&mut self) -> BrushFrame {
        self.cursor.on_brush_clear(self.data.duration());
        self.brush_pass()
    }

    /// Applies a complete selection between two column-local offsets.
    pub fn brush_select(&mut self, start_x: f64, end_x: f64) -> BrushFrame {
        self.brush_start(start_x);
        let current = self.aggregate.time.pixel_to_time_index(end_x);
        let anchor = self.cursor.brush_anchor().unwrap_or(current);
        let frame = self.apply_brush_window(TimeWindow::new(anchor, current));
        self.cursor.on_brush_end();
        frame
    }

    fn apply_brush_window(&mut self, window: TimeWindow) -> BrushFrame {
        self.cursor.set_brush_range(window, self.data.duration());
        self.brush_pass()
    }

    /// Derives every brush-dependent view from one read of the brush range.
    fn brush_pass(&mut self) -> BrushFrame {
        let window = self.cursor.snapshot().effective_window(self.data.duration());
        self.scales.set_time_window(window);

        let visible_events = [
            visible_event_count(&self.data, PlayerSlot::First, window),
            visible_event_count(&self.data, PlayerSlot::Second, window),
        ];
        debug!(
            start = window.start,
            end = window.end,
            p1_visible = visible_events[0],
            p2_visible = visible_events[1],
            "brush window applied"
        );

        self.refresh_hover_markers();

        let frame = BrushFrame {
            window,
            visible_events,
        };
        self.dispatch_cursor_update(CursorUpdate::Brushed(frame));
        if let Some(hover) = self.last_hover.clone() {
            self.dispatch_cursor_update(CursorUpdate::Hovered(&hover));
        }
        frame
    }

    /// Re-projects the detail markers of an active hover after the detail
    /// window changed.
    fn refresh_hover_markers(&mut self) {
        let Some(time_index) = self.last_hover.as_ref().map(|hover| hover.time_index) else {
            return;
        };
        match compute_marker_lines(
            &self.layout,
            self.scales.time_scale(),
            self.aggregate.time,
            time_index,
        ) {
            Ok(markers) => {
                if let Some(hover) = self.last_hover.as_mut() {
                    hover.markers = markers;
                }
            }
            Err(err) => warn!(error = %err, time_index, "keeping stale hover markers"),
        }
    }
}
