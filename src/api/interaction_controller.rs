use tracing::{trace, warn};

use crate::charts::{build_tooltip, compute_marker_lines, tooltip_rows};
use crate::core::{ScreenPoint, TimeScale};
use crate::extensions::CursorUpdate;
use crate::interaction::{HoverFrame, HoverMode, SurfaceKind};
use crate::render::Renderer;

use super::ViewerEngine;

impl<R: Renderer> ViewerEngine<R> {
    #[must_use]
    pub fn hover_mode(&self) -> HoverMode {
        self.cursor.mode()
    }

    /// Time scale a surface maps pointer offsets with.
    #[must_use]
    pub fn time_scale_for(&self, surface: SurfaceKind) -> TimeScale {
        match surface {
            SurfaceKind::CategoryRows => self.scales.time_scale(),
            SurfaceKind::Aggregate => self.aggregate.time,
        }
    }

    /// Pointer entered an interactive surface.
    ///
    /// The tooltip is prefilled with the first sample until the first move.
    pub fn pointer_enter(&mut self, surface: SurfaceKind, pointer: ScreenPoint) -> bool {
        trace!(?surface, "pointer entered");
        self.commit_hover(surface, 0, sanitize_pointer(pointer))
    }

    /// Runs one hover pass.
    ///
    /// `local_x` is the pointer offset inside the hovered player column and
    /// `pointer` its position on screen. Returns `false` when the frame was
    /// skipped; the previous hover frame then stays in place.
    pub fn pointer_move(&mut self, surface: SurfaceKind, local_x: f64, pointer: ScreenPoint) -> bool {
        let time_index = self.time_scale_for(surface).pixel_to_time_index(local_x);
        trace!(?surface, local_x, time_index, "hover pass");
        self.commit_hover(surface, time_index, sanitize_pointer(pointer))
    }

    fn commit_hover(&mut self, surface: SurfaceKind, time_index: usize, pointer: ScreenPoint) -> bool {
        let Some(frame) = self.build_hover_frame(surface, time_index, pointer) else {
            return false;
        };

        self.cursor.on_hover(time_index, surface, pointer);
        self.dispatch_cursor_update(CursorUpdate::Hovered(&frame));
        self.last_hover = Some(frame);
        true
    }

    /// Pointer left every interactive surface: markers and tooltip hide.
    pub fn pointer_leave(&mut self) {
        self.cursor.on_pointer_leave();
        self.last_hover = None;
        trace!("pointer left");
        self.dispatch_cursor_update(CursorUpdate::Cleared);
    }

    pub(super) fn build_hover_frame(
        &self,
        surface: SurfaceKind,
        time_index: usize,
        pointer: ScreenPoint,
    ) -> Option<HoverFrame> {
        let rows = match tooltip_rows(&self.data, self.scales.palette(), time_index) {
            Ok(rows) => rows,
            Err(warning) => {
                warn!(%warning, "skipping hover frame");
                return None;
            }
        };

        let markers = match compute_marker_lines(
            &self.layout,
            self.scales.time_scale(),
            self.aggregate.time,
            time_index,
        ) {
            Ok(markers) => markers,
            Err(err) => {
                warn!(error = %err, time_index, "skipping hover frame: marker projection failed");
                return None;
            }
        };

        let tooltip = build_tooltip(
            time_index,
            rows,
            pointer,
            self.screen,
            self.config.tooltip_panel,
            self.config.tooltip_placement,
        );

        Some(HoverFrame {
            time_index,
            surface,
            pointer,
            markers,
            tooltip,
        })
    }
}

fn sanitize_pointer(pointer: ScreenPoint) -> ScreenPoint {
    let finite = |value: f64| if value.is_finite() { value } else { 0.0 };
    ScreenPoint::new(finite(pointer.x), finite(pointer.y))
}
