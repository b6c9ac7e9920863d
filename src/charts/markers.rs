use smallvec::SmallVec;

use crate::charts::ViewLayout;
use crate::core::{PlayerSlot, TimeScale};
use crate::error::ViewerResult;
use crate::interaction::{MarkerLine, SurfaceKind};
use crate::render::{Color, LinePrimitive, RenderFrame};

const MARKER_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const MARKER_WIDTH: f64 = 1.0;

/// Computes the marker line of every surface and player column for one time.
///
/// Every marker is derived from the same `time_index`, so all charts stay
/// pixel-aligned within one interaction frame.
pub fn compute_marker_lines(
    layout: &ViewLayout,
    detail_time: TimeScale,
    aggregate_time: TimeScale,
    time_index: usize,
) -> ViewerResult<SmallVec<[MarkerLine; 4]>> {
    let mut markers = SmallVec::new();

    for surface in SurfaceKind::ALL {
        let (scale, y1, y2) = match surface {
            SurfaceKind::CategoryRows => (detail_time, layout.rows_top(), layout.rows_bottom()),
            SurfaceKind::Aggregate => (
                aggregate_time,
                layout.aggregate_plot_top,
                layout.aggregate_plot_top + layout.aggregate_plot_height,
            ),
        };
        let visible = scale.visible_range().contains_index(time_index);
        let offset = if visible {
            scale.time_to_pixel(time_index as f64)?
        } else {
            0.0
        };

        for player in PlayerSlot::BOTH {
            markers.push(MarkerLine {
                surface,
                player,
                x: layout.column_x(player) + offset,
                y1,
                y2,
                visible,
            });
        }
    }

    Ok(markers)
}

/// Projects the visible markers into line primitives.
#[must_use]
pub fn project_markers(layout: &ViewLayout, markers: &[MarkerLine]) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    frame.lines.extend(
        markers
            .iter()
            .filter(|marker| marker.visible)
            .map(|marker| {
                LinePrimitive::new(
                    marker.x,
                    marker.y1,
                    marker.x,
                    marker.y2,
                    MARKER_WIDTH,
                    MARKER_COLOR,
                )
            }),
    );
    frame
}
