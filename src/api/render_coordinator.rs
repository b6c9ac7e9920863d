use tracing::trace;

use crate::charts::{
    project_aggregate, project_category_rows, project_markers, project_spatial_map,
    project_tooltip_panel,
};
use crate::core::PlayerSlot;
use crate::error::ViewerResult;
use crate::render::{RenderFrame, Renderer};

use super::ViewerEngine;

impl<R: Renderer> ViewerEngine<R> {
    /// Materializes the whole viewer scene for the current cursor snapshot.
    ///
    /// Maps and category rows share one detail window; the aggregate view
    /// always spans the full match.
    pub fn build_render_frame(&self) -> ViewerResult<RenderFrame> {
        let cursor = self.cursor.snapshot();
        let window = self.scales.time_scale().visible_range();
        let mut frame = RenderFrame::new(self.layout.viewport);

        for slot in PlayerSlot::BOTH {
            frame.extend(project_spatial_map(
                &self.data,
                slot,
                &self.layout,
                &self.config.map,
                self.scales.palette(),
                window,
            ));
        }
        frame.extend(project_category_rows(
            &self.data,
            &self.layout,
            &self.scales,
            &cursor,
        )?);
        frame.extend(project_aggregate(
            &self.data,
            &self.layout,
            &self.aggregate,
            self.scales.palette(),
            &cursor,
        )?);
        if let Some(hover) = &self.last_hover {
            frame.extend(project_markers(&self.layout, &hover.markers));
        }

        trace!(
            circles = frame.circles.len(),
            polygons = frame.polygons.len(),
            lines = frame.lines.len(),
            "viewer frame built"
        );
        Ok(frame)
    }

    /// Tooltip panel in panel-local coordinates; `None` while idle.
    pub fn tooltip_panel_frame(&self) -> ViewerResult<Option<RenderFrame>> {
        self.last_hover
            .as_ref()
            .map(|hover| project_tooltip_panel(&hover.tooltip, self.config.tooltip_panel))
            .transpose()
    }

    pub fn render(&mut self) -> ViewerResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }
}
