use crate::charts::{Scales, ViewLayout};
use crate::core::{MatchRecord, PlayerSlot, series_in_time_window};
use crate::error::ViewerResult;
use crate::interaction::CursorSnapshot;
use crate::render::{
    CirclePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

const BAND_ALPHA: f64 = 0.1;
const AREA_ALPHA: f64 = 0.35;
const LINE_WIDTH: f64 = 1.5;
const LABEL_FONT_SIZE: f64 = 13.0;
const HOVER_DOT_RADIUS: f64 = 2.5;

/// Projects one row per category and player: background band, rate area and
/// rate line over the detail time window, plus a dot on the hovered sample.
///
/// The window comes from `scales`, which the engine narrows from the same
/// brush value it hands to the spatial maps.
pub fn project_category_rows(
    data: &MatchRecord,
    layout: &ViewLayout,
    scales: &Scales,
    cursor: &CursorSnapshot,
) -> ViewerResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.viewport);
    let window = scales.time_scale().visible_range();

    for row in &layout.rows {
        let category = &data.categories()[row.category_index];
        let color = scales.palette().color_at(row.category_index);
        let baseline = row.plot_top + row.plot_height;

        frame.texts.push(
            TextPrimitive::new(
                category.display_name.clone(),
                layout.label_x,
                row.plot_top,
                LABEL_FONT_SIZE,
                color,
                TextHAlign::Right,
            )
            .bold(),
        );

        for slot in PlayerSlot::BOTH {
            let column_x = layout.column_x(slot);
            frame.rects.push(RectPrimitive::new(
                column_x,
                row.plot_top,
                layout.column_width,
                row.plot_height,
                color.with_alpha(BAND_ALPHA),
            ));

            let Some(series) = data.player(slot).series(&category.id) else {
                continue;
            };

            let mut points = Vec::with_capacity(window.span() + 1);
            for (time, value) in series_in_time_window(series, window) {
                let x = column_x + scales.time2x(time as f64)?;
                let y = row.plot_top + scales.magnitude2y(value)?;
                points.push((x, y));
            }
            if points.len() < 2 {
                continue;
            }

            let mut area = Vec::with_capacity(points.len() + 2);
            area.push((points[0].0, baseline));
            area.extend(points.iter().copied());
            area.push((points[points.len() - 1].0, baseline));

            frame
                .polygons
                .push(PolygonPrimitive::new(area, color.with_alpha(AREA_ALPHA)));
            frame
                .polylines
                .push(PolylinePrimitive::new(points, LINE_WIDTH, color));

            if let Some(index) = cursor.active_time_index.filter(|i| window.contains_index(*i)) {
                if let Some(value) = series.get(index) {
                    let x = column_x + scales.time2x(index as f64)?;
                    let y = row.plot_top + scales.magnitude2y(*value)?;
                    frame
                        .circles
                        .push(CirclePrimitive::new(x, y, HOVER_DOT_RADIUS, color));
                }
            }
        }
    }

    Ok(frame)
}
