use crate::charts::{AggregateScales, ViewLayout};
use crate::core::{MatchRecord, PlayerSlot};
use crate::error::ViewerResult;
use crate::interaction::CursorSnapshot;
use crate::render::{CategoryPalette, Color, PolygonPrimitive, RectPrimitive, RenderFrame};

const BACKGROUND: Color = Color::rgb(241.0 / 255.0, 241.0 / 255.0, 241.0 / 255.0);
const BRUSH_FILL: Color = Color::rgba(0.47, 0.47, 0.47, 0.3);
const BRUSH_BORDER: Color = Color::rgb(1.0, 1.0, 1.0);
const LAYER_ALPHA: f64 = 0.8;

/// Projects the stacked category areas of both players over the whole match,
/// plus the brushed selection when one narrows the match.
///
/// Layers stack in category declaration order, first category at the bottom.
pub fn project_aggregate(
    data: &MatchRecord,
    layout: &ViewLayout,
    scales: &AggregateScales,
    palette: &CategoryPalette,
    cursor: &CursorSnapshot,
) -> ViewerResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.viewport);
    let top = layout.aggregate_plot_top;
    let duration = data.duration();

    for slot in PlayerSlot::BOTH {
        let column_x = layout.column_x(slot);
        frame.rects.push(RectPrimitive::new(
            column_x,
            top,
            layout.column_width,
            layout.aggregate_plot_height,
            BACKGROUND,
        ));

        let mut xs = Vec::with_capacity(duration + 1);
        for time in 0..=duration {
            xs.push(column_x + scales.time.time_to_pixel(time as f64)?);
        }

        let mut lower = vec![0.0; duration + 1];
        for (index, category) in data.categories().iter().enumerate() {
            let Some(series) = data.player(slot).series(&category.id) else {
                continue;
            };
            let upper: Vec<f64> = lower.iter().zip(series).map(|(l, v)| l + v).collect();

            let mut polygon = Vec::with_capacity(2 * (duration + 1));
            for (x, value) in xs.iter().zip(&upper) {
                polygon.push((*x, top + scales.magnitude.value_to_pixel(*value)?));
            }
            for (x, value) in xs.iter().zip(&lower).rev() {
                polygon.push((*x, top + scales.magnitude.value_to_pixel(*value)?));
            }

            frame.polygons.push(PolygonPrimitive::new(
                polygon,
                palette.color_at(index).with_alpha(LAYER_ALPHA),
            ));
            lower = upper;
        }

        let window = cursor.effective_window(duration);
        if window.span() < duration {
            let start = scales.time.time_to_pixel(window.start as f64)?;
            let end = scales.time.time_to_pixel(window.end as f64)?;
            frame.overlays.push(
                RectPrimitive::new(
                    column_x + start,
                    top,
                    end - start,
                    layout.aggregate_plot_height,
                    BRUSH_FILL,
                )
                .with_border(1.0, BRUSH_BORDER),
            );
        }
    }

    Ok(frame)
}
