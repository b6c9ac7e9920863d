use serde::{Deserialize, Serialize};

use crate::core::{
    MatchRecord, PlayerSlot, ScreenPoint, TooltipPlacementConfig, Viewport, format_match_clock,
    position_tooltip,
};
use crate::error::{IndexOutOfRangeWarning, ViewerError, ViewerResult};
use crate::interaction::{TooltipRow, TooltipState};
use crate::render::{
    CategoryPalette, CirclePrimitive, Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const PANEL_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.95);
const PANEL_BORDER: Color = Color::rgb(0.86, 0.86, 0.86);
const TEXT_COLOR: Color = Color::rgb(0.21, 0.21, 0.21);

/// Tooltip panel geometry; height grows with the category count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipPanelConfig {
    pub width: f64,
    pub padding: f64,
    pub title_height: f64,
    pub row_height: f64,
    pub font_size_px: f64,
    pub dot_radius: f64,
}

impl Default for TooltipPanelConfig {
    fn default() -> Self {
        Self {
            width: 250.0,
            padding: 8.0,
            title_height: 24.0,
            row_height: 22.0,
            font_size_px: 12.0,
            dot_radius: 5.0,
        }
    }
}

impl TooltipPanelConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        for (value, name) in [
            (self.width, "width"),
            (self.title_height, "title_height"),
            (self.row_height, "row_height"),
            (self.font_size_px, "font_size_px"),
            (self.dot_radius, "dot_radius"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "tooltip panel `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ViewerError::InvalidData(
                "tooltip panel `padding` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn panel_height(self, rows: usize) -> f64 {
        2.0 * self.padding + self.title_height + rows as f64 * self.row_height
    }
}

/// Reads both players' values of every category at `time_index`.
///
/// The first missing sample aborts the lookup and is returned as a warning.
pub fn tooltip_rows(
    data: &MatchRecord,
    palette: &CategoryPalette,
    time_index: usize,
) -> Result<Vec<TooltipRow>, IndexOutOfRangeWarning> {
    let mut rows = Vec::with_capacity(data.categories().len());
    for (index, category) in data.categories().iter().enumerate() {
        let mut values = [0.0; 2];
        for slot in PlayerSlot::BOTH {
            let series = data.player(slot).series(&category.id).unwrap_or(&[]);
            let Some(value) = series.get(time_index) else {
                return Err(IndexOutOfRangeWarning {
                    category: category.id.clone(),
                    player: slot.index() + 1,
                    index: time_index,
                    series_len: series.len(),
                });
            };
            values[slot.index()] = *value;
        }
        rows.push(TooltipRow {
            category_id: category.id.clone(),
            display_name: category.display_name.clone(),
            color: palette.color_at(index),
            values,
        });
    }
    Ok(rows)
}

/// Builds tooltip content and its on-screen placement.
#[must_use]
pub fn build_tooltip(
    time_index: usize,
    rows: Vec<TooltipRow>,
    pointer: ScreenPoint,
    screen: Viewport,
    panel: TooltipPanelConfig,
    placement: TooltipPlacementConfig,
) -> TooltipState {
    let width = panel.width;
    let height = panel.panel_height(rows.len());
    let placement = position_tooltip(
        pointer.x,
        pointer.y,
        width,
        height,
        f64::from(screen.width),
        f64::from(screen.height),
        placement,
    );

    TooltipState {
        time_index,
        title: format_match_clock(time_index),
        rows,
        width,
        height,
        placement,
    }
}

/// Formats a rate without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Projects the tooltip panel in its own local coordinates (origin at the
/// panel's top-left corner); hosts translate it to `tooltip.placement`.
pub fn project_tooltip_panel(
    tooltip: &TooltipState,
    panel: TooltipPanelConfig,
) -> ViewerResult<RenderFrame> {
    let viewport = Viewport::new(tooltip.width.ceil() as u32, tooltip.height.ceil() as u32);
    let mut frame = RenderFrame::new(viewport).with_rect(
        RectPrimitive::new(0.0, 0.0, tooltip.width, tooltip.height, PANEL_FILL)
            .with_border(1.0, PANEL_BORDER)
            .with_corner_radius(4.0),
    );

    frame.texts.push(
        TextPrimitive::new(
            tooltip.title.clone(),
            panel.padding,
            panel.padding,
            panel.font_size_px,
            TEXT_COLOR,
            TextHAlign::Left,
        )
        .bold(),
    );

    let text_left = panel.padding + 3.0 * panel.dot_radius;
    let text_right = tooltip.width - panel.padding;
    for (index, row) in tooltip.rows.iter().enumerate() {
        let top = panel.padding + panel.title_height + index as f64 * panel.row_height;
        let center_y = top + panel.row_height / 2.0;

        frame.circles.push(CirclePrimitive::new(
            panel.padding + panel.dot_radius,
            center_y,
            panel.dot_radius,
            row.color,
        ));
        frame.texts.push(TextPrimitive::new(
            row.display_name.clone(),
            text_left,
            top,
            panel.font_size_px,
            TEXT_COLOR,
            TextHAlign::Left,
        ));
        frame.texts.push(TextPrimitive::new(
            format!(
                "{} - {}",
                format_rate(row.values[0]),
                format_rate(row.values[1])
            ),
            text_right,
            top,
            panel.font_size_px,
            TEXT_COLOR,
            TextHAlign::Right,
        ));
    }

    frame.validate()?;
    Ok(frame)
}
