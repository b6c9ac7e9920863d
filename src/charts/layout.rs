use serde::{Deserialize, Serialize};

use crate::core::{MatchRecord, PlayerSlot, Viewport};
use crate::error::{ViewerError, ViewerResult};

/// Page geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub total_width: f64,
    pub margin_top: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    /// Gap between the two player columns.
    pub column_gap: f64,
    pub row_margin_top: f64,
    pub row_margin_bottom: f64,
    /// Row height per unit of the largest observed rate.
    pub row_height_per_unit: f64,
    pub min_row_height: f64,
    pub max_row_height: f64,
    /// Vertical gap between the map, row and aggregate sections.
    pub section_gap: f64,
    /// Distance between row labels and the first column.
    pub label_gap: f64,
    pub aggregate_height: f64,
    pub aggregate_padding_top: f64,
    pub aggregate_padding_bottom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_width: 1344.0,
            margin_top: 50.0,
            margin_left: 120.0,
            margin_right: 0.0,
            margin_bottom: 10.0,
            column_gap: 20.0,
            row_margin_top: 10.0,
            row_margin_bottom: 10.0,
            row_height_per_unit: 15.0,
            min_row_height: 40.0,
            max_row_height: 240.0,
            section_gap: 20.0,
            label_gap: 10.0,
            aggregate_height: 300.0,
            aggregate_padding_top: 10.0,
            aggregate_padding_bottom: 10.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        for (value, name) in [
            (self.total_width, "total_width"),
            (self.margin_top, "margin_top"),
            (self.margin_left, "margin_left"),
            (self.margin_right, "margin_right"),
            (self.margin_bottom, "margin_bottom"),
            (self.column_gap, "column_gap"),
            (self.row_margin_top, "row_margin_top"),
            (self.row_margin_bottom, "row_margin_bottom"),
            (self.row_height_per_unit, "row_height_per_unit"),
            (self.min_row_height, "min_row_height"),
            (self.max_row_height, "max_row_height"),
            (self.section_gap, "section_gap"),
            (self.label_gap, "label_gap"),
            (self.aggregate_height, "aggregate_height"),
            (self.aggregate_padding_top, "aggregate_padding_top"),
            (self.aggregate_padding_bottom, "aggregate_padding_bottom"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }

        if self.min_row_height <= self.row_margin_top + self.row_margin_bottom {
            return Err(ViewerError::InvalidData(
                "layout `min_row_height` must exceed the row margins".to_owned(),
            ));
        }
        if self.max_row_height < self.min_row_height {
            return Err(ViewerError::InvalidData(
                "layout `max_row_height` must be >= `min_row_height`".to_owned(),
            ));
        }
        if self.aggregate_height <= self.aggregate_padding_top + self.aggregate_padding_bottom {
            return Err(ViewerError::InvalidData(
                "layout `aggregate_height` must exceed its padding".to_owned(),
            ));
        }
        if self.column_width() <= 0.0 {
            return Err(ViewerError::InvalidData(
                "layout leaves no room for the player columns".to_owned(),
            ));
        }

        Ok(self)
    }

    fn plot_width(self) -> f64 {
        self.total_width - self.margin_left - self.margin_right
    }

    fn column_width(self) -> f64 {
        self.plot_width() / 2.0 - self.column_gap / 2.0
    }
}

/// Vertical placement of one category row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub category_index: usize,
    pub top: f64,
    pub height: f64,
    pub plot_top: f64,
    pub plot_height: f64,
}

/// Resolved geometry of the whole view, computed once per dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewLayout {
    pub viewport: Viewport,
    pub origin_x: f64,
    pub column_width: f64,
    pub column_stride: f64,
    pub label_x: f64,
    pub map_top: f64,
    pub map_height: f64,
    pub rows: Vec<RowLayout>,
    pub aggregate_top: f64,
    pub aggregate_plot_top: f64,
    pub aggregate_plot_height: f64,
}

impl ViewLayout {
    pub fn compute(
        config: LayoutConfig,
        map_height: f64,
        record: &MatchRecord,
    ) -> ViewerResult<Self> {
        let config = config.validate()?;
        if !map_height.is_finite() || map_height < 0.0 {
            return Err(ViewerError::InvalidData(
                "map height must be finite and >= 0".to_owned(),
            ));
        }

        let row_height = (record.max_rate() * config.row_height_per_unit)
            .clamp(config.min_row_height, config.max_row_height);
        let plot_height = row_height - config.row_margin_top - config.row_margin_bottom;

        let map_top = config.margin_top;
        let rows_top = map_top + map_height + config.section_gap;
        let rows: Vec<RowLayout> = (0..record.categories().len())
            .map(|category_index| {
                let top = rows_top + category_index as f64 * row_height;
                RowLayout {
                    category_index,
                    top,
                    height: row_height,
                    plot_top: top + config.row_margin_top,
                    plot_height,
                }
            })
            .collect();

        let rows_bottom = rows_top + rows.len() as f64 * row_height;
        let aggregate_top = rows_bottom + config.section_gap;
        let aggregate_plot_top = aggregate_top + config.aggregate_padding_top;
        let aggregate_plot_height = config.aggregate_height
            - config.aggregate_padding_top
            - config.aggregate_padding_bottom;
        let content_height = aggregate_top + config.aggregate_height + config.margin_bottom;

        let viewport = Viewport::new(
            config.total_width.ceil() as u32,
            content_height.ceil() as u32,
        );
        if !viewport.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            origin_x: config.margin_left,
            column_width: config.column_width(),
            column_stride: config.plot_width() / 2.0,
            label_x: config.margin_left - config.label_gap,
            map_top,
            map_height,
            rows,
            aggregate_top,
            aggregate_plot_top,
            aggregate_plot_height,
        })
    }

    /// Left edge of a player's column.
    #[must_use]
    pub fn column_x(&self, slot: PlayerSlot) -> f64 {
        self.origin_x + slot.index() as f64 * self.column_stride
    }

    #[must_use]
    pub fn rows_top(&self) -> f64 {
        self.rows.first().map_or(self.aggregate_top, |row| row.top)
    }

    #[must_use]
    pub fn rows_bottom(&self) -> f64 {
        self.rows
            .last()
            .map_or(self.aggregate_top, |row| row.top + row.height)
    }

    /// Plot height shared by every category row.
    #[must_use]
    pub fn row_plot_height(&self) -> f64 {
        self.rows.first().map_or(1.0, |row| row.plot_height)
    }
}
