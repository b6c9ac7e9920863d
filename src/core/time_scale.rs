use crate::core::{LinearScale, TimeWindow};
use crate::error::{ViewerError, ViewerResult};
use serde::{Deserialize, Serialize};

/// Match-time axis with separate full and visible ranges.
///
/// The full range is always `[0, duration]`. The visible range starts equal
/// to it and is narrowed by brushing on detail charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    duration: usize,
    pixel_width: f64,
    visible: TimeWindow,
}

impl TimeScale {
    pub fn new(duration: usize, pixel_width: f64) -> ViewerResult<Self> {
        if duration == 0 {
            return Err(ViewerError::InvalidData(
                "time scale duration must be > 0".to_owned(),
            ));
        }
        if !pixel_width.is_finite() || pixel_width <= 0.0 {
            return Err(ViewerError::InvalidData(
                "time scale pixel width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            duration,
            pixel_width,
            visible: TimeWindow::full(duration),
        })
    }

    #[must_use]
    pub fn duration(self) -> usize {
        self.duration
    }

    #[must_use]
    pub fn pixel_width(self) -> f64 {
        self.pixel_width
    }

    #[must_use]
    pub fn full_range(self) -> TimeWindow {
        TimeWindow::full(self.duration)
    }

    #[must_use]
    pub fn visible_range(self) -> TimeWindow {
        self.visible
    }

    /// Narrows the visible range.
    ///
    /// Bounds are clamped into `[0, duration]`; a degenerate window resets the
    /// visible range to the full domain.
    pub fn set_visible_range(&mut self, window: TimeWindow) {
        let start = window.start.min(self.duration);
        let end = window.end.min(self.duration);
        let clamped = TimeWindow::new(start, end);
        self.visible = if clamped.is_degenerate() {
            self.full_range()
        } else {
            clamped
        };
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible = self.full_range();
    }

    pub fn time_to_pixel(self, time: f64) -> ViewerResult<f64> {
        self.visible_linear()?.domain_to_pixel(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ViewerResult<f64> {
        self.visible_linear()?.pixel_to_domain(pixel)
    }

    /// Converts a pixel offset into the nearest whole second inside the
    /// visible range.
    ///
    /// Never fails: non-finite offsets clamp to the nearest bound (`NaN` maps
    /// to the start) so a detached or malformed pointer can't leak `NaN` into
    /// downstream coordinates.
    #[must_use]
    pub fn pixel_to_time_index(self, pixel: f64) -> usize {
        let start = self.visible.start;
        let end = self.visible.end;
        if pixel.is_nan() {
            return start;
        }
        if pixel == f64::INFINITY {
            return end;
        }
        if pixel == f64::NEG_INFINITY {
            return start;
        }

        let span = (end - start) as f64;
        let time = start as f64 + (pixel / self.pixel_width) * span;
        let rounded = time.round();
        if rounded <= start as f64 {
            start
        } else if rounded >= end as f64 {
            end
        } else {
            rounded as usize
        }
    }

    fn visible_linear(self) -> ViewerResult<LinearScale> {
        LinearScale::new(
            self.visible.start as f64,
            self.visible.end as f64,
            0.0,
            self.pixel_width,
        )
    }
}
