use crate::error::{ViewerError, ViewerResult};
use serde::{Deserialize, Serialize};

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how
/// magnitude axes put larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ViewerResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ViewerError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ViewerError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ViewerResult<f64> {
        if !value.is_finite() {
            return Err(ViewerError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ViewerResult<f64> {
        if !pixel.is_finite() {
            return Err(ViewerError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
