use crate::core::LinearScale;
use crate::error::{ViewerError, ViewerResult};
use serde::{Deserialize, Serialize};

/// Action-rate axis mapped to an inverted Y pixel axis.
///
/// Domain is `[0, max_value]`, range is `[plot_height, 0]` so larger values
/// plot higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeScale {
    linear: LinearScale,
}

impl MagnitudeScale {
    /// Builds the scale, falling back to a unit domain when every observed
    /// value is zero.
    pub fn new(max_value: f64, plot_height: f64) -> ViewerResult<Self> {
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ViewerError::InvalidData(
                "magnitude max must be finite and >= 0".to_owned(),
            ));
        }
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ViewerError::InvalidData(
                "magnitude plot height must be finite and > 0".to_owned(),
            ));
        }

        let domain_end = if max_value > 0.0 { max_value } else { 1.0 };
        Ok(Self {
            linear: LinearScale::new(0.0, domain_end, plot_height, 0.0)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.linear.range().0
    }

    pub fn value_to_pixel(self, value: f64) -> ViewerResult<f64> {
        self.linear.domain_to_pixel(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ViewerResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
