use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Spacing rules for tooltip placement around the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipPlacementConfig {
    /// Horizontal gap between pointer and tooltip edge.
    pub spacing: f64,
    /// Extra room required on the right before flipping to the left side.
    pub edge_margin: f64,
}

impl Default for TooltipPlacementConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            edge_margin: 20.0,
        }
    }
}

impl TooltipPlacementConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        for (value, name) in [(self.spacing, "spacing"), (self.edge_margin, "edge_margin")] {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "tooltip placement `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Top-left corner of the tooltip in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

/// Places a tooltip next to the pointer, flipping sides near the viewport
/// edges and clamping into the viewport whenever the tooltip fits.
///
/// Non-finite inputs are treated as zero so the result is always finite.
#[must_use]
pub fn position_tooltip(
    pointer_x: f64,
    pointer_y: f64,
    tooltip_width: f64,
    tooltip_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    config: TooltipPlacementConfig,
) -> TooltipPlacement {
    let pointer_x = finite_or_zero(pointer_x);
    let pointer_y = finite_or_zero(pointer_y);
    let tooltip_width = finite_or_zero(tooltip_width).max(0.0);
    let tooltip_height = finite_or_zero(tooltip_height).max(0.0);
    let viewport_width = finite_or_zero(viewport_width).max(0.0);
    let viewport_height = finite_or_zero(viewport_height).max(0.0);

    let room_right = viewport_width - pointer_x;
    let left = if room_right < tooltip_width + config.spacing + config.edge_margin {
        pointer_x - tooltip_width - config.spacing
    } else {
        pointer_x + config.spacing
    };

    let room_below = viewport_height - pointer_y;
    let top = if room_below < tooltip_height {
        pointer_y - tooltip_height
    } else {
        pointer_y
    };

    TooltipPlacement {
        left: clamp_into(left, tooltip_width, viewport_width),
        top: clamp_into(top, tooltip_height, viewport_height),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn clamp_into(origin: f64, size: f64, extent: f64) -> f64 {
    if size > extent {
        return origin;
    }
    origin.clamp(0.0, extent - size)
}
