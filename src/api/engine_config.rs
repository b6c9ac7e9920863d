use serde::{Deserialize, Serialize};

use crate::charts::{LayoutConfig, MapConfig, TooltipPanelConfig};
use crate::core::TooltipPlacementConfig;
use crate::error::{ViewerError, ViewerResult};
use crate::render::{Color, default_palette};

/// Public viewer bootstrap configuration.
///
/// Serializable so hosts can keep layout overrides in a JSON file. Every
/// section falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub tooltip_panel: TooltipPanelConfig,
    #[serde(default)]
    pub tooltip_placement: TooltipPlacementConfig,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            map: MapConfig::default(),
            tooltip_panel: TooltipPanelConfig::default(),
            tooltip_placement: TooltipPlacementConfig::default(),
            palette: default_palette(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_map(mut self, map: MapConfig) -> Self {
        self.map = map;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_tooltip_placement(mut self, placement: TooltipPlacementConfig) -> Self {
        self.tooltip_placement = placement;
        self
    }

    pub fn validate(self) -> ViewerResult<Self> {
        self.layout.validate()?;
        self.tooltip_panel.validate()?;
        self.tooltip_placement.validate()?;
        let map = self.map.clone().validate()?;
        if self.palette.is_empty() {
            return Err(ViewerError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        Ok(Self { map, ..self })
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ViewerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ViewerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ViewerError::InvalidData(format!("failed to parse config: {e}")))
    }
}
