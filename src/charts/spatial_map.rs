use serde::{Deserialize, Serialize};

use crate::charts::ViewLayout;
use crate::core::{MatchRecord, PlayerSlot, TimeWindow, events_in_time_window};
use crate::error::{ViewerError, ViewerResult};
use crate::render::{CategoryPalette, CirclePrimitive, ImagePrimitive, RenderFrame};

/// Map backdrop and the transform from replay coordinates onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub image_source: String,
    pub image_width: f64,
    pub image_height: f64,
    /// Horizontal offset of each player's map from the left margin.
    pub player_offsets: [f64; 2],
    pub scale_x: f64,
    pub offset_x: f64,
    pub scale_y: f64,
    pub offset_y: f64,
    pub dot_radius: f64,
    pub dot_opacity: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            image_source: "/data/maps/50percentBandW.png".to_owned(),
            image_width: 400.0,
            image_height: 316.0,
            player_offsets: [0.0, 650.0],
            scale_x: 3.2,
            offset_x: -70.0,
            scale_y: 2.0,
            offset_y: -15.0,
            dot_radius: 1.5,
            dot_opacity: 0.4,
        }
    }
}

impl MapConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        if self.image_source.is_empty() {
            return Err(ViewerError::InvalidData(
                "map image source must not be empty".to_owned(),
            ));
        }
        for (value, name) in [
            (self.image_width, "image_width"),
            (self.image_height, "image_height"),
            (self.dot_radius, "dot_radius"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "map `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.player_offsets[0], "player_offsets[0]"),
            (self.player_offsets[1], "player_offsets[1]"),
            (self.scale_x, "scale_x"),
            (self.offset_x, "offset_x"),
            (self.scale_y, "scale_y"),
            (self.offset_y, "offset_y"),
        ] {
            if !value.is_finite() {
                return Err(ViewerError::InvalidData(format!(
                    "map `{name}` must be finite"
                )));
            }
        }
        if !self.dot_opacity.is_finite() || !(0.0..=1.0).contains(&self.dot_opacity) {
            return Err(ViewerError::InvalidData(
                "map `dot_opacity` must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Maps a replay location onto map-local pixels.
    #[must_use]
    pub fn project(&self, location: [f64; 2]) -> (f64, f64) {
        (
            location[0] * self.scale_x + self.offset_x,
            location[1] * self.scale_y + self.offset_y,
        )
    }
}

/// Projects one player's spatial events that fall inside `window`.
pub fn project_spatial_map(
    data: &MatchRecord,
    slot: PlayerSlot,
    layout: &ViewLayout,
    map: &MapConfig,
    palette: &CategoryPalette,
    window: TimeWindow,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    let map_x = layout.origin_x + map.player_offsets[slot.index()];
    let map_y = layout.map_top;

    frame.images.push(ImagePrimitive {
        source: map.image_source.clone(),
        x: map_x,
        y: map_y,
        width: map.image_width,
        height: map.image_height,
    });

    for event in events_in_time_window(data.player(slot).events(), window) {
        let (x, y) = map.project(event.location);
        let color = palette
            .color_for_group(event.group())
            .with_alpha(map.dot_opacity);
        frame
            .circles
            .push(CirclePrimitive::new(map_x + x, map_y + y, map.dot_radius, color));
    }

    frame
}

/// Number of one player's events visible inside `window`.
#[must_use]
pub fn visible_event_count(data: &MatchRecord, slot: PlayerSlot, window: TimeWindow) -> usize {
    events_in_time_window(data.player(slot).events(), window).count()
}
