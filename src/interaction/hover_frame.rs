use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerSlot, ScreenPoint, TimeWindow, TooltipPlacement};
use crate::render::Color;

use super::SurfaceKind;

/// Vertical time marker for one player column of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub surface: SurfaceKind,
    pub player: PlayerSlot,
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    /// `false` when the hovered time lies outside this surface's window.
    pub visible: bool,
}

/// One category line of the tooltip: `values[0]` is player 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub category_id: String,
    pub display_name: String,
    pub color: Color,
    pub values: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub time_index: usize,
    pub title: String,
    pub rows: Vec<TooltipRow>,
    pub width: f64,
    pub height: f64,
    pub placement: TooltipPlacement,
}

/// Everything one hover pass derives from a single time index.
///
/// Built completely before it is committed, so subscribers never observe
/// markers and tooltip values from different times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverFrame {
    pub time_index: usize,
    pub surface: SurfaceKind,
    pub pointer: ScreenPoint,
    pub markers: SmallVec<[MarkerLine; 4]>,
    pub tooltip: TooltipState,
}

/// Result of one brush pass, derived from a single brush-range read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushFrame {
    pub window: TimeWindow,
    /// Spatial events left visible per player after filtering.
    pub visible_events: [usize; 2],
}
