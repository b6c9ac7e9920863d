//! Pure chart projections.
//!
//! Every function here maps `(MatchRecord, scales, cursor snapshot)` onto
//! render primitives and never touches the cursor state itself.

pub mod aggregate;
pub mod category_rows;
pub mod layout;
pub mod markers;
pub mod scales;
pub mod spatial_map;
pub mod tooltip;

pub use aggregate::project_aggregate;
pub use category_rows::project_category_rows;
pub use layout::{LayoutConfig, RowLayout, ViewLayout};
pub use markers::{compute_marker_lines, project_markers};
pub use scales::{AggregateScales, Scales, build_scales};
pub use spatial_map::{MapConfig, project_spatial_map, visible_event_count};
pub use tooltip::{
    TooltipPanelConfig, build_tooltip, format_rate, project_tooltip_panel, tooltip_rows,
};
