pub mod dataset;
pub mod event_group;
pub mod magnitude_scale;
pub mod scale;
pub mod text;
pub mod time_scale;
pub mod tooltip_position;
pub mod types;
pub mod windowing;

pub use dataset::{
    CategoryInfo, MatchRecord, PlayerPayload, PlayerRecord, PlayerSlot, RawEvent, RawPayload,
    SpatialEvent, normalize,
};
pub use event_group::EventGroup;
pub use magnitude_scale::MagnitudeScale;
pub use scale::LinearScale;
pub use text::{capitalize, format_match_clock};
pub use time_scale::TimeScale;
pub use tooltip_position::{TooltipPlacement, TooltipPlacementConfig, position_tooltip};
pub use types::{ScreenPoint, TimeWindow, Viewport};
pub use windowing::{events_in_time_window, series_in_time_window};
