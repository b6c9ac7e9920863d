//! apm-viz: synchronized time-cursor viewer for two-player RTS replays.
//!
//! A match is a per-second action-rate series per category and player plus a
//! list of located spatial events. The viewer engine owns one shared time
//! cursor; spatial maps, per-category rows and the aggregate stacked view are
//! pure projections of that cursor into backend-agnostic render frames.

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ViewerConfig, ViewerEngine, ViewerSession};
pub use error::{ViewerError, ViewerResult};
