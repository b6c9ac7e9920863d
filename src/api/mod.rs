mod brush_controller;
mod data_loader;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod load_state;
mod render_coordinator;
mod subscriber_dispatch;
mod subscriber_registry;

#[cfg(feature = "http-fetch")]
pub use data_loader::fetch_dataset;
pub use data_loader::{
    DEFAULT_DATASET_BASE, DEFAULT_DATASET_ID, DatasetLocator, load_from_path, load_from_reader,
    load_from_str,
};
pub use engine::ViewerEngine;
pub use engine_config::ViewerConfig;
pub use json_contract::{
    VIEWER_SNAPSHOT_JSON_SCHEMA_V1, ViewerSnapshot, ViewerSnapshotJsonContractV1,
};
pub use load_state::{FAILED_TO_LOAD_LABEL, LOADING_LABEL, LoadStatus, ViewerSession, status_frame};
