use serde::{Deserialize, Serialize};

use crate::charts::visible_event_count;
use crate::core::{PlayerSlot, TimeWindow};
use crate::error::{ViewerError, ViewerResult};
use crate::interaction::{CursorSnapshot, HoverFrame};
use crate::render::Renderer;

use super::ViewerEngine;

pub const VIEWER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the shared cursor and everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSnapshot {
    pub duration: usize,
    pub cursor: CursorSnapshot,
    pub hover: Option<HoverFrame>,
    pub detail_window: TimeWindow,
    pub visible_events: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewerSnapshot,
}

impl ViewerSnapshot {
    pub fn to_json_pretty(&self) -> ViewerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ViewerError::InvalidData(format!("failed to serialize snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ViewerResult<String> {
        let payload = ViewerSnapshotJsonContractV1 {
            schema_version: VIEWER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewerError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ViewerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewerSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewerError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEWER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewerError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ViewerEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        let detail_window = self.scales.time_scale().visible_range();
        ViewerSnapshot {
            duration: self.data.duration(),
            cursor: self.cursor.snapshot(),
            hover: self.last_hover.clone(),
            detail_window,
            visible_events: [
                visible_event_count(&self.data, PlayerSlot::First, detail_window),
                visible_event_count(&self.data, PlayerSlot::Second, detail_window),
            ],
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ViewerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
