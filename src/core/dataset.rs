use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::text::capitalize;
use crate::core::EventGroup;
use crate::error::{ViewerError, ViewerResult};

/// Dataset document as delivered by the upstream replay pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    pub p1: PlayerPayload,
    pub p2: PlayerPayload,
    pub game_length: f64,
    #[serde(default)]
    pub metadata: Option<IndexMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPayload {
    pub apms: IndexMap<String, Vec<f64>>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: [f64; 2],
    #[serde(rename = "timestampSeconds", alias = "timestamp_seconds")]
    pub timestamp_seconds: f64,
}

/// Player column in every two-column chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    First,
    Second,
}

impl PlayerSlot {
    pub const BOTH: [PlayerSlot; 2] = [Self::First, Self::Second];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialEvent {
    pub kind: String,
    pub location: [f64; 2],
    pub timestamp_seconds: f64,
}

impl SpatialEvent {
    #[must_use]
    pub fn group(&self) -> EventGroup {
        EventGroup::classify(&self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    actions_per_minute: IndexMap<String, Vec<f64>>,
    events: Vec<SpatialEvent>,
}

impl PlayerRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn series(&self, category_id: &str) -> Option<&[f64]> {
        self.actions_per_minute
            .get(category_id)
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn actions_per_minute(&self) -> &IndexMap<String, Vec<f64>> {
        &self.actions_per_minute
    }

    #[must_use]
    pub fn events(&self) -> &[SpatialEvent] {
        &self.events
    }
}

/// Normalized, read-only match dataset shared by every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    duration: usize,
    players: [PlayerRecord; 2],
    categories: Vec<CategoryInfo>,
    metadata: Option<IndexMap<String, serde_json::Value>>,
}

impl MatchRecord {
    #[must_use]
    pub fn duration(&self) -> usize {
        self.duration
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerRecord; 2] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> &PlayerRecord {
        &self.players[slot.index()]
    }

    /// Categories in presentation order (row and stacking order).
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    #[must_use]
    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.id == id)
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&IndexMap<String, serde_json::Value>> {
        self.metadata.as_ref()
    }

    /// Looks up one sample; `None` when the index has no backing value.
    #[must_use]
    pub fn series_value(&self, slot: PlayerSlot, category_id: &str, index: usize) -> Option<f64> {
        self.player(slot)
            .series(category_id)
            .and_then(|series| series.get(index).copied())
    }

    /// Maximum rate observed across both players and all categories.
    #[must_use]
    pub fn max_rate(&self) -> f64 {
        self.players
            .iter()
            .flat_map(|player| player.actions_per_minute.values())
            .flat_map(|series| series.iter().copied())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0)
    }

    /// Per-second sum of every category for one player.
    #[must_use]
    pub fn stacked_totals(&self, slot: PlayerSlot) -> Vec<f64> {
        let mut totals = vec![0.0; self.duration + 1];
        for series in self.player(slot).actions_per_minute.values() {
            for (total, value) in totals.iter_mut().zip(series) {
                *total += value;
            }
        }
        totals
    }
}

/// Validates a raw payload and reshapes it into a [`MatchRecord`].
pub fn normalize(raw: RawPayload) -> ViewerResult<MatchRecord> {
    let duration = duration_from_game_length(raw.game_length)?;

    if raw.p1.apms.is_empty() || raw.p2.apms.is_empty() {
        return Err(ViewerError::malformed(
            "each player must carry at least one rate series",
        ));
    }

    let first_keys: IndexSet<&str> = raw.p1.apms.keys().map(String::as_str).collect();
    let second_keys: IndexSet<&str> = raw.p2.apms.keys().map(String::as_str).collect();
    if first_keys != second_keys {
        let only_first: Vec<&str> = first_keys.difference(&second_keys).copied().collect();
        let only_second: Vec<&str> = second_keys.difference(&first_keys).copied().collect();
        return Err(ViewerError::malformed(format!(
            "category sets differ between players (only p1: {only_first:?}, only p2: {only_second:?})"
        )));
    }

    let categories: Vec<CategoryInfo> = first_keys
        .iter()
        .map(|id| CategoryInfo {
            id: (*id).to_owned(),
            display_name: capitalize(id),
        })
        .collect();

    let first = normalize_player(raw.p1, duration, 1)?;
    let second = normalize_player(raw.p2, duration, 2)?;

    debug!(
        duration,
        categories = categories.len(),
        p1_events = first.events.len(),
        p2_events = second.events.len(),
        "normalized match dataset"
    );

    Ok(MatchRecord {
        duration,
        players: [first, second],
        categories,
        metadata: raw.metadata,
    })
}

/// Upper bound on `game_length`; series hold one sample per second plus one.
const MAX_GAME_LENGTH_SECONDS: f64 = u32::MAX as f64;

fn duration_from_game_length(game_length: f64) -> ViewerResult<usize> {
    if !game_length.is_finite() || game_length < 0.0 || game_length.fract() != 0.0 {
        return Err(ViewerError::malformed(format!(
            "game_length must be a non-negative whole number of seconds, got {game_length}"
        )));
    }
    if game_length == 0.0 {
        return Err(ViewerError::malformed("game_length must be > 0"));
    }
    if game_length > MAX_GAME_LENGTH_SECONDS {
        return Err(ViewerError::malformed(format!(
            "game_length {game_length} exceeds the supported maximum of {MAX_GAME_LENGTH_SECONDS} seconds"
        )));
    }
    Ok(game_length as usize)
}

fn normalize_player(
    payload: PlayerPayload,
    duration: usize,
    player_number: usize,
) -> ViewerResult<PlayerRecord> {
    let expected_len = duration
        .checked_add(1)
        .ok_or_else(|| ViewerError::malformed(format!("match duration {duration} overflows")))?;
    for (category, series) in &payload.apms {
        if series.len() != expected_len {
            return Err(ViewerError::malformed(format!(
                "p{player_number} series `{category}` has {} samples, expected {expected_len}",
                series.len()
            )));
        }
        if let Some(value) = series
            .iter()
            .find(|value| !value.is_finite() || **value < 0.0)
        {
            return Err(ViewerError::malformed(format!(
                "p{player_number} series `{category}` contains invalid rate {value}"
            )));
        }
    }

    let mut events = Vec::with_capacity(payload.events.len());
    for event in payload.events {
        if !event.location[0].is_finite()
            || !event.location[1].is_finite()
            || !event.timestamp_seconds.is_finite()
        {
            return Err(ViewerError::malformed(format!(
                "p{player_number} event `{}` has non-finite location or timestamp",
                event.kind
            )));
        }
        events.push(SpatialEvent {
            kind: event.kind,
            location: event.location,
            timestamp_seconds: event.timestamp_seconds,
        });
    }

    Ok(PlayerRecord {
        name: payload.name,
        actions_per_minute: payload.apms,
        events,
    })
}
