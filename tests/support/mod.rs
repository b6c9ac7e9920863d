#![allow(dead_code)]

use apm_viz::core::{MatchRecord, RawPayload, normalize};
use serde_json::{Value, json};

pub const DURATION: usize = 100;

pub fn p1_selection(t: usize) -> f64 {
    t as f64 / 2.0
}

pub fn p1_commands(_t: usize) -> f64 {
    10.0
}

pub fn p2_selection(t: usize) -> f64 {
    (DURATION - t) as f64
}

pub fn p2_commands(t: usize) -> f64 {
    (t % 7) as f64
}

fn series(f: fn(usize) -> f64) -> Vec<f64> {
    (0..=DURATION).map(f).collect()
}

/// Two categories over 100 seconds; player 1 has four events, player 2 two.
pub fn match_json() -> Value {
    json!({
        "game_length": DURATION,
        "metadata": { "map": "Ever Dream LE" },
        "p1": {
            "name": "Serral",
            "apms": {
                "selection": series(p1_selection),
                "commands": series(p1_commands),
            },
            "events": [
                { "type": "SelectionEvent", "location": [40.0, 30.0], "timestampSeconds": 5.0 },
                { "type": "TargetPointCommandEvent", "location": [50.0, 60.0], "timestampSeconds": 30.0 },
                { "type": "CameraUpdateEvent", "location": [70.0, 80.0], "timestampSeconds": 60.0 },
                { "type": "BasicCommandEvent", "location": [90.0, 100.0], "timestampSeconds": 90.0 }
            ]
        },
        "p2": {
            "name": "Maru",
            "apms": {
                "selection": series(p2_selection),
                "commands": series(p2_commands),
            },
            "events": [
                { "type": "GetControlGroupEvent", "location": [20.0, 25.0], "timestampSeconds": 10.0 },
                { "type": "CameraUpdateEvent", "location": [60.0, 65.0], "timestampSeconds": 70.0 }
            ]
        }
    })
}

pub fn match_record() -> MatchRecord {
    let raw: RawPayload = serde_json::from_value(match_json()).expect("fixture decodes");
    normalize(raw).expect("fixture normalizes")
}
