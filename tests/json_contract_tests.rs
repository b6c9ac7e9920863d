mod support;

use apm_viz::api::{VIEWER_SNAPSHOT_JSON_SCHEMA_V1, ViewerConfig, ViewerEngine, ViewerSnapshot};
use apm_viz::core::{ScreenPoint, TimeWindow};
use apm_viz::interaction::{HoverMode, SurfaceKind};
use apm_viz::render::NullRenderer;

fn engine() -> ViewerEngine<NullRenderer> {
    ViewerEngine::new(
        NullRenderer::default(),
        support::match_record(),
        ViewerConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn idle_snapshot_reports_full_window() {
    let snapshot = engine().snapshot();
    assert_eq!(snapshot.duration, 100);
    assert_eq!(snapshot.cursor.mode, HoverMode::Idle);
    assert!(snapshot.hover.is_none());
    assert_eq!(snapshot.detail_window, TimeWindow::full(100));
    assert_eq!(snapshot.visible_events, [4, 2]);
}

#[test]
fn contract_v1_round_trips_hover_state() {
    let mut engine = engine();
    engine.pointer_move(SurfaceKind::Aggregate, 301.0, ScreenPoint::new(40.0, 40.0));

    let json = engine.snapshot_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ViewerSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, engine.snapshot());
    assert_eq!(parsed.cursor.active_time_index, Some(50));
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = engine().snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    let parsed = ViewerSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = engine().snapshot();
    let payload = serde_json::json!({
        "schema_version": VIEWER_SNAPSHOT_JSON_SCHEMA_V1 + 1,
        "snapshot": snapshot,
    });

    let err = ViewerSnapshot::from_json_compat_str(&payload.to_string()).expect_err("reject");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}
