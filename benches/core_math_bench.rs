use apm_viz::api::{ViewerConfig, ViewerEngine, load_from_str};
use apm_viz::core::{MatchRecord, ScreenPoint, TimeScale};
use apm_viz::interaction::SurfaceKind;
use apm_viz::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

const LONG_MATCH_SECONDS: usize = 1_800;

fn long_match() -> MatchRecord {
    let series = |phase: f64| -> Vec<f64> {
        (0..=LONG_MATCH_SECONDS)
            .map(|t| 60.0 + 40.0 * ((t as f64) / 30.0 + phase).sin())
            .collect()
    };
    let events: Vec<_> = (0..5_000u32)
        .map(|i| {
            json!({
                "type": if i % 3 == 0 { "SelectionEvent" } else { "TargetPointCommandEvent" },
                "location": [f64::from(i % 120), f64::from(i % 150)],
                "timestampSeconds": (i as usize % LONG_MATCH_SECONDS) as f64,
            })
        })
        .collect();
    let player = |name: &str, phase: f64| {
        json!({
            "name": name,
            "apms": {
                "selection": series(phase),
                "commands": series(phase + 1.0),
                "camera": series(phase + 2.0),
            },
            "events": events,
        })
    };
    let document = json!({
        "game_length": LONG_MATCH_SECONDS,
        "p1": player("p1", 0.0),
        "p2": player("p2", 0.5),
    });
    load_from_str(&document.to_string()).expect("generated match is valid")
}

fn bench_time_scale_round_trip(c: &mut Criterion) {
    let scale = TimeScale::new(LONG_MATCH_SECONDS, 602.0).expect("valid scale");

    c.bench_function("time_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.time_to_pixel(black_box(1_234.0)).expect("to pixel");
            let _ = scale.pixel_to_time_index(black_box(px));
        })
    });
}

fn bench_hover_pass_1800s(c: &mut Criterion) {
    let mut engine =
        ViewerEngine::new(NullRenderer::default(), long_match(), ViewerConfig::default())
            .expect("engine init");
    let mut x = 0.0;

    c.bench_function("hover_pass_1800s", |b| {
        b.iter(|| {
            x = (x + 7.0) % 602.0;
            let _ = engine.pointer_move(
                SurfaceKind::CategoryRows,
                black_box(x),
                black_box(ScreenPoint::new(400.0, 300.0)),
            );
        })
    });
}

fn bench_render_frame_1800s(c: &mut Criterion) {
    let mut engine =
        ViewerEngine::new(NullRenderer::default(), long_match(), ViewerConfig::default())
            .expect("engine init");
    engine.brush_select(100.0, 400.0);

    c.bench_function("render_frame_1800s", |b| {
        b.iter(|| {
            let _ = engine
                .build_render_frame()
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_time_scale_round_trip,
    bench_hover_pass_1800s,
    bench_render_frame_1800s
);
criterion_main!(benches);
