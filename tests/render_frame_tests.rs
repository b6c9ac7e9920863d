mod support;

use apm_viz::api::{ViewerConfig, ViewerEngine};
use apm_viz::charts::{LayoutConfig, MapConfig};
use apm_viz::core::{PlayerSlot, ScreenPoint, Viewport};
use apm_viz::interaction::SurfaceKind;
use apm_viz::render::{Color, LinePrimitive, NullRenderer, RenderFrame, Renderer};
use approx::assert_abs_diff_eq;

fn engine() -> ViewerEngine<NullRenderer> {
    ViewerEngine::new(
        NullRenderer::default(),
        support::match_record(),
        ViewerConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn null_renderer_rejects_invalid_line() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        f64::NAN,
        10.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn content_viewport_stacks_maps_rows_and_aggregate() {
    let engine = engine();
    let layout = engine.layout();

    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].height, 240.0);
    assert_eq!(layout.rows[0].top, 50.0 + 316.0 + 20.0);
    assert_eq!(engine.content_viewport(), Viewport::new(1344, 1196));
    assert_abs_diff_eq!(layout.column_x(PlayerSlot::Second), 732.0, epsilon = 1e-9);
}

#[test]
fn full_frame_contains_every_chart() {
    let mut engine = engine();
    engine.render().expect("render");
    let frame = engine.renderer().last_frame.clone().expect("frame");

    assert_eq!(frame.images.len(), 2);
    assert_eq!(frame.circles.len(), 6);
    // rows: area per category and player; aggregate: stacked layer likewise
    assert_eq!(frame.polygons.len(), 8);
    assert_eq!(frame.polylines.len(), 4);
    let labels: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(labels, ["Selection", "Commands"]);
    assert!(frame.texts.iter().all(|t| t.bold));
}

#[test]
fn spatial_dots_use_map_transform_and_group_colors() {
    let mut engine = engine();
    engine.render().expect("render");
    let frame = engine.renderer().last_frame.clone().expect("frame");

    let map = MapConfig::default();
    let first = frame.circles[0];
    let (x, y) = map.project([40.0, 30.0]);
    assert_abs_diff_eq!(first.cx, 120.0 + x, epsilon = 1e-9);
    assert_abs_diff_eq!(first.cy, 50.0 + y, epsilon = 1e-9);
    assert_eq!(first.radius, 1.5);
    assert_eq!(first.fill_color, Color::rgb(1.0, 0.0, 0.0).with_alpha(0.4));

    // camera is not a declared category: slot 2 + ordinal 2 cycles to green
    let camera = frame.circles[2];
    assert_eq!(camera.fill_color, Color::rgb(0.0, 0.6, 0.2).with_alpha(0.4));
    let second_map = &frame.images[1];
    assert_eq!(second_map.x, 120.0 + 650.0);
}

#[test]
fn tooltip_panel_lists_both_players_per_category() {
    let mut engine = engine();
    engine.pointer_move(SurfaceKind::CategoryRows, 301.0, ScreenPoint::new(50.0, 50.0));

    let panel = engine
        .tooltip_panel_frame()
        .expect("panel")
        .expect("hovering");
    let texts: Vec<&str> = panel.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        ["00:50", "Selection", "25 - 50", "Commands", "10 - 1"]
    );
    assert_eq!(panel.circles.len(), 2);
    assert_eq!(panel.viewport, Viewport::new(250, 84));
}

#[test]
fn flat_dataset_renders_with_unit_magnitude_domain() {
    let mut value = support::match_json();
    for player in ["p1", "p2"] {
        for category in ["selection", "commands"] {
            value[player]["apms"][category] = serde_json::json!(vec![0.0; support::DURATION + 1]);
        }
    }
    let record = apm_viz::api::load_from_str(&value.to_string()).expect("flat dataset");

    let mut engine =
        ViewerEngine::new(NullRenderer::default(), record, ViewerConfig::default())
            .expect("engine init");
    assert_eq!(engine.scales().magnitude_scale().domain(), (0.0, 1.0));
    assert_eq!(engine.layout().rows[0].height, LayoutConfig::default().min_row_height);
    engine.render().expect("render flat dataset");
}
