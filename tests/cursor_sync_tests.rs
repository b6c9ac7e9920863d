mod support;

use apm_viz::api::{ViewerConfig, ViewerEngine};
use apm_viz::core::{PlayerSlot, ScreenPoint, Viewport};
use apm_viz::interaction::{HoverMode, SurfaceKind};
use apm_viz::render::NullRenderer;
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
fn hover_at_middle_of_match_syncs_index_markers_and_tooltip() {
    let mut engine = engine();
    let column_width = engine.layout().column_width;
    assert_abs_diff_eq!(column_width, 602.0, epsilon = 1e-9);

    let committed = engine.pointer_move(
        SurfaceKind::CategoryRows,
        column_width / 2.0,
        ScreenPoint::new(400.0, 300.0),
    );
    assert!(committed);
    assert_eq!(engine.active_time_index(), Some(50));
    assert_eq!(engine.hover_mode(), HoverMode::Hovering);

    let hover = engine.hover_frame().expect("hover frame");
    assert_eq!(hover.time_index, 50);
    assert_eq!(hover.tooltip.title, "00:50");
    assert_eq!(hover.tooltip.rows.len(), 2);
    assert_eq!(hover.tooltip.rows[0].category_id, "selection");
    assert_eq!(
        hover.tooltip.rows[0].values,
        [support::p1_selection(50), support::p2_selection(50)]
    );
    assert_eq!(
        hover.tooltip.rows[1].values,
        [support::p1_commands(50), support::p2_commands(50)]
    );

    assert_eq!(hover.markers.len(), 4);
    assert!(hover.markers.iter().all(|marker| marker.visible));
    for marker in &hover.markers {
        let column_x = engine.layout().column_x(marker.player);
        assert_abs_diff_eq!(marker.x, column_x + 301.0, epsilon = 1e-9);
    }
}

#[test]
fn both_surfaces_resolve_the_same_index_without_a_brush() {
    let mut engine = engine();
    let pointer = ScreenPoint::new(10.0, 10.0);

    engine.pointer_move(SurfaceKind::Aggregate, 150.5, pointer);
    let from_aggregate = engine.active_time_index();
    engine.pointer_move(SurfaceKind::CategoryRows, 150.5, pointer);

    assert_eq!(from_aggregate, Some(25));
    assert_eq!(engine.active_time_index(), from_aggregate);
}

#[test]
fn pointer_leave_hides_markers_and_tooltip() {
    let mut engine = engine();
    engine.pointer_move(
        SurfaceKind::Aggregate,
        301.0,
        ScreenPoint::new(500.0, 900.0),
    );
    engine.render().expect("render hovering");
    assert_eq!(engine.renderer().last_line_count, 4);

    engine.pointer_leave();

    assert_eq!(engine.active_time_index(), None);
    assert_eq!(engine.hover_mode(), HoverMode::Idle);
    assert!(engine.hover_frame().is_none());
    assert!(engine.tooltip_panel_frame().expect("panel").is_none());
    engine.render().expect("render idle");
    assert_eq!(engine.renderer().last_line_count, 0);
}

#[test]
fn pointer_enter_prefills_first_sample() {
    let mut engine = engine();
    assert!(engine.pointer_enter(SurfaceKind::CategoryRows, ScreenPoint::new(200.0, 450.0)));

    let hover = engine.hover_frame().expect("hover frame");
    assert_eq!(hover.time_index, 0);
    assert_eq!(hover.tooltip.title, "00:00");
    assert_eq!(hover.tooltip.rows[0].values, [0.0, 100.0]);
}

#[test]
fn non_finite_pointer_clamps_instead_of_leaking_nan() {
    let mut engine = engine();

    engine.pointer_move(
        SurfaceKind::CategoryRows,
        f64::NAN,
        ScreenPoint::new(f64::NAN, f64::INFINITY),
    );
    assert_eq!(engine.active_time_index(), Some(0));
    let hover = engine.hover_frame().expect("hover frame");
    assert!(hover.pointer.x.is_finite() && hover.pointer.y.is_finite());
    assert!(hover.tooltip.placement.left.is_finite());
    assert!(hover.tooltip.placement.top.is_finite());

    engine.pointer_move(
        SurfaceKind::CategoryRows,
        f64::INFINITY,
        ScreenPoint::new(0.0, 0.0),
    );
    assert_eq!(engine.active_time_index(), Some(support::DURATION));

    engine.pointer_move(SurfaceKind::Aggregate, -4_000.0, ScreenPoint::new(0.0, 0.0));
    assert_eq!(engine.active_time_index(), Some(0));
}

#[test]
fn tooltip_flips_near_right_and_bottom_edges() {
    let mut engine = engine();
    let screen = engine.screen_size();
    assert_eq!(screen.width, 1344);

    let pointer = ScreenPoint::new(1300.0, f64::from(screen.height) - 40.0);
    engine.pointer_move(SurfaceKind::Aggregate, 10.0, pointer);

    let tooltip = &engine.hover_frame().expect("hover frame").tooltip;
    assert_eq!(tooltip.width, 250.0);
    assert_eq!(tooltip.height, 84.0);
    assert_eq!(tooltip.placement.left, 1300.0 - 250.0 - 10.0);
    assert_eq!(tooltip.placement.top, pointer.y - 84.0);
}

#[test]
fn tooltip_follows_screen_size_changes() {
    let mut engine = engine();
    engine
        .set_screen_size(Viewport::new(600, 400))
        .expect("valid screen");
    assert!(engine.set_screen_size(Viewport::new(0, 400)).is_err());

    engine.pointer_move(SurfaceKind::Aggregate, 10.0, ScreenPoint::new(100.0, 50.0));
    let tooltip = &engine.hover_frame().expect("hover frame").tooltip;
    assert_eq!(tooltip.placement.left, 110.0);
    assert_eq!(tooltip.placement.top, 50.0);

    engine.pointer_move(SurfaceKind::Aggregate, 10.0, ScreenPoint::new(500.0, 50.0));
    let tooltip = &engine.hover_frame().expect("hover frame").tooltip;
    assert_eq!(tooltip.placement.left, 500.0 - 250.0 - 10.0);
}

#[test]
fn hover_dot_follows_active_index_on_both_columns() {
    let mut engine = engine();
    engine.render().expect("render idle");
    let idle_circles = engine.renderer().last_circle_count;

    engine.pointer_move(SurfaceKind::CategoryRows, 301.0, ScreenPoint::new(1.0, 1.0));
    engine.render().expect("render hovering");

    let rows = engine.layout().rows.len();
    assert_eq!(
        engine.renderer().last_circle_count,
        idle_circles + rows * PlayerSlot::BOTH.len()
    );
}
