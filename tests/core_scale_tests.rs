mod support;

use apm_viz::charts::build_scales;
use apm_viz::core::{LinearScale, MagnitudeScale, TimeScale, TimeWindow};
use approx::assert_abs_diff_eq;

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_rejects_empty_domain() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::NAN, 0.0, 100.0).is_err());
}

#[test]
fn time_scale_maps_full_match_onto_column_width() {
    let scale = TimeScale::new(100, 602.0).expect("valid scale");

    assert_eq!(scale.time_to_pixel(0.0).expect("left"), 0.0);
    assert_abs_diff_eq!(scale.time_to_pixel(100.0).expect("right"), 602.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.time_to_pixel(50.0).expect("middle"), 301.0, epsilon = 1e-9);
}

#[test]
fn time_scale_rejects_zero_duration() {
    assert!(TimeScale::new(0, 100.0).is_err());
    assert!(TimeScale::new(10, 0.0).is_err());
}

#[test]
fn time_scale_visible_range_controls_mapping() {
    let mut scale = TimeScale::new(100, 500.0).expect("valid scale");
    scale.set_visible_range(TimeWindow::new(60, 20));

    assert_eq!(scale.visible_range(), TimeWindow::new(20, 60));
    assert_eq!(scale.time_to_pixel(20.0).expect("left"), 0.0);
    assert_abs_diff_eq!(scale.time_to_pixel(60.0).expect("right"), 500.0, epsilon = 1e-9);
    assert_eq!(scale.pixel_to_time_index(250.0), 40);
    assert_eq!(scale.pixel_to_time_index(-50.0), 20);
    assert_eq!(scale.pixel_to_time_index(900.0), 60);
}

#[test]
fn time_scale_degenerate_or_overflowing_window_is_tamed() {
    let mut scale = TimeScale::new(100, 500.0).expect("valid scale");
    scale.set_visible_range(TimeWindow::new(30, 30));
    assert_eq!(scale.visible_range(), TimeWindow::full(100));

    scale.set_visible_range(TimeWindow::new(80, 400));
    assert_eq!(scale.visible_range(), TimeWindow::new(80, 100));

    scale.reset_visible_range_to_full();
    assert_eq!(scale.visible_range(), scale.full_range());
}

#[test]
fn pixel_to_time_index_handles_non_finite_offsets() {
    let scale = TimeScale::new(100, 602.0).expect("valid scale");

    assert_eq!(scale.pixel_to_time_index(f64::NAN), 0);
    assert_eq!(scale.pixel_to_time_index(f64::INFINITY), 100);
    assert_eq!(scale.pixel_to_time_index(f64::NEG_INFINITY), 0);
}

#[test]
fn magnitude_scale_is_inverted_and_falls_back_to_unit_domain() {
    let scale = MagnitudeScale::new(40.0, 200.0).expect("valid scale");
    assert_eq!(scale.value_to_pixel(0.0).expect("bottom"), 200.0);
    assert_eq!(scale.value_to_pixel(40.0).expect("top"), 0.0);

    let flat = MagnitudeScale::new(0.0, 200.0).expect("zero max allowed");
    assert_eq!(flat.domain(), (0.0, 1.0));
    assert_eq!(flat.value_to_pixel(0.0).expect("bottom"), 200.0);
}

#[test]
fn build_scales_uses_observed_maximum_and_declaration_order_palette() {
    let record = support::match_record();
    let scales = build_scales(&record, 602.0, 220.0).expect("scales");

    assert_eq!(scales.magnitude_scale().domain(), (0.0, 100.0));
    assert_abs_diff_eq!(scales.magnitude2y(50.0).expect("y"), 110.0, epsilon = 1e-9);
    assert_eq!(scales.x2time(scales.time2x(37.0).expect("x")), 37);

    let selection = scales.category2color("selection").expect("declared");
    let commands = scales.category2color("commands").expect("declared");
    assert_eq!(selection, apm_viz::render::Color::from_hex("#FF0000").expect("hex"));
    assert_eq!(commands, apm_viz::render::Color::from_hex("#009933").expect("hex"));
    assert_eq!(scales.category2color("selection"), Some(selection));
    assert_eq!(scales.category2color("unknown"), None);
}
