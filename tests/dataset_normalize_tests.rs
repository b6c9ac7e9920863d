mod support;

use apm_viz::api::load_from_str;
use apm_viz::core::{EventGroup, PlayerSlot, RawPayload, normalize};
use serde_json::json;

fn normalize_value(value: serde_json::Value) -> apm_viz::ViewerResult<apm_viz::core::MatchRecord> {
    let raw: RawPayload = serde_json::from_value(value).expect("payload decodes");
    normalize(raw)
}

#[test]
fn normalizes_fixture_in_player_one_category_order() {
    let record = support::match_record();

    assert_eq!(record.duration(), support::DURATION);
    let ids: Vec<&str> = record.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["selection", "commands"]);
    assert_eq!(record.categories()[0].display_name, "Selection");
    assert_eq!(record.player(PlayerSlot::First).name(), "Serral");
    assert_eq!(record.player(PlayerSlot::Second).events().len(), 2);
    assert_eq!(
        record.series_value(PlayerSlot::Second, "commands", 50),
        Some(support::p2_commands(50))
    );
    assert_eq!(record.max_rate(), 100.0);
    assert!(record.metadata().is_some());
}

#[test]
fn event_groups_follow_event_kind() {
    let record = support::match_record();
    let groups: Vec<EventGroup> = record
        .player(PlayerSlot::First)
        .events()
        .iter()
        .map(|event| event.group())
        .collect();
    assert_eq!(
        groups,
        [
            EventGroup::Selection,
            EventGroup::Commands,
            EventGroup::Camera,
            EventGroup::Commands
        ]
    );
}

#[test]
fn stacked_totals_sum_categories_per_second() {
    let record = support::match_record();
    let totals = record.stacked_totals(PlayerSlot::First);
    assert_eq!(totals.len(), support::DURATION + 1);
    assert_eq!(totals[40], support::p1_selection(40) + support::p1_commands(40));
}

#[test]
fn mismatched_category_keys_are_malformed() {
    let mut value = support::match_json();
    value["p2"]["apms"]
        .as_object_mut()
        .expect("apms object")
        .remove("commands");

    let err = normalize_value(value).expect_err("must fail");
    assert!(err.is_malformed_dataset());
    assert!(err.to_string().contains("commands"));
}

#[test]
fn empty_rate_mapping_is_malformed() {
    let mut value = support::match_json();
    value["p1"]["apms"] = json!({});
    value["p2"]["apms"] = json!({});

    let err = normalize_value(value).expect_err("must fail");
    assert!(err.is_malformed_dataset());
}

#[test]
fn wrong_series_length_is_malformed() {
    let mut value = support::match_json();
    value["p1"]["apms"]["selection"] = json!([1.0, 2.0, 3.0]);

    let err = normalize_value(value).expect_err("must fail");
    assert!(err.is_malformed_dataset());
    assert!(err.to_string().contains("expected 101"));
}

#[test]
fn zero_or_fractional_game_length_is_malformed() {
    let mut value = support::match_json();
    value["game_length"] = json!(0);
    assert!(normalize_value(value).expect_err("zero").is_malformed_dataset());

    let mut value = support::match_json();
    value["game_length"] = json!(99.5);
    assert!(normalize_value(value).expect_err("fraction").is_malformed_dataset());
}

#[test]
fn oversized_game_length_is_malformed_instead_of_overflowing() {
    let text = r#"{
        "game_length": 1e20,
        "p1": {"name": "a", "apms": {"selection": []}},
        "p2": {"name": "b", "apms": {"selection": []}}
    }"#;

    let outcome = std::panic::catch_unwind(|| load_from_str(text));
    let err = outcome.expect("no panic").expect_err("must fail");
    assert!(err.is_malformed_dataset());
    assert!(err.to_string().contains("exceeds the supported maximum"));
}

#[test]
fn negative_rate_is_malformed() {
    let mut value = support::match_json();
    value["p2"]["apms"]["selection"][3] = json!(-1.0);

    let err = normalize_value(value).expect_err("must fail");
    assert!(err.is_malformed_dataset());
}

#[test]
fn missing_player_fails_decoding_as_malformed() {
    let mut value = support::match_json();
    value.as_object_mut().expect("object").remove("p2");

    let err = load_from_str(&value.to_string()).expect_err("must fail");
    assert!(err.is_malformed_dataset());
}

#[test]
fn snake_case_event_timestamps_are_accepted() {
    let mut value = support::match_json();
    value["p2"]["events"] = json!([
        { "type": "SelectionEvent", "location": [1.0, 2.0], "timestamp_seconds": 12.0 }
    ]);

    let record = normalize_value(value).expect("alias accepted");
    assert_eq!(
        record.player(PlayerSlot::Second).events()[0].timestamp_seconds,
        12.0
    );
}
