use todolite_core::{Activity, ActivityParseError};

#[test]
fn serialize_then_parse_roundtrips_all_fields() {
    let original = Activity::with_details("water the plants", true, 1_700_000_000);

    let parsed = Activity::parse_line(&original.serialize_line()).unwrap();
    assert_eq!(parsed.description, "water the plants");
    assert!(parsed.completed);
    assert_eq!(parsed.due_date, 1_700_000_000);
    assert_eq!(parsed, original);
}

#[test]
fn roundtrip_preserves_unset_due_date_and_pending_flag() {
    let original = Activity::new("call the bank");

    let parsed = Activity::parse_line(&original.serialize_line()).unwrap();
    assert_eq!(parsed, original);
    assert_eq!(parsed.due_date, 0);
    assert!(!parsed.completed);
}

#[test]
fn parse_rejects_lines_with_fewer_than_three_fields() {
    for line in ["", "just a description", "description;1"] {
        let err = Activity::parse_line(line).unwrap_err();
        assert_eq!(err, ActivityParseError::MissingFields, "line: `{line}`");
    }
}

#[test]
fn parse_rejects_empty_due_date_field() {
    let err = Activity::parse_line("task;1;").unwrap_err();
    assert!(matches!(err, ActivityParseError::InvalidDueDate(_)));
}

#[test]
fn parse_rejects_non_digit_due_date() {
    for line in ["task;1;abc", "task;1;17e3", "task;1;-5", "task;0;1;2"] {
        let err = Activity::parse_line(line).unwrap_err();
        assert!(
            matches!(err, ActivityParseError::InvalidDueDate(_)),
            "line: `{line}`"
        );
    }
}

#[test]
fn completed_flag_is_true_only_for_literal_one() {
    assert!(Activity::parse_line("task;1;0").unwrap().completed);
    for flag in ["0", "true", "yes", "2", ""] {
        let parsed = Activity::parse_line(&format!("task;{flag};0")).unwrap();
        assert!(!parsed.completed, "flag: `{flag}`");
    }
}

#[test]
fn activity_serde_wire_shape_is_stable() {
    let activity = Activity::with_details("review budget", false, 1_700_005_000);

    let json = serde_json::to_value(&activity).unwrap();
    assert_eq!(json["description"], "review budget");
    assert_eq!(json["completed"], false);
    assert_eq!(json["due_date"], 1_700_005_000_i64);

    let decoded: Activity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, activity);
}
