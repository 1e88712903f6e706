use argmap_core::{ArgValue, POSITIONAL_KEY, coerce, parse};

#[test]
fn test_mixed_flags_options_and_positionals() {
    let parsed = parse(["a", "b", "--x", "1", "-yz", "--no-flag"]).unwrap();

    assert_eq!(
        parsed.positional(),
        &[ArgValue::Str("a".into()), ArgValue::Str("b".into())]
    );
    assert_eq!(parsed.get("x"), Some(&ArgValue::Float(1.0)));
    assert_eq!(parsed.get("y"), Some(&ArgValue::Bool(true)));
    assert_eq!(parsed.get("z"), Some(&ArgValue::Bool(true)));
    assert_eq!(parsed.get("flag"), Some(&ArgValue::Bool(false)));
    assert_eq!(parsed.flag_count(), 4);
}

#[test]
fn test_repeated_flags_nest_on_third_occurrence() {
    let parsed = parse(["--x=1", "--x=2", "--x=3"]).unwrap();

    let expected = ArgValue::List(vec![
        ArgValue::List(vec![ArgValue::Float(1.0), ArgValue::Float(2.0)]),
        ArgValue::Float(3.0),
    ]);
    assert_eq!(parsed.get("x"), Some(&expected));
}

#[test]
fn test_repeated_flag_pair_stays_flat() {
    let parsed = parse(["--x", "1", "--x", "2"]).unwrap();

    let expected = ArgValue::List(vec![ArgValue::Float(1.0), ArgValue::Float(2.0)]);
    assert_eq!(parsed.get("x"), Some(&expected));
}

#[test]
fn test_escape_marker_collects_remaining_tokens() {
    let parsed = parse(["a", "--", "b", "--c"]).unwrap();

    assert_eq!(
        parsed.positional(),
        &[
            ArgValue::Str("a".into()),
            ArgValue::Str("b".into()),
            ArgValue::Str("--c".into()),
        ]
    );
    assert!(!parsed.contains("c"));
}

#[test]
fn test_escaped_values_are_coerced_and_appended_last() {
    let parsed = parse(["--jobs", "2", "front", "--", "0x10", "tail"]).unwrap();

    assert_eq!(
        parsed.positional(),
        &[
            ArgValue::Str("front".into()),
            ArgValue::Uint(16),
            ArgValue::Str("tail".into()),
        ]
    );
    assert_eq!(parsed.get("jobs"), Some(&ArgValue::Float(2.0)));
}

#[test]
fn test_trailing_flag_defaults_to_true() {
    let parsed = parse(["--flag"]).unwrap();
    assert_eq!(parsed.get("flag"), Some(&ArgValue::Bool(true)));
}

#[test]
fn test_adjacent_flags_both_default_to_true() {
    let parsed = parse(["--a", "--b"]).unwrap();
    assert_eq!(parsed.get("a"), Some(&ArgValue::Bool(true)));
    assert_eq!(parsed.get("b"), Some(&ArgValue::Bool(true)));
}

#[test]
fn test_empty_input_yields_empty_positional_list_only() {
    let parsed = parse(std::iter::empty::<&str>()).unwrap();
    assert!(parsed.positional().is_empty());
    assert_eq!(parsed.flag_count(), 0);
    assert!(parsed.contains(POSITIONAL_KEY));
}

#[test]
fn test_coercion_priority_ordering() {
    let parsed = parse(["--a", "0x1A", "--b", "true", "--c", "3.14"]).unwrap();
    assert_eq!(parsed.get("a"), Some(&ArgValue::Uint(26)));
    assert_eq!(parsed.get("b"), Some(&ArgValue::Bool(true)));
    assert_eq!(parsed.get("c"), Some(&ArgValue::Float(3.14)));
}

#[test]
fn test_coercion_is_idempotent_over_display() {
    for value in [
        ArgValue::Float(3.14),
        ArgValue::Float(1000.0),
        ArgValue::Uint(26),
        ArgValue::Bool(true),
        ArgValue::Bool(false),
        ArgValue::Str("plain".into()),
    ] {
        assert_eq!(coerce(&value.to_string()), value);
    }
}

#[test]
fn test_inline_value_splits_on_first_equals_only() {
    let parsed = parse(["--env=KEY=VALUE"]).unwrap();
    assert_eq!(parsed.get("env"), Some(&ArgValue::Str("KEY=VALUE".into())));
}

#[test]
fn test_bool_overwrite_then_accumulation() {
    // Bundled -v stores a boolean, which the first long occurrence
    // overwrites; only then does repetition start a list.
    let parsed = parse(["-v", "--v", "1", "--v", "2"]).unwrap();
    assert_eq!(
        parsed.get("v"),
        Some(&ArgValue::List(vec![
            ArgValue::Float(1.0),
            ArgValue::Float(2.0)
        ]))
    );
}

#[test]
fn test_json_serialization_shape() {
    let parsed = parse(["a", "--x", "1", "--name", "svc", "--no-color"]).unwrap();
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "_": ["a"],
            "x": 1.0,
            "name": "svc",
            "color": false,
        })
    );
}

#[test]
fn test_json_serialization_of_nested_repeats() {
    let parsed = parse(["--x=1", "--x=2", "--x=3"]).unwrap();
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["x"], serde_json::json!([[1.0, 2.0], 3.0]));
}

#[test]
fn test_whitespace_is_trimmed_before_classification() {
    let parsed = parse(["  --x  ", "  7  ", "  plain  "]).unwrap();
    assert_eq!(parsed.get("x"), Some(&ArgValue::Float(7.0)));
    assert_eq!(parsed.positional(), &[ArgValue::Str("plain".into())]);
}
