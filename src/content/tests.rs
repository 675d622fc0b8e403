//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{TuningFile, parse_tuning, resolve_tuning, validate_tuning};

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let contents = include_str!("../../assets/data/tuning.ron");
    let tuning = parse_tuning("tuning.ron", contents).expect("shipped tuning should parse");

    assert_eq!(tuning.schema_version, 1);
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let contents = include_str!("../../assets/data/tuning.ron");
    let tuning = parse_tuning("tuning.ron", contents).unwrap();

    let defaults = TuningFile {
        schema_version: 1,
        ..TuningFile::default()
    };
    assert_eq!(tuning, defaults);
}

#[test]
fn test_partial_sections_fall_back_to_defaults() {
    let tuning = parse_tuning("inline", "(movement: (max_speed: 7.5))").unwrap();

    assert_eq!(tuning.movement.max_speed, 7.5);
    assert_eq!(tuning.movement.turn_rate, 250.0);
    assert_eq!(tuning.stamina.max, 100.0);
}

#[test]
fn test_parse_error_names_source() {
    let err = parse_tuning("broken.ron", "(movement: ").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_validation_reports_bad_ranges() {
    let mut tuning = TuningFile::default();
    tuning.movement.max_speed = 0.0;
    tuning.movement.slide_height = 1.5;
    tuning.stamina.max = -1.0;

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| (e.section, e.field)).collect();

    assert!(fields.contains(&("movement", "max_speed")));
    assert!(fields.contains(&("movement", "slide_height")));
    // slide_speed (2.0) now exceeds max_speed (0.0)
    assert!(fields.contains(&("movement", "slide_speed")));
    assert!(fields.contains(&("stamina", "max")));
    assert_eq!(errors.len(), 4);
}

#[test]
fn test_missing_file_resolves_to_defaults() {
    let tuning = resolve_tuning(Path::new("does/not/exist/tuning.ron"));

    assert_eq!(tuning, TuningFile::default());
}
