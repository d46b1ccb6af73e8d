use star_defender::config::ConfigError;
use star_defender::GameConfig;

#[test]
fn defaults_match_classic_layout() {
    let c = GameConfig::default();
    assert_eq!((c.arena_width, c.arena_height), (800.0, 600.0));
    assert_eq!((c.grid.rows, c.grid.cols), (5, 11));
    assert_eq!(c.target_population, 55);
    assert_eq!(c.starting_lives, 3);
    assert_eq!(c.win_score, 50_000);
    assert_eq!(c.tier_points, [10, 50, 100, 250, 400]);
    assert_eq!(c.enemy_fire_chance, 0.01);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let c = GameConfig::from_json_str(r#"{ "win_score": 1000, "grid": { "cols": 8 } }"#).unwrap();
    assert_eq!(c.win_score, 1000);
    assert_eq!(c.grid.cols, 8);
    assert_eq!(c.grid.rows, 5);
    assert_eq!(c.starting_lives, 3);
}

#[test]
fn malformed_json_is_an_error() {
    let err = GameConfig::from_json_str("{ win_score: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn defaults_are_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn grid_without_rows_is_rejected() {
    let err = GameConfig::from_json_str(r#"{ "grid": { "rows": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn more_rows_than_tiers_is_rejected() {
    let text = r#"{ "grid": { "rows": 7 }, "target_population": 77 }"#;
    let err = GameConfig::from_json_str(text).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn grid_without_columns_needs_zero_population() {
    let err = GameConfig::from_json_str(r#"{ "grid": { "cols": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let empty = r#"{ "grid": { "cols": 0 }, "target_population": 0 }"#;
    assert!(GameConfig::from_json_str(empty).is_ok());
}

#[test]
fn fire_chance_must_be_a_probability() {
    for chance in ["-0.1", "1.5"] {
        let text = format!(r#"{{ "enemy_fire_chance": {chance} }}"#);
        let err = GameConfig::from_json_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "chance {chance}");
    }
    assert!(GameConfig::from_json_str(r#"{ "enemy_fire_chance": 1.0 }"#).is_ok());
}
