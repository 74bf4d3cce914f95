use super::*;
use crate::schema::SphereConfig;

fn validation_message(config: &PhylloConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&PhylloConfig::default()).is_ok());
}

#[test]
fn boundary_values_are_valid() {
    let mut config = PhylloConfig::default();
    config.sphere = SphereConfig::default()
        .with_points(10)
        .with_radius(30.0)
        .with_point_size(1.0)
        .with_rotation_speed(0.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn points_out_of_range() {
    let mut config = PhylloConfig::default();
    config.sphere.points = 6000;
    let msg = validation_message(&config);
    assert!(msg.contains("sphere.points = 6000"));
}

#[test]
fn radius_and_size_out_of_range_collects_both() {
    let mut config = PhylloConfig::default();
    config.sphere.radius = 2.0;
    config.sphere.point_size = 3.0;
    let msg = validation_message(&config);
    assert!(msg.contains("sphere.radius"));
    assert!(msg.contains("sphere.point_size"));
    assert!(msg.contains("; "));
}

#[test]
fn nan_radius_is_invalid() {
    let mut config = PhylloConfig::default();
    config.sphere.radius = f32::NAN;
    assert!(validation_message(&config).contains("sphere.radius"));
}

#[test]
fn empty_model_is_invalid() {
    let mut config = PhylloConfig::default();
    config.ai.model = "  ".into();
    assert!(validation_message(&config).contains("ai.model"));
}

#[test]
fn temperature_out_of_range() {
    let mut config = PhylloConfig::default();
    config.ai.temperature = 2.5;
    assert!(validation_message(&config).contains("ai.temperature"));
}

#[test]
fn unknown_log_level() {
    let mut config = PhylloConfig::default();
    config.logging.level = "verbose".into();
    assert!(validation_message(&config).contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = PhylloConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn sanitize_leaves_valid_config_alone() {
    let mut config = PhylloConfig::default();
    config.sphere.points = 420;
    config.logging.level = "WARN".into();
    let fixed = sanitize(config.clone());
    assert_eq!(fixed.sphere, config.sphere);
    assert_eq!(fixed.logging.level, "WARN");
    assert_eq!(fixed.ai.model, config.ai.model);
}

#[test]
fn sanitize_repairs_each_bad_field() {
    let mut config = PhylloConfig::default();
    config.sphere.points = 6000;
    config.ai.model = " ".into();
    config.ai.temperature = f64::NAN;
    config.ai.max_tokens = 1_000_000;
    config.logging.level = "verbose".into();

    let fixed = sanitize(config);
    assert_eq!(fixed.sphere.points, 5000);
    assert_eq!(fixed.ai.model, "gemini-2.5-flash");
    assert_eq!(fixed.ai.temperature, 0.7);
    assert_eq!(fixed.ai.max_tokens, 65536);
    assert_eq!(fixed.logging.level, "info");
    assert!(validate(&fixed).is_ok());
}
