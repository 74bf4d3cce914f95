//! Sphere parameter validation.

use crate::schema::{
    PhylloConfig, POINTS_RANGE, POINT_SIZE_RANGE, RADIUS_RANGE, ROTATION_SPEED_RANGE,
};

use super::helpers::{validate_range, validate_slider};

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &PhylloConfig) {
    let sphere = &config.sphere;
    validate_range(
        errors,
        "sphere.points",
        sphere.points,
        POINTS_RANGE.min as u32,
        POINTS_RANGE.max as u32,
    );
    validate_slider(errors, "sphere.radius", sphere.radius as f64, RADIUS_RANGE);
    validate_slider(
        errors,
        "sphere.point_size",
        sphere.point_size as f64,
        POINT_SIZE_RANGE,
    );
    validate_slider(
        errors,
        "sphere.rotation_speed",
        sphere.rotation_speed as f64,
        ROTATION_SPEED_RANGE,
    );
}
