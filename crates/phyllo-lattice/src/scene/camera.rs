//! Orbit camera looking at the origin.

use serde::Serialize;

use super::matrix::{self, Mat4};

pub const DEFAULT_DISTANCE: f32 = 40.0;
pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 100.0;
pub const FOV_Y_DEGREES: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera orbiting the origin; no panning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitCamera {
    pub distance: f32,
    /// Rotation around the world Y axis, radians.
    pub azimuth: f32,
    /// Angle above the XZ plane, radians.
    pub elevation: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            azimuth: 0.0,
            elevation: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth += d_azimuth;
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Multiply the distance by `factor`, clamped to the zoom limits.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn view(&self) -> Mat4 {
        let orbit = matrix::mul(
            &matrix::rotate_x(self.elevation),
            &matrix::rotate_y(-self.azimuth),
        );
        matrix::mul(&matrix::translate(0.0, 0.0, -self.distance), &orbit)
    }

    /// World-space camera position.
    pub fn eye(&self) -> [f32; 3] {
        let inverse = matrix::mul(
            &matrix::rotate_y(self.azimuth),
            &matrix::rotate_x(-self.elevation),
        );
        let [x, y, z, _] = matrix::transform_point(&inverse, [0.0, 0.0, self.distance]);
        [x, y, z]
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        matrix::perspective(FOV_Y_DEGREES.to_radians(), aspect, NEAR, FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        matrix::mul(&self.projection(aspect), &self.view())
    }
}
