//! Continuous spin of the whole point group.

use serde::Serialize;

use super::matrix::{self, Mat4};

/// Z spins at this fraction of the Y rate.
pub const Z_SPIN_RATIO: f32 = 0.2;

/// Accumulated group rotation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SceneRotation {
    pub y: f32,
    pub z: f32,
}

impl SceneRotation {
    /// Advance by one frame of `delta_secs` at `speed` rad/s around Y.
    pub fn advance(&mut self, delta_secs: f32, speed: f32) {
        self.y += delta_secs * speed;
        self.z += delta_secs * speed * Z_SPIN_RATIO;
    }

    /// Group model matrix (XYZ Euler order with no X term).
    pub fn matrix(&self) -> Mat4 {
        matrix::mul(&matrix::rotate_y(self.y), &matrix::rotate_z(self.z))
    }
}
