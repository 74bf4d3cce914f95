//! Per-instance and line layouts handed to renderers.

use super::matrix::Mat4;

/// One lattice point: model matrix + rgba.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointInstance {
    pub model: Mat4,
    pub color: [f32; 4],
}

/// Endpoint of a connecting line with its (translucent) color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl PointInstance {
    /// World-space center, read from the translation column.
    pub fn center(&self) -> [f32; 3] {
        [self.model[12], self.model[13], self.model[14]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::matrix;

    #[test]
    fn center_reads_translation() {
        let inst = PointInstance {
            model: matrix::translate(1.0, -2.0, 3.5),
            color: [1.0, 0.5, 0.0, 1.0],
        };
        assert_eq!(inst.center(), [1.0, -2.0, 3.5]);
    }
}
