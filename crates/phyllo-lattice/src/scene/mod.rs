//! Retained-mode scene built from a lattice: point instances, line list,
//! camera, lights, and the per-frame group rotation.
//!
//! The scene is rebuilt whenever the config or theme changes; the rotation
//! carries over so the sphere keeps spinning smoothly.

pub mod camera;
pub mod matrix;
mod rotation;
pub mod shading;
mod types;

pub use camera::OrbitCamera;
pub use rotation::{SceneRotation, Z_SPIN_RATIO};
pub use shading::shade;
pub use types::{LineVertex, PointInstance};

use phyllo_common::Rgb;
use phyllo_config::theme::{LightingParams, MaterialParams};
use phyllo_config::{SphereConfig, ThemePalette};
use tracing::debug;

use crate::lattice::{generate, Lattice};

pub const KEY_LIGHT_POSITION: [f32; 3] = [50.0, 50.0, 50.0];
pub const FILL_LIGHT_POSITION: [f32; 3] = [-50.0, -50.0, -50.0];

/// Everything a renderer needs for one config/theme snapshot.
#[derive(Debug, Clone)]
pub struct Scene {
    pub config: SphereConfig,
    pub lattice: Lattice,
    pub instances: Vec<PointInstance>,
    pub line_vertices: Vec<LineVertex>,
    pub clear_color: Rgb,
    pub material: MaterialParams,
    pub lighting: LightingParams,
    pub rotation: SceneRotation,
    pub camera: OrbitCamera,
}

impl Scene {
    pub fn build(config: &SphereConfig, palette: &ThemePalette) -> Self {
        let lattice = generate(config, palette);
        let instances = build_instances(&lattice);
        let line_vertices = build_line_vertices(&lattice, palette);
        debug!(
            instances = instances.len(),
            line_vertices = line_vertices.len(),
            "scene built"
        );
        Self {
            config: *config,
            lattice,
            instances,
            line_vertices,
            clear_color: palette.background,
            material: palette.material,
            lighting: palette.lighting,
            rotation: SceneRotation::default(),
            camera: OrbitCamera::default(),
        }
    }

    /// Rebuild for a new snapshot, keeping rotation and camera.
    pub fn rebuild(&mut self, config: &SphereConfig, palette: &ThemePalette) {
        let rotation = self.rotation;
        let camera = self.camera;
        *self = Self::build(config, palette);
        self.rotation = rotation;
        self.camera = camera;
    }

    /// Advance the spin by one frame.
    pub fn tick(&mut self, delta_secs: f32) {
        self.rotation.advance(delta_secs, self.config.rotation_speed);
    }

    pub fn model_matrix(&self) -> matrix::Mat4 {
        self.rotation.matrix()
    }

    /// World-space center and lit color of every point at the current
    /// rotation. The sphere is centered on the origin, so a point's
    /// direction from the origin doubles as its surface normal.
    pub fn lit_points(&self) -> Vec<([f32; 3], Rgb)> {
        let model = self.model_matrix();
        let eye = self.camera.eye();
        self.instances
            .iter()
            .map(|inst| {
                let [x, y, z, _] = matrix::transform_point(&model, inst.center());
                let world = [x, y, z];
                let base = Rgb::new(inst.color[0], inst.color[1], inst.color[2]);
                let lit = shade(base, world, world, eye, &self.material, &self.lighting);
                (world, lit)
            })
            .collect()
    }
}

fn build_instances(lattice: &Lattice) -> Vec<PointInstance> {
    lattice
        .points
        .iter()
        .map(|p| PointInstance {
            model: matrix::translate(p.position[0], p.position[1], p.position[2]),
            color: [p.color[0], p.color[1], p.color[2], 1.0],
        })
        .collect()
}

fn build_line_vertices(lattice: &Lattice, palette: &ThemePalette) -> Vec<LineVertex> {
    let c = palette.line_color;
    let color = [c.r, c.g, c.b, palette.line_opacity];
    lattice
        .segments
        .iter()
        .flatten()
        .flat_map(|s| {
            [
                LineVertex {
                    position: s.start,
                    color,
                },
                LineVertex {
                    position: s.end,
                    color,
                },
            ]
        })
        .collect()
}
