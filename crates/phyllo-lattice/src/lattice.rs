//! Golden-angle (Fibonacci) lattice generation.
//!
//! Point `i` of `n` sits at height `y = 1 - 2i/(n-1)` on the unit sphere,
//! rotated `i` golden angles around the Y axis, then scaled by the radius.
//! Output is a pure function of the config and palette.

use phyllo_config::{SphereConfig, ThemePalette};
use serde::Serialize;
use tracing::debug;

use crate::color::scheme_color;

/// π(3 − √5), about 2.39996 rad (137.5°).
pub const GOLDEN_ANGLE: f64 = std::f64::consts::PI * (3.0 - 2.236_067_977_499_79);

/// One lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// A line joining two consecutive lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

/// Generated point set plus optional connecting lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lattice {
    pub points: Vec<Point>,
    /// `Some` with `points - 1` segments when lines are enabled.
    pub segments: Option<Vec<LineSegment>>,
}

impl Lattice {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interleaved `xyz` positions, the layout of an instanced position buffer.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.position).collect()
    }

    /// Interleaved `rgb` colors.
    pub fn colors_flat(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.color).collect()
    }

    /// Start/end vertex pairs for a line-segment draw; empty when lines are off.
    pub fn line_vertices(&self) -> Vec<f32> {
        self.segments
            .iter()
            .flatten()
            .flat_map(|s| s.start.into_iter().chain(s.end))
            .collect()
    }
}

/// Unit-sphere position and spiral angle of point `i` out of `n`.
///
/// A single point (`n = 1`) sits at the north pole.
pub fn lattice_point(i: usize, n: usize) -> ([f64; 3], f64) {
    let y = if n > 1 {
        1.0 - (i as f64 / (n - 1) as f64) * 2.0
    } else {
        1.0
    };
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = GOLDEN_ANGLE * i as f64;
    let x = theta.cos() * radius_at_y;
    let z = theta.sin() * radius_at_y;
    ([x, y, z], theta)
}

fn scaled(unit: [f64; 3], radius: f64) -> [f32; 3] {
    [
        (unit[0] * radius) as f32,
        (unit[1] * radius) as f32,
        (unit[2] * radius) as f32,
    ]
}

/// Generate the lattice for `config`, colored with `palette`.
pub fn generate(config: &SphereConfig, palette: &ThemePalette) -> Lattice {
    let n = config.points as usize;
    let radius = config.radius as f64;

    let points: Vec<Point> = (0..n)
        .map(|i| {
            let (unit, theta) = lattice_point(i, n);
            let color = scheme_color(config.color_scheme, palette, i, n, unit[1], theta);
            Point {
                position: scaled(unit, radius),
                color: color.to_array(),
            }
        })
        .collect();

    let segments: Option<Vec<LineSegment>> = config.show_lines.then(|| {
        points
            .windows(2)
            .map(|pair| LineSegment {
                start: pair[0].position,
                end: pair[1].position,
            })
            .collect()
    });

    debug!(
        points = n,
        radius,
        scheme = %config.color_scheme,
        theme = %palette.mode,
        lines = config.show_lines,
        "generated lattice"
    );

    Lattice { points, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phyllo_config::ColorScheme;

    fn config(points: u32, radius: f32) -> SphereConfig {
        SphereConfig::default().with_points(points).with_radius(radius)
    }

    fn norm(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn golden_angle_value() {
        assert!((GOLDEN_ANGLE - 2.399_963_229_728_653).abs() < 1e-12);
        assert!((GOLDEN_ANGLE.to_degrees() - 137.507_764).abs() < 1e-5);
    }

    #[test]
    fn produces_exactly_n_points_on_the_sphere() {
        for (n, r) in [(2, 5.0), (10, 5.0), (1000, 15.0), (5000, 30.0), (37, 7.5)] {
            let lattice = generate(&config(n, r), &ThemePalette::dark());
            assert_eq!(lattice.len(), n as usize);
            for p in &lattice.points {
                assert!(
                    (norm(p.position) - r).abs() < 1e-3 * r,
                    "|{:?}| != {r}",
                    p.position
                );
            }
        }
    }

    #[test]
    fn heights_strictly_decrease() {
        let lattice = generate(&config(500, 12.0), &ThemePalette::dark());
        for pair in lattice.points.windows(2) {
            assert!(pair[1].position[1] < pair[0].position[1]);
        }
    }

    #[test]
    fn ten_points_radius_five() {
        let lattice = generate(&config(10, 5.0), &ThemePalette::dark());
        assert_eq!(lattice.points[0].position, [0.0, 5.0, 0.0]);
        let last = lattice.points[9].position;
        assert!((last[1] + 5.0).abs() < 1e-5);
        assert!(last[0].abs() < 1e-5 && last[2].abs() < 1e-5);
    }

    #[test]
    fn golden_scheme_hits_palette_endpoints() {
        for palette in [ThemePalette::dark(), ThemePalette::light()] {
            let lattice = generate(&config(50, 10.0), &palette);
            assert_eq!(lattice.points[0].color, palette.golden[0].to_array());
            let last = lattice.points[49].color;
            let expected = palette.golden[1].to_array();
            for c in 0..3 {
                assert!((last[c] - expected[c]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let cfg = config(777, 13.5)
            .with_show_lines(true)
            .with_color_scheme(ColorScheme::Cyber);
        let a = generate(&cfg, &ThemePalette::light());
        let b = generate(&cfg, &ThemePalette::light());
        assert_eq!(a, b);
        let bits = |l: &Lattice| -> Vec<u32> {
            l.positions_flat().iter().map(|f| f.to_bits()).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn lines_off_means_no_segments() {
        let lattice = generate(&config(100, 10.0), &ThemePalette::dark());
        assert!(lattice.segments.is_none());
        assert!(lattice.line_vertices().is_empty());
    }

    #[test]
    fn lines_connect_index_successors() {
        let lattice = generate(
            &config(100, 10.0).with_show_lines(true),
            &ThemePalette::dark(),
        );
        let segments = lattice.segments.as_ref().unwrap();
        assert_eq!(segments.len(), 99);
        for (i, s) in segments.iter().enumerate() {
            assert_eq!(s.start, lattice.points[i].position);
            assert_eq!(s.end, lattice.points[i + 1].position);
        }
        assert_eq!(lattice.line_vertices().len(), 99 * 6);
    }

    #[test]
    fn single_point_sits_at_north_pole() {
        let lattice = generate(&config(1, 5.0).with_show_lines(true), &ThemePalette::dark());
        assert_eq!(lattice.points.len(), 1);
        assert_eq!(lattice.points[0].position, [0.0, 5.0, 0.0]);
        assert_eq!(lattice.segments.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn zero_points_is_empty() {
        let lattice = generate(&config(0, 5.0), &ThemePalette::dark());
        assert!(lattice.is_empty());
    }

    #[test]
    fn theme_changes_colors_not_positions() {
        let cfg = config(64, 9.0);
        let dark = generate(&cfg, &ThemePalette::dark());
        let light = generate(&cfg, &ThemePalette::light());
        assert_eq!(dark.positions_flat(), light.positions_flat());
        assert_ne!(dark.colors_flat(), light.colors_flat());
    }

    #[test]
    fn flat_buffers_have_three_floats_per_point() {
        let lattice = generate(&config(20, 5.0), &ThemePalette::dark());
        assert_eq!(lattice.positions_flat().len(), 60);
        assert_eq!(lattice.colors_flat().len(), 60);
        assert_eq!(lattice.positions_flat()[3..6], lattice.points[1].position);
    }

    #[test]
    fn lattice_serializes_to_json() {
        let lattice = generate(&config(10, 5.0), &ThemePalette::dark());
        let json = serde_json::to_value(&lattice).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 10);
        assert!(json["segments"].is_null());
    }
}
