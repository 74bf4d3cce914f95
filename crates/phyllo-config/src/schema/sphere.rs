//! Sphere (lattice) configuration types and slider ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Range and step of one control-panel slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into `[min, max]` and snap to the nearest step above `min`.
    ///
    /// NaN maps to `min`.
    pub fn clamp_snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Snapping can overshoot `max` when the range is not a whole number of steps.
        let snapped = snapped.min(self.max);
        // Trim representation noise such as 0.15000000000000002.
        (snapped * 1e6).round() / 1e6
    }
}

pub const POINTS_RANGE: SliderRange = SliderRange::new(10.0, 5000.0, 10.0);
pub const RADIUS_RANGE: SliderRange = SliderRange::new(5.0, 30.0, 0.5);
pub const POINT_SIZE_RANGE: SliderRange = SliderRange::new(0.01, 1.0, 0.01);
pub const ROTATION_SPEED_RANGE: SliderRange = SliderRange::new(0.0, 2.0, 0.05);

/// How points are colored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Two-color gradient from pole to pole.
    #[default]
    Golden,
    /// Hue sweep along the spiral index.
    Rainbow,
    /// Two-color blend driven by the spiral angle.
    Cyber,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [Self::Golden, Self::Rainbow, Self::Cyber];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Golden => "golden",
            Self::Rainbow => "rainbow",
            Self::Cyber => "cyber",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "golden" => Ok(Self::Golden),
            "rainbow" => Ok(Self::Rainbow),
            "cyber" => Ok(Self::Cyber),
            other => Err(format!(
                "unknown color scheme '{other}' (expected golden, rainbow or cyber)"
            )),
        }
    }
}

/// Parameters of the point distribution and its presentation.
///
/// Treated as an immutable snapshot: every change produces a new value
/// through the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub points: u32,
    pub radius: f32,
    pub point_size: f32,
    pub rotation_speed: f32,
    pub show_lines: bool,
    pub color_scheme: ColorScheme,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            points: 1000,
            radius: 15.0,
            point_size: 0.15,
            rotation_speed: 0.2,
            show_lines: false,
            color_scheme: ColorScheme::Golden,
        }
    }
}

impl SphereConfig {
    pub fn with_points(self, points: u32) -> Self {
        Self { points, ..self }
    }

    pub fn with_radius(self, radius: f32) -> Self {
        Self { radius, ..self }
    }

    pub fn with_point_size(self, point_size: f32) -> Self {
        Self { point_size, ..self }
    }

    pub fn with_rotation_speed(self, rotation_speed: f32) -> Self {
        Self {
            rotation_speed,
            ..self
        }
    }

    pub fn with_show_lines(self, show_lines: bool) -> Self {
        Self { show_lines, ..self }
    }

    pub fn with_color_scheme(self, color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            ..self
        }
    }

    /// Pull every numeric field into its slider range, snapped to the slider step.
    pub fn clamped(self) -> Self {
        Self {
            points: POINTS_RANGE.clamp_snap(self.points as f64) as u32,
            radius: RADIUS_RANGE.clamp_snap(self.radius as f64) as f32,
            point_size: POINT_SIZE_RANGE.clamp_snap(self.point_size as f64) as f32,
            rotation_speed: ROTATION_SPEED_RANGE.clamp_snap(self.rotation_speed as f64) as f32,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_control_panel() {
        let c = SphereConfig::default();
        assert_eq!(c.points, 1000);
        assert_eq!(c.radius, 15.0);
        assert_eq!(c.point_size, 0.15);
        assert_eq!(c.rotation_speed, 0.2);
        assert!(!c.show_lines);
        assert_eq!(c.color_scheme, ColorScheme::Golden);
    }

    #[test]
    fn clamp_snap_points() {
        assert_eq!(POINTS_RANGE.clamp_snap(3.0), 10.0);
        assert_eq!(POINTS_RANGE.clamp_snap(9999.0), 5000.0);
        assert_eq!(POINTS_RANGE.clamp_snap(1234.0), 1230.0);
        assert_eq!(POINTS_RANGE.clamp_snap(1236.0), 1240.0);
    }

    #[test]
    fn clamp_snap_radius_half_steps() {
        assert_eq!(RADIUS_RANGE.clamp_snap(7.3), 7.5);
        assert_eq!(RADIUS_RANGE.clamp_snap(7.2), 7.0);
        assert_eq!(RADIUS_RANGE.clamp_snap(1.0), 5.0);
    }

    #[test]
    fn clamp_snap_trims_float_noise() {
        assert_eq!(POINT_SIZE_RANGE.clamp_snap(0.153), 0.15);
        assert_eq!(ROTATION_SPEED_RANGE.clamp_snap(0.62), 0.6);
    }

    #[test]
    fn clamp_snap_nan_is_min() {
        assert_eq!(RADIUS_RANGE.clamp_snap(f64::NAN), 5.0);
    }

    #[test]
    fn clamped_config_is_in_range() {
        let c = SphereConfig::default()
            .with_points(2)
            .with_radius(100.0)
            .with_point_size(0.0)
            .with_rotation_speed(-1.0)
            .clamped();
        assert_eq!(c.points, 10);
        assert_eq!(c.radius, 30.0);
        assert_eq!(c.point_size, 0.01);
        assert_eq!(c.rotation_speed, 0.0);
    }

    #[test]
    fn builders_replace_one_field() {
        let base = SphereConfig::default();
        let next = base.with_show_lines(true);
        assert!(next.show_lines);
        assert_eq!(next.points, base.points);
        assert!(!base.show_lines);
    }

    #[test]
    fn color_scheme_parse_and_display() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.to_string().parse::<ColorScheme>().unwrap(), scheme);
        }
        assert_eq!(" CYBER ".parse::<ColorScheme>().unwrap(), ColorScheme::Cyber);
        assert!("plaid".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn partial_sphere_toml_uses_defaults() {
        let c: SphereConfig = toml::from_str("points = 200\ncolor_scheme = \"rainbow\"").unwrap();
        assert_eq!(c.points, 200);
        assert_eq!(c.color_scheme, ColorScheme::Rainbow);
        assert_eq!(c.radius, 15.0);
    }
}
