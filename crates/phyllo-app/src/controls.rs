//! Control-panel actions and the view state they update.
//!
//! Every action produces a new [`ViewState`]; slider values are clamped to
//! their range and snapped to the slider step, the way a range input would.

use phyllo_config::schema::{POINTS_RANGE, POINT_SIZE_RANGE, RADIUS_RANGE, ROTATION_SPEED_RANGE};
use phyllo_config::{ColorScheme, SphereConfig, ThemeMode};

/// Every user-triggerable change to the sphere or theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    SetPoints(f64),
    SetRadius(f64),
    SetPointSize(f64),
    SetRotationSpeed(f64),
    SetLines(bool),
    ToggleLines,
    SetScheme(ColorScheme),
    SetTheme(ThemeMode),
    ToggleTheme,
    Reset,
}

impl ControlAction {
    pub fn label(&self) -> &'static str {
        match self {
            ControlAction::SetPoints(_) => "Point Count",
            ControlAction::SetRadius(_) => "Radius",
            ControlAction::SetPointSize(_) => "Point Size",
            ControlAction::SetRotationSpeed(_) => "Rotation Speed",
            ControlAction::SetLines(_) | ControlAction::ToggleLines => "Connect Lines",
            ControlAction::SetScheme(_) => "Color Scheme",
            ControlAction::SetTheme(_) | ControlAction::ToggleTheme => "Theme",
            ControlAction::Reset => "Reset",
        }
    }

    /// Whether the action changes anything the lattice is built from.
    pub fn affects_lattice(&self) -> bool {
        !matches!(self, ControlAction::SetRotationSpeed(_))
    }
}

/// Current sphere config and theme, plus the config `Reset` returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub config: SphereConfig,
    pub theme: ThemeMode,
    baseline: SphereConfig,
}

impl ViewState {
    pub fn new(config: SphereConfig, theme: ThemeMode) -> Self {
        let config = config.clamped();
        Self {
            config,
            theme,
            baseline: config,
        }
    }

    pub fn baseline(&self) -> SphereConfig {
        self.baseline
    }

    /// The state after `action`.
    pub fn apply(self, action: ControlAction) -> Self {
        let config = self.config;
        let (config, theme) = match action {
            ControlAction::SetPoints(v) => (
                config.with_points(POINTS_RANGE.clamp_snap(v) as u32),
                self.theme,
            ),
            ControlAction::SetRadius(v) => (
                config.with_radius(RADIUS_RANGE.clamp_snap(v) as f32),
                self.theme,
            ),
            ControlAction::SetPointSize(v) => (
                config.with_point_size(POINT_SIZE_RANGE.clamp_snap(v) as f32),
                self.theme,
            ),
            ControlAction::SetRotationSpeed(v) => (
                config.with_rotation_speed(ROTATION_SPEED_RANGE.clamp_snap(v) as f32),
                self.theme,
            ),
            ControlAction::SetLines(on) => (config.with_show_lines(on), self.theme),
            ControlAction::ToggleLines => (config.with_show_lines(!config.show_lines), self.theme),
            ControlAction::SetScheme(scheme) => (config.with_color_scheme(scheme), self.theme),
            ControlAction::SetTheme(mode) => (config, mode),
            ControlAction::ToggleTheme => (config, self.theme.toggled()),
            ControlAction::Reset => (self.baseline, self.theme),
        };
        Self {
            config,
            theme,
            ..self
        }
    }

    pub fn apply_all(self, actions: impl IntoIterator<Item = ControlAction>) -> Self {
        actions.into_iter().fold(self, Self::apply)
    }

    /// One-line HUD readout.
    pub fn status_line(&self) -> String {
        let c = &self.config;
        format!(
            "REF:{:04} // PHI:1.618 | r={} size={} speed={} lines={} scheme={} theme={}",
            c.points,
            c.radius,
            c.point_size,
            c.rotation_speed,
            if c.show_lines { "on" } else { "off" },
            c.color_scheme,
            self.theme,
        )
    }
}
