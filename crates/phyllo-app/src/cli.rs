use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use phyllo_config::{ColorScheme, ThemeMode};

use crate::controls::ControlAction;

/// Phyllo: golden-angle sphere lattices with a math-tutor chat.
#[derive(Parser, Debug)]
#[command(name = "phyllo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, phyllo_ai=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Start in this theme instead of the configured one.
    #[arg(long, global = true)]
    pub theme: Option<ThemeMode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the lattice points (and line segments).
    Generate {
        #[command(flatten)]
        sphere: SphereArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Draw the rotating sphere as text.
    Preview {
        #[command(flatten)]
        sphere: SphereArgs,

        /// Frames to draw, 1/30 s apart.
        #[arg(long, default_value_t = 1)]
        frames: u32,

        #[arg(long, default_value_t = 72)]
        width: usize,

        #[arg(long, default_value_t = 32)]
        height: usize,

        /// Emit 24-bit ANSI colors.
        #[arg(long)]
        color: bool,
    },
    /// Ask the tutor to explain a topic.
    Insight {
        /// Topic to explain; defaults to the current point count.
        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        points: Option<u32>,
    },
    /// Interactive tutor chat with sphere controls.
    Chat {
        /// Color the inline previews.
        #[arg(long)]
        color: bool,
    },
    /// Print the effective config, or write the default config file.
    Config {
        #[arg(long)]
        init: bool,
    },
}

/// Control-panel overrides shared by `generate` and `preview`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SphereArgs {
    #[arg(long)]
    pub points: Option<u32>,

    #[arg(long)]
    pub radius: Option<f32>,

    /// Point glyph size.
    #[arg(long = "size")]
    pub point_size: Option<f32>,

    /// Rotation speed in rad/s.
    #[arg(long)]
    pub speed: Option<f32>,

    #[arg(long)]
    pub scheme: Option<ColorScheme>,

    /// Connect consecutive points.
    #[arg(long)]
    pub lines: bool,
}

impl SphereArgs {
    /// The overrides as control actions, in panel order.
    pub fn actions(&self) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        if let Some(points) = self.points {
            actions.push(ControlAction::SetPoints(points as f64));
        }
        if let Some(radius) = self.radius {
            actions.push(ControlAction::SetRadius(radius as f64));
        }
        if let Some(size) = self.point_size {
            actions.push(ControlAction::SetPointSize(size as f64));
        }
        if let Some(speed) = self.speed {
            actions.push(ControlAction::SetRotationSpeed(speed as f64));
        }
        if let Some(scheme) = self.scheme {
            actions.push(ControlAction::SetScheme(scheme));
        }
        if self.lines {
            actions.push(ControlAction::SetLines(true));
        }
        actions
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub fn parse() -> Args {
    Args::parse()
}
