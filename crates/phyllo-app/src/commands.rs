//! Subcommand handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use phyllo_ai::tutor::{default_topic, INSIGHT_FAILURE_TEXT};
use phyllo_ai::{AiClient, AiError, GeminiClient, GeminiConfig, MathTutor};
use phyllo_common::PhylloError;
use phyllo_config::theme::resolve_palettes;
use phyllo_config::toml_loader::{create_default_config, default_config_path};
use phyllo_config::{PhylloConfig, ThemeMode, ThemePalette};
use phyllo_lattice::scene::Scene;
use tracing::{info, warn};

use crate::cli::{OutputFormat, SphereArgs};
use crate::controls::{ControlAction, ViewState};
use crate::output;
use crate::preview;
use crate::repl::Repl;

const FRAME_SECS: f32 = 1.0 / 30.0;

/// Dark and light palettes; a broken custom theme falls back to the built-ins.
pub fn palettes(config: &PhylloConfig) -> [ThemePalette; 2] {
    resolve_palettes(&config.theme).unwrap_or_else(|e| {
        warn!("custom theme ignored: {e}");
        [ThemePalette::dark(), ThemePalette::light()]
    })
}

/// The palette of `mode` out of a [`palettes`] pair.
pub(crate) fn palette_for(palettes: &[ThemePalette; 2], mode: ThemeMode) -> ThemePalette {
    if mode.is_dark() {
        palettes[0]
    } else {
        palettes[1]
    }
}

fn view_with(view: ViewState, sphere: &SphereArgs) -> ViewState {
    view.apply_all(sphere.actions())
}

pub fn generate(
    config: &PhylloConfig,
    view: ViewState,
    sphere: &SphereArgs,
    format: OutputFormat,
) -> Result<(), PhylloError> {
    let view = view_with(view, sphere);
    let palette = palette_for(&palettes(config), view.theme);
    let lattice = phyllo_lattice::generate(&view.config, &palette);
    println!("{}", output::render(&lattice, format)?);
    Ok(())
}

pub async fn preview(
    config: &PhylloConfig,
    view: ViewState,
    sphere: &SphereArgs,
    frames: u32,
    width: usize,
    height: usize,
    color: bool,
) -> Result<(), PhylloError> {
    if width == 0 || height == 0 {
        return Err(PhylloError::Other(format!(
            "preview size must be non-zero (got {width}x{height})"
        )));
    }
    let view = view_with(view, sphere);
    let palette = palette_for(&palettes(config), view.theme);
    let mut scene = Scene::build(&view.config, &palette);
    let mut ticker = tokio::time::interval(Duration::from_secs_f32(FRAME_SECS));

    for frame in 0..frames.max(1) {
        if frame > 0 {
            ticker.tick().await;
            scene.tick(FRAME_SECS);
            // Home the cursor so frames overwrite each other.
            print!("\x1b[H");
        }
        print!("{}", preview::render(&scene, width, height).to_text(color));
    }
    println!("{}", view.status_line());
    Ok(())
}

/// Gemini-backed tutor, or the reason it could not be built.
pub fn build_tutor(config: &PhylloConfig) -> Result<MathTutor, AiError> {
    let gemini = GeminiConfig::from_ai_config(&config.ai)?;
    let client: Arc<dyn AiClient> = Arc::new(GeminiClient::new(gemini)?);
    Ok(MathTutor::from_config(client, &config.ai))
}

fn tutor_or_warn(config: &PhylloConfig) -> Option<MathTutor> {
    match build_tutor(config) {
        Ok(tutor) => Some(tutor),
        Err(e) => {
            warn!("Gemini client unavailable: {e}");
            None
        }
    }
}

pub async fn insight(
    config: &PhylloConfig,
    view: ViewState,
    topic: Option<String>,
    points: Option<u32>,
) {
    let view = match points {
        Some(p) => view.apply(ControlAction::SetPoints(p as f64)),
        None => view,
    };
    let points = view.config.points;
    let topic = topic.unwrap_or_else(|| default_topic(points));
    let text = match tutor_or_warn(config) {
        Some(tutor) => tutor.insight(points, &topic).await,
        None => INSIGHT_FAILURE_TEXT.to_string(),
    };
    println!("{text}");
}

pub async fn chat(config: &PhylloConfig, view: ViewState, color: bool) -> Result<(), PhylloError> {
    let repl = Repl::new(view, palettes(config), tutor_or_warn(config)).with_color(color);
    repl.run(config).await?;
    Ok(())
}

/// Print the effective config as JSON, or write the default file with `init`.
pub fn config(config: &PhylloConfig, path: Option<&Path>, init: bool) -> Result<(), PhylloError> {
    if !init {
        println!("{}", phyllo_config::config_to_json(config));
        return Ok(());
    }
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    init_config(&path)?;
    println!("{}", path.display());
    Ok(())
}

/// Write the default config unless a file already exists at `path`.
pub fn init_config(path: &Path) -> Result<bool, PhylloError> {
    if path.exists() {
        info!("config already exists at {}", path.display());
        return Ok(false);
    }
    create_default_config(path)?;
    Ok(true)
}
