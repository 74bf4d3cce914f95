//! Line-based chat panel: Enter sends, slash commands drive the controls.

use std::io::Write as _;

use phyllo_ai::tutor::{default_topic, CHAT_FAILURE_TEXT, INSIGHT_FAILURE_TEXT, SUGGESTED_TOPICS};
use phyllo_ai::{MathTutor, Session};
use phyllo_config::{ColorScheme, PhylloConfig, ThemePalette};
use phyllo_lattice::scene::Scene;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::commands::palette_for;
use crate::controls::{ControlAction, ViewState};
use crate::preview;

const PREVIEW_WIDTH: usize = 48;
const PREVIEW_HEIGHT: usize = 22;

const HELP: &str = "\
commands:
  /points N      /radius R      /size S       /speed V
  /lines         /scheme golden|rainbow|cyber /theme
  /reset         /config        /usage
  /topics        /insight [topic | 1-3]
  /help          /quit
anything else is sent to the tutor";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Control(ControlAction),
    ShowConfig,
    Topics,
    Insight(Option<String>),
    Usage,
    Help,
    Quit,
    Message(String),
    Empty,
}

fn number(name: &str, arg: Option<&str>) -> Result<f64, String> {
    let arg = arg.ok_or_else(|| format!("/{name} needs a value"))?;
    arg.parse::<f64>()
        .map_err(|_| format!("/{name}: '{arg}' is not a number"))
}

pub fn parse_line(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplCommand::Empty);
    }
    let Some(command) = line.strip_prefix('/') else {
        return Ok(ReplCommand::Message(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (command, None),
    };

    let parsed = match name.to_ascii_lowercase().as_str() {
        "points" => ReplCommand::Control(ControlAction::SetPoints(number(name, rest)?)),
        "radius" => ReplCommand::Control(ControlAction::SetRadius(number(name, rest)?)),
        "size" => ReplCommand::Control(ControlAction::SetPointSize(number(name, rest)?)),
        "speed" => ReplCommand::Control(ControlAction::SetRotationSpeed(number(name, rest)?)),
        "lines" => ReplCommand::Control(ControlAction::ToggleLines),
        "scheme" => {
            let arg = rest.ok_or("/scheme needs golden, rainbow or cyber")?;
            ReplCommand::Control(ControlAction::SetScheme(arg.parse::<ColorScheme>()?))
        }
        "theme" => ReplCommand::Control(ControlAction::ToggleTheme),
        "reset" => ReplCommand::Control(ControlAction::Reset),
        "config" => ReplCommand::ShowConfig,
        "topics" => ReplCommand::Topics,
        "insight" => ReplCommand::Insight(rest.map(resolve_topic)),
        "usage" => ReplCommand::Usage,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => return Err(format!("unknown command /{other} (try /help)")),
    };
    Ok(parsed)
}

/// `1`..`3` pick a suggested topic; anything else is taken literally.
fn resolve_topic(arg: &str) -> String {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| SUGGESTED_TOPICS.get(i))
        .map_or_else(|| arg.to_string(), |t| t.to_string())
}

/// Interactive chat state.
pub struct Repl {
    view: ViewState,
    palettes: [ThemePalette; 2],
    scene: Scene,
    tutor: Option<MathTutor>,
    session: Option<Session>,
    color: bool,
}

impl Repl {
    pub fn new(view: ViewState, palettes: [ThemePalette; 2], tutor: Option<MathTutor>) -> Self {
        let scene = Scene::build(&view.config, &palette_for(&palettes, view.theme));
        let session = tutor.as_ref().map(MathTutor::new_chat_session);
        Self {
            view,
            palettes,
            scene,
            tutor,
            session,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Apply a control action, rebuilding the scene when needed.
    pub fn control(&mut self, action: ControlAction) {
        let next = self.view.apply(action);
        if next == self.view {
            return;
        }
        debug!(action = action.label(), "control changed");
        self.view = next;
        if action.affects_lattice() {
            let palette = palette_for(&self.palettes, self.view.theme);
            self.scene.rebuild(&self.view.config, &palette);
        } else {
            self.scene.config = self.view.config;
        }
    }

    fn print_preview(&mut self) {
        // Advance a quarter second so consecutive previews show the spin.
        for _ in 0..8 {
            self.scene.tick(1.0 / 30.0);
        }
        let frame = preview::render(&self.scene, PREVIEW_WIDTH, PREVIEW_HEIGHT);
        print!("{}", frame.to_text(self.color));
        println!("{}", self.view.status_line());
    }

    async fn insight(&self, topic: Option<String>) {
        let points = self.view.config.points;
        let topic = topic.unwrap_or_else(|| default_topic(points));
        println!("[insight] {topic}");
        let text = match &self.tutor {
            Some(tutor) => tutor.insight(points, &topic).await,
            None => INSIGHT_FAILURE_TEXT.to_string(),
        };
        println!("{text}\n");
    }

    async fn send(&self, message: &str) {
        let (Some(tutor), Some(session)) = (&self.tutor, &self.session) else {
            warn!("chat unavailable: Gemini client not configured");
            println!("model> {CHAT_FAILURE_TEXT}");
            return;
        };
        print!("model> ");
        let _ = std::io::stdout().flush();
        let reply = tutor
            .chat(session, message, |chunk| {
                print!("{chunk}");
                let _ = std::io::stdout().flush();
            })
            .await;
        if reply.is_some() {
            println!();
        }
    }

    fn print_usage(&self) {
        match &self.session {
            Some(session) => {
                let usage = session.usage();
                println!(
                    "{} calls, {} input + {} output tokens, {} messages",
                    usage.call_count(),
                    usage.total().input_tokens,
                    usage.total().output_tokens,
                    session.message_count()
                );
            }
            None => println!("no chat session"),
        }
    }

    /// Handle one command. Returns `false` when the loop should stop.
    pub async fn handle(&mut self, command: ReplCommand, config: &PhylloConfig) -> bool {
        match command {
            ReplCommand::Control(action) => {
                self.control(action);
                self.print_preview();
            }
            ReplCommand::ShowConfig => {
                let effective = PhylloConfig {
                    sphere: self.view.config,
                    theme: phyllo_config::ThemeConfig {
                        mode: self.view.theme,
                        ..config.theme.clone()
                    },
                    ..config.clone()
                };
                println!("{}", phyllo_config::config_to_json(&effective));
            }
            ReplCommand::Topics => {
                for (i, topic) in SUGGESTED_TOPICS.iter().enumerate() {
                    println!("  {}. {topic}", i + 1);
                }
            }
            ReplCommand::Insight(topic) => self.insight(topic).await,
            ReplCommand::Usage => self.print_usage(),
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => return false,
            ReplCommand::Message(text) => self.send(&text).await,
            ReplCommand::Empty => {}
        }
        true
    }

    /// Read stdin until EOF or `/quit`.
    pub async fn run(mut self, config: &PhylloConfig) -> std::io::Result<()> {
        println!("{HELP}\n");
        self.print_preview();
        self.insight(None).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("you> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match parse_line(&line) {
                Ok(command) => {
                    if !self.handle(command, config).await {
                        break;
                    }
                }
                Err(e) => println!("{e}"),
            }
        }
        info!("chat closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phyllo_config::{SphereConfig, ThemeMode};

    fn repl() -> Repl {
        Repl::new(
            ViewState::new(SphereConfig::default(), ThemeMode::Dark),
            [ThemePalette::dark(), ThemePalette::light()],
            None,
        )
    }

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(
            parse_line("  why 137.5?  ").unwrap(),
            ReplCommand::Message("why 137.5?".into())
        );
        assert_eq!(parse_line("   ").unwrap(), ReplCommand::Empty);
    }

    #[test]
    fn slider_commands_parse_numbers() {
        assert_eq!(
            parse_line("/points 500").unwrap(),
            ReplCommand::Control(ControlAction::SetPoints(500.0))
        );
        assert_eq!(
            parse_line("/size 0.4").unwrap(),
            ReplCommand::Control(ControlAction::SetPointSize(0.4))
        );
        assert!(parse_line("/radius").is_err());
        assert!(parse_line("/speed fast").is_err());
    }

    #[test]
    fn scheme_and_toggles() {
        assert_eq!(
            parse_line("/scheme Rainbow").unwrap(),
            ReplCommand::Control(ControlAction::SetScheme(ColorScheme::Rainbow))
        );
        assert!(parse_line("/scheme plaid").is_err());
        assert_eq!(
            parse_line("/lines").unwrap(),
            ReplCommand::Control(ControlAction::ToggleLines)
        );
        assert_eq!(
            parse_line("/theme").unwrap(),
            ReplCommand::Control(ControlAction::ToggleTheme)
        );
    }

    #[test]
    fn insight_topics() {
        assert_eq!(parse_line("/insight").unwrap(), ReplCommand::Insight(None));
        assert_eq!(
            parse_line("/insight 2").unwrap(),
            ReplCommand::Insight(Some(SUGGESTED_TOPICS[1].to_string()))
        );
        assert_eq!(
            parse_line("/insight 9").unwrap(),
            ReplCommand::Insight(Some("9".into()))
        );
        assert_eq!(
            parse_line("/insight spiral galaxies").unwrap(),
            ReplCommand::Insight(Some("spiral galaxies".into()))
        );
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse_line("/warp 9").unwrap_err();
        assert!(err.contains("/warp"));
        assert_eq!(parse_line("/quit").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn controls_rebuild_the_scene() {
        let mut repl = repl();
        repl.control(ControlAction::SetPoints(200.0));
        assert_eq!(repl.scene().instances.len(), 200);

        repl.control(ControlAction::ToggleTheme);
        assert_eq!(repl.view().theme, ThemeMode::Light);
        assert_eq!(repl.scene().clear_color, ThemePalette::light().background);
    }

    #[test]
    fn speed_change_keeps_lattice() {
        let mut repl = repl();
        let before = repl.scene().lattice.clone();
        repl.control(ControlAction::SetRotationSpeed(1.5));
        assert_eq!(repl.scene().lattice, before);
        assert_eq!(repl.scene().config.rotation_speed, 1.5);
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut repl = repl();
        let config = PhylloConfig::default();
        assert!(repl.handle(ReplCommand::Topics, &config).await);
        assert!(!repl.handle(ReplCommand::Quit, &config).await);
    }

    #[tokio::test]
    async fn unconfigured_tutor_falls_back() {
        let mut repl = repl();
        let config = PhylloConfig::default();
        assert!(repl.handle(ReplCommand::Message("hi".into()), &config).await);
        assert!(repl.handle(ReplCommand::Insight(None), &config).await);
    }
}
