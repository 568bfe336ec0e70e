//! Glue code tying content loading, state and the terminal UI together.
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tactics_content::ContentFactory;

use crate::config::CliConfig;
use crate::input::{KeyAction, handle_key};
use crate::presentation::{TerminalSession, text, ui};
use crate::state::AppState;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct CliApp {
    config: CliConfig,
    state: AppState,
}

pub struct CliAppBuilder {
    config: CliConfig,
}

impl CliAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Loads content from the data directory and applies the environment
    /// overrides on top of it.
    pub fn build(self) -> Result<CliApp> {
        let config = self.config;
        let factory = ContentFactory::new(config.data_dir.clone());
        tracing::info!("Loading content from {}", factory.data_dir().display());

        let mut game_config = factory.load_config_or_default()?;
        if let Some(side) = config.board_side {
            game_config = game_config.with_board_side(side);
        }
        if let Some(hand) = config.fate_hand {
            game_config = game_config.with_fate_hand_size(hand);
        }

        let rules = factory.load_rules_or_default()?;
        let classes = factory.load_classes_or_presets(&rules)?;
        tracing::info!(
            "{} classes ready ({} synergy)",
            classes.len(),
            rules.synergy
        );

        let mut fate = factory.load_fate()?;
        if let (Some(table), Some(policy)) = (fate.as_mut(), config.fate_policy) {
            table.policy = policy;
        }

        let state = AppState::new(
            classes,
            config.attacker.as_deref(),
            config.defender.as_deref(),
            game_config,
            fate,
            config.seed,
        )
        .context("Failed to set up session")?;

        Ok(CliApp { config, state })
    }
}

impl CliApp {
    pub fn builder(config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(config)
    }

    pub fn run(self) -> Result<()> {
        tracing::info!("Session seed: {}", self.config.seed);
        if self.config.headless {
            self.run_headless()
        } else {
            self.run_tui()
        }
    }

    /// Rolls one attack and one fate hand, then prints everything.
    fn run_headless(mut self) -> Result<()> {
        self.state.attack();
        self.state.draw_fate()?;
        print!("{}", text::report(&self.state));
        Ok(())
    }

    fn run_tui(mut self) -> Result<()> {
        let mut session = TerminalSession::start()?;

        loop {
            ui::render(session.terminal(), &self.state)?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            if !self.dispatch(handle_key(key))? {
                break;
            }
        }

        tracing::info!("CLI client exiting");
        Ok(())
    }

    /// Applies one action. Returns `false` when the session should end.
    fn dispatch(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(false),
            KeyAction::MoveCursor(step) => self.state.move_cursor(step),
            KeyAction::SelectSlot(slot) => self.state.select_slot(slot),
            KeyAction::ToggleSlot => self.state.toggle_slot(),
            KeyAction::Assign => self.state.assign_highlighted(),
            KeyAction::Attack => {
                self.state.attack();
            }
            KeyAction::NewBoard => self.state.regenerate_board(),
            KeyAction::DrawFate => {
                if !self.state.draw_fate()? {
                    tracing::debug!("Fate draw ignored, no deck loaded");
                }
            }
            KeyAction::None => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Slot;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> CliConfig {
        CliConfig {
            data_dir: dir.path().to_path_buf(),
            seed: 5,
            headless: true,
            ..CliConfig::default()
        }
    }

    #[test]
    fn empty_data_dir_uses_presets() {
        let dir = TempDir::new().unwrap();
        let app = CliApp::builder(config(&dir)).build().unwrap();

        assert_eq!(app.state.classes.len(), 8);
        assert!(app.state.fate.is_none());
        assert_eq!(app.state.board.side(), 8);
    }

    #[test]
    fn overrides_apply_over_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "board_side = 10\n").unwrap();
        fs::write(
            dir.path().join("fate.ron"),
            r#"(cards: [(name: "Gust", rarity: common)])"#,
        )
        .unwrap();

        let app = CliApp::builder(CliConfig {
            board_side: Some(4),
            fate_hand: Some(2),
            fate_policy: Some(tactics_core::RarityPolicy::GuaranteeRare),
            attacker: Some("Heavy Brawler".into()),
            ..config(&dir)
        })
        .build()
        .unwrap();

        assert_eq!(app.state.board.side(), 4);
        assert_eq!(app.state.config.fate_hand_size, 2);
        assert_eq!(
            app.state.fate.as_ref().map(|table| table.policy),
            Some(tactics_core::RarityPolicy::GuaranteeRare)
        );
        assert_eq!(app.state.slot(Slot::Attacker).name(), "Heavy Brawler");
    }

    #[test]
    fn oversized_overrides_are_capped() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("fate.ron"),
            r#"(cards: [(name: "Gust", rarity: common), (name: "Meteor", rarity: rare)])"#,
        )
        .unwrap();

        let mut app = CliApp::builder(CliConfig {
            board_side: Some(usize::MAX),
            fate_hand: Some(usize::MAX / 5),
            ..config(&dir)
        })
        .build()
        .unwrap();

        assert_eq!(app.state.board.side(), tactics_core::GameConfig::MAX_BOARD_SIDE);
        assert!(app.dispatch(KeyAction::DrawFate).unwrap());
        assert_eq!(
            app.state.fate_hand.len(),
            tactics_core::GameConfig::MAX_FATE_HAND_SIZE
        );
    }

    #[test]
    fn broken_classes_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("classes.ron"),
            r#"(classes: [(weight: "medium", range: "long", spread: "narrow")])"#,
        )
        .unwrap();

        assert!(CliApp::builder(config(&dir)).build().is_err());
    }

    #[test]
    fn dispatch_drives_state() {
        let dir = TempDir::new().unwrap();
        let mut app = CliApp::builder(config(&dir)).build().unwrap();

        assert!(app.dispatch(KeyAction::MoveCursor(7)).unwrap());
        assert!(app.dispatch(KeyAction::SelectSlot(Slot::Defender)).unwrap());
        assert!(app.dispatch(KeyAction::Assign).unwrap());
        assert_eq!(app.state.slot(Slot::Defender).name(), "Light Brawler");

        assert!(app.dispatch(KeyAction::Attack).unwrap());
        assert!(app.state.last_attack.is_some());

        assert!(app.dispatch(KeyAction::DrawFate).unwrap());
        assert!(!app.dispatch(KeyAction::Quit).unwrap());
    }
}
