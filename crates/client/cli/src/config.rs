//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tactics_core::RarityPolicy;

/// Terminal client configuration.
///
/// Environment variables:
/// - `TACTICS_DATA_DIR` - Content directory (default: `data`)
/// - `TACTICS_SEED` - Session seed for every dice roll (default: current time)
/// - `TACTICS_BOARD_SIZE` - Board side length, overrides `config.toml`
/// - `TACTICS_ATTACKER` / `TACTICS_DEFENDER` - Class names for the two slots
/// - `TACTICS_FATE_HAND` - Fate hand size, overrides `config.toml`
/// - `TACTICS_FATE_POLICY` - `proportional` or `guarantee_rare`
/// - `TACTICS_HEADLESS` - `1`/`true` prints a one-shot text report instead of the TUI
///
/// Values that fail to parse are collected in `rejected` and logged once
/// logging is up.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
    pub board_side: Option<usize>,
    pub attacker: Option<String>,
    pub defender: Option<String>,
    pub fate_hand: Option<usize>,
    pub fate_policy: Option<RarityPolicy>,
    pub headless: bool,
    /// Variables that were set but could not be parsed, as `KEY=value`.
    pub rejected: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0,
            board_side: None,
            attacker: None,
            defender: None,
            fate_hand: None,
            fate_policy: None,
            headless: false,
            rejected: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct CLI configuration from any key lookup.
    ///
    /// Unparsable values keep their default and are recorded in
    /// [`Self::rejected`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            seed: time_seed(),
            ..Self::default()
        };
        let mut reader = EnvReader {
            lookup: &lookup,
            rejected: Vec::new(),
        };

        if let Some(dir) = lookup("TACTICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = reader.parse::<u64>("TACTICS_SEED") {
            config.seed = seed;
        }
        config.board_side = reader.parse("TACTICS_BOARD_SIZE");
        config.attacker = lookup("TACTICS_ATTACKER");
        config.defender = lookup("TACTICS_DEFENDER");
        config.fate_hand = reader.parse("TACTICS_FATE_HAND");
        config.fate_policy = reader.parse("TACTICS_FATE_POLICY");
        config.headless = reader.flag("TACTICS_HEADLESS").unwrap_or(false);

        config.rejected = reader.rejected;
        config
    }

    /// Logs every rejected variable. Call once logging is set up.
    pub fn warn_rejected(&self) {
        for entry in &self.rejected {
            tracing::warn!("Ignoring invalid environment value {}, using default", entry);
        }
    }
}

struct EnvReader<'a, F> {
    lookup: &'a F,
    rejected: Vec<String>,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<'_, F> {
    fn parse<T: FromStr>(&mut self, key: &str) -> Option<T> {
        let raw = (self.lookup)(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.rejected.push(format!("{key}={raw}"));
                None
            }
        }
    }

    fn flag(&mut self, key: &str) -> Option<bool> {
        let raw = (self.lookup)(key)?;
        let value = parse_flag(&raw);
        if value.is_none() {
            self.rejected.push(format!("{key}={raw}"));
        }
        value
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
