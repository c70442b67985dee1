//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.boston-tour/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading happens before the file logger exists (the log level and file
//! are config values), so messages go into a `StartupLog` and are replayed
//! once `WriteLogger` is installed.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TourConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_key_hints: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "boston-tour.log";
pub const DEFAULT_SHOW_KEY_HINTS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub show_key_hints: bool,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Startup Log
// ============================================================================

/// Log records produced before the logger is initialized.
#[derive(Debug, Default)]
pub struct StartupLog {
    entries: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push((level, message.into()));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Replay every buffered record through the `log` facade.
    pub fn flush(self) {
        for (level, message) in self.entries {
            log::log!(level, "{message}");
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.boston-tour/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".boston-tour").join("config.toml"))
}

/// Load config from `~/.boston-tour/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TourConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(log: &mut StartupLog) -> Result<TourConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            log.push(Level::Warn, "Could not determine home directory, using default config");
            return Ok(TourConfig::default());
        }
    };
    load_config_from(&path, log)
}

pub fn load_config_from(path: &Path, log: &mut StartupLog) -> Result<TourConfig, ConfigError> {
    if !path.exists() {
        log.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, log);
        return Ok(TourConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TourConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    log.push(Level::Info, format!("Loaded config from {}", path.display()));
    log.push(Level::Debug, format!("Config: {config:?}"));
    Ok(config)
}

fn generate_default_config(path: &Path, log: &mut StartupLog) {
    let default_content = r#"# Boston Tour Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "boston-tour.log"       # Or set BOSTON_TOUR_LOG_FILE

# [ui]
# show_key_hints = true              # Key help line at the bottom of the screen
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            log.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        log.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TourConfig, cli: &CliOverrides, log: &mut StartupLog) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), log)
}

fn resolve_with_env(
    config: &TourConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    log: &mut StartupLog,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("BOSTON_TOUR_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .map(|raw| parse_level(&raw, log))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("BOSTON_TOUR_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        log_level,
        log_file,
        show_key_hints: config.ui.show_key_hints.unwrap_or(DEFAULT_SHOW_KEY_HINTS),
    }
}

/// Parses a level name case-insensitively, falling back to the default.
fn parse_level(raw: &str, log: &mut StartupLog) -> LevelFilter {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            log.push(Level::Warn, format!("Unknown log level {raw:?}, using {DEFAULT_LOG_LEVEL}"));
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let mut log = StartupLog::new();
        let resolved = resolve_with_env(
            &TourConfig::default(),
            &CliOverrides::default(),
            no_env,
            &mut log,
        );
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.show_key_hints);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TourConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/tour.log".to_string()),
            },
            ui: UiConfig {
                show_key_hints: Some(false),
            },
        };
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), no_env, &mut StartupLog::new());
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/tour.log"));
        assert!(!resolved.show_key_hints);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = TourConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "BOSTON_TOUR_LOG_LEVEL").then(|| "trace".to_string());

        let mut log = StartupLog::new();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env, &mut log);
        assert_eq!(resolved.log_level, LevelFilter::Trace);

        let cli = CliOverrides {
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env, &mut log);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        let mut log = StartupLog::new();
        assert_eq!(parse_level("loud", &mut log), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_level("DEBUG", &mut log), LevelFilter::Debug);
        assert_eq!(parse_level(" off ", &mut log), LevelFilter::Off);
    }

    #[test]
    fn test_unknown_level_is_kept_for_the_logger() {
        let config = TourConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut log = StartupLog::new();
        resolve_with_env(&config, &CliOverrides::default(), no_env, &mut log);

        let [(level, message)] = log.entries() else {
            panic!("expected one record, got {:?}", log.entries());
        };
        assert_eq!(*level, Level::Warn);
        assert!(message.contains("\"loud\""));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[ui]
show_key_hints = false
"#;
        let config: TourConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.show_key_hints, Some(false));
        assert!(config.general.log_level.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("boston-tour-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\nlog_level = ").unwrap();

        let result = load_config_from(&path, &mut StartupLog::new());
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("boston-tour-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let mut log = StartupLog::new();
        let config = load_config_from(&path, &mut log).unwrap();
        assert!(config.general.log_level.is_none());
        let generated = log.entries().iter().find(|(_, m)| m.contains("generating"));
        assert_eq!(generated.map(|(level, _)| *level), Some(Level::Info));

        // The generated file is all comments, so it parses back to defaults.
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("show_key_hints"));
        let reparsed = load_config_from(&path, &mut StartupLog::new()).unwrap();
        assert!(reparsed.ui.show_key_hints.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
