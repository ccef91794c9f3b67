//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.crossword/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CrosswordConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_URL: &str = "CROSSWORD_URL";
pub const ENV_FILE: &str = "CROSSWORD_FILE";
pub const ENV_TIMEOUT_SECS: &str = "CROSSWORD_TIMEOUT_SECS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the puzzle comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleLocation {
    Embedded,
    File(PathBuf),
    Url(String),
}

impl fmt::Display for PuzzleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleLocation::Embedded => write!(f, "built-in sample"),
            PuzzleLocation::File(path) => write!(f, "{}", path.display()),
            PuzzleLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub location: PuzzleLocation,
    pub timeout: Duration,
}

/// Source selection from the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliSource {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    /// Force the built-in puzzle, ignoring env and config.
    pub sample: bool,
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
// Loading
// ============================================================================

/// Returns the path to `~/.crossword/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".crossword").join("config.toml"))
}

/// Load config from `~/.crossword/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CrosswordConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CrosswordConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CrosswordConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CrosswordConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<CrosswordConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG: &str = r#"# Crossword Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
# With no source configured the built-in sample puzzle is played.

# [source]
# url = "http://localhost:3000/api/crossword"   # Or set CROSSWORD_URL
# file = "/path/to/puzzle.json"                 # Or set CROSSWORD_FILE
# timeout_secs = 10                              # Or set CROSSWORD_TIMEOUT_SECS
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CrosswordConfig, cli: &CliSource) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with(
    config: &CrosswordConfig,
    cli: &CliSource,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Location: CLI → env → config → embedded; URL beats file at each level
    let location = if cli.sample {
        PuzzleLocation::Embedded
    } else {
        location_from(cli.url.clone(), cli.file.clone())
            .or_else(|| location_from(env(ENV_URL), env(ENV_FILE).map(PathBuf::from)))
            .or_else(|| location_from(config.source.url.clone(), config.source.file.clone()))
            .unwrap_or(PuzzleLocation::Embedded)
    };

    // Timeout: env → config → default
    let timeout_secs = env(ENV_TIMEOUT_SECS)
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(_) => {
                warn!("Ignoring invalid {}: {:?}", ENV_TIMEOUT_SECS, raw);
                None
            }
        })
        .or(config.source.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        location,
        timeout: Duration::from_secs(timeout_secs),
    }
}

fn location_from(url: Option<String>, file: Option<PathBuf>) -> Option<PuzzleLocation> {
    let url = url.filter(|u| !u.trim().is_empty());
    let file = file.filter(|f| !f.as_os_str().is_empty());
    url.map(PuzzleLocation::Url)
        .or_else(|| file.map(PuzzleLocation::File))
}
