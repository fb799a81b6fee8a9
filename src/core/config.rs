//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scribe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScribeConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub requests: RequestsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub max_words: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RequestsConfig {
    pub discard_stale_responses: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_MAX_WORDS: usize = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub backend_url: String,
    pub max_words: usize,
    pub discard_stale_responses: bool,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub backend_url: Option<String>,
    pub max_words: Option<usize>,
    pub keep_stale_responses: bool,
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

/// Returns the path to `~/.scribe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scribe").join("config.toml"))
}

/// Load config from `~/.scribe/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ScribeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ScribeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ScribeConfig::default());
        }
    };

    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<ScribeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ScribeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ScribeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Scribe Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:8000"   # Or set SCRIBE_BACKEND_URL env var

# [editor]
# max_words = 1000                     # Word cap for the style and grammar boxes

# [requests]
# discard_stale_responses = true       # false = whichever response lands last wins
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ScribeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ScribeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Backend URL: CLI → env → config → default
    let backend_url = cli
        .backend_url
        .clone()
        .or_else(|| env("SCRIBE_BACKEND_URL"))
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    // Word cap: CLI → env → config → default. A cap of 0 would reject everything.
    let max_words = cli
        .max_words
        .or_else(|| env("SCRIBE_MAX_WORDS").and_then(|v| v.trim().parse().ok()))
        .or(config.editor.max_words)
        .unwrap_or(DEFAULT_MAX_WORDS)
        .max(1);

    let discard_stale_responses = !cli.keep_stale_responses
        && config.requests.discard_stale_responses.unwrap_or(true);

    ResolvedConfig {
        backend_url,
        max_words,
        discard_stale_responses,
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
        let resolved = resolve_with_env(&ScribeConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(resolved.max_words, DEFAULT_MAX_WORDS);
        assert!(resolved.discard_stale_responses);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ScribeConfig {
            backend: BackendConfig {
                base_url: Some("http://10.0.0.5:9000".to_string()),
            },
            editor: EditorConfig { max_words: Some(300) },
            requests: RequestsConfig {
                discard_stale_responses: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.backend_url, "http://10.0.0.5:9000");
        assert_eq!(resolved.max_words, 300);
        assert!(!resolved.discard_stale_responses);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = ScribeConfig {
            backend: BackendConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "SCRIBE_BACKEND_URL" => Some("http://from-env".to_string()),
            "SCRIBE_MAX_WORDS" => Some("50".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.backend_url, "http://from-env");
        assert_eq!(resolved.max_words, 50);

        let cli = CliOverrides {
            backend_url: Some("http://from-cli".to_string()),
            max_words: Some(20),
            keep_stale_responses: true,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.backend_url, "http://from-cli");
        assert_eq!(resolved.max_words, 20);
        assert!(!resolved.discard_stale_responses);
    }

    #[test]
    fn test_unparseable_env_word_cap_is_ignored() {
        let env = |key: &str| (key == "SCRIBE_MAX_WORDS").then(|| "lots".to_string());
        let resolved = resolve_with_env(&ScribeConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.max_words, DEFAULT_MAX_WORDS);
    }

    #[test]
    fn test_zero_word_cap_is_raised_to_one() {
        let cli = CliOverrides {
            max_words: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&ScribeConfig::default(), &cli, no_env);
        assert_eq!(resolved.max_words, 1);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[editor]
max_words = 500
"#;
        let config: ScribeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.editor.max_words, Some(500));
        assert!(config.backend.base_url.is_none());
        assert!(config.requests.discard_stale_responses.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[backend]
base_url = "http://127.0.0.1:8000"

[editor]
max_words = 1200

[requests]
discard_stale_responses = false
"#;
        let config: ScribeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(config.editor.max_words, Some(1200));
        assert_eq!(config.requests.discard_stale_responses, Some(false));
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("scribe-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.editor.max_words.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.backend.base_url.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("scribe-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[editor\nmax_words = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
