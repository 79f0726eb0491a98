//! Configuration management for bs5.
//!
//! Parses `bs5.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `ids.prefix`
//! - `page.title`
//! - `page.bootstrap_css`
//! - `page.bootstrap_js`

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bs5.toml";

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override id strategy.
    pub id_strategy: Option<IdStrategy>,
    /// Override id prefix.
    pub id_prefix: Option<String>,
    /// Override standalone page title.
    pub title: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Component id generation.
    pub ids: IdsConfig,
    /// Standalone page wrapper.
    pub page: PageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// How component ids are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Unique across every render in the process.
    #[default]
    Process,
    /// Restart at 1 for every render, giving reproducible output.
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "process" => Ok(Self::Process),
            "sequential" => Ok(Self::Sequential),
            other => Err(ConfigError::Validation(format!(
                "unknown id strategy '{other}', expected 'process' or 'sequential'"
            ))),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Process => "process",
            Self::Sequential => "sequential",
        })
    }
}

/// Id generation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    /// Counter strategy.
    pub strategy: IdStrategy,
    /// Prefix of every generated id.
    pub prefix: String,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::Process,
            prefix: "c".to_owned(),
        }
    }
}

/// Standalone page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Value of `<html lang>`.
    pub lang: String,
    /// Bootstrap stylesheet URL.
    pub bootstrap_css: String,
    /// Bootstrap bundle script URL.
    pub bootstrap_js: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Bootstrap components".to_owned(),
            lang: "en".to_owned(),
            bootstrap_css: BOOTSTRAP_CSS.to_owned(),
            bootstrap_js: BOOTSTRAP_JS.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`page.bootstrap_css`").
        field: String,
        /// Error message (e.g., "${`CDN_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Search `start` and its parents for `bs5.toml`.
#[must_use]
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bs5.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, so they take precedence over
    /// config file values. The result is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the final values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| discover_config(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strategy) = settings.id_strategy {
            self.ids.strategy = strategy;
        }
        if let Some(prefix) = &settings.id_prefix {
            self.ids.prefix.clone_from(prefix);
        }
        if let Some(title) = &settings.title {
            self.page.title.clone_from(title);
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_ids()?;
        require_non_empty(&self.page.lang, "page.lang")?;
        require_non_empty(&self.page.bootstrap_css, "page.bootstrap_css")?;
        require_non_empty(&self.page.bootstrap_js, "page.bootstrap_js")?;
        Ok(())
    }

    /// Ids must stay valid HTML ids and CSS selectors, so the prefix starts
    /// with a letter and holds only letters, digits, `-` and `_`.
    fn validate_ids(&self) -> Result<(), ConfigError> {
        let prefix = &self.ids.prefix;
        require_non_empty(prefix, "ids.prefix")?;

        let mut chars = prefix.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ConfigError::Validation(format!(
                "ids.prefix '{prefix}' must start with a letter and contain only letters, digits, '-' or '_'"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.ids.prefix = expand::expand_env(&self.ids.prefix, "ids.prefix")?;
        self.page.title = expand::expand_env(&self.page.title, "page.title")?;
        self.page.bootstrap_css =
            expand::expand_env(&self.page.bootstrap_css, "page.bootstrap_css")?;
        self.page.bootstrap_js = expand::expand_env(&self.page.bootstrap_js, "page.bootstrap_js")?;
        Ok(())
    }
}
