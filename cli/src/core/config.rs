//! # AUENLÄND Bot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for the chatbot session,
//! handling loading, merging, validation, and access to configuration data.
//! Nothing here changes *what* the bot answers; the settings only shape the
//! session around it (prompt text, banner, reproducible randomness).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--seed`, `--no-banner`), applied by the caller via [`Config::apply_overrides`]
//! 2. An explicit file given with `--config` (skips 3 and 4 entirely)
//! 3. Project-specific `.auenland.toml` in the current directory or ancestors
//! 4. User-specific `config.toml` in the platform config directory
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [session]
//! prompt = "You: "
//! show_banner = true
//! seed = 42
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let mut cfg = config::load_config(None)?;
//! cfg.apply_overrides(Some(7), false);
//! println!("{}", cfg.session.prompt);
//! ```
//!
use crate::core::error::{AuenlandError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The effective configuration, after every source has been applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub session: SessionConfig,
}

/// Settings for the interactive session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Text shown before each line of user input.
    pub prompt: String,
    /// Whether the welcome banner is printed at startup.
    pub show_banner: bool,
    /// Fixed seed for response selection. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: default_show_banner(),
            seed: None,
        }
    }
}

/// One configuration file as written on disk. A key the file leaves out stays
/// `None`, so it can be told apart from a key set to its default value.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct ConfigLayer {
    #[serde(default)]
    session: SessionLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct SessionLayer {
    prompt: Option<String>,
    show_banner: Option<bool>,
    seed: Option<u64>,
}

impl ConfigLayer {
    /// Keeps every key set in `self` and takes the rest from `fallback`.
    fn or(self, fallback: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            session: SessionLayer {
                prompt: self.session.prompt.or(fallback.session.prompt),
                show_banner: self.session.show_banner.or(fallback.session.show_banner),
                seed: self.session.seed.or(fallback.session.seed),
            },
        }
    }

    /// Fills keys no file set with the built-in defaults.
    fn resolve(self) -> Config {
        Config {
            session: SessionConfig {
                prompt: self.session.prompt.unwrap_or_else(default_prompt),
                show_banner: self.session.show_banner.unwrap_or_else(default_show_banner),
                seed: self.session.seed,
            },
        }
    }
}

impl Config {
    /// Applies command-line overrides on top of the loaded file settings.
    ///
    /// A seed from the command line always wins. `no_banner` can only turn the
    /// banner off; leaving the flag unset keeps whatever the files decided.
    pub fn apply_overrides(&mut self, seed: Option<u64>, no_banner: bool) {
        if let Some(seed) = seed {
            debug!("Seed overridden from command line: {}", seed);
            self.session.seed = Some(seed);
        }
        if no_banner {
            self.session.show_banner = false;
        }
    }
}

fn default_prompt() -> String {
    "You: ".to_string()
}
fn default_show_banner() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".auenland.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read (after `~` expansion) and a
/// missing file is an error. Otherwise user and project files are merged, and
/// both are optional.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = match explicit {
        Some(raw_path) => load_explicit_config(raw_path)?.resolve(),
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config, project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_explicit_config(raw_path: &str) -> Result<ConfigLayer> {
    let path = PathBuf::from(shellexpand::tilde(raw_path).into_owned());
    if !path.is_file() {
        return Err(anyhow!(AuenlandError::ConfigNotFound {
            path: path.display().to_string(),
        }));
    }
    info!("Loading configuration from: {}", path.display());
    load_config_from_path(&path)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Auenland", "auenland") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigLayer>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.auenland.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.auenland.toml`.
/// The search stops at the first directory that contains a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project settings win over user settings for every key the project file sets.
fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => project.or(user).resolve(),
        None => user.resolve(),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.session.prompt.contains(['\n', '\r']) {
        return Err(anyhow!(AuenlandError::Config(format!(
            "Prompt {:?} must fit on a single line.",
            config.session.prompt
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
