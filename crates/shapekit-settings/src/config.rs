//! Configuration and settings management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - History settings (undo depth)
//! - Display settings (draw indentation marker, empty-scene marker)
//! - Session settings (starter scene, default log level)

use serde::{Deserialize, Serialize};
use shapekit_designer::{DrawStyle, Scene};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::error::{SettingsError, SettingsResult};

/// Undo/redo history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable edits; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Text drawing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Character repeated once per nesting level
    pub indent_marker: char,
    /// Line shown for a scene without objects
    pub empty_marker: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let style = DrawStyle::default();
        Self {
            indent_marker: style.indent_marker,
            empty_marker: style.empty_marker,
        }
    }
}

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Start with the demo scene instead of an empty one
    pub load_demo_scene: bool,
    /// Default tracing filter directive when `RUST_LOG` is unset, in
    /// `RUST_LOG` syntax (`info`, `shapekit_designer=debug,warn`)
    pub log_level: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            load_demo_scene: true,
            log_level: "info".to_string(),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub history: HistorySettings,
    pub display: DisplaySettings,
    pub session: SessionSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config dir>/shapekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shapekit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the config at `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.history.limit == Some(0) {
            return Err(SettingsError::invalid(
                "history.limit",
                "must be > 0 (omit it for unbounded history)",
            ));
        }

        if self.display.indent_marker.is_whitespace() {
            return Err(SettingsError::invalid(
                "display.indent_marker",
                "must not be whitespace",
            ));
        }

        if self.display.empty_marker.trim().is_empty() {
            return Err(SettingsError::invalid(
                "display.empty_marker",
                "must not be empty",
            ));
        }

        if self.session.log_level.trim().is_empty() {
            return Err(SettingsError::invalid(
                "session.log_level",
                "must not be empty",
            ));
        }
        if let Err(err) = EnvFilter::try_new(&self.session.log_level) {
            return Err(SettingsError::invalid(
                "session.log_level",
                format!("not a valid filter directive: {err}"),
            ));
        }

        Ok(())
    }

    /// Draw style described by the display section
    pub fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            indent_marker: self.display.indent_marker,
            empty_marker: self.display.empty_marker.clone(),
        }
    }

    /// Empty scene configured with this history limit and draw style
    pub fn build_scene(&self) -> Scene {
        Scene::with_history_limit(self.history.limit).with_style(self.draw_style())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
