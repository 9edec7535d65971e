//! ShapeKit Settings Crate
//!
//! Handles editor configuration: history depth, draw style and session
//! defaults, stored as TOML or JSON in the platform config directory.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings, HistorySettings, SessionSettings};
pub use error::{SettingsError, SettingsResult};
