//! # ShapeKit
//!
//! An interactive text-mode editor for a small set of 2D shapes:
//! - Circles and rectangles with integer geometry
//! - Nested groups positioned relative to their parent
//! - Topmost-first hit-testing that resolves to the innermost shape
//! - Linear undo/redo of every edit
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Coordinate types and error definitions
//! 2. **shapekit-designer** - Scene model, command history, scene facade
//! 3. **shapekit-settings** - Configuration loading, saving and validation
//! 4. **shapekit** - Main binary: logging, config, interactive session

use std::path::Path;

use anyhow::Context;

pub mod session;

pub use shapekit_designer as designer;
pub use shapekit_settings as settings;

pub use session::Session;
pub use shapekit_core::{Point, ShapeError};
pub use shapekit_designer::{
    Circle, CommandHistory, DrawStyle, Group, Node, NodeKind, Rectangle, Scene, SceneShape,
};
pub use shapekit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so it never mixes with the session on stdout
/// - RUST_LOG environment variable support
/// - `default_directive` (e.g. "info") when RUST_LOG is unset
pub fn init_logging(default_directive: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .with_context(|| format!("invalid log directive '{default_directive}'"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}

/// Load the editor config.
///
/// An explicit `path` must exist. Without one, the platform default location
/// is used and a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => match Config::default_path() {
            Ok(default) => Config::load_or_default(&default)
                .with_context(|| format!("failed to load config from {}", default.display())),
            Err(err) => {
                tracing::debug!(%err, "using built-in config defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Scene described by `config`, seeded with the demo objects when enabled.
pub fn scene_from_config(config: &Config) -> anyhow::Result<Scene> {
    let mut scene = config.build_scene();
    if config.session.load_demo_scene {
        scene.populate_demo()?;
    }
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nload_demo_scene = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.session.load_demo_scene);

        let scene = scene_from_config(&config).unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_default_config_seeds_demo_scene() {
        let scene = scene_from_config(&Config::default()).unwrap();
        assert_eq!(scene.len(), 3);
        assert!(scene.can_undo());
    }

    fn run_script(scene: Scene, script: &str) -> (Scene, String) {
        let mut output = Vec::new();
        let mut session = Session::new(scene, script.as_bytes(), &mut output);
        session.run().unwrap();
        let scene = session.into_scene();
        (scene, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_configured_style_reaches_session_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\nindent_marker = \"-\"\nempty_marker = \"(nothing)\"\n\n\
             [session]\nload_demo_scene = false\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        let scene = scene_from_config(&config).unwrap();
        let (_, out) = run_script(scene, "4\n3\n1\n1\n1\n1\n0\n0\n1\n4\n");

        assert!(out.contains("Current objects:\n(nothing)\n"));
        assert!(out.contains("Group (1, 1)\n-Circle (0, 0) R=1\n"));
    }

    #[test]
    fn test_history_limit_from_config() {
        let mut config = Config::default();
        config.history.limit = Some(1);
        config.session.load_demo_scene = false;

        let scene = scene_from_config(&config).unwrap();
        let (scene, out) = run_script(scene, "1\n0\n0\n1\n1\n5\n5\n1\n5\n5\n");

        assert!(out.contains("Undone: Add Circle"));
        assert!(out.contains("Nothing to undo."));
        assert_eq!(scene.len(), 1);
        assert!(scene.find_element_at(Point::new(0, 0)).is_some());
    }
}
