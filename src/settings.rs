//! Render settings.
//!
//! The defaults in `defaults/treerender.default.toml` are compiled in; a
//! `treerender.toml` next to the invocation, an explicit `--config` file and the
//! `--mode` / `--line-ending` flags are layered over them, later sources winning.

use crate::rendering::{LineEnding, RenderMode, RenderOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/treerender.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct TreeRenderConfig {
    pub render: RenderConfig,
}

/// The `[render]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub line_ending: LineEnding,
}

impl From<&TreeRenderConfig> for RenderOptions {
    fn from(config: &TreeRenderConfig) -> Self {
        RenderOptions {
            mode: config.render.mode,
            line_ending: config.render.line_ending,
        }
    }
}

/// Stacks TOML sources and flag overrides on top of the compiled-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a settings file named on the command line; building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    /// Add a settings file that may or may not exist, such as `treerender.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), false)
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one key, e.g. `render.mode`, regardless of what the files say.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TreeRenderConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings with nothing layered over the compiled-in defaults.
pub fn load_defaults() -> Result<TreeRenderConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.mode, RenderMode::Streaming);
        assert_eq!(config.render.line_ending, LineEnding::Native);
        assert_eq!(RenderOptions::from(&config), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.mode", "validated")
            .expect("override to apply")
            .set_override("render.line_ending", "crlf")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.mode, RenderMode::Validated);
        assert_eq!(config.render.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = Loader::new()
            .set_override("render.mode", "buffered")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[render]\nline_ending = \"lf\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.render.line_ending, LineEnding::Lf);
        assert_eq!(config.render.mode, RenderMode::Streaming);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does-not-exist/treerender.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.render.mode, RenderMode::Streaming);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("does-not-exist/treerender.toml")
            .build();
        assert!(result.is_err());
    }
}
