//! Shared configuration loader for texa.
//!
//! `defaults/texa.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TexaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use texa_render::{Environment, ExportOptions, RenderOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/texa.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "texa.toml";

/// Top-level configuration consumed by texa applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TexaConfig {
    pub render: RenderConfig,
    pub math: MathConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub environment: Environment,
    pub copy_buttons: bool,
    pub anchor_offset: String,
    pub fallback_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MathConfig {
    #[serde(default)]
    pub macros: Vec<MacroConfig>,
}

/// One math macro. Stored as a table rather than a map entry because map keys
/// are lowercased by the config layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MacroConfig {
    pub name: String,
    pub expansion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub title: String,
    pub include_stylesheet: bool,
    pub include_toc: bool,
    pub custom_css: Option<String>,
}

impl From<&TexaConfig> for RenderOptions {
    fn from(config: &TexaConfig) -> Self {
        let mut options = RenderOptions {
            fallback_message: config.render.fallback_message.clone(),
            math_macros: Vec::new(),
            ..RenderOptions::default()
        }
        .with_environment(config.render.environment)
        .with_anchor_offset(config.render.anchor_offset.clone());
        if !config.render.copy_buttons {
            options = options.without_copy_buttons();
        }
        config.math.macros.iter().fold(options, |options, m| {
            options.with_macro(m.name.clone(), m.expansion.clone())
        })
    }
}

impl From<TexaConfig> for RenderOptions {
    fn from(config: TexaConfig) -> Self {
        RenderOptions::from(&config)
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        ExportOptions {
            title: config.title.clone(),
            include_stylesheet: config.include_stylesheet,
            include_toc: config.include_toc,
            custom_css: config.custom_css.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TexaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TexaConfig, ConfigError> {
    Loader::new().build()
}
