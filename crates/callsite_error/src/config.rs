//! Configuration for detecting location prefixes in message text.
//!
//! Sources, in order of precedence (later sources override earlier):
//! 1. Bundled defaults (include_str! from callsite.toml)
//! 2. User config in home directory (~/.config/callsite/callsite.toml)
//! 3. User config in current directory (./callsite.toml)

use crate::{CallsiteError, CallsiteErrorKind, CallsiteResult};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError as ConfigSourceError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// File extensions recognized as source files when none are configured.
pub const DEFAULT_SOURCE_SUFFIXES: &[&str] = &[
    "rs", "go", "c", "h", "cc", "cpp", "hpp", "py", "java", "js", "ts", "rb", "swift", "kt", "zig",
];

static DEFAULT_CONFIG: LazyLock<DetectionConfig> = LazyLock::new(DetectionConfig::default);

/// Rules for recognizing a `file:line:` prefix.
///
/// ```toml
/// [detection]
/// source_suffixes = ["rs", "go"]
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
#[serde(default)]
pub struct DetectionConfig {
    /// Extensions (with or without the leading dot) that mark a source file
    source_suffixes: Vec<String>,
}

impl DetectionConfigBuilder {
    /// Build the DetectionConfig.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing.
    #[track_caller]
    pub fn build(&self) -> CallsiteResult<DetectionConfig> {
        self.build_internal()
            .map_err(|e| CallsiteError::new(CallsiteErrorKind::Builder(e.to_string())))
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            source_suffixes: DEFAULT_SOURCE_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Top level of a callsite TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
struct ConfigFile {
    #[serde(default)]
    detection: Option<DetectionConfig>,
}

impl DetectionConfig {
    /// The shared built-in configuration.
    pub fn builtin() -> &'static DetectionConfig {
        &DEFAULT_CONFIG
    }

    /// Whether `file` ends in one of the configured source extensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use callsite_error::DetectionConfig;
    ///
    /// let config = DetectionConfig::default();
    /// assert!(config.is_source_file("main.rs"));
    /// assert!(config.is_source_file("example.go"));
    /// assert!(!config.is_source_file("notes.txt"));
    /// assert!(!config.is_source_file("rs"));
    /// ```
    pub fn is_source_file(&self, file: &str) -> bool {
        let Some((stem, extension)) = file.rsplit_once('.') else {
            return false;
        };
        !stem.is_empty()
            && self
                .source_suffixes
                .iter()
                .any(|suffix| suffix.trim_start_matches('.') == extension)
    }

    /// Render as a TOML document with a `[detection]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> CallsiteResult<String> {
        let file = ConfigFile {
            detection: Some(self.clone()),
        };
        toml::to_string_pretty(&file).map_err(|e| {
            CallsiteError::new(CallsiteErrorKind::Config(format!(
                "Failed to serialize configuration: {}",
                e
            )))
        })
    }

    /// Load configuration from a specific file path.
    ///
    /// A file without a `[detection]` table yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CallsiteResult<Self> {
        debug!("Loading detection configuration from file");
        let builder = Config::builder().add_source(File::from(path.as_ref()));
        detection_from(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found. A
    /// later source replaces the suffix list of an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> CallsiteResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const BUNDLED_CONFIG: &str = include_str!("../../../callsite.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/callsite/callsite.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("callsite").required(false));

        let config = detection_from(builder)?;
        debug!(suffixes = config.source_suffixes.len(), "Detection configuration loaded");
        Ok(config)
    }
}

/// Merge the builder's sources and read the `[detection]` table out of them.
fn detection_from(builder: ConfigBuilder<DefaultState>) -> CallsiteResult<DetectionConfig> {
    let config_error = |e: ConfigSourceError| {
        CallsiteError::new(CallsiteErrorKind::Config(e.to_string()))
    };
    let file: ConfigFile = builder
        .build()
        .map_err(config_error)?
        .try_deserialize()
        .map_err(config_error)?;
    Ok(file.detection.unwrap_or_default())
}
