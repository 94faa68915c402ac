use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rgb565_dither::{ChannelDepth, DitherAlgorithm};
use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::rendering::DemoPattern;

/// Application configuration loaded from a YAML file.
///
/// Every key is optional:
///
/// ```yaml
/// algorithm: stucki
/// depth: 565
/// optimize: true
/// demo:
///   pattern: rainbow
///   width: 320
///   height: 200
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Default dithering algorithm
    #[serde(default, deserialize_with = "from_str_field")]
    pub algorithm: DitherAlgorithm,

    /// Default channel depth, e.g. `565`
    #[serde(default, deserialize_with = "from_str_field")]
    pub depth: ChannelDepth,

    /// Re-compress output PNGs with oxipng
    #[serde(default)]
    pub optimize: bool,

    /// Demo image settings
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Settings for `dithering demo`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub pattern: DemoPattern,

    #[serde(default = "default_demo_size")]
    pub width: u32,

    #[serde(default = "default_demo_size")]
    pub height: u32,
}

fn default_demo_size() -> u32 {
    256
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pattern: DemoPattern::default(),
            width: default_demo_size(),
            height: default_demo_size(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::default(),
            depth: ChannelDepth::default(),
            optimize: false,
            demo: DemoConfig::default(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or fall back to defaults when no
    /// path is given. A path that was given but cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Ok((Self::default(), ConfigSource::Defaults));
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;
        tracing::info!(
            path = %path.display(),
            algorithm = %config.algorithm,
            depth = %config.depth,
            "Loaded configuration"
        );
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Parse YAML text; `origin` is only used in error messages.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// YAML scalars that stand for a `FromStr` value (`depth: 565` is a number).
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(u64),
}

fn from_str_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let text = match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    };
    text.parse().map_err(serde::de::Error::custom)
}
