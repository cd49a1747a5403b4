//! Configuration loading for the response encoders.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::format::Format;
use crate::negotiate::NegotiatedEncoder;

/// Errors that can occur when loading configuration.
///
/// An unknown `default_format` identifier surfaces as [`ConfigError::Toml`]:
/// the format is validated while the file is parsed, so a bad value never
/// reaches request handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Encoder configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EncoderConfig {
    /// Format used when a request declares no recognized content type.
    /// Unset means fall back to JSON.
    pub default_format: Option<Format>,

    /// Pretty-print responses with two-space indentation.
    pub indent: bool,
}

impl EncoderConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading encoder config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the file named by the REPLYFMT_CONFIG
    /// environment variable. Returns the defaults when the variable is
    /// unset or the file does not exist.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("REPLYFMT_CONFIG") {
            let path = Path::new(&path);
            if path.exists() {
                return Self::load(path);
            }
        }
        debug!("no encoder config file, using defaults");
        Ok(Self::default())
    }

    /// Build a request encoder from a raw `Content-Type` header value,
    /// applying this configuration's default format and indent flag.
    pub fn encoder_for(&self, content_type: Option<&str>) -> NegotiatedEncoder {
        let mut encoder = NegotiatedEncoder::new(content_type, self.default_format);
        encoder.set_indent(self.indent);
        encoder
    }

    /// Build a request encoder from a header map.
    pub fn encoder_for_headers(&self, headers: &http::HeaderMap) -> NegotiatedEncoder {
        let mut encoder = NegotiatedEncoder::from_headers(headers, self.default_format);
        encoder.set_indent(self.indent);
        encoder
    }
}
