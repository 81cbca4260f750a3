use std::env;

use crate::error::ConfigError;

/// Caps the response payload width to stay within API Gateway response
/// size limits.
pub const DEFAULT_MAX_WIDTH: u32 = 2000;

/// Process-wide settings, read once at cold start and passed into the
/// handler through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket holding the source images.
    pub bucket: String,
    /// Key prefix prepended to every request path.
    pub prefix: String,
    /// Images at or above this width are downsampled.
    pub max_width: u32,
}

impl Config {
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>, max_width: u32) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            max_width,
        }
    }

    /// Load configuration from the environment.
    ///
    /// `IMAGES_BUCKET` and `IMAGES_PREFIX` are required; `MAX_IMAGE_WIDTH`
    /// falls back to 2000 when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = require("IMAGES_BUCKET")?;
        let prefix = require("IMAGES_PREFIX")?;
        let max_width = match env::var("MAX_IMAGE_WIDTH") {
            Ok(raw) => parse_max_width(&raw)?,
            Err(_) => DEFAULT_MAX_WIDTH,
        };

        Ok(Self {
            bucket,
            prefix,
            max_width,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_max_width(raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name: "MAX_IMAGE_WIDTH",
        value: raw.to_string(),
    })
}
