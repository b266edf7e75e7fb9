//! Server configuration parsed from environment variables.

use std::time::Duration;

use client::util::sidebar_config::{DEFAULT_RESIZE_DELAY_MS, ResizeStrategy};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// When the browser dispatches `resize` after a sidebar toggle.
    pub resize: ResizeStrategy,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SIDEBAR_RESIZE_STRATEGY`: `delay` (default) or `transitionend`
    /// - `SIDEBAR_RESIZE_DELAY_MS`: timer delay, or fallback for
    ///   `transitionend`; default 300
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let resize = parse_resize(
            lookup("SIDEBAR_RESIZE_STRATEGY").as_deref(),
            lookup("SIDEBAR_RESIZE_DELAY_MS").as_deref(),
        )?;
        Ok(Self { port, resize })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_resize(strategy: Option<&str>, delay_ms: Option<&str>) -> Result<ResizeStrategy, ConfigError> {
    let delay = match delay_ms {
        None => Duration::from_millis(DEFAULT_RESIZE_DELAY_MS),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map(|ms| Duration::from_millis(u64::from(ms)))
            .map_err(|_| ConfigError::InvalidValue { var: "SIDEBAR_RESIZE_DELAY_MS", value: value.to_owned() })?,
    };
    let kind = strategy.map_or("delay", str::trim);
    ResizeStrategy::from_kind(kind, delay).ok_or_else(|| ConfigError::InvalidValue {
        var: "SIDEBAR_RESIZE_STRATEGY",
        value: kind.to_owned(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
