//! Error types for the sanctuary system.
//!
//! The protection core itself is infallible: a player who can no longer be
//! read is an eviction trigger, not an error. The only fallible path is
//! loading configuration at startup.

use thiserror::Error;

/// Errors raised while loading a [`ProtectionConfig`](crate::config::ProtectionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The config file is not valid TOML for a `ProtectionConfig`.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed values cannot run: they violate a timing invariant.
    #[error("invalid config: {0}")]
    Invalid(String),
}
