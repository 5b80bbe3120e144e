//! Configuration error types.

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A typed field converted to a blank wire value.
    ///
    /// Raised by [`ConfigKey::bind`](crate::ConfigKey::bind) and by every
    /// `render` call; the render is aborted and no entries are returned.
    #[error("invalid configuration value for {key}: value must not be empty or whitespace")]
    InvalidConfigValue {
        /// Wire id of the offending key.
        key: String,
    },

    /// Text did not name any variant of an enum domain type.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// Name of the domain type being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ConfigError {
    /// Create a new invalid value error for the given key id.
    pub fn invalid_config_value(key: impl Into<String>) -> Self {
        Self::InvalidConfigValue { key: key.into() }
    }

    /// Create a new unknown variant error.
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Returns the key id for [`ConfigError::InvalidConfigValue`].
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidConfigValue { key } => Some(key),
            Self::UnknownVariant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_value_error() {
        let err = ConfigError::invalid_config_value("bootstrap.servers");
        assert!(err.to_string().contains("bootstrap.servers"));
        assert_eq!(err.key(), Some("bootstrap.servers"));
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = ConfigError::unknown_variant("compression", "zstd");
        assert!(err.to_string().contains("compression"));
        assert!(err.to_string().contains("zstd"));
        assert_eq!(err.key(), None);
    }
}
