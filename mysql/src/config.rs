//! Builder configuration
//!
//! [`SchemaConfig`] carries the table options applied when a table body does
//! not set its own. With the `toml` feature it can be read from text such as:
//!
//! ```toml
//! engine = "MyISAM"
//! charset = "utf8mb4"
//! ```

use tablewright_types::mysql::ddl::{DEFAULT_CHARSET, DEFAULT_ENGINE};

/// Table option defaults
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchemaConfig {
    /// Storage engine for tables that do not call `engine(..)`
    pub engine: String,
    /// Character set for tables that do not call `charset(..)`
    pub charset: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl SchemaConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default engine
    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Set the default charset
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[cfg(feature = "toml")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchemaConfig::default();
        assert_eq!(config.engine, "InnoDB");
        assert_eq!(config.charset, "UTF8");
    }

    #[test]
    fn test_builder() {
        let config = SchemaConfig::new().engine("MyISAM").charset("latin1");
        assert_eq!(config.engine, "MyISAM");
        assert_eq!(config.charset, "latin1");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_str() {
        let config = SchemaConfig::from_toml_str("charset = \"utf8mb4\"\n").unwrap();
        assert_eq!(config.engine, "InnoDB");
        assert_eq!(config.charset, "utf8mb4");

        assert!(SchemaConfig::from_toml_str("engine = 3").is_err());
    }
}
