//! Document configuration.
//!
//! A [`DocumentConfig`] can be built in code or parsed from a TOML table:
//!
//! ```toml
//! line_ending = "crlf"
//!
//! [id_strategy]
//! kind = "sequential"
//! prefix = "L"
//! ```
//!
//! Every key is optional; missing keys keep their [`Default`] values.

use crate::id::IdStrategy;
use crate::line_ending::LineEnding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`DocumentConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid TOML or does not match the expected shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Sequential id prefixes must not contain whitespace.
    #[error("invalid id prefix {0:?}: whitespace is not allowed")]
    InvalidIdPrefix(String),
}

/// Configuration for a [`Document`](crate::Document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// How new line identities are minted.
    pub id_strategy: IdStrategy,
    /// Newline sequence used by [`Document::text_for_saving`](crate::Document::text_for_saving).
    pub line_ending: LineEnding,
}

impl DocumentConfig {
    /// Parse and validate a configuration from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that the TOML schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let IdStrategy::Sequential { prefix } = &self.id_strategy
            && prefix.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidIdPrefix(prefix.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DocumentConfig::from_toml_str("").unwrap();
        assert_eq!(config, DocumentConfig::default());
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_full_toml() {
        let config = DocumentConfig::from_toml_str(
            r#"
line_ending = "crlf"

[id_strategy]
kind = "sequential"
prefix = "L"
"#,
        )
        .unwrap();
        assert_eq!(config.line_ending, LineEnding::Crlf);
        assert_eq!(
            config.id_strategy,
            IdStrategy::Sequential {
                prefix: "L".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_whitespace_prefix() {
        let err = DocumentConfig::from_toml_str(
            r#"
[id_strategy]
kind = "sequential"
prefix = "line "
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdPrefix(_)));
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let err = DocumentConfig::from_toml_str(
            r#"
[id_strategy]
kind = "snowflake"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
