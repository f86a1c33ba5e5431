//! # Widget Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Widget Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  ┌────────────────┐  │
//! │  │  ConfigError        │  │  CoreError          │  │  Session       │  │
//! │  │                     │  │  (quote-core)       │  │                │  │
//! │  │  Io                 │  │  ProductNotFound    │  │  NoProduct-    │  │
//! │  │  Json / Toml        │  │  Validation         │  │   Selected     │  │
//! │  │  InvalidValue       │  │                     │  │  Embellishment-│  │
//! │  │  Validation         │  │                     │  │   NotFound     │  │
//! │  └─────────────────────┘  └─────────────────────┘  └────────────────┘  │
//! │              │                       │                     │           │
//! │              └───────────────────────┴──────────► WidgetError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use quote_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors raised while loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// An override value that parsed but cannot be applied.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// The merged catalog failed validation.
    #[error("Catalog validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors returned by [`crate::QuoteSession`] operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Submit was requested while the selected product id resolves to nothing.
    #[error("No product selected")]
    NoProductSelected,

    #[error("Embellishment not found at index {index}")]
    EmbellishmentNotFound { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WidgetError::EmbellishmentNotFound { index: 3 };
        assert_eq!(err.to_string(), "Embellishment not found at index 3");

        let err = WidgetError::from(CoreError::ProductNotFound("cap".to_string()));
        assert!(err.to_string().contains("cap"));

        let err = ConfigError::InvalidValue {
            key: "QUOTE_MIN_QTY".to_string(),
            reason: "greater than max".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for QUOTE_MIN_QTY: greater than max");
    }

    #[test]
    fn test_config_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: WidgetError = ConfigError::from(json_err).into();
        assert!(matches!(err, WidgetError::Config(ConfigError::Json(_))));
    }
}
