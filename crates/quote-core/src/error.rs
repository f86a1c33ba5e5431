//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - Lookups that the caller requires to succeed    │
//! │  └── ValidationError  - Malformed input at the boundary                │
//! │                                                                         │
//! │  quote-widget errors (separate crate)                                  │
//! │  ├── ConfigError      - Catalog file / env loading failures            │
//! │  └── WidgetError      - What the embedding page sees                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → WidgetError → Embedding page      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Pricing never fails. A missing product, an unknown option id, an empty
//! tier list or a zero-day lead time all produce a well-formed
//! `QuoteCalculation`. Only input that breaks basic shape rules (negative
//! quantity, negative prices, inverted limits) is rejected, and only where
//! that input enters the system.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - Submitting a quote while the selected id is empty or stale
    /// - A catalog reload removed the product the visitor had selected
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet basic shape requirements.
/// Used for early validation before any pricing runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
