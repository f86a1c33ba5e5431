//! # quote-core: Pure Pricing Engine for the Quote Widget
//!
//! This crate is the **heart** of the quote widget. It contains the pricing
//! and lead-time logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Widget Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Marketing site (embedding page)                  │   │
//! │  │    Product picker ──► Options ──► Quantity ──► Submit buttons   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ selection changes                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quote-widget (session)                       │   │
//! │  │    select_product, set_quantity, toggle_embellishment, submit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   tier    │  │ calendar  │  │  engine   │  │   money   │  │   │
//! │  │   │ resolver  │  │ bus. days │  │  quote    │  │ formatter │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog, selection and calculation types
//! - [`money`] - Decimal money and the currency formatter
//! - [`tier`] - Quantity tier resolution (prices, lead times)
//! - [`calendar`] - Business-day arithmetic
//! - [`engine`] - Quote composition
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same catalog + selection + date = same quote
//! 2. **Total Pricing**: missing products or options price as zero, never error
//! 3. **Exact Money**: decimals all the way, rounded only for display
//! 4. **Explicit Dates**: the caller supplies "today"
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quote_core::{compute_quote, format_currency, QuoteConfig, SelectionState};
//!
//! let config = QuoteConfig::from_json(r#"{
//!     "currency": "EUR",
//!     "products": [{ "id": "tee", "name": "Tee", "priceBreaks": [{ "minQty": 1, "unit": 16.9 }] }]
//! }"#).unwrap();
//!
//! let state = SelectionState::new("tee", 10).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
//! let quote = compute_quote(&config, &state, today);
//!
//! assert_eq!(format_currency(quote.subtotal, Some(&config.currency)), "€169.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod engine;
pub mod error;
pub mod money;
pub mod tier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quote_core::Money` instead of
// `use quote_core::money::Money`

pub use engine::compute_quote;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_currency, Currency, Money, DEFAULT_CURRENCY};
pub use tier::{resolve_tier, Tier, DEFAULT_LEAD_TIME_DAYS};
pub use types::*;
