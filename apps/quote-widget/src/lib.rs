//! # quote-widget: Session Layer for the Quote Calculator
//!
//! Everything between the embedding page and the pure pricing engine in
//! `quote-core`.
//!
//! ## Module Structure
//! ```text
//! quote_widget/
//! ├── lib.rs          ← You are here (module exports)
//! ├── catalog.rs      ← Built-in catalog
//! ├── config.rs       ← Catalog loading (file + environment)
//! ├── error.rs        ← ConfigError, WidgetError
//! ├── payload.rs      ← Events, hidden form fields, readouts
//! ├── session.rs      ← QuoteSession (selection state + outbox)
//! └── bin/
//!     └── quote-preview.rs  ← Prints a quote from the environment
//! ```
//!
//! ## Typical Flow
//! ```rust
//! use std::sync::Arc;
//! use quote_widget::{catalog::default_catalog, Clock, QuoteEvent, QuoteSession, SubmitAction};
//!
//! let mut session = QuoteSession::new(Arc::new(default_catalog()), Clock::System);
//! session.select_product("baseball-cap");
//! session.set_quantity(48);
//!
//! for event in session.drain_events() {
//!     // forward to the page as a DOM CustomEvent
//!     assert_eq!(event.name(), "quote:change");
//! }
//!
//! session.submit(SubmitAction::Email).unwrap();
//! assert!(matches!(session.drain_events()[0], QuoteEvent::Submit(_)));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod payload;
pub mod session;

pub use error::{ConfigError, WidgetError, WidgetResult};
pub use payload::{
    FormFields, QuoteEvent, QuotePayload, QuoteSubmission, Readouts, SubmitAction, SubmitOutcome,
};
pub use session::{Clock, EmbellishmentField, QuoteSession};
