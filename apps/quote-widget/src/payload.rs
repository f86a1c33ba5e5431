//! # Quote Payloads
//!
//! Plain data the embedding page consumes: event payloads, the hidden form
//! values posted with the email request, and the formatted readouts.
//!
//! ## Event Shape
//! ```json
//! {
//!   "type": "quote:change",
//!   "detail": {
//!     "selectedProductId": "tech-hoodie",
//!     "quantity": 10,
//!     "selectedColor": "navy",
//!     "...": "...",
//!     "unitCost": 31.7,
//!     "subtotal": 377.0,
//!     "leadTimeDays": 5,
//!     "estimatedDelivery": "01/15/2024",
//!     "product": { "id": "tech-hoodie", "...": "..." },
//!     "currency": "USD",
//!     "timestamp": "2024-01-08T15:30:00.000Z"
//!   }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use quote_core::{format_currency, Money, Product, QuoteCalculation, SelectionState};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Placeholder replaced by the product name in the email subject template.
pub const PRODUCT_NAME_PLACEHOLDER: &str = "{{productName}}";

// =============================================================================
// Event Payloads
// =============================================================================

/// Snapshot emitted after every change while a product is selected.
///
/// Selection and calculation fields are flattened into the top level, next
/// to the resolved product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    #[serde(flatten)]
    pub state: SelectionState,
    #[serde(flatten)]
    pub calculation: QuoteCalculation,
    pub product: Product,
    pub currency: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

impl QuotePayload {
    pub fn new(
        state: &SelectionState,
        calculation: &QuoteCalculation,
        product: &Product,
        currency: &str,
        at: DateTime<Utc>,
    ) -> Self {
        QuotePayload {
            state: state.clone(),
            calculation: calculation.clone(),
            product: product.clone(),
            currency: currency.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Which submit button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SubmitAction {
    /// "Email me this quote": posts the hidden form.
    Email,
    /// "Start design": opens the design studio.
    Design,
}

/// A change payload tagged with the submit action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteSubmission {
    #[serde(flatten)]
    pub payload: QuotePayload,
    pub action: SubmitAction,
}

/// What the host page should do after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "url", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Submit the surrounding quote form.
    SubmitForm,
    /// Open this URL in a new tab.
    OpenUrl(String),
    /// Nothing to do beyond the event.
    None,
}

/// Events queued by a session, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "detail")]
pub enum QuoteEvent {
    #[serde(rename = "quote:change")]
    Change(QuotePayload),
    #[serde(rename = "quote:submit")]
    Submit(QuoteSubmission),
}

impl QuoteEvent {
    /// DOM event name the embedding page listens for.
    pub fn name(&self) -> &'static str {
        match self {
            QuoteEvent::Change(_) => "quote:change",
            QuoteEvent::Submit(_) => "quote:submit",
        }
    }
}

// =============================================================================
// Hidden Form Fields
// =============================================================================

/// Values for the hidden inputs of the quote request form.
///
/// Money is written as a plain number (`23.5`, `285`), unformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormFields {
    pub product_id: String,
    /// Empty when the product id doesn't resolve.
    pub product_name: String,
    pub quantity: String,
    pub color: String,
    pub artwork: String,
    pub neck_label: String,
    pub unit_cost: String,
    pub subtotal: String,
    pub lead_time: String,
    pub estimated_delivery_date: String,
    /// JSON of `{ color, artwork, neckLabel, embellishments }`.
    pub options_json: String,
}

impl FormFields {
    pub fn new(
        state: &SelectionState,
        calculation: &QuoteCalculation,
        product: Option<&Product>,
    ) -> Self {
        let options = serde_json::json!({
            "color": state.selected_color,
            "artwork": state.selected_artwork,
            "neckLabel": state.selected_neck_label,
            "embellishments": state.embellishments,
        });

        FormFields {
            product_id: state.selected_product_id.clone(),
            product_name: product.map(|p| p.name.clone()).unwrap_or_default(),
            quantity: state.quantity.to_string(),
            color: state.selected_color.clone(),
            artwork: state.selected_artwork.clone(),
            neck_label: state.selected_neck_label.clone(),
            unit_cost: plain_number(calculation.unit_cost),
            subtotal: plain_number(calculation.subtotal),
            lead_time: calculation.lead_time_days.to_string(),
            estimated_delivery_date: calculation.estimated_delivery_date.clone(),
            options_json: options.to_string(),
        }
    }
}

fn plain_number(amount: Money) -> String {
    amount.amount().normalize().to_string()
}

// =============================================================================
// Readouts
// =============================================================================

/// Display strings for the summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Readouts {
    /// e.g. `"8 business days"`.
    pub lead_time: String,
    pub delivery_date: String,
    pub quantity: String,
    pub unit_cost: String,
    pub subtotal: String,
}

impl Readouts {
    pub fn new(quantity: u32, calculation: &QuoteCalculation, currency: &str) -> Self {
        Readouts {
            lead_time: format!("{} business days", calculation.lead_time_days),
            delivery_date: calculation.estimated_delivery_date.clone(),
            quantity: quantity.to_string(),
            unit_cost: format_currency(calculation.unit_cost, Some(currency)),
            subtotal: format_currency(calculation.subtotal, Some(currency)),
        }
    }
}

/// Renders an email subject template for a product.
///
/// ## Example
/// ```rust
/// use quote_widget::payload::render_email_subject;
///
/// assert_eq!(
///     render_email_subject("Quote request – {{productName}}", "Tech Hoodie"),
///     "Quote request – Tech Hoodie"
/// );
/// ```
pub fn render_email_subject(template: &str, product_name: &str) -> String {
    template.replace(PRODUCT_NAME_PLACEHOLDER, product_name)
}
