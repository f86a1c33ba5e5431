//! # Domain Types
//!
//! Catalog, selection and calculation types used throughout the quote widget.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  QuoteConfig (immutable, loaded once per session)                       │
//! │  ├── currency                                                           │
//! │  ├── products: Vec<Product> ──► price_tiers: Vec<PriceTier>             │
//! │  ├── options: colors / artwork / neck_label                             │
//! │  ├── lead_time_rules: Vec<LeadTimeRule>                                 │
//! │  ├── limits: QuantityLimits                                             │
//! │  └── cta: CallToAction                                                  │
//! │                                                                         │
//! │  SelectionState (mutable, owned by the widget)                          │
//! │  └── product / quantity / color / artwork / neck label / embellishments │
//! │                                                                         │
//! │  QuoteCalculation (value, recomputed on every change)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names follow the embed config the marketing site already ships
//! (`priceBreaks`, `unit`, `addPerUnit`, `devCost`, ...), so an existing
//! catalog JSON deserializes unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, DEFAULT_CURRENCY};
use crate::validation::{validate_quantity, ValidationResult};

// =============================================================================
// Tiers
// =============================================================================

/// A quantity price break: orders of at least `min_qty` pay `unit_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub min_qty: u32,
    #[serde(rename = "unit", alias = "unitPrice")]
    pub unit_price: Money,
}

impl PriceTier {
    pub fn new(min_qty: u32, unit_price: Money) -> Self {
        PriceTier {
            min_qty,
            unit_price,
        }
    }
}

/// Production lead time (business days) for orders of at least `min_qty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeadTimeRule {
    pub min_qty: u32,
    pub days: u32,
}

impl LeadTimeRule {
    pub fn new(min_qty: u32, days: u32) -> Self {
        LeadTimeRule { min_qty, days }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A blank garment/accessory the visitor can quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Product image URL for the product card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<String>,

    /// Quantity price breaks. Need not be sorted.
    #[serde(rename = "priceBreaks", alias = "priceTiers", default)]
    pub price_tiers: Vec<PriceTier>,

    /// One-time setup charge for this product.
    #[serde(default)]
    pub base_dev_cost: Money,
}

/// A priced option (artwork, neck label) with a per-unit and a one-time cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(rename = "addPerUnit", default)]
    pub per_unit_cost: Money,

    #[serde(rename = "devCost", default)]
    pub one_time_dev_cost: Money,
}

/// A garment color. Colors only carry a per-unit surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(rename = "add", default)]
    pub per_unit_cost: Money,
}

/// The option lists shown next to the product picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOptions {
    #[serde(default)]
    pub colors: Vec<ColorOption>,

    #[serde(default)]
    pub artwork: Vec<AddOn>,

    #[serde(default)]
    pub neck_label: Vec<AddOn>,
}

/// Quantity input bounds. The widget clamps user input to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuantityLimits {
    pub min_qty: u32,
    pub max_qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub qty_step: Option<u32>,
}

impl QuantityLimits {
    /// Step used by the +/- buttons (1 when not configured).
    pub fn step(&self) -> u32 {
        self.qty_step.filter(|s| *s > 0).unwrap_or(1)
    }

    /// Clamps raw user input into `[min_qty, max_qty]`.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::QuantityLimits;
    ///
    /// let limits = QuantityLimits { min_qty: 1, max_qty: 1000, qty_step: None };
    /// assert_eq!(limits.clamp(-5), 1);
    /// assert_eq!(limits.clamp(250), 250);
    /// assert_eq!(limits.clamp(5000), 1000);
    /// ```
    pub fn clamp(&self, qty: i64) -> u32 {
        // Inverted limits resolve to max_qty
        qty.max(i64::from(self.min_qty)).min(i64::from(self.max_qty)) as u32
    }
}

impl Default for QuantityLimits {
    fn default() -> Self {
        QuantityLimits {
            min_qty: 1,
            max_qty: 1000,
            qty_step: Some(1),
        }
    }
}

/// Call-to-action settings for the two submit buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    /// Where "Start design" sends the visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub start_design_url: Option<String>,

    /// Email subject template; `{{productName}}` is substituted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email_subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email_to: Option<String>,
}

/// The immutable catalog snapshot a widget session prices against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteConfig {
    /// Currency code used for display (USD, EUR, GBP, BRL).
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub options: QuoteOptions,

    /// Catalog-wide lead-time rules (independent of the product).
    #[serde(default)]
    pub lead_time_rules: Vec<LeadTimeRule>,

    #[serde(default)]
    pub limits: QuantityLimits,

    #[serde(default)]
    pub cta: CallToAction,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl QuoteConfig {
    /// Parses a catalog from the embed-config JSON shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Finds a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a product by id, failing with `ProductNotFound`.
    pub fn require_product(&self, id: &str) -> CoreResult<&Product> {
        self.product(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn color(&self, id: &str) -> Option<&ColorOption> {
        self.options.colors.iter().find(|c| c.id == id)
    }

    pub fn artwork(&self, id: &str) -> Option<&AddOn> {
        self.options.artwork.iter().find(|a| a.id == id)
    }

    pub fn neck_label(&self, id: &str) -> Option<&AddOn> {
        self.options.neck_label.iter().find(|n| n.id == id)
    }
}

// =============================================================================
// Embellishments
// =============================================================================

/// Decoration method for an embellishment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EmbellishmentKind {
    #[serde(rename = "screenprint")]
    ScreenPrint,
    Embroidery,
}

impl EmbellishmentKind {
    /// Wire name, also used as the id prefix of new items.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmbellishmentKind::ScreenPrint => "screenprint",
            EmbellishmentKind::Embroidery => "embroidery",
        }
    }
}

/// Free-form detail fields of an embellishment row.
///
/// Screen print uses the `sp_*` fields, embroidery the `emb_*` fields.
/// None of these are priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmbellishmentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sp_colors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sp_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sp_extras: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub emb_colors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub emb_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub emb_3d: Option<bool>,
}

/// A decoration row the visitor added (screen print or embroidery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Embellishment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EmbellishmentKind,
    pub is_expanded: bool,
    #[serde(rename = "config", default)]
    pub details: EmbellishmentDetails,
}

// =============================================================================
// Selection State
// =============================================================================

/// What the visitor currently has selected.
///
/// Ids are plain strings and may be empty or stale; the engine treats an
/// unresolved id as "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_product_id: String,
    pub quantity: u32,
    pub selected_color: String,
    pub selected_artwork: String,
    pub selected_neck_label: String,
    #[serde(default)]
    pub embellishments: Vec<Embellishment>,
}

impl SelectionState {
    /// Creates a selection for a product and a raw quantity.
    ///
    /// This is the validation boundary: a negative quantity is rejected here
    /// so the pricing functions only ever see well-formed state.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::SelectionState;
    ///
    /// assert!(SelectionState::new("tech-hoodie", 25).is_ok());
    /// assert!(SelectionState::new("tech-hoodie", -1).is_err());
    /// ```
    pub fn new(product_id: impl Into<String>, quantity: i64) -> ValidationResult<Self> {
        let quantity = validate_quantity(quantity)?;

        Ok(SelectionState {
            selected_product_id: product_id.into(),
            quantity,
            ..Default::default()
        })
    }

    pub fn with_color(mut self, id: impl Into<String>) -> Self {
        self.selected_color = id.into();
        self
    }

    pub fn with_artwork(mut self, id: impl Into<String>) -> Self {
        self.selected_artwork = id.into();
        self
    }

    pub fn with_neck_label(mut self, id: impl Into<String>) -> Self {
        self.selected_neck_label = id.into();
        self
    }
}

// =============================================================================
// Quote Calculation
// =============================================================================

/// Result of pricing a selection.
///
/// Money values are unrounded; format them for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCalculation {
    /// Price per unit including per-unit option surcharges.
    pub unit_cost: Money,
    /// One-time development charges.
    pub dev_costs: Money,
    /// `unit_cost × quantity + dev_costs`.
    pub subtotal: Money,
    pub lead_time_days: u32,
    /// `MM/DD/YYYY`.
    #[serde(rename = "estimatedDelivery")]
    pub estimated_delivery_date: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
