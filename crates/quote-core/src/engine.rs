//! # Quote Engine
//!
//! Composes product price, option surcharges, development costs and the
//! delivery estimate into a [`QuoteCalculation`].
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_cost = tier(product.price_tiers, qty)                             │
//! │            + color.add + artwork.addPerUnit + neck_label.addPerUnit     │
//! │                                                                         │
//! │  dev_costs = product.baseDevCost + artwork.devCost + neck_label.devCost │
//! │                                                                         │
//! │  subtotal  = unit_cost × qty + dev_costs                                │
//! │                                                                         │
//! │  lead_time = tier(config.lead_time_rules, qty)      (catalog-wide)      │
//! │  delivery  = next_business_day(today) + lead_time business days         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Option ids that don't resolve contribute nothing. Embellishments are
//! carried in the selection but not priced.
//!
//! A catalog that skipped validation can still carry absurd amounts or lead
//! times; money then saturates at the `Decimal` bounds and dates at
//! `NaiveDate::MAX`.

use chrono::NaiveDate;

use crate::calendar::estimate_delivery_date;
use crate::money::Money;
use crate::tier::{lead_days_for_qty, unit_price_for_qty, DEFAULT_LEAD_TIME_DAYS};
use crate::types::{QuoteCalculation, QuoteConfig, SelectionState};

impl QuoteCalculation {
    /// The "nothing priced yet" quote: zero money and the fallback lead time.
    pub fn degenerate(reference_date: NaiveDate) -> Self {
        QuoteCalculation {
            unit_cost: Money::zero(),
            dev_costs: Money::zero(),
            subtotal: Money::zero(),
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            estimated_delivery_date: estimate_delivery_date(DEFAULT_LEAD_TIME_DAYS, reference_date),
        }
    }
}

/// Prices the current selection against the catalog.
///
/// Never fails: a missing product yields [`QuoteCalculation::degenerate`].
/// `reference_date` is the order date used for the delivery estimate.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::{compute_quote, Money, QuoteConfig, SelectionState};
///
/// let config = QuoteConfig::from_json(r#"{
///     "products": [{ "id": "cap", "name": "Cap",
///                    "priceBreaks": [{ "minQty": 1, "unit": 12.9 }, { "minQty": 25, "unit": 11.5 }] }],
///     "leadTimeRules": [{ "minQty": 1, "days": 5 }, { "minQty": 25, "days": 8 }]
/// }"#).unwrap();
/// let state = SelectionState::new("cap", 30).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
///
/// let quote = compute_quote(&config, &state, monday);
/// assert_eq!(quote.unit_cost, Money::from_cents(1150));
/// assert_eq!(quote.subtotal, Money::from_cents(34500));
/// assert_eq!(quote.lead_time_days, 8);
/// assert_eq!(quote.estimated_delivery_date, "01/18/2024");
/// ```
pub fn compute_quote(
    config: &QuoteConfig,
    state: &SelectionState,
    reference_date: NaiveDate,
) -> QuoteCalculation {
    let Some(product) = config.product(&state.selected_product_id) else {
        return QuoteCalculation::degenerate(reference_date);
    };

    let quantity = state.quantity;
    let color = config.color(&state.selected_color);
    let artwork = config.artwork(&state.selected_artwork);
    let neck_label = config.neck_label(&state.selected_neck_label);

    let mut unit_cost = unit_price_for_qty(&product.price_tiers, quantity);
    if let Some(color) = color {
        unit_cost += color.per_unit_cost;
    }
    if let Some(artwork) = artwork {
        unit_cost += artwork.per_unit_cost;
    }
    if let Some(neck_label) = neck_label {
        unit_cost += neck_label.per_unit_cost;
    }

    // Charged once, regardless of quantity
    let dev_costs: Money = [
        Some(product.base_dev_cost),
        artwork.map(|a| a.one_time_dev_cost),
        neck_label.map(|n| n.one_time_dev_cost),
    ]
    .into_iter()
    .flatten()
    .sum();

    let subtotal = unit_cost * quantity + dev_costs;

    let lead_time_days = lead_days_for_qty(&config.lead_time_rules, quantity);

    QuoteCalculation {
        unit_cost,
        dev_costs,
        subtotal,
        lead_time_days,
        estimated_delivery_date: estimate_delivery_date(lead_time_days, reference_date),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AddOn, ColorOption, LeadTimeRule, PriceTier, Product, QuantityLimits, QuoteOptions,
    };
    use crate::CallToAction;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
    }

    fn add_on(id: &str, per_unit_cents: i64, dev_cents: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            label: id.to_string(),
            per_unit_cost: Money::from_cents(per_unit_cents),
            one_time_dev_cost: Money::from_cents(dev_cents),
        }
    }

    fn test_config() -> QuoteConfig {
        QuoteConfig {
            currency: "USD".to_string(),
            products: vec![Product {
                id: "test-product".to_string(),
                name: "Test Product".to_string(),
                description: None,
                image: None,
                price_tiers: vec![
                    PriceTier::new(1, Money::from_cents(2000)),
                    PriceTier::new(50, Money::from_cents(1800)),
                ],
                base_dev_cost: Money::from_cents(1000),
            }],
            options: QuoteOptions {
                colors: vec![ColorOption {
                    id: "red".to_string(),
                    label: "Red".to_string(),
                    per_unit_cost: Money::from_cents(100),
                }],
                artwork: vec![add_on("logo", 200, 2500)],
                neck_label: vec![add_on("custom", 50, 1500)],
            },
            lead_time_rules: vec![LeadTimeRule::new(1, 5), LeadTimeRule::new(25, 8)],
            limits: QuantityLimits::default(),
            cta: CallToAction::default(),
        }
    }

    fn test_state() -> SelectionState {
        SelectionState::new("test-product", 10)
            .unwrap()
            .with_color("red")
            .with_artwork("logo")
            .with_neck_label("custom")
    }

    #[test]
    fn test_full_quote() {
        let quote = compute_quote(&test_config(), &test_state(), monday());

        // $20.00 + $1.00 + $2.00 + $0.50 = $23.50 per unit
        // $23.50 × 10 + ($10 + $25 + $15) = $285.00
        assert_eq!(quote.unit_cost, Money::from_cents(2350));
        assert_eq!(quote.dev_costs, Money::from_cents(5000));
        assert_eq!(quote.subtotal, Money::from_cents(28500));
        assert_eq!(quote.lead_time_days, 5);
        assert_eq!(quote.estimated_delivery_date, "01/15/2024");
    }

    #[test]
    fn test_missing_product_is_degenerate() {
        let mut state = test_state();
        state.selected_product_id = "non-existent".to_string();

        let quote = compute_quote(&test_config(), &state, monday());
        assert_eq!(quote, QuoteCalculation::degenerate(monday()));
        assert!(quote.unit_cost.is_zero());
        assert!(quote.subtotal.is_zero());
        assert_eq!(quote.lead_time_days, DEFAULT_LEAD_TIME_DAYS);
        assert_eq!(quote.estimated_delivery_date, "01/15/2024");
    }

    #[test]
    fn test_empty_product_id_is_degenerate() {
        let state = SelectionState::default();
        let quote = compute_quote(&test_config(), &state, monday());
        assert!(quote.subtotal.is_zero());
    }

    #[test]
    fn test_unresolved_options_contribute_nothing() {
        let state = SelectionState::new("test-product", 10)
            .unwrap()
            .with_color("ultraviolet")
            .with_artwork("")
            .with_neck_label("gone");

        let quote = compute_quote(&test_config(), &state, monday());
        assert_eq!(quote.unit_cost, Money::from_cents(2000));
        assert_eq!(quote.dev_costs, Money::from_cents(1000));
        assert_eq!(quote.subtotal, Money::from_cents(21000));
    }

    #[test]
    fn test_dev_costs_independent_of_quantity() {
        let config = test_config();
        let mut state = test_state();

        state.quantity = 1;
        let small = compute_quote(&config, &state, monday());
        state.quantity = 500;
        let large = compute_quote(&config, &state, monday());

        assert_eq!(small.dev_costs, large.dev_costs);
    }

    #[test]
    fn test_quantity_drives_price_and_lead_time() {
        let mut state = test_state();
        state.quantity = 60;

        let quote = compute_quote(&test_config(), &state, monday());
        // $18.00 + $3.50 surcharges
        assert_eq!(quote.unit_cost, Money::from_cents(2150));
        assert_eq!(quote.subtotal, Money::from_cents(2150 * 60 + 5000));
        assert_eq!(quote.lead_time_days, 8);
        assert_eq!(quote.estimated_delivery_date, "01/18/2024");
    }

    #[test]
    fn test_product_without_tiers_and_catalog_without_rules() {
        let mut config = test_config();
        config.products[0].price_tiers.clear();
        config.lead_time_rules.clear();

        let quote = compute_quote(&config, &test_state(), monday());
        assert_eq!(quote.unit_cost, Money::from_cents(350));
        assert_eq!(quote.lead_time_days, DEFAULT_LEAD_TIME_DAYS);
    }

    #[test]
    fn test_zero_quantity_charges_only_dev_costs() {
        let mut state = test_state();
        state.quantity = 0;

        let quote = compute_quote(&test_config(), &state, monday());
        assert_eq!(quote.subtotal, quote.dev_costs);
    }

    #[test]
    fn test_embellishments_are_not_priced() {
        use crate::types::{Embellishment, EmbellishmentDetails, EmbellishmentKind};

        let plain = compute_quote(&test_config(), &test_state(), monday());

        let mut decorated = test_state();
        decorated.embellishments.push(Embellishment {
            id: "embroidery-1".to_string(),
            kind: EmbellishmentKind::Embroidery,
            is_expanded: true,
            details: EmbellishmentDetails {
                emb_3d: Some(true),
                ..Default::default()
            },
        });

        assert_eq!(compute_quote(&test_config(), &decorated, monday()), plain);
    }

    #[test]
    fn test_unvalidated_extremes_saturate() {
        use rust_decimal::Decimal;

        let mut config = test_config();
        config.products[0].price_tiers = vec![PriceTier::new(1, Money::from_decimal(Decimal::MAX))];
        config.lead_time_rules = vec![LeadTimeRule::new(1, u32::MAX)];
        let mut state = test_state();
        state.quantity = u32::MAX;

        let quote = compute_quote(&config, &state, monday());
        assert_eq!(quote.unit_cost, Money::from_decimal(Decimal::MAX));
        assert_eq!(quote.subtotal, Money::from_decimal(Decimal::MAX));
        assert_eq!(quote.lead_time_days, u32::MAX);
        assert!(!quote.estimated_delivery_date.is_empty());
    }
}
