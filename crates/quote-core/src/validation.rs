//! # Validation Module
//!
//! Boundary checks for catalog snapshots and selection input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape and types                                                   │
//! │  └── Thresholds and days are u32, so negatives never parse             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Money values within 0..=MAX_AMOUNT                                │
//! │  ├── Lead times within 0..=MAX_LEAD_TIME_DAYS                          │
//! │  ├── Product ids present and unique                                    │
//! │  └── Quantity limits well-formed                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing (engine, tier, calendar)                             │
//! │  └── Total functions, never fail                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::validation::validate_quantity;
//!
//! assert_eq!(validate_quantity(25).unwrap(), 25);
//! assert!(validate_quantity(-1).is_err());
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{AddOn, LeadTimeRule, PriceTier, QuantityLimits, QuoteConfig};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest catalog amount, in major units.
///
/// A unit cost sums at most four such amounts, and four billion times
/// `u32::MAX` is still far inside the `Decimal` range, so a validated catalog
/// never saturates whatever `maxQty` says.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Longest lead time a rule may promise (roughly fourteen years of
/// business days).
pub const MAX_LEAD_TIME_DAYS: u32 = 3650;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw quantity and narrows it to `u32`.
///
/// ## Rules
/// - Must not be negative
/// - Must fit in `u32`
///
/// Zero is accepted: clamping to the configured minimum is the widget's job.
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Validates that a money amount is not negative and at most [`MAX_AMOUNT`].
///
/// ## Example
/// ```rust
/// use quote_core::money::Money;
/// use quote_core::validation::validate_money;
///
/// assert!(validate_money("unit", Money::from_cents(1099)).is_ok());
/// assert!(validate_money("unit", Money::zero()).is_ok());
/// assert!(validate_money("unit", Money::from_cents(-100)).is_err());
/// assert!(validate_money("unit", Money::from_cents(100_000_000_001)).is_err());
/// ```
pub fn validate_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    if amount.amount() > Decimal::from(MAX_AMOUNT) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT,
        });
    }

    Ok(())
}

/// Validates every unit price in a product's price breaks.
pub fn validate_price_tiers(field: &str, tiers: &[PriceTier]) -> ValidationResult<()> {
    for (i, tier) in tiers.iter().enumerate() {
        validate_money(&format!("{}[{}].unit", field, i), tier.unit_price)?;
    }

    Ok(())
}

/// Validates that every lead-time rule stays within [`MAX_LEAD_TIME_DAYS`].
pub fn validate_lead_time_rules(rules: &[LeadTimeRule]) -> ValidationResult<()> {
    for (i, rule) in rules.iter().enumerate() {
        if rule.days > MAX_LEAD_TIME_DAYS {
            return Err(ValidationError::OutOfRange {
                field: format!("leadTimeRules[{}].days", i),
                min: 0,
                max: i64::from(MAX_LEAD_TIME_DAYS),
            });
        }
    }

    Ok(())
}

/// Validates quantity limits.
///
/// ## Rules
/// - `min_qty <= max_qty`
/// - `qty_step`, when set, must be positive
pub fn validate_limits(limits: &QuantityLimits) -> ValidationResult<()> {
    if limits.min_qty > limits.max_qty {
        return Err(ValidationError::OutOfRange {
            field: "limits.minQty".to_string(),
            min: 0,
            max: i64::from(limits.max_qty),
        });
    }

    if limits.qty_step == Some(0) {
        return Err(ValidationError::MustBePositive {
            field: "limits.qtyStep".to_string(),
        });
    }

    Ok(())
}

/// Validates a currency code.
///
/// ## Rules
/// - Must not be empty
/// - Must be three ASCII uppercase letters
///
/// Unknown but well-formed codes are fine: they display with `$`.
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter uppercase code".to_string(),
        });
    }

    Ok(())
}

fn validate_add_ons(field: &str, add_ons: &[AddOn]) -> ValidationResult<()> {
    for (i, add_on) in add_ons.iter().enumerate() {
        validate_money(&format!("{}[{}].addPerUnit", field, i), add_on.per_unit_cost)?;
        validate_money(&format!("{}[{}].devCost", field, i), add_on.one_time_dev_cost)?;
    }

    Ok(())
}

// =============================================================================
// Catalog Validator
// =============================================================================

/// Validates a whole catalog snapshot before a session uses it.
///
/// ## Rules
/// - Currency code well-formed
/// - Product ids non-empty and unique
/// - All prices, surcharges and development costs within `0..=MAX_AMOUNT`
/// - Lead times within `0..=MAX_LEAD_TIME_DAYS`
/// - Quantity limits well-formed
pub fn validate_config(config: &QuoteConfig) -> ValidationResult<()> {
    validate_currency_code(&config.currency)?;

    let mut seen = HashSet::new();
    for (i, product) in config.products.iter().enumerate() {
        if product.id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: format!("products[{}].id", i),
            });
        }

        if !seen.insert(product.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.clone(),
            });
        }

        validate_price_tiers(&format!("products[{}].priceBreaks", i), &product.price_tiers)?;
        validate_money(&format!("products[{}].baseDevCost", i), product.base_dev_cost)?;
    }

    for (i, color) in config.options.colors.iter().enumerate() {
        validate_money(&format!("options.colors[{}].add", i), color.per_unit_cost)?;
    }
    validate_add_ons("options.artwork", &config.options.artwork)?;
    validate_add_ons("options.neckLabel", &config.options.neck_label)?;

    validate_lead_time_rules(&config.lead_time_rules)?;
    validate_limits(&config.limits)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
