//! # Tier Resolver
//!
//! "Pick the highest threshold not exceeding the quantity" lookup, shared by
//! unit prices and lead times.
//!
//! ## Resolution Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tiers: {1 → 10.00} {25 → 8.50} {50 → 7.00} {100 → 6.00}              │
//! │                                                                         │
//! │   qty:   1 ... 24 │ 25 ... 49 │ 50 ... 99 │ 100 ...                    │
//! │  value:  10.00    │ 8.50      │ 7.00      │ 6.00                       │
//! │                                                                         │
//! │  qty below the smallest threshold → smallest-threshold tier (floor)    │
//! │  no tiers at all                  → caller-supplied default            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tier lists are single digits long, so each call sorts a copy of the
//! references instead of keeping an index around.

use crate::money::Money;
use crate::types::{LeadTimeRule, PriceTier};

/// Lead time used when the catalog has no lead-time rules, and for the
/// "nothing selected yet" quote.
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 5;

/// A quantity threshold mapped to a value.
pub trait Tier {
    type Value: Copy;

    /// Smallest order quantity this tier applies to.
    fn min_qty(&self) -> u32;

    /// The value this tier yields.
    fn value(&self) -> Self::Value;
}

impl Tier for PriceTier {
    type Value = Money;

    fn min_qty(&self) -> u32 {
        self.min_qty
    }

    fn value(&self) -> Money {
        self.unit_price
    }
}

impl Tier for LeadTimeRule {
    type Value = u32;

    fn min_qty(&self) -> u32 {
        self.min_qty
    }

    fn value(&self) -> u32 {
        self.days
    }
}

/// Resolves the value of the applicable tier for `quantity`.
///
/// Total: input order doesn't matter, a quantity below every threshold gets
/// the lowest tier, and an empty list yields `default`.
///
/// ## Example
/// ```rust
/// use quote_core::tier::resolve_tier;
/// use quote_core::LeadTimeRule;
///
/// let rules = [LeadTimeRule::new(100, 12), LeadTimeRule::new(1, 5), LeadTimeRule::new(25, 8)];
/// assert_eq!(resolve_tier(&rules, 10, 5), 5);
/// assert_eq!(resolve_tier(&rules, 50, 5), 8);
/// assert_eq!(resolve_tier(&rules, 200, 5), 12);
/// assert_eq!(resolve_tier::<LeadTimeRule>(&[], 200, 7), 7);
/// ```
pub fn resolve_tier<T: Tier>(tiers: &[T], quantity: u32, default: T::Value) -> T::Value {
    let mut sorted: Vec<&T> = tiers.iter().collect();
    sorted.sort_by_key(|t| t.min_qty());

    let Some(lowest) = sorted.first() else {
        return default;
    };

    sorted
        .iter()
        .take_while(|t| t.min_qty() <= quantity)
        .last()
        .unwrap_or(lowest)
        .value()
}

/// Unit price for `quantity`; zero when the product has no price breaks.
pub fn unit_price_for_qty(tiers: &[PriceTier], quantity: u32) -> Money {
    resolve_tier(tiers, quantity, Money::zero())
}

/// Lead time in business days for `quantity`; [`DEFAULT_LEAD_TIME_DAYS`]
/// when the catalog has no rules.
pub fn lead_days_for_qty(rules: &[LeadTimeRule], quantity: u32) -> u32 {
    resolve_tier(rules, quantity, DEFAULT_LEAD_TIME_DAYS)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price_breaks() -> Vec<PriceTier> {
        vec![
            PriceTier::new(1, Money::from_cents(1000)),
            PriceTier::new(25, Money::from_cents(850)),
            PriceTier::new(50, Money::from_cents(700)),
            PriceTier::new(100, Money::from_cents(600)),
        ]
    }

    fn lead_rules() -> Vec<LeadTimeRule> {
        vec![
            LeadTimeRule::new(1, 5),
            LeadTimeRule::new(25, 8),
            LeadTimeRule::new(100, 12),
        ]
    }

    #[test]
    fn test_unit_price_tiers() {
        let tiers = price_breaks();
        assert_eq!(unit_price_for_qty(&tiers, 1), Money::from_cents(1000));
        assert_eq!(unit_price_for_qty(&tiers, 24), Money::from_cents(1000));
        assert_eq!(unit_price_for_qty(&tiers, 25), Money::from_cents(850));
        assert_eq!(unit_price_for_qty(&tiers, 75), Money::from_cents(700));
        assert_eq!(unit_price_for_qty(&tiers, 150), Money::from_cents(600));
    }

    #[test]
    fn test_lead_time_tiers() {
        let rules = lead_rules();
        assert_eq!(lead_days_for_qty(&rules, 10), 5);
        assert_eq!(lead_days_for_qty(&rules, 50), 8);
        assert_eq!(lead_days_for_qty(&rules, 200), 12);
    }

    #[test]
    fn test_empty_lists_use_call_site_defaults() {
        assert_eq!(unit_price_for_qty(&[], 10), Money::zero());
        assert_eq!(lead_days_for_qty(&[], 10), DEFAULT_LEAD_TIME_DAYS);
        assert_eq!(resolve_tier::<LeadTimeRule>(&[], 10, 9), 9);
    }

    #[test]
    fn test_below_smallest_threshold_falls_back_to_floor() {
        let tiers = vec![
            PriceTier::new(50, Money::from_cents(700)),
            PriceTier::new(10, Money::from_cents(900)),
        ];
        assert_eq!(unit_price_for_qty(&tiers, 0), Money::from_cents(900));
        assert_eq!(unit_price_for_qty(&tiers, 9), Money::from_cents(900));
    }

    #[test]
    fn test_unsorted_input() {
        let mut tiers = price_breaks();
        tiers.reverse();
        assert_eq!(unit_price_for_qty(&tiers, 30), Money::from_cents(850));
    }

    #[test]
    fn test_duplicate_thresholds_keep_input_order() {
        // Stable sort: with equal thresholds the later entry wins
        let rules = vec![LeadTimeRule::new(10, 4), LeadTimeRule::new(10, 6)];
        assert_eq!(lead_days_for_qty(&rules, 10), 6);
    }

    fn arb_rules() -> impl Strategy<Value = Vec<LeadTimeRule>> {
        // Distinct thresholds, so every permutation resolves identically
        prop::collection::btree_map(0u32..500, 0u32..60, 1..8).prop_map(|m| {
            m.into_iter()
                .map(|(min_qty, days)| LeadTimeRule::new(min_qty, days))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_order_independent(
            (rules, shuffled) in arb_rules().prop_flat_map(|r| {
                let shuffled = Just(r.clone()).prop_shuffle();
                (Just(r), shuffled)
            }),
            qty in 0u32..1000,
        ) {
            prop_assert_eq!(
                lead_days_for_qty(&rules, qty),
                lead_days_for_qty(&shuffled, qty)
            );
        }

        #[test]
        fn prop_floor_fallback(rules in arb_rules(), shift in 1u32..500) {
            // Lift every threshold so quantities just below the floor exist
            let lifted: Vec<LeadTimeRule> = rules
                .iter()
                .map(|r| LeadTimeRule::new(r.min_qty + shift, r.days))
                .collect();
            let lowest = lifted.iter().min_by_key(|r| r.min_qty).unwrap();

            prop_assert_eq!(lead_days_for_qty(&lifted, 0), lowest.days);
            prop_assert_eq!(lead_days_for_qty(&lifted, lowest.min_qty - 1), lowest.days);
        }

        #[test]
        fn prop_result_is_highest_qualifying_tier(rules in arb_rules(), qty in 0u32..1000) {
            let expected = rules
                .iter()
                .filter(|r| r.min_qty <= qty)
                .max_by_key(|r| r.min_qty)
                .or_else(|| rules.iter().min_by_key(|r| r.min_qty))
                .map(|r| r.days)
                .unwrap();
            prop_assert_eq!(lead_days_for_qty(&rules, qty), expected);
        }
    }
}
