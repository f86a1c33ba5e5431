//! # Business Calendar
//!
//! Weekend-aware date arithmetic for delivery estimates.
//!
//! ## Delivery Estimate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ordered Sat 06 Jan 2024, lead time 5 business days                    │
//! │                                                                         │
//! │  next_business_day(Sat 06) ──► Mon 08       (production starts)         │
//! │  add_business_days(Mon 08, 5)                                           │
//! │      Tue 09 (1) Wed 10 (2) Thu 11 (3) Fri 12 (4)                        │
//! │      Sat 13 ✗  Sun 14 ✗  Mon 15 (5) ──► "01/15/2024"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only Saturdays and Sundays are skipped; there is no holiday calendar.
//! The reference date is always an argument, never read from the clock.
//!
//! Arithmetic saturates at [`NaiveDate::MAX`] instead of panicking.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Display format of delivery dates (`MM/DD/YYYY`).
pub const DELIVERY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Monday through Friday.
#[inline]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves a weekend date forward to the following Monday; weekdays are
/// returned unchanged.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::calendar::next_business_day;
///
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(next_business_day(saturday), monday);
/// assert_eq!(next_business_day(monday), monday);
/// ```
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let skip = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(skip))
        .unwrap_or(NaiveDate::MAX)
}

/// Advances `n` business days from `start`. The start date itself is never
/// counted; `n = 0` returns `start` unchanged.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::calendar::add_business_days;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// // Thu, Fri, (weekend), Mon
/// assert_eq!(add_business_days(wednesday, 3), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
pub fn add_business_days(start: NaiveDate, n: u32) -> NaiveDate {
    if n == 0 {
        return start;
    }

    // Any seven consecutive days hold exactly five business days. Jump whole
    // weeks but leave 1..=5 to walk so the result lands on a business day.
    let weeks = (n - 1) / 5;
    let Some(mut current) = start.checked_add_days(Days::new(u64::from(weeks) * 7)) else {
        return NaiveDate::MAX;
    };
    let mut counted = weeks * 5;

    while counted < n {
        current = match current.succ_opt() {
            Some(next) => next,
            None => return NaiveDate::MAX,
        };
        if is_business_day(current) {
            counted += 1;
        }
    }

    current
}

/// Formats a date as `MM/DD/YYYY`.
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format(DELIVERY_DATE_FORMAT).to_string()
}

/// Delivery date for an order placed on `reference` with the given lead
/// time: production starts on the next business day and takes
/// `lead_time_days` business days.
pub fn delivery_date(lead_time_days: u32, reference: NaiveDate) -> NaiveDate {
    add_business_days(next_business_day(reference), lead_time_days)
}

/// [`delivery_date`] rendered as `MM/DD/YYYY`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::calendar::estimate_delivery_date;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(estimate_delivery_date(5, monday), "01/15/2024");
/// ```
pub fn estimate_delivery_date(lead_time_days: u32, reference: NaiveDate) -> String {
    format_delivery_date(delivery_date(lead_time_days, reference))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_business_day_weekend() {
        let saturday = date(2024, 1, 6);
        let sunday = date(2024, 1, 7);
        let monday = date(2024, 1, 8);

        assert_eq!(next_business_day(saturday), monday);
        assert_eq!(next_business_day(sunday), monday);
        assert_eq!(next_business_day(saturday).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_next_business_day_weekday_is_identity() {
        let tuesday = date(2024, 1, 9);
        assert_eq!(next_business_day(tuesday), tuesday);

        let friday = date(2024, 1, 12);
        assert_eq!(next_business_day(friday), friday);
    }

    #[test]
    fn test_add_business_days() {
        // Monday + 5 → next Monday
        assert_eq!(add_business_days(date(2024, 1, 8), 5), date(2024, 1, 15));
        // Wednesday + 3 skips the weekend
        assert_eq!(add_business_days(date(2024, 1, 10), 3), date(2024, 1, 15));
        // Friday + 1 → Monday
        assert_eq!(add_business_days(date(2024, 1, 12), 1), date(2024, 1, 15));
    }

    #[test]
    fn test_add_zero_business_days() {
        let saturday = date(2024, 1, 6);
        assert_eq!(add_business_days(saturday, 0), saturday);
    }

    #[test]
    fn test_add_business_days_across_month_and_year() {
        // Thu 28 Dec 2023 + 3 → Tue 02 Jan 2024
        assert_eq!(add_business_days(date(2023, 12, 28), 3), date(2024, 1, 2));
        // Leap day is an ordinary business day
        assert_eq!(add_business_days(date(2024, 2, 28), 1), date(2024, 2, 29));
    }

    #[test]
    fn test_add_business_days_long_lead_time() {
        // 520 business days is exactly 104 weeks
        assert_eq!(add_business_days(date(2024, 1, 8), 520), date(2026, 1, 5));
        // Saturday start still lands on the fifth weekday after it
        assert_eq!(add_business_days(date(2024, 1, 6), 5), date(2024, 1, 12));
    }

    #[test]
    fn test_add_business_days_saturates_at_max_date() {
        assert_eq!(add_business_days(date(2024, 1, 8), u32::MAX), NaiveDate::MAX);
        assert_eq!(add_business_days(NaiveDate::MAX, 1), NaiveDate::MAX);

        let near_end = NaiveDate::MAX - Days::new(3);
        assert_eq!(add_business_days(near_end, 10), NaiveDate::MAX);
    }

    #[test]
    fn test_next_business_day_saturates_at_max_date() {
        let last = NaiveDate::MAX;
        assert!(next_business_day(last) >= last);
        assert_eq!(delivery_date(u32::MAX, date(2024, 1, 6)), NaiveDate::MAX);
    }

    #[test]
    fn test_estimate_delivery_date_format() {
        let monday = date(2024, 1, 8);
        assert_eq!(estimate_delivery_date(5, monday), "01/15/2024");
        assert_eq!(estimate_delivery_date(0, monday), "01/08/2024");

        // Ordered on a Saturday: production starts Monday
        assert_eq!(estimate_delivery_date(5, date(2024, 1, 6)), "01/15/2024");
        assert_eq!(estimate_delivery_date(0, date(2024, 1, 6)), "01/08/2024");
    }

    #[test]
    fn test_format_pads_month_and_day() {
        assert_eq!(format_delivery_date(date(2025, 3, 4)), "03/04/2025");
        assert_eq!(format_delivery_date(date(2025, 11, 21)), "11/21/2025");
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        // 2000-01-01 plus up to ~100 years
        (0u64..36_500).prop_map(|offset| date(2000, 1, 1) + Days::new(offset))
    }

    proptest! {
        #[test]
        fn prop_next_business_day_idempotent(d in arb_date()) {
            let once = next_business_day(d);
            prop_assert_eq!(next_business_day(once), once);
            prop_assert!(is_business_day(once));
        }

        #[test]
        fn prop_add_business_days_lands_on_weekday(d in arb_date(), n in 1u32..60) {
            prop_assert!(is_business_day(add_business_days(d, n)));
        }

        #[test]
        fn prop_add_business_days_counts_exactly_n(d in arb_date(), n in 0u32..60) {
            let end = add_business_days(d, n);
            let counted = d
                .iter_days()
                .skip(1)
                .take_while(|day| *day <= end)
                .filter(|day| is_business_day(*day))
                .count();
            prop_assert_eq!(counted as u32, n);
        }

        #[test]
        fn prop_delivery_is_weekday(lead in 0u32..60, d in arb_date()) {
            prop_assert!(is_business_day(delivery_date(lead, d)));
        }
    }
}
