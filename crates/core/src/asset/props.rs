//! Property-based tests for the depreciation calculator.
//!
//! Invariants covered:
//! - Output bounds: monetary fields are non-negative and book values never
//!   exceed the purchase price
//! - Ordering: opening <= closing <= cost for non-disposed assets
//! - Degenerate paths: zero useful life, future purchase dates, disposal

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::depreciation::{
    DepreciationInput, MonthBasis, compute_depreciation, estimate_useful_life, months_elapsed,
};

/// Strategy to generate positive prices (0.01 to 10,000,000.00).
fn positive_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate useful lives (1 to 50 years).
fn useful_life() -> impl Strategy<Value = u32> {
    1u32..=50
}

/// Strategy to generate valid calendar dates between 2000 and 2040.
fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn basis() -> impl Strategy<Value = MonthBasis> {
    prop_oneof![Just(MonthBasis::Inclusive), Just(MonthBasis::Exclusive)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// All monetary outputs are non-negative and bounded by the price.
    #[test]
    fn prop_outputs_bounded(
        price in positive_price(),
        life in useful_life(),
        purchase in calendar_date(),
        as_of in calendar_date(),
        basis in basis(),
    ) {
        let record = compute_depreciation(&DepreciationInput {
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: life,
            as_of,
            basis,
            disposed: false,
            disposal_value: Decimal::ZERO,
        });

        prop_assert!(record.accumulated_depreciation >= Decimal::ZERO);
        prop_assert!(record.accumulated_depreciation <= price);
        prop_assert!(record.net_book_value >= Decimal::ZERO);
        prop_assert!(record.net_book_value <= price);
        prop_assert!(record.remaining_value >= Decimal::ZERO);
        prop_assert!(record.remaining_value <= price);
    }

    /// Opening never exceeds closing, and closing never exceeds cost.
    #[test]
    fn prop_opening_closing_ordered(
        price in positive_price(),
        life in useful_life(),
        purchase in calendar_date(),
        as_of in calendar_date(),
        basis in basis(),
    ) {
        let record = compute_depreciation(&DepreciationInput {
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: life,
            as_of,
            basis,
            disposed: false,
            disposal_value: Decimal::ZERO,
        });

        prop_assert!(Decimal::ZERO <= record.opening_depreciation);
        prop_assert!(record.opening_depreciation <= record.closing_depreciation);
        prop_assert!(record.closing_depreciation <= record.cost_final_balance);
    }

    /// Zero useful life means no depreciation for any pair of dates.
    #[test]
    fn prop_zero_life_preserves_value(
        price in positive_price(),
        purchase in calendar_date(),
        as_of in calendar_date(),
    ) {
        let record = compute_depreciation(&DepreciationInput {
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: 0,
            as_of,
            basis: MonthBasis::Inclusive,
            disposed: false,
            disposal_value: Decimal::ZERO,
        });

        prop_assert_eq!(record.depreciation_rate, Decimal::ZERO);
        prop_assert_eq!(record.net_book_value, price);
    }

    /// A purchase date after the as-of date zeroes all depreciation fields.
    #[test]
    fn prop_future_purchase_is_flagged(
        price in positive_price(),
        life in useful_life(),
        purchase in calendar_date(),
        as_of in calendar_date(),
    ) {
        prop_assume!(purchase > as_of);

        let record = compute_depreciation(&DepreciationInput {
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: life,
            as_of,
            basis: MonthBasis::Inclusive,
            disposed: false,
            disposal_value: Decimal::ZERO,
        });

        prop_assert!(record.is_future_date);
        prop_assert_eq!(record.accumulated_depreciation, Decimal::ZERO);
        prop_assert_eq!(record.closing_depreciation, Decimal::ZERO);
        prop_assert_eq!(record.net_book_value, price);
    }

    /// Disposal zeroes remaining cost and book value regardless of dates.
    #[test]
    fn prop_disposal_zeroes_book_value(
        price in positive_price(),
        disposal in positive_price(),
        life in useful_life(),
        purchase in calendar_date(),
        as_of in calendar_date(),
    ) {
        let record = compute_depreciation(&DepreciationInput {
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: life,
            as_of,
            basis: MonthBasis::Inclusive,
            disposed: true,
            disposal_value: disposal,
        });

        prop_assert_eq!(record.disposal, disposal);
        prop_assert_eq!(record.remaining_cost, Decimal::ZERO);
        prop_assert_eq!(record.closing_depreciation, Decimal::ZERO);
        prop_assert_eq!(record.net_book_value, Decimal::ZERO);
    }

    /// Inclusive counting is always exactly one month more than exclusive
    /// for non-future dates.
    #[test]
    fn prop_inclusive_is_exclusive_plus_one(
        purchase in calendar_date(),
        as_of in calendar_date(),
    ) {
        prop_assume!(purchase <= as_of);

        let inclusive = months_elapsed(purchase, as_of, MonthBasis::Inclusive);
        let exclusive = months_elapsed(purchase, as_of, MonthBasis::Exclusive);
        prop_assert_eq!(inclusive, exclusive + 1);
    }

    /// The reverse estimate always produces a plausible positive life.
    #[test]
    fn prop_estimate_useful_life_positive(
        price in positive_price(),
        current in positive_price(),
        purchase in calendar_date(),
        as_of in calendar_date(),
    ) {
        let years = estimate_useful_life(price, current, purchase, as_of);
        prop_assert!(years >= Decimal::ONE);
    }
}
