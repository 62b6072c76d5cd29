//! Straight-line depreciation.
//!
//! The calculator converts an asset's static purchase facts into a
//! point-in-time depreciation position. It is a total function: zero price,
//! zero useful life, future purchase dates, and disposed assets are all
//! valid alternate paths with defined zero or clamped outputs, never errors.
//! Input validation (rejecting negative prices, clamping useful life) is the
//! caller's responsibility at the API boundary.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DEFAULT_USEFUL_LIFE_YEARS;

/// Month-counting convention for elapsed time since purchase.
///
/// The original application counted inclusively (+1, purchase month counts
/// as month 1) in its add/edit forms but exclusively in the dashboard trend
/// and schedule views. Assetra standardizes every call site on `Inclusive`;
/// `Exclusive` remains supported as an explicit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBasis {
    /// The purchase month itself counts as month 1.
    #[default]
    Inclusive,
    /// Only fully started months after the purchase month count.
    Exclusive,
}

/// Inputs to the depreciation calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepreciationInput {
    /// Purchase price (non-negative).
    pub purchase_price: Decimal,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Useful life in years; 0 means the asset does not depreciate.
    pub useful_life_years: u32,
    /// Reference date for elapsed time.
    pub as_of: NaiveDate,
    /// Month-counting convention.
    pub basis: MonthBasis,
    /// Whether the asset has been disposed.
    pub disposed: bool,
    /// Value removed at disposal time (only read when `disposed` is set).
    pub disposal_value: Decimal,
}

/// Point-in-time depreciation position of an asset.
///
/// Synthesized fresh on every invocation, never persisted or mutated.
/// For a non-disposed asset:
/// `0 <= opening_depreciation <= closing_depreciation <= cost_final_balance`
/// and `net_book_value >= 0`. For a disposed asset all depreciation and
/// book-value fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationRecord {
    /// Asset purchase price.
    pub cost_final_balance: Decimal,
    /// Value removed from the asset if disposed.
    pub disposal: Decimal,
    /// Cost minus disposal (zero if disposed).
    pub remaining_cost: Decimal,
    /// Annual depreciation rate as a percentage (100 / useful life).
    pub depreciation_rate: Decimal,
    /// Accumulated depreciation at the start of the current month.
    pub opening_depreciation: Decimal,
    /// Depreciation added during the current month.
    pub monthly_depreciation: Decimal,
    /// Accumulated depreciation at the end of the current month.
    pub closing_depreciation: Decimal,
    /// Total depreciation recognized from purchase through the as-of date.
    pub accumulated_depreciation: Decimal,
    /// Purchase price minus accumulated depreciation, floored at zero.
    pub remaining_value: Decimal,
    /// Remaining cost minus closing depreciation, floored at zero.
    pub net_book_value: Decimal,
    /// Set when the purchase date is later than the as-of date.
    pub is_future_date: bool,
}

impl DepreciationRecord {
    /// An all-zero record carrying only the (clamped) cost balance.
    fn zeroed(cost: Decimal) -> Self {
        let cost = cost.max(Decimal::ZERO);
        Self {
            cost_final_balance: cost,
            disposal: Decimal::ZERO,
            remaining_cost: cost,
            depreciation_rate: Decimal::ZERO,
            opening_depreciation: Decimal::ZERO,
            monthly_depreciation: Decimal::ZERO,
            closing_depreciation: Decimal::ZERO,
            accumulated_depreciation: Decimal::ZERO,
            remaining_value: cost,
            net_book_value: cost,
            is_future_date: false,
        }
    }
}

/// Counts calendar months elapsed between two dates, floored at zero.
///
/// Day-of-month is ignored: only the year and month components enter the
/// count, matching the monthly straight-line allocation.
#[must_use]
pub fn months_elapsed(purchase_date: NaiveDate, as_of: NaiveDate, basis: MonthBasis) -> i64 {
    let months = i64::from(as_of.year() - purchase_date.year()) * 12
        + i64::from(as_of.month()) - i64::from(purchase_date.month());

    let months = match basis {
        MonthBasis::Inclusive => months + 1,
        MonthBasis::Exclusive => months,
    };

    months.max(0)
}

/// Computes the straight-line depreciation position of an asset.
///
/// Pure and deterministic: identical inputs (including `as_of`) always
/// produce the identical record. Monetary outputs are rounded to 2 decimal
/// places and are never negative; `net_book_value` and `remaining_value`
/// never exceed the purchase price.
#[must_use]
pub fn compute_depreciation(input: &DepreciationInput) -> DepreciationRecord {
    let price = input.purchase_price;

    // Disposed assets carry zero remaining cost and book value regardless
    // of computed depreciation.
    if input.disposed {
        return DepreciationRecord {
            cost_final_balance: price.max(Decimal::ZERO),
            disposal: input.disposal_value.max(Decimal::ZERO),
            remaining_cost: Decimal::ZERO,
            remaining_value: Decimal::ZERO,
            net_book_value: Decimal::ZERO,
            ..DepreciationRecord::zeroed(Decimal::ZERO)
        };
    }

    if price <= Decimal::ZERO {
        return DepreciationRecord::zeroed(Decimal::ZERO);
    }

    if input.purchase_date > input.as_of {
        return DepreciationRecord {
            is_future_date: true,
            ..DepreciationRecord::zeroed(price)
        };
    }

    // Useful life 0 means a non-depreciating asset.
    if input.useful_life_years == 0 {
        return DepreciationRecord::zeroed(price);
    }

    let life = Decimal::from(input.useful_life_years);
    let months = Decimal::from(months_elapsed(
        input.purchase_date,
        input.as_of,
        input.basis,
    ));

    let yearly = price / life;
    let monthly = yearly / Decimal::from(12);

    let accumulated = (monthly * months).min(price);
    let remaining_value = (price - accumulated).max(Decimal::ZERO);

    // Opening/closing balances for the current accounting month.
    let opening = (monthly * (months - Decimal::ONE).max(Decimal::ZERO)).min(price);
    let closing = (opening + monthly).min(price);

    let remaining_cost = price;
    let net_book_value = (remaining_cost - closing).max(Decimal::ZERO);

    let rate = (Decimal::ONE_HUNDRED / life).round_dp(2);

    // Round to cents last, re-capping so rounding can never push a value
    // past the purchase price.
    DepreciationRecord {
        cost_final_balance: price,
        disposal: Decimal::ZERO,
        remaining_cost,
        depreciation_rate: rate,
        opening_depreciation: opening.round_dp(2).min(price),
        monthly_depreciation: monthly.round_dp(2),
        closing_depreciation: closing.round_dp(2).min(price),
        accumulated_depreciation: accumulated.round_dp(2).min(price),
        remaining_value: remaining_value.round_dp(2).min(price),
        net_book_value: net_book_value.round_dp(2).min(price),
        is_future_date: false,
    }
}

/// Reconstructs an assumed useful life from a previously stored current
/// value, in years.
///
/// Used when loading a legacy asset for editing, since useful life was not
/// always persisted. Returns the default of 5 when the inputs cannot
/// support an estimate (non-positive price, current value outside
/// `[0, price]`, or no depreciation having occurred). The result is a
/// best-effort convenience, not an exact algebraic inverse of
/// [`compute_depreciation`].
#[must_use]
pub fn estimate_useful_life(
    purchase_price: Decimal,
    current_value: Decimal,
    purchase_date: NaiveDate,
    as_of: NaiveDate,
) -> Decimal {
    let default = Decimal::from(DEFAULT_USEFUL_LIFE_YEARS);

    if purchase_price <= Decimal::ZERO
        || current_value < Decimal::ZERO
        || current_value >= purchase_price
    {
        return default;
    }

    let months = months_elapsed(purchase_date, as_of, MonthBasis::Inclusive).max(1);

    let years = (purchase_price * Decimal::from(months))
        / ((purchase_price - current_value) * Decimal::from(12));

    years.round_dp(2).max(Decimal::ONE)
}
