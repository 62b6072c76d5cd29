//! Depreciation schedule data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::YearMonth;

/// Printable depreciation schedule for one accounting month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    /// The schedule month.
    pub month: YearMonth,
    /// One line per asset purchased on or before the month end.
    pub lines: Vec<ScheduleLine>,
    /// Column totals.
    pub totals: ScheduleTotals,
}

/// One asset's row in the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleLine {
    /// Asset ID.
    pub asset_id: Uuid,
    /// Asset name.
    pub name: String,
    /// Category display name, if categorized.
    pub category_name: Option<String>,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Purchase price.
    pub cost: Decimal,
    /// Value removed at disposal, if disposed.
    pub disposal: Decimal,
    /// Cost minus disposal.
    pub remaining_cost: Decimal,
    /// Annual depreciation rate as a percentage.
    pub depreciation_rate: Decimal,
    /// Accumulated depreciation at the start of the month.
    pub opening_depreciation: Decimal,
    /// Depreciation added during the month.
    pub addition: Decimal,
    /// Accumulated depreciation at the end of the month.
    pub closing_depreciation: Decimal,
    /// Net book value at the end of the month.
    pub net_book_value: Decimal,
}

/// Column totals across all schedule lines.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScheduleTotals {
    /// Sum of purchase prices.
    pub cost: Decimal,
    /// Sum of disposal values.
    pub disposal: Decimal,
    /// Sum of remaining costs.
    pub remaining_cost: Decimal,
    /// Sum of opening balances.
    pub opening_depreciation: Decimal,
    /// Sum of monthly additions.
    pub addition: Decimal,
    /// Sum of closing balances.
    pub closing_depreciation: Decimal,
    /// Sum of net book values.
    pub net_book_value: Decimal,
}
