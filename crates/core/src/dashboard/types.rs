//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portfolio-level dashboard summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Reference date the summary was computed against.
    pub as_of: NaiveDate,
    /// Number of assets.
    pub asset_count: u64,
    /// Sum of purchase prices.
    pub total_cost: Decimal,
    /// Sum of accumulated depreciation.
    pub total_accumulated_depreciation: Decimal,
    /// Sum of net book values.
    pub total_net_book_value: Decimal,
    /// Asset counts per lifecycle status.
    pub status_counts: StatusCounts,
    /// Per-category totals, sorted by category name.
    pub categories: Vec<CategoryBreakdown>,
    /// Trailing 12-month book value trend, oldest month first.
    pub trend: Vec<TrendPoint>,
}

/// Asset counts per status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Assets in service.
    pub active: u64,
    /// Assets under maintenance.
    pub maintenance: u64,
    /// Assets owned but unused.
    pub inactive: u64,
    /// Disposed assets.
    pub disposed: u64,
}

/// Totals for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category ID; `None` for uncategorized assets.
    pub category_id: Option<Uuid>,
    /// Category display name.
    pub name: String,
    /// Number of assets in the category.
    pub asset_count: u64,
    /// Sum of purchase prices.
    pub total_cost: Decimal,
    /// Sum of net book values.
    pub net_book_value: Decimal,
}

/// One month of the book value trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Portfolio net book value at the end of the month.
    pub net_book_value: Decimal,
    /// Portfolio accumulated depreciation at the end of the month.
    pub accumulated_depreciation: Decimal,
}
