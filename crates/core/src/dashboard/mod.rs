//! Dashboard aggregation.
//!
//! Aggregates a snapshot list into portfolio totals, per-category and
//! per-status breakdowns, and a trailing 12-month book value trend. Each
//! asset is valued with the same straight-line calculation the asset views
//! use (inclusive month counting).

pub mod types;

pub use types::{CategoryBreakdown, DashboardSummary, StatusCounts, TrendPoint};

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::asset::{AssetSnapshot, AssetStatus, MonthBasis, YearMonth};

/// Number of months covered by the trend chart.
const TREND_MONTHS: u32 = 12;

/// Builds the dashboard summary for a list of assets as of a date.
#[must_use]
pub fn build_dashboard(assets: &[AssetSnapshot], as_of: NaiveDate) -> DashboardSummary {
    let mut total_cost = Decimal::ZERO;
    let mut total_accumulated = Decimal::ZERO;
    let mut total_net_book_value = Decimal::ZERO;
    let mut status_counts = StatusCounts::default();
    let mut by_category: BTreeMap<String, (Option<Uuid>, u64, Decimal, Decimal)> = BTreeMap::new();

    for asset in assets {
        let record = asset.depreciation(as_of, MonthBasis::Inclusive);

        total_cost += record.cost_final_balance;
        total_accumulated += record.accumulated_depreciation;
        total_net_book_value += record.net_book_value;

        match asset.status {
            AssetStatus::Active => status_counts.active += 1,
            AssetStatus::Maintenance => status_counts.maintenance += 1,
            AssetStatus::Inactive => status_counts.inactive += 1,
            AssetStatus::Disposed => status_counts.disposed += 1,
        }

        let name = asset
            .category_name
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());
        let entry = by_category
            .entry(name)
            .or_insert((asset.category_id, 0, Decimal::ZERO, Decimal::ZERO));
        entry.1 += 1;
        entry.2 += record.cost_final_balance;
        entry.3 += record.net_book_value;
    }

    let categories = by_category
        .into_iter()
        .map(
            |(name, (category_id, asset_count, cost, nbv))| CategoryBreakdown {
                category_id,
                name,
                asset_count,
                total_cost: cost,
                net_book_value: nbv,
            },
        )
        .collect();

    DashboardSummary {
        as_of,
        asset_count: assets.len() as u64,
        total_cost,
        total_accumulated_depreciation: total_accumulated,
        total_net_book_value,
        status_counts,
        categories,
        trend: build_trend(assets, as_of),
    }
}

/// Builds the trailing 12-month trend ending at the as-of month.
///
/// Each point values the whole portfolio at that month's end with the same
/// inclusive counting the rest of the application uses. Assets not yet
/// purchased at a month's end carry nothing into that point.
fn build_trend(assets: &[AssetSnapshot], as_of: NaiveDate) -> Vec<TrendPoint> {
    trend_months(as_of)
        .into_iter()
        .map(|ym| {
            let month_end = ym.last_day().unwrap_or(as_of);
            let mut net_book_value = Decimal::ZERO;
            let mut accumulated = Decimal::ZERO;

            for asset in assets {
                let record = asset.depreciation(month_end, MonthBasis::Inclusive);
                if record.is_future_date {
                    continue;
                }
                net_book_value += record.net_book_value;
                accumulated += record.accumulated_depreciation;
            }

            TrendPoint {
                year: ym.year,
                month: ym.month,
                net_book_value,
                accumulated_depreciation: accumulated,
            }
        })
        .collect()
}

/// The 12 calendar months ending with the as-of month, oldest first.
fn trend_months(as_of: NaiveDate) -> Vec<YearMonth> {
    let mut months = Vec::with_capacity(TREND_MONTHS as usize);
    let mut year = as_of.year();
    let mut month = as_of.month();

    for _ in 0..TREND_MONTHS {
        months.push(YearMonth { year, month });
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }

    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asset(
        name: &str,
        category: Option<&str>,
        status: AssetStatus,
        price: Decimal,
        purchase: NaiveDate,
    ) -> AssetSnapshot {
        AssetSnapshot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category_id: category.map(|_| Uuid::new_v4()),
            category_name: category.map(String::from),
            location: None,
            assignee: None,
            status,
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: Some(5),
            current_value: None,
            disposal_value: None,
        }
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = build_dashboard(&[], date(2024, 6, 30));

        assert_eq!(summary.asset_count, 0);
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert_eq!(summary.total_net_book_value, Decimal::ZERO);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.trend.len(), 12);
    }

    #[test]
    fn test_totals_and_status_counts() {
        let assets = vec![
            asset(
                "Laptop",
                Some("IT"),
                AssetStatus::Active,
                dec!(12000),
                date(2023, 1, 1),
            ),
            asset(
                "Press",
                Some("Machinery"),
                AssetStatus::Maintenance,
                dec!(6000),
                date(2023, 1, 1),
            ),
        ];

        let summary = build_dashboard(&assets, date(2024, 1, 1));

        assert_eq!(summary.asset_count, 2);
        assert_eq!(summary.total_cost, dec!(18000));
        // 13 inclusive months: 2600 + 1300.
        assert_eq!(summary.total_accumulated_depreciation, dec!(3900.00));
        assert_eq!(summary.status_counts.active, 1);
        assert_eq!(summary.status_counts.maintenance, 1);
        assert_eq!(summary.status_counts.disposed, 0);
    }

    #[test]
    fn test_disposed_assets_carry_no_book_value() {
        let assets = vec![asset(
            "Van",
            None,
            AssetStatus::Disposed,
            dec!(8000),
            date(2020, 1, 1),
        )];

        let summary = build_dashboard(&assets, date(2024, 1, 1));

        assert_eq!(summary.total_net_book_value, Decimal::ZERO);
        assert_eq!(summary.status_counts.disposed, 1);
    }

    #[test]
    fn test_category_breakdown_sorted_by_name() {
        let assets = vec![
            asset(
                "Press",
                Some("Machinery"),
                AssetStatus::Active,
                dec!(6000),
                date(2023, 1, 1),
            ),
            asset(
                "Laptop",
                Some("IT"),
                AssetStatus::Active,
                dec!(1200),
                date(2023, 1, 1),
            ),
            asset(
                "Stapler",
                None,
                AssetStatus::Active,
                dec!(20),
                date(2023, 1, 1),
            ),
        ];

        let summary = build_dashboard(&assets, date(2023, 6, 30));
        let names: Vec<_> = summary.categories.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["IT", "Machinery", "Uncategorized"]);
        assert_eq!(summary.categories[0].asset_count, 1);
        assert_eq!(summary.categories[0].total_cost, dec!(1200));
    }

    #[test]
    fn test_trend_covers_trailing_year() {
        let summary = build_dashboard(&[], date(2024, 3, 15));

        assert_eq!(summary.trend.len(), 12);
        let first = &summary.trend[0];
        let last = &summary.trend[11];
        assert_eq!((first.year, first.month), (2023, 4));
        assert_eq!((last.year, last.month), (2024, 3));
    }

    #[test]
    fn test_trend_is_zero_before_purchase() {
        let assets = vec![asset(
            "Laptop",
            None,
            AssetStatus::Active,
            dec!(12000),
            date(2024, 1, 15),
        )];

        let summary = build_dashboard(&assets, date(2024, 3, 31));

        // Window runs 2023-04 through 2024-03; the asset only exists from
        // January on.
        for point in &summary.trend {
            if (point.year, point.month) < (2024, 1) {
                assert_eq!(point.net_book_value, Decimal::ZERO);
                assert_eq!(point.accumulated_depreciation, Decimal::ZERO);
            }
        }

        // 12000 over 5 years is 200/month; one inclusive month by end of
        // January.
        let january = &summary.trend[9];
        assert_eq!((january.year, january.month), (2024, 1));
        assert_eq!(january.net_book_value, dec!(11800.00));
    }

    #[test]
    fn test_trend_book_value_is_non_increasing() {
        let assets = vec![asset(
            "Laptop",
            None,
            AssetStatus::Active,
            dec!(12000),
            date(2022, 1, 1),
        )];

        let summary = build_dashboard(&assets, date(2024, 1, 1));

        for pair in summary.trend.windows(2) {
            assert!(pair[1].net_book_value <= pair[0].net_book_value);
        }
    }
}
