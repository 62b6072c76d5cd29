//! Printable depreciation schedule.
//!
//! Builds the month-filtered schedule the print view renders: one line per
//! asset with opening balance, monthly addition, closing balance, and net
//! book value, plus column totals. The schedule month's last day is the
//! as-of date; assets purchased after it are left off the schedule.

pub mod types;

pub use types::{DepreciationSchedule, ScheduleLine, ScheduleTotals};

use crate::asset::{AssetSnapshot, MonthBasis, YearMonth};

/// Builds the depreciation schedule for a month.
#[must_use]
pub fn build_schedule(assets: &[AssetSnapshot], month: YearMonth) -> DepreciationSchedule {
    let Some(as_of) = month.last_day() else {
        return DepreciationSchedule {
            month,
            lines: Vec::new(),
            totals: ScheduleTotals::default(),
        };
    };

    let mut lines = Vec::new();
    let mut totals = ScheduleTotals::default();

    for asset in assets {
        let record = asset.depreciation(as_of, MonthBasis::Inclusive);
        if record.is_future_date {
            continue;
        }

        totals.cost += record.cost_final_balance;
        totals.disposal += record.disposal;
        totals.remaining_cost += record.remaining_cost;
        totals.opening_depreciation += record.opening_depreciation;
        totals.addition += record.monthly_depreciation;
        totals.closing_depreciation += record.closing_depreciation;
        totals.net_book_value += record.net_book_value;

        lines.push(ScheduleLine {
            asset_id: asset.id,
            name: asset.name.clone(),
            category_name: asset.category_name.clone(),
            purchase_date: asset.purchase_date,
            cost: record.cost_final_balance,
            disposal: record.disposal,
            remaining_cost: record.remaining_cost,
            depreciation_rate: record.depreciation_rate,
            opening_depreciation: record.opening_depreciation,
            addition: record.monthly_depreciation,
            closing_depreciation: record.closing_depreciation,
            net_book_value: record.net_book_value,
        });
    }

    DepreciationSchedule {
        month,
        lines,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetStatus;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asset(name: &str, price: Decimal, purchase: NaiveDate) -> AssetSnapshot {
        AssetSnapshot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category_id: None,
            category_name: None,
            location: None,
            assignee: None,
            status: AssetStatus::Active,
            purchase_price: price,
            purchase_date: purchase,
            useful_life_years: Some(5),
            current_value: None,
            disposal_value: None,
        }
    }

    #[test]
    fn test_schedule_line_balances() {
        let assets = vec![asset("Laptop", dec!(12000), date(2023, 1, 1))];
        let schedule = build_schedule(&assets, YearMonth::parse("2024-01").unwrap());

        assert_eq!(schedule.lines.len(), 1);
        let line = &schedule.lines[0];
        // 13 inclusive months at 200/month: 12 prior, 1 this month.
        assert_eq!(line.opening_depreciation, dec!(2400.00));
        assert_eq!(line.addition, dec!(200.00));
        assert_eq!(line.closing_depreciation, dec!(2600.00));
        assert_eq!(line.net_book_value, dec!(9400.00));
        assert_eq!(line.depreciation_rate, dec!(20.00));
    }

    #[test]
    fn test_future_assets_left_off() {
        let assets = vec![
            asset("Laptop", dec!(12000), date(2023, 1, 1)),
            asset("Drone", dec!(3000), date(2024, 6, 1)),
        ];
        let schedule = build_schedule(&assets, YearMonth::parse("2024-01").unwrap());

        assert_eq!(schedule.lines.len(), 1);
        assert_eq!(schedule.lines[0].name, "Laptop");
    }

    #[test]
    fn test_totals_sum_lines() {
        let assets = vec![
            asset("Laptop", dec!(12000), date(2023, 1, 1)),
            asset("Press", dec!(6000), date(2023, 1, 1)),
        ];
        let schedule = build_schedule(&assets, YearMonth::parse("2024-01").unwrap());

        assert_eq!(schedule.totals.cost, dec!(18000));
        assert_eq!(schedule.totals.addition, dec!(300.00));
        assert_eq!(schedule.totals.closing_depreciation, dec!(3900.00));
        assert_eq!(
            schedule.totals.net_book_value,
            schedule
                .lines
                .iter()
                .map(|l| l.net_book_value)
                .sum::<Decimal>()
        );
    }

    #[test]
    fn test_disposed_asset_shows_disposal_only() {
        let mut disposed = asset("Van", dec!(8000), date(2020, 1, 1));
        disposed.status = AssetStatus::Disposed;
        disposed.disposal_value = Some(dec!(500));

        let schedule = build_schedule(&[disposed], YearMonth::parse("2024-01").unwrap());

        let line = &schedule.lines[0];
        assert_eq!(line.disposal, dec!(500));
        assert_eq!(line.remaining_cost, Decimal::ZERO);
        assert_eq!(line.closing_depreciation, Decimal::ZERO);
        assert_eq!(line.net_book_value, Decimal::ZERO);
    }
}
