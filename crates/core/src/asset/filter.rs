//! Asset list filtering.
//!
//! Filtering is applied by the presentation layer on top of the full list a
//! repository returns; the calculator never filters.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{AssetSnapshot, AssetStatus};

/// Filter for asset list views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetListFilter {
    /// Keep only assets in this category.
    pub category_id: Option<Uuid>,
    /// Keep only assets with this status.
    pub status: Option<AssetStatus>,
    /// Keep only assets purchased in this month.
    pub purchase_month: Option<YearMonth>,
    /// Case-insensitive match against name, location, and assignee.
    pub search: Option<String>,
}

/// A calendar month, as used by month-filtered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Parses a `YYYY-MM` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the last day of this month, used as the schedule as-of date.
    #[must_use]
    pub fn last_day(self) -> Option<NaiveDate> {
        let (next_y, next_m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_y, next_m, 1).map(|d| d.pred_opt().unwrap_or(d))
    }

    /// Returns true if the date falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl AssetListFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.status.is_none()
            && self.purchase_month.is_none()
            && self.search.is_none()
    }

    /// Returns true if the asset passes every set criterion.
    #[must_use]
    pub fn matches(&self, asset: &AssetSnapshot) -> bool {
        if let Some(category_id) = self.category_id {
            if asset.category_id != Some(category_id) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if asset.status != status {
                return false;
            }
        }

        if let Some(month) = self.purchase_month {
            if !month.contains(asset.purchase_date) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let haystack = |s: &str| s.to_lowercase().contains(&term);

            let hit = haystack(&asset.name)
                || asset.location.as_deref().is_some_and(haystack)
                || asset.assignee.as_deref().is_some_and(haystack);

            if !hit {
                return false;
            }
        }

        true
    }

    /// Applies the filter to a snapshot list.
    #[must_use]
    pub fn apply<'a>(&self, assets: &'a [AssetSnapshot]) -> Vec<&'a AssetSnapshot> {
        assets.iter().filter(|a| self.matches(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn asset(name: &str, status: AssetStatus, purchase: NaiveDate) -> AssetSnapshot {
        AssetSnapshot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category_id: None,
            category_name: None,
            location: Some("HQ".to_string()),
            assignee: Some("Dana".to_string()),
            status,
            purchase_price: dec!(100),
            purchase_date: purchase,
            useful_life_years: None,
            current_value: None,
            disposal_value: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_month_parse() {
        assert_eq!(
            YearMonth::parse("2024-03"),
            Some(YearMonth {
                year: 2024,
                month: 3
            })
        );
        assert_eq!(YearMonth::parse("2024-13"), None);
        assert_eq!(YearMonth::parse("2024"), None);
        assert_eq!(YearMonth::parse("march"), None);
    }

    #[test]
    fn test_year_month_last_day() {
        let ym = YearMonth {
            year: 2024,
            month: 2,
        };
        assert_eq!(ym.last_day(), Some(date(2024, 2, 29)));

        let ym = YearMonth {
            year: 2023,
            month: 12,
        };
        assert_eq!(ym.last_day(), Some(date(2023, 12, 31)));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = AssetListFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&asset("Laptop", AssetStatus::Active, date(2024, 1, 1))));
    }

    #[test]
    fn test_status_filter() {
        let filter = AssetListFilter {
            status: Some(AssetStatus::Disposed),
            ..AssetListFilter::new()
        };

        assert!(!filter.matches(&asset("Laptop", AssetStatus::Active, date(2024, 1, 1))));
        assert!(filter.matches(&asset("Desk", AssetStatus::Disposed, date(2024, 1, 1))));
    }

    #[test]
    fn test_month_filter() {
        let filter = AssetListFilter {
            purchase_month: YearMonth::parse("2024-03"),
            ..AssetListFilter::new()
        };

        assert!(filter.matches(&asset("a", AssetStatus::Active, date(2024, 3, 31))));
        assert!(!filter.matches(&asset("b", AssetStatus::Active, date(2024, 4, 1))));
        assert!(!filter.matches(&asset("c", AssetStatus::Active, date(2023, 3, 15))));
    }

    #[test]
    fn test_search_matches_name_location_assignee() {
        let filter = AssetListFilter {
            search: Some("dana".to_string()),
            ..AssetListFilter::new()
        };
        assert!(filter.matches(&asset("Laptop", AssetStatus::Active, date(2024, 1, 1))));

        let filter = AssetListFilter {
            search: Some("LAPTOP".to_string()),
            ..AssetListFilter::new()
        };
        assert!(filter.matches(&asset("Laptop", AssetStatus::Active, date(2024, 1, 1))));

        let filter = AssetListFilter {
            search: Some("printer".to_string()),
            ..AssetListFilter::new()
        };
        assert!(!filter.matches(&asset("Laptop", AssetStatus::Active, date(2024, 1, 1))));
    }

    #[test]
    fn test_apply_combines_criteria() {
        let assets = vec![
            asset("Laptop", AssetStatus::Active, date(2024, 1, 10)),
            asset("Desk", AssetStatus::Active, date(2024, 2, 5)),
            asset("Chair", AssetStatus::Disposed, date(2024, 1, 20)),
        ];

        let filter = AssetListFilter {
            status: Some(AssetStatus::Active),
            purchase_month: YearMonth::parse("2024-01"),
            ..AssetListFilter::new()
        };

        let kept = filter.apply(&assets);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Laptop");
    }
}
