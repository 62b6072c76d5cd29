//! Asset data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::depreciation::{DepreciationInput, DepreciationRecord, MonthBasis, compute_depreciation};

/// Useful life assumed when an asset has none stored.
pub const DEFAULT_USEFUL_LIFE_YEARS: u32 = 5;

/// Upper bound for useful life accepted at input boundaries.
pub const MAX_USEFUL_LIFE_YEARS: u32 = 50;

/// Asset lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// In service.
    Active,
    /// Temporarily out of service for repair.
    Maintenance,
    /// Owned but not in use.
    Inactive,
    /// Removed from the books; carries zero remaining cost and book value.
    Disposed,
}

impl AssetStatus {
    /// Returns true if the asset has been disposed.
    #[must_use]
    pub fn is_disposed(self) -> bool {
        self == Self::Disposed
    }

    /// Parses a status from its wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "maintenance" => Some(Self::Maintenance),
            "inactive" => Some(Self::Inactive),
            "disposed" => Some(Self::Disposed),
            _ => None,
        }
    }

    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
            Self::Disposed => "disposed",
        }
    }
}

/// Immutable view of an asset as consumed by calculations.
///
/// Repositories own the persistent asset records; a snapshot is what the
/// calculator, dashboard, and schedule read. `useful_life_years` and
/// `current_value` may be absent for legacy records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSnapshot {
    /// Asset ID.
    pub id: Uuid,
    /// Asset name.
    pub name: String,
    /// Category ID, if categorized.
    pub category_id: Option<Uuid>,
    /// Category name for display.
    pub category_name: Option<String>,
    /// Physical location.
    pub location: Option<String>,
    /// Person the asset is assigned to.
    pub assignee: Option<String>,
    /// Lifecycle status.
    pub status: AssetStatus,
    /// Purchase price (non-negative, currency-agnostic).
    pub purchase_price: Decimal,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Assumed useful life in years; absent means the default applies.
    pub useful_life_years: Option<u32>,
    /// Last stored current value, if any.
    pub current_value: Option<Decimal>,
    /// Value removed at disposal time, if disposed.
    pub disposal_value: Option<Decimal>,
}

impl AssetSnapshot {
    /// Returns the useful life to calculate with, substituting the default
    /// when none is stored.
    #[must_use]
    pub fn effective_useful_life(&self) -> u32 {
        self.useful_life_years.unwrap_or(DEFAULT_USEFUL_LIFE_YEARS)
    }

    /// Computes the depreciation position of this asset as of a date.
    ///
    /// A disposed asset's disposal value falls back to its last stored
    /// current value when no explicit disposal value was recorded.
    #[must_use]
    pub fn depreciation(&self, as_of: NaiveDate, basis: MonthBasis) -> DepreciationRecord {
        let disposal_value = self
            .disposal_value
            .or(self.current_value)
            .unwrap_or(Decimal::ZERO);

        compute_depreciation(&DepreciationInput {
            purchase_price: self.purchase_price,
            purchase_date: self.purchase_date,
            useful_life_years: self.effective_useful_life(),
            as_of,
            basis,
            disposed: self.status.is_disposed(),
            disposal_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot() -> AssetSnapshot {
        AssetSnapshot {
            id: Uuid::new_v4(),
            name: "Forklift".to_string(),
            category_id: None,
            category_name: None,
            location: Some("Warehouse A".to_string()),
            assignee: None,
            status: AssetStatus::Active,
            purchase_price: dec!(12000),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            useful_life_years: None,
            current_value: None,
            disposal_value: None,
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AssetStatus::Active,
            AssetStatus::Maintenance,
            AssetStatus::Inactive,
            AssetStatus::Disposed,
        ] {
            assert_eq!(AssetStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AssetStatus::parse("scrapped"), None);
    }

    #[test]
    fn test_default_useful_life_applies() {
        let asset = snapshot();
        assert_eq!(asset.effective_useful_life(), DEFAULT_USEFUL_LIFE_YEARS);

        let asset = AssetSnapshot {
            useful_life_years: Some(10),
            ..snapshot()
        };
        assert_eq!(asset.effective_useful_life(), 10);
    }

    #[test]
    fn test_disposed_snapshot_uses_current_value_as_disposal() {
        let asset = AssetSnapshot {
            status: AssetStatus::Disposed,
            current_value: Some(dec!(100)),
            ..snapshot()
        };

        let record = asset.depreciation(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            MonthBasis::Inclusive,
        );

        assert_eq!(record.disposal, dec!(100));
        assert_eq!(record.remaining_cost, Decimal::ZERO);
        assert_eq!(record.net_book_value, Decimal::ZERO);
    }
}
