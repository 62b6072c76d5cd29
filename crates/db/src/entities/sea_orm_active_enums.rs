//! Database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset lifecycle status, backed by the `asset_status` Postgres enum.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "asset_status")]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// In service.
    #[sea_orm(string_value = "active")]
    Active,
    /// Temporarily out of service for repair.
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    /// Owned but not in use.
    #[sea_orm(string_value = "inactive")]
    Inactive,
    /// Removed from the books.
    #[sea_orm(string_value = "disposed")]
    Disposed,
}

impl From<AssetStatus> for assetra_core::asset::AssetStatus {
    fn from(status: AssetStatus) -> Self {
        match status {
            AssetStatus::Active => Self::Active,
            AssetStatus::Maintenance => Self::Maintenance,
            AssetStatus::Inactive => Self::Inactive,
            AssetStatus::Disposed => Self::Disposed,
        }
    }
}

impl From<assetra_core::asset::AssetStatus> for AssetStatus {
    fn from(status: assetra_core::asset::AssetStatus) -> Self {
        match status {
            assetra_core::asset::AssetStatus::Active => Self::Active,
            assetra_core::asset::AssetStatus::Maintenance => Self::Maintenance,
            assetra_core::asset::AssetStatus::Inactive => Self::Inactive,
            assetra_core::asset::AssetStatus::Disposed => Self::Disposed,
        }
    }
}
