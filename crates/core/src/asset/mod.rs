//! Asset domain logic.
//!
//! This module provides:
//! - Asset domain types and status lifecycle
//! - Straight-line depreciation (the valuation core)
//! - Pure list filtering applied on top of repository results

pub mod depreciation;
pub mod filter;
pub mod types;

#[cfg(test)]
mod props;

pub use depreciation::{
    DepreciationInput, DepreciationRecord, MonthBasis, compute_depreciation, estimate_useful_life,
    months_elapsed,
};
pub use filter::{AssetListFilter, YearMonth};
pub use types::{
    AssetSnapshot, AssetStatus, DEFAULT_USEFUL_LIFE_YEARS, MAX_USEFUL_LIFE_YEARS,
};
