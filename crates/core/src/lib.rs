//! Core business logic for Assetra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculations, and aggregations live here.
//!
//! # Modules
//!
//! - `asset` - Asset domain types, straight-line depreciation, list filtering
//! - `dashboard` - Portfolio aggregation and trend data
//! - `schedule` - Printable depreciation schedule
//! - `auth` - Password hashing

pub mod asset;
pub mod auth;
pub mod dashboard;
pub mod schedule;
