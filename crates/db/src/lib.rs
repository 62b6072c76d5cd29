//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Every asset and category query is scoped by the owning user's ID, so one
//! user's rows are invisible to every other user.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AssetError, AssetRepository, AssetWithCategory, CategoryError, CategoryRepository,
    CreateAssetInput, SessionRepository, UpdateAssetInput, UserRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
