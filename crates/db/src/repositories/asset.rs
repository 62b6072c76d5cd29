//! Asset repository for database operations.

use assetra_core::asset::AssetSnapshot;
use assetra_shared::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use thiserror::Error;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::AssetStatus;
use crate::entities::{assets, categories};

/// Asset operation errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Asset not found (or owned by another user).
    #[error("asset not found: {0}")]
    NotFound(Uuid),

    /// Referenced category not found (or owned by another user).
    #[error("category not found: {0}")]
    CategoryNotFound(Uuid),

    /// Asset has already been disposed.
    #[error("asset already disposed: {0}")]
    AlreadyDisposed(Uuid),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AssetError> for AppError {
    fn from(e: AssetError) -> Self {
        match e {
            AssetError::NotFound(_) => Self::NotFound("Asset not found".to_string()),
            AssetError::CategoryNotFound(_) => {
                Self::Validation("Referenced category does not exist".to_string())
            }
            AssetError::AlreadyDisposed(_) => {
                Self::Conflict("Asset has already been disposed".to_string())
            }
            AssetError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// An asset row joined with its category's name.
#[derive(Debug, Clone)]
pub struct AssetWithCategory {
    /// The asset row.
    pub asset: assets::Model,
    /// The category name, when the asset is categorized.
    pub category_name: Option<String>,
}

impl AssetWithCategory {
    /// Converts this row into the calculation-facing snapshot form.
    #[must_use]
    pub fn into_snapshot(self) -> AssetSnapshot {
        AssetSnapshot {
            id: self.asset.id,
            name: self.asset.name,
            category_id: self.asset.category_id,
            category_name: self.category_name,
            location: self.asset.location,
            assignee: self.asset.assignee,
            status: self.asset.status.into(),
            purchase_price: self.asset.purchase_price,
            purchase_date: self.asset.purchase_date,
            useful_life_years: self
                .asset
                .useful_life_years
                .and_then(|v| u32::try_from(v).ok()),
            current_value: self.asset.current_value,
            disposal_value: self.asset.disposal_value,
        }
    }
}

/// Fields for creating an asset.
#[derive(Debug, Clone)]
pub struct CreateAssetInput {
    /// Asset name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Category to file the asset under.
    pub category_id: Option<Uuid>,
    /// Physical location.
    pub location: Option<String>,
    /// Person the asset is assigned to.
    pub assignee: Option<String>,
    /// Purchase price.
    pub purchase_price: Decimal,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Useful life in years; absent means the default applies at
    /// calculation time.
    pub useful_life_years: Option<i32>,
    /// Manually tracked current value, if any.
    pub current_value: Option<Decimal>,
    /// Initial lifecycle status.
    pub status: AssetStatus,
}

/// Fields for updating an asset. Outer `None` leaves a field unchanged;
/// for nullable columns the inner `None` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateAssetInput {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<Option<String>>,
    /// New category.
    pub category_id: Option<Option<Uuid>>,
    /// New location.
    pub location: Option<Option<String>>,
    /// New assignee.
    pub assignee: Option<Option<String>>,
    /// New purchase price.
    pub purchase_price: Option<Decimal>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New useful life.
    pub useful_life_years: Option<Option<i32>>,
    /// New current value.
    pub current_value: Option<Option<Decimal>>,
    /// New status.
    pub status: Option<AssetStatus>,
}

/// Asset repository for CRUD operations. Every method is scoped to the
/// owning user.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    db: DatabaseConnection,
}

impl AssetRepository {
    /// Creates a new asset repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all of the user's assets with their category names, ordered by
    /// name. Filtering and pagination happen above this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self, user_id: Uuid) -> Result<Vec<AssetWithCategory>, AssetError> {
        let rows = assets::Entity::find()
            .filter(assets::Column::UserId.eq(user_id))
            .find_also_related(categories::Entity)
            .order_by_asc(assets::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(asset, category)| AssetWithCategory {
                asset,
                category_name: category.map(|c| c.name),
            })
            .collect())
    }

    /// Finds one of the user's assets by ID, with its category name.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if no matching asset belongs to the
    /// user.
    pub async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<AssetWithCategory, AssetError> {
        let row = assets::Entity::find_by_id(id)
            .filter(assets::Column::UserId.eq(user_id))
            .find_also_related(categories::Entity)
            .one(&self.db)
            .await?;

        row.map(|(asset, category)| AssetWithCategory {
            asset,
            category_name: category.map(|c| c.name),
        })
        .ok_or(AssetError::NotFound(id))
    }

    /// Creates an asset for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::CategoryNotFound`] if the referenced category
    /// does not belong to the user.
    pub async fn create(
        &self,
        user_id: Uuid,
        input: CreateAssetInput,
    ) -> Result<assets::Model, AssetError> {
        if let Some(category_id) = input.category_id {
            self.require_category(user_id, category_id).await?;
        }

        let now = chrono::Utc::now().into();

        let asset = assets::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            category_id: Set(input.category_id),
            name: Set(input.name),
            description: Set(input.description),
            location: Set(input.location),
            assignee: Set(input.assignee),
            purchase_price: Set(input.purchase_price),
            purchase_date: Set(input.purchase_date),
            useful_life_years: Set(input.useful_life_years),
            current_value: Set(input.current_value),
            status: Set(input.status),
            disposal_value: Set(None),
            disposed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(asset.insert(&self.db).await?)
    }

    /// Updates an asset. Fields absent from the input are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if the asset does not belong to the
    /// user, or [`AssetError::CategoryNotFound`] if a new category does not.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: UpdateAssetInput,
    ) -> Result<assets::Model, AssetError> {
        let existing = self.find_by_id(user_id, id).await?.asset;

        if let Some(Some(category_id)) = input.category_id {
            self.require_category(user_id, category_id).await?;
        }

        let mut asset: assets::ActiveModel = existing.into();
        if let Some(name) = input.name {
            asset.name = Set(name);
        }
        if let Some(description) = input.description {
            asset.description = Set(description);
        }
        if let Some(category_id) = input.category_id {
            asset.category_id = Set(category_id);
        }
        if let Some(location) = input.location {
            asset.location = Set(location);
        }
        if let Some(assignee) = input.assignee {
            asset.assignee = Set(assignee);
        }
        if let Some(purchase_price) = input.purchase_price {
            asset.purchase_price = Set(purchase_price);
        }
        if let Some(purchase_date) = input.purchase_date {
            asset.purchase_date = Set(purchase_date);
        }
        if let Some(useful_life_years) = input.useful_life_years {
            asset.useful_life_years = Set(useful_life_years);
        }
        if let Some(current_value) = input.current_value {
            asset.current_value = Set(current_value);
        }
        if let Some(status) = input.status {
            asset.status = Set(status);
        }
        asset.updated_at = Set(chrono::Utc::now().into());

        Ok(asset.update(&self.db).await?)
    }

    /// Deletes an asset.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if the asset does not belong to the
    /// user.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AssetError> {
        let existing = self.find_by_id(user_id, id).await?.asset;

        assets::Entity::delete_by_id(existing.id)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Marks an asset as disposed, recording the value removed from the
    /// books. When no value is given, the asset's last stored current value
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::AlreadyDisposed`] if the asset was already
    /// disposed.
    pub async fn dispose(
        &self,
        user_id: Uuid,
        id: Uuid,
        disposal_value: Option<Decimal>,
    ) -> Result<assets::Model, AssetError> {
        let existing = self.find_by_id(user_id, id).await?.asset;

        if existing.status == AssetStatus::Disposed {
            return Err(AssetError::AlreadyDisposed(id));
        }

        let disposal_value = disposal_value.or(existing.current_value);
        let now = chrono::Utc::now().into();

        let mut asset: assets::ActiveModel = existing.into();
        asset.status = Set(AssetStatus::Disposed);
        asset.disposal_value = Set(disposal_value);
        asset.disposed_at = Set(Some(now));
        asset.updated_at = Set(now);

        Ok(asset.update(&self.db).await?)
    }

    async fn require_category(&self, user_id: Uuid, category_id: Uuid) -> Result<(), AssetError> {
        let found = categories::Entity::find_by_id(category_id)
            .filter(categories::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        if found.is_none() {
            return Err(AssetError::CategoryNotFound(category_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn model(useful_life_years: Option<i32>) -> assets::Model {
        let now = chrono::Utc::now().into();
        assets::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            category_id: Some(Uuid::new_v4()),
            name: "Laptop".to_string(),
            description: None,
            location: Some("HQ".to_string()),
            assignee: None,
            purchase_price: dec!(2400),
            purchase_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            useful_life_years,
            current_value: Some(dec!(1800)),
            status: AssetStatus::Active,
            disposal_value: None,
            disposed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_into_snapshot_maps_fields() {
        let row = AssetWithCategory {
            asset: model(Some(3)),
            category_name: Some("IT Hardware".to_string()),
        };

        let snapshot = row.into_snapshot();
        assert_eq!(snapshot.name, "Laptop");
        assert_eq!(snapshot.category_name.as_deref(), Some("IT Hardware"));
        assert_eq!(snapshot.useful_life_years, Some(3));
        assert_eq!(snapshot.purchase_price, dec!(2400));
        assert_eq!(snapshot.current_value, Some(dec!(1800)));
        assert_eq!(
            snapshot.status,
            assetra_core::asset::AssetStatus::Active
        );
    }

    #[test]
    fn test_into_snapshot_drops_invalid_useful_life() {
        let row = AssetWithCategory {
            asset: model(Some(-2)),
            category_name: None,
        };

        assert_eq!(row.into_snapshot().useful_life_years, None);
    }

    #[test]
    fn test_errors_map_to_app_errors() {
        let id = Uuid::new_v4();

        assert_eq!(AppError::from(AssetError::NotFound(id)).status_code(), 404);
        assert_eq!(
            AppError::from(AssetError::CategoryNotFound(id)).status_code(),
            422
        );
        assert_eq!(
            AppError::from(AssetError::AlreadyDisposed(id)).status_code(),
            409
        );
        assert_eq!(
            AppError::from(AssetError::AlreadyDisposed(id)).error_code(),
            "conflict"
        );
    }
}
