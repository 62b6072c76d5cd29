//! Category repository for database operations.

use assetra_shared::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use thiserror::Error;
use uuid::Uuid;

use crate::entities::categories;

/// Category operation errors.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Category not found (or owned by another user).
    #[error("category not found: {0}")]
    NotFound(Uuid),

    /// A category with the same name already exists for this user.
    #[error("a category named '{0}' already exists")]
    DuplicateName(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CategoryError> for AppError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(_) => Self::NotFound("Category not found".to_string()),
            CategoryError::DuplicateName(name) => {
                Self::Conflict(format!("A category named '{name}' already exists"))
            }
            CategoryError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Category repository for CRUD operations. Every method is scoped to the
/// owning user.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<categories::Model>, CategoryError> {
        let rows = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id))
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    /// Finds one of the user's categories by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotFound`] if no matching category belongs to
    /// the user.
    pub async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<categories::Model, CategoryError> {
        categories::Entity::find_by_id(id)
            .filter(categories::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Creates a category for the user.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::DuplicateName`] if the user already has a
    /// category with this name.
    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<categories::Model, CategoryError> {
        if self.name_exists(user_id, name, None).await? {
            return Err(CategoryError::DuplicateName(name.to_string()));
        }

        let now = chrono::Utc::now().into();

        let category = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name.to_string()),
            description: Set(description.map(String::from)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(category.insert(&self.db).await?)
    }

    /// Updates a category's name and/or description. `None` fields are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotFound`] if the category does not belong to
    /// the user, or [`CategoryError::DuplicateName`] on a name collision.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        description: Option<Option<&str>>,
    ) -> Result<categories::Model, CategoryError> {
        let existing = self.find_by_id(user_id, id).await?;

        if let Some(new_name) = name {
            if new_name != existing.name && self.name_exists(user_id, new_name, Some(id)).await? {
                return Err(CategoryError::DuplicateName(new_name.to_string()));
            }
        }

        let mut category: categories::ActiveModel = existing.into();
        if let Some(new_name) = name {
            category.name = Set(new_name.to_string());
        }
        if let Some(new_description) = description {
            category.description = Set(new_description.map(String::from));
        }
        category.updated_at = Set(chrono::Utc::now().into());

        Ok(category.update(&self.db).await?)
    }

    /// Deletes a category. Assets referencing it keep existing with their
    /// category cleared (enforced by the foreign key).
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotFound`] if the category does not belong to
    /// the user.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), CategoryError> {
        let existing = self.find_by_id(user_id, id).await?;

        categories::Entity::delete_by_id(existing.id)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn name_exists(
        &self,
        user_id: Uuid,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = categories::Entity::find()
            .filter(categories::Column::UserId.eq(user_id))
            .filter(categories::Column::Name.eq(name));

        if let Some(id) = exclude {
            query = query.filter(categories::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await?;
        Ok(count > 0)
    }
}
