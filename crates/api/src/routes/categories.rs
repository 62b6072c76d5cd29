//! Category routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use assetra_db::{CategoryError, CategoryRepository};
use assetra_shared::AppError;

/// Creates the category routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}", put(update_category))
        .route("/categories/{id}", delete(delete_category))
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Request body for updating a category.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    /// New name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
}

/// GET /categories - List the user's categories.
async fn list_categories(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list(user.user_id()).await {
        Ok(categories) => (StatusCode::OK, Json(json!({ "data": categories }))).into_response(),
        Err(e) => category_error_response(e),
    }
}

/// GET /categories/{id} - Fetch one category.
async fn get_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.find_by_id(user.user_id(), id).await {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => category_error_response(e),
    }
}

/// POST /categories - Create a category.
async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let name = payload.name.trim();
    if name.is_empty() || name.len() > 255 {
        return validation_error("Category name must be between 1 and 255 characters");
    }

    let repo = CategoryRepository::new((*state.db).clone());

    match repo
        .create(user.user_id(), name, payload.description.as_deref())
        .await
    {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => category_error_response(e),
    }
}

/// PUT /categories/{id} - Update a category.
async fn update_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> impl IntoResponse {
    if let Some(name) = &payload.name {
        let name = name.trim();
        if name.is_empty() || name.len() > 255 {
            return validation_error("Category name must be between 1 and 255 characters");
        }
    }

    let repo = CategoryRepository::new((*state.db).clone());

    match repo
        .update(
            user.user_id(),
            id,
            payload.name.as_deref().map(str::trim),
            payload.description.as_deref().map(Some),
        )
        .await
    {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => category_error_response(e),
    }
}

/// DELETE /categories/{id} - Delete a category. Assets keep existing with
/// their category cleared.
async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.delete(user.user_id(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => category_error_response(e),
    }
}

fn validation_error(message: &str) -> axum::response::Response {
    super::error_response(&AppError::Validation(message.to_string()))
}

fn category_error_response(e: CategoryError) -> axum::response::Response {
    if let CategoryError::Database(err) = &e {
        error!(error = %err, "Database error in category handler");
    }
    super::error_response(&e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_errors_render_expected_statuses() {
        let response = category_error_response(CategoryError::NotFound(Uuid::new_v4()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            category_error_response(CategoryError::DuplicateName("IT".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
