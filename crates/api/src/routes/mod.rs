//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, middleware::auth::auth_middleware};
use assetra_shared::AppError;

pub mod assets;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod reports;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(categories::routes())
        .merge(assets::routes())
        .merge(dashboard::routes())
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}

/// Renders an [`AppError`] as the JSON error envelope every handler uses.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.message()
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_carries_status() {
        let response = error_response(&AppError::NotFound("Asset not found".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&AppError::Validation("bad month".to_string()));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = error_response(&AppError::Conflict("duplicate".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
