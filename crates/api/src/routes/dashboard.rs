//! Dashboard routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::error;

use crate::{AppState, middleware::AuthUser};
use assetra_core::asset::AssetSnapshot;
use assetra_core::dashboard::build_dashboard;
use assetra_db::AssetRepository;

/// Creates the dashboard routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// GET /dashboard - Portfolio totals, status and category breakdowns, and
/// the 12-month net book value trend, all as of today.
async fn get_dashboard(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = AssetRepository::new((*state.db).clone());

    let rows = match repo.list_all(user.user_id()).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Database error loading dashboard");
            return super::error_response(&e.into());
        }
    };

    let snapshots: Vec<AssetSnapshot> = rows
        .into_iter()
        .map(assetra_db::AssetWithCategory::into_snapshot)
        .collect();

    let today = chrono::Utc::now().date_naive();
    let summary = build_dashboard(&snapshots, today);

    (StatusCode::OK, Json(summary)).into_response()
}
