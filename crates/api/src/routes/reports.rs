//! Report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::error;

use crate::{AppState, middleware::AuthUser};
use assetra_core::asset::{AssetSnapshot, YearMonth};
use assetra_core::schedule::build_schedule;
use assetra_db::AssetRepository;
use assetra_shared::AppError;

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/depreciation-schedule", get(depreciation_schedule))
}

/// Query parameters for the depreciation schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Accounting month in `YYYY-MM` format; defaults to the current month.
    pub month: Option<String>,
}

/// GET /reports/depreciation-schedule - Per-asset depreciation lines and
/// column totals for one accounting month.
async fn depreciation_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ScheduleQuery>,
) -> impl IntoResponse {
    let month = match &query.month {
        Some(raw) => match YearMonth::parse(raw) {
            Some(month) => month,
            None => {
                return super::error_response(&AppError::Validation(
                    "Month must be in YYYY-MM format".to_string(),
                ));
            }
        },
        None => current_month(),
    };

    let repo = AssetRepository::new((*state.db).clone());

    let rows = match repo.list_all(user.user_id()).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Database error building schedule");
            return super::error_response(&e.into());
        }
    };

    let snapshots: Vec<AssetSnapshot> = rows
        .into_iter()
        .map(assetra_db::AssetWithCategory::into_snapshot)
        .collect();

    let schedule = build_schedule(&snapshots, month);

    (StatusCode::OK, Json(schedule)).into_response()
}

fn current_month() -> YearMonth {
    use chrono::Datelike;

    let today = chrono::Utc::now().date_naive();
    YearMonth {
        year: today.year(),
        month: today.month(),
    }
}
