//! Asset routes.
//!
//! List and detail responses carry the asset's depreciation position
//! computed as of today, so clients never re-derive book values.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use assetra_core::asset::{
    AssetListFilter, AssetSnapshot, DepreciationRecord, MAX_USEFUL_LIFE_YEARS, MonthBasis,
    YearMonth, estimate_useful_life,
};
use assetra_db::{
    AssetError, AssetRepository, CreateAssetInput, UpdateAssetInput,
    entities::sea_orm_active_enums::AssetStatus,
};
use assetra_shared::{
    AppError,
    types::{PageRequest, PageResponse},
};

/// Creates the asset routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/{id}", get(get_asset))
        .route("/assets/{id}", put(update_asset))
        .route("/assets/{id}", delete(delete_asset))
        .route("/assets/{id}/dispose", post(dispose_asset))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query parameters for the asset list.
#[derive(Debug, Deserialize)]
pub struct AssetListQuery {
    /// Keep only assets in this category.
    pub category_id: Option<Uuid>,
    /// Keep only assets with this status.
    pub status: Option<String>,
    /// Keep only assets purchased in this `YYYY-MM` month.
    pub month: Option<String>,
    /// Case-insensitive search over name, location, and assignee.
    pub q: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// Request body for creating an asset.
#[derive(Debug, Deserialize)]
pub struct CreateAssetRequest {
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
    /// Useful life in years.
    pub useful_life_years: Option<u32>,
    /// Manually tracked current value.
    pub current_value: Option<Decimal>,
    /// Initial lifecycle status; defaults to active.
    pub status: Option<String>,
}

/// Request body for updating an asset.
#[derive(Debug, Deserialize)]
pub struct UpdateAssetRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category_id: Option<Uuid>,
    /// New location.
    pub location: Option<String>,
    /// New assignee.
    pub assignee: Option<String>,
    /// New purchase price.
    pub purchase_price: Option<Decimal>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New useful life.
    pub useful_life_years: Option<u32>,
    /// New current value.
    pub current_value: Option<Decimal>,
    /// New status.
    pub status: Option<String>,
}

/// Request body for disposing of an asset.
#[derive(Debug, Deserialize)]
pub struct DisposeAssetRequest {
    /// Value removed from the books; falls back to the asset's stored
    /// current value when absent.
    pub disposal_value: Option<Decimal>,
}

/// An asset with its depreciation position as of today.
#[derive(Debug, Serialize)]
pub struct AssetView {
    /// The asset fields.
    #[serde(flatten)]
    pub asset: AssetSnapshot,
    /// Depreciation position as of today.
    pub depreciation: DepreciationRecord,
}

/// Detail view, adding the reverse-calculated useful life for assets that
/// have none stored.
#[derive(Debug, Serialize)]
pub struct AssetDetailView {
    /// The asset fields.
    #[serde(flatten)]
    pub asset: AssetSnapshot,
    /// Depreciation position as of today.
    pub depreciation: DepreciationRecord,
    /// Estimated useful life in years, present only when none is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_useful_life: Option<Decimal>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /assets - List assets with filters, pagination, and depreciation.
async fn list_assets(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<AssetListQuery>,
) -> impl IntoResponse {
    let filter = match build_filter(&query) {
        Ok(f) => f,
        Err(response) => return response,
    };

    let page = PageRequest {
        page: query.page.unwrap_or(1).max(1),
        per_page: query.per_page.unwrap_or(20).clamp(1, 100),
    };

    let repo = AssetRepository::new((*state.db).clone());
    let rows = match repo.list_all(user.user_id()).await {
        Ok(rows) => rows,
        Err(e) => return asset_error_response(e),
    };

    let filtered: Vec<AssetSnapshot> = rows
        .into_iter()
        .map(assetra_db::AssetWithCategory::into_snapshot)
        .filter(|snapshot| filter.matches(snapshot))
        .collect();

    let total = filtered.len() as u64;
    let today = chrono::Utc::now().date_naive();

    #[allow(clippy::cast_possible_truncation)]
    let items: Vec<AssetView> = filtered
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .map(|snapshot| AssetView {
            depreciation: snapshot.depreciation(today, MonthBasis::Inclusive),
            asset: snapshot,
        })
        .collect();

    let response = PageResponse::new(items, page.page, page.per_page, total);
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /assets/{id} - Fetch one asset with its depreciation position.
async fn get_asset(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AssetRepository::new((*state.db).clone());

    let row = match repo.find_by_id(user.user_id(), id).await {
        Ok(row) => row,
        Err(e) => return asset_error_response(e),
    };

    let snapshot = row.into_snapshot();
    let today = chrono::Utc::now().date_naive();
    let depreciation = snapshot.depreciation(today, MonthBasis::Inclusive);

    // Legacy records may have no stored useful life; offer a reverse
    // calculation from the current value instead.
    let estimated_useful_life = if snapshot.useful_life_years.is_none() {
        let current = snapshot
            .current_value
            .unwrap_or(depreciation.net_book_value);
        Some(estimate_useful_life(
            snapshot.purchase_price,
            current,
            snapshot.purchase_date,
            today,
        ))
    } else {
        None
    };

    (
        StatusCode::OK,
        Json(AssetDetailView {
            asset: snapshot,
            depreciation,
            estimated_useful_life,
        }),
    )
        .into_response()
}

/// POST /assets - Create an asset.
async fn create_asset(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateAssetRequest>,
) -> impl IntoResponse {
    let name = payload.name.trim();
    if name.is_empty() || name.len() > 255 {
        return validation_error("Asset name must be between 1 and 255 characters");
    }

    if payload.purchase_price < Decimal::ZERO {
        return validation_error("Purchase price must not be negative");
    }

    if let Some(years) = payload.useful_life_years {
        if years > MAX_USEFUL_LIFE_YEARS {
            return validation_error("Useful life must be between 0 and 50 years");
        }
    }

    let status = match parse_status(payload.status.as_deref()) {
        Ok(s) => s.unwrap_or(AssetStatus::Active),
        Err(response) => return response,
    };

    let repo = AssetRepository::new((*state.db).clone());

    let input = CreateAssetInput {
        name: name.to_string(),
        description: payload.description,
        category_id: payload.category_id,
        location: payload.location,
        assignee: payload.assignee,
        purchase_price: payload.purchase_price,
        purchase_date: payload.purchase_date,
        useful_life_years: payload.useful_life_years.and_then(|v| i32::try_from(v).ok()),
        current_value: payload.current_value,
        status,
    };

    match repo.create(user.user_id(), input).await {
        Ok(asset) => (StatusCode::CREATED, Json(asset)).into_response(),
        Err(e) => asset_error_response(e),
    }
}

/// PUT /assets/{id} - Update an asset.
async fn update_asset(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssetRequest>,
) -> impl IntoResponse {
    if let Some(name) = &payload.name {
        let name = name.trim();
        if name.is_empty() || name.len() > 255 {
            return validation_error("Asset name must be between 1 and 255 characters");
        }
    }

    if let Some(price) = payload.purchase_price {
        if price < Decimal::ZERO {
            return validation_error("Purchase price must not be negative");
        }
    }

    if let Some(years) = payload.useful_life_years {
        if years > MAX_USEFUL_LIFE_YEARS {
            return validation_error("Useful life must be between 0 and 50 years");
        }
    }

    let status = match parse_status(payload.status.as_deref()) {
        Ok(s) => s,
        Err(response) => return response,
    };

    let repo = AssetRepository::new((*state.db).clone());

    let input = UpdateAssetInput {
        name: payload.name.map(|n| n.trim().to_string()),
        description: payload.description.map(Some),
        category_id: payload.category_id.map(Some),
        location: payload.location.map(Some),
        assignee: payload.assignee.map(Some),
        purchase_price: payload.purchase_price,
        purchase_date: payload.purchase_date,
        useful_life_years: payload
            .useful_life_years
            .and_then(|v| i32::try_from(v).ok())
            .map(Some),
        current_value: payload.current_value.map(Some),
        status,
    };

    match repo.update(user.user_id(), id, input).await {
        Ok(asset) => (StatusCode::OK, Json(asset)).into_response(),
        Err(e) => asset_error_response(e),
    }
}

/// DELETE /assets/{id} - Delete an asset.
async fn delete_asset(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AssetRepository::new((*state.db).clone());

    match repo.delete(user.user_id(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => asset_error_response(e),
    }
}

/// POST /assets/{id}/dispose - Mark an asset as disposed.
async fn dispose_asset(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<DisposeAssetRequest>,
) -> impl IntoResponse {
    let repo = AssetRepository::new((*state.db).clone());

    match repo.dispose(user.user_id(), id, payload.disposal_value).await {
        Ok(asset) => (StatusCode::OK, Json(asset)).into_response(),
        Err(e) => asset_error_response(e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn build_filter(query: &AssetListQuery) -> Result<AssetListFilter, axum::response::Response> {
    let status = match &query.status {
        Some(s) => Some(
            assetra_core::asset::AssetStatus::parse(s)
                .ok_or_else(|| validation_error("Unknown asset status"))?,
        ),
        None => None,
    };

    let purchase_month = match &query.month {
        Some(m) => Some(
            YearMonth::parse(m).ok_or_else(|| validation_error("Month must be in YYYY-MM format"))?,
        ),
        None => None,
    };

    Ok(AssetListFilter {
        category_id: query.category_id,
        status,
        purchase_month,
        search: query.q.clone(),
    })
}

fn parse_status(
    status: Option<&str>,
) -> Result<Option<AssetStatus>, axum::response::Response> {
    match status {
        None => Ok(None),
        Some(s) => assetra_core::asset::AssetStatus::parse(s)
            .map(|parsed| Some(parsed.into()))
            .ok_or_else(|| validation_error("Unknown asset status")),
    }
}

fn validation_error(message: &str) -> axum::response::Response {
    super::error_response(&AppError::Validation(message.to_string()))
}

fn asset_error_response(e: AssetError) -> axum::response::Response {
    if let AssetError::Database(err) = &e {
        error!(error = %err, "Database error in asset handler");
    }
    super::error_response(&e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(status: Option<&str>, month: Option<&str>) -> AssetListQuery {
        AssetListQuery {
            category_id: None,
            status: status.map(String::from),
            month: month.map(String::from),
            q: None,
            page: None,
            per_page: None,
        }
    }

    #[rstest]
    #[case("active", AssetStatus::Active)]
    #[case("maintenance", AssetStatus::Maintenance)]
    #[case("inactive", AssetStatus::Inactive)]
    #[case("disposed", AssetStatus::Disposed)]
    fn test_parse_status_known_values(#[case] raw: &str, #[case] expected: AssetStatus) {
        assert_eq!(parse_status(Some(raw)).unwrap(), Some(expected));
    }

    #[test]
    fn test_parse_status_absent_and_unknown() {
        assert_eq!(parse_status(None).unwrap(), None);
        assert!(parse_status(Some("scrapped")).is_err());
    }

    #[test]
    fn test_build_filter_accepts_valid_month() {
        let filter = build_filter(&query(None, Some("2024-03"))).unwrap();
        assert_eq!(filter.purchase_month, YearMonth::parse("2024-03"));
    }

    #[test]
    fn test_build_filter_rejects_bad_input() {
        assert!(build_filter(&query(Some("broken"), None)).is_err());
        assert!(build_filter(&query(None, Some("march"))).is_err());
    }

    #[test]
    fn test_asset_errors_render_expected_statuses() {
        let id = Uuid::new_v4();

        let response = asset_error_response(AssetError::NotFound(id));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = asset_error_response(AssetError::CategoryNotFound(id));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = asset_error_response(AssetError::AlreadyDisposed(id));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
