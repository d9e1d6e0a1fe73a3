//! Admin API handlers. Every route here sits behind
//! [`require_admin_key`]; the key travels in the `x-admin-key` header.

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use service::catalog::{self, BannerInput, CategoryInput, ServiceInput, SettingsInput};
use service::duplicate::{self, DuplicationReport};
use service::pagination::Pagination;

use crate::errors::ApiError;
use crate::state::ServerState;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub async fn require_admin_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.admin_key.as_deref() else {
        return next.run(req).await;
    };
    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    if provided == Some(expected) {
        next.run(req).await
    } else {
        warn!(path = %req.uri().path(), "admin request rejected");
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"message": "invalid admin key"})),
        )
            .into_response()
    }
}

pub async fn get_settings(
    State(state): State<ServerState>,
) -> Result<Json<Option<models::settings::Model>>, ApiError> {
    Ok(Json(catalog::get_settings(&state.db).await?))
}

pub async fn save_settings(
    State(state): State<ServerState>,
    Json(input): Json<SettingsInput>,
) -> Result<Json<models::settings::Model>, ApiError> {
    Ok(Json(catalog::save_settings(&state.db, input).await?))
}

pub async fn list_banners(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::banner::Model>>, ApiError> {
    Ok(Json(catalog::list_banners(&state.db).await?))
}

pub async fn create_banner(
    State(state): State<ServerState>,
    Json(input): Json<BannerInput>,
) -> Result<(StatusCode, Json<models::banner::Model>), ApiError> {
    let created = catalog::create_banner(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_banner(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::banner::Model>, ApiError> {
    Ok(Json(catalog::get_banner(&state.db, id).await?))
}

pub async fn update_banner(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<BannerInput>,
) -> Result<Json<models::banner::Model>, ApiError> {
    Ok(Json(catalog::update_banner(&state.db, id, input).await?))
}

pub async fn delete_banner(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_banner(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::category::Model>>, ApiError> {
    Ok(Json(catalog::list_categories(&state.db).await?))
}

pub async fn get_category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::category::Model>, ApiError> {
    Ok(Json(catalog::get_category(&state.db, id).await?))
}

pub async fn create_category(
    State(state): State<ServerState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<models::category::Model>), ApiError> {
    let created = catalog::create_category(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<models::category::Model>, ApiError> {
    Ok(Json(catalog::update_category(&state.db, id, input).await?))
}

pub async fn delete_category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_category(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ServiceListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

pub async fn list_services(
    State(state): State<ServerState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Paged<models::service::Model>>, ApiError> {
    let defaults = Pagination::default();
    let page = Pagination {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };
    let (items, total) = catalog::list_services(&state.db, query.category_id, page).await?;
    Ok(Json(Paged {
        items,
        total,
        page: page.page,
        per_page: page.per_page,
    }))
}

pub async fn get_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::service::Model>, ApiError> {
    Ok(Json(catalog::get_service(&state.db, id).await?))
}

pub async fn create_service(
    State(state): State<ServerState>,
    Json(input): Json<ServiceInput>,
) -> Result<(StatusCode, Json<models::service::Model>), ApiError> {
    let created = catalog::create_service(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<models::service::Model>, ApiError> {
    Ok(Json(catalog::update_service(&state.db, id, input).await?))
}

pub async fn delete_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn duplicate_service(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<models::service::Model>), ApiError> {
    let copy = duplicate::duplicate_service(&state.db, id).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

#[derive(Debug, Deserialize)]
pub struct DuplicateRequest {
    pub ids: Vec<Uuid>,
}

pub async fn duplicate_services(
    State(state): State<ServerState>,
    Json(req): Json<DuplicateRequest>,
) -> Result<Json<DuplicationReport>, ApiError> {
    Ok(Json(duplicate::duplicate_services(&state.db, &req.ids).await))
}
