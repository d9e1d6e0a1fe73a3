//! Public read-only handlers. No auth, active content only.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use common::types::Health;
use service::pages::{self, CategoryPage, HomePage, ServicePage};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn home(State(state): State<ServerState>) -> Result<Json<HomePage>, ApiError> {
    Ok(Json(pages::home(&state.db).await?))
}

pub async fn categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::category::Model>>, ApiError> {
    Ok(Json(pages::category_list(&state.db).await?))
}

pub async fn category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryPage>, ApiError> {
    Ok(Json(pages::category_detail(&state.db, id).await?))
}

pub async fn service_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<ServicePage>, ApiError> {
    Ok(Json(pages::service_detail(&state.db, &slug).await?))
}
