//! Admin CRUD for the child collections, written once over
//! [`ChildForm`] and instantiated per collection in the router.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::IntoActiveModel;
use serde::Serialize;
use uuid::Uuid;

use service::children as ops;
use service::children::ChildForm;

use crate::errors::ApiError;
use crate::state::ServerState;

/// Routes for one collection: listing/creation under the parent
/// service, item access by id.
pub fn child_routes<E>(name: &'static str) -> Router<ServerState>
where
    E: ChildForm + 'static,
    E::Model: Serialize + IntoActiveModel<E::Active> + 'static,
    E::Payload: 'static,
{
    Router::new()
        .route(
            &format!("/services/:id/{name}"),
            get(list::<E>).post(create::<E>),
        )
        .route(
            &format!("/{name}/:id"),
            get(get_one::<E>).put(update::<E>).delete(remove::<E>),
        )
}

async fn list<E>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<E::Model>>, ApiError>
where
    E: ChildForm,
    E::Model: Serialize,
{
    Ok(Json(ops::list_all::<E, _>(&state.db, id).await?))
}

async fn create<E>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<E::Payload>,
) -> Result<(StatusCode, Json<E::Model>), ApiError>
where
    E: ChildForm,
    E::Model: Serialize + IntoActiveModel<E::Active>,
{
    let created = ops::create_child::<E, _>(&state.db, id, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_one<E>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<E::Model>, ApiError>
where
    E: ChildForm,
    E::Model: Serialize,
{
    Ok(Json(ops::get_one::<E, _>(&state.db, id).await?))
}

async fn update<E>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<E::Payload>,
) -> Result<Json<E::Model>, ApiError>
where
    E: ChildForm,
    E::Model: Serialize + IntoActiveModel<E::Active>,
{
    Ok(Json(ops::update_child::<E, _>(&state.db, id, payload).await?))
}

async fn remove<E>(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    E: ChildForm,
{
    ops::delete_one::<E, _>(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
