use sea_orm::entity::prelude::*;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;

/// Uniform contract over the child collections owned by a service.
///
/// Each child table registers its key columns and how to clone one of
/// its rows onto another service. The service layer builds listing,
/// ordering, aggregate duplication and admin CRUD generically from
/// this, instead of repeating the same block per collection.
pub trait ServiceChild: EntityTrait {
    type Active: ActiveModelTrait<Entity = Self> + Send;

    fn id_column() -> Self::Column;
    fn service_column() -> Self::Column;
    fn order_column() -> Self::Column;
    fn active_column() -> Self::Column;

    /// Detached copy of `model` with a fresh id, attached to `service_id`.
    /// Every non-key field is preserved verbatim.
    fn clone_for(model: &Self::Model, service_id: Uuid) -> Self::Active;
}
