use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::child::ServiceChild;
use crate::service;

/// Showcase case with before/after photos.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_before_after")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ServiceChild for Entity {
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }
    fn service_column() -> Column {
        Column::ServiceId
    }
    fn order_column() -> Column {
        Column::Order
    }
    fn active_column() -> Column {
        Column::IsActive
    }

    fn clone_for(model: &Model, service_id: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            before_image: Set(model.before_image.clone()),
            after_image: Set(model.after_image.clone()),
            order: Set(model.order),
            is_active: Set(model.is_active),
        }
    }
}
