use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::child::ServiceChild;
use crate::service;

/// Company that has already ordered the service (logo wall).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub name: String,
    pub business_type: Option<String>,
    pub logo: Option<String>,
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
            name: Set(model.name.clone()),
            business_type: Set(model.business_type.clone()),
            logo: Set(model.logo.clone()),
            order: Set(model.order),
            is_active: Set(model.is_active),
        }
    }
}
