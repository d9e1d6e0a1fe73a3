use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::child::ServiceChild;
use crate::service;

/// Fixed classification of where in a premises a cleaning task applies.
/// Labels are the human-readable strings rendered on the public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    #[sea_orm(string_value = "room")]
    Room,
    #[sea_orm(string_value = "kitchen")]
    Kitchen,
    #[sea_orm(string_value = "bath_wc")]
    BathWc,
    #[sea_orm(string_value = "hall")]
    Hall,
    #[sea_orm(string_value = "office")]
    Office,
    #[sea_orm(string_value = "warehouse")]
    Warehouse,
    #[sea_orm(string_value = "other")]
    Other,
}

impl Zone {
    /// Grouping order on the service detail page.
    pub const ALL: [Zone; 7] = [
        Zone::Room,
        Zone::Kitchen,
        Zone::BathWc,
        Zone::Hall,
        Zone::Office,
        Zone::Warehouse,
        Zone::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Room => "Комната",
            Zone::Kitchen => "Кухня",
            Zone::BathWc => "Ванная и туалет",
            Zone::Hall => "Прихожая / входная группа",
            Zone::Office => "Офис / рабочая зона",
            Zone::Warehouse => "Склад / подсобка",
            Zone::Other => "Другое",
        }
    }
}

/// One line of the "what is cleaned where" list.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "zone_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub zone: Zone,
    pub text: String,
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
            zone: Set(model.zone),
            text: Set(model.text.clone()),
            order: Set(model.order),
            is_active: Set(model.is_active),
        }
    }
}
