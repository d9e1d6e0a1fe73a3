use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::child::ServiceChild;
use crate::service;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "invoice")]
    Invoice,
    #[sea_orm(string_value = "act")]
    Act,
    #[sea_orm(string_value = "other")]
    Other,
}

impl DocType {
    pub fn label(&self) -> &'static str {
        match self {
            DocType::Contract => "Договор",
            DocType::Invoice => "Счёт",
            DocType::Act => "Акт",
            DocType::Other => "Другое",
        }
    }
}

/// Contract, invoice or act attached to a service. Either an uploaded
/// file reference or an external URL.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub doc_type: DocType,
    pub title: Option<String>,
    pub file: Option<String>,
    pub url: Option<String>,
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
            doc_type: Set(model.doc_type),
            title: Set(model.title.clone()),
            file: Set(model.file.clone()),
            url: Set(model.url.clone()),
            order: Set(model.order),
            is_active: Set(model.is_active),
        }
    }
}
