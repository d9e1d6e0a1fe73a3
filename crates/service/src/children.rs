//! Generic operations over the child collections of a service.
//!
//! Every collection (zones, chemicals, FAQ, ...) shares the same
//! lifecycle: listed in `order` within its parent, copied wholesale on
//! duplication, created and edited through the admin surface. The
//! [`ServiceChild`] registration in the models crate lets all of that
//! be written once.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::child::ServiceChild;
use models::document::DocType;
use models::zone_item::Zone;
use models::{
    case_before_after, chemical_item, client_company, document, equipment_item, excluded_item,
    faq_item, price_item, requirement_item, work_condition_item, zone_item,
};

pub(crate) fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

pub(crate) async fn ensure_service_exists<C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    models::service::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("service"))
}

/// Active rows of one collection, in display order. Used by the
/// public pages.
pub async fn list_active<E, C>(conn: &C, service_id: Uuid) -> Result<Vec<E::Model>, ServiceError>
where
    E: ServiceChild,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::service_column().eq(service_id))
        .filter(E::active_column().eq(true))
        .order_by_asc(E::order_column())
        .order_by_asc(E::id_column())
        .all(conn)
        .await
        .map_err(db_err)
}

/// Every row of one collection, active or not. Used by the admin
/// surface.
pub async fn list_all<E, C>(conn: &C, service_id: Uuid) -> Result<Vec<E::Model>, ServiceError>
where
    E: ServiceChild,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::service_column().eq(service_id))
        .order_by_asc(E::order_column())
        .order_by_asc(E::id_column())
        .all(conn)
        .await
        .map_err(db_err)
}

/// Copy every row of one collection from service `from` onto service
/// `to`, fresh ids, all fields (including inactive rows) preserved.
/// Returns the number of rows copied.
pub async fn copy_all<E, C>(conn: &C, from: Uuid, to: Uuid) -> Result<u64, ServiceError>
where
    E: ServiceChild,
    C: ConnectionTrait,
{
    let items = E::find()
        .filter(E::service_column().eq(from))
        .order_by_asc(E::order_column())
        .all(conn)
        .await
        .map_err(db_err)?;
    let copied = items.len() as u64;
    for item in &items {
        E::insert(E::clone_for(item, to))
            .exec(conn)
            .await
            .map_err(db_err)?;
    }
    Ok(copied)
}

pub async fn get_one<E, C>(conn: &C, id: Uuid) -> Result<E::Model, ServiceError>
where
    E: ServiceChild,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("item"))
}

pub async fn delete_one<E, C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    E: ServiceChild,
    C: ConnectionTrait,
{
    let res = E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(conn)
        .await
        .map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("item"));
    }
    Ok(())
}

/// Admin create/update contract for a child collection: how a JSON
/// payload becomes a row.
pub trait ChildForm: ServiceChild {
    type Payload: DeserializeOwned + Send;

    fn create_model(service_id: Uuid, payload: Self::Payload) -> Self::Active;
    /// Rebuild `existing` from `payload`; id and parent never change.
    fn update_model(existing: Self::Model, payload: Self::Payload) -> Self::Active;
}

pub async fn create_child<E, C>(
    conn: &C,
    service_id: Uuid,
    payload: E::Payload,
) -> Result<E::Model, ServiceError>
where
    E: ChildForm,
    C: ConnectionTrait,
    E::Model: IntoActiveModel<E::Active>,
{
    ensure_service_exists(conn, service_id).await?;
    E::insert(E::create_model(service_id, payload))
        .exec_with_returning(conn)
        .await
        .map_err(db_err)
}

pub async fn update_child<E, C>(
    conn: &C,
    id: Uuid,
    payload: E::Payload,
) -> Result<E::Model, ServiceError>
where
    E: ChildForm,
    C: ConnectionTrait,
    E::Model: IntoActiveModel<E::Active>,
{
    let existing = get_one::<E, C>(conn, id).await?;
    E::update(E::update_model(existing, payload))
        .exec(conn)
        .await
        .map_err(db_err)
}

pub(crate) fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct ZoneItemInput {
    pub zone: Zone,
    pub text: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for zone_item::Entity {
    type Payload = ZoneItemInput;

    fn create_model(service_id: Uuid, p: ZoneItemInput) -> zone_item::ActiveModel {
        zone_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            zone: Set(p.zone),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: zone_item::Model, p: ZoneItemInput) -> zone_item::ActiveModel {
        zone_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            zone: Set(p.zone),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChemicalItemInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for chemical_item::Entity {
    type Payload = ChemicalItemInput;

    fn create_model(service_id: Uuid, p: ChemicalItemInput) -> chemical_item::ActiveModel {
        chemical_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            name: Set(p.name),
            description: Set(p.description),
            image: Set(p.image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: chemical_item::Model, p: ChemicalItemInput) -> chemical_item::ActiveModel {
        chemical_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            name: Set(p.name),
            description: Set(p.description),
            image: Set(p.image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct EquipmentItemInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for equipment_item::Entity {
    type Payload = EquipmentItemInput;

    fn create_model(service_id: Uuid, p: EquipmentItemInput) -> equipment_item::ActiveModel {
        equipment_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            name: Set(p.name),
            description: Set(p.description),
            image: Set(p.image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: equipment_item::Model, p: EquipmentItemInput) -> equipment_item::ActiveModel {
        equipment_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            name: Set(p.name),
            description: Set(p.description),
            image: Set(p.image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FaqItemInput {
    pub question: String,
    pub answer: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for faq_item::Entity {
    type Payload = FaqItemInput;

    fn create_model(service_id: Uuid, p: FaqItemInput) -> faq_item::ActiveModel {
        faq_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            question: Set(p.question),
            answer: Set(p.answer),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: faq_item::Model, p: FaqItemInput) -> faq_item::ActiveModel {
        faq_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            question: Set(p.question),
            answer: Set(p.answer),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RequirementItemInput {
    pub text: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for requirement_item::Entity {
    type Payload = RequirementItemInput;

    fn create_model(service_id: Uuid, p: RequirementItemInput) -> requirement_item::ActiveModel {
        requirement_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            text: Set(p.text),
            description: Set(p.description),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(
        existing: requirement_item::Model,
        p: RequirementItemInput,
    ) -> requirement_item::ActiveModel {
        requirement_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            text: Set(p.text),
            description: Set(p.description),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorkConditionItemInput {
    pub text: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for work_condition_item::Entity {
    type Payload = WorkConditionItemInput;

    fn create_model(service_id: Uuid, p: WorkConditionItemInput) -> work_condition_item::ActiveModel {
        work_condition_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(
        existing: work_condition_item::Model,
        p: WorkConditionItemInput,
    ) -> work_condition_item::ActiveModel {
        work_condition_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExcludedItemInput {
    pub text: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for excluded_item::Entity {
    type Payload = ExcludedItemInput;

    fn create_model(service_id: Uuid, p: ExcludedItemInput) -> excluded_item::ActiveModel {
        excluded_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: excluded_item::Model, p: ExcludedItemInput) -> excluded_item::ActiveModel {
        excluded_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            text: Set(p.text),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CaseBeforeAfterInput {
    pub title: String,
    pub description: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for case_before_after::Entity {
    type Payload = CaseBeforeAfterInput;

    fn create_model(service_id: Uuid, p: CaseBeforeAfterInput) -> case_before_after::ActiveModel {
        case_before_after::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            title: Set(p.title),
            description: Set(p.description),
            before_image: Set(p.before_image),
            after_image: Set(p.after_image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(
        existing: case_before_after::Model,
        p: CaseBeforeAfterInput,
    ) -> case_before_after::ActiveModel {
        case_before_after::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            title: Set(p.title),
            description: Set(p.description),
            before_image: Set(p.before_image),
            after_image: Set(p.after_image),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientCompanyInput {
    pub name: String,
    pub business_type: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for client_company::Entity {
    type Payload = ClientCompanyInput;

    fn create_model(service_id: Uuid, p: ClientCompanyInput) -> client_company::ActiveModel {
        client_company::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            name: Set(p.name),
            business_type: Set(p.business_type),
            logo: Set(p.logo),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: client_company::Model, p: ClientCompanyInput) -> client_company::ActiveModel {
        client_company::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            name: Set(p.name),
            business_type: Set(p.business_type),
            logo: Set(p.logo),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentInput {
    pub doc_type: DocType,
    pub title: Option<String>,
    pub file: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for document::Entity {
    type Payload = DocumentInput;

    fn create_model(service_id: Uuid, p: DocumentInput) -> document::ActiveModel {
        document::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            doc_type: Set(p.doc_type),
            title: Set(p.title),
            file: Set(p.file),
            url: Set(p.url),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: document::Model, p: DocumentInput) -> document::ActiveModel {
        document::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            doc_type: Set(p.doc_type),
            title: Set(p.title),
            file: Set(p.file),
            url: Set(p.url),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PriceItemInput {
    pub title: String,
    pub price: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ChildForm for price_item::Entity {
    type Payload = PriceItemInput;

    fn create_model(service_id: Uuid, p: PriceItemInput) -> price_item::ActiveModel {
        price_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            title: Set(p.title),
            price: Set(p.price),
            description: Set(p.description),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }

    fn update_model(existing: price_item::Model, p: PriceItemInput) -> price_item::ActiveModel {
        price_item::ActiveModel {
            id: Set(existing.id),
            service_id: Set(existing.service_id),
            title: Set(p.title),
            price: Set(p.price),
            description: Set(p.description),
            order: Set(p.order),
            is_active: Set(p.is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn payload_defaults_fill_order_and_active() {
        let p: ZoneItemInput =
            serde_json::from_str(r#"{"zone":"kitchen","text":"Мойка фасадов"}"#).unwrap();
        assert_eq!(p.order, 0);
        assert!(p.is_active);
        assert_eq!(p.zone, Zone::Kitchen);
    }

    #[test]
    fn create_model_attaches_to_parent() {
        let service_id = Uuid::new_v4();
        let p = FaqItemInput {
            question: "Сколько длится уборка?".into(),
            answer: None,
            order: 3,
            is_active: true,
        };
        let am = faq_item::Entity::create_model(service_id, p);
        assert_eq!(am.service_id, ActiveValue::Set(service_id));
        assert_eq!(am.order, ActiveValue::Set(3));
        assert!(matches!(am.id, ActiveValue::Set(_)));
    }

    #[test]
    fn update_model_keeps_identity() {
        let existing = price_item::Model {
            id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            title: "Старый тариф".into(),
            price: "от 3000 ₽".into(),
            description: None,
            order: 0,
            is_active: true,
        };
        let p = PriceItemInput {
            title: "Новый тариф".into(),
            price: "от 3500 ₽".into(),
            description: Some("за квартиру до 50 м²".into()),
            order: 1,
            is_active: false,
        };
        let am = price_item::Entity::update_model(existing.clone(), p);
        assert_eq!(am.id, ActiveValue::Set(existing.id));
        assert_eq!(am.service_id, ActiveValue::Set(existing.service_id));
        assert_eq!(am.is_active, ActiveValue::Set(false));
    }
}
