//! Whole-aggregate duplication: one service plus every child
//! collection, copied inside a single transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::children::{self, db_err};
use crate::errors::ServiceError;
use crate::slug;
use models::{
    case_before_after, chemical_item, client_company, document, equipment_item, excluded_item,
    faq_item, price_item, requirement_item, service, work_condition_item, zone_item,
};

/// Appended to the source title so the copy is distinguishable in
/// listings until renamed.
pub const COPY_SUFFIX: &str = " (copy)";

#[derive(Debug, Serialize)]
pub struct DuplicationFailure {
    pub id: Uuid,
    pub error: String,
}

/// Outcome of a bulk duplication. Ids keep the request order.
#[derive(Debug, Default, Serialize)]
pub struct DuplicationReport {
    pub duplicated: Vec<Uuid>,
    pub failed: Vec<DuplicationFailure>,
}

/// Duplicate one service with all of its children. Either the whole
/// copy lands or nothing does.
pub async fn duplicate_service(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<service::Model, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;
    match duplicate_in_txn(&txn, id).await {
        Ok(copy) => {
            txn.commit().await.map_err(db_err)?;
            Ok(copy)
        }
        Err(e) => {
            let _ = txn.rollback().await;
            Err(e)
        }
    }
}

async fn duplicate_in_txn<C>(conn: &C, id: Uuid) -> Result<service::Model, ServiceError>
where
    C: ConnectionTrait,
{
    let source = service::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    let title = format!("{}{}", source.title, COPY_SUFFIX);
    let slug_value = slug::unique_slug(conn, &title, None).await?;
    let now = chrono::Utc::now().into();
    let copy = service::Entity::insert(service::ActiveModel {
        id: Set(Uuid::new_v4()),
        category_id: Set(source.category_id),
        title: Set(title),
        slug: Set(slug_value),
        cover_image: Set(source.cover_image.clone()),
        cover_video_url: Set(source.cover_video_url.clone()),
        has_360: Set(source.has_360),
        view_360_url: Set(source.view_360_url.clone()),
        is_active: Set(source.is_active),
        order: Set(source.order),
        created_at: Set(now),
        updated_at: Set(now),
    })
    .exec_with_returning(conn)
    .await
    .map_err(db_err)?;

    let mut copied = 0u64;
    copied += children::copy_all::<zone_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<chemical_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<equipment_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<faq_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<requirement_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<work_condition_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<excluded_item::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<case_before_after::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<client_company::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<document::Entity, C>(conn, id, copy.id).await?;
    copied += children::copy_all::<price_item::Entity, C>(conn, id, copy.id).await?;

    info!(source = %id, copy = %copy.id, slug = %copy.slug, children = copied, "service duplicated");
    Ok(copy)
}

/// Duplicate several services. Each id gets its own transaction, so
/// one failure never takes down the rest of the batch.
pub async fn duplicate_services(db: &DatabaseConnection, ids: &[Uuid]) -> DuplicationReport {
    let mut report = DuplicationReport::default();
    for &id in ids {
        match duplicate_service(db, id).await {
            Ok(copy) => report.duplicated.push(copy.id),
            Err(e) => {
                error!(%id, error = %e, "duplication failed");
                report.failed.push(DuplicationFailure {
                    id,
                    error: e.to_string(),
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CategoryInput, ServiceInput};
    use crate::children::{create_child, list_all, FaqItemInput, ZoneItemInput};
    use crate::test_support::try_db;
    use models::zone_item::Zone;

    fn category_input(name: &str) -> CategoryInput {
        CategoryInput {
            name: name.into(),
            image: None,
            description: None,
            is_active: true,
            order: 0,
        }
    }

    fn service_input(category_id: Uuid, title: &str) -> ServiceInput {
        ServiceInput {
            category_id,
            title: title.into(),
            slug: None,
            cover_image: Some("covers/office.jpg".into()),
            cover_video_url: None,
            has_360: true,
            view_360_url: Some("https://tours.example/office".into()),
            is_active: true,
            order: 5,
        }
    }

    #[tokio::test]
    async fn duplicate_copies_fields_and_children() {
        let Some(db) = try_db().await else { return };
        let cat = catalog::create_category(&db, category_input("Офисы")).await.unwrap();
        let src = catalog::create_service(&db, service_input(cat.id, "Уборка офиса"))
            .await
            .unwrap();
        create_child::<zone_item::Entity, _>(
            &db,
            src.id,
            ZoneItemInput {
                zone: Zone::Office,
                text: "Рабочие столы".into(),
                order: 0,
                is_active: true,
            },
        )
        .await
        .unwrap();
        create_child::<zone_item::Entity, _>(
            &db,
            src.id,
            ZoneItemInput {
                zone: Zone::Other,
                text: "Переговорная".into(),
                order: 1,
                is_active: false,
            },
        )
        .await
        .unwrap();
        create_child::<faq_item::Entity, _>(
            &db,
            src.id,
            FaqItemInput {
                question: "Как часто?".into(),
                answer: Some("Раз в неделю".into()),
                order: 0,
                is_active: true,
            },
        )
        .await
        .unwrap();

        let copy = duplicate_service(&db, src.id).await.unwrap();
        assert_ne!(copy.id, src.id);
        assert_eq!(copy.title, format!("{}{}", src.title, COPY_SUFFIX));
        assert_ne!(copy.slug, src.slug);
        assert_eq!(copy.category_id, src.category_id);
        assert_eq!(copy.cover_image, src.cover_image);
        assert_eq!(copy.has_360, src.has_360);

        // inactive children travel with the copy too
        let zones = list_all::<zone_item::Entity, _>(&db, copy.id).await.unwrap();
        assert_eq!(zones.len(), 2);
        assert!(zones.iter().all(|z| z.service_id == copy.id));
        let faqs = list_all::<faq_item::Entity, _>(&db, copy.id).await.unwrap();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].answer.as_deref(), Some("Раз в неделю"));

        catalog::delete_service(&db, copy.id).await.unwrap();
        catalog::delete_service(&db, src.id).await.unwrap();
        catalog::delete_category(&db, cat.id).await.unwrap();
    }

    #[tokio::test]
    async fn rolled_back_duplication_leaves_no_partial_copy() {
        let Some(db) = try_db().await else { return };
        let cat = catalog::create_category(&db, category_input("Гостиницы")).await.unwrap();
        let src = catalog::create_service(&db, service_input(cat.id, "Уборка номеров"))
            .await
            .unwrap();
        create_child::<zone_item::Entity, _>(
            &db,
            src.id,
            ZoneItemInput {
                zone: Zone::Room,
                text: "Кровати и текстиль".into(),
                order: 0,
                is_active: true,
            },
        )
        .await
        .unwrap();

        // every row of the copy goes through this one transaction; a
        // failure before commit must discard the service and children
        // together
        let txn = db.begin().await.unwrap();
        let copy = duplicate_in_txn(&txn, src.id).await.unwrap();
        txn.rollback().await.unwrap();

        let err = catalog::get_service(&db, copy.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let zones = list_all::<zone_item::Entity, _>(&db, copy.id).await.unwrap();
        assert!(zones.is_empty());

        // the source stays intact
        let kept = catalog::get_service(&db, src.id).await.unwrap();
        assert_eq!(kept.slug, src.slug);
        let src_zones = list_all::<zone_item::Entity, _>(&db, src.id).await.unwrap();
        assert_eq!(src_zones.len(), 1);

        catalog::delete_service(&db, src.id).await.unwrap();
        catalog::delete_category(&db, cat.id).await.unwrap();
    }

    #[tokio::test]
    async fn bulk_reports_missing_ids_without_aborting() {
        let Some(db) = try_db().await else { return };
        let cat = catalog::create_category(&db, category_input("Кафе")).await.unwrap();
        let a = catalog::create_service(&db, service_input(cat.id, "Уборка кафе"))
            .await
            .unwrap();
        let missing = Uuid::new_v4();

        let report = duplicate_services(&db, &[a.id, missing]).await;
        assert_eq!(report.duplicated.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, missing);

        for id in report.duplicated {
            catalog::delete_service(&db, id).await.unwrap();
        }
        catalog::delete_service(&db, a.id).await.unwrap();
        catalog::delete_category(&db, cat.id).await.unwrap();
    }

    #[tokio::test]
    async fn repeated_titles_get_numbered_slugs() {
        let Some(db) = try_db().await else { return };
        let cat = catalog::create_category(&db, category_input("Склады")).await.unwrap();
        let first = catalog::create_service(&db, service_input(cat.id, "Мойка склада"))
            .await
            .unwrap();
        let second = catalog::create_service(&db, service_input(cat.id, "Мойка склада"))
            .await
            .unwrap();
        assert!(first.slug.starts_with("moyka-sklada"));
        assert!(second.slug.starts_with("moyka-sklada"));
        assert_ne!(first.slug, second.slug);

        catalog::delete_service(&db, second.id).await.unwrap();
        catalog::delete_service(&db, first.id).await.unwrap();
        catalog::delete_category(&db, cat.id).await.unwrap();
    }
}
