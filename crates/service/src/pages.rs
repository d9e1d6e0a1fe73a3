//! Read-path aggregation behind the public pages. Everything here is
//! active-rows-only; inactive content simply does not exist for the
//! site visitor.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog;
use crate::children::{db_err, list_active};
use crate::errors::ServiceError;
use models::zone_item::Zone;
use models::{
    banner, case_before_after, category, chemical_item, client_company, document, equipment_item,
    excluded_item, faq_item, price_item, requirement_item, service, settings,
    work_condition_item, zone_item,
};

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub settings: Option<settings::Model>,
    pub banners: Vec<banner::Model>,
    pub categories: Vec<category::Model>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: category::Model,
    pub services: Vec<service::Model>,
}

/// Zone items bucketed by zone, in the fixed page order, empty zones
/// omitted.
#[derive(Debug, Serialize)]
pub struct ZoneGroup {
    pub zone: Zone,
    pub label: &'static str,
    pub items: Vec<zone_item::Model>,
}

#[derive(Debug, Serialize)]
pub struct ServicePage {
    pub service: service::Model,
    pub category: Option<category::Model>,
    pub zone_groups: Vec<ZoneGroup>,
    pub chemicals: Vec<chemical_item::Model>,
    pub equipment: Vec<equipment_item::Model>,
    pub faq: Vec<faq_item::Model>,
    pub requirements: Vec<requirement_item::Model>,
    pub work_conditions: Vec<work_condition_item::Model>,
    pub excluded: Vec<excluded_item::Model>,
    pub cases: Vec<case_before_after::Model>,
    pub clients: Vec<client_company::Model>,
    pub documents: Vec<document::Model>,
    pub prices: Vec<price_item::Model>,
}

pub fn group_zones(items: Vec<zone_item::Model>) -> Vec<ZoneGroup> {
    Zone::ALL
        .iter()
        .filter_map(|&zone| {
            let bucket: Vec<_> = items.iter().filter(|i| i.zone == zone).cloned().collect();
            if bucket.is_empty() {
                None
            } else {
                Some(ZoneGroup {
                    zone,
                    label: zone.label(),
                    items: bucket,
                })
            }
        })
        .collect()
}

pub async fn home<C>(conn: &C) -> Result<HomePage, ServiceError>
where
    C: ConnectionTrait,
{
    Ok(HomePage {
        settings: catalog::get_settings(conn).await?,
        banners: catalog::list_banners(conn).await?,
        categories: catalog::list_categories(conn).await?,
    })
}

pub async fn category_list<C>(conn: &C) -> Result<Vec<category::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    catalog::list_categories(conn).await
}

/// Category page: the category itself plus its active services. The
/// category is shown even when flagged inactive; only services are
/// filtered.
pub async fn category_detail<C>(conn: &C, id: Uuid) -> Result<CategoryPage, ServiceError>
where
    C: ConnectionTrait,
{
    let cat = catalog::get_category(conn, id).await?;
    let services = service::Entity::find()
        .filter(service::Column::CategoryId.eq(id))
        .filter(service::Column::IsActive.eq(true))
        .order_by_asc(service::Column::Order)
        .order_by_asc(service::Column::Title)
        .all(conn)
        .await
        .map_err(db_err)?;
    Ok(CategoryPage {
        category: cat,
        services,
    })
}

/// The full service page, looked up by slug. Inactive services are
/// invisible here even with a correct slug.
pub async fn service_detail<C>(conn: &C, slug: &str) -> Result<ServicePage, ServiceError>
where
    C: ConnectionTrait,
{
    let svc = service::Entity::find()
        .filter(service::Column::Slug.eq(slug))
        .filter(service::Column::IsActive.eq(true))
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    let category = category::Entity::find_by_id(svc.category_id)
        .one(conn)
        .await
        .map_err(db_err)?;
    let zones = list_active::<zone_item::Entity, C>(conn, svc.id).await?;

    Ok(ServicePage {
        zone_groups: group_zones(zones),
        chemicals: list_active::<chemical_item::Entity, C>(conn, svc.id).await?,
        equipment: list_active::<equipment_item::Entity, C>(conn, svc.id).await?,
        faq: list_active::<faq_item::Entity, C>(conn, svc.id).await?,
        requirements: list_active::<requirement_item::Entity, C>(conn, svc.id).await?,
        work_conditions: list_active::<work_condition_item::Entity, C>(conn, svc.id).await?,
        excluded: list_active::<excluded_item::Entity, C>(conn, svc.id).await?,
        cases: list_active::<case_before_after::Entity, C>(conn, svc.id).await?,
        clients: list_active::<client_company::Entity, C>(conn, svc.id).await?,
        documents: list_active::<document::Entity, C>(conn, svc.id).await?,
        prices: list_active::<price_item::Entity, C>(conn, svc.id).await?,
        category,
        service: svc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryInput, ServiceInput};
    use crate::test_support::try_db;

    fn zone_row(zone: Zone, text: &str, order: i32) -> zone_item::Model {
        zone_item::Model {
            id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            zone,
            text: text.into(),
            order,
            is_active: true,
        }
    }

    #[test]
    fn zones_group_in_fixed_order_and_skip_empty() {
        let items = vec![
            zone_row(Zone::Other, "Балкон", 0),
            zone_row(Zone::Kitchen, "Плита", 0),
            zone_row(Zone::Kitchen, "Фасады", 1),
        ];
        let groups = group_zones(items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].zone, Zone::Kitchen);
        assert_eq!(groups[0].label, "Кухня");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].zone, Zone::Other);
    }

    #[test]
    fn no_items_no_groups() {
        assert!(group_zones(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn inactive_service_is_hidden_from_detail() {
        let Some(db) = try_db().await else { return };
        let cat = crate::catalog::create_category(
            &db,
            CategoryInput {
                name: "Медцентры".into(),
                image: None,
                description: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        let svc = crate::catalog::create_service(
            &db,
            ServiceInput {
                category_id: cat.id,
                title: "Дезинфекция кабинетов".into(),
                slug: None,
                cover_image: None,
                cover_video_url: None,
                has_360: false,
                view_360_url: None,
                is_active: false,
                order: 0,
            },
        )
        .await
        .unwrap();

        let err = service_detail(&db, &svc.slug).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        crate::catalog::delete_service(&db, svc.id).await.unwrap();
        crate::catalog::delete_category(&db, cat.id).await.unwrap();
    }
}
