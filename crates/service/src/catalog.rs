//! Admin-facing CRUD for the catalog: settings, banners, categories
//! and services. Slug assignment happens here, on service create and
//! update.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::children::{db_err, default_true};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::slug;
use models::{banner, category, service, settings};

#[derive(Clone, Debug, Deserialize)]
pub struct SettingsInput {
    pub title: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub icon: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub instagram: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BannerInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceInput {
    pub category_id: Uuid,
    pub title: String,
    /// Explicit slug. Empty string forces regeneration from the title;
    /// absent keeps the stored value (on update) or generates one (on
    /// create).
    pub slug: Option<String>,
    pub cover_image: Option<String>,
    pub cover_video_url: Option<String>,
    #[serde(default)]
    pub has_360: bool,
    pub view_360_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

// settings: the site carries at most a handful of rows and the public
// pages only read the first, so the admin surface exposes get + save.

pub async fn get_settings<C>(conn: &C) -> Result<Option<settings::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    settings::Entity::find().one(conn).await.map_err(db_err)
}

pub async fn save_settings<C>(conn: &C, input: SettingsInput) -> Result<settings::Model, ServiceError>
where
    C: ConnectionTrait,
{
    let existing = settings::Entity::find().one(conn).await.map_err(db_err)?;
    let am = settings::ActiveModel {
        id: Set(existing.as_ref().map(|m| m.id).unwrap_or_else(Uuid::new_v4)),
        title: Set(input.title),
        description: Set(input.description),
        logo: Set(input.logo),
        icon: Set(input.icon),
        phone: Set(input.phone),
        email: Set(input.email),
        location: Set(input.location),
        instagram: Set(input.instagram),
    };
    let saved = match existing {
        Some(_) => settings::Entity::update(am).exec(conn).await.map_err(db_err)?,
        None => settings::Entity::insert(am)
            .exec_with_returning(conn)
            .await
            .map_err(db_err)?,
    };
    info!(id = %saved.id, "settings saved");
    Ok(saved)
}

pub async fn list_banners<C>(conn: &C) -> Result<Vec<banner::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    banner::Entity::find()
        .order_by_asc(banner::Column::Title)
        .all(conn)
        .await
        .map_err(db_err)
}

pub async fn get_banner<C>(conn: &C, id: Uuid) -> Result<banner::Model, ServiceError>
where
    C: ConnectionTrait,
{
    banner::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("banner"))
}

pub async fn create_banner<C>(conn: &C, input: BannerInput) -> Result<banner::Model, ServiceError>
where
    C: ConnectionTrait,
{
    let am = banner::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        subtitle: Set(input.subtitle),
        image: Set(input.image),
    };
    banner::Entity::insert(am)
        .exec_with_returning(conn)
        .await
        .map_err(db_err)
}

pub async fn update_banner<C>(
    conn: &C,
    id: Uuid,
    input: BannerInput,
) -> Result<banner::Model, ServiceError>
where
    C: ConnectionTrait,
{
    let existing = get_banner(conn, id).await?;
    let am = banner::ActiveModel {
        id: Set(existing.id),
        title: Set(input.title),
        subtitle: Set(input.subtitle),
        image: Set(input.image),
    };
    banner::Entity::update(am).exec(conn).await.map_err(db_err)
}

pub async fn delete_banner<C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    let res = banner::Entity::delete_by_id(id).exec(conn).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("banner"));
    }
    Ok(())
}

pub async fn list_categories<C>(conn: &C) -> Result<Vec<category::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    category::Entity::find()
        .order_by_asc(category::Column::Order)
        .order_by_asc(category::Column::Name)
        .all(conn)
        .await
        .map_err(db_err)
}

pub async fn get_category<C>(conn: &C, id: Uuid) -> Result<category::Model, ServiceError>
where
    C: ConnectionTrait,
{
    category::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("category"))
}

pub async fn create_category<C>(conn: &C, input: CategoryInput) -> Result<category::Model, ServiceError>
where
    C: ConnectionTrait,
{
    category::validate_name(&input.name)?;
    let am = category::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        image: Set(input.image),
        description: Set(input.description),
        is_active: Set(input.is_active),
        order: Set(input.order),
    };
    let created = category::Entity::insert(am)
        .exec_with_returning(conn)
        .await
        .map_err(db_err)?;
    info!(id = %created.id, name = %created.name, "category created");
    Ok(created)
}

pub async fn update_category<C>(
    conn: &C,
    id: Uuid,
    input: CategoryInput,
) -> Result<category::Model, ServiceError>
where
    C: ConnectionTrait,
{
    category::validate_name(&input.name)?;
    let existing = get_category(conn, id).await?;
    let am = category::ActiveModel {
        id: Set(existing.id),
        name: Set(input.name),
        image: Set(input.image),
        description: Set(input.description),
        is_active: Set(input.is_active),
        order: Set(input.order),
    };
    category::Entity::update(am).exec(conn).await.map_err(db_err)
}

pub async fn delete_category<C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    let res = category::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("category"));
    }
    info!(%id, "category deleted");
    Ok(())
}

async fn ensure_category_exists<C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    category::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("category"))
}

/// Paged service listing, optionally narrowed to one category.
/// Returns the page plus the total row count for the filter.
pub async fn list_services<C>(
    conn: &C,
    category_id: Option<Uuid>,
    page: Pagination,
) -> Result<(Vec<service::Model>, u64), ServiceError>
where
    C: ConnectionTrait,
{
    let mut query = service::Entity::find()
        .order_by_asc(service::Column::Order)
        .order_by_asc(service::Column::CreatedAt);
    if let Some(id) = category_id {
        query = query.filter(service::Column::CategoryId.eq(id));
    }
    let total = query.clone().count(conn).await.map_err(db_err)?;
    let (index, per_page) = page.normalize();
    let items = query
        .paginate(conn, per_page)
        .fetch_page(index)
        .await
        .map_err(db_err)?;
    Ok((items, total))
}

pub async fn get_service<C>(conn: &C, id: Uuid) -> Result<service::Model, ServiceError>
where
    C: ConnectionTrait,
{
    service::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("service"))
}

pub async fn create_service<C>(conn: &C, input: ServiceInput) -> Result<service::Model, ServiceError>
where
    C: ConnectionTrait,
{
    service::validate_title(&input.title)?;
    ensure_category_exists(conn, input.category_id).await?;
    let slug_value = match input.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slug::unique_slug(conn, &input.title, None).await?,
    };
    let now = Utc::now().into();
    let am = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        category_id: Set(input.category_id),
        title: Set(input.title),
        slug: Set(slug_value),
        cover_image: Set(input.cover_image),
        cover_video_url: Set(input.cover_video_url),
        has_360: Set(input.has_360),
        view_360_url: Set(input.view_360_url),
        is_active: Set(input.is_active),
        order: Set(input.order),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = service::Entity::insert(am)
        .exec_with_returning(conn)
        .await
        .map_err(db_err)?;
    info!(id = %created.id, slug = %created.slug, "service created");
    Ok(created)
}

pub async fn update_service<C>(
    conn: &C,
    id: Uuid,
    input: ServiceInput,
) -> Result<service::Model, ServiceError>
where
    C: ConnectionTrait,
{
    service::validate_title(&input.title)?;
    let existing = get_service(conn, id).await?;
    ensure_category_exists(conn, input.category_id).await?;
    let slug_value = match input.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        // explicit empty slug asks for regeneration from the title
        Some(_) => slug::unique_slug(conn, &input.title, Some(id)).await?,
        None if existing.slug.trim().is_empty() => {
            slug::unique_slug(conn, &input.title, Some(id)).await?
        }
        None => existing.slug.clone(),
    };
    let am = service::ActiveModel {
        id: Set(existing.id),
        category_id: Set(input.category_id),
        title: Set(input.title),
        slug: Set(slug_value),
        cover_image: Set(input.cover_image),
        cover_video_url: Set(input.cover_video_url),
        has_360: Set(input.has_360),
        view_360_url: Set(input.view_360_url),
        is_active: Set(input.is_active),
        order: Set(input.order),
        created_at: Set(existing.created_at),
        updated_at: Set(Utc::now().into()),
    };
    let updated = service::Entity::update(am).exec(conn).await.map_err(db_err)?;
    info!(id = %updated.id, slug = %updated.slug, "service updated");
    Ok(updated)
}

/// Delete a service. Child rows go with it through the cascading
/// foreign keys.
pub async fn delete_service<C>(conn: &C, id: Uuid) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    let res = service::Entity::delete_by_id(id).exec(conn).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("service"));
    }
    info!(%id, "service deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_input_defaults() {
        let input: ServiceInput = serde_json::from_str(
            r#"{"category_id":"3e7c2f64-1d2a-4f6e-9a71-0b9d54d6a001","title":"Генеральная уборка"}"#,
        )
        .unwrap();
        assert!(input.slug.is_none());
        assert!(input.is_active);
        assert!(!input.has_360);
        assert_eq!(input.order, 0);
    }

    #[test]
    fn category_input_defaults() {
        let input: CategoryInput = serde_json::from_str(r#"{"name":"Офисы"}"#).unwrap();
        assert!(input.is_active);
        assert_eq!(input.order, 0);
    }

    #[test]
    fn blank_title_is_rejected_before_any_query() {
        let err = service::validate_title("   ").unwrap_err();
        assert!(err.to_string().contains("title required"));
    }

    #[tokio::test]
    async fn deleting_a_service_takes_its_children_along() {
        use crate::children::{create_child, get_one, ZoneItemInput};
        use crate::test_support::try_db;
        use models::zone_item::{self, Zone};

        let Some(db) = try_db().await else { return };
        let cat = create_category(
            &db,
            CategoryInput {
                name: "Производства".into(),
                image: None,
                description: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        let svc = create_service(
            &db,
            ServiceInput {
                category_id: cat.id,
                title: "Уборка цеха".into(),
                slug: None,
                cover_image: None,
                cover_video_url: None,
                has_360: false,
                view_360_url: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        let item = create_child::<zone_item::Entity, _>(
            &db,
            svc.id,
            ZoneItemInput {
                zone: Zone::Warehouse,
                text: "Стеллажи".into(),
                order: 0,
                is_active: true,
            },
        )
        .await
        .unwrap();

        delete_service(&db, svc.id).await.unwrap();
        let err = get_one::<zone_item::Entity, _>(&db, item.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        delete_category(&db, cat.id).await.unwrap();
    }

    #[tokio::test]
    async fn empty_slug_on_update_regenerates_from_title() {
        use crate::test_support::try_db;

        let Some(db) = try_db().await else { return };
        let cat = create_category(
            &db,
            CategoryInput {
                name: "Школы".into(),
                image: None,
                description: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        let custom = format!("custom-{}", Uuid::new_v4().simple());
        let svc = create_service(
            &db,
            ServiceInput {
                category_id: cat.id,
                title: "Мытьё окон".into(),
                slug: Some(custom.clone()),
                cover_image: None,
                cover_video_url: None,
                has_360: false,
                view_360_url: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        assert_eq!(svc.slug, custom);

        let updated = update_service(
            &db,
            svc.id,
            ServiceInput {
                category_id: cat.id,
                title: "Мытьё окон".into(),
                slug: Some("".into()),
                cover_image: None,
                cover_video_url: None,
                has_360: false,
                view_360_url: None,
                is_active: true,
                order: 0,
            },
        )
        .await
        .unwrap();
        assert!(updated.slug.starts_with("mytyo-okon"));

        delete_service(&db, svc.id).await.unwrap();
        delete_category(&db, cat.id).await.unwrap();
    }
}
