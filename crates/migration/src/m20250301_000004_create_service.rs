use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(uuid(Service::CategoryId).not_null())
                    .col(string_len(Service::Title, 255).not_null())
                    .col(string_uniq(Service::Slug).not_null())
                    .col(string_null(Service::CoverImage))
                    .col(string_null(Service::CoverVideoUrl))
                    .col(boolean(Service::Has360).not_null().default(false))
                    .col(string_null(Service::View360Url))
                    .col(boolean(Service::IsActive).not_null().default(true))
                    .col(integer(Service::Order).not_null().default(0))
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_category")
                            .from(Service::Table, Service::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    CategoryId,
    Title,
    Slug,
    CoverImage,
    CoverVideoUrl,
    #[sea_orm(iden = "has_360")]
    Has360,
    #[sea_orm(iden = "view_360_url")]
    View360Url,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}
