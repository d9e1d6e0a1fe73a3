use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExcludedItem::Table)
                    .if_not_exists()
                    .col(uuid(ExcludedItem::Id).primary_key())
                    .col(uuid(ExcludedItem::ServiceId).not_null())
                    .col(string_len(ExcludedItem::Text, 255).not_null())
                    .col(integer(ExcludedItem::Order).not_null().default(0))
                    .col(boolean(ExcludedItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_excluded_item_service")
                            .from(ExcludedItem::Table, ExcludedItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExcludedItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExcludedItem {
    Table,
    Id,
    ServiceId,
    Text,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
