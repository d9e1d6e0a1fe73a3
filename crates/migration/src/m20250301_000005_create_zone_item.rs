use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ZoneItem::Table)
                    .if_not_exists()
                    .col(uuid(ZoneItem::Id).primary_key())
                    .col(uuid(ZoneItem::ServiceId).not_null())
                    .col(string_len(ZoneItem::Zone, 30).not_null())
                    .col(string_len(ZoneItem::Text, 255).not_null())
                    .col(integer(ZoneItem::Order).not_null().default(0))
                    .col(boolean(ZoneItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zone_item_service")
                            .from(ZoneItem::Table, ZoneItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ZoneItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ZoneItem {
    Table,
    Id,
    ServiceId,
    Zone,
    Text,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
