use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceItem::Table)
                    .if_not_exists()
                    .col(uuid(PriceItem::Id).primary_key())
                    .col(uuid(PriceItem::ServiceId).not_null())
                    .col(string_len(PriceItem::Title, 255).not_null())
                    .col(string_len(PriceItem::Price, 100).not_null())
                    .col(string_len_null(PriceItem::Description, 500))
                    .col(integer(PriceItem::Order).not_null().default(0))
                    .col(boolean(PriceItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_item_service")
                            .from(PriceItem::Table, PriceItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PriceItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PriceItem {
    Table,
    Id,
    ServiceId,
    Title,
    Price,
    Description,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
