use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChemicalItem::Table)
                    .if_not_exists()
                    .col(uuid(ChemicalItem::Id).primary_key())
                    .col(uuid(ChemicalItem::ServiceId).not_null())
                    .col(string_len(ChemicalItem::Name, 255).not_null())
                    .col(string_len_null(ChemicalItem::Description, 255))
                    .col(string_null(ChemicalItem::Image))
                    .col(integer(ChemicalItem::Order).not_null().default(0))
                    .col(boolean(ChemicalItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chemical_item_service")
                            .from(ChemicalItem::Table, ChemicalItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ChemicalItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ChemicalItem {
    Table,
    Id,
    ServiceId,
    Name,
    Description,
    Image,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
