use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentItem::Table)
                    .if_not_exists()
                    .col(uuid(EquipmentItem::Id).primary_key())
                    .col(uuid(EquipmentItem::ServiceId).not_null())
                    .col(string_len(EquipmentItem::Name, 255).not_null())
                    .col(string_len_null(EquipmentItem::Description, 255))
                    .col(string_null(EquipmentItem::Image))
                    .col(integer(EquipmentItem::Order).not_null().default(0))
                    .col(boolean(EquipmentItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_item_service")
                            .from(EquipmentItem::Table, EquipmentItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EquipmentItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EquipmentItem {
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
