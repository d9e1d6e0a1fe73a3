use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkConditionItem::Table)
                    .if_not_exists()
                    .col(uuid(WorkConditionItem::Id).primary_key())
                    .col(uuid(WorkConditionItem::ServiceId).not_null())
                    .col(string_len(WorkConditionItem::Text, 255).not_null())
                    .col(integer(WorkConditionItem::Order).not_null().default(0))
                    .col(boolean(WorkConditionItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_condition_item_service")
                            .from(WorkConditionItem::Table, WorkConditionItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkConditionItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkConditionItem {
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
