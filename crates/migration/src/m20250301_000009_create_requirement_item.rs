use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequirementItem::Table)
                    .if_not_exists()
                    .col(uuid(RequirementItem::Id).primary_key())
                    .col(uuid(RequirementItem::ServiceId).not_null())
                    .col(string_len(RequirementItem::Text, 255).not_null())
                    .col(string_len_null(RequirementItem::Description, 500))
                    .col(integer(RequirementItem::Order).not_null().default(0))
                    .col(boolean(RequirementItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requirement_item_service")
                            .from(RequirementItem::Table, RequirementItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RequirementItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RequirementItem {
    Table,
    Id,
    ServiceId,
    Text,
    Description,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
