use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FaqItem::Table)
                    .if_not_exists()
                    .col(uuid(FaqItem::Id).primary_key())
                    .col(uuid(FaqItem::ServiceId).not_null())
                    .col(string_len(FaqItem::Question, 255).not_null())
                    .col(string_len_null(FaqItem::Answer, 500))
                    .col(integer(FaqItem::Order).not_null().default(0))
                    .col(boolean(FaqItem::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faq_item_service")
                            .from(FaqItem::Table, FaqItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FaqItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FaqItem {
    Table,
    Id,
    ServiceId,
    Question,
    Answer,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
