use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseBeforeAfter::Table)
                    .if_not_exists()
                    .col(uuid(CaseBeforeAfter::Id).primary_key())
                    .col(uuid(CaseBeforeAfter::ServiceId).not_null())
                    .col(string_len(CaseBeforeAfter::Title, 255).not_null())
                    .col(string_len_null(CaseBeforeAfter::Description, 255))
                    .col(string_null(CaseBeforeAfter::BeforeImage))
                    .col(string_null(CaseBeforeAfter::AfterImage))
                    .col(integer(CaseBeforeAfter::Order).not_null().default(0))
                    .col(boolean(CaseBeforeAfter::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_before_after_service")
                            .from(CaseBeforeAfter::Table, CaseBeforeAfter::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseBeforeAfter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseBeforeAfter {
    Table,
    Id,
    ServiceId,
    Title,
    Description,
    BeforeImage,
    AfterImage,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
