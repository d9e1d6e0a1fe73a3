use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientCompany::Table)
                    .if_not_exists()
                    .col(uuid(ClientCompany::Id).primary_key())
                    .col(uuid(ClientCompany::ServiceId).not_null())
                    .col(string_len(ClientCompany::Name, 255).not_null())
                    .col(string_len_null(ClientCompany::BusinessType, 255))
                    .col(string_null(ClientCompany::Logo))
                    .col(integer(ClientCompany::Order).not_null().default(0))
                    .col(boolean(ClientCompany::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_company_service")
                            .from(ClientCompany::Table, ClientCompany::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientCompany::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientCompany {
    Table,
    Id,
    ServiceId,
    Name,
    BusinessType,
    Logo,
    Order,
    IsActive,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
