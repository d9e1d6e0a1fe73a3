use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(uuid(Settings::Id).primary_key())
                    .col(string_len(Settings::Title, 255).not_null())
                    .col(text_null(Settings::Description))
                    .col(string_null(Settings::Logo))
                    .col(string_null(Settings::Icon))
                    .col(string_len(Settings::Phone, 255).not_null())
                    .col(string_len_null(Settings::Email, 255))
                    .col(string_len(Settings::Location, 255).not_null())
                    .col(string_null(Settings::Instagram))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Settings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
    Title,
    Description,
    Logo,
    Icon,
    Phone,
    Email,
    Location,
    Instagram,
}
