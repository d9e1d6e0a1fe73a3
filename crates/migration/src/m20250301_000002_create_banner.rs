use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(uuid(Banner::Id).primary_key())
                    .col(string_len(Banner::Title, 255).not_null())
                    .col(string_len_null(Banner::Subtitle, 255))
                    .col(string_null(Banner::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Banner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Banner {
    Table,
    Id,
    Title,
    Subtitle,
    Image,
}
