use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Index names are stable so down() can drop them by name.
const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_service_category_id", "service", "category_id"),
    ("idx_service_is_active", "service", "is_active"),
    ("idx_zone_item_service_id", "zone_item", "service_id"),
    ("idx_chemical_item_service_id", "chemical_item", "service_id"),
    ("idx_equipment_item_service_id", "equipment_item", "service_id"),
    ("idx_faq_item_service_id", "faq_item", "service_id"),
    ("idx_requirement_item_service_id", "requirement_item", "service_id"),
    ("idx_work_condition_item_service_id", "work_condition_item", "service_id"),
    ("idx_excluded_item_service_id", "excluded_item", "service_id"),
    ("idx_case_before_after_service_id", "case_before_after", "service_id"),
    ("idx_client_company_service_id", "client_company", "service_id"),
    ("idx_document_service_id", "document", "service_id"),
    ("idx_price_item_service_id", "price_item", "service_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
