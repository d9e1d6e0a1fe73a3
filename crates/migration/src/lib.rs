//! Migrator registering entity-specific migrations in dependency order.
//! Child tables follow `service`; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_settings;
mod m20250301_000002_create_banner;
mod m20250301_000003_create_category;
mod m20250301_000004_create_service;
mod m20250301_000005_create_zone_item;
mod m20250301_000006_create_chemical_item;
mod m20250301_000007_create_equipment_item;
mod m20250301_000008_create_faq_item;
mod m20250301_000009_create_requirement_item;
mod m20250301_000010_create_work_condition_item;
mod m20250301_000011_create_excluded_item;
mod m20250301_000012_create_case_before_after;
mod m20250301_000013_create_client_company;
mod m20250301_000014_create_document;
mod m20250301_000015_create_price_item;
mod m20250301_000016_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_settings::Migration),
            Box::new(m20250301_000002_create_banner::Migration),
            Box::new(m20250301_000003_create_category::Migration),
            Box::new(m20250301_000004_create_service::Migration),
            Box::new(m20250301_000005_create_zone_item::Migration),
            Box::new(m20250301_000006_create_chemical_item::Migration),
            Box::new(m20250301_000007_create_equipment_item::Migration),
            Box::new(m20250301_000008_create_faq_item::Migration),
            Box::new(m20250301_000009_create_requirement_item::Migration),
            Box::new(m20250301_000010_create_work_condition_item::Migration),
            Box::new(m20250301_000011_create_excluded_item::Migration),
            Box::new(m20250301_000012_create_case_before_after::Migration),
            Box::new(m20250301_000013_create_client_company::Migration),
            Box::new(m20250301_000014_create_document::Migration),
            Box::new(m20250301_000015_create_price_item::Migration),
            // Indexes should always be applied last
            Box::new(m20250301_000016_add_indexes::Migration),
        ]
    }
}
