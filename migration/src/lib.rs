pub use sea_orm_migration::prelude::*;

mod m20251017_000001_create_event_type_table;
mod m20251017_000002_create_event_category_table;
mod m20251017_000003_create_address_table;
mod m20251017_000004_create_event_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_create_event_type_table::Migration),
            Box::new(m20251017_000002_create_event_category_table::Migration),
            Box::new(m20251017_000003_create_address_table::Migration),
            Box::new(m20251017_000004_create_event_item_table::Migration),
        ]
    }
}
