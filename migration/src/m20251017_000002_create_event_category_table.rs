use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(EventCategory::Id))
                    .col(string(EventCategory::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventCategory {
    Table,
    Id,
    Name,
}
