use sea_orm_migration::{prelude::*, schema::*};

static IDX_ADDRESS_CITY: &str = "idx_address_city";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(string(Address::Street))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .col(string(Address::Zip))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ADDRESS_CITY)
                    .table(Address::Table)
                    .col(Address::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ADDRESS_CITY)
                    .table(Address::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    Street,
    City,
    State,
    Zip,
}
