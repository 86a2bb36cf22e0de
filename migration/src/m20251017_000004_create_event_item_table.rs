use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_create_event_type_table::EventType,
    m20251017_000002_create_event_category_table::EventCategory,
    m20251017_000003_create_address_table::Address,
};

static IDX_EVENT_ITEM_TYPE_ID: &str = "idx_event_item_type_id";
static IDX_EVENT_ITEM_CATEGORY_ID: &str = "idx_event_item_category_id";
static IDX_EVENT_ITEM_ADDRESS_ID: &str = "idx_event_item_address_id";
static IDX_EVENT_ITEM_START_TIME: &str = "idx_event_item_start_time";
static FK_EVENT_ITEM_TYPE_ID: &str = "fk_event_item_type_id";
static FK_EVENT_ITEM_CATEGORY_ID: &str = "fk_event_item_category_id";
static FK_EVENT_ITEM_ADDRESS_ID: &str = "fk_event_item_address_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventItem::Table)
                    .if_not_exists()
                    .col(pk_auto(EventItem::Id))
                    .col(string(EventItem::Name))
                    .col(text(EventItem::Description))
                    .col(double(EventItem::Price))
                    .col(string(EventItem::ImageUrl))
                    .col(date_time(EventItem::StartTime))
                    .col(date_time(EventItem::EndTime))
                    .col(integer(EventItem::TypeId))
                    .col(integer(EventItem::CategoryId))
                    .col(integer(EventItem::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ITEM_TYPE_ID)
                            .from(EventItem::Table, EventItem::TypeId)
                            .to(EventType::Table, EventType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ITEM_CATEGORY_ID)
                            .from(EventItem::Table, EventItem::CategoryId)
                            .to(EventCategory::Table, EventCategory::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ITEM_ADDRESS_ID)
                            .from(EventItem::Table, EventItem::AddressId)
                            .to(Address::Table, Address::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_EVENT_ITEM_TYPE_ID, EventItem::TypeId),
            (IDX_EVENT_ITEM_CATEGORY_ID, EventItem::CategoryId),
            (IDX_EVENT_ITEM_ADDRESS_ID, EventItem::AddressId),
            (IDX_EVENT_ITEM_START_TIME, EventItem::StartTime),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(EventItem::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_EVENT_ITEM_START_TIME,
            IDX_EVENT_ITEM_ADDRESS_ID,
            IDX_EVENT_ITEM_CATEGORY_ID,
            IDX_EVENT_ITEM_TYPE_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(EventItem::Table).to_owned())
                .await?;
        }

        // Foreign keys are dropped together with the table.
        manager
            .drop_table(Table::drop().table(EventItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EventItem {
    Table,
    Id,
    Name,
    Description,
    Price,
    ImageUrl,
    StartTime,
    EndTime,
    TypeId,
    CategoryId,
    AddressId,
}
