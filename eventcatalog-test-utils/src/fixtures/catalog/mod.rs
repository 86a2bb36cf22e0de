//! Catalog database fixtures.
//!
//! Inserted records use explicit primary keys so tests can refer to them directly. Lookup
//! rows referenced by an event item are created on demand.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AddressModel, EventCategoryModel, EventItemModel, EventTypeModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_event_type(&self, id: i32, name: &str) -> Result<EventTypeModel, TestError> {
        Ok(
            entity::prelude::EventType::insert(entity::event_type::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_event_category(
        &self,
        id: i32,
        name: &str,
    ) -> Result<EventCategoryModel, TestError> {
        Ok(
            entity::prelude::EventCategory::insert(entity::event_category::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_address(&self, address: AddressModel) -> Result<AddressModel, TestError> {
        Ok(
            entity::prelude::Address::insert(entity::address::ActiveModel {
                id: ActiveValue::Set(address.id),
                street: ActiveValue::Set(address.street),
                city: ActiveValue::Set(address.city),
                state: ActiveValue::Set(address.state),
                zip: ActiveValue::Set(address.zip),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an event item, creating its type, category and address when missing.
    pub async fn insert_event_item(&self, item: EventItemModel) -> Result<EventItemModel, TestError> {
        self.ensure_lookups(&item).await?;

        Ok(
            entity::prelude::EventItem::insert(entity::event_item::ActiveModel {
                id: ActiveValue::Set(item.id),
                name: ActiveValue::Set(item.name),
                description: ActiveValue::Set(item.description),
                price: ActiveValue::Set(item.price),
                image_url: ActiveValue::Set(item.image_url),
                start_time: ActiveValue::Set(item.start_time),
                end_time: ActiveValue::Set(item.end_time),
                type_id: ActiveValue::Set(item.type_id),
                category_id: ActiveValue::Set(item.category_id),
                address_id: ActiveValue::Set(item.address_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    async fn ensure_lookups(&self, item: &EventItemModel) -> Result<(), TestError> {
        let db = &self.setup.db;

        if entity::prelude::EventType::find_by_id(item.type_id)
            .one(db)
            .await?
            .is_none()
        {
            self.insert_event_type(item.type_id, &format!("Type {}", item.type_id))
                .await?;
        }

        if entity::prelude::EventCategory::find_by_id(item.category_id)
            .one(db)
            .await?
            .is_none()
        {
            self.insert_event_category(item.category_id, &format!("Category {}", item.category_id))
                .await?;
        }

        if entity::prelude::Address::find_by_id(item.address_id)
            .one(db)
            .await?
            .is_none()
        {
            self.insert_address(factory::mock_address(item.address_id, "Seattle"))
                .await?;
        }

        Ok(())
    }
}
