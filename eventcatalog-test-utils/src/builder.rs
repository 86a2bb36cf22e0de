//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    model::{AddressModel, EventItemModel},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// catalog fixtures, and HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    event_types: Vec<(i32, String)>,
    event_categories: Vec<(i32, String)>,
    addresses: Vec<AddressModel>,
    event_items: Vec<EventItemModel>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            event_types: Vec::new(),
            event_categories: Vec::new(),
            addresses: Vec::new(),
            event_items: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Add all catalog tables to the test database.
    ///
    /// Creates EventType, EventCategory, Address and EventItem, in foreign key order.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use eventcatalog_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), eventcatalog_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(EventType)
    ///     .with_table(EventCategory)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an event type lookup row.
    pub fn with_event_type(mut self, id: i32, name: impl Into<String>) -> Self {
        self.event_types.push((id, name.into()));
        self
    }

    /// Insert an event category lookup row.
    pub fn with_event_category(mut self, id: i32, name: impl Into<String>) -> Self {
        self.event_categories.push((id, name.into()));
        self
    }

    /// Insert an address row.
    pub fn with_address(mut self, address: AddressModel) -> Self {
        self.addresses.push(address);
        self
    }

    /// Insert an event item.
    ///
    /// Lookup rows referenced by the item that were not declared explicitly are created with
    /// generated names during `build()`.
    pub fn with_event_item(mut self, item: EventItemModel) -> Self {
        self.event_items.push(item);
        self
    }

    /// Insert several event items at once.
    pub fn with_event_items(mut self, items: impl IntoIterator<Item = EventItemModel>) -> Self {
        self.event_items.extend(items);
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if specified, then custom tables)
    /// 2. Inserts lookup rows, then event items
    /// 3. Creates mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EventType),
                schema.create_table_from_entity(entity::prelude::EventCategory),
                schema.create_table_from_entity(entity::prelude::Address),
                schema.create_table_from_entity(entity::prelude::EventItem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (id, name) in self.event_types {
            setup.catalog().insert_event_type(id, &name).await?;
        }

        for (id, name) in self.event_categories {
            setup.catalog().insert_event_category(id, &name).await?;
        }

        for address in self.addresses {
            setup.catalog().insert_address(address).await?;
        }

        for item in self.event_items {
            setup.catalog().insert_event_item(item).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
