use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    catalog::{EventItemOrder, FilterSpec, PageRequest},
    db::{AddressModel, EventItemModel},
};

/// Filtered and paginated read access to event items
pub struct EventItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventItemRepository<'a> {
    /// Creates a new instance of [`EventItemRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the event items matching `filter`, regardless of pagination
    pub async fn count(&self, filter: &FilterSpec) -> Result<u64, DbErr> {
        self.filtered(filter).count(self.db).await
    }

    /// Retrieves one page of the event items matching `filter`
    ///
    /// Items are sorted ascending by `order` with the id as tie-break, so consecutive pages
    /// never overlap.
    pub async fn get_page(
        &self,
        filter: &FilterSpec,
        order: EventItemOrder,
        page: &PageRequest,
    ) -> Result<Vec<EventItemModel>, DbErr> {
        sorted(self.filtered(filter), order)
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await
    }

    /// Retrieves one page of the event items located in `city`, each with its address
    ///
    /// Items are sorted by id.
    pub async fn get_page_with_address(
        &self,
        city: &str,
        page: &PageRequest,
    ) -> Result<Vec<(EventItemModel, AddressModel)>, DbErr> {
        let rows = entity::prelude::EventItem::find()
            .find_also_related(entity::prelude::Address)
            .filter(entity::address::Column::City.eq(city))
            .order_by_asc(entity::event_item::Column::Id)
            .offset(page.offset())
            .limit(page.page_size())
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, address)| address.map(|address| (item, address)))
            .collect())
    }

    fn filtered(&self, filter: &FilterSpec) -> Select<entity::event_item::Entity> {
        let mut query = entity::prelude::EventItem::find();

        if filter.requires_address_join() {
            query = query.inner_join(entity::prelude::Address);
        }

        if let Some(condition) = filter.condition(self.db.get_database_backend()) {
            query = query.filter(condition);
        }

        query
    }
}

fn sorted(
    query: Select<entity::event_item::Entity>,
    order: EventItemOrder,
) -> Select<entity::event_item::Entity> {
    use entity::event_item::Column;

    let query = match order {
        EventItemOrder::Name => query.order_by_asc(Column::Name),
        EventItemOrder::Category => query
            .order_by_asc(Column::CategoryId)
            .order_by_asc(Column::Name),
        EventItemOrder::StartTime => query.order_by_asc(Column::StartTime),
        EventItemOrder::Id => return query.order_by_asc(Column::Id),
    };

    query.order_by_asc(Column::Id)
}
