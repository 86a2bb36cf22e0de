//! Catalog query service.
//!
//! Answers catalog queries by combining a filter, a sort order and a page request. Every page
//! is made of two independent store operations over the same predicate: a count of all
//! matching items and the slice of items on the requested page. Image URLs of returned items
//! are resolved against the external catalog base URL; lookup lists are returned as stored.


use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{
        AddressDto, EventCategoryDto, EventItemDto, EventItemWithAddressDto, EventTypeDto, PageDto,
    },
    server::{
        data::catalog::{
            address::AddressRepository, event_category::EventCategoryRepository,
            event_item::EventItemRepository, event_type::EventTypeRepository,
        },
        error::Error,
        model::{
            catalog::{CatalogSettings, EventItemOrder, FilterSpec, PageRequest},
            db::{AddressModel, EventItemModel},
        },
        util::{deadline::with_deadline, image_url},
    },
};

/// Service answering paginated catalog queries and lookup list requests.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a CatalogSettings,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `settings` - External catalog base URL and per round-trip deadline
    pub fn new(db: &'a DatabaseConnection, settings: &'a CatalogSettings) -> Self {
        Self { db, settings }
    }

    /// Retrieves one page of the event items matching `filter`.
    ///
    /// Filters whose value is absent return the same page as [`FilterSpec::None`]. A city
    /// filter with an empty city returns an empty page without querying the store.
    ///
    /// # Arguments
    /// - `filter` - Which event items match
    /// - `order` - Sort key of the page, with the id as tie-break
    /// - `page` - Requested page index and size
    ///
    /// # Returns
    /// - `Ok(PageDto)` - The page, possibly empty when `page` lies past the last match
    /// - `Err(Error::CatalogError)` - Month or date out of range
    /// - `Err(Error::Timeout)` - A store round-trip exceeded the deadline
    /// - `Err(Error::DbErr)` - Store failure
    pub async fn query(
        &self,
        filter: FilterSpec,
        order: EventItemOrder,
        page: PageRequest,
    ) -> Result<PageDto<EventItemDto>, Error> {
        filter.validate()?;

        if filter.matches_nothing() {
            return Ok(PageDto::empty(page.page_index()));
        }

        tracing::debug!(
            "Querying event items with {:?} ordered by {:?}, page {} of size {}",
            filter,
            order,
            page.page_index(),
            page.page_size()
        );

        let repo = EventItemRepository::new(self.db);
        let deadline = self.settings.query_timeout;

        let count = with_deadline(deadline, repo.count(&filter)).await?;
        let items = with_deadline(deadline, repo.get_page(&filter, order, &page)).await?;

        let data = items
            .into_iter()
            .map(|item| self.event_item_dto(item))
            .collect();

        Ok(PageDto::new(page.page_index(), count, data))
    }

    /// Retrieves one page of the event items located in `city` together with their address.
    ///
    /// # Returns
    /// - `Ok(Some(PageDto))` - Page of items sorted by id
    /// - `Ok(None)` - `city` is empty
    /// - `Err(Error::Timeout)` - A store round-trip exceeded the deadline
    /// - `Err(Error::DbErr)` - Store failure
    pub async fn query_by_city(
        &self,
        city: &str,
        page: PageRequest,
    ) -> Result<Option<PageDto<EventItemWithAddressDto>>, Error> {
        if city.is_empty() {
            return Ok(None);
        }

        tracing::debug!(
            "Querying event items in city {:?}, page {} of size {}",
            city,
            page.page_index(),
            page.page_size()
        );

        let repo = EventItemRepository::new(self.db);
        let deadline = self.settings.query_timeout;
        let filter = FilterSpec::ByCity(city.to_string());

        let count = with_deadline(deadline, repo.count(&filter)).await?;
        let rows = with_deadline(deadline, repo.get_page_with_address(city, &page)).await?;

        let data = rows
            .into_iter()
            .map(|(item, address)| self.event_item_with_address_dto(item, address))
            .collect();

        Ok(Some(PageDto::new(page.page_index(), count, data)))
    }

    /// Retrieves every event type, sorted by id.
    pub async fn event_types(&self) -> Result<Vec<EventTypeDto>, Error> {
        let repo = EventTypeRepository::new(self.db);
        let types = with_deadline(self.settings.query_timeout, repo.get_all()).await?;

        Ok(types
            .into_iter()
            .map(|t| EventTypeDto {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    /// Retrieves every event category, sorted by id.
    pub async fn event_categories(&self) -> Result<Vec<EventCategoryDto>, Error> {
        let repo = EventCategoryRepository::new(self.db);
        let categories = with_deadline(self.settings.query_timeout, repo.get_all()).await?;

        Ok(categories
            .into_iter()
            .map(|c| EventCategoryDto {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Retrieves every address, sorted by id.
    pub async fn addresses(&self) -> Result<Vec<AddressDto>, Error> {
        let repo = AddressRepository::new(self.db);
        let addresses = with_deadline(self.settings.query_timeout, repo.get_all()).await?;

        Ok(addresses.into_iter().map(address_dto).collect())
    }

    fn event_item_dto(&self, item: EventItemModel) -> EventItemDto {
        EventItemDto {
            id: item.id,
            image_url: image_url::resolve(
                &item.image_url,
                &self.settings.external_catalog_base_url,
            ),
            name: item.name,
            description: item.description,
            price: item.price,
            start_time: item.start_time,
            end_time: item.end_time,
            type_id: item.type_id,
            category_id: item.category_id,
            address_id: item.address_id,
        }
    }

    fn event_item_with_address_dto(
        &self,
        item: EventItemModel,
        address: AddressModel,
    ) -> EventItemWithAddressDto {
        EventItemWithAddressDto {
            event_id: item.id,
            event_image: image_url::resolve(
                &item.image_url,
                &self.settings.external_catalog_base_url,
            ),
            event_name: item.name,
            description: item.description,
            price: item.price,
            start_time: item.start_time,
            end_time: item.end_time,
            type_id: item.type_id,
            category_id: item.category_id,
            address_id: address.id,
            street: address.street,
            city: address.city,
            state: address.state,
            zip: address.zip,
        }
    }
}

fn address_dto(address: AddressModel) -> AddressDto {
    AddressDto {
        id: address.id,
        street: address.street,
        city: address.city,
        state: address.state,
        zip: address.zip,
    }
}
