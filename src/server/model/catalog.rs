//! Catalog query types.
//!
//! A catalog query is made of a [`FilterSpec`] deciding which event items match, an
//! [`EventItemOrder`] deciding their order, and a [`PageRequest`] deciding which slice is
//! returned. Filters whose value is absent widen to the whole catalog instead of failing.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{sea_query::Expr, ColumnTrait, Condition, DbBackend};

use crate::server::error::catalog::CatalogError;

/// Settings applied by the catalog query service.
#[derive(Clone, Debug)]
pub struct CatalogSettings {
    /// Base URL substituted for the placeholder host in stored image URLs.
    pub external_catalog_base_url: String,
    /// Upper bound for each store round-trip.
    pub query_timeout: Duration,
}

/// Which event items a catalog query matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSpec {
    /// Every event item.
    None,
    /// Items starting in the given month of any year.
    ByMonth(Option<u32>),
    /// Items starting on the given calendar date, applied only when all parts are present.
    ByExactDate {
        /// Day of month.
        day: Option<u32>,
        /// Month of year.
        month: Option<u32>,
        /// Year.
        year: Option<i32>,
    },
    /// Items of the given event type.
    ByType(Option<i32>),
    /// Items of the given event category.
    ByCategory(Option<i32>),
    /// Items whose address is in the given city. An empty city matches nothing.
    ByCity(String),
}

impl FilterSpec {
    /// Rejects filter values that are present but out of range.
    ///
    /// Absent values are always valid since they widen to the unfiltered query.
    ///
    /// # Returns
    /// - `Ok(())` - The filter can be evaluated
    /// - `Err(CatalogError::InvalidMonth)` - Month outside of 1 to 12
    /// - `Err(CatalogError::InvalidDate)` - Day, month and year don't form a calendar date
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self {
            Self::ByMonth(Some(month)) if !(1..=12).contains(month) => {
                Err(CatalogError::InvalidMonth(i64::from(*month)))
            }
            Self::ByExactDate { .. } => self.exact_date().map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Whether the filter can never match, allowing the store to be skipped entirely.
    pub fn matches_nothing(&self) -> bool {
        matches!(self, Self::ByCity(city) if city.is_empty())
    }

    /// Whether evaluating [`Self::condition`] requires the address table to be joined.
    pub fn requires_address_join(&self) -> bool {
        matches!(self, Self::ByCity(_))
    }

    /// Maps the filter to a store predicate.
    ///
    /// Returns `None` when the filter leaves the query unfiltered, either because it is
    /// [`FilterSpec::None`] or because its value is absent. Date components are compared
    /// against start times as they are persisted, without timezone normalization.
    ///
    /// Call [`Self::validate`] first; an invalid exact date is treated as absent here.
    pub fn condition(&self, backend: DbBackend) -> Option<Condition> {
        use entity::event_item::Column;

        match self {
            Self::None => None,
            Self::ByMonth(month) => month.map(|month| start_month_equals(backend, month)),
            Self::ByExactDate { .. } => {
                let date = self.exact_date().ok().flatten()?;
                let start_of_day = date.and_time(NaiveTime::MIN);

                let mut condition = Condition::all().add(Column::StartTime.gte(start_of_day));
                if let Some(next_day) = date.succ_opt() {
                    condition =
                        condition.add(Column::StartTime.lt(next_day.and_time(NaiveTime::MIN)));
                }

                Some(condition)
            }
            Self::ByType(type_id) => {
                type_id.map(|type_id| Condition::all().add(Column::TypeId.eq(type_id)))
            }
            Self::ByCategory(category_id) => category_id
                .map(|category_id| Condition::all().add(Column::CategoryId.eq(category_id))),
            Self::ByCity(city) => Some(
                Condition::all().add(entity::address::Column::City.eq(city.as_str())),
            ),
        }
    }

    /// Resolves the exact date filter into a calendar date.
    ///
    /// # Returns
    /// - `Ok(Some(date))` - All components present and valid
    /// - `Ok(None)` - Not an exact date filter, or a component is absent
    /// - `Err(CatalogError::InvalidDate)` - All components present but not a calendar date
    fn exact_date(&self) -> Result<Option<NaiveDate>, CatalogError> {
        let Self::ByExactDate {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        } = *self
        else {
            return Ok(None);
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Some)
            .ok_or(CatalogError::InvalidDate { day, month, year })
    }
}

/// Builds the month comparison for the given backend since each dialect extracts date parts
/// differently.
fn start_month_equals(backend: DbBackend, month: u32) -> Condition {
    let sql = match backend {
        DbBackend::Sqlite => r#"CAST(strftime('%m', "event_item"."start_time") AS INTEGER) = ?"#,
        DbBackend::MySql => "MONTH(`event_item`.`start_time`) = ?",
        _ => r#"EXTRACT(MONTH FROM "event_item"."start_time") = ?"#,
    };

    Condition::all().add(Expr::cust_with_values(sql, [month as i32]))
}

/// Sort key of a catalog query, always ascending with the id as tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventItemOrder {
    /// By event name.
    Name,
    /// By category, then event name.
    Category,
    /// By start time.
    StartTime,
    /// By event id.
    Id,
}

/// Largest offset or page size the store accepts, since both are bound as signed 64-bit.
const MAX_STORE_OFFSET: u64 = i64::MAX as u64;

/// A validated page of a catalog query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u64,
    page_size: u64,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Page size is positive and the page offset is representable
    /// - `Err(CatalogError::InvalidPageSize)` - Page size of zero
    /// - `Err(CatalogError::PageOutOfRange)` - Page size or `page_index * page_size` exceeds
    ///   `i64::MAX`
    pub fn new(page_index: u64, page_size: u64) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }

        let in_range = page_size <= MAX_STORE_OFFSET
            && page_index
                .checked_mul(page_size)
                .is_some_and(|offset| offset <= MAX_STORE_OFFSET);

        if !in_range {
            return Err(CatalogError::PageOutOfRange {
                page_index,
                page_size,
            });
        }

        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Zero-based index of the requested page.
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Maximum number of items on the page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of matching items preceding the page.
    pub fn offset(&self) -> u64 {
        // Bounded by `new`
        self.page_index * self.page_size
    }
}
