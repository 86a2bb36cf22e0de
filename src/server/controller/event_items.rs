//! Event items API endpoints.
//!
//! Paged routes accept optional `pageIndex` and `pageSize` query parameters with a
//! per-route default page size. Numeric path values that aren't numbers widen the query to
//! the whole catalog.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            AddressDto, EventCategoryDto, EventItemDto, EventItemWithAddressDto, EventTypeDto,
            PageDto,
        },
    },
    server::{
        controller::util::{pagination::PageParams, path},
        error::Error,
        model::{
            app::AppState,
            catalog::{EventItemOrder, FilterSpec},
        },
        service::catalog::CatalogService,
    },
};

pub static EVENT_ITEMS_TAG: &str = "eventitems";

const FILTER_BY_MONTH_PAGE_SIZE: u64 = 6;
const FILTER_BY_DATE_PAGE_SIZE: u64 = 5;
const FILTER_BY_TYPE_PAGE_SIZE: u64 = 5;
const FILTER_BY_CATEGORY_PAGE_SIZE: u64 = 4;
const FILTER_BY_CITY_PAGE_SIZE: u64 = 4;
const ITEMS_PAGE_SIZE: u64 = 4;

/// Get a page of events starting in a month of any year
#[utoipa::path(
    get,
    path = "/api/eventitems/filterbymonth/{month}",
    tag = EVENT_ITEMS_TAG,
    params(
        ("month" = String, Path, description = "Month from 1 to 12; a non-numeric value lists every event"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of events sorted by name", body = PageDto<EventItemDto>),
        (status = 400, description = "Month out of range or invalid pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_by_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let month = path::month(&month)?;
    let page = params.page_request(FILTER_BY_MONTH_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    let result = service
        .query(FilterSpec::ByMonth(month), EventItemOrder::Name, page)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get a page of events starting on a calendar date
#[utoipa::path(
    get,
    path = "/api/eventitems/filterbydate/{date}",
    tag = EVENT_ITEMS_TAG,
    params(
        ("date" = String, Path, description = "Date as day-month-year; lists every event unless all three parts are numbers"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of events sorted by name", body = PageDto<EventItemDto>),
        (status = 400, description = "Invalid calendar date or pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let (day, month, year) = path::date_parts(&date);
    let page = params.page_request(FILTER_BY_DATE_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    let result = service
        .query(
            FilterSpec::ByExactDate { day, month, year },
            EventItemOrder::Name,
            page,
        )
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get every event type
#[utoipa::path(
    get,
    path = "/api/eventitems/eventtypes",
    tag = EVENT_ITEMS_TAG,
    responses(
        (status = 200, description = "Every event type", body = Vec<EventTypeDto>),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = CatalogService::new(&state.db, &state.catalog);
    let types = service.event_types().await?;

    Ok((StatusCode::OK, Json(types)))
}

/// Get a page of events of an event type
#[utoipa::path(
    get,
    path = "/api/eventitems/eventtypes/{eventTypeId}",
    tag = EVENT_ITEMS_TAG,
    params(
        ("eventTypeId" = String, Path, description = "Event type ID; a non-numeric value lists every event"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of events sorted by name", body = PageDto<EventItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_types_filtered(
    State(state): State<AppState>,
    Path(event_type_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params.page_request(FILTER_BY_TYPE_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    let result = service
        .query(
            FilterSpec::ByType(path::optional_number(&event_type_id)),
            EventItemOrder::Name,
            page,
        )
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get every event category
#[utoipa::path(
    get,
    path = "/api/eventitems/eventcategories",
    tag = EVENT_ITEMS_TAG,
    responses(
        (status = 200, description = "Every event category", body = Vec<EventCategoryDto>),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = CatalogService::new(&state.db, &state.catalog);
    let categories = service.event_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// Get a page of events of an event category
#[utoipa::path(
    get,
    path = "/api/eventitems/eventcategories/{eventCategoryId}",
    tag = EVENT_ITEMS_TAG,
    params(
        ("eventCategoryId" = String, Path, description = "Event category ID; a non-numeric value lists every event"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of events sorted by category, then name", body = PageDto<EventItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_categories_filtered(
    State(state): State<AppState>,
    Path(event_category_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params.page_request(FILTER_BY_CATEGORY_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    let result = service
        .query(
            FilterSpec::ByCategory(path::optional_number(&event_category_id)),
            EventItemOrder::Category,
            page,
        )
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get every address
#[utoipa::path(
    get,
    path = "/api/eventitems/addresses",
    tag = EVENT_ITEMS_TAG,
    responses(
        (status = 200, description = "Every address", body = Vec<AddressDto>),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn addresses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = CatalogService::new(&state.db, &state.catalog);
    let addresses = service.addresses().await?;

    Ok((StatusCode::OK, Json(addresses)))
}

/// Get a page of events in a city, each joined with its address
///
/// A blank city answers with an empty `200` body.
#[utoipa::path(
    get,
    path = "/api/eventitems/addresses/filtered/{city}",
    tag = EVENT_ITEMS_TAG,
    params(
        ("city" = String, Path, description = "City the events take place in"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of events sorted by ID, or an empty body for a blank city", body = PageDto<EventItemWithAddressDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn addresses_filtered(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params.page_request(FILTER_BY_CITY_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    match service.query_by_city(city.trim(), page).await? {
        Some(result) => Ok((StatusCode::OK, Json(result)).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Get a page of every event, soonest first
#[utoipa::path(
    get,
    path = "/api/eventitems/items",
    tag = EVENT_ITEMS_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of events sorted by start time", body = PageDto<EventItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 504, description = "Catalog query timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn items(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params.page_request(ITEMS_PAGE_SIZE)?;

    let service = CatalogService::new(&state.db, &state.catalog);
    let result = service
        .query(FilterSpec::None, EventItemOrder::StartTime, page)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
