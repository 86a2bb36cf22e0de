//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/eventitems/filterbymonth/{month}` - Events starting in a month
/// - `GET /api/eventitems/filterbydate/{date}` - Events starting on a `day-month-year` date
/// - `GET /api/eventitems/eventtypes` - Every event type
/// - `GET /api/eventitems/eventtypes/{eventTypeId}` - Events of an event type
/// - `GET /api/eventitems/eventcategories` - Every event category
/// - `GET /api/eventitems/eventcategories/{eventCategoryId}` - Events of an event category
/// - `GET /api/eventitems/addresses` - Every address
/// - `GET /api/eventitems/addresses/filtered/{city}` - Events in a city with their address
/// - `GET /api/eventitems/items` - Every event, soonest first
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, catalog };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Event Catalog", description = "Event items API"), tags(
        (name = controller::event_items::EVENT_ITEMS_TAG, description = "Event catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::event_items::filter_by_month))
        .routes(routes!(controller::event_items::filter_by_date))
        .routes(routes!(controller::event_items::event_types))
        .routes(routes!(controller::event_items::event_types_filtered))
        .routes(routes!(controller::event_items::event_categories))
        .routes(routes!(controller::event_items::event_categories_filtered))
        .routes(routes!(controller::event_items::addresses))
        .routes(routes!(controller::event_items::addresses_filtered))
        .routes(routes!(controller::event_items::items))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
