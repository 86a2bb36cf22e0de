//! Tests for the lookup list endpoints.

use eventcatalog::{
    model::catalog::{AddressDto, EventCategoryDto, EventTypeDto},
    server::controller::event_items::{addresses, event_categories, event_types},
};

use super::*;

/// Tests that every lookup list is returned.
///
/// Expected: 200 OK with each table's rows
#[tokio::test]
async fn returns_lookup_lists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_event_type(1, "Concert")
        .with_event_type(2, "Festival")
        .with_event_category(1, "Music")
        .with_address(factory::mock_address(1, "Seattle"))
        .build()
        .await?;

    let resp = event_types(State(test.into_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let types: Vec<EventTypeDto> = json_body(resp).await?;
    assert_eq!(types.len(), 2);

    let resp = event_categories(State(test.into_app_state()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Vec<EventCategoryDto> = json_body(resp).await?;
    assert_eq!(categories[0].name, "Music");

    let resp = addresses(State(test.into_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let addresses: Vec<AddressDto> = json_body(resp).await?;
    assert_eq!(addresses[0].city, "Seattle");

    Ok(())
}

/// Tests that empty lookup tables yield empty lists.
///
/// Expected: 200 OK with `[]`
#[tokio::test]
async fn returns_empty_lists() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = event_types(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let types: Vec<EventTypeDto> = json_body(resp).await?;
    assert!(types.is_empty());

    Ok(())
}
