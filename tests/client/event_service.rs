//! Tests for EventService.

use eventcatalog::{
    client::service::{EventService, SelectOption},
    model::catalog::PageDto,
};
use mockito::Matcher;
use serde_json::json;

use super::*;

fn event_service(test: &TestContext) -> EventService {
    EventService::new(
        HttpClient::default(),
        format!("{}/api/eventitems/", test.server_url()),
    )
}

/// Tests that a category filter targets the category route with the page query.
///
/// Expected: Ok with the page deserialized
#[tokio::test]
async fn get_event_items_by_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/eventitems/eventcategories/2")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("pageIndex".to_string(), "1".to_string()),
                    Matcher::UrlEncoded("pageSize".to_string(), "4".to_string()),
                ]))
                .with_status(200)
                .with_body(
                    json!({ "pageIndex": 1, "pageSize": 0, "count": 4, "data": [] }).to_string(),
                )
                .create()
        })
        .build()
        .await?;

    let page = event_service(&test)
        .get_event_items(1, 4, Some(2), Some(3))
        .await
        .unwrap();

    assert_eq!(page, PageDto {
        page_index: 1,
        page_size: 0,
        count: 4,
        data: Vec::new(),
    });
    test.assert_mocks();

    Ok(())
}

/// Tests that the unfiltered listing targets the items route.
///
/// Expected: Ok with the items route called once
#[tokio::test]
async fn get_event_items_unfiltered() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/eventitems/items")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body(
                    json!({ "pageIndex": 0, "pageSize": 0, "count": 0, "data": [] }).to_string(),
                )
                .create()
        })
        .build()
        .await?;

    let page = event_service(&test)
        .get_event_items(0, 4, None, None)
        .await
        .unwrap();

    assert_eq!(page.count, 0);
    test.assert_mocks();

    Ok(())
}

/// Tests that event types are offered behind a selected "All" option.
///
/// Expected: Ok with "All" first and the types after it
#[tokio::test]
async fn get_event_types_leads_with_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/eventitems/eventtypes")
                .with_status(200)
                .with_body(json!([{ "id": 1, "name": "Concert" }]).to_string())
                .create()
        })
        .build()
        .await?;

    let options = event_service(&test).get_event_types().await.unwrap();

    assert_eq!(
        options,
        vec![
            SelectOption::all(),
            SelectOption {
                value: Some(1),
                text: "Concert".to_string(),
                selected: false,
            },
        ]
    );

    Ok(())
}

/// Tests that an unsuccessful status surfaces as an error.
///
/// Expected: Err(HttpClientError::UnexpectedStatus)
#[tokio::test]
async fn get_event_categories_fails_on_error_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/eventitems/eventcategories")
                .with_status(504)
                .create()
        })
        .build()
        .await?;

    let result = event_service(&test).get_event_categories().await;

    assert!(matches!(
        result,
        Err(HttpClientError::UnexpectedStatus { .. })
    ));

    Ok(())
}
