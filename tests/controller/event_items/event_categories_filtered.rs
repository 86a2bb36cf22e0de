//! Tests for the event_categories_filtered endpoint.

use eventcatalog::server::controller::event_items::event_categories_filtered;

use super::*;

/// Tests filtering by event category with pagination.
///
/// Expected: 200 OK with the second page of the category
#[tokio::test]
async fn returns_page_of_category() -> Result<(), TestError> {
    let start = factory::event_time(2025, 5, 10, 19);
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_event_items((1..=6).map(|id| entity::event_item::Model {
            category_id: if id % 2 == 0 { 2 } else { 1 },
            ..factory::mock_event_item(id, &format!("Event {}", id), start)
        }))
        .build()
        .await?;

    let resp = event_categories_filtered(
        State(test.into_app_state()),
        Path("2".to_string()),
        page_params(Some(1), Some(2)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<EventItemDto> = json_body(resp).await?;
    assert_eq!(page.page_index, 1);
    assert_eq!(page.count, 3);
    let ids: Vec<i32> = page.data.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![6]);

    Ok(())
}

/// Tests that an unknown category yields an empty page rather than an error.
///
/// Expected: 200 OK with count 0
#[tokio::test]
async fn unknown_category_returns_empty_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_event_items(ten_items_three_in_may())
        .build()
        .await?;

    let resp = event_categories_filtered(
        State(test.into_app_state()),
        Path("42".to_string()),
        page_params(None, None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<EventItemDto> = json_body(resp).await?;
    assert_eq!(page, PageDto::empty(0));

    Ok(())
}
