//! Tests for the filter_by_month endpoint.

use eventcatalog::server::controller::event_items::filter_by_month;

use super::*;

/// Tests filtering ten events by a month three of them start in.
///
/// Expected: 200 OK with count 3 and the May events sorted by name
#[tokio::test]
async fn returns_events_in_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_event_items(ten_items_three_in_may())
        .build()
        .await?;

    let resp = filter_by_month(
        State(test.into_app_state()),
        Path("5".to_string()),
        page_params(None, None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<EventItemDto> = json_body(resp).await?;
    assert_eq!(page.page_index, 0);
    assert_eq!(page.page_size, 3);
    assert_eq!(page.count, 3);
    let names: Vec<&str> = page.data.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Event 01", "Event 03", "Event 06"]);

    Ok(())
}

/// Tests that a non-numeric month lists every event with the default page size of 6.
///
/// Expected: 200 OK with count 10 and 6 events
#[tokio::test]
async fn non_numeric_month_lists_every_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_event_items(ten_items_three_in_may())
        .build()
        .await?;

    let resp = filter_by_month(
        State(test.into_app_state()),
        Path("may".to_string()),
        page_params(None, None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<EventItemDto> = json_body(resp).await?;
    assert_eq!(page.count, 10);
    assert_eq!(page.page_size, 6);

    Ok(())
}

/// Tests that a month out of range is rejected.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_out_of_range_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = filter_by_month(
        State(test.into_app_state()),
        Path("13".to_string()),
        page_params(None, None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that a page size of zero is rejected.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = filter_by_month(
        State(test.into_app_state()),
        Path("5".to_string()),
        page_params(Some(0), Some(0)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = filter_by_month(
        State(test.into_app_state()),
        Path("5".to_string()),
        page_params(None, None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
