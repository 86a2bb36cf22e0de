//! Tests for CartService::get_cart and the cart view model built from it.

use eventcatalog::client::{
    components::CartComponentViewModel,
    service::{CartError, CartService},
};
use serde_json::json;

use super::*;

fn cart_body() -> serde_json::Value {
    json!({
        "buyerId": "buyer-1",
        "items": [
            {
                "id": "1",
                "productId": "7",
                "productName": "Concert ticket",
                "unitPrice": 20.0,
                "oldUnitPrice": 25.0,
                "quantity": 2,
                "pictureUrl": "http://localhost:7000/api/pic/7"
            },
            {
                "id": "2",
                "productId": "9",
                "productName": "Festival pass",
                "unitPrice": 5.5,
                "oldUnitPrice": 5.5,
                "quantity": 1,
                "pictureUrl": "http://localhost:7000/api/pic/9"
            }
        ]
    })
}

/// Tests retrieving a buyer's cart and summarizing it.
///
/// Expected: Ok with two items totalling 45.5
#[tokio::test]
async fn returns_cart_summary() -> Result<(), TestError> {
    let body = cart_body().to_string();
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/api/v1/basket/buyer-1")
                .match_header("authorization", "Bearer token")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let service = CartService::new(
        HttpClient::default(),
        format!("{}/api/v1/", test.server_url()),
    );
    let cart = service.get_cart("buyer-1", Some("token")).await;
    let vm = CartComponentViewModel::from_cart(cart).unwrap();

    assert_eq!(vm.items_in_cart, 2);
    assert_eq!(vm.total_cost, 45.5);
    assert!(!vm.is_basket_inoperative);
    test.assert_mocks();

    Ok(())
}

/// Tests that a buyer without a cart gets an empty one.
///
/// Expected: Ok with no items
#[tokio::test]
async fn missing_cart_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v1/basket/buyer-1")
                .with_status(404)
                .create()
        })
        .build()
        .await?;

    let service = CartService::new(
        HttpClient::default(),
        format!("{}/api/v1/", test.server_url()),
    );
    let cart = service.get_cart("buyer-1", None).await.unwrap();

    assert_eq!(cart.buyer_id, "buyer-1");
    assert!(cart.items.is_empty());

    Ok(())
}

/// Tests that an open circuit makes the basket inoperative without sending a request.
///
/// Expected: Err(CartError::ServiceUnavailable) and an inoperative view model
#[tokio::test]
async fn open_circuit_makes_basket_inoperative() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v1/basket/buyer-1")
                .with_status(503)
                .expect(2)
                .create()
        })
        .build()
        .await?;

    let service = CartService::new(
        client_with_breaker(2, Duration::from_secs(30)),
        format!("{}/api/v1/", test.server_url()),
    );

    for _ in 0..2 {
        let result = service.get_cart("buyer-1", None).await;
        assert!(matches!(result, Err(CartError::Request(_))));
    }

    let result = service.get_cart("buyer-1", None).await;
    assert!(matches!(result, Err(CartError::ServiceUnavailable)));

    let vm = CartComponentViewModel::from_cart(result).unwrap();
    assert!(vm.is_basket_inoperative);
    assert_eq!(vm, CartComponentViewModel {
        is_basket_inoperative: true,
        ..CartComponentViewModel::default()
    });

    // Only the two failing calls reached the server
    test.assert_mocks();

    Ok(())
}

/// Tests that errors other than an open circuit propagate from the view model.
///
/// Expected: Err(CartError::Request) for a malformed cart body
#[tokio::test]
async fn malformed_cart_propagates_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v1/basket/buyer-1")
                .with_status(200)
                .with_body("not json")
                .create()
        })
        .build()
        .await?;

    let service = CartService::new(
        HttpClient::default(),
        format!("{}/api/v1/", test.server_url()),
    );
    let result = CartComponentViewModel::from_cart(service.get_cart("buyer-1", None).await);

    assert!(matches!(
        result,
        Err(CartError::Request(HttpClientError::Deserialize { .. }))
    ));

    Ok(())
}
