mod common;

use axum::http::StatusCode;
use common::create_test_server;
use serde_json::Value;

#[tokio::test]
async fn test_list_items() {
    let server = create_test_server().await;

    let response = server.get("/api/item").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Round Widget");
    assert_eq!(items[0]["price"], "2.99");
    assert_eq!(items[1]["name"], "Square Widget");
    assert_eq!(items[1]["price"], "1.99");
}

#[tokio::test]
async fn test_get_item_by_id() {
    let server = create_test_server().await;

    let response = server.get("/api/item/1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Round Widget");
    assert_eq!(json["description"], "A widget that is round");
}

#[tokio::test]
async fn test_get_item_by_id_not_found() {
    let server = create_test_server().await;

    let response = server.get("/api/item/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_get_item_non_numeric_id() {
    let server = create_test_server().await;

    let response = server.get("/api/item/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_items_by_name() {
    let server = create_test_server().await;

    let response = server.get("/api/item/name/Square%20Widget").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);
}

#[tokio::test]
async fn test_get_items_by_name_no_match() {
    let server = create_test_server().await;

    let response = server.get("/api/item/name/Gadget").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json.as_array().unwrap().is_empty());
}
