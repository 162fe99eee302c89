//! Book API integration tests
//!
//! CRUD over the full router: public reads, authenticated writes, partial
//! updates and the 404 paths.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

async fn create_book(server: &TestServer, user: &TestUser, body: Value) -> Value {
    let (name, value) = bearer(&user.token);
    let response = server.post("/api/books").add_header(name, value).json(&body).await;
    assert_success(&response, StatusCode::CREATED, "Book created successfully")
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Science Fiction",
        "price": 9.99
    })
}

#[tokio::test]
async fn test_create_and_get_book() {
    let server = test_server().await;
    let user = create_test_user(&server).await;

    let book = create_book(&server, &user, dune()).await;
    assert_eq!(book["genre"], "Science Fiction");
    assert_eq!(book["inStock"], true);

    let id = book["id"].as_str().unwrap();
    let response = server.get(&format!("/api/books/{id}")).await;
    let fetched = assert_success(&response, StatusCode::OK, "Book retrieved successfully");
    assert_eq!(fetched, book);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let server = test_server().await;
    let user = create_test_user(&server).await;

    for title in ["First", "Second", "Third"] {
        let mut body = dune();
        body["title"] = json!(title);
        create_book(&server, &user, body).await;
    }

    let response = server.get("/api/books").await;
    let data = assert_success(&response, StatusCode::OK, "Books retrieved successfully");
    let titles: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_create_validation() {
    let server = test_server().await;
    let user = create_test_user(&server).await;
    let (name, value) = bearer(&user.token);

    let response = server
        .post("/api/books")
        .add_header(name.clone(), value.clone())
        .json(&json!({}))
        .await;
    for field in ["title", "author", "genre", "price"] {
        assert_field_error(&response, field);
    }

    let mut body = dune();
    body["genre"] = json!("Cookbook");
    let response = server
        .post("/api/books")
        .add_header(name.clone(), value.clone())
        .json(&body)
        .await;
    assert_field_error(&response, "genre");

    let mut body = dune();
    body["price"] = json!(-3);
    let response = server
        .post("/api/books")
        .add_header(name.clone(), value.clone())
        .json(&body)
        .await;
    assert_field_error(&response, "price");

    let mut body = dune();
    body["title"] = json!("t".repeat(101));
    let response = server.post("/api/books").add_header(name, value).json(&body).await;
    assert_field_error(&response, "title");
}

#[tokio::test]
async fn test_update_is_partial() {
    let server = test_server().await;
    let user = create_test_user(&server).await;
    let book = create_book(&server, &user, dune()).await;
    let id = book["id"].as_str().unwrap();

    let (name, value) = bearer(&user.token);
    let response = server
        .put(&format!("/api/books/{id}"))
        .add_header(name, value)
        .json(&json!({ "price": 12.0, "inStock": false, "author": "" }))
        .await;
    let updated = assert_success(&response, StatusCode::OK, "Book updated successfully");

    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["author"], "Frank Herbert");
    assert_eq!(updated["price"], 12.0);
    assert_eq!(updated["inStock"], false);
    assert_eq!(updated["createdAt"], book["createdAt"]);
}

#[tokio::test]
async fn test_update_revalidates_merged_book() {
    let server = test_server().await;
    let user = create_test_user(&server).await;
    let book = create_book(&server, &user, dune()).await;
    let id = book["id"].as_str().unwrap();

    let (name, value) = bearer(&user.token);
    let response = server
        .put(&format!("/api/books/{id}"))
        .add_header(name, value)
        .json(&json!({ "genre": "Poetry" }))
        .await;
    assert_field_error(&response, "genre");
}

#[tokio::test]
async fn test_delete_returns_book() {
    let server = test_server().await;
    let user = create_test_user(&server).await;
    let book = create_book(&server, &user, dune()).await;
    let id = book["id"].as_str().unwrap();

    let (name, value) = bearer(&user.token);
    let response = server
        .delete(&format!("/api/books/{id}"))
        .add_header(name.clone(), value.clone())
        .await;
    let deleted = assert_success(&response, StatusCode::OK, "Book deleted successfully");
    assert_eq!(deleted["id"], book["id"]);

    let response = server.get(&format!("/api/books/{id}")).await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Book not found");

    let response = server.delete(&format!("/api/books/{id}")).add_header(name, value).await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Book not found");
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let server = test_server().await;
    let user = create_test_user(&server).await;

    let response = server.get(&format!("/api/books/{}", Uuid::new_v4())).await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Book not found");

    let response = server.get("/api/books/12345").await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Book not found");

    let (name, value) = bearer(&user.token);
    let response = server
        .put("/api/books/not-a-uuid")
        .add_header(name, value)
        .json(&json!({ "price": 1.0 }))
        .await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Book not found");
}

#[tokio::test]
async fn test_writes_require_token_reads_do_not() {
    let server = test_server().await;
    let user = create_test_user(&server).await;
    let book = create_book(&server, &user, dune()).await;
    let id = book["id"].as_str().unwrap();

    let response = server.put(&format!("/api/books/{id}")).json(&json!({ "price": 1.0 })).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.delete(&format!("/api/books/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.get(&format!("/api/books/{id}")).await;
    let unchanged = assert_success(&response, StatusCode::OK, "Book retrieved successfully");
    assert_eq!(unchanged["price"], 9.99);
}
