//! Postgres store tests
//!
//! Migrations, the unique email constraint and book persistence against a
//! real database. Each test returns early when `DATABASE_URL` is unset.

use std::sync::Arc;

use axum::http::StatusCode;
use book_catalog::backend::auth::password::hash_password;
use book_catalog::backend::auth::users::{NewUser, UserStore};
use book_catalog::backend::auth::{CredentialError, CredentialStore, LoginRequest, RegisterRequest};
use book_catalog::backend::books::{BookStore, Genre, NewBook};
use book_catalog::backend::store::{PgStore, StoreError};
use book_catalog::shared::config::AppConfig;
use pretty_assertions::assert_eq;

use crate::common::*;

async fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Ada".to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD.to_string(), TEST_COST).await.unwrap(),
    }
}

fn registration(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some("Ada".to_string()),
        email: Some(email.to_string()),
        password: Some(TEST_PASSWORD.to_string()),
    }
}

async fn credentials(store: PgStore) -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(Arc::new(store), TEST_COST).await.unwrap())
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let Some(store) = pg_store().await else { return };

    store.migrate().await.expect("second migration run is a no-op");

    for table in ["users", "books"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {table} LIMIT 1"))
            .execute(store.pool())
            .await;
        assert!(result.is_ok(), "{table} table should exist");
    }
}

#[tokio::test]
async fn test_unique_constraint_reports_duplicate_email() {
    let Some(store) = pg_store().await else { return };
    let email = unique_email("dup");

    let user = store.insert_user(new_user(&email).await).await.unwrap();
    assert_eq!(user.email, email);
    assert!(store.email_exists(&email).await.unwrap());

    let err = store.insert_user(new_user(&email).await).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { field: "email" }), "got {err:?}");
}

#[tokio::test]
async fn test_credentials_roundtrip_without_exposing_hash() {
    let Some(store) = pg_store().await else { return };
    let email = unique_email("login");
    let credentials = credentials(store.clone()).await;

    let user = credentials.register(registration(&email.to_uppercase())).await.unwrap();
    assert_eq!(user.email, email);

    let stored = store.find_credentials_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.user, user);
    assert!(stored.password_hash.as_str().starts_with("$2"));

    let verified = credentials
        .verify_credentials(LoginRequest {
            email: Some(email.clone()),
            password: Some(TEST_PASSWORD.to_string()),
        })
        .await
        .unwrap();
    assert_eq!(verified.id, user.id);
}

#[tokio::test]
async fn test_register_duplicate_over_postgres() {
    let Some(store) = pg_store().await else { return };
    let email = unique_email("again");
    let credentials = credentials(store).await;

    credentials.register(registration(&email)).await.unwrap();
    let err = credentials.register(registration(&email)).await.unwrap_err();

    assert!(matches!(err, CredentialError::DuplicateEmail), "got {err:?}");
}

#[tokio::test]
async fn test_concurrent_registration_one_wins_over_postgres() {
    let Some(store) = pg_store().await else { return };
    let email = unique_email("race");
    let credentials = credentials(store).await;

    let (first, second) = tokio::join!(
        credentials.register(registration(&email)),
        credentials.register(registration(&email)),
    );

    let wins = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "first: {first:?}, second: {second:?}");
    let loser = if first.is_ok() { second } else { first };
    assert!(matches!(loser, Err(CredentialError::DuplicateEmail)));
}

#[tokio::test]
async fn test_router_over_postgres_returns_conflict() {
    let Some(url) = database_url() else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return;
    };
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(TEST_COST)
        .database_url(url)
        .build()
        .unwrap();
    let server = test_server_with(config).await;
    let email = unique_email("http");

    let first = register(&server, "Ada", &email, TEST_PASSWORD).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = register(&server, "Ada", &email, TEST_PASSWORD).await;
    assert_failure(&second, StatusCode::CONFLICT, "A user with this email already exists");
}

#[tokio::test]
async fn test_book_crud_roundtrip() {
    let Some(store) = pg_store().await else { return };

    let book = store
        .insert_book(NewBook {
            title: format!("Ledger {}", uuid::Uuid::new_v4().simple()),
            author: "Luca Pacioli".to_string(),
            genre: Genre::NonFiction,
            price: 42.0,
            in_stock: true,
        })
        .await
        .unwrap();

    let found = store.find_book(book.id).await.unwrap().unwrap();
    assert_eq!(found.title, book.title);
    assert_eq!(found.genre, Genre::NonFiction);
    assert!(store.list_books().await.unwrap().iter().any(|b| b.id == book.id));

    let mut changed = found.clone();
    changed.price = 0.0;
    changed.in_stock = false;
    let updated = store.update_book(&changed).await.unwrap().unwrap();
    assert_eq!(updated.price, 0.0);
    assert!(!updated.in_stock);
    assert!(updated.updated_at >= book.updated_at);

    let removed = store.delete_book(book.id).await.unwrap().unwrap();
    assert_eq!(removed.id, book.id);
    assert!(store.find_book(book.id).await.unwrap().is_none());
    assert!(store.delete_book(book.id).await.unwrap().is_none());
    assert!(store.update_book(&changed).await.unwrap().is_none());
}
