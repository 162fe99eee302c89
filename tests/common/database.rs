//! Database test fixtures
//!
//! The Postgres tests run only when `DATABASE_URL` points at a reachable
//! server. Without it every fixture returns `None` and the calling test
//! returns early, so the default `cargo test` needs no database.

use book_catalog::backend::store::PgStore;

/// `DATABASE_URL`, if set and non-empty
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty())
}

/// Connect to the test database and run migrations
///
/// Returns `None` (after a note on stderr) when `DATABASE_URL` is unset.
/// Panics when it is set but the database cannot be reached or migrated.
pub async fn pg_store() -> Option<PgStore> {
    let Some(url) = database_url() else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return None;
    };

    let store = PgStore::connect(&url).await.expect("Failed to connect to test database");
    store.migrate().await.expect("Migrations should run successfully");
    Some(store)
}

/// An email no other test run has used
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4().simple())
}
