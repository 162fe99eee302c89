//! Books Module
//!
//! The book catalogue: model and rule set, the `BookStore` port with its
//! Postgres implementation, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! books/
//! ├── mod.rs      - Module exports
//! ├── model.rs    - Book, Genre, BookInput and BOOK_RULES
//! ├── db.rs       - BookStore trait and PgStore implementation
//! └── handlers.rs - CRUD handlers
//! ```
//!
//! Reads are public; create, update and delete sit behind `auth_middleware`
//! (see `routes::book_routes`).

pub mod db;
pub mod handlers;
pub mod model;

pub use db::BookStore;
pub use model::{Book, BookInput, Genre, NewBook};
