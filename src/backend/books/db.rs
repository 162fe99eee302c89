/**
 * Database Operations for Books
 *
 * This module defines the `BookStore` persistence port and its PostgreSQL
 * implementation.
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::books::model::{Book, Genre, NewBook};
use crate::backend::store::{PgStore, StoreError};

/// Persistence port for books
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, oldest first
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    /// One book by ID
    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, StoreError>;

    /// Insert a new book and return it with its assigned ID and timestamps
    async fn insert_book(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Overwrite a stored book. Returns `None` when it no longer exists.
    async fn update_book(&self, book: &Book) -> Result<Option<Book>, StoreError>;

    /// Delete a book, returning what was removed
    async fn delete_book(&self, id: Uuid) -> Result<Option<Book>, StoreError>;
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    genre: String,
    price: f64,
    in_stock: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = StoreError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let genre = row
            .genre
            .parse::<Genre>()
            .map_err(|e| StoreError::Corrupt(format!("book {} has unknown genre {:?}", row.id, e.0)))?;

        Ok(Book {
            id: row.id,
            title: row.title,
            author: row.author,
            genre,
            price: row.price,
            in_stock: row.in_stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const BOOK_COLUMNS: &str = "id, title, author, genre, price, in_stock, created_at, updated_at";

#[async_trait]
impl BookStore for PgStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.map(Book::try_from).transpose()
    }

    async fn insert_book(&self, book: NewBook) -> Result<Book, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books (id, title, author, genre, price, in_stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre.as_str())
        .bind(book.price)
        .bind(book.in_stock)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool())
        .await?;

        Book::try_from(row)
    }

    async fn update_book(&self, book: &Book) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, price = $5, in_stock = $6, updated_at = $7
            WHERE id = $1
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre.as_str())
        .bind(book.price)
        .bind(book.in_stock)
        .bind(book.updated_at)
        .fetch_optional(self.pool())
        .await?;

        row.map(Book::try_from).transpose()
    }

    async fn delete_book(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "DELETE FROM books WHERE id = $1 RETURNING {BOOK_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Book::try_from).transpose()
    }
}
