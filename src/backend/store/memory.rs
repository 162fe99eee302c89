/**
 * In-Memory Store
 *
 * A process-local implementation of `UserStore` and `BookStore`. Data lives
 * for the lifetime of the process. Every write takes the single write lock,
 * so the email uniqueness check and the insert happen atomically.
 */
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, StoredCredentials, User, UserStore};
use crate::backend::books::db::BookStore;
use crate::backend::books::model::{Book, NewBook};
use crate::backend::store::StoreError;

#[derive(Default)]
struct Inner {
    /// Keyed by normalised email, the unique index
    users: HashMap<String, StoredCredentials>,
    /// Insertion order
    books: Vec<Book>,
}

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.email) {
            return Err(StoreError::Duplicate { field: "email" });
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(
            record.email.clone(),
            StoredCredentials {
                user: record.clone(),
                password_hash: user.password_hash,
            },
        );
        Ok(record)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.users.contains_key(email))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, StoreError> {
        Ok(self.inner.read().await.users.get(email).cloned())
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.inner.read().await.books.clone())
    }

    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        Ok(self.inner.read().await.books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert_book(&self, book: NewBook) -> Result<Book, StoreError> {
        let now = Utc::now();
        let record = Book {
            id: Uuid::new_v4(),
            title: book.title,
            author: book.author,
            genre: book.genre,
            price: book.price,
            in_stock: book.in_stock,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.books.push(record.clone());
        Ok(record)
    }

    async fn update_book(&self, book: &Book) -> Result<Option<Book>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.books.iter_mut().find(|b| b.id == book.id).map(|slot| {
            *slot = book.clone();
            slot.clone()
        }))
    }

    async fn delete_book(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner.books.iter().position(|b| b.id == id);
        Ok(position.map(|index| inner.books.remove(index)))
    }
}
