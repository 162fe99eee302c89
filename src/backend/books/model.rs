/**
 * Book Model
 *
 * Defines the book record, its genre catalogue, the request body accepted by
 * create/update and the rule set both are validated against.
 *
 * # Update Semantics
 *
 * An update only replaces fields the client sent: empty strings leave the
 * stored text untouched, `price` and `inStock` are replaced whenever present.
 * The merged record is revalidated before it is written.
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::ValidationErrors;
use crate::shared::validation::{validate, FieldRule, FieldValue, Fields, Rule};

/// Longest accepted title
pub const TITLE_MAX_LENGTH: usize = 100;
/// Longest accepted author name
pub const AUTHOR_MAX_LENGTH: usize = 50;

const GENRE_MESSAGE: &str = "Please provide a valid genre";

/// Constraints checked on every book write
pub const BOOK_RULES: &[FieldRule] = &[
    FieldRule::new("title", Rule::Required, "Please provide a book title"),
    FieldRule::new("title", Rule::MaxLength(TITLE_MAX_LENGTH), "Title cannot exceed 100 characters"),
    FieldRule::new("author", Rule::Required, "Please provide an author name"),
    FieldRule::new(
        "author",
        Rule::MaxLength(AUTHOR_MAX_LENGTH),
        "Author name cannot exceed 50 characters",
    ),
    FieldRule::new("genre", Rule::Required, "Please provide a genre"),
    FieldRule::new("genre", Rule::OneOf(&Genre::NAMES), GENRE_MESSAGE),
    FieldRule::new("price", Rule::Required, "Please provide a price"),
    FieldRule::new("price", Rule::NonNegative, "Price cannot be negative"),
];

/// Book genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Mystery,
    Romance,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Educational,
}

impl Genre {
    /// Wire names of every genre, in catalogue order
    pub const NAMES: [&'static str; 10] = [
        "Fiction",
        "Non-Fiction",
        "Mystery",
        "Romance",
        "Science Fiction",
        "Fantasy",
        "Biography",
        "History",
        "Self-Help",
        "Educational",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::SelfHelp => "Self-Help",
            Genre::Educational => "Educational",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Genre::Fiction),
            "Non-Fiction" => Ok(Genre::NonFiction),
            "Mystery" => Ok(Genre::Mystery),
            "Romance" => Ok(Genre::Romance),
            "Science Fiction" => Ok(Genre::ScienceFiction),
            "Fantasy" => Ok(Genre::Fantasy),
            "Biography" => Ok(Genre::Biography),
            "History" => Ok(Genre::History),
            "Self-Help" => Ok(Genre::SelfHelp),
            "Educational" => Ok(Genre::Educational),
            other => Err(UnknownGenre(other.to_string())),
        }
    }
}

/// A book in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub price: f64,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated book about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub price: f64,
    pub in_stock: bool,
}

/// Request body for creating or updating a book
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl Fields for BookInput {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => self.title.as_deref().into(),
            "author" => self.author.as_deref().into(),
            "genre" => self.genre.as_deref().into(),
            "price" => self.price.into(),
            _ => FieldValue::Missing,
        }
    }
}

impl BookInput {
    fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        Self {
            title: trim(self.title),
            author: trim(self.author),
            genre: trim(self.genre),
            price: self.price,
            in_stock: self.in_stock,
        }
    }

    /// Validate a create request; `inStock` defaults to `true`
    pub fn into_new_book(self) -> Result<NewBook, ValidationErrors> {
        let input = self.trimmed();
        validate(&input, BOOK_RULES)?;

        let genre = input
            .genre
            .as_deref()
            .unwrap_or_default()
            .parse::<Genre>()
            .map_err(|_| ValidationErrors::single("genre", GENRE_MESSAGE))?;

        Ok(NewBook {
            title: input.title.unwrap_or_default(),
            author: input.author.unwrap_or_default(),
            genre,
            price: input.price.unwrap_or_default(),
            in_stock: input.in_stock.unwrap_or(true),
        })
    }

    /// Apply an update request on top of `book`, returning the revalidated result
    pub fn merge_into(self, book: &Book) -> Result<Book, ValidationErrors> {
        let input = self.trimmed();
        let keep = |new: Option<String>, old: &str| {
            new.filter(|v| !v.is_empty()).or_else(|| Some(old.to_string()))
        };

        let merged = BookInput {
            title: keep(input.title, &book.title),
            author: keep(input.author, &book.author),
            genre: keep(input.genre, book.genre.as_str()),
            price: input.price.or(Some(book.price)),
            in_stock: input.in_stock.or(Some(book.in_stock)),
        }
        .into_new_book()?;

        Ok(Book {
            id: book.id,
            title: merged.title,
            author: merged.author,
            genre: merged.genre,
            price: merged.price,
            in_stock: merged.in_stock,
            created_at: book.created_at,
            updated_at: Utc::now(),
        })
    }
}
