//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog entry. Identity and descriptive fields are fixed at creation;
/// only the borrowing state changes over the book's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Book {
    /// Caller-assigned unique identifier
    pub id: i32,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    pub publication_year: i32,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    pub genre: String,
    /// True while the book is out on loan
    #[serde(default)]
    pub is_borrowed: bool,
    /// Cumulative number of completed checkouts
    #[serde(default)]
    pub borrow_count: u32,
}

impl Book {
    /// Create a new book, available and never borrowed
    pub fn new(
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            is_borrowed: false,
            borrow_count: 0,
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.publication_year)
    }
}

/// Book search filters. Absent fields impose no constraint; supplied
/// filters are combined with logical AND.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BookQuery {
    /// Case-insensitive substring match against the title
    pub title: Option<String>,
    /// Case-insensitive substring match against the author
    pub author: Option<String>,
    /// Publication year lower bound (inclusive)
    pub year_from: Option<i32>,
    /// Publication year upper bound (inclusive)
    pub year_to: Option<i32>,
    /// Exact (case-sensitive) genre match
    pub genre: Option<String>,
    /// When true, exclude books currently out on loan
    pub available_only: Option<bool>,
}

impl BookQuery {
    /// Whether a book satisfies every supplied filter
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref title) = self.title {
            if !book.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref author) = self.author {
            if !book.author.to_lowercase().contains(&author.to_lowercase()) {
                return false;
            }
        }
        if let Some(year_from) = self.year_from {
            if book.publication_year < year_from {
                return false;
            }
        }
        if let Some(year_to) = self.year_to {
            if book.publication_year > year_to {
                return false;
            }
        }
        if let Some(ref genre) = self.genre {
            if book.genre != *genre {
                return false;
            }
        }
        if self.available_only.unwrap_or(false) && book.is_borrowed {
            return false;
        }
        true
    }
}
