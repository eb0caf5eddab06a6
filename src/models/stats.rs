//! Library statistics snapshot

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::book::Book;

/// Aggregate catalog statistics, computed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    /// Total number of books in the catalog
    pub total_books: usize,
    /// Books not currently out on loan
    pub available_books: usize,
    /// Books currently out on loan
    pub borrowed_books: usize,
    /// Borrowers currently holding at least one book
    pub borrowers_count: usize,
    /// Book count per genre, in first-seen order
    pub genres: IndexMap<String, usize>,
    /// Top 5 books by cumulative borrow count, most borrowed first
    pub popular_books: Vec<Book>,
}
