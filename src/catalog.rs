//! Library catalog: book store, borrower index, and lending operations

use indexmap::IndexMap;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery, LibraryStats},
};

/// Number of entries reported in `LibraryStats::popular_books`
const POPULAR_BOOKS_LIMIT: usize = 5;

/// In-memory library catalog.
///
/// Owns the book collection and the borrower loan index. The two are kept
/// consistent inside every mutating operation: a borrower key exists in the
/// index iff it holds at least one book, and a book id appears in the index
/// iff that book's `is_borrowed` flag is set. Not internally synchronized;
/// a multi-threaded integrator must wrap the whole instance in a lock.
#[derive(Debug, Default, Clone)]
pub struct Library {
    /// Books by id, in insertion order
    books: IndexMap<i32, Book>,
    /// Borrower id -> ids of books currently held
    loans: IndexMap<String, Vec<i32>>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog.
    ///
    /// Returns `Ok(false)` without mutating if a book with the same id is
    /// already present. Fails with a validation error if the book's fields
    /// do not satisfy the model contract.
    pub fn add_book(&mut self, book: Book) -> AppResult<bool> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self.books.contains_key(&book.id) {
            return Ok(false);
        }
        tracing::debug!("book {} added to catalog: {}", book.id, book);
        self.books.insert(book.id, book);
        Ok(true)
    }

    /// Get a book by its id
    pub fn get_book(&self, book_id: i32) -> Option<&Book> {
        self.books.get(&book_id)
    }

    /// Remove a book from the catalog.
    ///
    /// Returns `Ok(false)` if the id is unknown. A borrowed book cannot be
    /// removed; it must be returned first.
    pub fn remove_book(&mut self, book_id: i32) -> AppResult<bool> {
        match self.books.get(&book_id) {
            None => Ok(false),
            Some(book) if book.is_borrowed => Err(AppError::BusinessRule(
                "Cannot remove a borrowed book".to_string(),
            )),
            Some(_) => {
                self.books.shift_remove(&book_id);
                tracing::debug!("book {} removed from catalog", book_id);
                Ok(true)
            }
        }
    }

    /// Borrow a book.
    ///
    /// Returns `Ok(false)` without mutating if the book is already out on
    /// loan. On success the book is flagged as borrowed, its borrow count
    /// is incremented and the id is recorded under the borrower.
    pub fn borrow_book(&mut self, book_id: i32, borrower_id: &str) -> AppResult<bool> {
        let book = self.books.get_mut(&book_id).ok_or_else(|| {
            AppError::NotFound(format!("Book with id {} not found in catalog", book_id))
        })?;
        if book.is_borrowed {
            return Ok(false);
        }
        book.is_borrowed = true;
        book.borrow_count += 1;
        self.loans
            .entry(borrower_id.to_string())
            .or_default()
            .push(book_id);
        tracing::debug!("book {} borrowed by {}", book_id, borrower_id);
        Ok(true)
    }

    /// Return a borrowed book.
    ///
    /// Fails unless the borrower is on record as holding this book; that
    /// check takes priority over the borrow flag. The borrower's index
    /// entry is dropped as soon as it empties.
    pub fn return_book(&mut self, book_id: i32, borrower_id: &str) -> AppResult<bool> {
        let book = self.books.get_mut(&book_id).ok_or_else(|| {
            AppError::NotFound(format!("Book with id {} not found in catalog", book_id))
        })?;
        let on_record = self
            .loans
            .get(borrower_id)
            .is_some_and(|held| held.contains(&book_id));
        if !on_record {
            return Err(AppError::BusinessRule(
                "Book was not borrowed by this borrower".to_string(),
            ));
        }
        if !book.is_borrowed {
            return Ok(false);
        }
        book.is_borrowed = false;
        let now_empty = match self.loans.get_mut(borrower_id) {
            Some(held) => {
                held.retain(|id| *id != book_id);
                held.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.loans.shift_remove(borrower_id);
        }
        tracing::debug!("book {} returned by {}", book_id, borrower_id);
        Ok(true)
    }

    /// Search books with filters, in catalog order
    pub fn search_books(&self, query: &BookQuery) -> Vec<&Book> {
        self.books
            .values()
            .filter(|book| query.matches(book))
            .collect()
    }

    /// Compute a statistics snapshot of the catalog
    pub fn get_statistics(&self) -> LibraryStats {
        let total_books = self.books.len();
        let borrowed_books = self.books.values().filter(|b| b.is_borrowed).count();

        let mut genres: IndexMap<String, usize> = IndexMap::new();
        for book in self.books.values() {
            *genres.entry(book.genre.clone()).or_insert(0) += 1;
        }

        // Stable sort: ties keep catalog order
        let mut ranked: Vec<&Book> = self.books.values().collect();
        ranked.sort_by(|a, b| b.borrow_count.cmp(&a.borrow_count));
        ranked.truncate(POPULAR_BOOKS_LIMIT);

        LibraryStats {
            total_books,
            available_books: total_books - borrowed_books,
            borrowed_books,
            borrowers_count: self.loans.len(),
            genres,
            popular_books: ranked.into_iter().cloned().collect(),
        }
    }

    /// Number of books in the catalog
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Ids of the books a borrower currently holds
    pub fn borrower_loans(&self, borrower_id: &str) -> Option<&[i32]> {
        self.loans.get(borrower_id).map(Vec::as_slice)
    }

    /// Borrowers currently holding at least one book, with their held ids
    pub fn borrowers(&self) -> impl Iterator<Item = (&str, &[i32])> {
        self.loans
            .iter()
            .map(|(borrower, held)| (borrower.as_str(), held.as_slice()))
    }
}
