//! Biblion - In-memory library catalog and lending toolkit
//!
//! Provides a caller-owned [`Library`] catalog with borrowing, search and
//! statistics, plus two standalone retail helpers: a [`ShoppingCart`]
//! quantity tracker and a discount price calculator.
//!
//! Everything runs synchronously in process memory; there is no
//! persistence and no internal locking. An instance is single-writer by
//! contract — wrap it in a mutex for multi-threaded use.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;
pub mod pricing;

pub use cart::{CartLine, Product, ShoppingCart};
pub use catalog::Library;
pub use error::{AppError, AppResult};
pub use models::{Book, BookQuery, LibraryStats};
pub use pricing::discounted_price;
