//! # Book Catalog
//!
//! An in-memory catalog of books, authors and keywords.
//!
//! Each of the three registries holds exactly one canonical instance per
//! case-insensitive identity. Lookups come in two flavours:
//!
//! - **get-or-create** returns the existing instance or registers a new one
//! - **get** only returns an existing instance
//!
//! Both fail soft on empty required fields, returning `None`. The `try_*`
//! variants report the reason as a [`CatalogError`].
//!
//! Searches (`select*`) are case-insensitive substring matches and return sets
//! of handles. Searching books by author or keyword first selects matching
//! authors or keywords, then the books that refer to them.
//!
//! ## Features
//!
//! - `serde` - `Serialize` for entities and handles, plus `CatalogSnapshot`
//!
//! ## Example
//!
//! ```rust
//! use book_catalog::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let book = catalog
//!     .get_or_create_book("Le Bourgeois gentilhomme", "Molière", "")
//!     .unwrap();
//! assert!(catalog.add_keyword(book, "théatre"));
//! assert!(!catalog.add_keyword(book, "THÉATRE"));
//!
//! assert_eq!(
//!     catalog.display_book(book).unwrap().to_string(),
//!     "\"Le bourgeois gentilhomme\" (MOLIÈRE)"
//! );
//! assert!(catalog.select_books_by_keyword("théa").contains(&book));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod collections;
pub mod config;
pub mod error;
mod text;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use catalog::{
    Author, AuthorId, AuthorRegistry, Book, BookDisplay, BookId, BookRegistry, Catalog, Keyword,
    KeywordId, KeywordRegistry,
};
pub use collections::IdentityMap;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};

#[cfg(feature = "serde")]
pub use snapshot::{AuthorEntry, BookEntry, CatalogSnapshot, KeywordEntry};
