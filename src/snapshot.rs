//! Serializable view of a catalog's contents.
//!
//! Meant for inspection and debugging output. There is no way to load a
//! snapshot back into a [`Catalog`].

use crate::catalog::{AuthorId, BookId, Catalog, KeywordId};
use serde::Serialize;

/// Every entry of a catalog, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    /// Registered keywords
    pub keywords: Vec<KeywordEntry>,
    /// Registered authors
    pub authors: Vec<AuthorEntry>,
    /// Registered books
    pub books: Vec<BookEntry>,
}

/// Snapshot of one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    /// Handle
    pub id: KeywordId,
    /// Value as registered
    pub value: String,
    /// Display form
    pub display: String,
}

/// Snapshot of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorEntry {
    /// Handle
    pub id: AuthorId,
    /// Last name as registered
    pub last_name: String,
    /// First name as registered
    pub first_name: String,
    /// Display form
    pub display: String,
}

/// Snapshot of one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    /// Handle
    pub id: BookId,
    /// Title as registered
    pub title: String,
    /// Author handle
    pub author: AuthorId,
    /// Attached keyword handles, sorted
    pub keywords: Vec<KeywordId>,
    /// Display form
    pub display: String,
}

impl Catalog {
    /// Captures the current contents.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let keywords = self
            .keywords()
            .iter()
            .map(|keyword| KeywordEntry {
                id: keyword.id(),
                value: keyword.value().to_owned(),
                display: keyword.to_string(),
            })
            .collect();

        let authors = self
            .authors()
            .iter()
            .map(|author| AuthorEntry {
                id: author.id(),
                last_name: author.last_name().to_owned(),
                first_name: author.first_name().to_owned(),
                display: author.to_string(),
            })
            .collect();

        let books = self
            .books()
            .iter()
            .map(|book| {
                let mut keywords: Vec<KeywordId> = book.keywords().iter().copied().collect();
                keywords.sort_unstable();
                BookEntry {
                    id: book.id(),
                    title: book.title().to_owned(),
                    author: book.author(),
                    keywords,
                    display: self
                        .display_book(book.id())
                        .map(|display| display.to_string())
                        .unwrap_or_default(),
                }
            })
            .collect();

        CatalogSnapshot {
            keywords,
            authors,
            books,
        }
    }
}
