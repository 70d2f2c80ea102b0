use super::id::RegistryTag;
use super::{Author, AuthorId, BookId, KeywordId};
use crate::collections::IdentityMap;
use crate::text::{capitalize, contains_folded, fold};
use hashbrown::HashSet;
use std::fmt;

/// A book identified by its title (compared without case) and its author.
///
/// The author never changes. Keywords can only be added, through
/// [`Catalog::add_keyword`](super::Catalog::add_keyword).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Book {
    id: BookId,
    title: String,
    author: AuthorId,
    keywords: HashSet<KeywordId>,
}

impl Book {
    /// Handle of this book.
    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Title as first registered.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle of the book's author.
    #[inline]
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Read-only view of the attached keywords.
    #[inline]
    pub fn keywords(&self) -> &HashSet<KeywordId> {
        &self.keywords
    }

    /// Pairs this book with its resolved author for rendering.
    pub(crate) fn display<'a>(&'a self, author: &'a Author) -> BookDisplay<'a> {
        debug_assert_eq!(author.id(), self.author);
        BookDisplay { book: self, author }
    }

    /// Returns true if the keyword was not attached yet.
    pub(crate) fn attach(&mut self, keyword: KeywordId) -> bool {
        self.keywords.insert(keyword)
    }
}

/// Renders a book as `"Le bourgeois gentilhomme" (MOLIÈRE)`.
#[derive(Debug, Clone, Copy)]
pub struct BookDisplay<'a> {
    book: &'a Book,
    author: &'a Author,
}

impl fmt::Display for BookDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", capitalize(&self.book.title), self.author)
    }
}

/// Deduplicated set of books, keyed by folded title and author handle.
///
/// Creation goes through [`Catalog`](super::Catalog), which resolves authors
/// and keywords before touching this registry.
#[derive(Debug)]
pub struct BookRegistry {
    tag: RegistryTag,
    entries: IdentityMap<(String, AuthorId), Book>,
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty registry with room for `capacity` books.
    pub fn with_capacity(capacity: usize) -> Self {
        BookRegistry {
            tag: RegistryTag::fresh(),
            entries: IdentityMap::with_capacity(capacity),
        }
    }

    pub(crate) fn get_or_insert(&mut self, title: &str, author: AuthorId) -> BookId {
        let tag = self.tag;
        let (slot, created) = self
            .entries
            .get_or_insert_with((fold(title), author), |slot| Book {
                id: BookId::new(tag, slot),
                title: title.to_owned(),
                author,
                keywords: HashSet::new(),
            });
        if created {
            log::debug!("registered book {title:?} by {author:?} as slot {slot}");
        } else {
            log::trace!("book {title:?} by {author:?} resolved to slot {slot}");
        }
        BookId::new(tag, slot)
    }

    pub(crate) fn find(&self, title: &str, author: AuthorId) -> Option<BookId> {
        self.entries
            .slot_of(&(fold(title), author))
            .map(|slot| BookId::new(self.tag, slot))
    }

    pub(crate) fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.entries.get_mut(id.slot_in(self.tag)?)
    }

    /// All books whose title contains `needle`, ignoring case. An empty needle
    /// selects every book.
    pub fn select(&self, needle: &str) -> HashSet<BookId> {
        let needle = fold(needle);
        self.entries
            .iter()
            .filter(|book| contains_folded(&book.title, &needle))
            .map(Book::id)
            .collect()
    }

    /// All books written by one of `authors`.
    pub fn written_by(&self, authors: &HashSet<AuthorId>) -> HashSet<BookId> {
        self.entries
            .iter()
            .filter(|book| authors.contains(&book.author))
            .map(Book::id)
            .collect()
    }

    /// All books carrying at least one of `keywords`.
    pub fn tagged_with(&self, keywords: &HashSet<KeywordId>) -> HashSet<BookId> {
        self.entries
            .iter()
            .filter(|book| !book.keywords.is_disjoint(keywords))
            .map(Book::id)
            .collect()
    }

    /// Resolves a handle.
    #[inline]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.entries.get(id.slot_in(self.tag)?)
    }

    /// Iterates over books in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.entries.iter()
    }

    /// Number of registered books.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns whether no book is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
