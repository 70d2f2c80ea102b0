//! The catalog context and its three registries.
//!
//! Keywords and authors are independent registries. Books refer to both by
//! handle, so every operation that creates or resolves a book goes through
//! [`Catalog`], which owns all three.

mod author;
mod book;
mod id;
mod keyword;

pub use author::{Author, AuthorRegistry};
pub use book::{Book, BookDisplay, BookRegistry};
pub use id::{AuthorId, BookId, KeywordId};
pub use keyword::{Keyword, KeywordRegistry};

use crate::config::CatalogConfig;
use crate::error::{soften, CatalogError, Result};
use hashbrown::HashSet;

/// Owns the keyword, author and book registries of one run.
///
/// Reads take `&Catalog`; get-or-create and keyword attachment take
/// `&mut Catalog`, so a lookup and the insert that may follow it can never
/// interleave with another caller.
///
/// ### Examples
/// ```rust
/// use book_catalog::Catalog;
///
/// let mut catalog = Catalog::new();
/// let miserables = catalog.get_or_create_book("Les Misérables", "Hugo", "Victor").unwrap();
/// let tudor = catalog.get_or_create_book("Marie Tudor", "HUGO", "victor").unwrap();
/// catalog.add_keyword(tudor, "théatre");
///
/// let by_hugo = catalog.select_books_by_author("hugo", "");
/// assert!(by_hugo.contains(&miserables) && by_hugo.contains(&tudor));
/// assert_eq!(
///     catalog.display_book(tudor).unwrap().to_string(),
///     "\"Marie tudor\" (HUGO Victor)"
/// );
/// ```
#[derive(Debug)]
pub struct Catalog {
    keywords: KeywordRegistry,
    authors: AuthorRegistry,
    books: BookRegistry,
}

fn book_title(title: &str) -> Result<&str> {
    if title.is_empty() {
        return Err(CatalogError::EmptyTitle);
    }
    Ok(title)
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog with default allocation hints.
    pub fn new() -> Self {
        Self::with_config(&CatalogConfig::default())
    }

    /// Creates an empty catalog sized by `config`.
    pub fn with_config(config: &CatalogConfig) -> Self {
        Catalog {
            keywords: KeywordRegistry::with_capacity(config.keyword_capacity),
            authors: AuthorRegistry::with_capacity(config.author_capacity),
            books: BookRegistry::with_capacity(config.book_capacity),
        }
    }

    /// Keyword registry.
    #[inline]
    pub fn keywords(&self) -> &KeywordRegistry {
        &self.keywords
    }

    /// Keyword registry, for registering keywords outside any book.
    #[inline]
    pub fn keywords_mut(&mut self) -> &mut KeywordRegistry {
        &mut self.keywords
    }

    /// Author registry.
    #[inline]
    pub fn authors(&self) -> &AuthorRegistry {
        &self.authors
    }

    /// Author registry, for registering authors outside any book.
    #[inline]
    pub fn authors_mut(&mut self) -> &mut AuthorRegistry {
        &mut self.authors
    }

    /// Book registry.
    #[inline]
    pub fn books(&self) -> &BookRegistry {
        &self.books
    }

    /// Returns the book with this title by this author, creating the author
    /// and then the book as needed. Titles compare without case.
    pub fn try_get_or_create_book(
        &mut self,
        title: &str,
        last_name: &str,
        first_name: &str,
    ) -> Result<BookId> {
        let title = book_title(title)?;
        let author = self.authors.try_get_or_create(last_name, first_name)?;
        Ok(self.books.get_or_insert(title, author))
    }

    /// Soft variant of [`try_get_or_create_book`](Self::try_get_or_create_book):
    /// `None` when the title or the author's last name is empty.
    pub fn get_or_create_book(
        &mut self,
        title: &str,
        last_name: &str,
        first_name: &str,
    ) -> Option<BookId> {
        soften(
            self.try_get_or_create_book(title, last_name, first_name),
            "book get-or-create",
        )
    }

    /// Returns the existing book with this title by this author. Neither the
    /// author nor the book is created.
    pub fn get_book(&self, title: &str, last_name: &str, first_name: &str) -> Option<BookId> {
        let title = soften(book_title(title), "book get")?;
        let author = self.authors.get(last_name, first_name)?;
        self.books.find(title, author)
    }

    /// All books whose title contains `needle`, ignoring case.
    pub fn select_books(&self, needle: &str) -> HashSet<BookId> {
        self.books.select(needle)
    }

    /// All books by an author selected with
    /// [`AuthorRegistry::select`](AuthorRegistry::select).
    pub fn select_books_by_author(&self, last_needle: &str, first_needle: &str) -> HashSet<BookId> {
        let authors = self.authors.select(last_needle, first_needle);
        self.books.written_by(&authors)
    }

    /// All books carrying a keyword selected with
    /// [`KeywordRegistry::select`](KeywordRegistry::select).
    pub fn select_books_by_keyword(&self, needle: &str) -> HashSet<BookId> {
        let keywords = self.keywords.select(needle);
        self.books.tagged_with(&keywords)
    }

    /// Attaches the keyword `value` to `book`, registering the keyword if
    /// needed. Returns whether it was newly attached.
    pub fn try_add_keyword(&mut self, book: BookId, value: &str) -> Result<bool> {
        let entry = self
            .books
            .book_mut(book)
            .ok_or(CatalogError::UnknownBook { id: book })?;
        let keyword = self.keywords.try_get_or_create(value)?;
        let added = entry.attach(keyword);
        if added {
            log::debug!("attached keyword {value:?} to {book:?}");
        }
        Ok(added)
    }

    /// Soft variant of [`try_add_keyword`](Self::try_add_keyword): `false`
    /// when the value is empty, the keyword was already attached, or the
    /// handle is unknown.
    pub fn add_keyword(&mut self, book: BookId, value: &str) -> bool {
        soften(self.try_add_keyword(book, value), "keyword attach").unwrap_or(false)
    }

    /// Resolves a book handle.
    #[inline]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.book(id)
    }

    /// Resolves an author handle.
    #[inline]
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.author(id)
    }

    /// Resolves a keyword handle.
    #[inline]
    pub fn keyword(&self, id: KeywordId) -> Option<&Keyword> {
        self.keywords.keyword(id)
    }

    /// Keywords attached to `book`, in no particular order.
    pub fn keywords_of(&self, book: BookId) -> Option<impl Iterator<Item = &Keyword> + '_> {
        let book = self.books.book(book)?;
        Some(
            book.keywords()
                .iter()
                .filter_map(move |id| self.keywords.keyword(*id)),
        )
    }

    /// Display form of `book`, e.g. `"Germinal" (ZOLA Émile)`.
    pub fn display_book(&self, id: BookId) -> Option<BookDisplay<'_>> {
        let book = self.books.book(id)?;
        let author = self.authors.author(book.author())?;
        Some(book.display(author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_book_does_not_create_author() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.get_book("Germinal", "Zola", "Émile"), None);
        assert!(catalog.authors().is_empty());

        let germinal = catalog.get_or_create_book("Germinal", "Zola", "Émile").unwrap();
        assert_eq!(catalog.get_book("GERMINAL", "zola", "ÉMILE"), Some(germinal));
        assert_eq!(catalog.get_book("Nana", "Zola", "Émile"), None);
        assert_eq!(catalog.books().len(), 1);
    }

    #[test]
    fn test_book_rejections() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.try_get_or_create_book("", "Zola", "Émile"),
            Err(CatalogError::EmptyTitle)
        );
        assert_eq!(
            catalog.try_get_or_create_book("Germinal", "", "Émile"),
            Err(CatalogError::EmptyLastName)
        );
        assert_eq!(catalog.get_or_create_book("", "", ""), None);
        assert_eq!(catalog.get_book("", "Zola", "Émile"), None);
        assert!(catalog.books().is_empty());
        assert!(catalog.authors().is_empty());
    }

    #[test]
    fn test_empty_title_does_not_register_author() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.get_or_create_book("", "Zola", "Émile"), None);
        assert_eq!(catalog.authors().get("Zola", "Émile"), None);
    }

    #[test]
    fn test_add_keyword_to_book_from_another_catalog() {
        let mut catalog = Catalog::new();
        let germinal = catalog.get_or_create_book("Germinal", "Zola", "Émile").unwrap();
        let mut other = Catalog::new();
        let foreign = other.get_or_create_book("Marie Tudor", "Hugo", "Victor").unwrap();

        assert_eq!(
            catalog.try_add_keyword(foreign, "théatre"),
            Err(CatalogError::UnknownBook { id: foreign })
        );
        assert!(!catalog.add_keyword(foreign, "théatre"));
        assert!(catalog.book(germinal).unwrap().keywords().is_empty());
        assert!(catalog.keywords().is_empty());

        assert!(catalog.book(foreign).is_none());
        assert!(catalog.display_book(foreign).is_none());
        assert!(catalog.keywords_of(foreign).is_none());
        assert_eq!(catalog.author(other.book(foreign).unwrap().author()), None);
    }

    #[test]
    fn test_add_empty_keyword() {
        let mut catalog = Catalog::new();
        let germinal = catalog.get_or_create_book("Germinal", "Zola", "Émile").unwrap();
        assert_eq!(
            catalog.try_add_keyword(germinal, ""),
            Err(CatalogError::EmptyKeyword)
        );
        assert!(!catalog.add_keyword(germinal, ""));
        assert!(catalog.book(germinal).unwrap().keywords().is_empty());
    }

    #[test]
    fn test_keywords_of_resolves_handles() {
        let mut catalog = Catalog::new();
        let tudor = catalog.get_or_create_book("Marie Tudor", "Hugo", "Victor").unwrap();
        catalog.add_keyword(tudor, "théatre");
        catalog.add_keyword(tudor, "historique");

        let mut rendered: Vec<String> = catalog
            .keywords_of(tudor)
            .unwrap()
            .map(ToString::to_string)
            .collect();
        rendered.sort();
        assert_eq!(rendered, vec!["HISTORIQUE", "THÉATRE"]);
    }

    #[test]
    fn test_default_matches_new() {
        let defaults = CatalogConfig::default();
        let catalog = Catalog::default();
        assert!(catalog.books.capacity() >= defaults.book_capacity);
        assert!(catalog.authors.capacity() >= defaults.author_capacity);
        assert!(catalog.keywords.capacity() >= defaults.keyword_capacity);

        let mut first = Catalog::default();
        let second = Catalog::default();
        let germinal = first.get_or_create_book("Germinal", "Zola", "Émile").unwrap();
        assert!(second.book(germinal).is_none());
    }

    #[test]
    fn test_with_config() {
        let config = CatalogConfig::empty().with_book_capacity(4);
        let catalog = Catalog::with_config(&config);
        assert!(catalog.books().is_empty());
        assert!(catalog.keywords().is_empty());
    }
}
