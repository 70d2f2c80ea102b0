//! Runtime configuration for a [`Catalog`](crate::Catalog).

/// Pre-allocation hints for the three registries.
///
/// Registries grow on demand; these only size the initial allocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Expected number of distinct keywords
    pub keyword_capacity: usize,
    /// Expected number of distinct authors
    pub author_capacity: usize,
    /// Expected number of distinct books
    pub book_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            keyword_capacity: 32,
            author_capacity: 16,
            book_capacity: 32,
        }
    }
}

impl CatalogConfig {
    /// Configuration that allocates nothing up front.
    pub fn empty() -> Self {
        Self {
            keyword_capacity: 0,
            author_capacity: 0,
            book_capacity: 0,
        }
    }

    /// Sets the expected number of books.
    pub fn with_book_capacity(mut self, capacity: usize) -> Self {
        self.book_capacity = capacity;
        self
    }

    /// Sets the expected number of authors.
    pub fn with_author_capacity(mut self, capacity: usize) -> Self {
        self.author_capacity = capacity;
        self
    }

    /// Sets the expected number of keywords.
    pub fn with_keyword_capacity(mut self, capacity: usize) -> Self {
        self.keyword_capacity = capacity;
        self
    }
}
