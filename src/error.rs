//! Error types for catalog operations.
//!
//! Every public lookup in this crate fails soft and returns `None` or `false`.
//! The `try_*` variants surface the reason through [`CatalogError`] instead.

use crate::catalog::BookId;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Reasons a catalog operation can reject its input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Keyword values must not be empty
    #[error("keyword value is empty")]
    EmptyKeyword,

    /// Author last names must not be empty
    #[error("author last name is empty")]
    EmptyLastName,

    /// Book titles must not be empty
    #[error("book title is empty")]
    EmptyTitle,

    /// The book handle does not belong to this catalog
    #[error("book {id:?} is not registered in this catalog")]
    UnknownBook {
        /// Handle that failed to resolve
        id: BookId,
    },
}

impl CatalogError {
    /// Returns true when the error was caused by an empty required field.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyKeyword | CatalogError::EmptyLastName | CatalogError::EmptyTitle
        )
    }
}

/// Turns a rejection into the soft `None` result, logging why.
pub(crate) fn soften<T>(result: Result<T>, operation: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{operation} rejected: {err}");
            None
        }
    }
}
