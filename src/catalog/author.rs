use super::id::RegistryTag;
use super::AuthorId;
use crate::collections::IdentityMap;
use crate::error::{soften, CatalogError, Result};
use crate::text::{capitalize, contains_folded, fold};
use hashbrown::HashSet;
use std::fmt;

/// An author identified by last and first name, both compared without case.
///
/// The first name may be empty. Rendered as `HUGO Victor`, or `MOLIÈRE` when
/// there is no first name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Author {
    id: AuthorId,
    last_name: String,
    first_name: String,
}

impl Author {
    /// Handle of this author.
    #[inline]
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Last name as first registered.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First name as first registered; possibly empty.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.last_name.to_uppercase())?;
        if !self.first_name.is_empty() {
            write!(f, " {}", capitalize(&self.first_name))?;
        }
        Ok(())
    }
}

/// Deduplicated set of authors, keyed by folded (last name, first name).
#[derive(Debug)]
pub struct AuthorRegistry {
    tag: RegistryTag,
    entries: IdentityMap<(String, String), Author>,
}

fn author_key(last_name: &str, first_name: &str) -> Result<(String, String)> {
    if last_name.is_empty() {
        return Err(CatalogError::EmptyLastName);
    }
    Ok((fold(last_name), fold(first_name)))
}

impl Default for AuthorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty registry with room for `capacity` authors.
    pub fn with_capacity(capacity: usize) -> Self {
        AuthorRegistry {
            tag: RegistryTag::fresh(),
            entries: IdentityMap::with_capacity(capacity),
        }
    }

    /// Returns the author matching both names regardless of case, creating it
    /// if none exists yet.
    pub fn try_get_or_create(&mut self, last_name: &str, first_name: &str) -> Result<AuthorId> {
        let key = author_key(last_name, first_name)?;
        let tag = self.tag;
        let (slot, created) = self.entries.get_or_insert_with(key, |slot| Author {
            id: AuthorId::new(tag, slot),
            last_name: last_name.to_owned(),
            first_name: first_name.to_owned(),
        });
        if created {
            log::debug!("registered author ({last_name:?}, {first_name:?}) as slot {slot}");
        } else {
            log::trace!("author ({last_name:?}, {first_name:?}) resolved to slot {slot}");
        }
        Ok(AuthorId::new(tag, slot))
    }

    /// Soft variant of [`try_get_or_create`](Self::try_get_or_create):
    /// `None` when `last_name` is empty.
    pub fn get_or_create(&mut self, last_name: &str, first_name: &str) -> Option<AuthorId> {
        soften(
            self.try_get_or_create(last_name, first_name),
            "author get-or-create",
        )
    }

    /// Returns the existing author matching both names regardless of case.
    pub fn get(&self, last_name: &str, first_name: &str) -> Option<AuthorId> {
        let key = soften(author_key(last_name, first_name), "author get")?;
        self.entries.slot_of(&key).map(|slot| AuthorId::new(self.tag, slot))
    }

    /// All authors whose last name contains `last_needle` and whose first name
    /// contains `first_needle`, ignoring case. Empty needles match anything,
    /// including an empty first name.
    pub fn select(&self, last_needle: &str, first_needle: &str) -> HashSet<AuthorId> {
        let last_needle = fold(last_needle);
        let first_needle = fold(first_needle);
        self.entries
            .iter()
            .filter(|author| {
                contains_folded(&author.last_name, &last_needle)
                    && contains_folded(&author.first_name, &first_needle)
            })
            .map(Author::id)
            .collect()
    }

    /// Resolves a handle.
    #[inline]
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.entries.get(id.slot_in(self.tag)?)
    }

    /// Iterates over authors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Author> + '_ {
        self.entries.iter()
    }

    /// Number of registered authors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns whether no author is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
