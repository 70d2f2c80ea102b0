use super::id::RegistryTag;
use super::KeywordId;
use crate::collections::IdentityMap;
use crate::error::{soften, CatalogError, Result};
use crate::text::{contains_folded, fold};
use hashbrown::HashSet;
use std::fmt;

/// A keyword attached to books. Identity ignores case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Keyword {
    id: KeywordId,
    value: String,
}

impl Keyword {
    /// Handle of this keyword.
    #[inline]
    pub fn id(&self) -> KeywordId {
        self.id
    }

    /// Value as first registered.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.to_uppercase())
    }
}

/// Deduplicated set of keywords, keyed by folded value.
#[derive(Debug)]
pub struct KeywordRegistry {
    tag: RegistryTag,
    entries: IdentityMap<String, Keyword>,
}

fn keyword_key(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(CatalogError::EmptyKeyword);
    }
    Ok(fold(value))
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty registry with room for `capacity` keywords.
    pub fn with_capacity(capacity: usize) -> Self {
        KeywordRegistry {
            tag: RegistryTag::fresh(),
            entries: IdentityMap::with_capacity(capacity),
        }
    }

    /// Returns the keyword matching `value` regardless of case, creating it
    /// if none exists yet.
    pub fn try_get_or_create(&mut self, value: &str) -> Result<KeywordId> {
        let key = keyword_key(value)?;
        let tag = self.tag;
        let (slot, created) = self.entries.get_or_insert_with(key, |slot| Keyword {
            id: KeywordId::new(tag, slot),
            value: value.to_owned(),
        });
        if created {
            log::debug!("registered keyword {value:?} as slot {slot}");
        } else {
            log::trace!("keyword {value:?} resolved to slot {slot}");
        }
        Ok(KeywordId::new(tag, slot))
    }

    /// Soft variant of [`try_get_or_create`](Self::try_get_or_create):
    /// `None` when `value` is empty.
    pub fn get_or_create(&mut self, value: &str) -> Option<KeywordId> {
        soften(self.try_get_or_create(value), "keyword get-or-create")
    }

    /// Returns the existing keyword matching `value` regardless of case.
    pub fn get(&self, value: &str) -> Option<KeywordId> {
        let key = soften(keyword_key(value), "keyword get")?;
        self.entries.slot_of(key.as_str()).map(|slot| KeywordId::new(self.tag, slot))
    }

    /// All keywords whose value contains `needle`, ignoring case. An empty
    /// needle selects every keyword.
    pub fn select(&self, needle: &str) -> HashSet<KeywordId> {
        let needle = fold(needle);
        self.entries
            .iter()
            .filter(|keyword| contains_folded(&keyword.value, &needle))
            .map(Keyword::id)
            .collect()
    }

    /// Resolves a handle.
    #[inline]
    pub fn keyword(&self, id: KeywordId) -> Option<&Keyword> {
        self.entries.get(id.slot_in(self.tag)?)
    }

    /// Iterates over keywords in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> + '_ {
        self.entries.iter()
    }

    /// Number of registered keywords.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns whether no keyword is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_get_or_create_ignores_case() {
        let mut keywords = KeywordRegistry::new();
        let roman = keywords.get_or_create("roman").unwrap();
        assert_eq!(keywords.get_or_create("ROMAN"), Some(roman));
        assert_eq!(keywords.get_or_create("Roman"), Some(roman));
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords.keyword(roman).unwrap().value(), "roman");
    }

    #[test]
    fn test_keyword_empty_value_rejected() {
        let mut keywords = KeywordRegistry::new();
        assert_eq!(keywords.get_or_create(""), None);
        assert_eq!(keywords.try_get_or_create(""), Err(CatalogError::EmptyKeyword));
        assert_eq!(keywords.get(""), None);
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_keyword_get_never_creates() {
        let mut keywords = KeywordRegistry::new();
        assert_eq!(keywords.get("social"), None);
        assert!(keywords.is_empty());

        let social = keywords.get_or_create("social").unwrap();
        assert_eq!(keywords.get("SOCIAL"), Some(social));
    }

    #[test]
    fn test_keyword_final_sigma_variants_share_one_instance() {
        let mut keywords = KeywordRegistry::new();
        let logos = keywords.get_or_create("ΛΟΓΟΣ").unwrap();
        assert_eq!(keywords.get("λογοσ"), Some(logos));
        assert_eq!(keywords.get_or_create("λογοσ"), Some(logos));
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_keyword_display_is_upper_case() {
        let mut keywords = KeywordRegistry::new();
        let id = keywords.get_or_create("comédie").unwrap();
        assert_eq!(keywords.keyword(id).unwrap().to_string(), "COMÉDIE");
    }

    #[test]
    fn test_keyword_select_is_substring_match() {
        let mut keywords = KeywordRegistry::new();
        let roman = keywords.get_or_create("roman").unwrap();
        let comedie = keywords.get_or_create("comédie").unwrap();
        keywords.get_or_create("social").unwrap();
        keywords.get_or_create("historique").unwrap();

        let selected = keywords.select("OM");
        assert_eq!(selected, [roman, comedie].into_iter().collect::<HashSet<_>>());
        assert_eq!(keywords.select("").len(), 4);
        assert!(keywords.select("absent").is_empty());
    }
}
