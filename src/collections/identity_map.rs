// -----------------------------------------------------------------------------
// src/collections/identity_map.rs
// -----------------------------------------------------------------------------

use hashbrown::hash_map::{Entry, HashMap};
use std::borrow::Borrow;
use std::hash::Hash;

/// An append-only map from a normalized key to a single canonical value.
///
/// Values are stored in insertion order and indexed by key. Nothing is ever
/// removed, so the slot a value lands in is stable and doubles as its handle.
///
/// ### Get-or-insert
/// [`get_or_insert_with`](IdentityMap::get_or_insert_with) runs the
/// constructor only when the key is absent, and hands it the slot the new
/// value will occupy so the value can record its own handle.
///
/// ### Examples
/// ```rust
/// use book_catalog::collections::IdentityMap;
///
/// let mut map = IdentityMap::new();
/// let (a, created) = map.get_or_insert_with("roman".to_string(), |slot| (slot, "Roman"));
/// assert!(created);
/// let (b, created) = map.get_or_insert_with("roman".to_string(), |slot| (slot, "ROMAN"));
/// assert!(!created);
/// assert_eq!(a, b);
/// assert_eq!(map.get(a), Some(&(0, "Roman")));
/// ```
#[derive(Debug, Clone)]
pub struct IdentityMap<K, V> {
    index: HashMap<K, usize>,
    values: Vec<V>,
}

impl<K, V> Default for IdentityMap<K, V> {
    fn default() -> Self {
        IdentityMap {
            index: HashMap::new(),
            values: Vec::new(),
        }
    }
}

impl<K, V> IdentityMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        IdentityMap {
            index: HashMap::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the slot of the value registered under `key`.
    #[inline]
    pub fn slot_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Returns the slot registered under `key`, inserting `make(slot)` first if
    /// the key is new. The flag is true when a value was inserted.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> (usize, bool)
    where
        F: FnOnce(usize) -> V,
    {
        match self.index.entry(key) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let slot = self.values.len();
                self.values.push(make(slot));
                entry.insert(slot);
                (slot, true)
            }
        }
    }
}

impl<K, V> IdentityMap<K, V> {
    /// Returns the value stored in `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&V> {
        self.values.get(slot)
    }

    /// Returns the value stored in `slot` mutably.
    ///
    /// Callers must not change the fields the value's key was derived from.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut V> {
        self.values.get_mut(slot)
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of values the map can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity().min(self.index.capacity())
    }

    /// Returns whether the map holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over values in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a IdentityMap<K, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_map_dedups_by_key() {
        let mut map: IdentityMap<String, &str> = IdentityMap::new();
        assert_eq!(map.get_or_insert_with("a".into(), |_| "first"), (0, true));
        assert_eq!(map.get_or_insert_with("b".into(), |_| "second"), (1, true));
        assert_eq!(map.get_or_insert_with("a".into(), |_| "ignored"), (0, false));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(0), Some(&"first"));
        assert_eq!(map.iter().copied().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_identity_map_constructor_not_called_for_existing_key() {
        let mut map: IdentityMap<u8, u8> = IdentityMap::with_capacity(4);
        map.get_or_insert_with(1, |_| 10);
        let (slot, created) = map.get_or_insert_with(1, |_| panic!("constructor must not run"));
        assert_eq!((slot, created), (0, false));
    }

    #[test]
    fn test_identity_map_slot_of_borrowed_key() {
        let mut map: IdentityMap<String, ()> = IdentityMap::new();
        map.get_or_insert_with("théatre".to_string(), |_| ());
        assert_eq!(map.slot_of("théatre"), Some(0));
        assert_eq!(map.slot_of("roman"), None);
        assert!(map.get(3).is_none());
    }
}
