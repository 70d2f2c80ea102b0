//! Typed handles to canonical catalog entries.
//!
//! A handle is the storage slot its registry assigned on creation, stamped
//! with that registry's tag. Two lookups returned the same instance exactly
//! when their handles are equal. A handle only resolves in the registry that
//! minted it.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_REGISTRY: AtomicU32 = AtomicU32::new(0);

/// Identifies one registry instance for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RegistryTag(u32);

impl RegistryTag {
    pub(crate) fn fresh() -> Self {
        RegistryTag(NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed))
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            registry: RegistryTag,
            slot: usize,
        }

        impl $name {
            #[inline]
            pub(crate) fn new(registry: RegistryTag, slot: usize) -> Self {
                $name { registry, slot }
            }

            /// Slot of this handle, if it was minted by `registry`.
            #[inline]
            pub(crate) fn slot_in(self, registry: RegistryTag) -> Option<usize> {
                (self.registry == registry).then_some(self.slot)
            }
        }

        // Serialized as the bare slot; the tag is meaningless outside the process.
        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u64(self.slot as u64)
            }
        }
    };
}

define_id!(
    /// Handle to a [`Keyword`](super::Keyword) in a [`KeywordRegistry`](super::KeywordRegistry).
    KeywordId
);

define_id!(
    /// Handle to an [`Author`](super::Author) in an [`AuthorRegistry`](super::AuthorRegistry).
    AuthorId
);

define_id!(
    /// Handle to a [`Book`](super::Book) in a [`BookRegistry`](super::BookRegistry).
    BookId
);
