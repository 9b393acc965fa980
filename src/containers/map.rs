//! Map containers: associative containers of `(key, mapped)` pairs.
//!
//! The emplacement matrix crosses how the key arrives (owned, or borrowed and
//! cloned) with how the mapped value is made (defaulted, owned, or borrowed
//! and cloned). Each cell exists exactly when its `Clone`/`Default` bounds
//! hold. `put_piecewise` builds both halves from closures.
//!
//! ```compile_fail
//! use std::collections::BTreeMap;
//! use tola_concepts::MapContainer;
//!
//! #[derive(PartialEq, Eq, PartialOrd, Ord)]
//! struct Ticket(u32);
//!
//! let mut seats: BTreeMap<Ticket, u8> = BTreeMap::new();
//! MapContainer::put_key(&mut seats, Ticket(1));
//! // `Ticket` is not `Clone`, so a borrowed key cannot be inserted.
//! MapContainer::put_key_cloned(&mut seats, &Ticket(2));
//! ```
//!
//! ```compile_fail
//! use std::collections::BTreeMap;
//! use tola_concepts::UniqueMapContainer;
//!
//! struct Handle(u32);
//!
//! let mut handles: BTreeMap<u8, Handle> = BTreeMap::new();
//! UniqueMapContainer::try_emplace(&mut handles, 1, Handle(7));
//! // `Handle` is not `Default`, so there is no defaulting lookup.
//! UniqueMapContainer::get_or_default(&mut handles, 2);
//! ```

use super::associative::{
    AssociativeContainer, MultipleAssociativeContainer, OrderedAssociativeContainer,
    UniqueAssociativeContainer, UnorderedAssociativeContainer, define_conjunction,
};

// =============================================================================
// Map
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a map container",
    label = "`{Self}` does not satisfy `MapContainer`",
    note = "map containers are associative containers whose elements are `(Key, Mapped)` pairs"
)]
pub trait MapContainer:
    AssociativeContainer<Value = (<Self as AssociativeContainer>::Key, <Self as MapContainer>::Mapped)>
{
    type Mapped;

    fn put_piecewise<FK, FM>(&mut self, make_key: FK, make_mapped: FM)
    where
        FK: FnOnce() -> Self::Key,
        FM: FnOnce() -> Self::Mapped,
    {
        let key = make_key();
        self.put((key, make_mapped()));
    }

    fn put_entry(&mut self, key: Self::Key, mapped: Self::Mapped) {
        self.put((key, mapped));
    }

    fn put_key(&mut self, key: Self::Key)
    where
        Self::Mapped: Default,
    {
        self.put((key, Self::Mapped::default()));
    }

    fn put_key_cloned(&mut self, key: &Self::Key)
    where
        Self::Key: Clone,
        Self::Mapped: Default,
    {
        self.put((key.clone(), Self::Mapped::default()));
    }

    fn put_entry_cloned_key(&mut self, key: &Self::Key, mapped: Self::Mapped)
    where
        Self::Key: Clone,
    {
        self.put((key.clone(), mapped));
    }

    fn put_entry_cloned_mapped(&mut self, key: Self::Key, mapped: &Self::Mapped)
    where
        Self::Mapped: Clone,
    {
        self.put((key, mapped.clone()));
    }

    fn put_entry_cloned(&mut self, key: &Self::Key, mapped: &Self::Mapped)
    where
        Self::Key: Clone,
        Self::Mapped: Clone,
    {
        self.put((key.clone(), mapped.clone()));
    }
}

/// A map with at most one entry per key: indexed, checked and conditional
/// access to the mapped value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a unique map container",
    label = "`{Self}` may hold several entries with the same key"
)]
pub trait UniqueMapContainer: MapContainer + UniqueAssociativeContainer {
    /// The mapped value for `key`, inserting a default one first if absent.
    fn get_or_default(&mut self, key: Self::Key) -> &mut Self::Mapped
    where
        Self::Mapped: Default;

    /// Like [`get_or_default`](Self::get_or_default), cloning the key only
    /// when it has to be inserted.
    fn get_or_default_cloned(&mut self, key: &Self::Key) -> &mut Self::Mapped
    where
        Self::Key: Clone,
        Self::Mapped: Default,
    {
        self.get_or_default(key.clone())
    }

    fn at(&self, key: &Self::Key) -> Option<&Self::Mapped>;

    fn at_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Mapped>;

    /// Insert `(key, make())` if `key` is absent. `make` runs only then.
    fn try_emplace_with<F>(&mut self, key: Self::Key, make: F) -> bool
    where
        F: FnOnce() -> Self::Mapped;

    fn try_emplace(&mut self, key: Self::Key, mapped: Self::Mapped) -> bool {
        self.try_emplace_with(key, || mapped)
    }

    fn try_emplace_default(&mut self, key: Self::Key) -> bool
    where
        Self::Mapped: Default,
    {
        self.try_emplace_with(key, Self::Mapped::default)
    }

    /// Borrowed-key form: the key is cloned only if it gets inserted.
    fn try_emplace_cloned_key<F>(&mut self, key: &Self::Key, make: F) -> bool
    where
        Self::Key: Clone,
        F: FnOnce() -> Self::Mapped,
    {
        if self.contains(key) {
            false
        } else {
            self.try_emplace_with(key.clone(), make)
        }
    }

    fn try_emplace_cloned(&mut self, key: &Self::Key, mapped: &Self::Mapped) -> bool
    where
        Self::Key: Clone,
        Self::Mapped: Clone,
    {
        self.try_emplace_cloned_key(key, || mapped.clone())
    }

    /// Insert, or overwrite the mapped value of an existing entry. `true` if
    /// a new entry was inserted.
    fn insert_or_assign(&mut self, key: Self::Key, mapped: Self::Mapped) -> bool;

    fn insert_or_assign_cloned_key(&mut self, key: &Self::Key, mapped: Self::Mapped) -> bool
    where
        Self::Key: Clone,
    {
        match self.at_mut(key) {
            Some(slot) => {
                *slot = mapped;
                false
            }
            None => self.insert_or_assign(key.clone(), mapped),
        }
    }

    fn insert_or_assign_cloned(&mut self, key: &Self::Key, mapped: &Self::Mapped) -> bool
    where
        Self::Key: Clone,
        Self::Mapped: Clone,
    {
        self.insert_or_assign_cloned_key(key, mapped.clone())
    }
}

/// A map that keeps every entry, duplicates included. Key-addressed access to
/// a single mapped value does not exist here: there may be several.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a multiple map container",
    label = "`{Self}` keeps at most one entry per key"
)]
pub trait MultipleMapContainer: MapContainer + MultipleAssociativeContainer {}

impl<C: MapContainer + MultipleAssociativeContainer> MultipleMapContainer for C {}

// =============================================================================
// Combinations
// =============================================================================

define_conjunction! {
    /// A sorted map.
    OrderedMapContainer: MapContainer + OrderedAssociativeContainer;
    /// A sorted map with unique keys, such as `BTreeMap`.
    OrderedUniqueMapContainer: UniqueMapContainer + OrderedMapContainer;
    /// A sorted multimap.
    OrderedMultipleMapContainer: MultipleMapContainer + OrderedMapContainer;
    /// A hash map.
    UnorderedMapContainer: MapContainer + UnorderedAssociativeContainer;
    /// A hash map with unique keys, such as `HashMap`.
    UnorderedUniqueMapContainer: UniqueMapContainer + UnorderedMapContainer;
    /// A hash multimap.
    UnorderedMultipleMapContainer: MultipleMapContainer + UnorderedMapContainer;
}

// =============================================================================
// `*Of` Variants
// =============================================================================

/// A map from `K` to `M`.
pub trait MapContainerOf<K, M>: MapContainer<Key = K, Mapped = M> {}

impl<C, K, M> MapContainerOf<K, M> for C where C: MapContainer<Key = K, Mapped = M> {}

macro_rules! define_map_of {
    ($($base:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("A [`", stringify!($base), "`] from `K` to `M`.")]
                pub trait [<$base Of>]<K, M>: $base + MapContainerOf<K, M> {}

                impl<C, K, M> [<$base Of>]<K, M> for C where C: $base + MapContainerOf<K, M> {}
            )*
        }
    };
}

define_map_of!(
    UniqueMapContainer,
    MultipleMapContainer,
    OrderedMapContainer,
    OrderedUniqueMapContainer,
    OrderedMultipleMapContainer,
    UnorderedMapContainer,
    UnorderedUniqueMapContainer,
    UnorderedMultipleMapContainer,
);
