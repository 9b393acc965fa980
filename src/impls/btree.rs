//! `BTreeSet<K>` and `BTreeMap<K, V>`: sorted by `Ord`, one element per key.
//!
//! The comparator is the key type's own `Ord`, so it is the zero-sized
//! [`NaturalOrder`] and `with_comparator` has nothing to store.

use alloc::collections::btree_map::{self, BTreeMap, Entry};
use alloc::collections::btree_set::{self, BTreeSet};
use core::iter::Rev;
use core::ops::Bound;

use super::max_elements;
use crate::containers::{
    AssociativeContainer, ClearableContainer, Container, MapContainer, MutableContainer,
    OrderedAssociativeContainer, ReversibleContainer, SizedContainer, UniqueAssociativeContainer,
    UniqueMapContainer,
};
use crate::iterator::BidirectionalTag;
use crate::primitives::{KeyOrder, NaturalOrder};

// =============================================================================
// BTreeSet
// =============================================================================

impl<K> Container for BTreeSet<K> {
    type Value = K;
    type Category = BidirectionalTag;
    type Ref<'a> = &'a K where Self: 'a;
    type Iter<'a> = btree_set::Iter<'a, K> where Self: 'a;

    #[inline]
    fn iter(&self) -> btree_set::Iter<'_, K> {
        BTreeSet::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<K>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<K> SizedContainer for BTreeSet<K> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<K> ClearableContainer for BTreeSet<K> {
    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl<K> ReversibleContainer for BTreeSet<K> {
    type RevIter<'a> = Rev<btree_set::Iter<'a, K>> where Self: 'a;

    #[inline]
    fn iter_rev(&self) -> Self::RevIter<'_> {
        BTreeSet::iter(self).rev()
    }
}

impl<K: Ord> AssociativeContainer for BTreeSet<K> {
    type Key = K;
    type Matches<'a> = btree_set::Range<'a, K> where Self: 'a;

    #[inline]
    fn count(&self, key: &K) -> usize {
        usize::from(BTreeSet::contains(self, key))
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        BTreeSet::contains(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&K> {
        BTreeSet::get(self, key)
    }

    fn equal_range(&self, key: &K) -> btree_set::Range<'_, K> {
        BTreeSet::range::<K, _>(self, (Bound::Included(key), Bound::Included(key)))
    }

    #[inline]
    fn put(&mut self, value: K) {
        BTreeSet::insert(self, value);
    }

    #[inline]
    fn take(&mut self, key: &K) -> Option<K> {
        BTreeSet::take(self, key)
    }

    #[inline]
    fn retain_keys<F>(&mut self, keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        BTreeSet::retain(self, keep);
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(BTreeSet::remove(self, key))
    }
}

impl<K: Ord> UniqueAssociativeContainer for BTreeSet<K> {
    #[inline]
    fn insert(&mut self, value: K) -> bool {
        BTreeSet::insert(self, value)
    }
}

impl<K: Ord> OrderedAssociativeContainer for BTreeSet<K> {
    type KeyCompare = NaturalOrder;
    type ValueCompare = NaturalOrder;
    type Bounded<'a> = btree_set::Range<'a, K> where Self: 'a;

    #[inline]
    fn key_comp(&self) -> NaturalOrder {
        NaturalOrder
    }

    #[inline]
    fn value_comp(&self) -> NaturalOrder {
        NaturalOrder
    }

    #[inline]
    fn with_comparator(_compare: NaturalOrder) -> Self {
        BTreeSet::new()
    }

    fn lower_bound(&self, key: &K) -> btree_set::Range<'_, K> {
        BTreeSet::range::<K, _>(self, (Bound::Included(key), Bound::Unbounded))
    }

    fn upper_bound(&self, key: &K) -> btree_set::Range<'_, K> {
        BTreeSet::range::<K, _>(self, (Bound::Excluded(key), Bound::Unbounded))
    }
}

// =============================================================================
// BTreeMap
// =============================================================================

impl<K, V> Container for BTreeMap<K, V> {
    type Value = (K, V);
    type Category = BidirectionalTag;
    type Ref<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    #[inline]
    fn iter(&self) -> btree_map::Iter<'_, K, V> {
        BTreeMap::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<(K, V)>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<K, V> MutableContainer for BTreeMap<K, V> {
    type RefMut<'a> = (&'a K, &'a mut V) where Self: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, K, V> where Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> btree_map::IterMut<'_, K, V> {
        BTreeMap::iter_mut(self)
    }
}

impl<K, V> SizedContainer for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V> ClearableContainer for BTreeMap<K, V> {
    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}

impl<K, V> ReversibleContainer for BTreeMap<K, V> {
    type RevIter<'a> = Rev<btree_map::Iter<'a, K, V>> where Self: 'a;

    #[inline]
    fn iter_rev(&self) -> Self::RevIter<'_> {
        BTreeMap::iter(self).rev()
    }
}

impl<K: Ord, V> AssociativeContainer for BTreeMap<K, V> {
    type Key = K;
    type Matches<'a> = btree_map::Range<'a, K, V> where Self: 'a;

    #[inline]
    fn count(&self, key: &K) -> usize {
        usize::from(BTreeMap::contains_key(self, key))
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<(&K, &V)> {
        BTreeMap::get_key_value(self, key)
    }

    fn equal_range(&self, key: &K) -> btree_map::Range<'_, K, V> {
        BTreeMap::range::<K, _>(self, (Bound::Included(key), Bound::Included(key)))
    }

    fn put(&mut self, (key, mapped): (K, V)) {
        if let Entry::Vacant(slot) = BTreeMap::entry(self, key) {
            slot.insert(mapped);
        }
    }

    #[inline]
    fn take(&mut self, key: &K) -> Option<(K, V)> {
        BTreeMap::remove_entry(self, key)
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        BTreeMap::retain(self, |key, _| keep(key));
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(BTreeMap::remove(self, key).is_some())
    }
}

impl<K: Ord, V> UniqueAssociativeContainer for BTreeMap<K, V> {
    fn insert(&mut self, (key, mapped): (K, V)) -> bool {
        match BTreeMap::entry(self, key) {
            Entry::Vacant(slot) => {
                slot.insert(mapped);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

impl<K: Ord, V> OrderedAssociativeContainer for BTreeMap<K, V> {
    type KeyCompare = NaturalOrder;
    type ValueCompare = KeyOrder;
    type Bounded<'a> = btree_map::Range<'a, K, V> where Self: 'a;

    #[inline]
    fn key_comp(&self) -> NaturalOrder {
        NaturalOrder
    }

    #[inline]
    fn value_comp(&self) -> KeyOrder {
        KeyOrder
    }

    #[inline]
    fn with_comparator(_compare: NaturalOrder) -> Self {
        BTreeMap::new()
    }

    fn lower_bound(&self, key: &K) -> btree_map::Range<'_, K, V> {
        BTreeMap::range::<K, _>(self, (Bound::Included(key), Bound::Unbounded))
    }

    fn upper_bound(&self, key: &K) -> btree_map::Range<'_, K, V> {
        BTreeMap::range::<K, _>(self, (Bound::Excluded(key), Bound::Unbounded))
    }
}

impl<K: Ord, V> MapContainer for BTreeMap<K, V> {
    type Mapped = V;
}

impl<K: Ord, V> UniqueMapContainer for BTreeMap<K, V> {
    #[inline]
    fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        BTreeMap::entry(self, key).or_default()
    }

    #[inline]
    fn at(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn at_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn try_emplace_with<F>(&mut self, key: K, make: F) -> bool
    where
        F: FnOnce() -> V,
    {
        match BTreeMap::entry(self, key) {
            Entry::Vacant(slot) => {
                slot.insert(make());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    #[inline]
    fn insert_or_assign(&mut self, key: K, mapped: V) -> bool {
        BTreeMap::insert(self, key, mapped).is_none()
    }
}
