//! `HashSet<K, S>` and `HashMap<K, V, S>`: hashed by `S`, one element per key.
//!
//! The standard tables hide their buckets. Capacity stands in for the bucket
//! count, so the maximum load factor is fixed at `1.0` and setting it is a
//! no-op.

use core::hash::{BuildHasher, Hash};
use core::option;
use std::collections::hash_map::{self, Entry, HashMap};
use std::collections::hash_set::{self, HashSet};

use super::max_elements;
use crate::containers::{
    AssociativeContainer, ClearableContainer, Container, MapContainer, MutableContainer,
    SizedContainer, UniqueAssociativeContainer, UniqueMapContainer, UnorderedAssociativeContainer,
};
use crate::iterator::ForwardTag;
use crate::primitives::NaturalEq;

/// Load factor implied by reporting capacity as the bucket count.
const MAX_LOAD_FACTOR: f32 = 1.0;

// =============================================================================
// HashSet
// =============================================================================

impl<K, S> Container for HashSet<K, S> {
    type Value = K;
    type Category = ForwardTag;
    type Ref<'a> = &'a K where Self: 'a;
    type Iter<'a> = hash_set::Iter<'a, K> where Self: 'a;

    #[inline]
    fn iter(&self) -> hash_set::Iter<'_, K> {
        HashSet::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<K>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, S> SizedContainer for HashSet<K, S> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<K, S> ClearableContainer for HashSet<K, S> {
    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<K, S> AssociativeContainer for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Matches<'a> = option::IntoIter<&'a K> where Self: 'a;

    #[inline]
    fn count(&self, key: &K) -> usize {
        usize::from(HashSet::contains(self, key))
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        HashSet::contains(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&K> {
        HashSet::get(self, key)
    }

    #[inline]
    fn equal_range(&self, key: &K) -> option::IntoIter<&K> {
        HashSet::get(self, key).into_iter()
    }

    #[inline]
    fn put(&mut self, value: K) {
        HashSet::insert(self, value);
    }

    #[inline]
    fn take(&mut self, key: &K) -> Option<K> {
        HashSet::take(self, key)
    }

    #[inline]
    fn retain_keys<F>(&mut self, keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        HashSet::retain(self, keep);
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(HashSet::remove(self, key))
    }
}

impl<K, S> UniqueAssociativeContainer for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn insert(&mut self, value: K) -> bool {
        HashSet::insert(self, value)
    }
}

impl<K, S> UnorderedAssociativeContainer for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Hasher = S;
    type KeyEqual = NaturalEq;

    #[inline]
    fn hash_function(&self) -> &S {
        HashSet::hasher(self)
    }

    #[inline]
    fn key_eq(&self) -> NaturalEq {
        NaturalEq
    }

    #[inline]
    fn max_load_factor(&self) -> f32 {
        MAX_LOAD_FACTOR
    }

    #[inline]
    fn set_max_load_factor(&mut self, _load_factor: f32) {}

    #[inline]
    fn bucket_count(&self) -> usize {
        HashSet::capacity(self)
    }

    fn rehash(&mut self, buckets: usize) {
        let len = HashSet::len(self);
        if buckets > HashSet::capacity(self) {
            HashSet::reserve(self, buckets - len);
        }
    }

    #[inline]
    fn reserve_for(&mut self, count: usize) {
        let additional = count.saturating_sub(HashSet::len(self));
        HashSet::reserve(self, additional);
    }

    #[inline]
    fn with_buckets(buckets: usize) -> Self {
        HashSet::with_capacity_and_hasher(buckets, S::default())
    }

    #[inline]
    fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        HashSet::with_capacity_and_hasher(buckets, hasher)
    }

    #[inline]
    fn with_buckets_hasher_and_eq(buckets: usize, hasher: S, _key_eq: NaturalEq) -> Self {
        HashSet::with_capacity_and_hasher(buckets, hasher)
    }
}

// =============================================================================
// HashMap
// =============================================================================

impl<K, V, S> Container for HashMap<K, V, S> {
    type Value = (K, V);
    type Category = ForwardTag;
    type Ref<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    #[inline]
    fn iter(&self) -> hash_map::Iter<'_, K, V> {
        HashMap::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<(K, V)>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V, S> MutableContainer for HashMap<K, V, S> {
    type RefMut<'a> = (&'a K, &'a mut V) where Self: 'a;
    type IterMut<'a> = hash_map::IterMut<'a, K, V> where Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> hash_map::IterMut<'_, K, V> {
        HashMap::iter_mut(self)
    }
}

impl<K, V, S> SizedContainer for HashMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V, S> ClearableContainer for HashMap<K, V, S> {
    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

impl<K, V, S> AssociativeContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Matches<'a> = option::IntoIter<(&'a K, &'a V)> where Self: 'a;

    #[inline]
    fn count(&self, key: &K) -> usize {
        usize::from(HashMap::contains_key(self, key))
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<(&K, &V)> {
        HashMap::get_key_value(self, key)
    }

    #[inline]
    fn equal_range(&self, key: &K) -> option::IntoIter<(&K, &V)> {
        HashMap::get_key_value(self, key).into_iter()
    }

    fn put(&mut self, (key, mapped): (K, V)) {
        if let Entry::Vacant(slot) = HashMap::entry(self, key) {
            slot.insert(mapped);
        }
    }

    #[inline]
    fn take(&mut self, key: &K) -> Option<(K, V)> {
        HashMap::remove_entry(self, key)
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        HashMap::retain(self, |key, _| keep(key));
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(HashMap::remove(self, key).is_some())
    }
}

impl<K, V, S> UniqueAssociativeContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn insert(&mut self, (key, mapped): (K, V)) -> bool {
        match HashMap::entry(self, key) {
            Entry::Vacant(slot) => {
                slot.insert(mapped);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

impl<K, V, S> UnorderedAssociativeContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Hasher = S;
    type KeyEqual = NaturalEq;

    #[inline]
    fn hash_function(&self) -> &S {
        HashMap::hasher(self)
    }

    #[inline]
    fn key_eq(&self) -> NaturalEq {
        NaturalEq
    }

    #[inline]
    fn max_load_factor(&self) -> f32 {
        MAX_LOAD_FACTOR
    }

    #[inline]
    fn set_max_load_factor(&mut self, _load_factor: f32) {}

    #[inline]
    fn bucket_count(&self) -> usize {
        HashMap::capacity(self)
    }

    fn rehash(&mut self, buckets: usize) {
        let len = HashMap::len(self);
        if buckets > HashMap::capacity(self) {
            HashMap::reserve(self, buckets - len);
        }
    }

    #[inline]
    fn reserve_for(&mut self, count: usize) {
        let additional = count.saturating_sub(HashMap::len(self));
        HashMap::reserve(self, additional);
    }

    #[inline]
    fn with_buckets(buckets: usize) -> Self {
        HashMap::with_capacity_and_hasher(buckets, S::default())
    }

    #[inline]
    fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        HashMap::with_capacity_and_hasher(buckets, hasher)
    }

    #[inline]
    fn with_buckets_hasher_and_eq(buckets: usize, hasher: S, _key_eq: NaturalEq) -> Self {
        HashMap::with_capacity_and_hasher(buckets, hasher)
    }
}

impl<K, V, S> MapContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Mapped = V;
}

impl<K, V, S> UniqueMapContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        HashMap::entry(self, key).or_default()
    }

    #[inline]
    fn at(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn at_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn try_emplace_with<F>(&mut self, key: K, make: F) -> bool
    where
        F: FnOnce() -> V,
    {
        match HashMap::entry(self, key) {
            Entry::Vacant(slot) => {
                slot.insert(make());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    #[inline]
    fn insert_or_assign(&mut self, key: K, mapped: V) -> bool {
        HashMap::insert(self, key, mapped).is_none()
    }
}
