//! Shared fixtures: container types the standard library does not have, each
//! built to land on one particular spot of the predicate lattice.
//!
//! | Fixture | Lands on |
//! |---------|----------|
//! | `ForwardList<T>` | front growable, not sized, not double ended |
//! | `PackedBits` | sized container yielding values, not mutable |
//! | `SortedMultiSet<K>` | ordered multiple associative |
//! | `SortedMultiMap<K, V>` | ordered multiple map |
//! | `HashMultiSet<K>` | unordered multiple associative |
//! | `HashMultiMap<K, V>` | unordered multiple map |

#![allow(dead_code)]

use std::collections::hash_map::{self, HashMap, RandomState};
use std::iter::{Flatten, Repeat, Rev, Take, Zip};
use std::{option, slice};

use tola_concepts::{
    AssociativeContainer, BidirectionalTag, ClearableContainer, Container, ForwardTag,
    FrontGrowableContainer, InplaceFrontConstructingContainer, KeyOrder, MapContainer,
    MultipleAssociativeContainer, MutableContainer, NaturalEq, NaturalOrder,
    OrderedAssociativeContainer, ReversibleContainer, SequenceContainer, SizedContainer,
    UnorderedAssociativeContainer,
};

// ============================================================================
// ASSERTION MACROS
// ============================================================================

/// Assert that a type satisfies the given predicate expression.
/// Usage: `assert_is!(Type: Pred)` or `assert_is!(Type: Pred1 & !Pred2)`
macro_rules! assert_is {
    ($ty:ty : $($expr:tt)+) => {
        assert!(
            tola_concepts::satisfies!($ty: $($expr)+),
            "Expected `{}` to satisfy: {}",
            stringify!($ty),
            stringify!($($expr)+)
        );
    };
}

/// Assert that a type does NOT satisfy the given predicate expression.
macro_rules! assert_is_not {
    ($ty:ty : $($expr:tt)+) => {
        assert!(
            !tola_concepts::satisfies!($ty: $($expr)+),
            "Expected `{}` NOT to satisfy: {}",
            stringify!($ty),
            stringify!($($expr)+)
        );
    };
}

pub(crate) use {assert_is, assert_is_not};

// ============================================================================
// FORWARD LIST
// ============================================================================

/// A singly linked list: grows at the front only and does not track its
/// length.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct ForwardList<T> {
    head: Option<Box<Node<T>>>,
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        ForwardList { head: None }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList::default();
        for value in items.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

pub struct ForwardIter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Clone for ForwardIter<'a, T> {
    fn clone(&self) -> Self {
        ForwardIter { next: self.next }
    }
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct ForwardIterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for ForwardIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> Container for ForwardList<T> {
    type Value = T;
    type Category = ForwardTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = ForwardIter<'a, T> where Self: 'a;

    fn iter(&self) -> ForwardIter<'_, T> {
        ForwardIter { next: self.head.as_deref() }
    }

    fn max_size(&self) -> usize {
        usize::MAX
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> MutableContainer for ForwardList<T> {
    type RefMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = ForwardIterMut<'a, T> where Self: 'a;

    fn iter_mut(&mut self) -> ForwardIterMut<'_, T> {
        ForwardIterMut { next: self.head.as_deref_mut() }
    }
}

impl<T> ClearableContainer for ForwardList<T> {
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> SequenceContainer for ForwardList<T> {
    fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }
}

impl<T> FrontGrowableContainer for ForwardList<T> {
    fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }
}

impl<T> InplaceFrontConstructingContainer for ForwardList<T> {
    fn emplace_front_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.push_front(make());
    }
}

// ============================================================================
// PACKED BITS
// ============================================================================

/// Up to 64 booleans packed into one word. Elements are computed on the fly,
/// so iteration can only hand out references to the two static booleans and
/// there is nothing to hand out `&mut` to.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PackedBits {
    words: u64,
    len: usize,
}

impl PackedBits {
    pub const CAPACITY: usize = 64;

    pub fn push(&mut self, bit: bool) -> bool {
        if self.len == Self::CAPACITY {
            return false;
        }
        self.words |= u64::from(bit) << self.len;
        self.len += 1;
        true
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| (self.words >> index) & 1 == 1)
    }
}

impl FromIterator<bool> for PackedBits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = PackedBits::default();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

#[derive(Clone)]
pub struct BitsIter<'a> {
    bits: &'a PackedBits,
    index: usize,
}

impl<'a> Iterator for BitsIter<'a> {
    type Item = &'a bool;

    fn next(&mut self) -> Option<&'a bool> {
        let bit = self.bits.get(self.index)?;
        self.index += 1;
        Some(if bit { &true } else { &false })
    }
}

impl Container for PackedBits {
    type Value = bool;
    type Category = ForwardTag;
    type Ref<'a> = &'a bool;
    type Iter<'a> = BitsIter<'a>;

    fn iter(&self) -> BitsIter<'_> {
        BitsIter { bits: self, index: 0 }
    }

    fn max_size(&self) -> usize {
        Self::CAPACITY
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl SizedContainer for PackedBits {
    fn len(&self) -> usize {
        self.len
    }
}

impl ClearableContainer for PackedBits {
    fn clear(&mut self) {
        *self = PackedBits::default();
    }
}

// ============================================================================
// SORTED MULTISET / MULTIMAP
// ============================================================================

/// Sorted vector of elements; equal elements keep insertion order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SortedMultiSet<K> {
    items: Vec<K>,
}

/// Sorted vector of entries; entries with equal keys keep insertion order.
/// Entries are never handed out mutably, since that could reorder keys.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SortedMultiMap<K, V> {
    entries: Vec<(K, V)>,
}

/// Implements everything both sorted fixtures share; `$key` projects the key
/// out of an element.
macro_rules! impl_sorted_multi {
    ([$($generics:tt)*] $ty:ty, $field:ident, $elem:ty, $key_ty:ty, |$e:ident| $key:expr, $value_cmp:ty) => {
        impl<$($generics)*> Default for $ty {
            fn default() -> Self {
                Self { $field: Vec::new() }
            }
        }

        impl<$($generics)*> $ty {
            fn bounds(&self, key: &$key_ty) -> (usize, usize) {
                let lower = self.$field.partition_point(|$e| $key < key);
                let upper = self.$field.partition_point(|$e| $key <= key);
                (lower, upper)
            }
        }

        impl<$($generics)*> Extend<$elem> for $ty {
            fn extend<I: IntoIterator<Item = $elem>>(&mut self, iter: I) {
                for value in iter {
                    AssociativeContainer::put(self, value);
                }
            }
        }

        impl<$($generics)*> FromIterator<$elem> for $ty {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                let mut set = Self::default();
                set.extend(iter);
                set
            }
        }

        impl<$($generics)*> Container for $ty {
            type Value = $elem;
            type Category = BidirectionalTag;
            type Ref<'a> = &'a $elem where Self: 'a;
            type Iter<'a> = slice::Iter<'a, $elem> where Self: 'a;

            fn iter(&self) -> slice::Iter<'_, $elem> {
                self.$field.iter()
            }

            fn max_size(&self) -> usize {
                isize::MAX as usize
            }

            fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }
        }

        impl<$($generics)*> SizedContainer for $ty {
            fn len(&self) -> usize {
                self.$field.len()
            }
        }

        impl<$($generics)*> ClearableContainer for $ty {
            fn clear(&mut self) {
                self.$field.clear();
            }
        }

        impl<$($generics)*> ReversibleContainer for $ty {
            type RevIter<'a> = Rev<slice::Iter<'a, $elem>> where Self: 'a;

            fn iter_rev(&self) -> Self::RevIter<'_> {
                self.$field.iter().rev()
            }
        }

        impl<$($generics)*> AssociativeContainer for $ty {
            type Key = $key_ty;
            type Matches<'a> = slice::Iter<'a, $elem> where Self: 'a;

            fn count(&self, key: &$key_ty) -> usize {
                let (lower, upper) = self.bounds(key);
                upper - lower
            }

            fn find(&self, key: &$key_ty) -> Option<&$elem> {
                let (lower, upper) = self.bounds(key);
                self.$field[lower..upper].first()
            }

            fn equal_range(&self, key: &$key_ty) -> slice::Iter<'_, $elem> {
                let (lower, upper) = self.bounds(key);
                self.$field[lower..upper].iter()
            }

            fn put(&mut self, value: $elem) {
                let (_, upper) = {
                    let $e = &value;
                    self.bounds($key)
                };
                self.$field.insert(upper, value);
            }

            fn take(&mut self, key: &$key_ty) -> Option<$elem> {
                let (lower, upper) = self.bounds(key);
                (lower < upper).then(|| self.$field.remove(lower))
            }

            fn retain_keys<F>(&mut self, mut keep: F)
            where
                F: FnMut(&$key_ty) -> bool,
            {
                self.$field.retain(|$e| keep($key));
            }
        }

        impl<$($generics)*> MultipleAssociativeContainer for $ty {
            fn insert(&mut self, value: $elem) {
                AssociativeContainer::put(self, value);
            }
        }

        impl<$($generics)*> OrderedAssociativeContainer for $ty {
            type KeyCompare = NaturalOrder;
            type ValueCompare = $value_cmp;
            type Bounded<'a> = slice::Iter<'a, $elem> where Self: 'a;

            fn key_comp(&self) -> NaturalOrder {
                NaturalOrder
            }

            fn value_comp(&self) -> $value_cmp {
                <$value_cmp>::default()
            }

            fn with_comparator(_compare: NaturalOrder) -> Self {
                Self::default()
            }

            fn lower_bound(&self, key: &$key_ty) -> slice::Iter<'_, $elem> {
                let (lower, _) = self.bounds(key);
                self.$field[lower..].iter()
            }

            fn upper_bound(&self, key: &$key_ty) -> slice::Iter<'_, $elem> {
                let (_, upper) = self.bounds(key);
                self.$field[upper..].iter()
            }
        }
    };
}

impl_sorted_multi!([K: Ord] SortedMultiSet<K>, items, K, K, |item| item, NaturalOrder);
impl_sorted_multi!([K: Ord, V] SortedMultiMap<K, V>, entries, (K, V), K, |entry| &entry.0, KeyOrder);

impl<K: Ord, V> MapContainer for SortedMultiMap<K, V> {
    type Mapped = V;
}

// ============================================================================
// HASH MULTISET
// ============================================================================

/// Hash multiset stored as element counts.
#[derive(Clone, Debug)]
pub struct HashMultiSet<K> {
    counts: HashMap<K, usize>,
    len: usize,
}

impl<K> Default for HashMultiSet<K> {
    fn default() -> Self {
        HashMultiSet { counts: HashMap::new(), len: 0 }
    }
}

/// Yields each key as many times as it was inserted.
pub struct CountedIter<'a, K> {
    counts: hash_map::Iter<'a, K, usize>,
    current: Option<(&'a K, usize)>,
}

impl<'a, K> Clone for CountedIter<'a, K> {
    fn clone(&self) -> Self {
        CountedIter { counts: self.counts.clone(), current: self.current }
    }
}

impl<'a, K> Iterator for CountedIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            if let Some((key, remaining)) = &mut self.current {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(*key);
                }
            }
            let (key, &count) = self.counts.next()?;
            self.current = Some((key, count));
        }
    }
}

impl<K> Container for HashMultiSet<K> {
    type Value = K;
    type Category = ForwardTag;
    type Ref<'a> = &'a K where Self: 'a;
    type Iter<'a> = CountedIter<'a, K> where Self: 'a;

    fn iter(&self) -> CountedIter<'_, K> {
        CountedIter { counts: self.counts.iter(), current: None }
    }

    fn max_size(&self) -> usize {
        usize::MAX
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K> SizedContainer for HashMultiSet<K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K> ClearableContainer for HashMultiSet<K> {
    fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }
}

impl<K: Eq + std::hash::Hash + Clone> Extend<K> for HashMultiSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            AssociativeContainer::put(self, key);
        }
    }
}

impl<K: Eq + std::hash::Hash + Clone> FromIterator<K> for HashMultiSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = HashMultiSet::default();
        set.extend(iter);
        set
    }
}

impl<K: Eq + std::hash::Hash + Clone> AssociativeContainer for HashMultiSet<K> {
    type Key = K;
    type Matches<'a> = Flatten<option::IntoIter<Take<Repeat<&'a K>>>> where Self: 'a;

    fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn find(&self, key: &K) -> Option<&K> {
        self.counts.get_key_value(key).map(|(key, _)| key)
    }

    fn equal_range(&self, key: &K) -> Self::Matches<'_> {
        self.counts
            .get_key_value(key)
            .map(|(key, &count)| std::iter::repeat(key).take(count))
            .into_iter()
            .flatten()
    }

    fn put(&mut self, value: K) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    fn take(&mut self, key: &K) -> Option<K> {
        let count = self.counts.get_mut(key)?;
        *count -= 1;
        self.len -= 1;
        if *count == 0 {
            self.counts.remove_entry(key).map(|(key, _)| key)
        } else {
            Some(key.clone())
        }
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.counts.retain(|key, _| keep(key));
        self.len = self.counts.values().sum();
    }

    fn erase(&mut self, key: &K) -> usize {
        let removed = self.counts.remove(key).unwrap_or(0);
        self.len -= removed;
        removed
    }
}

impl<K: Eq + std::hash::Hash + Clone> MultipleAssociativeContainer for HashMultiSet<K> {
    fn insert(&mut self, value: K) {
        AssociativeContainer::put(self, value);
    }
}

// ============================================================================
// HASH MULTIMAP
// ============================================================================

/// Hash multimap stored as per-key value lists. No list is ever empty.
#[derive(Clone, Debug)]
pub struct HashMultiMap<K, V> {
    buckets: HashMap<K, Vec<V>>,
    len: usize,
}

impl<K, V> Default for HashMultiMap<K, V> {
    fn default() -> Self {
        HashMultiMap { buckets: HashMap::new(), len: 0 }
    }
}

/// Yields `(key, value)` for every value of every key.
pub struct EntriesIter<'a, K, V> {
    buckets: hash_map::Iter<'a, K, Vec<V>>,
    current: Option<(&'a K, slice::Iter<'a, V>)>,
}

impl<'a, K, V> Clone for EntriesIter<'a, K, V> {
    fn clone(&self) -> Self {
        EntriesIter { buckets: self.buckets.clone(), current: self.current.clone() }
    }
}

impl<'a, K, V> Iterator for EntriesIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*key, value));
                }
            }
            let (key, values) = self.buckets.next()?;
            self.current = Some((key, values.iter()));
        }
    }
}

impl<K, V> Container for HashMultiMap<K, V> {
    type Value = (K, V);
    type Category = ForwardTag;
    type Ref<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = EntriesIter<'a, K, V> where Self: 'a;

    fn iter(&self) -> EntriesIter<'_, K, V> {
        EntriesIter { buckets: self.buckets.iter(), current: None }
    }

    fn max_size(&self) -> usize {
        usize::MAX
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K, V> SizedContainer for HashMultiMap<K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> ClearableContainer for HashMultiMap<K, V> {
    fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<K: Eq + std::hash::Hash + Clone, V> Extend<(K, V)> for HashMultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for entry in iter {
            AssociativeContainer::put(self, entry);
        }
    }
}

impl<K: Eq + std::hash::Hash + Clone, V> FromIterator<(K, V)> for HashMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMultiMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Eq + std::hash::Hash + Clone, V> AssociativeContainer for HashMultiMap<K, V> {
    type Key = K;
    type Matches<'a> = Flatten<option::IntoIter<Zip<Repeat<&'a K>, slice::Iter<'a, V>>>>
    where
        Self: 'a;

    fn count(&self, key: &K) -> usize {
        self.buckets.get(key).map_or(0, Vec::len)
    }

    fn find(&self, key: &K) -> Option<(&K, &V)> {
        let (key, values) = self.buckets.get_key_value(key)?;
        values.first().map(|value| (key, value))
    }

    fn equal_range(&self, key: &K) -> Self::Matches<'_> {
        self.buckets
            .get_key_value(key)
            .map(|(key, values)| std::iter::repeat(key).zip(values.iter()))
            .into_iter()
            .flatten()
    }

    fn put(&mut self, (key, value): (K, V)) {
        self.buckets.entry(key).or_default().push(value);
        self.len += 1;
    }

    fn take(&mut self, key: &K) -> Option<(K, V)> {
        let values = self.buckets.get_mut(key)?;
        let value = values.remove(0);
        self.len -= 1;
        if values.is_empty() {
            self.buckets.remove_entry(key).map(|(key, _)| (key, value))
        } else {
            Some((key.clone(), value))
        }
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.buckets.retain(|key, _| keep(key));
        self.len = self.buckets.values().map(Vec::len).sum();
    }
}

impl<K: Eq + std::hash::Hash + Clone, V> MultipleAssociativeContainer for HashMultiMap<K, V> {
    fn insert(&mut self, entry: (K, V)) {
        AssociativeContainer::put(self, entry);
    }
}

impl<K: Eq + std::hash::Hash + Clone, V> MapContainer for HashMultiMap<K, V> {
    type Mapped = V;
}

// ============================================================================
// HASH BUCKET QUERIES
// ============================================================================

/// The bucket side of both hash fixtures, forwarded to the backing map.
macro_rules! impl_hash_buckets {
    ([$($generics:tt)*] $ty:ty, $field:ident) => {
        impl<$($generics)*> UnorderedAssociativeContainer for $ty {
            type Hasher = RandomState;
            type KeyEqual = NaturalEq;

            fn hash_function(&self) -> &RandomState {
                self.$field.hasher()
            }

            fn key_eq(&self) -> NaturalEq {
                NaturalEq
            }

            fn max_load_factor(&self) -> f32 {
                1.0
            }

            fn set_max_load_factor(&mut self, _load_factor: f32) {}

            fn bucket_count(&self) -> usize {
                self.$field.capacity()
            }

            fn rehash(&mut self, buckets: usize) {
                let additional = buckets.saturating_sub(self.$field.len());
                self.$field.reserve(additional);
            }

            fn reserve_for(&mut self, count: usize) {
                self.rehash(count);
            }

            fn with_buckets(buckets: usize) -> Self {
                Self { $field: HashMap::with_capacity(buckets), len: 0 }
            }

            fn with_buckets_and_hasher(buckets: usize, hasher: RandomState) -> Self {
                Self { $field: HashMap::with_capacity_and_hasher(buckets, hasher), len: 0 }
            }

            fn with_buckets_hasher_and_eq(
                buckets: usize,
                hasher: RandomState,
                _key_eq: NaturalEq,
            ) -> Self {
                Self::with_buckets_and_hasher(buckets, hasher)
            }
        }
    };
}

impl_hash_buckets!([K: Eq + std::hash::Hash + Clone] HashMultiSet<K>, counts);
impl_hash_buckets!([K: Eq + std::hash::Hash + Clone, V] HashMultiMap<K, V>, buckets);
