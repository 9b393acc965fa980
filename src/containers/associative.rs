//! Associative containers: elements found by key rather than by position.
//!
//! ```text
//!                  AssociativeContainer
//!        +-----------+-----------+-------------+
//!      Unique     Multiple    Ordered       Unordered
//! ```
//!
//! Uniqueness and ordering are independent axes; every pairing is a named
//! predicate made of nothing but the two axes.
//!
//! Rust's associative containers take no position hints, so insertion that
//! does not care whether a key was already present is the `put` family, and
//! the unique/multiple split shows in what `insert` reports.
//!
//! ```compile_fail
//! use std::collections::BTreeSet;
//! use tola_concepts::AssociativeContainer;
//!
//! #[derive(PartialEq, Eq, PartialOrd, Ord)]
//! struct Ticket(u32);
//!
//! let mut tickets: BTreeSet<Ticket> = BTreeSet::new();
//! AssociativeContainer::put(&mut tickets, Ticket(1));
//! // `Ticket` is not `Clone`, so there is no copy-insertion.
//! AssociativeContainer::put_cloned(&mut tickets, &Ticket(2));
//! ```

use super::base::{ClearableContainer, Container, ContainerOf, SizedContainer};
use crate::iterator::{Bidirectional, BidirectionalIterator};
use crate::primitives::{EquivalenceRelation, HashFunction, StrictWeakOrder};

// =============================================================================
// Associative
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an associative container",
    label = "`{Self}` does not satisfy `AssociativeContainer`",
    note = "associative containers are sized, clearable, `Default + FromIterator + Extend`, and look elements up by key"
)]
pub trait AssociativeContainer:
    SizedContainer
    + ClearableContainer
    + Default
    + FromIterator<<Self as Container>::Value>
    + Extend<<Self as Container>::Value>
{
    type Key;

    /// Every element equivalent to a key.
    type Matches<'a>: Iterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    // --- lookup ---

    /// Number of elements with this key.
    fn count(&self, key: &Self::Key) -> usize;

    fn contains(&self, key: &Self::Key) -> bool {
        self.find(key).is_some()
    }

    /// Some element with this key.
    fn find(&self, key: &Self::Key) -> Option<Self::Ref<'_>>;

    fn equal_range(&self, key: &Self::Key) -> Self::Matches<'_>;

    // --- insertion without a uniqueness report ---

    /// Insert `value`. A unique container keeps the element it already has
    /// for an equivalent key.
    fn put(&mut self, value: Self::Value);

    fn put_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> Self::Value,
    {
        self.put(make());
    }

    fn put_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.put(value.clone());
    }

    fn put_default(&mut self)
    where
        Self::Value: Default,
    {
        self.put(Self::Value::default());
    }

    /// `put` every item in order. Unlike `Extend` on the std maps, an
    /// earlier element for a key is never replaced by a later one.
    fn put_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Value>,
    {
        for value in iter {
            self.put(value);
        }
    }

    fn put_slice(&mut self, values: &[Self::Value])
    where
        Self::Value: Clone,
    {
        self.put_iter(values.iter().cloned());
    }

    // --- construction and assignment ---

    fn from_slice(values: &[Self::Value]) -> Self
    where
        Self::Value: Clone,
    {
        let mut container = Self::default();
        container.put_slice(values);
        container
    }

    fn assign_slice(&mut self, values: &[Self::Value])
    where
        Self::Value: Clone,
    {
        self.clear();
        self.put_slice(values);
    }

    // --- erasure ---

    /// Remove one element with this key and hand it back.
    fn take(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Keep only the elements whose key satisfies `keep`.
    fn retain_keys<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Key) -> bool;

    /// Remove every element with this key; returns how many were removed.
    fn erase(&mut self, key: &Self::Key) -> usize {
        let mut removed = 0;
        while self.take(key).is_some() {
            removed += 1;
        }
        removed
    }
}

// =============================================================================
// Uniqueness Axis
// =============================================================================

/// At most one element per key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a unique associative container",
    label = "`{Self}` may hold several elements with the same key"
)]
pub trait UniqueAssociativeContainer: AssociativeContainer {
    /// Insert unless the key is present; `true` if `value` went in.
    fn insert(&mut self, value: Self::Value) -> bool;

    fn insert_with<F>(&mut self, make: F) -> bool
    where
        F: FnOnce() -> Self::Value,
    {
        self.insert(make())
    }

    fn insert_cloned(&mut self, value: &Self::Value) -> bool
    where
        Self::Value: Clone,
    {
        self.insert(value.clone())
    }

    fn insert_default(&mut self) -> bool
    where
        Self::Value: Default,
    {
        self.insert(Self::Value::default())
    }
}

/// Any number of elements per key; insertion always succeeds.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a multiple associative container",
    label = "`{Self}` keeps at most one element per key"
)]
pub trait MultipleAssociativeContainer: AssociativeContainer {
    fn insert(&mut self, value: Self::Value);

    fn insert_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> Self::Value,
    {
        self.insert(make());
    }

    fn insert_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.insert(value.clone());
    }

    fn insert_default(&mut self)
    where
        Self::Value: Default,
    {
        self.insert(Self::Value::default());
    }
}

// =============================================================================
// Ordering Axis
// =============================================================================

/// Elements kept sorted by a strict weak order on keys.
///
/// Containers of totally ordered elements must themselves be totally
/// ordered; see [`lifts_total_order!`](crate::lifts_total_order).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an ordered associative container",
    label = "`{Self}` does not keep its keys sorted",
    note = "ordered associative containers expose a `StrictWeakOrder` comparator and bound searches"
)]
pub trait OrderedAssociativeContainer:
    AssociativeContainer + Container<Category: Bidirectional>
{
    type KeyCompare: StrictWeakOrder<Self::Key>;
    type ValueCompare: StrictWeakOrder<Self::Value>;

    /// Elements from a bound to the end, in order.
    type Bounded<'a>: BidirectionalIterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    fn key_comp(&self) -> Self::KeyCompare;

    fn value_comp(&self) -> Self::ValueCompare;

    /// An empty container ordered by `compare`.
    fn with_comparator(compare: Self::KeyCompare) -> Self;

    fn from_iter_with_comparator<I>(iter: I, compare: Self::KeyCompare) -> Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut container = Self::with_comparator(compare);
        container.put_iter(iter);
        container
    }

    fn from_slice_with_comparator(values: &[Self::Value], compare: Self::KeyCompare) -> Self
    where
        Self::Value: Clone,
    {
        Self::from_iter_with_comparator(values.iter().cloned(), compare)
    }

    /// Elements whose key is not less than `key`.
    fn lower_bound(&self, key: &Self::Key) -> Self::Bounded<'_>;

    /// Elements whose key is greater than `key`.
    fn upper_bound(&self, key: &Self::Key) -> Self::Bounded<'_>;
}

/// Elements spread over hash buckets.
///
/// Rust's hash tables do not expose their buckets; adapters report capacity
/// as the bucket count, which makes the maximum load factor `1.0`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an unordered associative container",
    label = "`{Self}` is not a hash table",
    note = "unordered associative containers expose a `HashFunction` and an `EquivalenceRelation` over keys"
)]
pub trait UnorderedAssociativeContainer: AssociativeContainer {
    type Hasher: HashFunction<Self::Key>;
    type KeyEqual: EquivalenceRelation<Self::Key>;

    fn hash_function(&self) -> &Self::Hasher;

    fn key_eq(&self) -> Self::KeyEqual;

    /// Average number of elements per bucket.
    fn load_factor(&self) -> f32 {
        match self.bucket_count() {
            0 => 0.0,
            buckets => self.len() as f32 / buckets as f32,
        }
    }

    fn max_load_factor(&self) -> f32;

    /// A hint; containers with a fixed policy may ignore it.
    fn set_max_load_factor(&mut self, load_factor: f32);

    fn bucket_count(&self) -> usize;

    /// Grow to at least `buckets` buckets.
    fn rehash(&mut self, buckets: usize);

    /// Make room for `count` elements in total without rehashing.
    fn reserve_for(&mut self, count: usize);

    fn with_buckets(buckets: usize) -> Self;

    fn with_buckets_and_hasher(buckets: usize, hasher: Self::Hasher) -> Self;

    fn with_buckets_hasher_and_eq(
        buckets: usize,
        hasher: Self::Hasher,
        key_eq: Self::KeyEqual,
    ) -> Self;

    fn from_iter_with_buckets<I>(iter: I, buckets: usize) -> Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut container = Self::with_buckets(buckets);
        container.put_iter(iter);
        container
    }

    fn from_iter_with_buckets_and_hasher<I>(iter: I, buckets: usize, hasher: Self::Hasher) -> Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut container = Self::with_buckets_and_hasher(buckets, hasher);
        container.put_iter(iter);
        container
    }

    fn from_iter_with_buckets_hasher_and_eq<I>(
        iter: I,
        buckets: usize,
        hasher: Self::Hasher,
        key_eq: Self::KeyEqual,
    ) -> Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut container = Self::with_buckets_hasher_and_eq(buckets, hasher, key_eq);
        container.put_iter(iter);
        container
    }

    fn from_slice_with_buckets(values: &[Self::Value], buckets: usize) -> Self
    where
        Self::Value: Clone,
    {
        Self::from_iter_with_buckets(values.iter().cloned(), buckets)
    }

    fn from_slice_with_buckets_and_hasher(
        values: &[Self::Value],
        buckets: usize,
        hasher: Self::Hasher,
    ) -> Self
    where
        Self::Value: Clone,
    {
        Self::from_iter_with_buckets_and_hasher(values.iter().cloned(), buckets, hasher)
    }

    fn from_slice_with_buckets_hasher_and_eq(
        values: &[Self::Value],
        buckets: usize,
        hasher: Self::Hasher,
        key_eq: Self::KeyEqual,
    ) -> Self
    where
        Self::Value: Clone,
    {
        Self::from_iter_with_buckets_hasher_and_eq(values.iter().cloned(), buckets, hasher, key_eq)
    }
}

// =============================================================================
// Combinations
// =============================================================================

/// Defines a predicate that is the conjunction of its parents and nothing
/// more, with the blanket impl that makes it so.
macro_rules! define_conjunction {
    ($($(#[$meta:meta])* $name:ident: $first:ident $(+ $rest:ident)*;)*) => {
        $(
            $(#[$meta])*
            pub trait $name: $first $(+ $rest)* {}

            impl<C: $first $(+ $rest)*> $name for C {}
        )*
    };
}

pub(crate) use define_conjunction;

define_conjunction! {
    /// A sorted set, such as `BTreeSet`.
    OrderedUniqueAssociativeContainer: OrderedAssociativeContainer + UniqueAssociativeContainer;
    /// A sorted multiset.
    OrderedMultipleAssociativeContainer: OrderedAssociativeContainer + MultipleAssociativeContainer;
    /// A hash set, such as `HashSet`.
    UnorderedUniqueAssociativeContainer: UnorderedAssociativeContainer + UniqueAssociativeContainer;
    /// A hash multiset.
    UnorderedMultipleAssociativeContainer: UnorderedAssociativeContainer + MultipleAssociativeContainer;
}

// =============================================================================
// `*Of` Variants
// =============================================================================

/// An associative container of `V` keyed by `K`.
pub trait AssociativeContainerOf<V, K = V>:
    AssociativeContainer<Key = K> + ContainerOf<V>
{
}

impl<C, V, K> AssociativeContainerOf<V, K> for C where C: AssociativeContainer<Key = K> + ContainerOf<V> {}

macro_rules! define_associative_of {
    ($($base:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("A [`", stringify!($base), "`] of `V` keyed by `K`.")]
                pub trait [<$base Of>]<V, K = V>: $base + AssociativeContainerOf<V, K> {}

                impl<C, V, K> [<$base Of>]<V, K> for C where C: $base + AssociativeContainerOf<V, K> {}
            )*
        }
    };
}

define_associative_of!(
    UniqueAssociativeContainer,
    MultipleAssociativeContainer,
    OrderedAssociativeContainer,
    UnorderedAssociativeContainer,
    OrderedUniqueAssociativeContainer,
    OrderedMultipleAssociativeContainer,
    UnorderedUniqueAssociativeContainer,
    UnorderedMultipleAssociativeContainer,
);
