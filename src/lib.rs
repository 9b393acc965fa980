#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the hash container adapters
// - alloc: enables the Vec/VecDeque/LinkedList/BTree adapters in no_std
// - smallvec: default, enables the SmallVec adapter

//! # tola-concepts
//!
//! Compile-time predicates over container types.
//!
//! **Ask the type checker what a container can do.**
//!
//! ## Architecture
//!
//! Every predicate is a trait. A type satisfies a predicate by implementing
//! it, directly or through a blanket impl, and a generic function demands one
//! with an ordinary bound. The [`satisfies!`] macro turns the same question
//! into a `const bool` for any concrete type, without requiring the answer to
//! be `true`.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Decayed, Aggregate, EnumType, Regular,  |
//! |    callables, hash functions, orders, equivalences                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Iterators                                               |
//! |  - Category tags, iterator predicates, MockIterator,              |
//! |    ProxyReference                                                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Containers                                              |
//! |  - Container, sequences, associative containers, maps             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Adapters                                                |
//! |  - [T; N], Vec, SmallVec, VecDeque, LinkedList, BTree*, Hash*     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::{BTreeMap, HashSet, VecDeque};
//! use tola_concepts::prelude::*;
//!
//! // A bound in a signature.
//! fn walk_back<C: DoubleEndedContainerOf<i32>>(c: &C) -> usize {
//!     c.iter_rev().count()
//! }
//! assert_eq!(walk_back(&VecDeque::from([1, 2, 3])), 3);
//!
//! // A question answered at compile time.
//! const SORTED: bool = satisfies!(BTreeMap<u8, String>: OrderedUniqueMapContainer);
//! const NOT_SORTED: bool = satisfies!(HashSet<u8>: OrderedAssociativeContainer);
//! assert!(SORTED && !NOT_SORTED);
//!
//! // A requirement checked where the type is written.
//! assert_satisfies!(Vec<u8>: ContiguousContainer & InplaceBackConstructingContainer);
//! ```

// Allow `::tola_concepts` to work inside the crate itself
extern crate self as tola_concepts;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the `*Of` trait batches
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Iterators
// =============================================================================
pub mod iterator;

// =============================================================================
// Layer 2: Container Predicates
// =============================================================================
pub mod containers;

// =============================================================================
// Layer 3: Standard Container Adapters
// =============================================================================
mod impls;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use containers::*;
pub use iterator::{
    Access, Bidirectional, BidirectionalIterator, BidirectionalTag, ConstAccess, Contiguous,
    ContiguousIterator, ContiguousTag, ForwardIterator, ForwardTag, InputIterator, InputTag,
    IteratorCategory, IteratorOf, MockConstIterator, MockIterator, MockMutableIterator, MultiPass,
    MutableAccess, OutputIterator, OutputTag, ProxyReference, RandomAccess, RandomAccessIterator,
    RandomAccessTag, Readable,
};
pub use primitives::{
    Absent, Aggregate, Bool, CallableAs, Decayed, EnumType, EquivalenceRelation, HashFunction,
    InvocableAs, KeyOrder, NaturalEq, NaturalOrder, Present, Regular, Semiregular,
    StrictWeakOrder, TotallyOrdered, Trivial,
};
#[cfg(feature = "std")]
pub use primitives::{ErrorCodeEnum, ErrorConditionEnum};

// Re-export proc-macros
pub use macros::{Aggregate, EnumType, assert_satisfies, satisfies};

/// Every predicate and both checking macros.
pub mod prelude {
    pub use crate::containers::{
        // Base
        ClearableContainer, ClearableContainerOf, Container, ContainerOf, MutableContainer,
        MutableContainerOf, ReversibleContainer, ReversibleContainerOf, SizedContainer,
        SizedContainerOf,
        // Sequences
        BackGrowableContainer, BackGrowableContainerOf, ContiguousContainer,
        ContiguousContainerOf, DoubleEndedContainer, DoubleEndedContainerOf,
        FrontGrowableContainer, FrontGrowableContainerOf, InplaceBackConstructingContainer,
        InplaceBackConstructingContainerOf, InplaceConstructingSequenceContainer,
        InplaceConstructingSequenceContainerOf, InplaceFrontConstructingContainer,
        InplaceFrontConstructingContainerOf, RandomAccessContainer, RandomAccessContainerOf,
        ResizableSequenceContainer, ResizableSequenceContainerOf, SequenceContainer,
        SequenceContainerOf,
        // Associative
        AssociativeContainer, AssociativeContainerOf, MultipleAssociativeContainer,
        MultipleAssociativeContainerOf, OrderedAssociativeContainer,
        OrderedAssociativeContainerOf, OrderedMultipleAssociativeContainer,
        OrderedMultipleAssociativeContainerOf, OrderedUniqueAssociativeContainer,
        OrderedUniqueAssociativeContainerOf, UniqueAssociativeContainer,
        UniqueAssociativeContainerOf, UnorderedAssociativeContainer,
        UnorderedAssociativeContainerOf, UnorderedMultipleAssociativeContainer,
        UnorderedMultipleAssociativeContainerOf, UnorderedUniqueAssociativeContainer,
        UnorderedUniqueAssociativeContainerOf,
        // Maps
        MapContainer, MapContainerOf, MultipleMapContainer, MultipleMapContainerOf,
        OrderedMapContainer, OrderedMapContainerOf, OrderedMultipleMapContainer,
        OrderedMultipleMapContainerOf, OrderedUniqueMapContainer, OrderedUniqueMapContainerOf,
        UniqueMapContainer, UniqueMapContainerOf, UnorderedMapContainer,
        UnorderedMapContainerOf, UnorderedMultipleMapContainer, UnorderedMultipleMapContainerOf,
        UnorderedUniqueMapContainer, UnorderedUniqueMapContainerOf,
    };
    pub use crate::iterator::{
        BidirectionalIterator, ContiguousIterator, ForwardIterator, InputIterator,
        IteratorOf, OutputIterator, RandomAccessIterator,
    };
    pub use crate::primitives::{
        Aggregate, CallableAs, Decayed, EnumType, EquivalenceRelation, HashFunction, InvocableAs,
        Regular, Semiregular, StrictWeakOrder, TotallyOrdered, Trivial,
    };
    pub use macros::{assert_satisfies, satisfies};
}
