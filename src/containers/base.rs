//! The base container predicate and its orthogonal refinements.
//!
//! ```text
//!                 Container
//!   +--------------+---+-----------+------------------+
//!   |              |               |                  |
//! Mutable        Sized         Clearable          Reversible
//! ```
//!
//! None of the refinements implies another; each only adds to `Container`.

use crate::iterator::{Bidirectional, BidirectionalIterator, ForwardIterator, IteratorOf, MultiPass};

mod sealed {
    pub trait SealedRef<V> {}
    pub trait SealedMut<V> {}
}

// =============================================================================
// Element References
// =============================================================================

/// A genuine shared reference to a container element.
///
/// Implemented for `&V` and, for maps whose elements are `(K, M)` pairs, for
/// `(&K, &M)`. Proxy objects cannot implement it.
pub trait ElementRef<'a, V>: Copy + sealed::SealedRef<V> {}

impl<'a, V> sealed::SealedRef<V> for &'a V {}
impl<'a, V> ElementRef<'a, V> for &'a V {}

impl<'a, K, M> sealed::SealedRef<(K, M)> for (&'a K, &'a M) {}
impl<'a, K, M> ElementRef<'a, (K, M)> for (&'a K, &'a M) {}

/// A genuine exclusive reference to a container element.
///
/// Map keys stay shared: `(&K, &mut M)`.
pub trait ElementMut<'a, V>: sealed::SealedMut<V> {}

impl<'a, V> sealed::SealedMut<V> for &'a mut V {}
impl<'a, V> ElementMut<'a, V> for &'a mut V {}

impl<'a, K, M> sealed::SealedMut<(K, M)> for (&'a K, &'a mut M) {}
impl<'a, K, M> ElementMut<'a, (K, M)> for (&'a K, &'a mut M) {}

// =============================================================================
// Container
// =============================================================================

/// A type that owns elements and hands out shared references to them through
/// a multi-pass iterator.
///
/// Sizes are `usize` and distances `isize` throughout.
///
/// A container must also lift the value semantics of its elements: see
/// [`lifts_value_semantics!`](crate::lifts_value_semantics).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a container",
    label = "`{Self}` does not satisfy `Container`",
    note = "a container yields genuine references to its elements through a multi-pass iterator"
)]
pub trait Container: Sized {
    type Value;

    /// Iterator category tag of [`Container::Iter`].
    type Category: MultiPass;

    type Ref<'a>: ElementRef<'a, Self::Value>
    where
        Self: 'a;

    type Iter<'a>: IteratorOf<Self::Category, Item = Self::Ref<'a>> + ForwardIterator
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    /// Upper bound on the number of elements the container can ever hold.
    fn max_size(&self) -> usize;

    fn is_empty(&self) -> bool;
}

/// A container whose elements can be modified in place through a genuine
/// `&mut` reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mutable container",
    label = "`{Self}` does not hand out `&mut` references to its elements"
)]
pub trait MutableContainer: Container {
    type RefMut<'a>: ElementMut<'a, Self::Value>
    where
        Self: 'a;

    type IterMut<'a>: Iterator<Item = Self::RefMut<'a>>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

/// A container that knows its length in constant time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sized container",
    label = "`{Self}` has no `len`"
)]
pub trait SizedContainer: Container {
    fn len(&self) -> usize;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a clearable container",
    label = "`{Self}` has no `clear`"
)]
pub trait ClearableContainer: Container {
    fn clear(&mut self);
}

/// A container that can be traversed back to front.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reversible container",
    label = "`{Self}` cannot be iterated in reverse",
    note = "reversible containers iterate with a bidirectional category"
)]
pub trait ReversibleContainer: Container<Category: Bidirectional> {
    type RevIter<'a>: BidirectionalIterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    fn iter_rev(&self) -> Self::RevIter<'_>;
}

// =============================================================================
// `*Of` Variants
// =============================================================================

/// A container of `V`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a container of `{V}`",
    label = "`{Self}` is not a container or its `Value` is not `{V}`"
)]
pub trait ContainerOf<V>: Container<Value = V> {}

impl<C: Container<Value = V>, V> ContainerOf<V> for C {}

/// Defines `<Predicate>Of<V>`: the predicate with `Value` pinned to `V`.
macro_rules! define_container_of {
    ($($base:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("A [`", stringify!($base), "`] of `V`.")]
                pub trait [<$base Of>]<V>: $base + ContainerOf<V> {}

                impl<C: $base + ContainerOf<V>, V> [<$base Of>]<V> for C {}
            )*
        }
    };
}

pub(crate) use define_container_of;

define_container_of!(
    MutableContainer,
    SizedContainer,
    ClearableContainer,
    ReversibleContainer,
);
