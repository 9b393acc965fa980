//! # Layer 1: Iterator Categories
//!
//! Category tags, the access modes a synthetic iterator can be built with,
//! and the iterator predicates each category maps to.
//!
//! ```text
//! InputIterator        Iterator
//!   ForwardIterator      + Clone (multi-pass)
//!     Bidirectional      + DoubleEndedIterator
//!       RandomAccess     + ExactSizeIterator + at(n)
//!         Contiguous     + as_slice()
//! OutputIterator<T>    Extend<T>
//! ```

pub mod mock;
pub mod proxy;

use core::iter::Rev;

use crate::primitives::bool::{Absent, Bool, Present};

pub use mock::{MockConstIterator, MockIterator, MockMutableIterator};
pub use proxy::ProxyReference;

// =============================================================================
// Category Tags
// =============================================================================

macro_rules! category_tags {
    ($($(#[$meta:meta])* $name:ident => $label:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl IteratorCategory for $name {
                const NAME: &'static str = $label;
            }
        )*
    };
}

category_tags! {
    /// Write-only, single pass.
    OutputTag => "output";
    /// Read-only, single pass.
    InputTag => "input";
    /// Multi-pass.
    ForwardTag => "forward";
    /// Multi-pass in both directions.
    BidirectionalTag => "bidirectional";
    /// Constant-time jumps and distances.
    RandomAccessTag => "random access";
    /// Random access over elements laid out next to each other in memory.
    ContiguousTag => "contiguous";
}

/// An iterator category tag.
pub trait IteratorCategory: 'static {
    const NAME: &'static str;
}

/// Categories whose iterators can be read from.
///
/// `Item` is what dereferencing yields: a proxy for plain input iterators,
/// a genuine reference from forward upward.
pub trait Readable: IteratorCategory {
    type Item<'a, T: 'a, A: Access>;
}

/// Categories whose iterators can be copied and traversed again.
#[diagnostic::on_unimplemented(
    message = "iterator category `{Self}` is not multi-pass",
    label = "containers need at least forward iteration"
)]
pub trait MultiPass: Readable {}

#[diagnostic::on_unimplemented(
    message = "iterator category `{Self}` is not bidirectional",
    label = "reverse traversal needs a bidirectional category"
)]
pub trait Bidirectional: MultiPass {}

#[diagnostic::on_unimplemented(
    message = "iterator category `{Self}` does not support random access"
)]
pub trait RandomAccess: Bidirectional {}

#[diagnostic::on_unimplemented(message = "iterator category `{Self}` is not contiguous")]
pub trait Contiguous: RandomAccess {}

impl Readable for InputTag {
    type Item<'a, T: 'a, A: Access> = ProxyReference<T, Present, A::Writable>;
}

macro_rules! reference_categories {
    ($($tag:ident: $($marker:ident),*;)*) => {
        $(
            impl Readable for $tag {
                type Item<'a, T: 'a, A: Access> = A::Ref<'a, T>;
            }
            $(impl $marker for $tag {})*
        )*
    };
}

reference_categories! {
    ForwardTag: MultiPass;
    BidirectionalTag: MultiPass, Bidirectional;
    RandomAccessTag: MultiPass, Bidirectional, RandomAccess;
    ContiguousTag: MultiPass, Bidirectional, RandomAccess, Contiguous;
}

// =============================================================================
// Access Modes
// =============================================================================

/// Read-only or read-write access to the elements behind an iterator.
pub trait Access: 'static {
    const NAME: &'static str;
    type Writable: Bool;
    type Ref<'a, T: 'a>;
}

/// Shared access: items are `&T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstAccess;

/// Exclusive access: items are `&mut T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MutableAccess;

impl Access for ConstAccess {
    const NAME: &'static str = "const";
    type Writable = Absent;
    type Ref<'a, T: 'a> = &'a T;
}

impl Access for MutableAccess {
    const NAME: &'static str = "mutable";
    type Writable = Present;
    type Ref<'a, T: 'a> = &'a mut T;
}

// =============================================================================
// Iterator Predicates
// =============================================================================

/// Something that accepts values written through it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an output iterator for `{T}`",
    label = "`{Self}` does not implement `Extend<{T}>`"
)]
pub trait OutputIterator<T>: Extend<T> {
    /// Write one value.
    #[inline]
    fn write(&mut self, value: T) {
        self.extend(core::iter::once(value));
    }
}

impl<T, E: Extend<T>> OutputIterator<T> for E {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an input iterator",
    label = "`{Self}` does not implement `Iterator`"
)]
pub trait InputIterator: Iterator {}

impl<I: Iterator> InputIterator for I {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a forward iterator",
    label = "`{Self}` cannot be cloned to traverse again",
    note = "forward iterators are `Iterator + Clone`"
)]
pub trait ForwardIterator: InputIterator + Clone {}

impl<I: Iterator + Clone> ForwardIterator for I {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional iterator",
    note = "bidirectional iterators are `DoubleEndedIterator + Clone`"
)]
pub trait BidirectionalIterator: ForwardIterator + DoubleEndedIterator {}

impl<I: DoubleEndedIterator + Clone> BidirectionalIterator for I {}

/// A bidirectional iterator with a known length and constant-time access to
/// any remaining element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random access iterator",
    note = "random access iterators are exact-size and implement `RandomAccessIterator::at`"
)]
pub trait RandomAccessIterator: BidirectionalIterator + ExactSizeIterator {
    /// The `n`th remaining element, without advancing.
    fn at(&self, n: usize) -> Option<Self::Item>;
}

/// A random access iterator over memory that can be viewed as one slice.
#[diagnostic::on_unimplemented(message = "`{Self}` is not a contiguous iterator")]
pub trait ContiguousIterator: RandomAccessIterator {
    type Element;

    /// The remaining elements.
    fn as_slice(&self) -> &[Self::Element];
}

/// Links a category tag to the iterator predicate it stands for.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not iterate with `{C}` capabilities"
)]
pub trait IteratorOf<C: IteratorCategory>: Iterator {}

impl<I: InputIterator> IteratorOf<InputTag> for I {}
impl<I: ForwardIterator> IteratorOf<ForwardTag> for I {}
impl<I: BidirectionalIterator> IteratorOf<BidirectionalTag> for I {}
impl<I: RandomAccessIterator> IteratorOf<RandomAccessTag> for I {}
impl<I: ContiguousIterator> IteratorOf<ContiguousTag> for I {}

// =============================================================================
// Std Iterators
// =============================================================================

impl<'a, T> RandomAccessIterator for core::slice::Iter<'a, T> {
    #[inline]
    fn at(&self, n: usize) -> Option<&'a T> {
        core::slice::Iter::as_slice(self).get(n)
    }
}

impl<'a, T> ContiguousIterator for core::slice::Iter<'a, T> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        core::slice::Iter::as_slice(self)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> RandomAccessIterator for alloc::collections::vec_deque::Iter<'a, T> {
    #[inline]
    fn at(&self, n: usize) -> Option<&'a T> {
        self.clone().nth(n)
    }
}

impl<I: RandomAccessIterator> RandomAccessIterator for Rev<I> {
    #[inline]
    fn at(&self, n: usize) -> Option<I::Item> {
        self.clone().nth(n)
    }
}
