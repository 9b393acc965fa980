//! Sequence containers: elements in a caller-controlled linear order.
//!
//! ```text
//! SequenceContainer
//!  +-- DoubleEndedContainer (+ Sized + Reversible)
//!  |    +-- RandomAccessContainer
//!  |    |    +-- ContiguousContainer
//!  |    +-- ResizableSequenceContainer (+ Clearable)
//!  |    |    +-- InplaceConstructingSequenceContainer
//!  |    +-- BackGrowableContainer
//!  |         +-- InplaceBackConstructingContainer
//!  +-- FrontGrowableContainer
//!       +-- InplaceFrontConstructingContainer
//! ```
//!
//! Operations that need more from the element type than the container can
//! promise carry a `where Self::Value: ...` bound: they exist exactly for
//! element types that support them.
//!
//! ```compile_fail
//! use tola_concepts::ResizableSequenceContainer;
//!
//! struct Token;
//!
//! let mut tokens: Vec<Token> = Vec::new();
//! ResizableSequenceContainer::insert(&mut tokens, 0, Token);
//! // `Token` is not `Clone`, so there is no copy-insertion.
//! ResizableSequenceContainer::insert_cloned(&mut tokens, 0, &Token);
//! ```
//!
//! ```compile_fail
//! use tola_concepts::InplaceBackConstructingContainer;
//!
//! struct Token(u32);
//!
//! let mut tokens: Vec<Token> = Vec::new();
//! InplaceBackConstructingContainer::emplace_back(&mut tokens, Token(1));
//! // `Token` is not `Default`, so there is no default construction.
//! InplaceBackConstructingContainer::emplace_back_default(&mut tokens);
//! ```

use core::ops::{Index, IndexMut, RangeBounds};

use super::base::{
    ClearableContainer, Container, ContainerOf, MutableContainer, ReversibleContainer,
    SizedContainer, define_container_of,
};
use crate::iterator::{Contiguous, RandomAccess};

// =============================================================================
// Sequence
// =============================================================================

/// A mutable container with a first element.
///
/// Sequences of totally ordered elements compare lexicographically; see
/// [`lifts_total_order!`](crate::lifts_total_order).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence container",
    label = "`{Self}` does not satisfy `SequenceContainer`",
    note = "sequence containers are mutable containers with `front` access"
)]
pub trait SequenceContainer: MutableContainer {
    fn front(&self) -> Option<Self::Ref<'_>>;

    fn front_mut(&mut self) -> Option<Self::RefMut<'_>>;
}

/// A sequence with a known length, reverse iteration and a last element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a double-ended container",
    label = "`{Self}` does not satisfy `DoubleEndedContainer`",
    note = "double-ended containers are sized, reversible sequences with `back` access"
)]
pub trait DoubleEndedContainer: SequenceContainer + SizedContainer + ReversibleContainer {
    fn back(&self) -> Option<Self::Ref<'_>>;

    fn back_mut(&mut self) -> Option<Self::RefMut<'_>>;
}

/// Constant-time positional access.
///
/// Unchecked access goes through `Index`/`IndexMut` and panics out of range;
/// `at`/`at_mut` are the checked forms.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random access container",
    label = "`{Self}` does not satisfy `RandomAccessContainer`",
    note = "random access containers iterate with a random access category and implement `Index<usize>`"
)]
pub trait RandomAccessContainer:
    DoubleEndedContainer
    + Container<Category: RandomAccess>
    + Index<usize, Output = <Self as Container>::Value>
    + IndexMut<usize>
{
    fn at(&self, index: usize) -> Option<&Self::Value>;

    fn at_mut(&mut self, index: usize) -> Option<&mut Self::Value>;
}

/// Elements stored next to each other in memory.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a contiguous container",
    label = "`{Self}` does not satisfy `ContiguousContainer`",
    note = "contiguous containers can be viewed as a single slice"
)]
pub trait ContiguousContainer: RandomAccessContainer + Container<Category: Contiguous> {
    fn as_slice(&self) -> &[Self::Value];

    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    #[inline]
    fn as_ptr(&self) -> *const Self::Value {
        self.as_slice().as_ptr()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut Self::Value {
        self.as_mut_slice().as_mut_ptr()
    }
}

// =============================================================================
// Resizable
// =============================================================================

/// A sequence that grows and shrinks anywhere: construction and assignment
/// from ranges, positional insertion and erasure, and resizing.
///
/// Insertion positions are element indices; an index past `len()` panics as
/// `Vec::insert` does.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a resizable sequence container",
    label = "`{Self}` does not satisfy `ResizableSequenceContainer`",
    note = "resizable sequences support positional insertion and erasure and are `Default + FromIterator + Extend`"
)]
pub trait ResizableSequenceContainer:
    DoubleEndedContainer
    + ClearableContainer
    + Default
    + FromIterator<<Self as Container>::Value>
    + Extend<<Self as Container>::Value>
{
    /// Move `value` into position `index`.
    fn insert(&mut self, index: usize, value: Self::Value);

    /// Insert every item of `iter` starting at `index`, preserving their order.
    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = Self::Value>;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Option<Self::Value>;

    /// Remove every element whose index falls in `range`. Bounds past the
    /// end are clamped.
    fn remove_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>;

    /// Shorten to `len` elements; no effect when already shorter.
    fn truncate(&mut self, len: usize);

    /// Replace the contents with the items of `iter`.
    fn assign_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Value>,
    {
        self.clear();
        self.extend(iter);
    }

    fn insert_cloned(&mut self, index: usize, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.insert(index, value.clone());
    }

    fn insert_from_slice(&mut self, index: usize, values: &[Self::Value])
    where
        Self::Value: Clone,
    {
        self.insert_iter(index, values.iter().cloned());
    }

    /// `count` copies of `value`.
    fn from_elem(count: usize, value: &Self::Value) -> Self
    where
        Self::Value: Clone,
    {
        core::iter::repeat_n(value, count).cloned().collect()
    }

    fn from_slice(values: &[Self::Value]) -> Self
    where
        Self::Value: Clone,
    {
        values.iter().cloned().collect()
    }

    fn assign_elem(&mut self, count: usize, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.assign_iter(core::iter::repeat_n(value, count).cloned());
    }

    fn assign_slice(&mut self, values: &[Self::Value])
    where
        Self::Value: Clone,
    {
        self.assign_iter(values.iter().cloned());
    }

    /// Truncate, or pad with copies of `value`, to exactly `len` elements.
    fn resize(&mut self, len: usize, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        let current = self.len();
        if len <= current {
            self.truncate(len);
        } else {
            self.extend(core::iter::repeat_n(value, len - current).cloned());
        }
    }

    /// Truncate, or pad with default values, to exactly `len` elements.
    fn resize_default(&mut self, len: usize)
    where
        Self::Value: Default,
    {
        let current = self.len();
        if len <= current {
            self.truncate(len);
        } else {
            self.extend(core::iter::repeat_with(Self::Value::default).take(len - current));
        }
    }
}

/// A resizable sequence that also constructs elements directly at a
/// position.
///
/// Positional construction without positional insertion and erasure is not
/// this predicate:
///
/// ```compile_fail
/// use std::collections::VecDeque;
/// use tola_concepts::{
///     ClearableContainer, Container, InplaceConstructingSequenceContainer, MutableContainer,
///     SequenceContainer,
/// };
///
/// // Front access and clearing only; no `ResizableSequenceContainer`.
/// #[derive(Default)]
/// struct Stack(VecDeque<u8>);
///
/// impl Container for Stack {
///     type Value = u8;
///     type Category = tola_concepts::RandomAccessTag;
///     type Ref<'a> = &'a u8;
///     type Iter<'a> = std::collections::vec_deque::Iter<'a, u8>;
///     fn iter(&self) -> Self::Iter<'_> { self.0.iter() }
///     fn max_size(&self) -> usize { usize::MAX }
///     fn is_empty(&self) -> bool { self.0.is_empty() }
/// }
///
/// impl MutableContainer for Stack {
///     type RefMut<'a> = &'a mut u8;
///     type IterMut<'a> = std::collections::vec_deque::IterMut<'a, u8>;
///     fn iter_mut(&mut self) -> Self::IterMut<'_> { self.0.iter_mut() }
/// }
///
/// impl ClearableContainer for Stack {
///     fn clear(&mut self) { self.0.clear() }
/// }
///
/// impl SequenceContainer for Stack {
///     fn front(&self) -> Option<&u8> { self.0.front() }
///     fn front_mut(&mut self) -> Option<&mut u8> { self.0.front_mut() }
/// }
///
/// impl InplaceConstructingSequenceContainer for Stack {
///     fn emplace_with<F: FnOnce() -> u8>(&mut self, index: usize, make: F) {
///         self.0.insert(index, make());
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an in-place constructing sequence container",
    label = "`{Self}` has no positional `emplace_with`",
    note = "in-place constructing sequences are resizable sequences first"
)]
pub trait InplaceConstructingSequenceContainer: ResizableSequenceContainer {
    /// Build the element with `make` and place it at `index`.
    fn emplace_with<F>(&mut self, index: usize, make: F)
    where
        F: FnOnce() -> Self::Value;

    fn emplace(&mut self, index: usize, value: Self::Value) {
        self.emplace_with(index, || value);
    }

    fn emplace_cloned(&mut self, index: usize, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.emplace_with(index, || value.clone());
    }

    fn emplace_default(&mut self, index: usize)
    where
        Self::Value: Default,
    {
        self.emplace_with(index, Self::Value::default);
    }
}

// =============================================================================
// Growable Ends
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a front-growable container",
    label = "`{Self}` has no `push_front`/`pop_front`"
)]
pub trait FrontGrowableContainer: SequenceContainer + Default {
    fn push_front(&mut self, value: Self::Value);

    fn pop_front(&mut self) -> Option<Self::Value>;

    fn push_front_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.push_front(value.clone());
    }
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an in-place front-constructing container",
    label = "`{Self}` has no `emplace_front_with`"
)]
pub trait InplaceFrontConstructingContainer: FrontGrowableContainer {
    fn emplace_front_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> Self::Value;

    fn emplace_front(&mut self, value: Self::Value) {
        self.emplace_front_with(|| value);
    }

    fn emplace_front_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.emplace_front_with(|| value.clone());
    }

    fn emplace_front_default(&mut self)
    where
        Self::Value: Default,
    {
        self.emplace_front_with(Self::Value::default);
    }
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a back-growable container",
    label = "`{Self}` has no `push_back`/`pop_back`"
)]
pub trait BackGrowableContainer: DoubleEndedContainer + Default {
    fn push_back(&mut self, value: Self::Value);

    fn pop_back(&mut self) -> Option<Self::Value>;

    fn push_back_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.push_back(value.clone());
    }
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an in-place back-constructing container",
    label = "`{Self}` has no `emplace_back_with`"
)]
pub trait InplaceBackConstructingContainer: BackGrowableContainer {
    fn emplace_back_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> Self::Value;

    fn emplace_back(&mut self, value: Self::Value) {
        self.emplace_back_with(|| value);
    }

    fn emplace_back_cloned(&mut self, value: &Self::Value)
    where
        Self::Value: Clone,
    {
        self.emplace_back_with(|| value.clone());
    }

    fn emplace_back_default(&mut self)
    where
        Self::Value: Default,
    {
        self.emplace_back_with(Self::Value::default);
    }
}

// =============================================================================
// `*Of` Variants
// =============================================================================

define_container_of!(
    SequenceContainer,
    DoubleEndedContainer,
    RandomAccessContainer,
    ContiguousContainer,
    ResizableSequenceContainer,
    InplaceConstructingSequenceContainer,
    FrontGrowableContainer,
    InplaceFrontConstructingContainer,
    BackGrowableContainer,
    InplaceBackConstructingContainer,
);
