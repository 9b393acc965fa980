//! Synthetic iterator for probing iterator-category requirements.
//!
//! `MockIterator<'a, T, Category, Access>` implements exactly the traits its
//! category mandates and nothing stronger, so it can be handed to any API
//! that asks "do you accept an iterator of category X" without building a
//! container of that category. It is always at its end: `next` yields `None`.
//!
//! | Category | Iterator | Clone | DoubleEnded | ExactSize + arithmetic | as_slice | Extend |
//! |----------|----------|-------|-------------|------------------------|----------|--------|
//! | Output   |          |       |             |                        |          | mutable access only |
//! | Input    | proxy    |       |             |                        |          |        |
//! | Forward  | `&T`     | yes   |             |                        |          |        |
//! | Bidirectional | `&T` | yes  | yes         |                        |          |        |
//! | RandomAccess | `&T` | yes   | yes         | yes                    |          |        |
//! | Contiguous | `&T`   | yes   | yes         | yes                    | yes      |        |

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::{
    Access, Bidirectional, ConstAccess, Contiguous, ContiguousIterator, IteratorCategory,
    MultiPass, MutableAccess, OutputTag, RandomAccess, RandomAccessIterator, Readable,
};
use crate::primitives::bool::{Bool, Present};

/// A witness iterator over `T` with the capabilities of category `C` and
/// access mode `A`.
pub struct MockIterator<'a, T, C, A = ConstAccess> {
    marker: PhantomData<(fn() -> C, fn() -> A, &'a T)>,
}

/// Read-only witness iterator.
pub type MockConstIterator<'a, T, C> = MockIterator<'a, T, C, ConstAccess>;

/// Read-write witness iterator.
pub type MockMutableIterator<'a, T, C> = MockIterator<'a, T, C, MutableAccess>;

impl<'a, T, C: IteratorCategory, A: Access> MockIterator<'a, T, C, A> {
    pub const CATEGORY: &'static str = C::NAME;
    pub const WRITABLE: bool = <A::Writable as Bool>::VALUE;

    pub const fn new() -> Self {
        MockIterator { marker: PhantomData }
    }
}

impl<'a, T, C: IteratorCategory, A: Access> Default for MockIterator<'a, T, C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, C: IteratorCategory, A: Access> fmt::Debug for MockIterator<'a, T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockIterator")
            .field("category", &C::NAME)
            .field("access", &A::NAME)
            .finish()
    }
}

// =============================================================================
// Output
// =============================================================================

impl<'a, T, A: Access<Writable = Present>> Extend<T> for MockIterator<'a, T, OutputTag, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let _ = iter;
    }
}

// =============================================================================
// Input and up
// =============================================================================

impl<'a, T: 'a, C: Readable, A: Access> Iterator for MockIterator<'a, T, C, A> {
    type Item = C::Item<'a, T, A>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<'a, T, C: Readable, A: Access> PartialEq for MockIterator<'a, T, C, A> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<'a, T, C: Readable, A: Access> Eq for MockIterator<'a, T, C, A> {}

// =============================================================================
// Forward and up
// =============================================================================

impl<'a, T, C: MultiPass, A: Access> Clone for MockIterator<'a, T, C, A> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

// =============================================================================
// Bidirectional and up
// =============================================================================

impl<'a, T: 'a, C: Bidirectional, A: Access> DoubleEndedIterator for MockIterator<'a, T, C, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        None
    }
}

// =============================================================================
// Random access and up
// =============================================================================

impl<'a, T: 'a, C: RandomAccess, A: Access> ExactSizeIterator for MockIterator<'a, T, C, A> {}

impl<'a, T: 'a, C: RandomAccess, A: Access> RandomAccessIterator for MockIterator<'a, T, C, A> {
    #[inline]
    fn at(&self, _n: usize) -> Option<Self::Item> {
        None
    }
}

impl<'a, T, C: RandomAccess, A: Access> AddAssign<isize> for MockIterator<'a, T, C, A> {
    #[inline]
    fn add_assign(&mut self, _offset: isize) {}
}

impl<'a, T, C: RandomAccess, A: Access> SubAssign<isize> for MockIterator<'a, T, C, A> {
    #[inline]
    fn sub_assign(&mut self, _offset: isize) {}
}

impl<'a, T, C: RandomAccess, A: Access> Add<isize> for MockIterator<'a, T, C, A> {
    type Output = Self;

    #[inline]
    fn add(self, _offset: isize) -> Self {
        self
    }
}

impl<'a, T, C: RandomAccess, A: Access> Add<MockIterator<'a, T, C, A>> for isize {
    type Output = MockIterator<'a, T, C, A>;

    #[inline]
    fn add(self, iter: MockIterator<'a, T, C, A>) -> Self::Output {
        iter
    }
}

impl<'a, T, C: RandomAccess, A: Access> Sub<isize> for MockIterator<'a, T, C, A> {
    type Output = Self;

    #[inline]
    fn sub(self, _offset: isize) -> Self {
        self
    }
}

impl<'a, T, C: RandomAccess, A: Access> Sub for MockIterator<'a, T, C, A> {
    type Output = isize;

    #[inline]
    fn sub(self, _other: Self) -> isize {
        0
    }
}

impl<'a, T, C: RandomAccess, A: Access> PartialOrd for MockIterator<'a, T, C, A> {
    #[inline]
    fn partial_cmp(&self, _other: &Self) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

// =============================================================================
// Contiguous
// =============================================================================

impl<'a, T: 'a, C: Contiguous, A: Access> ContiguousIterator for MockIterator<'a, T, C, A> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &[]
    }
}
