//! # Layer 3: Standard Container Adapters
//!
//! Predicate impls for the standard containers. Every method forwards to the
//! container's own inherent method, always called by path
//! (`Vec::len(self)`) so that a trait method can never resolve to itself.
//!
//! | Type | Strongest predicates |
//! |------|----------------------|
//! | `[T; N]` | `ContiguousContainer` |
//! | `Vec<T>`, `SmallVec<A>` | `ContiguousContainer`, `ResizableSequenceContainer`, `InplaceBackConstructingContainer` |
//! | `VecDeque<T>` | `RandomAccessContainer`, `ResizableSequenceContainer`, in-place front and back |
//! | `LinkedList<T>` | `DoubleEndedContainer`, `ResizableSequenceContainer`, in-place front and back |
//! | `BTreeSet<K>` | `OrderedUniqueAssociativeContainer` |
//! | `BTreeMap<K, V>` | `OrderedUniqueMapContainer` |
//! | `HashSet<K, S>` | `UnorderedUniqueAssociativeContainer` |
//! | `HashMap<K, V, S>` | `UnorderedUniqueMapContainer` |

#[cfg(feature = "alloc")]
use core::ops::{Bound, Range, RangeBounds};

mod array;
#[cfg(feature = "alloc")]
mod btree;
#[cfg(feature = "std")]
mod hash;
#[cfg(feature = "alloc")]
mod linked_list;
#[cfg(feature = "smallvec")]
mod smallvec;
#[cfg(feature = "alloc")]
mod vec;
#[cfg(feature = "alloc")]
mod vec_deque;

/// Largest element count an allocation of `T` can describe.
pub(crate) const fn max_elements<T>() -> usize {
    match core::mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// Resolve `range` against a length. Bounds past the end are clamped, and a
/// start past the end yields an empty range.
#[cfg(feature = "alloc")]
pub(crate) fn clamp_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Range<usize> {
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    }
    .min(len);
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(end);
    start..end
}
