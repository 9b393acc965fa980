//! Comparison relations used by ordered and unordered associative containers.

/// A strict weak order over `T`: irreflexive, transitive, with transitive
/// incomparability. Only the shape is checked; the laws are the caller's.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a strict weak order over `{T}`",
    label = "`{Self}` cannot compare two `{T}` values"
)]
pub trait StrictWeakOrder<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;
}

/// An equivalence relation over `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an equivalence relation over `{T}`",
    label = "`{Self}` cannot test two `{T}` values for equivalence"
)]
pub trait EquivalenceRelation<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Orders values by their `Ord` impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> StrictWeakOrder<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders `(key, mapped)` pairs by key alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyOrder;

impl<K: Ord, M> StrictWeakOrder<(K, M)> for KeyOrder {
    #[inline]
    fn less(&self, a: &(K, M), b: &(K, M)) -> bool {
        a.0 < b.0
    }
}

/// Tests values for equality through `Eq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEq;

impl<T: Eq + ?Sized> EquivalenceRelation<T> for NaturalEq {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> StrictWeakOrder<T> for F {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
