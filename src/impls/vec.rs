//! `Vec<T>`, and the impl batch shared with every other growable
//! slice-backed vector.

use alloc::vec::Vec;

/// Implements the full contiguous, resizable, back-growable predicate set for
/// a vector type that derefs to `[$elem]` and carries `Vec`'s inherent API
/// (`insert`, `remove`, `drain`, `truncate`, `push`, `pop`, `clear`,
/// `as_slice`, `as_mut_slice`).
macro_rules! impl_vec_like {
    ([$($generics:tt)*] $ty:ty, $elem:ty) => {
        impl<$($generics)*> $crate::containers::Container for $ty {
            type Value = $elem;
            type Category = $crate::iterator::ContiguousTag;
            type Ref<'a> = &'a $elem where Self: 'a;
            type Iter<'a> = ::core::slice::Iter<'a, $elem> where Self: 'a;

            #[inline]
            fn iter(&self) -> ::core::slice::Iter<'_, $elem> {
                <[$elem]>::iter(self)
            }

            #[inline]
            fn max_size(&self) -> usize {
                $crate::impls::max_elements::<$elem>()
            }

            #[inline]
            fn is_empty(&self) -> bool {
                <$ty>::is_empty(self)
            }
        }

        impl<$($generics)*> $crate::containers::MutableContainer for $ty {
            type RefMut<'a> = &'a mut $elem where Self: 'a;
            type IterMut<'a> = ::core::slice::IterMut<'a, $elem> where Self: 'a;

            #[inline]
            fn iter_mut(&mut self) -> ::core::slice::IterMut<'_, $elem> {
                <[$elem]>::iter_mut(self)
            }
        }

        impl<$($generics)*> $crate::containers::SizedContainer for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }
        }

        impl<$($generics)*> $crate::containers::ClearableContainer for $ty {
            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }
        }

        impl<$($generics)*> $crate::containers::ReversibleContainer for $ty {
            type RevIter<'a> = ::core::iter::Rev<::core::slice::Iter<'a, $elem>> where Self: 'a;

            #[inline]
            fn iter_rev(&self) -> Self::RevIter<'_> {
                <[$elem]>::iter(self).rev()
            }
        }

        impl<$($generics)*> $crate::containers::SequenceContainer for $ty {
            #[inline]
            fn front(&self) -> Option<&$elem> {
                <[$elem]>::first(self)
            }

            #[inline]
            fn front_mut(&mut self) -> Option<&mut $elem> {
                <[$elem]>::first_mut(self)
            }
        }

        impl<$($generics)*> $crate::containers::DoubleEndedContainer for $ty {
            #[inline]
            fn back(&self) -> Option<&$elem> {
                <[$elem]>::last(self)
            }

            #[inline]
            fn back_mut(&mut self) -> Option<&mut $elem> {
                <[$elem]>::last_mut(self)
            }
        }

        impl<$($generics)*> $crate::containers::RandomAccessContainer for $ty {
            #[inline]
            fn at(&self, index: usize) -> Option<&$elem> {
                <[$elem]>::get(self, index)
            }

            #[inline]
            fn at_mut(&mut self, index: usize) -> Option<&mut $elem> {
                <[$elem]>::get_mut(self, index)
            }
        }

        impl<$($generics)*> $crate::containers::ContiguousContainer for $ty {
            #[inline]
            fn as_slice(&self) -> &[$elem] {
                <$ty>::as_slice(self)
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [$elem] {
                <$ty>::as_mut_slice(self)
            }
        }

        impl<$($generics)*> $crate::containers::ResizableSequenceContainer for $ty {
            #[inline]
            fn insert(&mut self, index: usize, value: $elem) {
                <$ty>::insert(self, index, value);
            }

            fn insert_iter<I>(&mut self, index: usize, iter: I)
            where
                I: IntoIterator<Item = $elem>,
            {
                let tail: $ty = <$ty>::drain(self, index..).collect();
                self.extend(iter);
                self.extend(tail);
            }

            #[inline]
            fn remove(&mut self, index: usize) -> Option<$elem> {
                (index < <$ty>::len(self)).then(|| <$ty>::remove(self, index))
            }

            fn remove_range<R>(&mut self, range: R)
            where
                R: ::core::ops::RangeBounds<usize>,
            {
                let range = $crate::impls::clamp_range(&range, <$ty>::len(self));
                drop(<$ty>::drain(self, range));
            }

            #[inline]
            fn truncate(&mut self, len: usize) {
                <$ty>::truncate(self, len);
            }
        }

        impl<$($generics)*> $crate::containers::InplaceConstructingSequenceContainer for $ty {
            #[inline]
            fn emplace_with<F>(&mut self, index: usize, make: F)
            where
                F: FnOnce() -> $elem,
            {
                <$ty>::insert(self, index, make());
            }
        }

        impl<$($generics)*> $crate::containers::BackGrowableContainer for $ty {
            #[inline]
            fn push_back(&mut self, value: $elem) {
                <$ty>::push(self, value);
            }

            #[inline]
            fn pop_back(&mut self) -> Option<$elem> {
                <$ty>::pop(self)
            }
        }

        impl<$($generics)*> $crate::containers::InplaceBackConstructingContainer for $ty {
            #[inline]
            fn emplace_back_with<F>(&mut self, make: F)
            where
                F: FnOnce() -> $elem,
            {
                <$ty>::push(self, make());
            }
        }
    };
}

pub(crate) use impl_vec_like;

impl_vec_like!([T] Vec<T>, T);
