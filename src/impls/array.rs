//! `[T; N]`: a fixed-size contiguous sequence. It cannot grow, shrink or be
//! cleared.

use core::iter::Rev;
use core::slice;

use crate::containers::{
    Container, ContiguousContainer, DoubleEndedContainer, MutableContainer, RandomAccessContainer,
    ReversibleContainer, SequenceContainer, SizedContainer,
};
use crate::iterator::ContiguousTag;

impl<T, const N: usize> Container for [T; N] {
    type Value = T;
    type Category = ContiguousTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn iter(&self) -> slice::Iter<'_, T> {
        <[T]>::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        N
    }

    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> MutableContainer for [T; N] {
    type RefMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        <[T]>::iter_mut(self)
    }
}

impl<T, const N: usize> SizedContainer for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> ReversibleContainer for [T; N] {
    type RevIter<'a> = Rev<slice::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn iter_rev(&self) -> Self::RevIter<'_> {
        <[T]>::iter(self).rev()
    }
}

impl<T, const N: usize> SequenceContainer for [T; N] {
    #[inline]
    fn front(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        <[T]>::first_mut(self)
    }
}

impl<T, const N: usize> DoubleEndedContainer for [T; N] {
    #[inline]
    fn back(&self) -> Option<&T> {
        <[T]>::last(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        <[T]>::last_mut(self)
    }
}

impl<T, const N: usize> RandomAccessContainer for [T; N] {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T, const N: usize> ContiguousContainer for [T; N] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
