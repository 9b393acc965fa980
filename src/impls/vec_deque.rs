//! `VecDeque<T>`: a ring buffer. Random access and growth at both ends, but
//! its storage is not one slice.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::iter::Rev;
use core::ops::RangeBounds;

use super::{clamp_range, max_elements};
use crate::containers::{
    BackGrowableContainer, ClearableContainer, Container, DoubleEndedContainer,
    FrontGrowableContainer, InplaceBackConstructingContainer, InplaceConstructingSequenceContainer,
    InplaceFrontConstructingContainer, MutableContainer, RandomAccessContainer,
    ResizableSequenceContainer, ReversibleContainer, SequenceContainer, SizedContainer,
};
use crate::iterator::RandomAccessTag;

impl<T> Container for VecDeque<T> {
    type Value = T;
    type Category = RandomAccessTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    #[inline]
    fn iter(&self) -> vec_deque::Iter<'_, T> {
        VecDeque::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<T>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> MutableContainer for VecDeque<T> {
    type RefMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = vec_deque::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        VecDeque::iter_mut(self)
    }
}

impl<T> SizedContainer for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> ClearableContainer for VecDeque<T> {
    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

impl<T> ReversibleContainer for VecDeque<T> {
    type RevIter<'a> = Rev<vec_deque::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn iter_rev(&self) -> Self::RevIter<'_> {
        VecDeque::iter(self).rev()
    }
}

impl<T> SequenceContainer for VecDeque<T> {
    #[inline]
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        VecDeque::front_mut(self)
    }
}

impl<T> DoubleEndedContainer for VecDeque<T> {
    #[inline]
    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }
}

impl<T> RandomAccessContainer for VecDeque<T> {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

impl<T> ResizableSequenceContainer for VecDeque<T> {
    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }

    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = VecDeque::split_off(self, index);
        self.extend(iter);
        self.append(&mut tail);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    fn remove_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        let range = clamp_range(&range, VecDeque::len(self));
        drop(VecDeque::drain(self, range));
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }
}

impl<T> InplaceConstructingSequenceContainer for VecDeque<T> {
    #[inline]
    fn emplace_with<F>(&mut self, index: usize, make: F)
    where
        F: FnOnce() -> T,
    {
        VecDeque::insert(self, index, make());
    }
}

impl<T> FrontGrowableContainer for VecDeque<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> InplaceFrontConstructingContainer for VecDeque<T> {
    #[inline]
    fn emplace_front_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        VecDeque::push_front(self, make());
    }
}

impl<T> BackGrowableContainer for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
}

impl<T> InplaceBackConstructingContainer for VecDeque<T> {
    #[inline]
    fn emplace_back_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        VecDeque::push_back(self, make());
    }
}
