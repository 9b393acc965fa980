//! `LinkedList<T>`: a doubly linked list. Positional operations split the list
//! at the index and splice it back together.

use alloc::collections::LinkedList;
use alloc::collections::linked_list;
use core::iter::Rev;
use core::ops::RangeBounds;

use super::{clamp_range, max_elements};
use crate::containers::{
    BackGrowableContainer, ClearableContainer, Container, DoubleEndedContainer,
    FrontGrowableContainer, InplaceBackConstructingContainer, InplaceConstructingSequenceContainer,
    InplaceFrontConstructingContainer, MutableContainer, ResizableSequenceContainer,
    ReversibleContainer, SequenceContainer, SizedContainer,
};
use crate::iterator::BidirectionalTag;

impl<T> Container for LinkedList<T> {
    type Value = T;
    type Category = BidirectionalTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;

    #[inline]
    fn iter(&self) -> linked_list::Iter<'_, T> {
        LinkedList::iter(self)
    }

    #[inline]
    fn max_size(&self) -> usize {
        max_elements::<T>()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }
}

impl<T> MutableContainer for LinkedList<T> {
    type RefMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = linked_list::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn iter_mut(&mut self) -> linked_list::IterMut<'_, T> {
        LinkedList::iter_mut(self)
    }
}

impl<T> SizedContainer for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> ClearableContainer for LinkedList<T> {
    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}

impl<T> ReversibleContainer for LinkedList<T> {
    type RevIter<'a> = Rev<linked_list::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn iter_rev(&self) -> Self::RevIter<'_> {
        LinkedList::iter(self).rev()
    }
}

impl<T> SequenceContainer for LinkedList<T> {
    #[inline]
    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        LinkedList::front_mut(self)
    }
}

impl<T> DoubleEndedContainer for LinkedList<T> {
    #[inline]
    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }
}

impl<T> ResizableSequenceContainer for LinkedList<T> {
    fn insert(&mut self, index: usize, value: T) {
        let mut tail = LinkedList::split_off(self, index);
        self.push_back(value);
        self.append(&mut tail);
    }

    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = LinkedList::split_off(self, index);
        self.extend(iter);
        self.append(&mut tail);
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }
        let mut tail = LinkedList::split_off(self, index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed
    }

    fn remove_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        let range = clamp_range(&range, LinkedList::len(self));
        let mut tail = LinkedList::split_off(self, range.end);
        drop(LinkedList::split_off(self, range.start));
        self.append(&mut tail);
    }

    fn truncate(&mut self, len: usize) {
        if len < LinkedList::len(self) {
            drop(LinkedList::split_off(self, len));
        }
    }
}

impl<T> InplaceConstructingSequenceContainer for LinkedList<T> {
    #[inline]
    fn emplace_with<F>(&mut self, index: usize, make: F)
    where
        F: FnOnce() -> T,
    {
        ResizableSequenceContainer::insert(self, index, make());
    }
}

impl<T> FrontGrowableContainer for LinkedList<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}

impl<T> InplaceFrontConstructingContainer for LinkedList<T> {
    #[inline]
    fn emplace_front_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        LinkedList::push_front(self, make());
    }
}

impl<T> BackGrowableContainer for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }
}

impl<T> InplaceBackConstructingContainer for LinkedList<T> {
    #[inline]
    fn emplace_back_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        LinkedList::push_back(self, make());
    }
}
