//! Tests for the synthetic iterator: each category provides exactly its own
//! operations, and nothing from the next category up.

mod common;

use common::{assert_is, assert_is_not};
use tola_concepts::{
    Absent, BidirectionalIterator, BidirectionalTag, ContiguousIterator, ContiguousTag,
    ForwardIterator, ForwardTag, InputIterator, InputTag, IteratorOf, MockConstIterator,
    MockMutableIterator, OutputIterator, OutputTag, Present, ProxyReference,
    RandomAccessIterator, RandomAccessTag,
};

type ConstOf<C> = MockConstIterator<'static, i32, C>;
type MutOf<C> = MockMutableIterator<'static, i32, C>;

// =============================================================================
// Category Ladder
// =============================================================================

#[test]
fn test_output() {
    assert_is!(MutOf<OutputTag>: OutputIterator<i32> & !InputIterator);
    assert_is_not!(ConstOf<OutputTag>: OutputIterator<i32>);
    assert_is_not!(MutOf<OutputTag>: Clone);

    let mut sink = MutOf::<OutputTag>::new();
    sink.write(7);
    sink.extend([1, 2, 3]);
}

#[test]
fn test_input() {
    assert_is!(ConstOf<InputTag>: InputIterator & IteratorOf<InputTag> & PartialEq);
    assert_is!(MutOf<InputTag>: InputIterator);
    assert_is_not!(ConstOf<InputTag>: ForwardIterator | Clone);
}

#[test]
fn test_forward() {
    assert_is!(ConstOf<ForwardTag>: ForwardIterator & IteratorOf<ForwardTag>);
    assert_is!(MutOf<ForwardTag>: ForwardIterator);
    assert_is_not!(ConstOf<ForwardTag>: BidirectionalIterator | IteratorOf<BidirectionalTag>);
}

#[test]
fn test_bidirectional() {
    assert_is!(ConstOf<BidirectionalTag>: BidirectionalIterator & IteratorOf<BidirectionalTag>);
    assert_is!(MutOf<BidirectionalTag>: BidirectionalIterator);
    assert_is_not!(ConstOf<BidirectionalTag>: RandomAccessIterator | ExactSizeIterator);
    assert_is_not!(ConstOf<BidirectionalTag>: PartialOrd);
}

#[test]
fn test_random_access() {
    assert_is!(ConstOf<RandomAccessTag>: RandomAccessIterator & IteratorOf<RandomAccessTag> & PartialOrd);
    assert_is!(MutOf<RandomAccessTag>: RandomAccessIterator);
    assert_is_not!(ConstOf<RandomAccessTag>: ContiguousIterator | IteratorOf<ContiguousTag>);
}

#[test]
fn test_contiguous() {
    assert_is!(ConstOf<ContiguousTag>: ContiguousIterator & IteratorOf<ContiguousTag>);
    assert_is!(MutOf<ContiguousTag>: ContiguousIterator & IteratorOf<RandomAccessTag>);

    let it = ConstOf::<ContiguousTag>::new();
    assert!(it.as_slice().is_empty());
}

// =============================================================================
// Item Types
// =============================================================================

#[test]
fn test_input_yields_proxies() {
    let mut reader = ConstOf::<InputTag>::new();
    let item: Option<ProxyReference<i32, Present, Absent>> = reader.next();
    assert!(item.is_none());

    let mut writer = MutOf::<InputTag>::new();
    let item: Option<ProxyReference<i32, Present, Present>> = writer.next();
    assert!(item.is_none());

    assert!(ProxyReference::<i32, Present, Absent>::READABLE);
    assert!(!ProxyReference::<i32, Present, Absent>::WRITABLE);
    assert!(ProxyReference::<i32, Present, Present>::READ_WRITE);
}

#[allow(dead_code)]
fn read_through(proxy: ProxyReference<i32, Present, Absent>) -> i32 {
    proxy.read()
}

#[allow(dead_code)]
fn write_through(mut proxy: ProxyReference<i32, Present, Present>) {
    let _ = proxy.as_mut_ptr();
    proxy.write(1);
}

#[test]
fn test_forward_yields_references() {
    let shared: Option<&'static i32> = ConstOf::<ForwardTag>::new().next();
    let exclusive: Option<&'static mut i32> = MutOf::<ForwardTag>::new().next();
    assert!(shared.is_none() && exclusive.is_none());
}

// =============================================================================
// Random Access Arithmetic
// =============================================================================

#[test]
fn test_random_access_arithmetic() {
    let it = ConstOf::<RandomAccessTag>::new();

    let ahead = it.clone() + 3isize;
    let also_ahead = 3isize + it.clone();
    let behind = it.clone() - 3isize;
    let distance: isize = ahead.clone() - behind.clone();
    assert_eq!(distance, 0);

    let mut cursor = it.clone();
    cursor += 2;
    cursor -= 1;
    assert!(cursor == it);

    assert!(ahead <= also_ahead);
    assert!(ahead >= also_ahead);
    assert!(!(ahead < also_ahead));
    assert!(!(ahead > also_ahead));

    assert_eq!(it.at(2), None);
    assert_eq!(it.len(), 0);
    assert_eq!(it.size_hint(), (0, Some(0)));
}

#[test]
fn test_double_ended_is_exhausted() {
    let mut it = ConstOf::<BidirectionalTag>::new();
    assert_eq!(it.next_back(), None);
    assert_eq!(it.next(), None);
}

// =============================================================================
// Introspection
// =============================================================================

#[test]
fn test_category_and_access_constants() {
    assert_eq!(ConstOf::<ForwardTag>::CATEGORY, "forward");
    assert_eq!(MutOf::<ContiguousTag>::CATEGORY, "contiguous");
    assert!(!ConstOf::<InputTag>::WRITABLE);
    assert!(MutOf::<InputTag>::WRITABLE);

    let debug = format!("{:?}", MutOf::<RandomAccessTag>::default());
    assert!(debug.contains("random access"));
    assert!(debug.contains("mutable"));
}
