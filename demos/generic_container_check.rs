//! Classification table for the standard containers.
//!
//! Prints which predicates each container satisfies, then runs a generic
//! algorithm that accepts only double-ended containers of `i32`.
//!
//! Run with: cargo run --example generic_container_check

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use smallvec::SmallVec;
use tola_concepts::prelude::*;
use tola_concepts::{Absent, Bool, Present, lifts_value_semantics};

// =============================================================================
// Helper: Status for type-level bool
// =============================================================================

trait Status {
    fn status() -> &'static str;
}

impl Status for Present {
    fn status() -> &'static str {
        "Present"
    }
}

impl Status for Absent {
    fn status() -> &'static str {
        "Absent"
    }
}

fn mark(satisfied: bool) -> &'static str {
    if satisfied { "x" } else { "." }
}

// =============================================================================
// Rows
// =============================================================================

const COLUMNS: [&str; 8] = ["Mut", "Sized", "Rev", "RandAcc", "Contig", "Front", "Ordered", "Map"];

macro_rules! row {
    ($label:literal, $ty:ty) => {{
        let cells = [
            satisfies!($ty: MutableContainer),
            satisfies!($ty: SizedContainer),
            satisfies!($ty: ReversibleContainer),
            satisfies!($ty: RandomAccessContainer),
            satisfies!($ty: ContiguousContainer),
            satisfies!($ty: FrontGrowableContainer),
            satisfies!($ty: OrderedAssociativeContainer),
            satisfies!($ty: MapContainer),
        ];
        print!("{:<22}", $label);
        for cell in cells {
            print!("{:>9}", mark(cell));
        }
        println!();
        assert!(lifts_value_semantics!($ty));
    }};
}

// =============================================================================
// Generic Use
// =============================================================================

/// First and last element, taken off through the predicates alone.
fn ends<C>(mut c: C) -> Option<(i32, i32)>
where
    C: FrontGrowableContainerOf<i32> + BackGrowableContainerOf<i32>,
{
    let first = c.pop_front()?;
    let last = c.pop_back().unwrap_or(first);
    Some((first, last))
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    println!("--- Container Classification ---\n");

    print!("{:<22}", "");
    for column in COLUMNS {
        print!("{column:>9}");
    }
    println!();

    row!("[i32; 4]", [i32; 4]);
    row!("Vec<i32>", Vec<i32>);
    row!("SmallVec<[i32; 8]>", SmallVec<[i32; 8]>);
    row!("VecDeque<i32>", VecDeque<i32>);
    row!("LinkedList<i32>", LinkedList<i32>);
    row!("BTreeSet<i32>", BTreeSet<i32>);
    row!("BTreeMap<i32, u8>", BTreeMap<i32, u8>);
    row!("HashSet<i32>", HashSet<i32>);
    row!("HashMap<i32, u8>", HashMap<i32, u8>);

    println!("\n--- Type-Level Bool ---\n");
    type Both = <Present as Bool>::And<Absent>;
    println!("Present & Absent = {}", <Both as Status>::status());
    assert_eq!(<Both as Status>::status(), "Absent");

    println!("\n--- Generic Algorithm ---\n");
    let from_deque = ends(VecDeque::from([1, 2, 3]));
    let from_list = ends(LinkedList::from([7]));
    println!("VecDeque ends:   {from_deque:?}");
    println!("LinkedList ends: {from_list:?}");
    assert_eq!(from_deque, Some((1, 3)));
    assert_eq!(from_list, Some((7, 7)));

    println!("\nAll checks passed.");
}
