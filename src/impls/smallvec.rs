//! `SmallVec<A>`: the inline-first vector from the `smallvec` crate. Its
//! inherent API mirrors `Vec`'s, so it shares `Vec`'s impl batch.

use smallvec::{Array, SmallVec};

use super::vec::impl_vec_like;

impl_vec_like!([A: Array] SmallVec<A>, A::Item);
