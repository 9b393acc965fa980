//! # Layer 2: Container Predicates
//!
//! - `base.rs`: `Container` and its orthogonal refinements.
//! - `sequence.rs`: Sequence containers.
//! - `associative.rs`: Associative containers, unique/multiple and ordered/unordered.
//! - `map.rs`: Map containers.
//! - `semantics.rs`: Value-semantics lifting checks.

pub mod associative;
pub mod base;
pub mod map;
pub mod semantics;
pub mod sequence;

pub use associative::*;
pub use base::*;
pub use map::*;
pub use sequence::*;
