//! # Layer 0: Primitives
//!
//! Predicates over a single type, with no container in sight:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `traits.rs`: Decayed, aggregate, trivial, enumeration and value-semantics predicates.
//! - `callable.rs`: Call-signature and hash-function predicates.
//! - `relation.rs`: Strict weak orders and equivalence relations.

pub mod bool;
pub mod callable;
pub mod relation;
pub mod traits;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use callable::{CallableAs, HashFunction, InvocableAs};
pub use relation::{EquivalenceRelation, KeyOrder, NaturalEq, NaturalOrder, StrictWeakOrder};
pub use traits::{Aggregate, Decayed, EnumType, Regular, Semiregular, TotallyOrdered, Trivial};
#[cfg(feature = "std")]
pub use traits::{ErrorCodeEnum, ErrorConditionEnum};
