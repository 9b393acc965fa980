//! Procedural macros for the tola-concepts predicate library
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `satisfies!` | expression | Evaluate predicates for concrete types as a `bool` |
//! | `assert_satisfies!` | item | Compile-time assertion of predicates |
//! | `#[derive(EnumType)]` | enum | Mark an enumeration |
//! | `#[derive(Aggregate)]` | struct | Mark an all-public struct as an aggregate |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// Predicate Checks
// =============================================================================

/// Evaluate predicate expressions for concrete types.
///
/// # Syntax: `satisfies!(Type: Expr, ...)`
///
/// Supports multiple checks in one call. All checks must pass for the result
/// to be true. A predicate that does not hold yields `false` instead of a
/// compile error, and the result is usable in `const` context.
///
/// ```ignore
/// use tola_concepts::prelude::*;
///
/// assert!(satisfies!(Vec<i32>: ContiguousContainer));
/// assert!(satisfies!(LinkedList<i32>: DoubleEndedContainer & !RandomAccessContainer));
/// assert!(satisfies!(BTreeSet<String>: OrderedUniqueAssociativeContainer | MapContainer));
///
/// // Multiple checks (all must pass)
/// const OK: bool = satisfies!(Vec<u8>: ContainerOf<u8>, [u8; 4]: !ClearableContainer);
/// ```
///
/// Like every probe built on inherent-constant shadowing, it only sees the
/// impls of a concrete type; inside a generic function the answer for a bare
/// `T` is always `false`.
#[proc_macro]
pub fn satisfies(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as common::CheckList);
    user::satisfies::expand_satisfies(&list).into()
}

/// Static assertion form of [`satisfies!`].
///
/// ```ignore
/// assert_satisfies!(
///     Vec<i32>: ContiguousContainer & ResizableSequenceContainer,
///     VecDeque<i32>: RandomAccessContainer & !ContiguousContainer,
/// );
/// ```
///
/// A failing check stops compilation with "`Type` does not satisfy `Expr`".
#[proc_macro]
pub fn assert_satisfies(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as common::CheckList);
    user::satisfies::expand_assert_satisfies(&list).into()
}

// =============================================================================
// Derives
// =============================================================================

/// Implement `EnumType` for an enum.
///
/// # Usage
/// ```ignore
/// #[derive(Debug, Clone, Copy, EnumType)]
/// enum Color { Red, Green }
/// ```
#[proc_macro_derive(EnumType)]
pub fn derive_enum_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::derive::expand_derive_enum_type(input).into()
}

/// Implement `Aggregate` for a struct whose fields are all `pub`.
#[proc_macro_derive(Aggregate)]
pub fn derive_aggregate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::derive::expand_derive_aggregate(input).into()
}
