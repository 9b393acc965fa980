//! Single-type predicates.
//!
//! Each trait answers one question about a type in isolation. Most are
//! blanket-implemented from a std trait; `Aggregate` and `EnumType` need an
//! opt-in through their derives because Rust has no way to ask "is this an
//! enum" of an arbitrary type.

// =============================================================================
// Decayed / Trivial
// =============================================================================

/// A type that survives being bound to a `let` variable unchanged.
///
/// Rust never decays arrays or strips qualifiers on assignment, so the only
/// types that fail are the unsized ones (`str`, `[T]`, `dyn Trait`).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a decayed value type",
    label = "unsized types cannot be held by value",
    note = "store it behind a reference or a `Box`"
)]
pub trait Decayed {}

impl<T> Decayed for T {}

/// Bitwise-copyable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not trivial",
    label = "`{Self}` does not implement `Copy`"
)]
pub trait Trivial: Copy {}

impl<T: Copy> Trivial for T {}

// =============================================================================
// Aggregate
// =============================================================================

/// A type that can be built field by field with literal syntax from outside
/// its module: tuples, arrays, and structs deriving `Aggregate`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an aggregate",
    label = "`{Self}` has no public literal syntax",
    note = "structs with only `pub` fields can `#[derive(Aggregate)]`"
)]
pub trait Aggregate {}

impl<T, const N: usize> Aggregate for [T; N] {}

macro_rules! impl_aggregate_tuples {
    () => {
        impl Aggregate for () {}
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> Aggregate for ($head, $($tail,)*) {}
        impl_aggregate_tuples!($($tail),*);
    };
}

impl_aggregate_tuples!(A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// Enumerations
// =============================================================================

/// An enumeration type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an enumeration",
    label = "`{Self}` does not implement `EnumType`",
    note = "enums opt in with `#[derive(EnumType)]`"
)]
pub trait EnumType {}

impl EnumType for core::cmp::Ordering {}
impl EnumType for core::num::FpCategory {}
impl EnumType for core::fmt::Alignment {}
impl EnumType for core::sync::atomic::Ordering {}

#[cfg(feature = "std")]
impl EnumType for std::io::ErrorKind {}

/// An enumeration that can stand for a concrete I/O error.
#[cfg(feature = "std")]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an error code enumeration",
    label = "`{Self}` cannot be converted into `std::io::Error`"
)]
pub trait ErrorCodeEnum: EnumType + Into<std::io::Error> {}

#[cfg(feature = "std")]
impl<T: EnumType + Into<std::io::Error>> ErrorCodeEnum for T {}

/// An enumeration that classifies I/O errors into portable conditions.
#[cfg(feature = "std")]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an error condition enumeration",
    label = "`{Self}` cannot be converted into `std::io::ErrorKind`"
)]
pub trait ErrorConditionEnum: EnumType + Into<std::io::ErrorKind> {}

#[cfg(feature = "std")]
impl<T: EnumType + Into<std::io::ErrorKind>> ErrorConditionEnum for T {}

// =============================================================================
// Value Semantics
// =============================================================================

/// Copyable and default-constructible.
pub trait Semiregular: Clone + Default {}

impl<T: Clone + Default> Semiregular for T {}

/// Semiregular with a total equality.
pub trait Regular: Semiregular + Eq {}

impl<T: Semiregular + Eq> Regular for T {}

/// Comparable with a total order.
pub trait TotallyOrdered: Ord {}

impl<T: Ord + ?Sized> TotallyOrdered for T {}
