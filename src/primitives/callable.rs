//! Call-signature predicates.
//!
//! A signature is written as a function pointer type, `fn(A, B) -> R`, or a
//! tuple of them when a callable must accept several. Arguments must be
//! spelled with concrete lifetimes (`fn(&'static str) -> usize`): an elided
//! reference makes the pointer type higher-ranked, which no impl here matches.

use core::hash::{BuildHasher, Hash};

/// `F` can be called with each signature's arguments and the result converts
/// into the declared return type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not invocable as `{Sig}`",
    label = "no call of `{Self}` matches `{Sig}`",
    note = "the arguments must match and the result must convert `Into` the return type"
)]
pub trait InvocableAs<Sig> {}

/// `F` can be called with each signature's arguments and returns exactly the
/// declared return type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not callable as `{Sig}`",
    label = "no call of `{Self}` returns exactly what `{Sig}` declares"
)]
pub trait CallableAs<Sig>: InvocableAs<Sig> {}

macro_rules! impl_signature_arity {
    ($($arg:ident),*) => {
        impl<F, R, O, $($arg),*> InvocableAs<fn($($arg),*) -> R> for F
        where
            F: Fn($($arg),*) -> O,
            O: Into<R>,
        {
        }

        impl<F, R, $($arg),*> CallableAs<fn($($arg),*) -> R> for F
        where
            F: Fn($($arg),*) -> R,
        {
        }
    };
}

impl_signature_arity!();
impl_signature_arity!(A1);
impl_signature_arity!(A1, A2);
impl_signature_arity!(A1, A2, A3);
impl_signature_arity!(A1, A2, A3, A4);
impl_signature_arity!(A1, A2, A3, A4, A5);
impl_signature_arity!(A1, A2, A3, A4, A5, A6);

macro_rules! impl_signature_sets {
    ($($sig:ident),+) => {
        impl<F, $($sig),+> InvocableAs<($($sig,)+)> for F where $(F: InvocableAs<$sig>),+ {}
        impl<F, $($sig),+> CallableAs<($($sig,)+)> for F where $(F: CallableAs<$sig>),+ {}
    };
}

impl_signature_sets!(S1);
impl_signature_sets!(S1, S2);
impl_signature_sets!(S1, S2, S3);
impl_signature_sets!(S1, S2, S3, S4);

// =============================================================================
// Hash Functions
// =============================================================================

/// A hash function object for keys of type `K`.
///
/// Rust's hash function objects are `BuildHasher`s: a shared reference hashes
/// any key to a `u64`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a hash function for `{K}`",
    label = "`{Self}` cannot hash `{K}`",
    note = "use a `BuildHasher` such as `RandomState` with a key implementing `Hash`"
)]
pub trait HashFunction<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

impl<S: BuildHasher, K: Hash + ?Sized> HashFunction<K> for S {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_one(key)
    }
}
