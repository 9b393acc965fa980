//! Value-semantics lifting.
//!
//! A container of comparable, copyable, semiregular or regular elements must
//! itself be so, and a sequence or ordered container of totally ordered
//! elements must itself be totally ordered. Trait bounds cannot say "if the
//! element is `Clone` then so am I", so these rules are checked per concrete
//! type with the macros below, which evaluate in `const` context.

/// `true` when `C` is at least as comparable, copyable, semiregular and
/// regular as its `Value`.
///
/// ```ignore
/// const _: () = assert!(tola_concepts::lifts_value_semantics!(Vec<String>));
/// ```
#[macro_export]
macro_rules! lifts_value_semantics {
    ($container:ty) => {{
        type __Value = <$container as $crate::Container>::Value;
        (!$crate::satisfies!(__Value: PartialEq) || $crate::satisfies!($container: PartialEq))
            && (!$crate::satisfies!(__Value: Clone) || $crate::satisfies!($container: Clone))
            && (!$crate::satisfies!(__Value: $crate::Semiregular)
                || $crate::satisfies!($container: $crate::Semiregular))
            && (!$crate::satisfies!(__Value: $crate::Regular)
                || $crate::satisfies!($container: $crate::Regular))
    }};
}

/// `true` when `C` is totally ordered whenever its `Value` is.
#[macro_export]
macro_rules! lifts_total_order {
    ($container:ty) => {{
        type __Value = <$container as $crate::Container>::Value;
        !$crate::satisfies!(__Value: $crate::TotallyOrdered)
            || $crate::satisfies!($container: $crate::TotallyOrdered)
    }};
}
