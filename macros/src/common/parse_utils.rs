//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use super::BoolExpr;

// =============================================================================
// Check Parsing: `Type: Expr`
// =============================================================================

/// A single check: `Vec<i32>: ContiguousContainer & !AssociativeContainer`
#[derive(Clone)]
pub struct Check {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for Check {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(Check { ty, expr })
    }
}

/// A non-empty, comma-separated list of checks.
pub struct CheckList {
    pub checks: Vec<Check>,
}

impl Parse for CheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks = parse_comma_separated::<Check>(input)?;
        if checks.is_empty() {
            return Err(input.error("expected at least one `Type: Predicate` check"));
        }
        Ok(CheckList { checks })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
