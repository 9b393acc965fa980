//! `satisfies!` and `assert_satisfies!` expansion.

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::{CheckList, bool_expr_to_string, compact, generate_probe_body};

/// All checks ANDed into one const-evaluable `bool` block.
pub fn expand_satisfies(list: &CheckList) -> TokenStream {
    let probes = list
        .checks
        .iter()
        .map(|check| generate_probe_body(&check.expr, &check.ty));

    quote! {
        {
            true #( && #probes )*
        }
    }
}

/// One `const` assertion item per check so a failure names the offending pair.
pub fn expand_assert_satisfies(list: &CheckList) -> TokenStream {
    let assertions = list.checks.iter().map(|check| {
        let ty = &check.ty;
        let probe = generate_probe_body(&check.expr, ty);
        let message = escape_braces(&format!(
            "`{}` does not satisfy `{}`",
            compact(quote!(#ty)),
            bool_expr_to_string(&check.expr)
        ));
        quote! {
            const _: () = ::core::assert!(#probe, #message);
        }
    });

    quote! { #(#assertions)* }
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}
