// Boolean expressions over predicate traits: `Container & !SizedContainer`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Token, Type,
    parse::{Parse, ParseStream},
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Predicate(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    if input.peek(Token![||]) {
        return Err(input.error("use `|` to combine predicates"));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    if input.peek(Token![&&]) {
        return Err(input.error("use `&` to combine predicates"));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        match ty {
            Type::Path(_) | Type::TraitObject(_) => Ok(BoolExpr::Predicate(ty)),
            other => Err(syn::Error::new_spanned(
                other,
                "expected a predicate trait such as `SequenceContainer` or `ContainerOf<i32>`",
            )),
        }
    }
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Human-readable form, used in assertion messages.
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Predicate(ty) => compact(quote!(#ty)),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

/// Render tokens without the spaces `to_string` puts around punctuation.
pub fn compact(tokens: TokenStream) -> String {
    let text = tokens.to_string();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let next = chars.peek().copied();
            let prev = out.chars().last();
            let keep = matches!(prev, Some(p) if p.is_alphanumeric() || p == '_' || p == ',' || p == ';')
                && matches!(next, Some(n) if n.is_alphanumeric() || n == '_' || n == '\'' || n == '(' || n == '[' || n == '&');
            if keep {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// Probe Generation
// =============================================================================

/// Expand an expression into a `const`-evaluable bool for a concrete type.
///
/// Each predicate becomes one probe: an inherent `VAL` that exists only when
/// the bound holds, shadowing a trait-provided `false` fallback.
pub fn generate_probe_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Predicate(trait_ty) => generate_single_probe(trait_ty, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    let bound = match trait_ty {
        Type::TraitObject(object) => {
            let bounds = &object.bounds;
            quote! { #bounds }
        }
        other => quote! { #other },
    };
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #bound> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
