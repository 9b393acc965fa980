// Common utilities shared by the user-facing macros
//
// This module contains:
// - bool_expr: predicate expression parsing and probe generation
// - parse_utils: `Type: Expr` check lists

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
