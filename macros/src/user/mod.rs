// User-facing macro implementations

pub mod derive;
pub mod satisfies;
