//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Used for the readable/writable flags of iterator access modes and proxy
//! references, where a capability must be selectable in an `impl` header.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type And<Other: Bool> = Absent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::And<Absent> as Bool>::VALUE);
    }
}
