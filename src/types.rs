//! Type-safe identifiers for fault tree events.
//!
//! Every node of a fault tree (gates and basic events alike) is named by a
//! [`Code`]. Codes are stable for the whole analysis run, so results produced
//! by different analyzers can be matched up by code.
use std::fmt;

/// A fault tree node identifier.
///
/// Codes are opaque integers chosen by the caller. They need not be dense or
/// ordered; the tree model only requires them to be unique.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Code(u32);

impl Code {
    /// Creates a new code with the given ID.
    pub const fn new(id: u32) -> Self {
        Code(id)
    }

    /// Returns the raw ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Code {
    fn from(id: u32) -> Self {
        Code(id)
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_code_creation() {
        let a = Code::new(1);
        let b = Code::from(2);
        assert_eq!(a.id(), 1);
        assert_eq!(u32::from(b), 2);
        assert!(a < b);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(Code::new(42).to_string(), "42");
    }
}
