//! Logic gates of intermediate fault tree events.

use std::fmt;
use std::str::FromStr;

use crate::error::FtaError;

/// Logic gate of an intermediate fault tree event.
///
/// The gate of a basic event is meaningless and ignored by every analyzer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Gate {
    /// The output event occurs when all inputs occur.
    And,
    /// The output event occurs when any input occurs.
    Or,
}

impl Gate {
    /// Conventional fault tree symbol: `*` for AND, `+` for OR.
    pub fn symbol(self) -> char {
        match self {
            Gate::And => '*',
            Gate::Or => '+',
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gate {
    type Err = FtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "*" | "and" => Ok(Gate::And),
            "+" | "or" => Ok(Gate::Or),
            _ => Err(FtaError::UnknownGate(s.to_string())),
        }
    }
}
