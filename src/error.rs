//! Error types for fault tree analysis.

use thiserror::Error;

use crate::types::Code;

/// Structural defect found while building a [`FaultTree`][crate::tree::FaultTree].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedReason {
    #[error("tree has no nodes")]
    Empty,
    #[error("code {0} is used by more than one node")]
    DuplicateCode(Code),
    #[error("node {parent} references missing child {child}")]
    DanglingChild { parent: Code, child: Code },
    #[error("basic event {code} has probability {probability} outside [0, 1]")]
    ProbabilityOutOfRange { code: Code, probability: f64 },
    #[error("node {0} is a child of more than one gate")]
    MultipleParents(Code),
    #[error("root {0} is referenced as a child")]
    RootHasParent(Code),
    #[error("node {0} is not reachable from the root")]
    Unreachable(Code),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FtaError {
    #[error("malformed fault tree: {0}")]
    MalformedTree(#[from] MalformedReason),

    #[error("cut set expansion did not converge within {steps} steps")]
    NonConverging { steps: usize },

    #[error("{events} basic events exceed the supported limit of {limit}")]
    CapacityExceeded { events: usize, limit: usize },

    #[error("unknown event {0}")]
    UnknownEvent(Code),

    #[error("unknown gate symbol {0:?}")]
    UnknownGate(String),

    #[error("failure rate for event {0} given more than once")]
    DuplicateRate(Code),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, FtaError>;
