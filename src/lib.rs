//! # fta-rs: Fault Tree Analysis in Rust
//!
//! **`fta-rs`** computes the classic quantitative results of a fault tree:
//! minimal cut sets, the top-event probability, and importance measures that
//! rank basic events by their contribution to the top event.
//!
//! ## What is a fault tree?
//!
//! A fault tree is a hierarchy of AND/OR gates rooted at an undesired *top event*.
//! Leaves are *basic events* (component failures) with known occurrence
//! probabilities. A *cut set* is a set of basic events whose joint occurrence
//! triggers the top event; a *minimal* cut set has no proper subset that is
//! itself a cut set.
//!
//! ## Pipeline
//!
//! 1. [`tree`]: build and validate an immutable [`FaultTree`][crate::tree::FaultTree].
//! 2. [`cutset`]: expand gates top-down into raw cut sets.
//! 3. [`minimal`]: drop supersets using prime products.
//! 4. [`probability`]: top-event probability over the minimal cut sets.
//! 5. [`structural`]: structural importance by exhaustive state enumeration.
//! 6. [`importance`]: probabilistic importance (symbolic derivative, see [`expr`])
//!    and critical importance.
//!
//! [`analysis`] chains all of them.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fta_rs::analysis::Analysis;
//! use fta_rs::gate::Gate;
//! use fta_rs::importance::ExponentialModel;
//! use fta_rs::tree::{FaultTree, NodeSpec};
//! use fta_rs::types::Code;
//!
//! // TOP = A AND (B OR C)
//! let tree = FaultTree::build([
//!     NodeSpec::gate(0, Gate::And, [1, 2]),
//!     NodeSpec::basic(1, 0.1),
//!     NodeSpec::gate(2, Gate::Or, [3, 4]),
//!     NodeSpec::basic(3, 0.2),
//!     NodeSpec::basic(4, 0.3),
//! ])?;
//!
//! let model = ExponentialModel::new(
//!     [(Code::new(1), 0.004), (Code::new(3), 0.002), (Code::new(4), 0.003)],
//!     100.0,
//! )?;
//! let report = Analysis::new(&tree).with_model(model).run()?;
//!
//! assert_eq!(report.minimal_cut_sets.len(), 2);
//! let expected = 1.0 - (1.0 - 0.1 * 0.2) * (1.0 - 0.1 * 0.3);
//! assert!((report.top_event_probability - expected).abs() < 1e-12);
//! # Ok::<(), fta_rs::error::FtaError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod cutset;
pub mod error;
pub mod expr;
pub mod gate;
pub mod importance;
pub mod index;
pub mod minimal;
pub mod primes;
pub mod probability;
pub mod structural;
pub mod tree;
pub mod types;
