//! Top-event probability from minimal cut sets.
//!
//! Cut sets are treated as independent:
//!
//! ```text
//! P(top) = 1 - ∏ₖ (1 - ∏_{e ∈ Cₖ} P(e))
//! ```
//!
//! This is exact when minimal cut sets share no basic events and otherwise
//! an approximation (it is not full inclusion-exclusion).

use std::collections::HashMap;

use log::debug;

use crate::cutset::CutSet;
use crate::error::{FtaError, Result};
use crate::tree::FaultTree;
use crate::types::Code;

/// Source of basic-event occurrence probabilities.
pub trait EventProbabilities {
    /// Probability that `code` has occurred. Fails with
    /// [`FtaError::UnknownEvent`] when the source has no value for it.
    fn probability_of(&self, code: Code) -> Result<f64>;
}

/// Fixed leaf probabilities of the tree.
impl EventProbabilities for FaultTree {
    fn probability_of(&self, code: Code) -> Result<f64> {
        match self.node(code) {
            Some(node) if node.is_basic() => Ok(node.probability()),
            _ => Err(FtaError::UnknownEvent(code)),
        }
    }
}

impl EventProbabilities for HashMap<Code, f64> {
    fn probability_of(&self, code: Code) -> Result<f64> {
        self.get(&code).copied().ok_or(FtaError::UnknownEvent(code))
    }
}

/// Probability of the top event given its minimal cut sets.
///
/// An empty collection yields `0.0`. That input arises only when the top event
/// is itself a basic event, in which case the caller must use the leaf's own
/// probability instead; [`Analysis`][crate::analysis::Analysis] does so.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use fta_rs::cutset::CutSet;
/// use fta_rs::probability::top_event_probability;
/// use fta_rs::types::Code;
///
/// let (a, b) = (Code::new(1), Code::new(2));
/// let probabilities = HashMap::from([(a, 0.1), (b, 0.2)]);
///
/// let or = [CutSet::new(vec![a]), CutSet::new(vec![b])];
/// let p = top_event_probability(&or, &probabilities).unwrap();
/// assert!((p - 0.28).abs() < 1e-12);
/// ```
pub fn top_event_probability(minimal: &[CutSet], source: &impl EventProbabilities) -> Result<f64> {
    let mut none_occurs = 1.0;
    for cs in minimal {
        none_occurs *= 1.0 - cs.probability(source)?;
    }
    let p = 1.0 - none_occurs;
    debug!("top event probability over {} cut sets: {}", minimal.len(), p);
    Ok(p)
}
