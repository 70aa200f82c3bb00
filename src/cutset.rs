//! Cut sets and their top-down generation from a fault tree.
//!
//! The generator keeps a FIFO worklist of partially expanded event sets.
//! Each pass visits a snapshot of the worklist once: for every set, the first
//! non-basic event is replaced by its children (one new set per child for an
//! OR gate, a single set holding all children for an AND gate). A pass that
//! expands nothing means every set consists of basic events only, and the
//! worklist is the (redundant, non-minimal) collection of cut sets.
//!
//! # Examples
//!
//! ```
//! use fta_rs::config::AnalysisConfig;
//! use fta_rs::cutset::generate_cut_sets;
//! use fta_rs::gate::Gate;
//! use fta_rs::tree::{FaultTree, NodeSpec};
//!
//! let tree = FaultTree::build([
//!     NodeSpec::gate(0, Gate::And, [1, 2]),
//!     NodeSpec::basic(1, 0.1),
//!     NodeSpec::gate(2, Gate::Or, [3, 4]),
//!     NodeSpec::basic(3, 0.3),
//!     NodeSpec::basic(4, 0.4),
//! ])
//! .unwrap();
//!
//! let cut_sets = generate_cut_sets(&tree, &AnalysisConfig::default()).unwrap();
//! let rendered: Vec<String> = cut_sets.iter().map(|cs| cs.to_string()).collect();
//! assert_eq!(rendered, ["{1, 3}", "{1, 4}"]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::config::AnalysisConfig;
use crate::error::{FtaError, Result};
use crate::gate::Gate;
use crate::probability::EventProbabilities;
use crate::tree::FaultTree;
use crate::types::Code;

/// A set of basic events whose joint occurrence triggers the top event.
///
/// Member order is kept as generated; it has no meaning for the analysis
/// but makes encodings deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CutSet(Vec<Code>);

impl CutSet {
    pub fn new(events: Vec<Code>) -> Self {
        CutSet(events)
    }

    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.0.iter().copied()
    }

    /// Number of events in the cut set.
    pub fn order(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A single event is enough to trigger the top event.
    pub fn is_single_point(&self) -> bool {
        self.0.len() == 1
    }

    pub fn contains(&self, code: Code) -> bool {
        self.0.contains(&code)
    }

    /// Whether every member of `self` is also a member of `other`.
    pub fn is_subset(&self, other: &CutSet) -> bool {
        self.0.iter().all(|c| other.contains(*c))
    }

    /// Cut set with every occurrence of `code` removed.
    pub fn without(&self, code: Code) -> CutSet {
        CutSet(self.0.iter().copied().filter(|&c| c != code).collect())
    }

    /// Joint occurrence probability of the members, assuming independence.
    pub fn probability(&self, source: &impl EventProbabilities) -> Result<f64> {
        self.0.iter().try_fold(1.0, |acc, &code| Ok(acc * source.probability_of(code)?))
    }
}

impl From<Vec<Code>> for CutSet {
    fn from(events: Vec<Code>) -> Self {
        CutSet(events)
    }
}

impl FromIterator<Code> for CutSet {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        CutSet(iter.into_iter().collect())
    }
}

impl fmt::Display for CutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", code)?;
        }
        write!(f, "}}")
    }
}

/// Expands the tree into its cut sets (not deduplicated, not minimal).
///
/// Returns an empty collection when the root itself is a basic event: the top
/// event cannot be decomposed further.
///
/// Fails with [`FtaError::NonConverging`] once more than
/// [`AnalysisConfig::max_expansion_steps`] gates have been expanded.
pub fn generate_cut_sets(tree: &FaultTree, config: &AnalysisConfig) -> Result<Vec<CutSet>> {
    let root = tree.root();
    if root.is_basic() {
        debug!("top event {} is a basic event, no cut sets", root.code());
        return Ok(Vec::new());
    }

    let mut worklist: VecDeque<Vec<Code>> = match root.gate() {
        Gate::Or => root.children().iter().map(|&c| vec![c]).collect(),
        Gate::And => VecDeque::from([root.children().to_vec()]),
    };

    let mut steps = 0;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut expanded = false;

        for _ in 0..worklist.len() {
            let Some(mut set) = worklist.pop_front() else {
                break;
            };
            let Some(pos) = set.iter().position(|&c| !tree.is_basic(c)) else {
                worklist.push_back(set);
                continue;
            };

            steps += 1;
            if steps > config.max_expansion_steps {
                return Err(FtaError::NonConverging {
                    steps: config.max_expansion_steps,
                });
            }

            let code = set.remove(pos);
            let node = tree.node(code).ok_or(FtaError::UnknownEvent(code))?;
            trace!("expand {} ({}) in {:?}", code, node.gate(), set);
            match node.gate() {
                Gate::Or => {
                    for &child in node.children() {
                        let mut next = set.clone();
                        next.push(child);
                        worklist.push_back(next);
                    }
                }
                Gate::And => {
                    set.extend_from_slice(node.children());
                    worklist.push_back(set);
                }
            }
            expanded = true;
        }

        if !expanded {
            break;
        }
    }

    debug!(
        "generated {} cut sets in {} passes ({} expansions)",
        worklist.len(),
        passes,
        steps
    );
    Ok(worklist.into_iter().map(CutSet).collect())
}
