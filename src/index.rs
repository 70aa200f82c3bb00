//! Dense numbering of the basic events in a cut set collection.

use indexmap::IndexSet;

use crate::cutset::CutSet;
use crate::types::Code;

/// Dense `0..n` numbering of the basic events appearing in a cut set
/// collection, in first-seen order.
///
/// All importance analyzers number events through this index, so their
/// results line up position by position.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    codes: IndexSet<Code>,
}

impl EventIndex {
    pub fn from_cut_sets(cut_sets: &[CutSet]) -> Self {
        Self {
            codes: cut_sets.iter().flat_map(|cs| cs.iter()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Events in index order.
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.codes.iter().copied()
    }

    pub fn position(&self, code: Code) -> Option<usize> {
        self.codes.get_index_of(&code)
    }

    /// Dense indices of the members of `cut_set`. Unknown codes are skipped.
    pub fn remap(&self, cut_set: &CutSet) -> Vec<usize> {
        cut_set.iter().filter_map(|c| self.position(c)).collect()
    }
}
