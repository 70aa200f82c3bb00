//! Analysis limits.

/// Upper bound on the number of events the structural enumeration can encode:
/// each assignment is a `u64` bit mask.
pub const MAX_MASK_EVENTS: usize = 63;

/// Configuration options for a fault tree analysis run.
///
/// # Examples
///
/// ```
/// use fta_rs::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default().with_max_structural_events(12);
/// assert_eq!(config.max_structural_events, 12);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Iteration cap of the cut-set generator (default: 100000).
    ///
    /// Every gate expansion counts as one step.
    pub max_expansion_steps: usize,
    /// Maximum number of basic events the structural importance analyzer
    /// is allowed to enumerate, i.e. `2^n` assignments (default: 20).
    pub max_structural_events: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_expansion_steps: 100_000,
            max_structural_events: 20,
        }
    }
}

impl AnalysisConfig {
    pub fn with_max_expansion_steps(mut self, steps: usize) -> Self {
        self.max_expansion_steps = steps;
        self
    }

    pub fn with_max_structural_events(mut self, events: usize) -> Self {
        self.max_structural_events = events;
        self
    }

    /// Effective structural limit, clamped to what a bit mask can hold.
    pub fn structural_limit(&self) -> usize {
        self.max_structural_events.min(MAX_MASK_EVENTS)
    }
}
