//! End-to-end fault tree analysis.
//!
//! [`Analysis`] runs every stage on one tree: cut-set generation, reduction
//! to minimal cut sets, top-event probability, and the importance measures.
//! Each stage only reads the tree and the minimal cut sets, so the stages are
//! independent of each other.
//!
//! # Examples
//!
//! ```
//! use fta_rs::analysis::Analysis;
//! use fta_rs::gate::Gate;
//! use fta_rs::tree::{FaultTree, NodeSpec};
//!
//! let tree = FaultTree::build([
//!     NodeSpec::gate(0, Gate::Or, [1, 2]),
//!     NodeSpec::basic(1, 0.1),
//!     NodeSpec::basic(2, 0.2),
//! ])
//! .unwrap();
//!
//! let report = Analysis::new(&tree).run().unwrap();
//! assert_eq!(report.minimal_cut_sets.len(), 2);
//! assert!((report.top_event_probability - 0.28).abs() < 1e-12);
//! ```

use std::fmt;

use log::{debug, warn};

use crate::config::AnalysisConfig;
use crate::cutset::{generate_cut_sets, CutSet};
use crate::error::{FtaError, Result};
use crate::importance::{critical_importance, probabilistic_importance, ExponentialModel, Importance};
use crate::minimal::minimal_cut_sets;
use crate::probability::top_event_probability;
use crate::structural::structural_importance;
use crate::tree::FaultTree;
use crate::types::Code;

/// Configured analysis of a single fault tree.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    tree: &'a FaultTree,
    config: AnalysisConfig,
    model: Option<ExponentialModel>,
}

/// Results of an [`Analysis`] run.
///
/// All importance results list events in the same (first-seen) order, so
/// they can be zipped position by position.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Number of cut sets produced by the generator before reduction.
    pub raw_cut_set_count: usize,
    pub minimal_cut_sets: Vec<CutSet>,
    /// Occurrence probability of each minimal cut set, from leaf probabilities.
    pub cut_set_probabilities: Vec<f64>,
    pub top_event_probability: f64,
    /// Absent when the tree has more basic events than
    /// [`AnalysisConfig::max_structural_events`] allows.
    pub structural: Option<Importance>,
    /// Present only when a failure model was supplied.
    pub probabilistic: Option<Importance>,
    /// Computed from the tree's leaf probabilities.
    pub critical: Importance,
}

impl<'a> Analysis<'a> {
    pub fn new(tree: &'a FaultTree) -> Self {
        Self {
            tree,
            config: AnalysisConfig::default(),
            model: None,
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Failure rates and mission time for probabilistic importance.
    pub fn with_model(mut self, model: ExponentialModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn run(&self) -> Result<AnalysisReport> {
        let tree = self.tree;
        let raw = generate_cut_sets(tree, &self.config)?;
        let minimal = minimal_cut_sets(&raw);

        // A basic top event has no cut sets; its probability is its own.
        let top = if tree.root().is_basic() {
            tree.root().probability()
        } else {
            top_event_probability(&minimal, tree)?
        };

        let cut_set_probabilities = minimal
            .iter()
            .map(|cs| cs.probability(tree))
            .collect::<Result<Vec<f64>>>()?;

        let structural = match structural_importance(&minimal, &self.config) {
            Ok(importance) => Some(importance),
            Err(FtaError::CapacityExceeded { events, limit }) => {
                warn!(
                    "skipping structural importance: {} basic events exceed the limit of {}",
                    events, limit
                );
                None
            }
            Err(err) => return Err(err),
        };
        let probabilistic = match &self.model {
            Some(model) => Some(probabilistic_importance(&minimal, model)?),
            None => None,
        };
        let critical = critical_importance(&minimal, tree)?;

        debug!(
            "analysis done: {} raw / {} minimal cut sets, P(top) = {}",
            raw.len(),
            minimal.len(),
            top
        );

        Ok(AnalysisReport {
            raw_cut_set_count: raw.len(),
            minimal_cut_sets: minimal,
            cut_set_probabilities,
            top_event_probability: top,
            structural,
            probabilistic,
            critical,
        })
    }
}

impl AnalysisReport {
    /// Share of the top-event probability attributed to each minimal cut set,
    /// in percent. All zero when the top-event probability is zero.
    pub fn contributions(&self) -> Vec<f64> {
        self.cut_set_probabilities
            .iter()
            .map(|&p| {
                if self.top_event_probability > 0.0 {
                    p / self.top_event_probability * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Minimal cut sets made of a single basic event.
    pub fn single_points(&self) -> impl Iterator<Item = &CutSet> {
        self.minimal_cut_sets.iter().filter(|cs| cs.is_single_point())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Minimal cut sets: {} (from {} raw)",
            self.minimal_cut_sets.len(),
            self.raw_cut_set_count
        )?;
        let contributions = self.contributions();
        for ((cs, p), share) in self
            .minimal_cut_sets
            .iter()
            .zip(&self.cut_set_probabilities)
            .zip(&contributions)
        {
            writeln!(f, "  {:<20} p = {:<12.6e} {:>6.2}%", cs.to_string(), p, share)?;
        }
        writeln!(f, "Top event probability: {:.6e}", self.top_event_probability)?;

        if self.critical.is_empty() {
            return Ok(());
        }
        writeln!(
            f,
            "{:>8} {:>14} {:>14} {:>14}",
            "event", "structural", "probabilistic", "critical"
        )?;
        let cell = |importance: &Option<Importance>, code: Code, precision: usize| {
            importance
                .as_ref()
                .and_then(|imp| imp.get(code))
                .map_or_else(|| "-".to_string(), |score| format!("{:.*e}", precision, score))
        };
        for (code, critical) in self.critical.iter() {
            writeln!(
                f,
                "{:>8} {:>14} {:>14} {:>14.6e}",
                code.to_string(),
                cell(&self.structural, code, 6),
                cell(&self.probabilistic, code, 6),
                critical
            )?;
        }
        Ok(())
    }
}
