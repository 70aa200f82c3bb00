//! Probabilistic and critical importance of basic events.
//!
//! **Probabilistic importance** is the partial derivative of the top-event
//! probability polynomial with respect to each event's occurrence probability,
//! evaluated with every probability replaced by the exponential failure CDF
//! `F(t) = 1 - e^(-λt)` at the mission time.
//!
//! **Critical importance** excises one event from every minimal cut set
//! (dropping cut sets that become empty) and compares the resulting top-event
//! probability `F_i` with the original `F_s`:
//!
//! ```text
//! Δg = (F_i - F_s) / F_s
//! critical = (F_i / F_s) · Δg
//! ```
//!
//! Both are zero when `F_s = 0`. This is a relative-sensitivity measure, not
//! the textbook criticality importance (`∂F/∂q · q / F`); callers comparing
//! against literature values should keep that in mind.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::cutset::CutSet;
use crate::error::{FtaError, Result};
use crate::expr::Expr;
use crate::index::EventIndex;
use crate::probability::{top_event_probability, EventProbabilities};
use crate::types::Code;

/// Per-event importance scores, in the order the events were indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Importance {
    scores: IndexMap<Code, f64>,
}

impl Importance {
    pub(crate) fn new(index: &EventIndex, scores: Vec<f64>) -> Self {
        debug_assert_eq!(index.len(), scores.len());
        Self {
            scores: index.codes().zip(scores).collect(),
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.scores.keys().copied()
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.values().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, code: Code) -> Option<f64> {
        self.scores.get(&code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Code, f64)> + '_ {
        self.scores.iter().map(|(&code, &score)| (code, score))
    }

    /// Events sorted by descending score. Ties keep their original order.
    pub fn ranked(&self) -> Vec<(Code, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Exponentially distributed component lifetimes at a fixed mission time.
#[derive(Debug, Clone)]
pub struct ExponentialModel {
    rates: HashMap<Code, f64>,
    mission_time: f64,
}

impl ExponentialModel {
    /// Failure rates `λ` per basic event and mission time `t`.
    ///
    /// Rates and time must be finite and non-negative, and each event may be
    /// given only one rate.
    pub fn new(rates: impl IntoIterator<Item = (Code, f64)>, mission_time: f64) -> Result<Self> {
        let mut table = HashMap::new();
        for (code, rate) in rates {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(FtaError::InvalidParameter {
                    name: "failure rate",
                    value: rate,
                });
            }
            match table.entry(code) {
                Entry::Occupied(_) => return Err(FtaError::DuplicateRate(code)),
                Entry::Vacant(slot) => {
                    slot.insert(rate);
                }
            }
        }
        Self {
            rates: table,
            mission_time: 0.0,
        }
        .with_mission_time(mission_time)
    }

    /// Same rates, different mission time.
    pub fn with_mission_time(mut self, mission_time: f64) -> Result<Self> {
        if !(mission_time.is_finite() && mission_time >= 0.0) {
            return Err(FtaError::InvalidParameter {
                name: "mission time",
                value: mission_time,
            });
        }
        self.mission_time = mission_time;
        Ok(self)
    }

    pub fn mission_time(&self) -> f64 {
        self.mission_time
    }

    pub fn rate(&self, code: Code) -> Option<f64> {
        self.rates.get(&code).copied()
    }

    /// `1 - e^(-λt)` for the event's rate at the mission time.
    pub fn cdf(&self, code: Code) -> Result<f64> {
        let rate = self.rate(code).ok_or(FtaError::UnknownEvent(code))?;
        Ok(1.0 - (-rate * self.mission_time).exp())
    }
}

impl EventProbabilities for ExponentialModel {
    fn probability_of(&self, code: Code) -> Result<f64> {
        self.cdf(code)
    }
}

/// Probabilistic importance of every event in `minimal`, in first-seen order.
///
/// Fails with [`FtaError::UnknownEvent`] if `model` has no rate for one of the events.
pub fn probabilistic_importance(minimal: &[CutSet], model: &ExponentialModel) -> Result<Importance> {
    let index = EventIndex::from_cut_sets(minimal);
    let dense: Vec<Vec<usize>> = minimal.iter().map(|cs| index.remap(cs)).collect();
    let top = Expr::top_event(&dense);
    debug!("top event polynomial: {}", top);

    let values = index.codes().map(|code| model.cdf(code)).collect::<Result<Vec<f64>>>()?;

    let mut scores = Vec::with_capacity(index.len());
    for (i, code) in index.codes().enumerate() {
        let derivative = top.derivative(i);
        let score = derivative.eval(&values).ok_or(FtaError::UnknownEvent(code))?;
        debug!("d/d{} = {} = {}", code, derivative, score);
        scores.push(score);
    }

    Ok(Importance::new(&index, scores))
}

/// Critical importance of every event in `minimal`, in first-seen order.
///
/// Probabilities come from `source`: the tree itself for its fixed leaf
/// probabilities, or an [`ExponentialModel`] for values at its mission time.
pub fn critical_importance(minimal: &[CutSet], source: &impl EventProbabilities) -> Result<Importance> {
    let index = EventIndex::from_cut_sets(minimal);
    if index.is_empty() {
        return Ok(Importance::default());
    }

    let f_s = top_event_probability(minimal, source)?;
    if f_s == 0.0 {
        warn!("top event probability is zero, critical importance is zero for all events");
    }

    let mut scores = Vec::with_capacity(index.len());
    for code in index.codes() {
        let excised: Vec<CutSet> = minimal
            .iter()
            .filter_map(|cs| {
                if !cs.contains(code) {
                    return Some(cs.clone());
                }
                let rest = cs.without(code);
                (!rest.is_empty()).then_some(rest)
            })
            .collect();
        let f_i = top_event_probability(&excised, source)?;

        let score = if f_s == 0.0 {
            0.0
        } else {
            let delta_g = (f_i - f_s) / f_s;
            (f_i / f_s) * delta_g
        };
        debug!("critical {}: F_i = {}, F_s = {}, score = {}", code, f_i, f_s, score);
        scores.push(score);
    }

    Ok(Importance::new(&index, scores))
}
