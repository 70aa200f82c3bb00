//! Structural importance by exhaustive state enumeration.
//!
//! Every basic event gets a bit in a `u64` assignment mask. For each of the
//! `2^n` assignments and each event `i` that occurs in it, the assignment is
//! *critical* for `i` when some minimal cut set containing `i` is fully
//! occurring while no cut set without `i` is. Event `i` scores
//! `1 / 2^(n-1)` per critical assignment.
//!
//! The cost is exponential in the number of events, so the enumeration is
//! guarded by [`AnalysisConfig::max_structural_events`].

use log::{debug, warn};

use crate::config::AnalysisConfig;
use crate::cutset::CutSet;
use crate::error::{FtaError, Result};
use crate::importance::Importance;
use crate::index::EventIndex;

/// Event count above which the enumeration is reported as expensive.
const SLOW_EVENTS: usize = 16;

/// Structural importance of every basic event in `minimal`, in first-seen order.
///
/// Fails with [`FtaError::CapacityExceeded`] when there are more events than
/// [`AnalysisConfig::structural_limit`] allows.
pub fn structural_importance(minimal: &[CutSet], config: &AnalysisConfig) -> Result<Importance> {
    let index = EventIndex::from_cut_sets(minimal);
    let n = index.len();
    let limit = config.structural_limit();
    if n > limit {
        return Err(FtaError::CapacityExceeded { events: n, limit });
    }
    if n == 0 {
        return Ok(Importance::default());
    }
    if n > SLOW_EVENTS {
        warn!("enumerating 2^{} states for structural importance", n);
    }

    let masks: Vec<u64> = minimal
        .iter()
        .map(|cs| index.remap(cs).into_iter().fold(0u64, |mask, i| mask | (1u64 << i)))
        .collect();

    let weight = 1.0 / (1u64 << (n - 1)) as f64;
    let mut scores = vec![0.0; n];
    for state in 0..(1u64 << n) {
        accumulate(state, &masks, weight, &mut scores);
    }

    debug!("structural importance over {} events: {:?}", n, scores);
    Ok(Importance::new(&index, scores))
}

/// Adds the contribution of one assignment to `scores`.
fn accumulate(state: u64, masks: &[u64], weight: f64, scores: &mut [f64]) {
    for (i, score) in scores.iter_mut().enumerate() {
        let bit = 1u64 << i;
        if state & bit == 0 {
            continue;
        }

        // Top event occurs with `i` (p1) and without needing `i` (p0).
        let mut p1 = false;
        let mut p0 = false;
        for &mask in masks {
            if mask & state == mask {
                p1 = true;
                if mask & bit == 0 {
                    p0 = true;
                }
            }
        }

        if p1 && !p0 {
            *score += weight;
        }
    }
}
