use std::collections::HashMap;

use test_log::test;

use fta_rs::analysis::Analysis;
use fta_rs::config::AnalysisConfig;
use fta_rs::cutset::{generate_cut_sets, CutSet};
use fta_rs::error::{FtaError, MalformedReason};
use fta_rs::gate::Gate;
use fta_rs::importance::{critical_importance, probabilistic_importance, ExponentialModel};
use fta_rs::minimal::minimal_cut_sets;
use fta_rs::probability::top_event_probability;
use fta_rs::structural::structural_importance;
use fta_rs::tree::{FaultTree, NodeSpec};
use fta_rs::types::Code;

fn cs(codes: &[u32]) -> CutSet {
    codes.iter().copied().map(Code::new).collect()
}

fn codes(cut_sets: &[CutSet]) -> Vec<Vec<u32>> {
    cut_sets.iter().map(|c| c.iter().map(u32::from).collect()).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn two_events(gate: Gate) -> FaultTree {
    FaultTree::build([
        NodeSpec::gate(0, gate, [1, 2]),
        NodeSpec::basic(1, 0.1),
        NodeSpec::basic(2, 0.2),
    ])
    .unwrap()
}

/// `0 = OR(1 = AND(3, 4), 2 = OR(5, 6 = AND(7, 8)))`
fn plant(p: [f64; 5]) -> FaultTree {
    FaultTree::build([
        NodeSpec::gate(0, Gate::Or, [1, 2]),
        NodeSpec::gate(1, Gate::And, [3, 4]),
        NodeSpec::gate(2, Gate::Or, [5, 6]),
        NodeSpec::basic(3, p[0]),
        NodeSpec::basic(4, p[1]),
        NodeSpec::basic(5, p[2]),
        NodeSpec::gate(6, Gate::And, [7, 8]),
        NodeSpec::basic(7, p[3]),
        NodeSpec::basic(8, p[4]),
    ])
    .unwrap()
}

const PLANT_P: [f64; 5] = [0.02, 0.03, 0.001, 0.05, 0.04];
const PLANT_RATES: [f64; 5] = [0.004, 0.002, 0.003, 0.001, 0.001];

fn plant_model(t: f64) -> ExponentialModel {
    let rates = [3, 4, 5, 7, 8].into_iter().map(Code::new).zip(PLANT_RATES);
    ExponentialModel::new(rates, t).unwrap()
}

#[test]
fn test_or_of_two_events() {
    let tree = two_events(Gate::Or);
    let report = Analysis::new(&tree).run().unwrap();
    assert_eq!(codes(&report.minimal_cut_sets), vec![vec![1], vec![2]]);
    assert!(approx(report.top_event_probability, 0.28));
}

#[test]
fn test_and_of_two_events() {
    let tree = two_events(Gate::And);
    let report = Analysis::new(&tree).run().unwrap();
    assert_eq!(codes(&report.minimal_cut_sets), vec![vec![1, 2]]);
    assert!(approx(report.top_event_probability, 0.02));
}

#[test]
fn test_superset_is_reduced() {
    let minimal = minimal_cut_sets(&[cs(&[1, 2]), cs(&[1])]);
    assert_eq!(codes(&minimal), vec![vec![1]]);
}

#[test]
fn test_basic_root() {
    let tree = FaultTree::build([NodeSpec::basic(7, 0.4)]).unwrap();
    let raw = generate_cut_sets(&tree, &AnalysisConfig::default()).unwrap();
    assert!(raw.is_empty());
    assert!(minimal_cut_sets(&raw).is_empty());
    assert_eq!(top_event_probability(&raw, &tree), Ok(0.0));
}

#[test]
fn test_malformed_tree() {
    let err = FaultTree::build([NodeSpec::gate(0, Gate::Or, [1, 2]), NodeSpec::basic(1, 0.1)]).unwrap_err();
    assert_eq!(
        err,
        FtaError::MalformedTree(MalformedReason::DanglingChild {
            parent: Code::new(0),
            child: Code::new(2),
        })
    );
}

#[test]
fn test_plant_cut_sets() {
    let tree = plant(PLANT_P);
    let raw = generate_cut_sets(&tree, &AnalysisConfig::default()).unwrap();
    let minimal = minimal_cut_sets(&raw);
    assert_eq!(codes(&minimal), vec![vec![3, 4], vec![5], vec![7, 8]]);

    // Every event of every cut set is basic, and no set contains another.
    for (i, a) in minimal.iter().enumerate() {
        assert!(a.iter().all(|code| tree.is_basic(code)));
        for (j, b) in minimal.iter().enumerate() {
            if i != j {
                assert!(!a.is_subset(b));
            }
        }
    }

    // Reduction is idempotent.
    assert_eq!(minimal_cut_sets(&minimal), minimal);
}

#[test]
fn test_plant_probability() {
    let tree = plant(PLANT_P);
    let report = Analysis::new(&tree).run().unwrap();
    let [p3, p4, p5, p7, p8] = PLANT_P;
    let expected = 1.0 - (1.0 - p3 * p4) * (1.0 - p5) * (1.0 - p7 * p8);
    assert!(approx(report.top_event_probability, expected));
    assert!(report.top_event_probability >= 0.0 && report.top_event_probability <= 1.0);
}

#[test]
fn test_probability_is_monotone() {
    let base = Analysis::new(&plant(PLANT_P)).run().unwrap().top_event_probability;
    for k in 0..PLANT_P.len() {
        let mut p = PLANT_P;
        p[k] = (p[k] * 2.0).min(1.0);
        let raised = Analysis::new(&plant(p)).run().unwrap().top_event_probability;
        assert!(raised >= base, "raising event #{} lowered P(top)", k);
    }
}

#[test]
fn test_plant_structural_importance() {
    let tree = plant(PLANT_P);
    let report = Analysis::new(&tree).run().unwrap();
    let structural = report.structural.unwrap();
    assert_eq!(structural.codes().collect::<Vec<_>>(), [3, 4, 5, 7, 8].map(Code::new));
    // The single-point event is critical in 9 of 16 states of the others.
    assert!(approx(structural.get(Code::new(5)).unwrap(), 9.0 / 16.0));
    for code in [3, 4, 7, 8] {
        assert!(approx(structural.get(Code::new(code)).unwrap(), 3.0 / 16.0));
    }
}

#[test]
fn test_pure_and_structural_importance() {
    let n = 5u32;
    let all: Vec<u32> = (1..=n).collect();
    let importance = structural_importance(&[cs(&all)], &AnalysisConfig::default()).unwrap();
    let expected = 1.0 / 2f64.powi(n as i32 - 1);
    assert!(importance.scores().all(|s| approx(s, expected)));
}

#[test]
fn test_structural_capacity() {
    let minimal = [cs(&[3, 4]), cs(&[5]), cs(&[7, 8])];
    let config = AnalysisConfig::default().with_max_structural_events(4);
    let err = structural_importance(&minimal, &config).unwrap_err();
    assert_eq!(err, FtaError::CapacityExceeded { events: 5, limit: 4 });
}

#[test]
fn test_wide_tree_skips_only_structural_importance() {
    let leaves = 21u32;
    let mut specs = vec![NodeSpec::gate(0, Gate::Or, 1..=leaves)];
    specs.extend((1..=leaves).map(|c| NodeSpec::basic(c, 0.01)));
    let tree = FaultTree::build(specs).unwrap();

    let report = Analysis::new(&tree).run().unwrap();
    assert!(report.structural.is_none());
    assert_eq!(report.minimal_cut_sets.len(), 21);
    assert!(approx(report.top_event_probability, 1.0 - 0.99f64.powi(21)));
    assert_eq!(report.critical.len(), 21);
}

#[test]
fn test_plant_probabilistic_importance() {
    let tree = plant(PLANT_P);
    let model = plant_model(100.0);
    let report = Analysis::new(&tree).with_model(model.clone()).run().unwrap();
    let probabilistic = report.probabilistic.unwrap();
    assert!(probabilistic.codes().eq(report.critical.codes()));

    let q = |code: u32| model.cdf(Code::new(code)).unwrap();
    // dF/dq5 = (1 - q3 q4)(1 - q7 q8)
    let expected = (1.0 - q(3) * q(4)) * (1.0 - q(7) * q(8));
    assert!(approx(probabilistic.get(Code::new(5)).unwrap(), expected));
    // dF/dq3 = q4 (1 - q5)(1 - q7 q8)
    let expected = q(4) * (1.0 - q(5)) * (1.0 - q(7) * q(8));
    assert!(approx(probabilistic.get(Code::new(3)).unwrap(), expected));
}

#[test]
fn test_probabilistic_importance_at_time_zero() {
    let minimal = [cs(&[3, 4]), cs(&[7, 8])];
    let importance = probabilistic_importance(&minimal, &plant_model(0.0)).unwrap();
    assert!(importance.scores().all(|s| s == 0.0));
}

#[test]
fn test_plant_critical_importance() {
    let tree = plant(PLANT_P);
    let report = Analysis::new(&tree).run().unwrap();
    let [p3, p4, p5, p7, p8] = PLANT_P;
    let f_s = report.top_event_probability;

    // Excising 5 drops its cut set entirely.
    let f_i = 1.0 - (1.0 - p3 * p4) * (1.0 - p7 * p8);
    let expected = (f_i / f_s) * ((f_i - f_s) / f_s);
    assert!((report.critical.get(Code::new(5)).unwrap() - expected).abs() < 1e-9);

    // Excising 3 leaves {4}.
    let f_i = 1.0 - (1.0 - p4) * (1.0 - p5) * (1.0 - p7 * p8);
    let expected = (f_i / f_s) * ((f_i - f_s) / f_s);
    assert!((report.critical.get(Code::new(3)).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_critical_importance_from_map() {
    let p = HashMap::from([(Code::new(1), 0.0), (Code::new(2), 0.0)]);
    let importance = critical_importance(&[cs(&[1]), cs(&[2])], &p).unwrap();
    assert_eq!(importance.scores().collect::<Vec<_>>(), [0.0, 0.0]);
}

#[test]
fn test_critical_importance_at_mission_time() {
    let model = plant_model(100.0);
    let minimal = [cs(&[3, 4]), cs(&[5]), cs(&[7, 8])];
    let importance = critical_importance(&minimal, &model).unwrap();

    let q = |code: u32| model.cdf(Code::new(code)).unwrap();
    let f_s = 1.0 - (1.0 - q(3) * q(4)) * (1.0 - q(5)) * (1.0 - q(7) * q(8));
    // Excising 7 leaves {8}.
    let f_i = 1.0 - (1.0 - q(3) * q(4)) * (1.0 - q(5)) * (1.0 - q(8));
    let expected = (f_i / f_s) * ((f_i - f_s) / f_s);
    assert!((importance.get(Code::new(7)).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_report_display() {
    let tree = plant(PLANT_P);
    let report = Analysis::new(&tree).with_model(plant_model(100.0)).run().unwrap();
    let text = report.to_string();
    assert!(text.starts_with("Minimal cut sets: 3 (from 3 raw)"));
    assert!(text.contains("{3, 4}"));
    assert!(text.contains("Top event probability"));
    assert_eq!(report.single_points().count(), 1);
}
