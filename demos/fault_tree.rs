//! Full analysis of a small five-component fault tree.
//!
//! ```text
//! TOP (0) = OR
//! ├── G1 (1) = AND(pump A (3), pump B (4))
//! └── G2 (2) = OR
//!     ├── valve (5)
//!     └── G6 (6) = AND(sensor (7), controller (8))
//! ```
//!
//! Run with:
//! ```bash
//! cargo run --example fault_tree -- --time 100 --rates 0.004,0.002,0.003,0.001,0.001
//! ```

use clap::Parser;
use color_eyre::eyre::bail;
use log::info;

use fta_rs::analysis::Analysis;
use fta_rs::config::AnalysisConfig;
use fta_rs::gate::Gate;
use fta_rs::importance::ExponentialModel;
use fta_rs::tree::{FaultTree, NodeSpec};
use fta_rs::types::Code;

#[derive(Debug, Parser)]
#[command(author, version, about = "Fault tree analysis demo")]
struct Cli {
    /// Mission time for the exponential failure model
    #[arg(long, default_value = "100")]
    time: f64,

    /// Failure rates of the basic events, in tree order
    #[arg(long, value_delimiter = ',', default_value = "0.004,0.002,0.003,0.001,0.001")]
    rates: Vec<f64>,

    /// Gate of the top event (`+`/`or` or `*`/`and`)
    #[arg(long, default_value = "+")]
    top: Gate,

    /// Upper bound on the number of events for structural importance
    #[arg(long, default_value = "20")]
    max_structural_events: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let tree = FaultTree::build([
        NodeSpec::gate(0, cli.top, [1, 2]),
        NodeSpec::gate(1, Gate::And, [3, 4]),
        NodeSpec::gate(2, Gate::Or, [5, 6]),
        NodeSpec::basic(3, 0.02),
        NodeSpec::basic(4, 0.03),
        NodeSpec::basic(5, 0.001),
        NodeSpec::gate(6, Gate::And, [7, 8]),
        NodeSpec::basic(7, 0.05),
        NodeSpec::basic(8, 0.04),
    ])?;
    println!("tree = {}", tree);
    info!("{} nodes, depth {}", tree.len(), tree.depth());

    let events = tree.basic_events();
    if cli.rates.len() != events.len() {
        bail!("expected {} failure rates, got {}", events.len(), cli.rates.len());
    }
    let rates: Vec<(Code, f64)> = events.iter().copied().zip(cli.rates.iter().copied()).collect();
    let model = ExponentialModel::new(rates, cli.time)?;
    info!("exponential failure model at t = {}", model.mission_time());

    let config = AnalysisConfig::default().with_max_structural_events(cli.max_structural_events);

    let time_total = std::time::Instant::now();
    let report = Analysis::new(&tree).with_config(config).with_model(model).run()?;
    info!("analysis took {:?}", time_total.elapsed());

    println!("{}", report);

    for cs in report.single_points() {
        println!("single point of failure: {}", cs);
    }

    if let Some(probabilistic) = &report.probabilistic {
        println!("Ranking by probabilistic importance:");
        for (rank, (code, score)) in probabilistic.ranked().into_iter().enumerate() {
            println!("  {}. event {} ({:.6e})", rank + 1, code, score);
        }
    }

    Ok(())
}
