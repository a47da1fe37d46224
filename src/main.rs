//! Sagtension - Overhead Conductor Sag-Tension Analysis
//!
//! Looks up a conductor in a catalog file, evaluates the design hypotheses
//! over the given spans and prints which one controls each span.
//!
//! # Usage
//!
//! ```bash
//! sagtension conductors.cat --legacy "LA 380" --zone B --span 120 --span 250 \
//!     --hypothesis 15:0.15 --hypothesis -15:0.33:ice
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use sagtension_core::{
    conductor::{ConductorCatalog, ConductorLookup, ConductorQuery},
    error::Result,
    mech::{EDS_FACTOR, EDS_FACTOR_WITH_DAMPERS, EDS_TEMPERATURE},
    report, MechAnalysis, MechAnalysisHypothesis, MechAnalysisZone, NewtonRaphson,
    SagTensionAnalyzer,
};
use tracing::{error, info};

/// Overhead conductor sag-tension analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the conductor catalog file
    #[arg(value_name = "CATALOG_FILE")]
    catalog_file: PathBuf,

    /// Conductor designation
    #[arg(short, long)]
    designation: Option<String>,

    /// Conductor legacy code
    #[arg(short, long)]
    legacy: Option<String>,

    /// Climatic zone
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = MechAnalysisZone::A)]
    zone: MechAnalysisZone,

    /// Design hypothesis as TEMP:FACTOR[:ice|:wind|:wind=PRESSURE] (repeatable)
    #[arg(long = "hypothesis", value_name = "HYPOTHESIS", allow_hyphen_values = true)]
    hypotheses: Vec<MechAnalysisHypothesis>,

    /// Span length in metres (repeatable)
    #[arg(short, long = "span", value_name = "METRES", required = true)]
    spans: Vec<f64>,

    /// Vibration dampers fitted (raises the default every-day stress hypothesis)
    #[arg(long)]
    dampers: bool,

    /// Reference temperature for comparing hypotheses, °C
    #[arg(long, default_value_t = EDS_TEMPERATURE, allow_hyphen_values = true)]
    reference_temperature: f64,

    /// Newton-Raphson convergence tolerance, daN
    #[arg(long, default_value_t = sagtension_core::solver::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Maximum Newton-Raphson iterations
    #[arg(long, default_value_t = sagtension_core::solver::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing (respects RUST_LOG env var)
    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = ConductorCatalog::from_file(&args.catalog_file)?;
    let query = ConductorQuery {
        designation: args.designation,
        legacy_code: args.legacy,
    };
    let conductor = catalog.get(&query)?;
    info!(designation = %conductor.designation, zone = %args.zone, "analysing conductor");

    let solver = NewtonRaphson::new()
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations);
    let mech = MechAnalysis::new(&conductor, args.zone).with_solver(solver);

    // Without explicit hypotheses: every-day stress and the cold hypothesis
    let hypotheses = if args.hypotheses.is_empty() {
        let eds_factor = if args.dampers {
            EDS_FACTOR_WITH_DAMPERS
        } else {
            EDS_FACTOR
        };
        vec![
            MechAnalysisHypothesis::new(EDS_TEMPERATURE, eds_factor),
            MechAnalysisHypothesis::new(-5.0, 0.25),
        ]
    } else {
        args.hypotheses
    };

    let analyzer = SagTensionAnalyzer::new(mech, hypotheses)?
        .with_reference_temperature(args.reference_temperature);
    let ruling_span = mech.ruling_span(&args.spans)?;
    let table = analyzer.tbl(&args.spans)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render_summary(&mut out, &conductor, args.zone, ruling_span)?;
    report::render_table(&mut out, &table)?;

    Ok(())
}
