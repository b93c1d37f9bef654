//! Routh - Routh-Hurwitz stability analyzer
//!
//! Builds the Routh array for a characteristic polynomial and reports
//! whether the system is stable.
//!
//! # Usage
//!
//! ```bash
//! routh "1, -3, 2, -5"
//! routh "1, -3, 2, -5" --root-service http://localhost:5000 --json
//! echo "1, 3, 3, 1" | routh
//! ```

use std::time::Duration;

use clap::Parser;
use routh_core::{
    error::{Result, RouthError},
    input::{parse_coefficients, read_coefficients},
    report::{render_roots, render_summary, render_table, AnalysisReport},
    roots::{
        http::{HttpRootFinder, RootServiceConfig},
        RootDelegator, RootOutcome,
    },
    routh::{DEFAULT_EPSILON, DEFAULT_PRECISION},
    telemetry, Analysis, AnalysisConfig, Analyzer, CoefficientSequence,
};

/// Routh-Hurwitz stability analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated coefficients, highest degree first (read from stdin if omitted)
    #[arg(value_name = "COEFFICIENTS", allow_hyphen_values = true)]
    coefficients: Option<String>,

    /// Stand-in value for zero pivots and zero entries
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Decimal places for array entries
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Base URL of the root-finder service, queried when the system is unstable
    #[arg(long, env = "ROUTH_ROOT_SERVICE")]
    root_service: Option<String>,

    /// Root lookup timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    root_timeout_ms: u64,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    // Parse the coefficients
    let parsed = match &args.coefficients {
        Some(raw) => parse_coefficients(raw),
        None => read_coefficients(&mut std::io::stdin()),
    };
    let Some(coefficients) = recover_input(parsed)? else {
        return Ok(());
    };

    // Analyze
    let config = AnalysisConfig::new()
        .with_epsilon(args.epsilon)
        .with_precision(args.precision);
    let analyzer = Analyzer::with_config(config)?;
    let analysis = analyzer.analyze(coefficients);

    // Locate unstable roots if a service is configured
    let roots = match &args.root_service {
        Some(url) if analysis.needs_root_delegation() => Some(
            // Delegation problems only affect the roots line, never the verdict.
            locate_roots(&analysis, url, args.root_timeout_ms).unwrap_or_else(RootOutcome::Unavailable),
        ),
        _ => None,
    };

    if args.json {
        let mut report = AnalysisReport::new(&analysis, args.precision);
        if let Some(outcome) = &roots {
            report = report.with_roots(outcome);
        }
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_table(&analysis.array, args.precision));
        println!();
        println!("{}", render_summary(&analysis));
        if let Some(outcome) = &roots {
            println!("{}", render_roots(outcome));
        }
    }

    Ok(())
}

/// Report input without numbers to the user instead of failing.
///
/// Returns `Ok(None)` after printing the message; other errors pass through.
fn recover_input(parsed: Result<CoefficientSequence>) -> Result<Option<CoefficientSequence>> {
    match parsed {
        Ok(coefficients) => Ok(Some(coefficients)),
        Err(e @ RouthError::NoValidCoefficients) => {
            eprintln!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn locate_roots(analysis: &Analysis, url: &str, timeout_ms: u64) -> Result<RootOutcome> {
    let timeout = Duration::from_millis(timeout_ms);
    let finder = HttpRootFinder::new(RootServiceConfig::new(url).with_timeout(timeout))?;
    let delegator = RootDelegator::new(finder).with_timeout(timeout)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RouthError::root_service(format!("runtime error: {}", e)))?;

    Ok(rt.block_on(delegator.locate(&analysis.coefficients)))
}
