//! Runs one of the `gridquad` sample integrals and reports the midpoint and
//! trapezoidal estimates together with their refinement error estimates.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use gridquad::catalog::{double_integrals, triple_integral};
use gridquad::{
    midpoint_integrate, precision_from_signed, trapezoidal, trapezoidal_integrate, Domain,
    ErrorEstimate, ErrorEstimator,
};

/// Which corners the 3D trapezoidal rule averages.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Rule3d {
    /// The six-vertex rule used by the library and the error estimator
    Six,
    /// The standard rule over all eight corners
    Eight,
}

#[derive(Parser, Debug)]
#[command(name = "gridquad")]
#[command(
    about = "Approximate sample double and triple integrals on a uniform grid",
    long_about = None
)]
struct Args {
    /// Index of the double integral in the catalog
    #[arg(short, long, default_value_t = 1)]
    integral: usize,
    /// Use the triple integral instead of a double integral
    #[arg(short, long)]
    triple: bool,
    /// Number of subdivisions per axis
    #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
    precision: i64,
    /// How many times finer the error-estimation grid is
    #[arg(short, long, default_value_t = gridquad::DEFAULT_REFINEMENT)]
    refinement: usize,
    /// Skip the error estimate
    #[arg(long)]
    no_error: bool,
    /// Corner set of the 3D trapezoidal rule
    #[arg(long, value_enum, default_value_t = Rule3d::Six)]
    rule3d: Rule3d,
    /// Print a JSON object instead of text
    #[arg(long)]
    json: bool,
    /// List the catalog and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    integrand: String,
    dim: u32,
    precision: usize,
    cells: u64,
    midpoint: f64,
    trapezoidal: f64,
    midpoint_error: Option<f64>,
    trapezoidal_error: Option<f64>,
    exact: f64,
}

impl Report {
    fn print(&self) {
        let cells = self.cells;
        let error = |e: Option<f64>| e.map_or_else(|| "n/a".to_string(), |e| e.to_string());
        println!(
            "Trapezoidal Rule Integration on {cells} grids: {} Error: {}",
            self.trapezoidal,
            error(self.trapezoidal_error)
        );
        println!(
            "Midpoint Rule Integration on {cells} grids: {} Error: {}",
            self.midpoint,
            error(self.midpoint_error)
        );
        println!("Exact: {}", self.exact);
    }
}

fn list_catalog() {
    for (i, sample) in double_integrals().iter().enumerate() {
        println!("{i}: {} = {}", sample.name, sample.exact);
    }
    let triple = triple_integral();
    println!("triple: {} = {}", triple.name, triple.exact);
}

/// A trapezoidal rule reported in place of the six-vertex one.
type Replacement<'a> = &'a dyn Fn(usize) -> gridquad::Result<f64>;

/// Runs the midpoint rule, then the reported trapezoidal rule, on `region`.
///
/// With a `replacement`, the six-vertex rule only runs when `estimator` needs
/// it as the baseline of the error estimate.
fn run<D: Domain>(
    region: &D,
    n: usize,
    estimator: Option<ErrorEstimator>,
    replacement: Option<Replacement<'_>>,
) -> Result<(f64, f64, Option<ErrorEstimate>)> {
    let midpoint = midpoint_integrate(region, n).context("midpoint rule failed")?;
    let six_vertex = || trapezoidal_integrate(region, n).context("trapezoidal rule failed");

    let (reported, baseline) = match replacement {
        Some(rule) => {
            let trapezoidal = rule(n).context("replacement trapezoidal rule failed")?;
            (trapezoidal, None)
        }
        None => {
            let trapezoidal = six_vertex()?;
            (trapezoidal, Some(trapezoidal))
        }
    };

    let errors = match estimator {
        Some(estimator) => {
            let trapezoidal = match baseline {
                Some(trapezoidal) => trapezoidal,
                None => six_vertex()?,
            };
            let errors = estimator
                .estimate(region, midpoint, trapezoidal, n)
                .context("error estimation failed")?;
            Some(errors)
        }
        None => None,
    };
    Ok((midpoint, reported, errors))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        list_catalog();
        return Ok(());
    }

    let n = precision_from_signed(args.precision).context("invalid --precision")?;
    let estimator = if args.no_error {
        None
    } else {
        Some(ErrorEstimator::new(args.refinement).context("invalid --refinement")?)
    };

    let (name, dim, exact, (midpoint, trapezoidal, errors)) = if args.triple {
        let sample = triple_integral();
        let region = &sample.region;
        let eight_corner = |n: usize| trapezoidal::integrate_eight_corner(region, n);
        let replacement: Option<Replacement<'_>> = match args.rule3d {
            Rule3d::Six => None,
            Rule3d::Eight => {
                if estimator.is_some() {
                    log::warn!("the error estimate refers to the six-vertex trapezoidal rule");
                }
                Some(&eight_corner)
            }
        };
        let results = run(region, n, estimator, replacement)?;
        (sample.name, 3, sample.exact, results)
    } else {
        let samples = double_integrals();
        let Some(sample) = samples.get(args.integral) else {
            bail!(
                "no double integral with index {}, expected 0..{}",
                args.integral,
                samples.len()
            );
        };
        let results = run(&sample.region, n, estimator, None)?;
        (sample.name, 2, sample.exact, results)
    };
    log::info!("integrated {name} on {n} subdivisions per axis");

    let report = Report {
        integrand: name.to_string(),
        dim,
        precision: n,
        cells: (n as u64).saturating_pow(dim),
        midpoint,
        trapezoidal,
        midpoint_error: errors.map(|e| e.midpoint),
        trapezoidal_error: errors.map(|e| e.trapezoidal),
        exact,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        report.print();
    }
    Ok(())
}
