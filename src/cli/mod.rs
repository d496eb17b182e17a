//! modelscout CLI module
//!
//! Command-line front end for profiling a data file and printing algorithm
//! recommendations.

use clap::{Parser, Subcommand};
use colored::*;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::advisor::TimeBudgetAdvisor;
use crate::catalog::{AlgorithmCatalog, ProblemType};
use crate::config::AdvisorConfig;
use crate::pipeline::{AdvisoryReport, ModelAdvisor};
use crate::utils::DataLoader;

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString   { s.truecolor(100, 100, 100) }
fn accent(s: &str) -> ColoredString { s.truecolor(120, 170, 255) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }
fn warn(s: &str) -> ColoredString   { s.truecolor(230, 190, 90) }

fn step_run(msg: &str) {
    print!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    println!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

fn kv(key: &str, val: &str) {
    println!("  {:<18} {}", muted(key), val.white());
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "modelscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Profile a dataset and recommend ML algorithms")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and recommend algorithms
    Analyze {
        /// Input data file (CSV or TSV)
        #[arg(short, long)]
        data: PathBuf,

        /// Target column name
        #[arg(short, long)]
        target: Option<String>,

        /// Number of recommendations (overrides the config file)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog algorithms
    Algorithms {
        /// Only show one problem type (classification, regression, clustering, dimensionality_reduction)
        #[arg(short, long)]
        problem_type: Option<String>,
    },

    /// Estimate the training-time class for a dataset shape
    Estimate {
        /// Number of rows
        #[arg(short, long)]
        rows: u64,

        /// Number of columns
        #[arg(short, long)]
        cols: u64,

        /// Algorithm complexity score (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        complexity: u8,
    },

    /// Show column types and null counts of a data file
    Info {
        /// Input data file
        #[arg(short, long)]
        data: PathBuf,
    },
}

// ─── Data loading ──────────────────────────────────────────────────────────────

pub fn load_data(path: &Path) -> anyhow::Result<DataFrame> {
    Ok(DataLoader::new().load_auto(path)?)
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_analyze(
    data_path: &Path,
    target: Option<&str>,
    top_k: Option<usize>,
    config_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => AdvisorConfig::from_json_file(path)?,
        None => AdvisorConfig::default(),
    };
    if let Some(k) = top_k {
        config.top_k = k;
    }

    let advisor = ModelAdvisor::new(Arc::new(AlgorithmCatalog::standard()?), config)?;

    if json {
        let df = load_data(data_path)?;
        let report = advisor.analyze(&df, target)?;
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    section("Analyze");

    step_run("Loading data");
    let start = Instant::now();
    let df = load_data(data_path)?;
    step_done(&format!("{} rows × {} cols, {:.1}s", df.height(), df.width(), start.elapsed().as_secs_f64()));

    step_run("Profiling and ranking");
    let start = Instant::now();
    let report = advisor.analyze(&df, target)?;
    step_done(&format!("{:.2}s", start.elapsed().as_secs_f64()));

    print_report(&report);
    Ok(())
}

fn print_report(report: &AdvisoryReport) {
    let fp = &report.fingerprint;

    section("Dataset");
    kv("Rows", &fp.basic.row_count.to_string());
    kv("Columns", &fp.basic.column_count.to_string());
    kv("Memory", &format!("{:.2} MB", fp.basic.memory_estimate_mb));
    kv(
        "Feature types",
        &format!(
            "{} numerical, {} categorical, {} datetime, {} boolean",
            fp.feature_types.numerical.count,
            fp.feature_types.categorical.count,
            fp.feature_types.datetime.count,
            fp.feature_types.boolean.count
        ),
    );
    kv("Missing", &format!("{:.1}%", fp.missing.missing_ratio * 100.0));
    if !fp.outliers.is_empty() {
        let cols: Vec<_> = fp.outliers.iter().map(|(c, n)| format!("{} ({})", c, n)).collect();
        kv("Outliers", &cols.join(", "));
    }
    kv("Problem type", report.problem_type.as_str());
    if fp.is_target_imbalanced() {
        kv("Target", &format!("{}", warn("imbalanced")));
    }

    section("Recommendations");
    if report.recommendations.is_empty() {
        println!("  {}", warn("No algorithm meets the dataset's minimum requirements"));
    }
    for (i, rec) in report.recommendations.iter().enumerate() {
        println!(
            "  {} {:<36} {} {}",
            accent(&format!("{}.", i + 1)),
            rec.algorithm.white().bold(),
            muted(&format!("score {:>6.1}", rec.score)),
            dim(&format!("~{}", rec.runtime))
        );
        for reason in &rec.reasons {
            println!("     {} {}", dim("·"), muted(reason));
        }
    }

    section("Advice");
    kv("Baseline", &report.baseline);
    for tip in &report.tips {
        println!("  {} {}", ok("✓"), tip);
    }
    println!();
}

pub fn cmd_algorithms(problem_type: Option<&str>) -> anyhow::Result<()> {
    let catalog = AlgorithmCatalog::standard()?;
    let algorithms = match problem_type {
        Some(pt) => catalog.get_by_type(pt.parse::<ProblemType>()?),
        None => catalog.get_all(),
    };

    section("Algorithms");
    println!(
        "  {:<36} {:<26} {:>10} {:>8}",
        muted("Name"),
        muted("Type"),
        muted("Complexity"),
        muted("Min rows")
    );
    println!("  {}", dim(&"─".repeat(84)));
    for algo in algorithms {
        println!(
            "  {:<36} {:<26} {:>10} {:>8}",
            algo.name,
            algo.problem_type.as_str(),
            algo.complexity_score,
            algo.min_samples
        );
    }
    println!();
    Ok(())
}

pub fn cmd_estimate(rows: u64, cols: u64, complexity: u8) -> anyhow::Result<()> {
    let runtime = TimeBudgetAdvisor::new().estimate_time_budget(rows, cols, complexity);
    section("Time Budget");
    kv("Load", &TimeBudgetAdvisor::training_load(rows, cols, complexity).to_string());
    kv("Estimate", runtime.as_str());
    println!();
    Ok(())
}

pub fn cmd_info(data_path: &Path) -> anyhow::Result<()> {
    section("Data Info");

    let df = load_data(data_path)?;

    println!("  {:<12} {}", muted("File"), data_path.display());
    println!("  {:<12} {}", muted("Rows"), df.height());
    println!("  {:<12} {}", muted("Columns"), df.width());
    println!("  {:<12} {:.2} MB", muted("Memory"), df.estimated_size() as f64 / 1024.0 / 1024.0);
    println!();

    println!("  {:<20} {:<12} {:>6} {:>10}", muted("Column"), muted("Type"), muted("Nulls"), muted("Kind"));
    println!("  {}", dim(&"─".repeat(52)));

    for col in df.get_columns() {
        let kind = crate::profiler::classify_dtype(col.dtype());
        println!(
            "  {:<20} {:<12} {:>6} {:>10}",
            col.name(),
            format!("{:?}", col.dtype()).truecolor(140, 140, 140),
            col.null_count(),
            format!("{:?}", kind).to_lowercase()
        );
    }

    println!();
    Ok(())
}
