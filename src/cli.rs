/*!
 * Command-Line Entry Point
 * Shared by the `rculocks` and `rwlocks` binaries
 */

use crate::core::config::{RunConfig, RunMode};
use crate::core::sync::{RcuLock, RwCell};
use crate::core::types::DisciplineKind;
use crate::harness::{banner, benchmark, Ledger, OutputFormat};
use crate::monitoring::init_tracing;
use clap::Parser;
use miette::IntoDiagnostic;

#[derive(Parser, Debug)]
#[command(version, about = "Measure lock/unlock throughput of a concurrency-control discipline")]
pub struct Cli {
    /// Print only the write and read averages, space separated
    #[arg(long, conflicts_with = "json")]
    pub terse: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Total number of threads; LOCK_WRITERS of them write (default: half)
    #[arg(allow_negative_numbers = true)]
    pub threadcount: i64,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.terse {
            OutputFormat::Terse
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Verbose
        }
    }
}

/// Run mode used when no environment override picks one
pub const fn default_mode(kind: DisciplineKind) -> RunMode {
    match kind {
        DisciplineKind::Rcu => RunMode::timed_default(),
        DisciplineKind::RwLock => RunMode::fixed_default(),
    }
}

/// Parse arguments, run the benchmark and print the report
pub fn run(kind: DisciplineKind) -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RunConfig::from_env(cli.threadcount, default_mode(kind))?;
    let format = cli.format();

    if format == OutputFormat::Verbose {
        println!("{}", banner(kind.name(), &config));
    }

    let report = match kind {
        DisciplineKind::Rcu => benchmark::<RcuLock<Ledger>>(&config)?,
        DisciplineKind::RwLock => benchmark::<RwCell<Ledger>>(&config)?,
    };

    println!("{}", report.render(format).into_diagnostic()?);
    Ok(())
}
