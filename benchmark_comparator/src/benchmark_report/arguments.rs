//!
//! The optimization report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The optimization report arguments.
///
#[derive(Debug, Parser)]
#[command(name = "benchmark-report", about, long_about = None)]
pub struct Arguments {
    /// The performance documentation root, containing `raw/<date>/<preset>/`.
    #[arg(long, default_value = "docs/perf")]
    pub root: PathBuf,

    /// The capture date in `YYYYMMDD` format. Defaults to today (UTC).
    #[arg(long)]
    pub date: Option<String>,

    /// The reference preset.
    #[arg(long, default_value = "baseline")]
    pub baseline: String,

    /// The evaluated preset.
    #[arg(long, default_value = "optimized")]
    pub candidate: String,

    /// Suppresses the warnings and progress output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    /// The capture date format.
    pub const DATE_FORMAT: &'static str = "%Y%m%d";

    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if let Some(date) = arguments.date.as_deref() {
            if date.len() != 8 || chrono::NaiveDate::parse_from_str(date, Self::DATE_FORMAT).is_err() {
                anyhow::bail!("The `--date` value `{date}` is not a valid `YYYYMMDD` date.");
            }
        }
        if arguments.baseline == arguments.candidate {
            anyhow::bail!(
                "The `--baseline` and `--candidate` presets must differ, both are `{}`.",
                arguments.baseline
            );
        }
        Ok(arguments)
    }
}
