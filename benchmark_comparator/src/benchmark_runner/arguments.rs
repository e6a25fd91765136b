//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

use benchmark_comparator::DriverConfig;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(name = "benchmark-runner", about, long_about = None)]
pub struct Arguments {
    /// The directory containing the `<prefix>_<suffix>` benchmark executables.
    #[arg(long = "build-dir", default_value = DriverConfig::DEFAULT_BUILD_DIRECTORY)]
    pub build_directory: PathBuf,

    /// The directory the CSV and Markdown results are written to.
    #[arg(long = "output-dir", default_value = DriverConfig::DEFAULT_OUTPUT_DIRECTORY)]
    pub output_directory: PathBuf,

    /// The common benchmark executable name prefix.
    #[arg(long, default_value = DriverConfig::DEFAULT_EXECUTABLE_PREFIX)]
    pub executable_prefix: String,

    /// The variant the speedups are computed against.
    #[arg(long, default_value = DriverConfig::DEFAULT_BASELINE)]
    pub baseline: String,

    /// The wall-clock bound of a single executable run, in seconds.
    #[arg(long, default_value_t = DriverConfig::DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    /// The number of best and worst speedups printed per variant.
    #[arg(long, default_value_t = 10)]
    pub digest_max: usize,

    /// Suppresses the warnings and progress output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.timeout == 0 {
            anyhow::bail!("The `--timeout` value must be a positive number of seconds.");
        }
        if arguments.baseline.trim().is_empty() {
            anyhow::bail!("The `--baseline` variant must not be empty.");
        }
        if arguments.executable_prefix.trim().is_empty() {
            anyhow::bail!("The `--executable-prefix` must not be empty.");
        }
        Ok(arguments)
    }
}
