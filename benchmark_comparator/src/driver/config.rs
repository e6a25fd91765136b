//!
//! The run driver configuration.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The run driver configuration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The directory containing the benchmark executables.
    pub build_directory: PathBuf,
    /// The directory the CSV and Markdown files are written to.
    pub output_directory: PathBuf,
    /// The common executable name prefix, followed by `_<suffix>`.
    pub executable_prefix: String,
    /// The baseline variant.
    pub baseline: String,
    /// The wall-clock bound of a single executable run.
    pub timeout: Duration,
}

impl Config {
    /// The default executable directory.
    pub const DEFAULT_BUILD_DIRECTORY: &'static str = "build/benchmarks";

    /// The default output directory.
    pub const DEFAULT_OUTPUT_DIRECTORY: &'static str = "benchmarks/results";

    /// The default executable name prefix.
    pub const DEFAULT_EXECUTABLE_PREFIX: &'static str = "enchantum_bench";

    /// The default baseline variant.
    pub const DEFAULT_BASELINE: &'static str = "NAIVE";

    /// The default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_directory: PathBuf::from(Self::DEFAULT_BUILD_DIRECTORY),
            output_directory: PathBuf::from(Self::DEFAULT_OUTPUT_DIRECTORY),
            executable_prefix: Self::DEFAULT_EXECUTABLE_PREFIX.to_owned(),
            baseline: Self::DEFAULT_BASELINE.to_owned(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
