//!
//! The benchmark comparator library.
//!

pub mod aggregate;
pub mod diagnostics;
pub mod driver;
pub mod input;
pub mod issue;
pub mod model;
pub mod output;
pub mod speedup;
pub mod store;

pub use crate::aggregate::sample_set::SampleSet;
pub use crate::diagnostics::Diagnostics;
pub use crate::driver::artifact::Artifact;
pub use crate::driver::config::Config as DriverConfig;
pub use crate::driver::error::Error as DriverError;
pub use crate::driver::executor::Executor;
pub use crate::driver::preset::phase::Phase as BuildPhase;
pub use crate::driver::preset::Preset;
pub use crate::driver::Runner;
pub use crate::input::google_benchmark::Batch as GoogleBenchmarkBatch;
pub use crate::input::time_log::TimeLog;
pub use crate::input::Parsed;
pub use crate::issue::artifact_failure::ArtifactFailure;
pub use crate::issue::Issue;
pub use crate::model::group_key::GroupKey;
pub use crate::model::record::Record;
pub use crate::model::record_key::RecordKey;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::file::File;
pub use crate::output::markdown::environment::Environment;
pub use crate::output::markdown::optimization::Optimization as OptimizationReport;
pub use crate::output::markdown::summary::Summary as SummaryReport;
pub use crate::output::terminal::write_digest;
pub use crate::output::Output;
pub use crate::speedup::comparison::Comparison;
pub use crate::speedup::entry::Entry as SpeedupEntry;
pub use crate::speedup::Speedup;
pub use crate::store::Store;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on any fatal error.
pub const EXIT_CODE_FAILURE: i32 = 1;
