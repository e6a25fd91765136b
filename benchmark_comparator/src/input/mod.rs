//!
//! Benchmark input parsers.
//!

pub mod csv_block;
pub mod google_benchmark;
pub mod time_log;

use crate::issue::Issue;
use crate::model::record::Record;

///
/// The outcome of parsing one artifact output or log.
///
/// Successfully parsed records and the issues met on the way are kept side by side.
///
#[derive(Debug, Default)]
pub struct Parsed {
    /// The run identifier, e.g. the compiler identity, if reported.
    pub run_id: Option<String>,
    /// The parsed records.
    pub records: Vec<Record>,
    /// The dropped rows and other recoverable problems.
    pub issues: Vec<Issue>,
}

impl Parsed {
    ///
    /// Collects per-item parsing results, splitting successes from issues.
    ///
    pub fn collect<I>(run_id: Option<String>, results: I) -> Self
    where
        I: IntoIterator<Item = Result<Record, Issue>>,
    {
        let mut parsed = Self {
            run_id,
            ..Self::default()
        };
        for result in results.into_iter() {
            match result {
                Ok(record) => parsed.records.push(record),
                Err(issue) => parsed.issues.push(issue),
            }
        }
        parsed
    }
}
