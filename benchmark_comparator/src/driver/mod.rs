//!
//! The benchmark run driver.
//!


pub mod artifact;
pub mod config;
pub mod error;
pub mod executor;
pub mod preset;

use std::ops::Range;

use crate::diagnostics::Diagnostics;
use crate::input::csv_block;
use crate::issue::Issue;
use crate::output::csv::Csv;
use crate::output::file::File;
use crate::output::markdown::summary::Summary;
use crate::output::Output;
use crate::speedup::comparison::Comparison;
use crate::store::Store;

use self::artifact::Artifact;
use self::config::Config;
use self::error::Error;
use self::executor::Executor;

///
/// The records contributed by one executable.
///
#[derive(Debug, Clone)]
pub struct ArtifactRun {
    /// The executable.
    pub artifact: Artifact,
    /// The range of its records in the store.
    pub records: Range<usize>,
}

///
/// Runs the benchmark executables and accumulates their records.
///
/// Executables are run strictly one at a time.
///
#[derive(Debug)]
pub struct Runner {
    /// The configuration.
    pub config: Config,
    /// The records of all executables.
    pub store: Store,
    /// The run identifier reported first.
    pub run_id: Option<String>,
    /// The successful executable runs.
    pub runs: Vec<ArtifactRun>,
    /// The diagnostics.
    pub diagnostics: Diagnostics,
}

impl Runner {
    /// The run identifier used when no executable reported one.
    pub const UNKNOWN_RUN_ID: &'static str = "unknown";

    /// The per-executable CSV subdirectory.
    pub const RAW_CSV_DIRECTORY: &'static str = "raw_csv";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, diagnostics: Diagnostics) -> Self {
        Self {
            config,
            store: Store::default(),
            run_id: None,
            runs: Vec::new(),
            diagnostics,
        }
    }

    ///
    /// Discovers and runs every executable, parsing its output into the store.
    ///
    /// A failed executable is skipped. The run fails only if no executable was found
    /// or none produced a usable record.
    ///
    pub fn run(&mut self) -> Result<(), Error> {
        let (artifacts, issues) = Artifact::discover(
            self.config.build_directory.as_path(),
            self.config.executable_prefix.as_str(),
        );
        self.diagnostics.extend(issues);
        if artifacts.is_empty() {
            return Err(Error::NoArtifacts {
                directory: self.config.build_directory.clone(),
            });
        }

        let executor = Executor::new(self.config.timeout);
        let artifacts_count = artifacts.len();
        for artifact in artifacts.into_iter() {
            let name = artifact.name();
            self.diagnostics.status("Running", name.as_str());

            let stdout = match executor.execute(artifact.path.as_path()) {
                Ok(stdout) => stdout,
                Err(failure) => {
                    self.diagnostics.push(Issue::ArtifactFailure {
                        path: artifact.path.clone(),
                        failure,
                    });
                    continue;
                }
            };

            let parsed = csv_block::parse(stdout.as_str(), name.as_str());
            self.reconcile_run_id(parsed.run_id);
            self.diagnostics.extend(parsed.issues);

            let start = self.store.len();
            self.store.extend(parsed.records);
            if self.store.len() > start {
                self.runs.push(ArtifactRun {
                    artifact,
                    records: start..self.store.len(),
                });
            }
        }

        if self.store.is_empty() {
            return Err(Error::NoUsableData {
                sources: artifacts_count,
            });
        }
        Ok(())
    }

    ///
    /// Computes the speedups against the configured baseline.
    ///
    pub fn compare(&mut self) -> Comparison {
        let (grouped, issues) = self.store.by_group_key();
        self.diagnostics.extend(issues);
        let comparison = Comparison::calculate(&grouped, self.config.baseline.as_str());
        self.diagnostics.extend(comparison.issues());
        comparison
    }

    ///
    /// Prepares the per-executable CSV files, the combined CSV file, and the summary.
    ///
    pub fn output(&mut self, comparison: &Comparison) -> Output {
        let run_id = match self.run_id.clone() {
            Some(run_id) => run_id,
            None => {
                self.diagnostics.push(Issue::MissingRunId {
                    fallback: Self::UNKNOWN_RUN_ID.to_owned(),
                });
                Self::UNKNOWN_RUN_ID.to_owned()
            }
        };

        let mut output = Output::default();
        for ArtifactRun { artifact, records } in self.runs.iter() {
            output.push(File::new(
                format!(
                    "{}/{run_id}_{}.csv",
                    Self::RAW_CSV_DIRECTORY,
                    artifact.variant
                ),
                Csv::from(&self.store.all()[records.to_owned()]).content,
            ));
        }
        output.push(File::new(
            format!("combined_{run_id}.csv"),
            Csv::from(self.store.all()).content,
        ));
        output.push(File::new(
            format!("summary_{run_id}.md"),
            Summary::new(
                run_id.as_str(),
                comparison,
                Artifact::variant_order().as_slice(),
            )
            .content,
        ));
        output
    }

    ///
    /// Keeps the first non-empty run identifier, reporting any later different one.
    ///
    fn reconcile_run_id(&mut self, run_id: Option<String>) {
        let run_id = match run_id {
            Some(run_id) => run_id,
            None => return,
        };
        match self.run_id.clone() {
            None => self.run_id = Some(run_id),
            Some(expected) if expected != run_id => {
                self.diagnostics.push(Issue::ProvenanceMismatch {
                    expected,
                    found: run_id,
                });
            }
            Some(_) => {}
        }
    }
}
