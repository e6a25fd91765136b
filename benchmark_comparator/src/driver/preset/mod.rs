//!
//! The pre-captured logs of one build preset.
//!
//! ```text
//! <root>/raw/<date>/<preset>/
//!     build_clean.time
//!     build_incr.time
//!     build_incr_after_touch.time
//!     bench/*.json
//!     build/...
//! ```
//!

pub mod artifact_sizes;
pub mod phase;

use std::path::Path;
use std::path::PathBuf;

use crate::aggregate::sample_set::SampleSet;
use crate::diagnostics::Diagnostics;
use crate::input::google_benchmark::Batch;
use crate::input::time_log::TimeLog;
use crate::issue::Issue;
use crate::model::record::Record;

use self::artifact_sizes::ArtifactSizes;
use self::phase::Phase;

///
/// The pre-captured logs of one build preset.
///
#[derive(Debug, Clone)]
pub struct Preset {
    /// The preset name, e.g. `baseline`.
    pub name: String,
    /// The preset log directory.
    pub directory: PathBuf,
    /// The measured build phases, in phase order.
    pub build: Vec<(Phase, TimeLog)>,
    /// The runtime benchmark samples.
    pub samples: SampleSet,
    /// The build artifact sizes, if the build tree was captured.
    pub artifacts: Option<ArtifactSizes>,
}

impl Preset {
    /// The benchmark JSON subdirectory.
    pub const BENCH_DIRECTORY: &'static str = "bench";

    /// The captured build tree subdirectory.
    pub const BUILD_DIRECTORY: &'static str = "build";

    ///
    /// Loads the preset logs from `<raw_root>/<name>`.
    ///
    /// Missing directories, unreadable logs, and malformed documents are reported as issues.
    ///
    pub fn load(raw_root: &Path, name: &str, diagnostics: &mut Diagnostics) -> anyhow::Result<Self> {
        let directory = raw_root.join(name);
        let mut preset = Self {
            name: name.to_owned(),
            directory: directory.clone(),
            build: Vec::with_capacity(Phase::ALL.len()),
            samples: SampleSet::default(),
            artifacts: None,
        };
        if !directory.is_dir() {
            diagnostics.push(Issue::MissingPreset {
                preset: name.to_owned(),
                path: directory,
            });
            return Ok(preset);
        }

        for phase in Phase::ALL.into_iter() {
            let path = directory.join(phase.file_name());
            if !path.is_file() {
                continue;
            }
            match TimeLog::try_from_path(path.as_path()) {
                Ok(log) => preset.build.push((phase, log)),
                Err(error) => diagnostics.push(Issue::MalformedDocument {
                    path,
                    reason: error.to_string(),
                }),
            }
        }

        let bench_directory = directory.join(Self::BENCH_DIRECTORY);
        for path in Batch::discover(bench_directory.as_path())?.into_iter() {
            match Batch::try_from(path.as_path()) {
                Ok(batch) => {
                    let (samples, issues) = batch.samples(path.as_path());
                    preset.samples.extend(samples);
                    diagnostics.extend(issues);
                }
                Err(issue) => diagnostics.push(issue),
            }
        }

        preset.artifacts = ArtifactSizes::collect(directory.join(Self::BUILD_DIRECTORY).as_path())?;
        Ok(preset)
    }

    ///
    /// Whether any build figure or runtime sample was found.
    ///
    pub fn is_usable(&self) -> bool {
        !self.samples.is_empty() || self.build.iter().any(|(_phase, log)| !log.is_empty())
    }

    ///
    /// The runtime benchmark medians as single-statistic records of this preset.
    ///
    pub fn records(&self) -> Vec<Record> {
        self.samples.clone().into_records(self.name.as_str())
    }

    ///
    /// The preset name with the first letter capitalized, e.g. `Baseline`.
    ///
    pub fn title(&self) -> String {
        let mut characters = self.name.chars();
        match characters.next() {
            Some(first) => first.to_uppercase().chain(characters).collect(),
            None => String::new(),
        }
    }
}
