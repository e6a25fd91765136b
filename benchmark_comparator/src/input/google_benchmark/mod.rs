//!
//! The JSON sample batches written by Google Benchmark with `--benchmark_out`.
//!

#[cfg(test)]
mod tests;

pub mod sample;

use std::path::Path;
use std::path::PathBuf;

use crate::issue::Issue;

use self::sample::Sample;

///
/// A JSON sample batch.
///
/// Only the `benchmarks` array is required. Its entries are validated one by one,
/// so a single malformed entry does not invalidate the whole document.
///
#[derive(Debug, serde::Deserialize)]
pub struct Batch {
    /// The benchmark entries.
    pub benchmarks: Vec<serde_json::Value>,
}

impl Batch {
    ///
    /// Extracts the valid samples, reporting every skipped entry.
    ///
    pub fn samples(self, path: &Path) -> (Vec<Sample>, Vec<Issue>) {
        let mut samples = Vec::with_capacity(self.benchmarks.len());
        let mut issues = Vec::new();
        for (index, entry) in self.benchmarks.into_iter().enumerate() {
            match Sample::try_from(entry) {
                Ok(sample) => samples.push(sample),
                Err(reason) => issues.push(Issue::MalformedSample {
                    path: path.to_owned(),
                    index,
                    reason,
                }),
            }
        }
        (samples, issues)
    }

    ///
    /// Lists the JSON documents directly inside a directory, sorted by path.
    ///
    pub fn discover(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/*.json",
            glob::Pattern::escape(directory.to_string_lossy().as_ref())
        );
        let mut paths: Vec<PathBuf> = glob::glob(pattern.as_str())?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl TryFrom<&Path> for Batch {
    type Error = Issue;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let malformed = |reason: String| Issue::MalformedDocument {
            path: path.to_owned(),
            reason,
        };
        let text = std::fs::read_to_string(path)
            .map_err(|error| malformed(format!("reading: {error}")))?;
        serde_json::from_str(text.as_str()).map_err(|error| malformed(format!("parsing: {error}")))
    }
}
