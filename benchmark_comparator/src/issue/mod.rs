//!
//! Recoverable diagnostics produced by the pipeline.
//!

pub mod artifact_failure;

use std::path::PathBuf;

use crate::model::group_key::GroupKey;

use self::artifact_failure::ArtifactFailure;

///
/// A recoverable problem with a single row, document, artifact, or group.
///
/// Issues never abort the pipeline. They are collected next to the successfully
/// parsed data and reported as warnings.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Issue {
    /// A CSV row could not be parsed and was dropped.
    #[error("Dropping CSV row `{line}`: {reason}")]
    MalformedRow {
        /// The offending row.
        line: String,
        /// The parsing failure description.
        reason: String,
    },
    /// The CSV results section is absent from an artifact output.
    #[error("No CSV results section found in the output of {origin}")]
    MissingSection {
        /// The artifact or log the output was captured from.
        origin: String,
    },
    /// A JSON sample batch could not be read or has an unexpected shape.
    #[error("Skipping JSON document {path:?}: {reason}")]
    MalformedDocument {
        /// The path to the document.
        path: PathBuf,
        /// The reading or parsing failure description.
        reason: String,
    },
    /// A single entry of a JSON sample batch lacks a name or a numeric timing.
    #[error("Skipping benchmark entry #{index} of {path:?}: {reason}")]
    MalformedSample {
        /// The path to the document.
        path: PathBuf,
        /// The entry index within the `benchmarks` array.
        index: usize,
        /// The failure description.
        reason: String,
    },
    /// An expected benchmark executable does not exist.
    #[error("Benchmark executable {path:?} not found")]
    MissingArtifact {
        /// The expected executable path.
        path: PathBuf,
    },
    /// A benchmark executable did not produce usable output.
    #[error("Benchmark executable {path:?} failed: {failure}")]
    ArtifactFailure {
        /// The executable path.
        path: PathBuf,
        /// The failure kind.
        failure: ArtifactFailure,
    },
    /// Artifacts of one invocation report different run identifiers.
    #[error("Different run identifiers detected: `{expected}` vs `{found}`")]
    ProvenanceMismatch {
        /// The identifier in effect.
        expected: String,
        /// The conflicting identifier.
        found: String,
    },
    /// A run produced no identifier at all.
    #[error("No run identifier reported, falling back to `{fallback}`")]
    MissingRunId {
        /// The identifier used instead.
        fallback: String,
    },
    /// The same variant appears twice in a comparison group.
    #[error("Variant `{variant}` of group `{group}` is reported more than once, keeping the latest")]
    DuplicateVariant {
        /// The comparison group.
        group: GroupKey,
        /// The duplicated variant.
        variant: String,
    },
    /// A comparison group has no baseline record.
    #[error("Group `{group}` has no `{baseline}` baseline and is excluded from the speedups")]
    MissingBaseline {
        /// The comparison group.
        group: GroupKey,
        /// The configured baseline variant.
        baseline: String,
    },
    /// A preset log directory does not exist.
    #[error("Preset `{preset}` directory {path:?} not found")]
    MissingPreset {
        /// The preset name.
        preset: String,
        /// The expected directory.
        path: PathBuf,
    },
}
