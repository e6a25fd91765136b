//!
//! The fatal driver errors.
//!

use std::path::PathBuf;

///
/// The fatal driver errors.
///
/// Everything less severe is recovered locally and reported as an issue.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No benchmark executable was found.
    #[error("No benchmark executables found in {directory:?}")]
    NoArtifacts {
        /// The searched directory.
        directory: PathBuf,
    },
    /// Nothing produced a single usable record.
    #[error("No usable benchmark data produced by {sources} source(s)")]
    NoUsableData {
        /// The number of processed executables or presets.
        sources: usize,
    },
}
