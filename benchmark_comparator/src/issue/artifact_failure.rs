//!
//! The reason a benchmark executable produced no records.
//!

use std::time::Duration;

///
/// The reason a benchmark executable produced no records.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactFailure {
    /// The process could not be started.
    Spawn(String),
    /// The process exceeded the wall-clock bound and was killed.
    Timeout(Duration),
    /// The process exited unsuccessfully.
    ExitStatus {
        /// The exit code, `None` if terminated by a signal.
        code: Option<i32>,
        /// The last line of the standard error stream, if any.
        stderr: String,
    },
    /// The process succeeded but printed nothing.
    EmptyOutput,
}

impl std::fmt::Display for ArtifactFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn(error) => write!(f, "spawning error: {error}"),
            Self::Timeout(timeout) => write!(f, "timed out after {}s", timeout.as_secs_f64()),
            Self::ExitStatus { code, stderr } => {
                match code {
                    Some(code) => write!(f, "exit code {code}")?,
                    None => write!(f, "terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Self::EmptyOutput => write!(f, "empty standard output"),
        }
    }
}
