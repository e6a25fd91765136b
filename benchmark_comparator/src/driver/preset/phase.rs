//!
//! A build phase measured with `/usr/bin/time -v`.
//!

///
/// A build phase measured with `/usr/bin/time -v`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// A build from scratch.
    Clean,
    /// A no-op incremental rebuild.
    Incremental,
    /// An incremental rebuild after touching a widely included header.
    IncrementalAfterTouch,
}

impl Phase {
    /// All phases in report order.
    pub const ALL: [Self; 3] = [Self::Clean, Self::Incremental, Self::IncrementalAfterTouch];

    ///
    /// The time log file name within a preset directory.
    ///
    pub fn file_name(&self) -> String {
        format!("build_{self}.time")
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Incremental => write!(f, "incr"),
            Self::IncrementalAfterTouch => write!(f, "incr_after_touch"),
        }
    }
}
