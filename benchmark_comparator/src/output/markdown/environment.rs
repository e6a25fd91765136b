//!
//! The environment the report was generated in.
//!

use chrono::DateTime;
use chrono::Utc;

///
/// The environment the report was generated in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// The operating system.
    pub os: String,
    /// The CPU architecture.
    pub architecture: String,
    /// The generating tool and its version.
    pub generator: String,
    /// The generation time.
    pub generated: DateTime<Utc>,
}

impl Environment {
    ///
    /// Describes the current process.
    ///
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_owned(),
            architecture: std::env::consts::ARCH.to_owned(),
            generator: format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            generated: Utc::now(),
        }
    }
}
