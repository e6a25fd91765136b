//!
//! The numeric fields of a record as written in the source.
//!

///
/// The numeric fields of a record as written in the source.
///
/// Written back verbatim, so `100.0` or `1e3` are not normalized by re-serialization.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValues {
    /// The trimmed mean field.
    pub mean: String,
    /// The trimmed p90 field.
    pub p90: String,
}

impl RawValues {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<M, P>(mean: M, p90: P) -> Self
    where
        M: Into<String>,
        P: Into<String>,
    {
        Self {
            mean: mean.into(),
            p90: p90.into(),
        }
    }
}
