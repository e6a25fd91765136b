//!
//! The comparison group key.
//!

///
/// Identifies one comparable measurement across variants.
///
/// An empty `context` stands for a single-workload benchmark.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    /// The measured subject, e.g. an enum type name or a benchmark name.
    pub subject: String,
    /// The secondary grouping dimension, e.g. a workload kind.
    pub context: String,
}

impl GroupKey {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<S, C>(subject: S, context: C) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            subject: subject.into(),
            context: context.into(),
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.subject)
        } else {
            write!(f, "{}::{}", self.subject, self.context)
        }
    }
}
