//!
//! The unique record key.
//!

use crate::model::group_key::GroupKey;

///
/// Identifies one record within a run.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    /// The measured subject.
    pub subject: String,
    /// The compared variant, e.g. a policy or a build preset.
    pub variant: String,
    /// The secondary grouping dimension.
    pub context: String,
}

impl RecordKey {
    ///
    /// Drops the variant, leaving the key shared by all variants of a comparison group.
    ///
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(self.subject.as_str(), self.context.as_str())
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.group_key(), self.variant)
    }
}
