//!
//! A single measured data point.
//!

use crate::model::group_key::GroupKey;
use crate::model::raw_values::RawValues;
use crate::model::record_key::RecordKey;

///
/// A single measured data point.
///
/// Values are nanoseconds or bytes, depending on the source. Records sourced from
/// JSON sample batches carry only one statistic, which lives in `mean`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The measured subject, e.g. an enum type name or a benchmark name.
    pub subject: String,
    /// The compared variant, e.g. a policy or a build preset.
    pub variant: String,
    /// The secondary grouping dimension. Empty means a single workload.
    pub context: String,
    /// The mean value, or the only value if there is a single statistic.
    pub mean: f64,
    /// The 90th percentile value, if measured.
    pub p90: Option<f64>,
    /// The numeric fields as written in the source row, if parsed from text.
    pub raw: Option<RawValues>,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<S, V, C>(subject: S, variant: V, context: C, mean: f64, p90: Option<f64>) -> Self
    where
        S: Into<String>,
        V: Into<String>,
        C: Into<String>,
    {
        Self {
            subject: subject.into(),
            variant: variant.into(),
            context: context.into(),
            mean,
            p90,
            raw: None,
        }
    }

    ///
    /// Attaches the source text of the numeric fields.
    ///
    pub fn with_raw(mut self, raw: RawValues) -> Self {
        self.raw = Some(raw);
        self
    }

    ///
    /// Creates a record with a single statistic.
    ///
    pub fn scalar<S, V>(subject: S, variant: V, value: f64) -> Self
    where
        S: Into<String>,
        V: Into<String>,
    {
        Self::new(subject, variant, String::new(), value, None)
    }

    ///
    /// The key shared by all variants of the comparison group.
    ///
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(self.subject.as_str(), self.context.as_str())
    }

    ///
    /// The key unique to this record within a run.
    ///
    pub fn key(&self) -> RecordKey {
        RecordKey {
            subject: self.subject.clone(),
            variant: self.variant.clone(),
            context: self.context.clone(),
        }
    }
}
