//!
//! The speedup of one variant within a comparison group.
//!

use crate::model::record::Record;
use crate::speedup::Speedup;

///
/// The speedup of one variant within a comparison group.
///
/// Derived from its group, never persisted independently.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The measured record of the variant.
    pub record: Record,
    /// The mean speedup, or the speedup of the only statistic.
    pub mean: Speedup,
    /// The p90 speedup, if both records carry a p90 value.
    pub p90: Option<Speedup>,
}

impl Entry {
    ///
    /// Compares a record against the baseline record of its group.
    ///
    pub fn new(baseline: &Record, record: &Record) -> Self {
        let mean = Speedup::new(baseline.mean, record.mean);
        let p90 = match (baseline.p90, record.p90) {
            (Some(baseline), Some(value)) => Some(Speedup::new(baseline, value)),
            _ => None,
        };
        Self {
            record: record.to_owned(),
            mean,
            p90,
        }
    }

    ///
    /// The trivial entry of the baseline record itself, exactly `1.0` for every statistic.
    ///
    /// A non-positive baseline metric still makes the other variants of its group unmeasurable.
    ///
    pub fn baseline(record: &Record) -> Self {
        Self {
            record: record.to_owned(),
            mean: Speedup::IDENTITY,
            p90: record.p90.map(|_| Speedup::IDENTITY),
        }
    }

    ///
    /// The compared variant.
    ///
    pub fn variant(&self) -> &str {
        self.record.variant.as_str()
    }
}
