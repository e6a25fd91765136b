//!
//! Repeated timing samples grouped by benchmark name.
//!

use std::collections::BTreeMap;

use crate::input::google_benchmark::sample::Sample;
use crate::model::record::Record;

///
/// Repeated timing samples grouped by benchmark name.
///
/// Samples sharing a name across documents or within one document are repeats
/// of the same benchmark, not distinct records.
///
#[derive(Debug, Default, Clone)]
pub struct SampleSet {
    /// The samples by benchmark name.
    samples: BTreeMap<String, Vec<f64>>,
}

impl SampleSet {
    ///
    /// Adds a single sample.
    ///
    pub fn push(&mut self, sample: Sample) {
        self.samples
            .entry(sample.name)
            .or_default()
            .push(sample.real_time);
    }

    ///
    /// The number of distinct benchmark names.
    ///
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    ///
    /// Whether no sample was collected.
    ///
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    ///
    /// The median of every benchmark, sorted by name.
    ///
    pub fn medians(&self) -> BTreeMap<String, f64> {
        self.samples
            .iter()
            .filter_map(|(name, values)| {
                super::median(values.as_slice()).map(|median| (name.to_owned(), median))
            })
            .collect()
    }

    ///
    /// Converts the medians into single-statistic records of the given variant.
    ///
    pub fn into_records(self, variant: &str) -> Vec<Record> {
        self.medians()
            .into_iter()
            .map(|(name, median)| Record::scalar(name, variant, median))
            .collect()
    }
}

impl Extend<Sample> for SampleSet {
    fn extend<T: IntoIterator<Item = Sample>>(&mut self, iter: T) {
        for sample in iter.into_iter() {
            self.push(sample);
        }
    }
}
