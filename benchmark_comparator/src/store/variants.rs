//!
//! The records of one comparison group.
//!

use crate::model::record::Record;

///
/// The records of one comparison group, unique per variant, in first-insertion order.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Variants {
    /// The records, one per variant.
    records: Vec<Record>,
}

impl Variants {
    ///
    /// Inserts a record, replacing the record of the same variant in place.
    ///
    /// Returns the replaced record, if any.
    ///
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.variant == record.variant)
        {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    ///
    /// The record of a variant.
    ///
    pub fn get(&self, variant: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.variant == variant)
    }

    ///
    /// Whether the variant is present.
    ///
    pub fn contains(&self, variant: &str) -> bool {
        self.get(variant).is_some()
    }

    ///
    /// The records in first-insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    ///
    /// The number of variants.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Whether the group is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
