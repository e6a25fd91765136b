//!
//! The in-memory result store.
//!


pub mod variants;

use std::collections::BTreeMap;

use crate::issue::Issue;
use crate::model::group_key::GroupKey;
use crate::model::record::Record;

use self::variants::Variants;

///
/// The records grouped by comparison key.
///
pub type Grouped = BTreeMap<GroupKey, Variants>;

///
/// The append-only collection of all records of one invocation.
///
/// The store is owned by the caller driving the pipeline and lives as long
/// as one invocation. There is no update or delete operation.
///
#[derive(Debug, Default, Clone)]
pub struct Store {
    /// The records in insertion order.
    records: Vec<Record>,
}

impl Store {
    ///
    /// Appends a record.
    ///
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    ///
    /// Every record in insertion order.
    ///
    pub fn all(&self) -> &[Record] {
        self.records.as_slice()
    }

    ///
    /// The number of records.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Whether no record has been appended.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    ///
    /// Groups the records by `(subject, context)`, then by variant.
    ///
    /// A variant reported twice within a group indicates a misconfigured run: the later
    /// record wins and an issue is returned for each overwrite.
    ///
    pub fn by_group_key(&self) -> (Grouped, Vec<Issue>) {
        let mut grouped = Grouped::new();
        let mut issues = Vec::new();
        for record in self.records.iter() {
            let key = record.key();
            let group = key.group_key();
            if grouped
                .entry(group.clone())
                .or_default()
                .insert(record.to_owned())
                .is_some()
            {
                issues.push(Issue::DuplicateVariant {
                    group,
                    variant: key.variant,
                });
            }
        }
        (grouped, issues)
    }
}

impl Extend<Record> for Store {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}
