//!
//! The speedup table of a whole run.
//!

use std::collections::BTreeMap;

use crate::issue::Issue;
use crate::model::group_key::GroupKey;
use crate::store::Grouped;

use super::aggregate::Aggregate;
use super::entry::Entry;

///
/// The speedup table of a whole run.
///
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    /// The baseline variant name.
    pub baseline: String,
    /// The entries of every group containing the baseline, in group insertion order.
    pub groups: BTreeMap<GroupKey, Vec<Entry>>,
    /// The groups excluded for lacking the baseline.
    pub skipped: Vec<GroupKey>,
}

impl Comparison {
    ///
    /// Computes the speedups of every variant against the baseline, group by group.
    ///
    /// Groups without the baseline are skipped entirely, never producing partial entries.
    ///
    pub fn calculate(grouped: &Grouped, baseline: &str) -> Self {
        let mut groups = BTreeMap::new();
        let mut skipped = Vec::new();

        for (group_key, variants) in grouped.iter() {
            let baseline_record = match variants.get(baseline) {
                Some(record) => record,
                None => {
                    skipped.push(group_key.to_owned());
                    continue;
                }
            };

            let entries = variants
                .iter()
                .map(|record| {
                    if record.variant == baseline {
                        Entry::baseline(record)
                    } else {
                        Entry::new(baseline_record, record)
                    }
                })
                .collect();
            groups.insert(group_key.to_owned(), entries);
        }

        Self {
            baseline: baseline.to_owned(),
            groups,
            skipped,
        }
    }

    ///
    /// Whether no group is comparable.
    ///
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    ///
    /// The diagnostics for the skipped groups.
    ///
    pub fn issues(&self) -> Vec<Issue> {
        self.skipped
            .iter()
            .map(|group| Issue::MissingBaseline {
                group: group.to_owned(),
                baseline: self.baseline.clone(),
            })
            .collect()
    }

    ///
    /// The distinct variants, ranked by `order` first and by first appearance after that.
    ///
    pub fn variants<'a>(&'a self, order: &[&str]) -> Vec<&'a str> {
        let mut variants: Vec<&str> = Vec::new();
        for entry in self.groups.values().flatten() {
            if !variants.contains(&entry.variant()) {
                variants.push(entry.variant());
            }
        }
        variants.sort_by_key(|variant| Self::rank(order, variant));
        variants
    }

    ///
    /// The table rows: groups sorted by key, entries by `order`, then by insertion.
    ///
    pub fn rows<'a>(&'a self, order: &[&str]) -> Vec<(&'a GroupKey, &'a Entry)> {
        let mut rows = Vec::with_capacity(self.groups.values().map(Vec::len).sum());
        for (group_key, entries) in self.groups.iter() {
            let mut entries: Vec<&Entry> = entries.iter().collect();
            entries.sort_by_key(|entry| Self::rank(order, entry.variant()));
            rows.extend(entries.into_iter().map(|entry| (group_key, entry)));
        }
        rows
    }

    ///
    /// The entries of a single variant across all groups.
    ///
    pub fn entries<'a>(&'a self, variant: &'a str) -> impl Iterator<Item = (&'a GroupKey, &'a Entry)> {
        self.groups.iter().filter_map(move |(group_key, entries)| {
            entries
                .iter()
                .find(|entry| entry.variant() == variant)
                .map(|entry| (group_key, entry))
        })
    }

    ///
    /// The average speedups of every non-baseline variant.
    ///
    pub fn aggregates(&self, order: &[&str]) -> Vec<Aggregate> {
        self.variants(order)
            .into_iter()
            .filter(|variant| *variant != self.baseline)
            .map(|variant| {
                let mut means = Vec::new();
                let mut p90s = Vec::new();
                let mut groups = 0;
                for (_, entry) in self.entries(variant) {
                    groups += 1;
                    means.extend(entry.mean.ratio());
                    p90s.extend(entry.p90.and_then(|p90| p90.ratio()));
                }
                Aggregate {
                    variant: variant.to_owned(),
                    mean: crate::aggregate::arithmetic_mean(means.as_slice()),
                    p90: crate::aggregate::arithmetic_mean(p90s.as_slice()),
                    groups,
                    unmeasurable: groups - means.len(),
                }
            })
            .collect()
    }

    ///
    /// The geometric mean of the candidate mean speedups.
    ///
    /// Only defined for a pairwise comparison, that is, exactly one variant besides the
    /// baseline.
    ///
    pub fn geometric_mean(&self) -> Option<f64> {
        let variants = self.variants(&[]);
        if variants.len() != 2 {
            return None;
        }
        let candidate = variants
            .into_iter()
            .find(|variant| *variant != self.baseline)?;
        let ratios: Vec<f64> = self
            .entries(candidate)
            .filter_map(|(_, entry)| entry.mean.ratio())
            .collect();
        crate::aggregate::geometric_mean(ratios.as_slice())
    }

    ///
    /// The position of a variant in the configured order, unlisted variants last.
    ///
    fn rank(order: &[&str], variant: &str) -> usize {
        order
            .iter()
            .position(|ordered| *ordered == variant)
            .unwrap_or(order.len())
    }
}
