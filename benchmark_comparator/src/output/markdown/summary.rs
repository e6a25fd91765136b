//!
//! The speedup summary of a benchmark run.
//!

use std::fmt::Write;

use crate::speedup::comparison::Comparison;

use super::cell;
use super::optional;

///
/// The speedup summary of a benchmark run.
///
/// Contains the speedup table, one row per group and variant, and the average speedups of
/// every non-baseline variant. An empty comparison still yields a well-formed report.
///
#[derive(Debug, Default)]
pub struct Summary {
    /// The Markdown string.
    pub content: String,
}

impl Summary {
    ///
    /// Renders the summary of `comparison`, ordering the variants by `order` first.
    ///
    pub fn new(run_id: &str, comparison: &Comparison, order: &[&str]) -> Self {
        let baseline = comparison.baseline.as_str();
        let mut content = String::with_capacity(4096);

        writeln!(content, "# Benchmark Results Summary - {run_id}").expect("Always valid");
        writeln!(content).expect("Always valid");
        writeln!(content, "## Speedup Analysis (Relative to {baseline})").expect("Always valid");
        writeln!(content).expect("Always valid");

        if comparison.is_empty() {
            writeln!(
                content,
                "_No comparable data found: no group contains the `{baseline}` baseline._"
            )
            .expect("Always valid");
        } else {
            writeln!(
                content,
                "| Enum | Workload | Policy | Mean Speedup | P90 Speedup | Mean (ns) | P90 (ns) |"
            )
            .expect("Always valid");
            writeln!(
                content,
                "|------|----------|--------|--------------|-------------|-----------|----------|"
            )
            .expect("Always valid");
            for (group, entry) in comparison.rows(order) {
                writeln!(
                    content,
                    "| {} | {} | {} | {} | {} | {:.2} | {} |",
                    cell(group.subject.as_str()),
                    cell(group.context.as_str()),
                    cell(entry.variant()),
                    entry.mean,
                    optional(entry.p90),
                    entry.record.mean,
                    optional(entry.record.p90.map(|p90| format!("{p90:.2}"))),
                )
                .expect("Always valid");
            }
        }

        if !comparison.skipped.is_empty() {
            writeln!(content).expect("Always valid");
            writeln!(content, "### Excluded Groups").expect("Always valid");
            writeln!(content).expect("Always valid");
            for group in comparison.skipped.iter() {
                writeln!(content, "- {} (no {baseline} result)", cell(group.to_string().as_str()))
                    .expect("Always valid");
            }
        }

        writeln!(content).expect("Always valid");
        writeln!(content, "## Performance Summary").expect("Always valid");
        writeln!(content).expect("Always valid");

        let aggregates = comparison.aggregates(order);
        if aggregates.is_empty() {
            writeln!(content, "_No variants to compare against {baseline}._").expect("Always valid");
        } else {
            writeln!(content, "**Average Speedups (vs {baseline}):**").expect("Always valid");
            writeln!(content).expect("Always valid");
            for aggregate in aggregates.into_iter() {
                write!(
                    content,
                    "- {}: {} (mean), {} (p90)",
                    aggregate.variant,
                    optional(aggregate.mean.map(|mean| format!("{mean:.2}x"))),
                    optional(aggregate.p90.map(|p90| format!("{p90:.2}x"))),
                )
                .expect("Always valid");
                if aggregate.unmeasurable > 0 {
                    write!(
                        content,
                        ", {} of {} groups unmeasurable",
                        aggregate.unmeasurable, aggregate.groups
                    )
                    .expect("Always valid");
                }
                writeln!(content).expect("Always valid");
            }
        }

        Self { content }
    }
}
