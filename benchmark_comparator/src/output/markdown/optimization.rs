//!
//! The dated optimization evaluation report.
//!

use std::fmt::Write;

use crate::driver::preset::Preset;
use crate::speedup::comparison::Comparison;

use super::cell;
use super::environment::Environment;
use super::optional;

///
/// The dated optimization evaluation report.
///
/// Compares a candidate build preset against the baseline one: build phase timings and
/// peak memory of every preset, then the runtime benchmark medians side by side.
///
#[derive(Debug, Default)]
pub struct Optimization {
    /// The Markdown string.
    pub content: String,
}

impl Optimization {
    ///
    /// Renders the report of `presets`, with `comparison` computed over their runtime medians.
    ///
    pub fn new(
        date: &str,
        environment: &Environment,
        presets: &[Preset],
        comparison: &Comparison,
        candidate: &str,
    ) -> Self {
        let mut content = String::with_capacity(4096);

        writeln!(content, "# Optimization Evaluation Report ({date})").expect("Always valid");
        writeln!(content).expect("Always valid");

        writeln!(content, "## Environment").expect("Always valid");
        writeln!(content).expect("Always valid");
        writeln!(content, "- OS: {}", environment.os).expect("Always valid");
        writeln!(content, "- Architecture: {}", environment.architecture).expect("Always valid");
        writeln!(content, "- Generator: {}", environment.generator).expect("Always valid");
        writeln!(
            content,
            "- Generated: {}",
            environment.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .expect("Always valid");
        writeln!(content).expect("Always valid");

        writeln!(content, "## Build Results").expect("Always valid");
        for preset in presets.iter() {
            writeln!(content).expect("Always valid");
            writeln!(content, "### {}", preset.title()).expect("Always valid");
            writeln!(content).expect("Always valid");
            if preset.build.is_empty() {
                writeln!(content, "- No build logs found.").expect("Always valid");
            }
            for (phase, log) in preset.build.iter() {
                writeln!(
                    content,
                    "- {phase}: wall={}, max_rss={} KB",
                    optional(log.wall_clock_seconds.map(|seconds| format!("{seconds:.2}s"))),
                    optional(log.max_rss_kb),
                )
                .expect("Always valid");
            }
            if let Some(artifacts) = preset.artifacts {
                writeln!(content, "- artifacts: {artifacts}").expect("Always valid");
            }
        }
        writeln!(content).expect("Always valid");

        writeln!(content, "## Runtime Benchmarks").expect("Always valid");
        writeln!(content).expect("Always valid");

        let baseline = comparison.baseline.as_str();
        let pairs: Vec<(&str, f64, f64, String)> = comparison
            .groups
            .iter()
            .filter_map(|(group, entries)| {
                let baseline_entry = entries.iter().find(|entry| entry.variant() == baseline)?;
                let candidate_entry = entries.iter().find(|entry| entry.variant() == candidate)?;
                Some((
                    group.subject.as_str(),
                    baseline_entry.record.mean,
                    candidate_entry.record.mean,
                    format!("{:.3}", candidate_entry.mean),
                ))
            })
            .collect();

        if pairs.is_empty() {
            writeln!(content, "_No comparable benchmark data found._").expect("Always valid");
            return Self { content };
        }

        writeln!(
            content,
            "- Geometric mean speedup ({candidate} vs {baseline}): {}",
            optional(
                comparison
                    .geometric_mean()
                    .map(|geometric_mean| format!("{geometric_mean:.3}x"))
            ),
        )
        .expect("Always valid");
        writeln!(content).expect("Always valid");
        writeln!(
            content,
            "| Benchmark | Baseline (ns) | Optimized (ns) | Speedup |"
        )
        .expect("Always valid");
        writeln!(content, "|---|---:|---:|---:|").expect("Always valid");
        for (name, baseline_time, candidate_time, speedup) in pairs.into_iter() {
            writeln!(
                content,
                "| {} | {baseline_time:.0} | {candidate_time:.0} | {speedup} |",
                cell(name),
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
