//!
//! The console digest of a comparison.
//!

use colored::Colorize;

use crate::speedup::comparison::Comparison;
use crate::speedup::Speedup;

///
/// Writes the best and worst measurable speedups of every non-baseline variant.
///
pub fn write_digest<W>(
    w: &mut W,
    comparison: &Comparison,
    order: &[&str],
    count: usize,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    for variant in comparison.variants(order).into_iter() {
        if variant == comparison.baseline {
            continue;
        }

        let mut speedups: Vec<(f64, String)> = comparison
            .entries(variant)
            .filter_map(|(group, entry)| {
                entry.mean.ratio().map(|ratio| (ratio, group.to_string()))
            })
            .collect();
        speedups.sort_by(|a, b| a.0.total_cmp(&b.0));

        writeln!(
            w,
            "Variant '{variant}' worst {} out of {}:",
            count.min(speedups.len()),
            speedups.len()
        )?;
        for (value, group) in speedups.iter().take(count) {
            writeln!(w, "{}: {group}", format_speedup(*value))?;
        }
        writeln!(w)?;
        writeln!(
            w,
            "Variant '{variant}' best {} out of {}:",
            count.min(speedups.len()),
            speedups.len()
        )?;
        for (value, group) in speedups.iter().rev().take(count) {
            writeln!(w, "{}: {group}", format_speedup(*value))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

///
/// Formats and colorizes a speedup: green if faster, red if slower.
///
fn format_speedup(value: f64) -> colored::ColoredString {
    let text = format!("{:>9}", format!("{:.3}", Speedup::Ratio(value)));
    if value > 1.0 {
        text.green()
    } else if value == 1.0 {
        text.white()
    } else {
        text.bright_red()
    }
}
