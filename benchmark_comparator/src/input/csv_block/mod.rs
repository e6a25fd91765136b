//!
//! The marker-delimited CSV block printed by the benchmark executables.
//!
//! ```text
//! COMPILER_ID:<identifier>
//! ... (other lines are ignored) ...
//! === CSV RESULTS ===
//! enum,policy,workload,mean_ns,p90_ns
//! <subject>,<variant>,<context>,<mean>,<p90>
//! ```
//!

#[cfg(test)]
mod tests;

use crate::input::Parsed;
use crate::issue::Issue;
use crate::model::raw_values::RawValues;
use crate::model::record::Record;

/// The run identifier line prefix.
pub const RUN_ID_PREFIX: &str = "COMPILER_ID:";

/// The line starting the CSV block.
pub const SECTION_MARKER: &str = "=== CSV RESULTS ===";

/// The CSV header, both expected in the input and written to the output.
pub const HEADER: &str = "enum,policy,workload,mean_ns,p90_ns";

/// The header prefix sufficient to recognize the optional header row.
pub const HEADER_PREFIX: &str = "enum,policy,workload";

/// The minimal number of fields in a row. Extra fields are ignored.
pub const MINIMUM_FIELDS: usize = 5;

///
/// Parses the standard output of a benchmark executable.
///
/// The `origin` names the executable or file in diagnostics.
///
pub fn parse(text: &str, origin: &str) -> Parsed {
    let run_id = run_id(text);

    let mut lines = text.lines().skip_while(|line| line.trim() != SECTION_MARKER);
    if lines.next().is_none() {
        let mut parsed = Parsed::collect(run_id, std::iter::empty());
        parsed.issues.push(Issue::MissingSection {
            origin: origin.to_owned(),
        });
        return parsed;
    }

    let rows = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .filter(|(index, line)| !(*index == 0 && line.starts_with(HEADER_PREFIX)))
        .map(|(_, line)| parse_row(line));
    Parsed::collect(run_id, rows)
}

///
/// Extracts the first non-empty run identifier.
///
pub fn run_id(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix(RUN_ID_PREFIX))
        .map(str::trim)
        .find(|identifier| !identifier.is_empty())
        .map(str::to_owned)
}

///
/// Parses a single `subject,variant,context,mean,p90` row.
///
pub fn parse_row(line: &str) -> Result<Record, Issue> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MINIMUM_FIELDS {
        return Err(Issue::MalformedRow {
            line: line.trim().to_owned(),
            reason: format!(
                "expected at least {MINIMUM_FIELDS} fields, found {}",
                fields.len()
            ),
        });
    }

    let mean = parse_value(line, "mean", fields[3])?;
    let p90 = parse_value(line, "p90", fields[4])?;
    Ok(
        Record::new(fields[0], fields[1], fields[2], mean, Some(p90))
            .with_raw(RawValues::new(fields[3], fields[4])),
    )
}

///
/// Parses a numeric field, rejecting non-finite values.
///
fn parse_value(line: &str, name: &str, field: &str) -> Result<f64, Issue> {
    let malformed = |reason: String| Issue::MalformedRow {
        line: line.trim().to_owned(),
        reason,
    };
    let value: f64 = field
        .parse()
        .map_err(|error| malformed(format!("invalid {name} value `{field}`: {error}")))?;
    if !value.is_finite() {
        return Err(malformed(format!("non-finite {name} value `{field}`")));
    }
    Ok(value)
}
