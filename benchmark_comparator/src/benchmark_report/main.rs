//!
//! The optimization report binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => benchmark_comparator::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            benchmark_comparator::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let mut diagnostics = benchmark_comparator::Diagnostics::new(arguments.quiet);

    let date = arguments
        .date
        .unwrap_or_else(|| chrono::Utc::now().format(Arguments::DATE_FORMAT).to_string());
    let raw_root = arguments.root.join("raw").join(date.as_str());
    diagnostics.status("Reading", raw_root.display());

    let mut presets = Vec::with_capacity(2);
    for name in [arguments.baseline.as_str(), arguments.candidate.as_str()].into_iter() {
        presets.push(benchmark_comparator::Preset::load(
            raw_root.as_path(),
            name,
            &mut diagnostics,
        )?);
    }
    if !presets.iter().any(benchmark_comparator::Preset::is_usable) {
        anyhow::bail!(benchmark_comparator::DriverError::NoUsableData {
            sources: presets.len(),
        });
    }

    let mut store = benchmark_comparator::Store::default();
    for preset in presets.iter() {
        store.extend(preset.records());
    }
    let (grouped, issues) = store.by_group_key();
    diagnostics.extend(issues);
    let comparison =
        benchmark_comparator::Comparison::calculate(&grouped, arguments.baseline.as_str());
    diagnostics.extend(comparison.issues());

    let report = benchmark_comparator::OptimizationReport::new(
        date.as_str(),
        &benchmark_comparator::Environment::current(),
        presets.as_slice(),
        &comparison,
        arguments.candidate.as_str(),
    );
    let output = benchmark_comparator::Output::from(benchmark_comparator::File::new(
        format!("opt-report-{date}.md"),
        report.content,
    ));
    for path in output.write_to_directory(arguments.root.as_path())?.iter() {
        diagnostics.status("Written", path.display());
    }
    diagnostics.status(
        "Finished",
        format!(
            "{} benchmarks, {} warnings",
            comparison.groups.len(),
            diagnostics.issues().len()
        ),
    );

    Ok(())
}
