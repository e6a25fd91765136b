//!
//! The benchmark runner binary.
//!

pub(crate) mod arguments;

use std::time::Duration;

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
    let diagnostics = benchmark_comparator::Diagnostics::new(arguments.quiet);
    diagnostics.status(
        "Starting",
        format!(
            "{} v{}",
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION")
        ),
    );

    let config = benchmark_comparator::DriverConfig {
        build_directory: arguments.build_directory,
        output_directory: arguments.output_directory,
        executable_prefix: arguments.executable_prefix,
        baseline: arguments.baseline,
        timeout: Duration::from_secs(arguments.timeout),
    };
    let mut runner = benchmark_comparator::Runner::new(config, diagnostics);
    runner.run()?;

    let comparison = runner.compare();
    if !runner.diagnostics.is_quiet() {
        benchmark_comparator::write_digest(
            &mut std::io::stdout(),
            &comparison,
            benchmark_comparator::Artifact::variant_order().as_slice(),
            arguments.digest_max,
        )?;
    }

    let output = runner.output(&comparison);
    let written = output.write_to_directory(runner.config.output_directory.as_path())?;
    for path in written.iter() {
        runner.diagnostics.status("Written", path.display());
    }
    runner.diagnostics.status(
        "Finished",
        format!(
            "{} records, {} warnings",
            runner.store.len(),
            runner.diagnostics.issues().len()
        ),
    );

    Ok(())
}
