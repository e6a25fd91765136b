//!
//! The console diagnostics of an invocation.
//!

use colored::Colorize;

use crate::issue::Issue;

///
/// Collects the recoverable issues of an invocation and reports progress.
///
/// Every issue is printed to the standard error stream as soon as it is pushed,
/// unless the output is suppressed, and kept for the final tally.
///
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// The issues in the order they were met.
    issues: Vec<Issue>,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Diagnostics {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self {
            issues: Vec::new(),
            quiet,
        }
    }

    ///
    /// Reports and keeps an issue.
    ///
    pub fn push(&mut self, issue: Issue) {
        if !self.quiet {
            eprintln!("{} {issue}", "Warning:".bright_yellow().bold());
        }
        self.issues.push(issue);
    }

    ///
    /// Prints a progress line, e.g. `     Running enchantum_bench_auto`.
    ///
    pub fn status<S>(&self, verb: &str, message: S)
    where
        S: std::fmt::Display,
    {
        if !self.quiet {
            println!("{:>12} {message}", verb.bright_green().bold());
        }
    }

    ///
    /// The issues met so far.
    ///
    pub fn issues(&self) -> &[Issue] {
        self.issues.as_slice()
    }

    ///
    /// Whether the output is suppressed.
    ///
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Extend<Issue> for Diagnostics {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter.into_iter() {
            self.push(issue);
        }
    }
}
