//!
//! Relative performance against a baseline variant.
//!

#[cfg(test)]
mod tests;

pub mod aggregate;
pub mod comparison;
pub mod entry;

///
/// The ratio of a baseline metric to a compared metric.
///
/// Values above `1.0` mean the compared variant is faster or smaller.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// A well-defined ratio.
    Ratio(f64),
    /// The ratio is undefined because a metric is zero or negative.
    Unmeasurable,
}

impl Speedup {
    /// The speedup of the baseline against itself.
    pub const IDENTITY: Self = Self::Ratio(1.0);

    ///
    /// Computes `baseline / value`.
    ///
    /// Both metrics must be positive, otherwise the speedup is unmeasurable.
    ///
    pub fn new(baseline: f64, value: f64) -> Self {
        if baseline > 0.0 && value > 0.0 {
            Self::Ratio(baseline / value)
        } else {
            Self::Unmeasurable
        }
    }

    ///
    /// The ratio, if measurable.
    ///
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Ratio(ratio) => Some(*ratio),
            Self::Unmeasurable => None,
        }
    }

    ///
    /// The numeric projection, where an unmeasurable speedup is exactly `0.0`.
    ///
    pub fn value(&self) -> f64 {
        self.ratio().unwrap_or_default()
    }
}

impl std::fmt::Display for Speedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio(ratio) => {
                let precision = f.precision().unwrap_or(2);
                write!(f, "{ratio:.precision$}x")
            }
            Self::Unmeasurable => write!(f, "n/a"),
        }
    }
}
