//!
//! The speedup of one variant across all comparison groups.
//!

///
/// The speedup of one variant across all comparison groups.
///
/// Unmeasurable entries are counted but do not take part in the averages.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// The compared variant.
    pub variant: String,
    /// The arithmetic mean of the measurable mean speedups.
    pub mean: Option<f64>,
    /// The arithmetic mean of the measurable p90 speedups.
    pub p90: Option<f64>,
    /// The number of groups the variant appears in.
    pub groups: usize,
    /// The number of groups where the mean speedup is unmeasurable.
    pub unmeasurable: usize,
}
