//!
//! A single timing sample.
//!

///
/// A single timing sample of a named benchmark.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Sample {
    /// The benchmark name, e.g. `BM_EnumToString/Color`.
    pub name: String,
    /// The wall-clock time per iteration, in the unit of the batch, usually nanoseconds.
    pub real_time: f64,
}

impl TryFrom<serde_json::Value> for Sample {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let sample: Self = serde_json::from_value(value).map_err(|error| error.to_string())?;
        if sample.name.is_empty() {
            return Err("empty benchmark name".to_owned());
        }
        if !sample.real_time.is_finite() {
            return Err(format!("non-finite `real_time` {}", sample.real_time));
        }
        Ok(sample)
    }
}
