//!
//! The resource usage report printed by `/usr/bin/time -v`.
//!


use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the wall-clock line, e.g. `Elapsed (wall clock) time (h:mm:ss or m:ss): 0:12.34`.
static WALL_CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*Elapsed \(wall clock\) time\s*(?:\([^)]*\))?\s*:\s*(?P<value>\S+)\s*$")
        .expect("Always valid")
});

/// Matches the peak memory line, e.g. `Maximum resident set size (kbytes): 123456`.
static MAX_RSS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*Maximum resident set size\s*(?:\([^)]*\))?\s*:\s*(?P<value>\S+)\s*$")
        .expect("Always valid")
});

///
/// The build-phase resource usage.
///
/// Both fields are optional: a missing or unparsable line leaves the field empty.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TimeLog {
    /// The elapsed wall-clock time in seconds.
    pub wall_clock_seconds: Option<f64>,
    /// The peak resident set size in kilobytes.
    pub max_rss_kb: Option<u64>,
}

impl TimeLog {
    ///
    /// Scans a report line by line.
    ///
    pub fn parse(text: &str) -> Self {
        let mut log = Self::default();
        for line in text.lines() {
            if let Some(captures) = WALL_CLOCK.captures(line) {
                log.wall_clock_seconds = parse_duration(&captures["value"]);
            }
            if let Some(captures) = MAX_RSS.captures(line) {
                log.max_rss_kb = parse_kilobytes(&captures["value"]);
            }
        }
        log
    }

    ///
    /// Reads and parses a report file. Invalid UTF-8 sequences are replaced.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|error| anyhow::anyhow!("Time log file {path:?} reading: {error}"))?;
        Ok(Self::parse(String::from_utf8_lossy(bytes.as_slice()).as_ref()))
    }

    ///
    /// Whether neither field was found.
    ///
    pub fn is_empty(&self) -> bool {
        self.wall_clock_seconds.is_none() && self.max_rss_kb.is_none()
    }
}

///
/// Converts `H:MM:SS`, `M:SS`, or `SS` with an optional fraction into seconds.
///
pub fn parse_duration(value: &str) -> Option<f64> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    let seconds = match parts.as_slice() {
        [hours, minutes, seconds] => {
            let minutes = hours
                .parse::<u64>()
                .ok()?
                .checked_mul(60)?
                .checked_add(minutes.parse::<u64>().ok()?)?;
            (minutes.checked_mul(60)? as f64) + seconds.parse::<f64>().ok()?
        }
        [minutes, seconds] => {
            (minutes.parse::<u64>().ok()?.checked_mul(60)? as f64) + seconds.parse::<f64>().ok()?
        }
        [seconds] => seconds.parse::<f64>().ok()?,
        _ => return None,
    };
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

///
/// Parses a kilobyte count, accepting a decimal figure rounded to the nearest kilobyte.
///
pub fn parse_kilobytes(value: &str) -> Option<u64> {
    let value = value.trim();
    value.parse::<u64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0 && *value < u64::MAX as f64)
            .map(|value| value.round() as u64)
    })
}
