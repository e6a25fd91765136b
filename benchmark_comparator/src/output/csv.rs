//!
//! Serializing records to CSV.
//!

use std::fmt::Write;

use crate::input::csv_block::HEADER;
use crate::model::record::Record;

///
/// Serializes records to CSV in the following format:
/// `enum,policy,workload,mean_ns,p90_ns`
///
/// The same schema is used for per-run and combined files. Parsed records keep their
/// numeric fields as written in the source. A missing p90 value is written as an empty field.
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The expected length of a single row.
    const ESTIMATED_ROW_LENGTH: usize = 64;
}

impl From<&[Record]> for Csv {
    fn from(records: &[Record]) -> Self {
        let mut content = String::with_capacity((records.len() + 1) * Self::ESTIMATED_ROW_LENGTH);
        content.push_str(HEADER);
        content.push('\n');

        for Record {
            subject,
            variant,
            context,
            mean,
            p90,
            raw,
        } in records.iter()
        {
            let (mean, p90) = match raw {
                Some(raw) => (raw.mean.to_owned(), raw.p90.to_owned()),
                None => (
                    mean.to_string(),
                    p90.map(|p90| p90.to_string()).unwrap_or_default(),
                ),
            };
            writeln!(&mut content, "{subject},{variant},{context},{mean},{p90}")
                .expect("Always valid");
        }

        Self { content }
    }
}
