//!
//! The benchmark data model.
//!

pub mod group_key;
pub mod raw_values;
pub mod record;
pub mod record_key;
