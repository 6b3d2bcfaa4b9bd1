//! Batch import and stats over the reading backend
//!
//! Drives the book resolver and event recorder once per import record,
//! collecting per-record failures instead of aborting, and aggregates
//! per-user reading statistics.

mod error;
mod importer;
mod recorder;
mod resolver;
mod stats;

pub use error::*;
pub use importer::*;
pub use recorder::*;
pub use resolver::*;
pub use stats::*;
