//! Transport and export around the dosha classifier: the query string that
//! carries a reading between screens, and the downloadable analysis report.

pub mod error;
pub mod query;
pub mod report;
#[cfg(test)]
mod tests;

pub use error::{QueryError, ReportError};
pub use query::{parse_query, to_query_string, DEFAULT_PULSE_RATE};
pub use report::{PulseReport, DEFAULT_REPORT_FILE_NAME};
