//! Typed failures for the report pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A chart or table over zero drivers is meaningless; fail fast instead
    /// of handing an empty series to the plotting backend.
    #[error("dataset contains no drivers")]
    EmptyDataset,

    /// Driver weights must be finite and non-negative.
    #[error("invalid weight {weight} for driver {name:?}")]
    InvalidWeight { name: String, weight: f64 },

    /// The plotting backend could not produce the chart (draw failure,
    /// fonts unavailable). Fatal for the whole run; nothing is written.
    #[error("chart backend failure: {0}")]
    ChartBackend(String),
}
