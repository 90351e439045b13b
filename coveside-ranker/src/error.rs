//! Error types raised while configuring relevance weights.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors returned when validating a weight table.
///
/// The relative ordering of the weights is part of the scoring contract:
/// the strongest signal (category or location focus) must outweigh the
/// medium signal (audience or activity), which must outweigh the weakest
/// (season or feature). Absolute values may be tuned; the tiering may not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was zero or negative.
    #[error("relevance weights must be positive")]
    NonPositive,
    /// The strongest-to-weakest ordering was violated.
    #[error("weights must descend from the strongest signal to the weakest")]
    TieringViolated,
}
