//! Error type for trip planning.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request fields outside the accepted ranges.
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),

    /// Not enough unique activities to fill the requested slots.
    #[error("activity pool can reach only {available} unique items, {required} required")]
    PoolCapacity { required: usize, available: usize },

    /// A purpose/interest label that is not in the known list.
    #[error("unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },
}
