//! Typed errors for the public API.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A date window could not be built (missing bounds, or from after to).
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// The preset token is not one of the known presets. There is no silent
    /// fallback window; callers must pass a recognized token.
    #[error("unknown date preset: '{0}'")]
    UnknownPreset(String),

    /// A monetary field is out of domain (e.g. negative VAT).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A single record failed validation. Aggregation reports these
    /// per record and continues over the valid subset.
    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: Uuid, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
