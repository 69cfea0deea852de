//! Layered error types
//!
//! Accelerator *absence* is not an error anywhere in this crate: a search
//! on a machine with no compute platform yields an empty outcome. Errors
//! cover configuration mistakes and core-table problems; accelerator
//! runtime failures are logged at the scheduling boundary and degrade to
//! the partial maximum instead of propagating.

use otkhi_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core model error
    #[error("numeral model error: {0}")]
    Core(#[from] CoreError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A backend was requested that this build does not include
    #[error("backend '{backend}' is not compiled in (enable the '{feature}' feature)")]
    BackendDisabled {
        /// Name of the requested backend
        backend: &'static str,
        /// Cargo feature that would enable it
        feature: &'static str,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
