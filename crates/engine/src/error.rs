//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidInput`] thrown when an expense is rejected before it reaches the
//!   ledger (blank payer, negative or unparsable amount).
//! - [`IndexOutOfRange`] thrown when a positional operation targets a record
//!   that does not exist.
//!
//! Both are recoverable: the ledger is never mutated when one is returned.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`IndexOutOfRange`]: EngineError::IndexOutOfRange
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Index {index} out of range (ledger has {len} expenses)")]
    IndexOutOfRange { index: usize, len: usize },
}
