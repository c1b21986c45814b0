//! Error types for lztext operations.
//!
//! The codecs in this workspace have a deliberately small fault surface:
//! decompression is permissive and never fails, and the only compression
//! fault is the byte-budget signal the dispatcher uses to fall back to a
//! cheaper format. Nothing here ever reaches the public string API.

use thiserror::Error;

/// The main error type for lztext operations.
#[derive(Debug, Error)]
pub enum LztextError {
    /// The running output size crossed the byte budget during compression.
    ///
    /// This is a fail-soft signal: the dispatcher catches it and retries
    /// with the next format in its fallback chain, ending with verbatim
    /// storage, so callers of the public API never observe it.
    #[error("compressed output exceeded the byte budget of {budget} bytes")]
    BudgetExceeded {
        /// The budget that was exceeded, in UTF-8 bytes.
        budget: usize,
    },

    /// An LZW code range where no dictionary codes fit.
    #[error("invalid LZW code range: code_max {code_max:#x} must be greater than code_start {code_start:#x}")]
    InvalidCodeRange {
        /// First code point reserved for literals.
        code_start: u16,
        /// Upper bound for dictionary codes.
        code_max: u16,
    },
}

impl LztextError {
    /// Create a budget-exceeded signal.
    pub fn budget_exceeded(budget: usize) -> Self {
        Self::BudgetExceeded { budget }
    }

    /// Create an invalid code range error.
    pub fn invalid_code_range(code_start: u16, code_max: u16) -> Self {
        Self::InvalidCodeRange {
            code_start,
            code_max,
        }
    }
}

/// Result type alias for lztext operations.
pub type Result<T> = std::result::Result<T, LztextError>;
