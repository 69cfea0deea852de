//! Core error types

use thiserror::Error;

/// Errors raised while building the numeral model.
///
/// Lexicon problems are normally absorbed at the loading boundary by the
/// builtin fallback; they surface only when a caller parses an external
/// table explicitly.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A unit-table line could not be parsed
    #[error("invalid lexicon at line {line}: {reason}")]
    InvalidLexicon {
        /// 1-based line number in the source text
        line: usize,
        /// What was wrong with the line
        reason: &'static str,
    },

    /// The unit table has the wrong number of entries
    #[error("lexicon must have {expected} unit entries, found {found}")]
    LexiconShape {
        /// Required entry count
        expected: usize,
        /// Entry count actually present
        found: usize,
    },

    /// The name of 4 does not have 4 letters
    ///
    /// Every chain is assumed to terminate at 4 because its name is four
    /// letters long; a table violating that would make iteration diverge.
    #[error("fixed-point violation: name of 4 has {length} letters, expected 4")]
    FixedPointViolation {
        /// Letter count actually found at index 4
        length: u32,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
