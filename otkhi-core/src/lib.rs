//! Georgian numeral letter-count model and chain iteration
//!
//! This crate provides the core algorithm behind the search for the longest
//! "numeral-name letter count" chain: the count of letters in a number's
//! spelled-out Georgian name, computed directly from precomputed tables,
//! and the iterator that applies that map until it collapses to the fixed
//! point 4 ("ოთხი" has four letters).

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod lexicon;
pub mod model;

// Re-export key types
pub use chain::{Chain, ChainIterator, FIXED_POINT};
pub use error::{CoreError, Result};
pub use lexicon::{Lexicon, TIER_COUNT, UNIT_COUNT};
pub use model::{decompose, DigitGroups, NumeralModel, MAX_GROUPS};
