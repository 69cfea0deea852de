//! Search engine for longest letter-count chains
//!
//! Coordinates range searches over the Georgian numeral letter-count map
//! from `otkhi-core`. The entry point is [`ChainSearcher`], which owns a
//! [`NumeralModel`] and dispatches to one of the backend strategies:
//!
//! - `cpu`: multi-lane interleaved scan (parallel with the default
//!   `parallel` feature, serial without)
//! - `opencl`: batched device kernel with overlapped host reductions
//!   (feature `opencl`)
//! - `cuda`: opaque native accelerator gateway (feature `cuda`)
//!
//! All strategies are result-equivalent: for the same range and separator
//! they return the same chain.
//!
//! ```
//! use otkhi_engine::ChainSearcher;
//!
//! let searcher = ChainSearcher::new();
//! let outcome = searcher.search(0, 1_000).unwrap();
//! let chain = outcome.chain.unwrap();
//! assert_eq!(*chain.values().last().unwrap(), 4);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod outcome;
pub mod searcher;

pub use config::{default_lanes, Backend, EngineConfig};
pub use error::{EngineError, Result};
pub use executor::SearchStrategy;
pub use outcome::{SearchOutcome, SearchStats};
pub use searcher::{ChainSearcher, ChainSearcherBuilder};

#[cfg(feature = "opencl")]
pub use executor::opencl::{probe_devices, DeviceInfo};

// Re-exported so downstream crates need only one dependency.
pub use otkhi_core::{Chain, ChainIterator, NumeralModel};
