//! Result reporting for finished runs.
//!
//! - [`Matching`]: final partners of both sides, diagnostics and state root
//! - [`BlockingPair`]: evidence that a matching is not stable

pub mod matching;
pub mod stability;

pub use matching::Matching;
pub use stability::BlockingPair;
