//! Matching engine module.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same preference profile always produces the same matching
//! 2. **Index links**: Participants refer to each other by id only
//! 3. **Synchronous Execution**: One writer, no I/O inside the loop
//! 4. **Front retries**: Rejected and displaced proposers propose again next
//!
//! ## Matching Rules
//!
//! - **Proposers** offer to responders in their own ranking order
//! - **Responders** hold the best offer so far and drop a holder for a better one
//! - **No repeat offers**: each offer consumes the proposer's ranking entry
//! - **Result** is the proposer-optimal stable matching
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::MatchingEngine;
//! use stable_match::registry::ShuffledPreferences;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let engine = MatchingEngine::new(
//!     8,
//!     ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(1)),
//!     ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(2)),
//! ).unwrap();
//!
//! let outcome = engine.run().unwrap();
//! assert!(outcome.matching.is_complete());
//! assert!(outcome.is_stable());
//! ```

pub mod queue;
pub mod driver;

pub use queue::ProposalQueue;
pub use driver::{MatchOutcome, MatchingEngine};
