//! # Stable Match
//!
//! Gale-Shapley deferred-acceptance engine for the stable marriage problem.
//!
//! ## Architecture
//!
//! The engine consists of:
//! - **Types**: Core data structures (Side, Pair, ProposalEvent, MatchReceipt)
//! - **Registry**: Slab-backed proposer and responder records
//! - **Engine**: Proposal queue and deterministic matching driver
//! - **Report**: Final matching, diagnostics and stability checks
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical preference input yields an identical matching
//! 2. **Injectable Rankings**: Randomness lives in the preference source only
//! 3. **Index Links**: No references between participant records
//! 4. **Synchronous Execution**: Single writer, no async, no I/O in the loop
//!
//! ## Guarantees
//!
//! - Every run makes at most n² offers
//! - The result is the proposer-optimal stable matching

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Side, Pair, ProposalEvent, MatchReceipt
pub mod types;

/// Errors raised by construction and the matching loop
pub mod error;

/// Participant registry and preference sources
pub mod registry;

/// Matching engine: proposal queue and deferred-acceptance driver
pub mod engine;

/// Result reporting and stability verification
pub mod report;

/// Binary settings
pub mod config;

/// Partition scheduling exercise, independent of the engine
pub mod schedule;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{MatchReceipt, Pair, ProposalEvent, Side};
pub use error::{MatchError, PreferenceFault};
pub use registry::{FixedPreferences, PreferenceSource, Registry, ShuffledPreferences};
pub use engine::{MatchOutcome, MatchingEngine, ProposalQueue};
pub use report::{BlockingPair, Matching};
