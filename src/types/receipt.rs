//! Match receipt summarizing a completed engine run.
//!
//! The MatchReceipt records how much work the deferred-acceptance loop did
//! and carries the state root of the final matching for verification.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

/// Receipt summarizing one run of the matching engine.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash of the SSZ-encoded matching.
/// Two runs over the same preference profile produce the same root.
///
/// ## Example
///
/// ```
/// use stable_match::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(
///     3,          // size
///     5,          // proposals
///     2,          // rejections
///     0,          // displacements
///     [0u8; 32],  // state_root (would be computed)
/// );
/// assert_eq!(receipt.acceptances(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of proposers (= number of responders)
    pub size: u64,

    /// Offers made, one per consumed preference
    pub proposals: u64,

    /// Offers turned down by a responder holding someone better
    pub rejections: u64,

    /// Offers that evicted a responder's current partner
    pub displacements: u64,

    /// SHA-256 of the final matching's SSZ encoding
    pub state_root: [u8; 32],
}

impl MatchReceipt {
    pub fn new(
        size: u64,
        proposals: u64,
        rejections: u64,
        displacements: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            size,
            proposals,
            rejections,
            displacements,
            state_root,
        }
    }

    /// Compute SHA-256 hash of the given data
    ///
    /// Returns a 32-byte array suitable for use as a state root.
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Check if this receipt covers an empty run (no participants)
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Offers taken by a previously unmatched responder
    pub fn acceptances(&self) -> u64 {
        self.proposals
            .saturating_sub(self.rejections)
            .saturating_sub(self.displacements)
    }

    /// Average number of offers each proposer made, in fixed-point
    ///
    /// Returns None for an empty run.
    pub fn offers_per_proposer(&self) -> Option<Decimal> {
        if self.size == 0 {
            return None;
        }
        Decimal::from(self.proposals).checked_div(Decimal::from(self.size))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
