//! Blocking-pair verification.
//!
//! A proposer `p` and responder `r` block a matching when they are not
//! partners, `p` ranks `r` above its own partner (or is unmatched), and `r`
//! ranks `p` above its own partner (or is unmatched). A matching with no
//! blocking pair is stable.

use crate::registry::Registry;
use crate::report::Matching;

/// A proposer and responder who would both rather be with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockingPair {
    pub proposer: usize,
    pub responder: usize,
}

impl Matching {
    /// Every blocking pair under the rankings held in `registry`.
    ///
    /// Ordered by proposer id, then by the proposer's ranking.
    pub fn blocking_pairs(&self, registry: &Registry) -> Vec<BlockingPair> {
        let mut blocking = Vec::new();

        for proposer in registry.proposers() {
            let current = self.partner_of_proposer(proposer.id);

            // Only responders ranked above the current partner can block
            for &responder in proposer.preferences() {
                if Some(responder) == current {
                    break;
                }
                let Some(record) = registry.responder(responder) else {
                    continue;
                };
                let wants_proposer = match self.partner_of_responder(responder) {
                    Some(holder) => record.prefers(proposer.id, holder),
                    None => true,
                };
                if wants_proposer {
                    blocking.push(BlockingPair {
                        proposer: proposer.id,
                        responder,
                    });
                }
            }
        }

        blocking
    }

    /// No blocking pair exists
    pub fn is_stable(&self, registry: &Registry) -> bool {
        self.blocking_pairs(registry).is_empty()
    }
}
