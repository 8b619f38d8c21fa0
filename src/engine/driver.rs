//! Deferred-acceptance driver.
//!
//! ## Loop
//!
//! Each iteration dequeues one proposer and consumes exactly one entry of its
//! ranking:
//!
//! 1. Already matched: skip (invariant guard, unreachable in correct runs)
//! 2. Ranking exhausted: abort with `ExhaustedPreferences`
//! 3. Responder unmatched: accept
//! 4. Responder prefers the newcomer: displace the holder to the queue front
//! 5. Otherwise: reject, the proposer goes back to the queue front
//!
//! Every proposer holds n entries, so a run makes at most n² offers.

use tracing::{debug, info, warn};

use crate::engine::ProposalQueue;
use crate::error::MatchError;
use crate::registry::{PreferenceSource, Proposer, Registry, Responder};
use crate::report::{BlockingPair, Matching};
use crate::types::{MatchReceipt, ProposalEvent};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Final partner of every participant
    pub matching: Matching,

    /// One event per iteration, in order
    pub events: Vec<ProposalEvent>,

    /// Counters and state root
    pub receipt: MatchReceipt,

    /// Final registry state (rankings included, for verification)
    pub registry: Registry,
}

impl MatchOutcome {
    pub fn blocking_pairs(&self) -> Vec<BlockingPair> {
        self.matching.blocking_pairs(&self.registry)
    }

    pub fn is_stable(&self) -> bool {
        self.matching.is_stable(&self.registry)
    }

    /// Fail with `Incomplete` if any proposer ended up unmatched
    pub fn ensure_complete(&self) -> Result<(), MatchError> {
        self.matching.ensure_complete()
    }
}

/// Gale-Shapley matching engine.
///
/// Owns the registry and the proposal queue for a single run.
///
/// ## Example
///
/// ```
/// use stable_match::engine::MatchingEngine;
///
/// let engine = MatchingEngine::from_profile(
///     vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
///     vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
/// ).unwrap();
///
/// let outcome = engine.run().unwrap();
/// assert_eq!(outcome.matching.partner_of_proposer(0), Some(1));
/// assert!(outcome.is_stable());
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    registry: Registry,
    queue: ProposalQueue,
    events: Vec<ProposalEvent>,
    proposals: u64,
    rejections: u64,
    displacements: u64,
}

impl MatchingEngine {
    /// Build an engine of size `n` from two preference sources.
    pub fn new<P, R>(n: usize, proposer_source: P, responder_source: R) -> Result<Self, MatchError>
    where
        P: PreferenceSource,
        R: PreferenceSource,
    {
        let registry = Registry::new(n, proposer_source, responder_source)?;
        Ok(Self::with_registry(registry))
    }

    /// Build an engine from explicit preference tables.
    pub fn from_profile(
        proposer_prefs: Vec<Vec<usize>>,
        responder_prefs: Vec<Vec<usize>>,
    ) -> Result<Self, MatchError> {
        let registry = Registry::from_profile(proposer_prefs, responder_prefs)?;
        Ok(Self::with_registry(registry))
    }

    /// Wrap an existing registry, queueing every proposer in id order.
    pub fn with_registry(registry: Registry) -> Self {
        let queue = ProposalQueue::with_proposers(registry.size());
        Self {
            registry,
            queue,
            events: Vec::new(),
            proposals: 0,
            rejections: 0,
            displacements: 0,
        }
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn queue(&self) -> &ProposalQueue {
        &self.queue
    }

    /// Events recorded so far
    #[inline]
    pub fn events(&self) -> &[ProposalEvent] {
        &self.events
    }

    /// True once nobody is waiting to propose
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Run one iteration of the loop.
    ///
    /// Fails with `EmptyQueue` if called after the run has finished, and
    /// with `ExhaustedPreferences` if the dequeued proposer has nobody left
    /// to offer to.
    pub fn step(&mut self) -> Result<ProposalEvent, MatchError> {
        let proposer = self.queue.dequeue_front()?;

        if let Some(responder) = self.registry.proposer(proposer).and_then(Proposer::partner) {
            warn!(proposer, responder, "dequeued proposer is already matched, skipping");
            return Ok(self.record(ProposalEvent::Skipped { proposer }));
        }

        let responder = self
            .registry
            .next_offer(proposer)
            .ok_or(MatchError::ExhaustedPreferences { proposer })?;
        self.proposals += 1;

        let holder = self.registry.responder(responder).and_then(Responder::partner);
        let event = match holder {
            None => {
                self.registry.set_partners(proposer, responder);
                ProposalEvent::Accepted { proposer, responder }
            }
            Some(holder)
                if self.registry.preference_index_of(responder, proposer)
                    < self.registry.preference_index_of(responder, holder) =>
            {
                self.registry.clear_proposer_partner(holder);
                self.registry.set_partners(proposer, responder);
                self.queue.enqueue_front(holder);
                self.displacements += 1;
                ProposalEvent::Displaced {
                    proposer,
                    responder,
                    displaced: holder,
                }
            }
            Some(holder) => {
                self.queue.enqueue_front(proposer);
                self.rejections += 1;
                ProposalEvent::Rejected {
                    proposer,
                    responder,
                    holder,
                }
            }
        };

        debug!(?event, "proposal resolved");
        Ok(self.record(event))
    }

    /// Drive the loop until the queue empties and report the result.
    pub fn run(mut self) -> Result<MatchOutcome, MatchError> {
        let size = self.registry.size();
        info!(size, "starting deferred acceptance");

        while !self.is_finished() {
            self.step()?;
        }

        let matching = Matching::from_registry(&self.registry);
        let unmatched = matching.unmatched_proposers();
        if unmatched > 0 {
            warn!(unmatched, "proposers left unmatched at termination");
        }

        let receipt = MatchReceipt::new(
            size as u64,
            self.proposals,
            self.rejections,
            self.displacements,
            matching.state_root()?,
        );

        info!(
            proposals = receipt.proposals,
            rejections = receipt.rejections,
            displacements = receipt.displacements,
            state_root = %receipt.state_root_hex(),
            "matching complete"
        );

        Ok(MatchOutcome {
            matching,
            events: self.events,
            receipt,
            registry: self.registry,
        })
    }

    fn record(&mut self, event: ProposalEvent) -> ProposalEvent {
        self.events.push(event);
        event
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
