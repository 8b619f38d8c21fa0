//! Proposal events emitted by the matching driver.
//!
//! One event per driver iteration, in the order they happened. Replaying the
//! event list reconstructs every partner change a responder went through.

/// Outcome of a single driver iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalEvent {
    /// Responder was unmatched and took the offer
    Accepted { proposer: usize, responder: usize },

    /// Responder dropped `displaced` for the better offer from `proposer`
    Displaced {
        proposer: usize,
        responder: usize,
        displaced: usize,
    },

    /// Responder kept `holder` and turned `proposer` down
    Rejected {
        proposer: usize,
        responder: usize,
        holder: usize,
    },

    /// Dequeued proposer was already matched; nothing changed
    Skipped { proposer: usize },
}

impl ProposalEvent {
    /// The proposer that was dequeued for this iteration
    pub fn proposer(&self) -> usize {
        match *self {
            ProposalEvent::Accepted { proposer, .. }
            | ProposalEvent::Displaced { proposer, .. }
            | ProposalEvent::Rejected { proposer, .. }
            | ProposalEvent::Skipped { proposer } => proposer,
        }
    }

    /// The responder that received an offer, if one was made
    pub fn responder(&self) -> Option<usize> {
        match *self {
            ProposalEvent::Accepted { responder, .. }
            | ProposalEvent::Displaced { responder, .. }
            | ProposalEvent::Rejected { responder, .. } => Some(responder),
            ProposalEvent::Skipped { .. } => None,
        }
    }

    /// True if this iteration consumed one of the proposer's preferences
    pub fn is_offer(&self) -> bool {
        !matches!(self, ProposalEvent::Skipped { .. })
    }

    /// Proposer sent back to the front of the queue, if any
    pub fn requeued(&self) -> Option<usize> {
        match *self {
            ProposalEvent::Displaced { displaced, .. } => Some(displaced),
            ProposalEvent::Rejected { proposer, .. } => Some(proposer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let displaced = ProposalEvent::Displaced {
            proposer: 1,
            responder: 0,
            displaced: 2,
        };
        assert_eq!(displaced.proposer(), 1);
        assert_eq!(displaced.responder(), Some(0));
        assert_eq!(displaced.requeued(), Some(2));
        assert!(displaced.is_offer());

        let skipped = ProposalEvent::Skipped { proposer: 3 };
        assert_eq!(skipped.responder(), None);
        assert_eq!(skipped.requeued(), None);
        assert!(!skipped.is_offer());
    }

    #[test]
    fn test_rejected_requeues_proposer() {
        let rejected = ProposalEvent::Rejected {
            proposer: 4,
            responder: 1,
            holder: 0,
        };
        assert_eq!(rejected.requeued(), Some(4));
    }
}
