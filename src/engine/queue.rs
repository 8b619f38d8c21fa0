//! Proposal queue: proposers waiting for their turn to make an offer.
//!
//! ## Queue Structure
//!
//! ```text
//! front (next to propose) <-> ... <-> back (last in line)
//! ```
//!
//! - Initial proposers are appended at the back in id order
//! - Rejected and displaced proposers re-enter at the front
//! - The driver always consumes from the front

use std::collections::VecDeque;

use crate::error::MatchError;

/// FIFO of proposer ids with front insertion for retries.
#[derive(Debug, Clone, Default)]
pub struct ProposalQueue {
    ids: VecDeque<usize>,
}

impl ProposalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue holding `0..n` in ascending order
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::engine::ProposalQueue;
    ///
    /// let mut queue = ProposalQueue::with_proposers(3);
    /// assert_eq!(queue.dequeue_front(), Ok(0));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn with_proposers(n: usize) -> Self {
        Self {
            ids: (0..n).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.ids.contains(&id)
    }

    /// Next proposer in line, without removing it
    #[inline]
    pub fn peek_front(&self) -> Option<usize> {
        self.ids.front().copied()
    }

    /// Remove and return the proposer at the front.
    ///
    /// Fails with `EmptyQueue` if nobody is waiting.
    pub fn dequeue_front(&mut self) -> Result<usize, MatchError> {
        self.ids.pop_front().ok_or(MatchError::EmptyQueue)
    }

    /// Put `id` ahead of everyone else
    pub fn enqueue_front(&mut self, id: usize) {
        debug_assert!(!self.contains(id), "proposer {id} queued twice");
        self.ids.push_front(id);
    }

    /// Put `id` behind everyone else
    pub fn enqueue_back(&mut self, id: usize) {
        debug_assert!(!self.contains(id), "proposer {id} queued twice");
        self.ids.push_back(id);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
