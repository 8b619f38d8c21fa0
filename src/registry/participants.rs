//! Participant records and the registry that owns them.
//!
//! ## Storage
//!
//! Proposers and responders live in two flat slabs keyed by id. Records
//! refer to each other only by id, never by reference, so partner links on
//! both sides are plain `Option<usize>` values mutated through the registry.
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys from a fresh slab are handed out as `0, 1, 2, ...`
//!
//! Records are inserted in id order into a fresh slab, so slab key == id.

use slab::Slab;

use crate::error::{MatchError, PreferenceFault};
use crate::registry::preferences::{validate_ranking, FixedPreferences, PreferenceSource};
use crate::types::Side;

// ============================================================================
// Proposer
// ============================================================================

/// A participant that works down its own ranking making offers.
///
/// The full ranking is kept for verification; the part still available to
/// offer to is everything from `cursor` on. The cursor only moves forward,
/// so the remaining list shrinks and never regrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposer {
    pub id: usize,
    preferences: Vec<usize>,
    cursor: usize,
    partner: Option<usize>,
}

impl Proposer {
    fn new(id: usize, preferences: Vec<usize>) -> Self {
        Self {
            id,
            preferences,
            cursor: 0,
            partner: None,
        }
    }

    /// Full ranking, most preferred responder first
    #[inline]
    pub fn preferences(&self) -> &[usize] {
        &self.preferences
    }

    /// Responders not yet offered to, highest priority first
    #[inline]
    pub fn remaining(&self) -> &[usize] {
        &self.preferences[self.cursor..]
    }

    /// Number of offers made so far
    #[inline]
    pub fn offers_made(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn partner(&self) -> Option<usize> {
        self.partner
    }

    /// Position of `responder` in this proposer's full ranking
    pub fn rank_of(&self, responder: usize) -> Option<usize> {
        self.preferences.iter().position(|&r| r == responder)
    }

    fn pop_next(&mut self) -> Option<usize> {
        let next = *self.preferences.get(self.cursor)?;
        self.cursor += 1;
        Some(next)
    }
}

// ============================================================================
// Responder
// ============================================================================

/// A participant that holds the best offer received so far.
///
/// `rank` is the inverse of `preferences`: `rank[p]` is where proposer `p`
/// sits in this responder's order. Both are fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    pub id: usize,
    preferences: Vec<usize>,
    rank: Vec<usize>,
    partner: Option<usize>,
}

impl Responder {
    fn new(id: usize, preferences: Vec<usize>) -> Self {
        let mut rank = vec![0; preferences.len()];
        for (position, &proposer) in preferences.iter().enumerate() {
            rank[proposer] = position;
        }
        Self {
            id,
            preferences,
            rank,
            partner: None,
        }
    }

    /// Full ranking, most preferred proposer first
    #[inline]
    pub fn preferences(&self) -> &[usize] {
        &self.preferences
    }

    /// Rank position of `proposer` (lower = more preferred)
    ///
    /// # Panics
    ///
    /// Panics if `proposer` is not a valid proposer id
    #[inline]
    pub fn rank_of(&self, proposer: usize) -> usize {
        self.rank[proposer]
    }

    /// True if `a` ranks strictly above `b`
    #[inline]
    pub fn prefers(&self, a: usize, b: usize) -> bool {
        self.rank_of(a) < self.rank_of(b)
    }

    #[inline]
    pub fn partner(&self) -> Option<usize> {
        self.partner
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Owner of every proposer and responder record for one run.
#[derive(Debug, Clone)]
pub struct Registry {
    proposers: Slab<Proposer>,
    responders: Slab<Responder>,
}

impl Registry {
    /// Build both sides of size `n` from the given sources.
    ///
    /// Fails with `InvalidPreference` if any ranking is missing or is not a
    /// permutation of `0..n`.
    pub fn new<P, R>(n: usize, proposer_source: P, responder_source: R) -> Result<Self, MatchError>
    where
        P: PreferenceSource,
        R: PreferenceSource,
    {
        Ok(Self {
            proposers: create_proposers(n, proposer_source)?,
            responders: create_responders(n, responder_source)?,
        })
    }

    /// Build from explicit preference tables, one ranking per participant.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::registry::Registry;
    ///
    /// let registry = Registry::from_profile(
    ///     vec![vec![1, 0], vec![0, 1]],
    ///     vec![vec![0, 1], vec![1, 0]],
    /// ).unwrap();
    ///
    /// assert_eq!(registry.size(), 2);
    /// assert_eq!(registry.preference_index_of(1, 0), 1);
    /// ```
    pub fn from_profile(
        proposer_prefs: Vec<Vec<usize>>,
        responder_prefs: Vec<Vec<usize>>,
    ) -> Result<Self, MatchError> {
        let proposers = proposer_prefs.len();
        let responders = responder_prefs.len();
        if proposers != responders {
            let side = if responders < proposers {
                Side::Responder
            } else {
                Side::Proposer
            };
            return Err(MatchError::InvalidPreference {
                side,
                id: proposers.min(responders),
                fault: PreferenceFault::SizeMismatch {
                    proposers,
                    responders,
                },
            });
        }

        Self::new(
            proposers,
            FixedPreferences::new(proposer_prefs),
            FixedPreferences::new(responder_prefs),
        )
    }

    /// Number of participants on each side
    #[inline]
    pub fn size(&self) -> usize {
        self.proposers.len()
    }

    #[inline]
    pub fn proposer(&self, id: usize) -> Option<&Proposer> {
        self.proposers.get(id)
    }

    #[inline]
    pub fn responder(&self, id: usize) -> Option<&Responder> {
        self.responders.get(id)
    }

    /// Proposers in ascending id order
    pub fn proposers(&self) -> impl Iterator<Item = &Proposer> {
        self.proposers.iter().map(|(_, proposer)| proposer)
    }

    /// Responders in ascending id order
    pub fn responders(&self) -> impl Iterator<Item = &Responder> {
        self.responders.iter().map(|(_, responder)| responder)
    }

    /// Rank position of `proposer` in `responder`'s fixed order
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range
    #[inline]
    pub fn preference_index_of(&self, responder: usize, proposer: usize) -> usize {
        self.responders[responder].rank_of(proposer)
    }

    /// Link `proposer` and `responder` to each other.
    ///
    /// Overwrites whatever partner either side held; the caller clears an
    /// evicted partner first.
    pub fn set_partners(&mut self, proposer: usize, responder: usize) {
        self.proposers[proposer].partner = Some(responder);
        self.responders[responder].partner = Some(proposer);
    }

    /// Mark `proposer` unmatched after its responder dropped it
    pub fn clear_proposer_partner(&mut self, proposer: usize) {
        self.proposers[proposer].partner = None;
    }

    /// Remove and return the highest-priority responder `proposer` has not
    /// offered to yet. `None` once the ranking is exhausted.
    pub fn next_offer(&mut self, proposer: usize) -> Option<usize> {
        self.proposers.get_mut(proposer)?.pop_next()
    }
}

/// Build `n` proposers, validating each ranking.
pub fn create_proposers<S: PreferenceSource>(
    n: usize,
    mut source: S,
) -> Result<Slab<Proposer>, MatchError> {
    check_count(&source, Side::Proposer, n)?;
    let mut proposers = Slab::with_capacity(n);
    for id in 0..n {
        let ranking = checked_ranking(&mut source, Side::Proposer, id, n)?;
        let key = proposers.insert(Proposer::new(id, ranking));
        debug_assert_eq!(key, id);
    }
    Ok(proposers)
}

/// Build `n` responders, validating each ranking.
pub fn create_responders<S: PreferenceSource>(
    n: usize,
    mut source: S,
) -> Result<Slab<Responder>, MatchError> {
    check_count(&source, Side::Responder, n)?;
    let mut responders = Slab::with_capacity(n);
    for id in 0..n {
        let ranking = checked_ranking(&mut source, Side::Responder, id, n)?;
        let key = responders.insert(Responder::new(id, ranking));
        debug_assert_eq!(key, id);
    }
    Ok(responders)
}

/// A finite source must not hold rankings past id `n - 1`; the first
/// surplus id is reported.
fn check_count<S: PreferenceSource>(source: &S, side: Side, n: usize) -> Result<(), MatchError> {
    match source.len_hint() {
        Some(actual) if actual > n => Err(MatchError::InvalidPreference {
            side,
            id: n,
            fault: PreferenceFault::WrongCount { expected: n, actual },
        }),
        _ => Ok(()),
    }
}

fn checked_ranking<S: PreferenceSource>(
    source: &mut S,
    side: Side,
    id: usize,
    n: usize,
) -> Result<Vec<usize>, MatchError> {
    let ranking = source.ranking(id, n).ok_or(MatchError::InvalidPreference {
        side,
        id,
        fault: PreferenceFault::Missing,
    })?;
    validate_ranking(side, id, n, &ranking)?;
    Ok(ranking)
}

// ============================================================================
// Unit Tests
// ============================================================================
