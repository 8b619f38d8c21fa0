//! Final matching extracted from the registry.
//!
//! A `Matching` is a read-only snapshot: partner vectors for both sides,
//! indexed by id. It exposes the ordered `(id, partner)` lists, diagnostics
//! for unmatched participants and the SSZ state root used to compare runs.

use std::fmt;

use crate::error::MatchError;
use crate::registry::Registry;
use crate::types::{MatchReceipt, Pair, Side};

/// Partner of every proposer and every responder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    proposers: Vec<Option<usize>>,
    responders: Vec<Option<usize>>,
}

impl Matching {
    /// Snapshot the partner links currently held in `registry`
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            proposers: registry.proposers().map(|p| p.partner()).collect(),
            responders: registry.responders().map(|r| r.partner()).collect(),
        }
    }

    /// Number of participants per side
    #[inline]
    pub fn len(&self) -> usize {
        self.proposers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.proposers.is_empty()
    }

    pub fn partner_of_proposer(&self, proposer: usize) -> Option<usize> {
        self.proposers.get(proposer).copied().flatten()
    }

    pub fn partner_of_responder(&self, responder: usize) -> Option<usize> {
        self.responders.get(responder).copied().flatten()
    }

    /// `(proposer, partner)` in ascending proposer id
    pub fn proposer_pairs(&self) -> Vec<(usize, Option<usize>)> {
        self.proposers.iter().copied().enumerate().collect()
    }

    /// `(responder, partner)` in ascending responder id
    pub fn responder_pairs(&self) -> Vec<(usize, Option<usize>)> {
        self.responders.iter().copied().enumerate().collect()
    }

    pub fn unmatched_proposers(&self) -> usize {
        self.proposers.iter().filter(|p| p.is_none()).count()
    }

    pub fn unmatched_responders(&self) -> usize {
        self.responders.iter().filter(|r| r.is_none()).count()
    }

    /// Every participant on both sides has a partner
    pub fn is_complete(&self) -> bool {
        self.unmatched_proposers() == 0 && self.unmatched_responders() == 0
    }

    /// Surface unmatched proposers as an error instead of a silent count
    pub fn ensure_complete(&self) -> Result<(), MatchError> {
        match self.unmatched_proposers() {
            0 => Ok(()),
            unmatched => Err(MatchError::Incomplete { unmatched }),
        }
    }

    /// The two partner maps are inverses of each other
    pub fn is_mutually_consistent(&self) -> bool {
        let forward = self.proposers.iter().enumerate().all(|(p, partner)| match *partner {
            Some(r) => self.partner_of_responder(r) == Some(p),
            None => true,
        });
        let backward = self.responders.iter().enumerate().all(|(r, partner)| match *partner {
            Some(p) => self.partner_of_proposer(p) == Some(r),
            None => true,
        });
        forward && backward
    }

    /// One side as SSZ-encodable pairs, in ascending id
    pub fn to_pairs(&self, side: Side) -> Vec<Pair> {
        let partners = match side {
            Side::Proposer => &self.proposers,
            Side::Responder => &self.responders,
        };
        partners
            .iter()
            .enumerate()
            .map(|(id, &partner)| Pair::new(side, id, partner))
            .collect()
    }

    /// SHA-256 over the SSZ encoding of every proposer pair followed by
    /// every responder pair. Each pair carries its side byte.
    pub fn state_root(&self) -> Result<[u8; 32], MatchError> {
        let mut bytes = Vec::with_capacity(self.len() * 32);
        for side in [Side::Proposer, Side::Responder] {
            for pair in self.to_pairs(side) {
                let encoded = ssz_rs::serialize(&pair)
                    .map_err(|e| MatchError::Encoding(format!("{e:?}")))?;
                bytes.extend_from_slice(&encoded);
            }
        }
        Ok(MatchReceipt::compute_hash(&bytes))
    }
}

/// Two lines, proposers then responders: `0:1 - 1:0 - 2:2`
impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.proposers)?;
        writeln!(f)?;
        write_side(f, &self.responders)
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, partners: &[Option<usize>]) -> fmt::Result {
    for (id, partner) in partners.iter().enumerate() {
        if id > 0 {
            f.write_str(" - ")?;
        }
        match partner {
            Some(p) => write!(f, "{id}:{p}")?,
            None => write!(f, "{id}:none")?,
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
