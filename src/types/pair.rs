//! Participant side and matched pair types.
//!
//! ## SSZ Serialization
//!
//! `Pair` derives `SimpleSerialize` from ssz_rs so the final matching has a
//! single deterministic byte encoding:
//! - Basic types (u64): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields

use std::fmt;

use ssz_rs::prelude::*;

/// Sentinel stored in `Pair::partner_raw` for an unmatched participant.
pub const UNMATCHED: u64 = u64::MAX;

// ============================================================================
// Side enum
// ============================================================================

/// Which group a participant belongs to
///
/// Represented as u8 for SSZ compatibility:
/// - Proposer = 0
/// - Responder = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Works down its own ranking, making offers
    #[default]
    Proposer,
    /// Holds the best offer seen so far, rejecting the rest
    Responder,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Proposer => 0,
            Side::Responder => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Proposer),
            1 => Some(Side::Responder),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Responder => f.write_str("responder"),
        }
    }
}

// ============================================================================
// Pair struct
// ============================================================================

/// One participant and its final partner.
///
/// ## SSZ Layout
///
/// Fixed-size container of 17 bytes (1 + 8 + 8).
///
/// ## Example
///
/// ```
/// use stable_match::types::{Pair, Side};
///
/// let pair = Pair::new(Side::Proposer, 0, Some(2));
/// assert_eq!(pair.partner(), Some(2));
/// assert_eq!(pair.side(), Side::Proposer);
///
/// let single = Pair::new(Side::Responder, 1, None);
/// assert!(!single.is_matched());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Pair {
    /// Side of the participant as u8 (0=Proposer, 1=Responder)
    /// Stored as u8 for SSZ compatibility
    pub side_raw: u8,

    /// Participant id
    pub id: u64,

    /// Partner id, or `UNMATCHED`
    /// Stored raw for SSZ compatibility
    pub partner_raw: u64,
}

impl Pair {
    pub fn new(side: Side, id: usize, partner: Option<usize>) -> Self {
        Self {
            side_raw: side.to_u8(),
            id: id as u64,
            partner_raw: partner.map_or(UNMATCHED, |p| p as u64),
        }
    }

    /// Get the participant's side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or_default()
    }

    /// Get the partner id, if any
    pub fn partner(&self) -> Option<usize> {
        if self.partner_raw == UNMATCHED {
            None
        } else {
            Some(self.partner_raw as usize)
        }
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        self.partner_raw != UNMATCHED
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
