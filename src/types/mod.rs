//! Core data types for the stable matching engine
//!
//! ## Types
//!
//! - [`Side`]: Proposer or Responder
//! - [`Pair`]: A participant and its final partner (SSZ-encoded)
//! - [`ProposalEvent`]: Outcome of one driver iteration
//! - [`MatchReceipt`]: Run summary with the matching's state root

mod pair;
mod event;
mod receipt;

pub use pair::{Pair, Side, UNMATCHED};
pub use event::ProposalEvent;
pub use receipt::MatchReceipt;
