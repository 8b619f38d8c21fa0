//! Participant registry for the stable matching engine.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: one slab per side, keyed by participant id
//! - **Index links**: partners are stored as ids, never as references
//! - **Injectable rankings**: preferences arrive through [`PreferenceSource`]
//!
//! ## Components
//!
//! - [`Proposer`]: ranking with a forward-only cursor and a partner link
//! - [`Responder`]: ranking with its inverse rank table and a partner link
//! - [`Registry`]: owner of both sides
//! - [`FixedPreferences`] / [`ShuffledPreferences`]: ranking sources
//!
//! ## Example
//!
//! ```
//! use stable_match::registry::Registry;
//!
//! let mut registry = Registry::from_profile(
//!     vec![vec![0, 1], vec![0, 1]],
//!     vec![vec![1, 0], vec![0, 1]],
//! ).unwrap();
//!
//! let offer = registry.next_offer(0).unwrap();
//! registry.set_partners(0, offer);
//! assert_eq!(registry.responder(0).unwrap().partner(), Some(0));
//! ```

pub mod preferences;
pub mod participants;

pub use preferences::{validate_ranking, FixedPreferences, PreferenceSource, ShuffledPreferences};
pub use participants::{create_proposers, create_responders, Proposer, Registry, Responder};
