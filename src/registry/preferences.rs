//! Preference sources and ranking validation.
//!
//! The engine never generates preferences itself. Rankings come from a
//! [`PreferenceSource`], so tests can feed fixed fixtures while the binary
//! feeds seeded random shuffles. Either way every ranking passes through
//! [`validate_ranking`] before the registry accepts it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MatchError, PreferenceFault};
use crate::types::Side;

/// Supplies one side's rankings, one participant at a time.
pub trait PreferenceSource {
    /// Ranking of the opposite side's ids for participant `id`, most
    /// preferred first. `n` is the size of each side.
    fn ranking(&mut self, id: usize, n: usize) -> Option<Vec<usize>>;

    /// Number of rankings held, for sources backed by a finite table.
    /// Unbounded sources return `None`.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

impl<S: PreferenceSource + ?Sized> PreferenceSource for &mut S {
    fn ranking(&mut self, id: usize, n: usize) -> Option<Vec<usize>> {
        (**self).ranking(id, n)
    }

    fn len_hint(&self) -> Option<usize> {
        (**self).len_hint()
    }
}

// ============================================================================
// Fixed rankings
// ============================================================================

/// Rankings supplied up front, indexed by participant id.
///
/// ## Example
///
/// ```
/// use stable_match::registry::{FixedPreferences, PreferenceSource};
///
/// let mut source = FixedPreferences::new(vec![vec![1, 0], vec![0, 1]]);
/// assert_eq!(source.ranking(0, 2), Some(vec![1, 0]));
/// assert_eq!(source.ranking(2, 2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedPreferences {
    rankings: Vec<Vec<usize>>,
}

impl FixedPreferences {
    pub fn new(rankings: Vec<Vec<usize>>) -> Self {
        Self { rankings }
    }

    /// Number of rankings held
    #[inline]
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

impl PreferenceSource for FixedPreferences {
    fn ranking(&mut self, id: usize, _n: usize) -> Option<Vec<usize>> {
        self.rankings.get(id).cloned()
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

// ============================================================================
// Shuffled rankings
// ============================================================================

/// Uniformly shuffled rankings drawn from an injected RNG.
///
/// Seed the RNG (e.g. `ChaCha8Rng::seed_from_u64`) to get reproducible
/// profiles.
#[derive(Debug, Clone)]
pub struct ShuffledPreferences<R> {
    rng: R,
}

impl<R: Rng> ShuffledPreferences<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PreferenceSource for ShuffledPreferences<R> {
    fn ranking(&mut self, _id: usize, n: usize) -> Option<Vec<usize>> {
        let mut ranking: Vec<usize> = (0..n).collect();
        ranking.shuffle(&mut self.rng);
        Some(ranking)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check that `ranking` is a permutation of `0..n`.
///
/// `side` and `id` identify the owner of the ranking for the error.
pub fn validate_ranking(
    side: Side,
    id: usize,
    n: usize,
    ranking: &[usize],
) -> Result<(), MatchError> {
    let fault = |fault| MatchError::InvalidPreference { side, id, fault };

    if ranking.len() != n {
        return Err(fault(PreferenceFault::WrongLength {
            expected: n,
            actual: ranking.len(),
        }));
    }

    let mut seen = vec![false; n];
    for &entry in ranking {
        let slot = seen
            .get_mut(entry)
            .ok_or_else(|| fault(PreferenceFault::OutOfRange { entry }))?;
        if *slot {
            return Err(fault(PreferenceFault::Duplicate { entry }));
        }
        *slot = true;
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_validate_accepts_permutation() {
        assert!(validate_ranking(Side::Proposer, 0, 3, &[2, 0, 1]).is_ok());
        assert!(validate_ranking(Side::Proposer, 0, 0, &[]).is_ok());
    }

    #[test]
    fn test_validate_wrong_length() {
        let err = validate_ranking(Side::Responder, 1, 3, &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidPreference {
                side: Side::Responder,
                id: 1,
                fault: PreferenceFault::WrongLength { expected: 3, actual: 2 },
            }
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let err = validate_ranking(Side::Proposer, 2, 3, &[0, 1, 1]).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidPreference {
                fault: PreferenceFault::Duplicate { entry: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_validate_out_of_range() {
        let err = validate_ranking(Side::Proposer, 0, 3, &[0, 1, 3]).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidPreference {
                fault: PreferenceFault::OutOfRange { entry: 3 },
                ..
            }
        ));
    }

    #[test]
    fn test_shuffled_produces_permutations() {
        let mut source = ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(7));
        for id in 0..20 {
            let ranking = source.ranking(id, 10).expect("shuffle always yields");
            assert!(validate_ranking(Side::Proposer, id, 10, &ranking).is_ok());
        }
    }

    #[test]
    fn test_shuffled_is_seed_deterministic() {
        let mut a = ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(42));
        let mut b = ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(42));
        for id in 0..5 {
            assert_eq!(a.ranking(id, 8), b.ranking(id, 8));
        }
    }

    #[test]
    fn test_source_by_mut_ref() {
        fn first_ranking<S: PreferenceSource>(mut source: S) -> Option<Vec<usize>> {
            source.ranking(0, 1)
        }

        let mut fixed = FixedPreferences::new(vec![vec![0]]);
        assert_eq!(first_ranking(&mut fixed), Some(vec![0]));
        assert_eq!(fixed.len(), 1);
    }

    #[test]
    fn test_len_hint() {
        let mut fixed = FixedPreferences::new(vec![vec![0], vec![1, 0]]);
        assert_eq!(fixed.len_hint(), Some(2));
        assert_eq!((&mut fixed).len_hint(), Some(2));

        let shuffled = ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(1));
        assert_eq!(shuffled.len_hint(), None);
    }
}
