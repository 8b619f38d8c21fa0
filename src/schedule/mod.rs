//! Partition scheduling exercise.
//!
//! Independent of the matching engine. The numbers `1..=2n` are split into
//! two hands of n. Each hand is played out one card per round, and a round
//! goes to whichever hand played the higher card. Two ways of ordering the
//! hands are compared:
//!
//! - [`random_plan`]: both hands play in random order
//! - [`greedy_plan`]: the hand holding the top card plays it while the other
//!   hand throws away its lowest card
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use stable_match::schedule::{greedy_plan, score};
//!
//! let a: BTreeSet<u32> = [1, 4, 5].into();
//! let b: BTreeSet<u32> = [2, 3, 6].into();
//!
//! let (s1, s2) = greedy_plan(&a, &b);
//! let result = score(&s1, &s2);
//! assert_eq!(result.wins1(), 2);
//! ```

use std::collections::BTreeSet;

use rand::Rng;

/// Two equal-size hands drawn from `1..=2n`
pub type Partition = (BTreeSet<u32>, BTreeSet<u32>);

/// Every split of `1..=2n` into two hands of n.
///
/// Each split is listed once, with the hand holding `1` first. Empty for
/// `n == 0`.
pub fn partitions(n: u32) -> Vec<Partition> {
    if n == 0 {
        return Vec::new();
    }

    let universe: Vec<u32> = (1..=2 * n).collect();
    let mut out = Vec::new();
    let mut chosen = vec![1];
    choose(&universe[1..], (n - 1) as usize, &mut chosen, &mut |first: &[u32]| {
        let first: BTreeSet<u32> = first.iter().copied().collect();
        let second = universe
            .iter()
            .copied()
            .filter(|x| !first.contains(x))
            .collect();
        out.push((first, second));
    });
    out
}

fn choose(pool: &[u32], k: usize, chosen: &mut Vec<u32>, emit: &mut impl FnMut(&[u32])) {
    if k == 0 {
        emit(chosen.as_slice());
        return;
    }
    if pool.len() < k {
        return;
    }
    chosen.push(pool[0]);
    choose(&pool[1..], k - 1, chosen, emit);
    chosen.pop();
    choose(&pool[1..], k, chosen, emit);
}

/// Play both hands in random order.
///
/// Draws one card from each non-empty hand per round until both are empty.
pub fn random_plan<R: Rng + ?Sized>(
    a: &BTreeSet<u32>,
    b: &BTreeSet<u32>,
    rng: &mut R,
) -> (Vec<u32>, Vec<u32>) {
    let mut left: Vec<u32> = a.iter().copied().collect();
    let mut right: Vec<u32> = b.iter().copied().collect();
    let mut s1 = Vec::with_capacity(left.len());
    let mut s2 = Vec::with_capacity(right.len());

    while !left.is_empty() || !right.is_empty() {
        if !left.is_empty() {
            s1.push(left.swap_remove(rng.gen_range(0..left.len())));
        }
        if !right.is_empty() {
            s2.push(right.swap_remove(rng.gen_range(0..right.len())));
        }
    }
    (s1, s2)
}

/// Whoever holds the highest remaining card plays it; the other hand plays
/// its lowest card. Stops when either hand runs out.
pub fn greedy_plan(a: &BTreeSet<u32>, b: &BTreeSet<u32>) -> (Vec<u32>, Vec<u32>) {
    let mut left = a.clone();
    let mut right = b.clone();
    let mut s1 = Vec::with_capacity(left.len());
    let mut s2 = Vec::with_capacity(right.len());

    loop {
        let (Some(&top1), Some(&top2)) = (left.last(), right.last()) else {
            break;
        };
        let (winner, loser, win_sched, lose_sched) = if top1 > top2 {
            (&mut left, &mut right, &mut s1, &mut s2)
        } else {
            (&mut right, &mut left, &mut s2, &mut s1)
        };
        if let (Some(high), Some(low)) = (winner.pop_last(), loser.pop_first()) {
            win_sched.push(high);
            lose_sched.push(low);
        }
    }
    (s1, s2)
}

/// Round-by-round result of playing two schedules against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Round won by the first schedule
    pub rounds1: Vec<bool>,
    /// Round won by the second schedule
    pub rounds2: Vec<bool>,
}

impl Score {
    pub fn wins1(&self) -> usize {
        self.rounds1.iter().filter(|&&won| won).count()
    }

    pub fn wins2(&self) -> usize {
        self.rounds2.iter().filter(|&&won| won).count()
    }
}

/// Compare schedules round by round; extra rounds on the longer side are
/// ignored.
pub fn score(s1: &[u32], s2: &[u32]) -> Score {
    let (rounds1, rounds2) = s1.iter().zip(s2).map(|(x, y)| (x > y, x < y)).unzip();
    Score { rounds1, rounds2 }
}

/// Both plans scored for one partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanComparison {
    pub baseline: Score,
    pub greedy: Score,
}

pub fn compare<R: Rng + ?Sized>(partition: &Partition, rng: &mut R) -> PlanComparison {
    let (a, b) = partition;
    let (r1, r2) = random_plan(a, b, rng);
    let (g1, g2) = greedy_plan(a, b);
    PlanComparison {
        baseline: score(&r1, &r2),
        greedy: score(&g1, &g2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn set(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_partitions_count_and_shape() {
        assert!(partitions(0).is_empty());
        assert_eq!(partitions(1), vec![(set(&[1]), set(&[2]))]);

        // C(5, 2) splits with 1 pinned to the first hand
        let splits = partitions(3);
        assert_eq!(splits.len(), 10);
        for (a, b) in &splits {
            assert_eq!(a.len(), 3);
            assert_eq!(b.len(), 3);
            assert!(a.contains(&1));
            assert!(a.is_disjoint(b));
        }
    }

    #[test]
    fn test_greedy_plan() {
        let (s1, s2) = greedy_plan(&set(&[1, 4, 5]), &set(&[2, 3, 6]));
        assert_eq!(s1, vec![1, 5, 4]);
        assert_eq!(s2, vec![6, 2, 3]);

        let result = score(&s1, &s2);
        assert_eq!(result.rounds1, vec![false, true, true]);
        assert_eq!(result.wins1(), 2);
        assert_eq!(result.wins2(), 1);
    }

    #[test]
    fn test_random_plan_uses_every_card() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = set(&[1, 3, 6, 7]);
        let b = set(&[2, 4, 5, 8]);

        let (s1, s2) = random_plan(&a, &b, &mut rng);
        assert_eq!(s1.iter().copied().collect::<BTreeSet<_>>(), a);
        assert_eq!(s2.iter().copied().collect::<BTreeSet<_>>(), b);
    }

    #[test]
    fn test_compare_scores_every_round() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for partition in partitions(4) {
            let comparison = compare(&partition, &mut rng);
            let rounds = comparison.greedy.rounds1.len();
            assert_eq!(rounds, 4);
            assert_eq!(comparison.greedy.wins1() + comparison.greedy.wins2(), rounds);
        }
    }
}
