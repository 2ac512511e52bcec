//! Adjacent pair counting.
//!
//! The ranking orders pairs by descending count. Pairs with equal counts keep
//! the order in which they were first seen scanning left to right, so the
//! winner of a tie is always the pair that shows up earliest in the sequence.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::slice;

/// Two adjacent symbol ids.
pub type Pair = (u32, u32);

/// Pair frequencies of one sequence, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRanking {
    ranked: Vec<(Pair, u64)>,
    total: usize,
}

impl PairRanking {
    /// The pair to merge next, with its count.
    pub fn top(&self) -> Option<(Pair, u64)> {
        self.ranked.first().copied()
    }

    pub fn count(&self, pair: Pair) -> u64 {
        self.ranked
            .iter()
            .find(|(p, _)| *p == pair)
            .map_or(0, |&(_, count)| count)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Number of adjacent positions scanned (sequence length - 1).
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> slice::Iter<'_, (Pair, u64)> {
        self.ranked.iter()
    }
}

impl<'a> IntoIterator for &'a PairRanking {
    type Item = &'a (Pair, u64);
    type IntoIter = slice::Iter<'a, (Pair, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every adjacent pair of `ids`, left to right.
pub fn adjacent_pairs(ids: &[u32]) -> impl Iterator<Item = Pair> + '_ {
    ids.windows(2).map(|w| (w[0], w[1]))
}

pub fn count_pairs(ids: &[u32]) -> PairRanking {
    // Counts are kept in first-seen order; the map only locates a pair's slot.
    let mut slots: HashMap<Pair, usize> = HashMap::new();
    let mut ranked: Vec<(Pair, u64)> = Vec::new();

    for pair in adjacent_pairs(ids) {
        match slots.entry(pair) {
            Entry::Occupied(slot) => ranked[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(ranked.len());
                ranked.push((pair, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    PairRanking {
        ranked,
        total: ids.len().saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pairs_basic() {
        let ranking = count_pairs(&[1, 2, 1, 2, 3]);
        assert_eq!(ranking.total(), 4);
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.top(), Some(((1, 2), 2)));
        assert_eq!(ranking.count((2, 1)), 1);
        assert_eq!(ranking.count((2, 3)), 1);
        assert_eq!(ranking.count((3, 1)), 0);
    }

    #[test]
    fn test_short_sequences_have_no_pairs() {
        assert!(count_pairs(&[]).is_empty());
        assert!(count_pairs(&[42]).is_empty());
        assert_eq!(count_pairs(&[42]).top(), None);
        assert_eq!(count_pairs(&[]).total(), 0);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        // (5, 6) and (1, 2) both occur twice; (5, 6) shows up first.
        let ranking = count_pairs(&[5, 6, 5, 6, 1, 2, 1, 2]);
        assert_eq!(ranking.top(), Some(((5, 6), 2)));

        let ranking = count_pairs(&[1, 2, 1, 2, 5, 6, 5, 6]);
        assert_eq!(ranking.top(), Some(((1, 2), 2)));
    }

    #[test]
    fn test_ranking_order() {
        // c,d,c,d,a,b,a,b,a,b -> (a,b):3, then (c,d):2 before (b,a):2,
        // then the singles in scan order
        let ids = [99, 100, 99, 100, 97, 98, 97, 98, 97, 98];
        let ranked: Vec<Pair> = count_pairs(&ids).iter().map(|&(p, _)| p).collect();
        assert_eq!(
            ranked,
            vec![(97, 98), (99, 100), (98, 97), (100, 99), (100, 97)]
        );
    }

    #[test]
    fn test_overlapping_runs_are_counted_per_position() {
        // a,a,a has two (a,a) positions even though only one can merge.
        let ranking = count_pairs(&[97, 97, 97]);
        assert_eq!(ranking.top(), Some(((97, 97), 2)));
    }

    #[test]
    fn test_counts_sum_to_total() {
        let ids = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let ranking = count_pairs(&ids);
        let sum: u64 = ranking.iter().map(|&(_, c)| c).sum();
        assert_eq!(sum as usize, ranking.total());
        assert_eq!(adjacent_pairs(&ids).count(), ids.len() - 1);
    }
}
