//! The one-pass database index.
//!
//! For every item that survives minimum-support pruning: the set of sids
//! where it occurs, and its first/last occurrence position within each of
//! those sequences. Built once, read-only for the rest of the engine's
//! lifetime.

use crate::data_loader::Sequence;
use crate::types::{Item, SidSet};
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Per-item occurrence index over a sequence database.
pub struct Index {
    /// Number of retained (non-empty, non-comment) sequences.
    n: usize,
    /// `ceil(minsup * n)`, the minimum sid-set size for an item or rule to
    /// be considered frequent.
    min_sup_count: usize,
    sids: AHashMap<Item, SidSet>,
    first: AHashMap<Item, AHashMap<u32, u32>>,
    last: AHashMap<Item, AHashMap<u32, u32>>,
}

impl Index {
    /// Build the index from retained sequences, then discard every item
    /// whose sid-set is smaller than `ceil(minsup * n)`.
    pub fn build(sequences: &[Sequence], minsup: f64) -> Self {
        let n = sequences.len();
        let mut sids: AHashMap<Item, SidSet> = AHashMap::default();
        let mut first: AHashMap<Item, AHashMap<u32, u32>> = AHashMap::default();
        let mut last: AHashMap<Item, AHashMap<u32, u32>> = AHashMap::default();

        for (sid, sequence) in sequences.iter().enumerate() {
            let sid = sid as u32;
            for (j, itemset) in sequence.iter().enumerate() {
                let j = j as u32;
                for &item in itemset {
                    sids.entry(item).or_default().insert(sid);
                    last.entry(item).or_default().insert(sid, j);
                    first.entry(item).or_default().entry(sid).or_insert(j);
                }
            }
        }

        let min_sup_count = min_support_count(minsup, n);

        let infrequent: Vec<Item> = sids
            .iter()
            .filter(|(_, set)| set.len() < min_sup_count)
            .map(|(&item, _)| item)
            .collect();
        for item in infrequent {
            sids.remove(&item);
            first.remove(&item);
            last.remove(&item);
        }

        Self {
            n,
            min_sup_count,
            sids,
            first,
            last,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn min_sup_count(&self) -> usize {
        self.min_sup_count
    }

    /// The set of sids where `item` occurs, if it survived pruning.
    pub fn sids(&self, item: Item) -> Option<&SidSet> {
        self.sids.get(&item)
    }

    /// Smallest itemset index in sequence `sid` containing `item`.
    pub fn first(&self, item: Item, sid: u32) -> Option<u32> {
        self.first.get(&item)?.get(&sid).copied()
    }

    /// Largest itemset index in sequence `sid` containing `item`.
    pub fn last(&self, item: Item, sid: u32) -> Option<u32> {
        self.last.get(&item)?.get(&sid).copied()
    }

    /// Items that survived pruning, in ascending order (pair generation needs
    /// a deterministic iteration order over items).
    pub fn frequent_items(&self) -> BTreeSet<Item> {
        self.sids.keys().copied().collect()
    }
}

/// `ceil(minsup * n)`, computed without floating-point rounding surprises.
fn min_support_count(minsup: f64, n: usize) -> usize {
    (minsup * n as f64).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemSet;

    fn seq(itemsets: &[&[u32]]) -> Sequence {
        itemsets.iter().map(|s| s.iter().copied().collect()).collect()
    }

    #[test]
    fn builds_sids_first_last() {
        let sequences = vec![
            seq(&[&[1, 2]]),
            seq(&[&[3], &[1, 2]]),
            seq(&[&[1, 2]]),
        ];
        let index = Index::build(&sequences, 0.0);
        assert_eq!(index.n(), 3);
        assert_eq!(index.sids(1).unwrap().len(), 3);
        assert_eq!(index.first(1, 0), Some(0));
        assert_eq!(index.first(1, 1), Some(1));
        assert_eq!(index.last(1, 1), Some(1));
    }

    #[test]
    fn prunes_infrequent_items() {
        let sequences = vec![
            seq(&[&[1]]),
            seq(&[&[1]]),
            seq(&[&[1]]),
            seq(&[&[1]]),
            seq(&[&[1], &[3]]),
        ];
        // min_sup_count = ceil(0.5 * 5) = 3; item 3 occurs once.
        let index = Index::build(&sequences, 0.5);
        assert!(index.sids(1).is_some());
        assert!(index.sids(3).is_none());
    }

    #[test]
    fn last_takes_the_final_occurrence_first_takes_the_earliest() {
        let sequences = vec![seq(&[&[1], &[4], &[3], &[1]])];
        let index = Index::build(&sequences, 0.0);
        assert_eq!(index.first(1, 0), Some(0));
        assert_eq!(index.last(1, 0), Some(3));
    }

    #[test]
    fn frequent_items_are_sorted() {
        let sequences = vec![seq(&[&[3, 1, 2]])];
        let index = Index::build(&sequences, 0.0);
        let items: Vec<_> = index.frequent_items().into_iter().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_itemset_type_alias_still_usable() {
        let s: ItemSet = ItemSet::new();
        assert!(s.is_empty());
    }
}
