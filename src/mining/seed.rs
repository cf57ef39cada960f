//! The seed generator: size 1x1 rules.
//!
//! For every unordered pair of frequent items `{i, j}` with `i < j`, finds
//! the sequences where the temporal predicate holds in each direction and
//! builds the two candidate rules `{i} => {j}` and `{j} => {i}`.

use crate::index::Index;
use crate::types::{Item, ItemSet, Rule, SidSet};
use ahash::AHashMap;
use std::rc::Rc;

/// Rules keyed by a shared antecedent or consequent itemset.
pub type EquivalenceClass = AHashMap<ItemSet, Vec<Rc<Rule>>>;

pub struct SeedResult {
    pub left_equivalence: EquivalenceClass,
    pub right_equivalence: EquivalenceClass,
}

pub fn generate_seeds(index: &Index, minconf: f64, rules: &mut Vec<Rc<Rule>>) -> SeedResult {
    let mut left_equivalence: EquivalenceClass = AHashMap::default();
    let mut right_equivalence: EquivalenceClass = AHashMap::default();

    let items: Vec<Item> = index.frequent_items().into_iter().collect();
    for (pos, &i) in items.iter().enumerate() {
        for &j in &items[pos + 1..] {
            let sids_i = index.sids(i).expect("frequent item has a sid set");
            let sids_j = index.sids(j).expect("frequent item has a sid set");
            let common: SidSet = sids_i.intersection(sids_j).copied().collect();
            if common.len() < index.min_sup_count() {
                continue;
            }

            let (sids_ij, sids_ji) = split_by_direction(index, &common, i, j);

            install_seed(
                index,
                i,
                j,
                sids_ij,
                minconf,
                &mut left_equivalence,
                &mut right_equivalence,
                rules,
            );
            install_seed(
                index,
                j,
                i,
                sids_ji,
                minconf,
                &mut left_equivalence,
                &mut right_equivalence,
                rules,
            );
        }
    }

    SeedResult {
        left_equivalence,
        right_equivalence,
    }
}

/// Partition `common` sids into those where `i => j` holds temporally and
/// those where `j => i` holds — not disjoint in general,
/// computed in one pass as required.
fn split_by_direction(
    index: &Index,
    common: &SidSet,
    i: Item,
    j: Item,
) -> (SidSet, SidSet) {
    let mut sids_ij = SidSet::default();
    let mut sids_ji = SidSet::default();
    for &sid in common {
        let first_i = index.first(i, sid).expect("i occurs in sid");
        let last_i = index.last(i, sid).expect("i occurs in sid");
        let first_j = index.first(j, sid).expect("j occurs in sid");
        let last_j = index.last(j, sid).expect("j occurs in sid");
        if first_i < last_j {
            sids_ij.insert(sid);
        }
        if first_j < last_i {
            sids_ji.insert(sid);
        }
    }
    (sids_ij, sids_ji)
}

#[allow(clippy::too_many_arguments)]
fn install_seed(
    index: &Index,
    antecedent_item: Item,
    consequent_item: Item,
    sids: SidSet,
    minconf: f64,
    left_equivalence: &mut EquivalenceClass,
    right_equivalence: &mut EquivalenceClass,
    rules: &mut Vec<Rc<Rule>>,
) {
    if sids.len() < index.min_sup_count() {
        return;
    }
    let antecedent_sids = Rc::new(
        index
            .sids(antecedent_item)
            .expect("frequent item has a sid set")
            .clone(),
    );
    let rule = Rc::new(Rule::new(
        ItemSet::from([antecedent_item]),
        ItemSet::from([consequent_item]),
        Rc::new(sids),
        antecedent_sids,
    ));

    left_equivalence
        .entry(rule.antecedent.clone())
        .or_default()
        .push(Rc::clone(&rule));
    right_equivalence
        .entry(rule.consequent.clone())
        .or_default()
        .push(Rc::clone(&rule));

    if rule.confidence >= minconf {
        rules.push(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::Sequence;

    fn seq(itemsets: &[&[u32]]) -> Sequence {
        itemsets.iter().map(|s| s.iter().copied().collect()).collect()
    }

    #[test]
    fn seeds_both_directions_when_temporally_valid() {
        // seq0: 1 before 2, seq1: 2 before 1
        let sequences = vec![seq(&[&[1], &[2]]), seq(&[&[2], &[1]])];
        let index = Index::build(&sequences, 0.0);
        let mut rules = Vec::new();
        let seeds = generate_seeds(&index, 0.0, &mut rules);

        assert_eq!(rules.len(), 2);
        assert!(rules.iter().any(|r| r.antecedent == ItemSet::from([1])
            && r.consequent == ItemSet::from([2])));
        assert!(rules.iter().any(|r| r.antecedent == ItemSet::from([2])
            && r.consequent == ItemSet::from([1])));
        assert_eq!(seeds.left_equivalence.len(), 2);
        assert_eq!(seeds.right_equivalence.len(), 2);
    }

    #[test]
    fn skips_pair_below_minsup() {
        let sequences = vec![
            seq(&[&[1], &[2]]),
            seq(&[&[3]]),
            seq(&[&[3]]),
            seq(&[&[3]]),
        ];
        // min_sup_count = ceil(0.5 * 4) = 2; common(1,2) has size 1.
        let index = Index::build(&sequences, 0.5);
        let mut rules = Vec::new();
        let seeds = generate_seeds(&index, 0.0, &mut rules);
        assert!(rules.is_empty());
        assert!(seeds.left_equivalence.is_empty());
    }

    #[test]
    fn same_itemset_order_does_not_satisfy_strict_precedence() {
        // item 1 and 2 always co-occur in the same itemset: first == last,
        // never strictly less, so neither direction is valid.
        let sequences = vec![seq(&[&[1, 2]]), seq(&[&[1, 2]])];
        let index = Index::build(&sequences, 0.0);
        let mut rules = Vec::new();
        let seeds = generate_seeds(&index, 0.0, &mut rules);
        assert!(rules.is_empty());
        assert!(seeds.left_equivalence.is_empty());
        assert!(seeds.right_equivalence.is_empty());
    }
}
