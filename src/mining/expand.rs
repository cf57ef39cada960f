//! The equivalence expander: recursively merges
//! pairs of rules from the same left- or right-equivalence class into
//! larger rules, gated by support and emitted when confident.
//!
//! Both directions share one recursion schema: for a class `[r_0, ..., r_{k-1}]`, pivot on `r_i`, merge it
//! against every `r_j` with `j > i` into a child list, then recurse on the
//! child. Pairs are merged at most once because the outer loop fixes
//! `r_i < r_j` by list position.

use super::left_store::LeftStore;
use crate::types::{Rule, SidSet};
use std::rc::Rc;

/// Left-expand every rule in `class` (and everything derived from it),
/// appending any rule meeting `minconf` to `rules`.
pub fn left_search(class: &[Rc<Rule>], min_sup_count: usize, minconf: f64, rules: &mut Vec<Rc<Rule>>) {
    for i in 0..class.len() {
        let mut child = Vec::new();
        for r in &class[i + 1..] {
            if let Some(merged) = left_merge(&class[i], r, min_sup_count, minconf, rules) {
                child.push(merged);
            }
        }
        left_search(&child, min_sup_count, minconf, rules);
    }
}

/// Merge two rules sharing an antecedent into `antecedent => cs ∪ cr`
/// (consequent grows, antecedent sids are inherited unchanged).
fn left_merge(
    rule_s: &Rc<Rule>,
    rule_r: &Rc<Rule>,
    min_sup_count: usize,
    minconf: f64,
    rules: &mut Vec<Rc<Rule>>,
) -> Option<Rc<Rule>> {
    let sids_new: SidSet = rule_s.sids.intersection(&rule_r.sids).copied().collect();
    if sids_new.len() < min_sup_count {
        return None;
    }

    let mut consequent = rule_s.consequent.clone();
    consequent.extend(rule_r.consequent.iter().copied());

    let merged = Rc::new(Rule::new(
        rule_s.antecedent.clone(),
        consequent,
        Rc::new(sids_new),
        Rc::clone(&rule_s.antecedent_sids),
    ));

    if merged.confidence >= minconf {
        rules.push(Rc::clone(&merged));
    }
    Some(merged)
}

/// Right-expand every rule in `class`, appending right-merge products to
/// `left_store` (they carry a new antecedent, not present in any existing
/// left class).
pub fn right_search(
    class: &[Rc<Rule>],
    min_sup_count: usize,
    minconf: f64,
    rules: &mut Vec<Rc<Rule>>,
    left_store: &mut LeftStore,
) {
    for i in 0..class.len() {
        let mut child = Vec::new();
        for r in &class[i + 1..] {
            if let Some(merged) =
                right_merge(&class[i], r, min_sup_count, minconf, rules, left_store)
            {
                child.push(merged);
            }
        }
        right_search(&child, min_sup_count, minconf, rules, left_store);
    }
}

/// Merge two rules sharing a consequent into `as ∪ ar => consequent`
/// (antecedent grows, antecedent sids are re-intersected).
fn right_merge(
    rule_s: &Rc<Rule>,
    rule_r: &Rc<Rule>,
    min_sup_count: usize,
    minconf: f64,
    rules: &mut Vec<Rc<Rule>>,
    left_store: &mut LeftStore,
) -> Option<Rc<Rule>> {
    let sids_new: SidSet = rule_s.sids.intersection(&rule_r.sids).copied().collect();
    if sids_new.len() < min_sup_count {
        return None;
    }

    let antecedent_sids_new: SidSet = rule_s
        .antecedent_sids
        .intersection(&rule_r.antecedent_sids)
        .copied()
        .collect();

    let mut antecedent = rule_s.antecedent.clone();
    antecedent.extend(rule_r.antecedent.iter().copied());

    let merged = Rc::new(Rule::new(
        antecedent,
        rule_s.consequent.clone(),
        Rc::new(sids_new),
        Rc::new(antecedent_sids_new),
    ));

    if merged.confidence >= minconf {
        rules.push(Rc::clone(&merged));
    }
    left_store.insert(Rc::clone(&merged));
    Some(merged)
}
