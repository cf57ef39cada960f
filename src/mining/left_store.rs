//! The left-store feedback mechanism.
//!
//! Every rule produced by a right merge has a *new* antecedent that is not
//! the key of any existing left equivalence class, so it would never be
//! left-expanded by the first pass. The left-store indexes those rules by
//! antecedent (bucketed further by antecedent size, mirroring the original
//! `defaultdict(lambda: defaultdict(list))`), so a third pass can
//! left-expand each bucket once right-expansion is complete.

use crate::types::{ItemSet, Rule};
use ahash::AHashMap;
use std::rc::Rc;

#[derive(Default)]
pub struct LeftStore {
    buckets: AHashMap<usize, AHashMap<ItemSet, Vec<Rc<Rule>>>>,
}

impl LeftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a right-merge product, keyed by its (new) antecedent.
    pub fn insert(&mut self, rule: Rc<Rule>) {
        self.buckets
            .entry(rule.antecedent.len())
            .or_default()
            .entry(rule.antecedent.clone())
            .or_default()
            .push(rule);
    }

    /// Buckets with at least two rules — only those can produce a left
    /// merge.
    pub fn expandable_buckets(&self) -> impl Iterator<Item = &Vec<Rc<Rule>>> {
        self.buckets
            .values()
            .flat_map(|by_antecedent| by_antecedent.values())
            .filter(|bucket| bucket.len() >= 2)
    }
}
