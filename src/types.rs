use ahash::AHashSet;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// A small non-negative integer item identifier.
pub type Item = u32;

/// An unordered set of items, used for both the antecedent and the
/// consequent of a rule. `BTreeSet` keeps items in their natural order so
/// `Display` output is deterministic.
pub type ItemSet = BTreeSet<Item>;

/// A set of sequence ids. Dense in `[0, N)`, stored as a hash set rather
/// than a bitset — see DESIGN.md for why either is acceptable.
pub type SidSet = AHashSet<u32>;

/// A discovered (or candidate) sequential rule `antecedent => consequent`
/// Once built a `Rule` is never mutated: `support_count`
/// and `confidence` are derived at construction time from `sids` and
/// `antecedent_sids`, the "fully immutable" alternative to a mutable
/// `confidence` field assigned late (see DESIGN.md).
///
/// `sids` and `antecedent_sids` are reference-counted because a rule may be
/// inherited unchanged by a chain of descendants (a left merge always
/// inherits its parent's `antecedent_sids` verbatim), and the same rule
/// value is referenced from up to four owning places at once: a left
/// equivalence class, a right equivalence class, the output list, and
/// (for right-merge products) a left-store bucket.
#[derive(Debug, Clone)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    pub sids: Rc<SidSet>,
    pub antecedent_sids: Rc<SidSet>,
    pub support_count: usize,
    pub confidence: f64,
}

impl Rule {
    pub fn new(
        antecedent: ItemSet,
        consequent: ItemSet,
        sids: Rc<SidSet>,
        antecedent_sids: Rc<SidSet>,
    ) -> Self {
        let support_count = sids.len();
        let confidence = if antecedent_sids.is_empty() {
            0.0
        } else {
            support_count as f64 / antecedent_sids.len() as f64
        };
        Self {
            antecedent,
            consequent,
            sids,
            antecedent_sids,
            support_count,
            confidence,
        }
    }

    /// Relative support: `support_count / n`.
    pub fn support(&self, n: usize) -> f64 {
        if n == 0 {
            0.0
        } else {
            self.support_count as f64 / n as f64
        }
    }
}

fn fmt_itemset(items: &ItemSet, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "}}")
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_itemset(&self.antecedent, f)?;
        write!(f, " => ")?;
        fmt_itemset(&self.consequent, f)?;
        write!(
            f,
            ", support={}, confidence={:.3}",
            self.support_count, self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sids(vals: &[u32]) -> Rc<SidSet> {
        Rc::new(vals.iter().copied().collect())
    }

    #[test]
    fn confidence_is_support_over_antecedent_sids() {
        let rule = Rule::new(
            ItemSet::from([1]),
            ItemSet::from([2]),
            sids(&[0, 1]),
            sids(&[0, 1, 2, 3]),
        );
        assert_eq!(rule.support_count, 2);
        assert!((rule.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn confidence_is_zero_when_antecedent_sids_empty() {
        let rule = Rule::new(ItemSet::from([1]), ItemSet::from([2]), sids(&[]), sids(&[]));
        assert_eq!(rule.confidence, 0.0);
    }

    #[test]
    fn display_matches_spec_format() {
        let rule = Rule::new(
            ItemSet::from([1]),
            ItemSet::from([2, 3]),
            sids(&[0, 1]),
            sids(&[0, 1]),
        );
        assert_eq!(format!("{}", rule), "{1} => {2, 3}, support=2, confidence=1.000");
    }
}
