//! Deduplication over lazy sequences.
//!
//! Two adapters with one contract: order-preserving first occurrences.
//! [`DistinctBy`] takes a caller-supplied comparer, and that comparer IS the
//! criterion used to decide "already seen" — it never falls back to
//! structural equality behind the caller's back. [`Distinct`] is the
//! default-equality path and may therefore use a hash set.
//!
//! Both are restartable only from scratch: re-enumerating means re-running
//! the whole filtering pass against a fresh seen-set.

use crate::equivalence::Equivalence;
use std::{collections::HashSet, hash::Hash};

///
/// DistinctBy
///
/// Lazy first-occurrence filter under a caller-supplied equivalence.
/// The seen-buffer is probed linearly with that equivalence, so the cost is
/// O(n · d) for d distinct elements — the price of honoring comparers that
/// carry no usable hash.
///

pub struct DistinctBy<I, E>
where
    I: Iterator,
{
    iter: I,
    seen: Vec<I::Item>,
    eq: E,
}

/// Filter `sequence` down to first occurrences under `eq`.
pub fn distinct_by<S, E>(sequence: S, eq: E) -> DistinctBy<S::IntoIter, E>
where
    S: IntoIterator,
    S::Item: Clone,
    E: Equivalence<S::Item>,
{
    DistinctBy {
        iter: sequence.into_iter(),
        seen: Vec::new(),
        eq,
    }
}

impl<I, E> Iterator for DistinctBy<I, E>
where
    I: Iterator,
    I::Item: Clone,
    E: Equivalence<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self
                .seen
                .iter()
                .any(|seen| self.eq.equivalent(seen, &item))
            {
                continue;
            }

            self.seen.push(item.clone());
            return Some(item);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        // every remaining element may be a duplicate
        (0, upper)
    }
}

///
/// Distinct
///
/// Lazy first-occurrence filter under the element type's own equality,
/// backed by a hash set.
///

pub struct Distinct<I>
where
    I: Iterator,
{
    iter: I,
    seen: HashSet<I::Item>,
}

/// Filter `sequence` down to first occurrences under its own `Eq`.
pub fn distinct<S>(sequence: S) -> Distinct<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + Eq + Hash,
{
    Distinct {
        iter: sequence.into_iter(),
        seen: HashSet::new(),
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Clone + Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::predicate;

    #[test]
    fn distinct_keeps_first_occurrences_in_order() {
        let out: Vec<i32> = distinct(vec![1, 1, 2, 3, 3, 3]).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn distinct_on_empty_is_empty() {
        let out: Vec<i32> = distinct(Vec::new()).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn distinct_by_uses_the_supplied_comparer() {
        // casefold equivalence: "Ada" and "ADA" are the same element
        let words = vec!["Ada", "ADA", "lovelace", "Lovelace", "ada"];
        let out: Vec<&str> =
            distinct_by(words, predicate(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b)))
                .collect();
        assert_eq!(out, vec!["Ada", "lovelace"]);
    }

    #[test]
    fn distinct_by_always_false_predicate_is_identity() {
        let input = vec![1, 1, 2, 2];
        let out: Vec<i32> = distinct_by(input.clone(), predicate(|_: &i32, _: &i32| false))
            .collect();
        assert_eq!(out, input);
    }

    #[test]
    fn distinct_by_is_lazy() {
        // an infinite source still yields its first element on demand
        let mut filtered = distinct_by(std::iter::repeat(7), predicate(|a: &i32, b: &i32| a == b));
        assert_eq!(filtered.next(), Some(7));
    }

    mod properties {
        use super::super::*;
        use crate::equivalence::DefaultEquivalence;
        use proptest::prelude::*;

        fn arb_sequence() -> impl Strategy<Value = Vec<i32>> {
            prop::collection::vec(0..8i32, 0..24)
        }

        proptest! {
            #[test]
            fn distinct_by_is_idempotent(sequence in arb_sequence()) {
                let once: Vec<i32> =
                    distinct_by(sequence, DefaultEquivalence).collect();
                let twice: Vec<i32> =
                    distinct_by(once.clone(), DefaultEquivalence).collect();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn distinct_matches_distinct_by_under_default_equality(
                sequence in arb_sequence(),
            ) {
                let hashed: Vec<i32> = distinct(sequence.clone()).collect();
                let scanned: Vec<i32> =
                    distinct_by(sequence, DefaultEquivalence).collect();
                prop_assert_eq!(hashed, scanned);
            }

            #[test]
            fn output_never_repeats_an_element(sequence in arb_sequence()) {
                let out: Vec<i32> = distinct(sequence).collect();
                for (n, value) in out.iter().enumerate() {
                    prop_assert!(!out[n + 1..].contains(value));
                }
            }
        }
    }
}
