//! Equivalence seam shared by every operation in the engine.
//!
//! Callers that say nothing pass [`DefaultEquivalence`] and get the element
//! type's own `PartialEq`; callers that need looser matching wrap a closure
//! with [`predicate`]. The engine never validates that a supplied relation
//! is reflexive, symmetric, or transitive; a comparer that is not all three
//! makes result order and content unspecified.

///
/// Equivalence
///
/// Binary equivalence relation over `T`, probed once per candidate pair
/// during join matching, deduplication, and containment search.
///

pub trait Equivalence<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

///
/// DefaultEquivalence
///
/// The comparer used when the caller supplies none: the type's own
/// structural equality.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultEquivalence;

impl<T> Equivalence<T> for DefaultEquivalence
where
    T: PartialEq + ?Sized,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

///
/// Predicate
///
/// Adapter carrying a caller-supplied binary predicate as an `Equivalence`.
///

#[derive(Clone, Copy, Debug)]
pub struct Predicate<F>(F);

/// Wrap a bare `|a, b| ...` predicate for use anywhere an `Equivalence` is
/// expected.
pub const fn predicate<F>(f: F) -> Predicate<F> {
    Predicate(f)
}

impl<T, F> Equivalence<T> for Predicate<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
