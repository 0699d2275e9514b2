use crate::equivalence::Equivalence;

/// Linear containment search: the index of the first element of `sequence`
/// equivalent to `item` under `eq`, or `None`.
///
/// Shares the comparer contract with the join and distinct engines, which
/// makes it a convenient oracle when exercising a custom comparer.
pub fn position_of<S, E>(sequence: S, item: &S::Item, eq: E) -> Option<usize>
where
    S: IntoIterator,
    E: Equivalence<S::Item>,
{
    sequence
        .into_iter()
        .position(|candidate| eq.equivalent(&candidate, item))
}
