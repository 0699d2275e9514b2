use crate::equivalence::Equivalence;

///
/// RightJoin
///
/// Lazy right join: one output row per inner row, in inner enumeration
/// order. The outer side is buffered with its keys precomputed; each inner
/// row probes that buffer for the first key-equivalent entry.
///

pub struct RightJoin<I, O, K, IK, F, E>
where
    I: Iterator,
{
    inner: I,
    outer: Vec<(K, O)>,
    inner_key: IK,
    select: F,
    eq: E,
}

/// Right join `outer` against `inner` under `eq`.
///
/// Produces exactly one row per inner element. An inner row with no
/// key-equivalent outer row reaches `select` with `None` on the outer side.
pub fn right_join<OS, IS, K, T, OK, IK, F, E>(
    outer: OS,
    inner: IS,
    mut outer_key: OK,
    inner_key: IK,
    select: F,
    eq: E,
) -> RightJoin<IS::IntoIter, OS::Item, K, IK, F, E>
where
    OS: IntoIterator,
    IS: IntoIterator,
    OS::Item: Clone,
    OK: FnMut(&OS::Item) -> K,
    IK: FnMut(&IS::Item) -> K,
    F: FnMut(Option<OS::Item>, IS::Item) -> T,
    E: Equivalence<K>,
{
    let outer = outer
        .into_iter()
        .map(|item| {
            let key = outer_key(&item);
            (key, item)
        })
        .collect();

    RightJoin {
        inner: inner.into_iter(),
        outer,
        inner_key,
        select,
        eq,
    }
}

impl<I, O, K, T, IK, F, E> Iterator for RightJoin<I, O, K, IK, F, E>
where
    I: Iterator,
    O: Clone,
    IK: FnMut(&I::Item) -> K,
    F: FnMut(Option<O>, I::Item) -> T,
    E: Equivalence<K>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let row = self.inner.next()?;
        let key = (self.inner_key)(&row);
        let matched = self
            .outer
            .iter()
            .find(|(outer_key, _)| self.eq.equivalent(outer_key, &key))
            .map(|(_, item)| item.clone());

        Some((self.select)(matched, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // exact: one output row per remaining inner row
        self.inner.size_hint()
    }
}
