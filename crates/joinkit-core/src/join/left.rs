use crate::equivalence::Equivalence;

///
/// LeftJoin
///
/// Lazy left join: one output row per outer row, in outer enumeration
/// order. The inner side is buffered with its keys precomputed; each outer
/// row probes that buffer for the first key-equivalent entry.
///

pub struct LeftJoin<O, I, K, OK, F, E>
where
    O: Iterator,
{
    outer: O,
    inner: Vec<(K, I)>,
    outer_key: OK,
    select: F,
    eq: E,
}

/// Left join `outer` against `inner` under `eq`.
///
/// Produces exactly one row per outer element. An outer row with no
/// key-equivalent inner row reaches `select` with `None` on the inner side.
pub fn left_join<OS, IS, K, T, OK, IK, F, E>(
    outer: OS,
    inner: IS,
    outer_key: OK,
    mut inner_key: IK,
    select: F,
    eq: E,
) -> LeftJoin<OS::IntoIter, IS::Item, K, OK, F, E>
where
    OS: IntoIterator,
    IS: IntoIterator,
    IS::Item: Clone,
    OK: FnMut(&OS::Item) -> K,
    IK: FnMut(&IS::Item) -> K,
    F: FnMut(OS::Item, Option<IS::Item>) -> T,
    E: Equivalence<K>,
{
    let inner = inner
        .into_iter()
        .map(|item| {
            let key = inner_key(&item);
            (key, item)
        })
        .collect();

    LeftJoin {
        outer: outer.into_iter(),
        inner,
        outer_key,
        select,
        eq,
    }
}

impl<O, I, K, T, OK, F, E> Iterator for LeftJoin<O, I, K, OK, F, E>
where
    O: Iterator,
    I: Clone,
    OK: FnMut(&O::Item) -> K,
    F: FnMut(O::Item, Option<I>) -> T,
    E: Equivalence<K>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let row = self.outer.next()?;
        let key = (self.outer_key)(&row);
        let matched = self
            .inner
            .iter()
            .find(|(inner_key, _)| self.eq.equivalent(&key, inner_key))
            .map(|(_, item)| item.clone());

        Some((self.select)(row, matched))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // exact: one output row per remaining outer row
        self.outer.size_hint()
    }
}
