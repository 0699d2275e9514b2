use crate::{
    equivalence::Equivalence,
    join::{left_join, right_join},
    rows::Rows,
};

/// Full outer join `outer` against `inner` under `eq`.
///
/// Computed as the left-join rows followed by every right-join row not
/// already present, where "already present" is equality of the projected
/// result, not of the join key. Left-driven rows keep outer order;
/// right-only rows follow in inner order.
///
/// Both sides are materialized up front: each feeds one pass as the driving
/// side and one pass as the probe buffer.
pub fn outer_join<OS, IS, K, T, OK, IK, F, E>(
    outer: OS,
    inner: IS,
    mut outer_key: OK,
    mut inner_key: IK,
    mut select: F,
    eq: E,
) -> Rows<T>
where
    OS: IntoIterator,
    OS::Item: Clone,
    IS: IntoIterator,
    IS::Item: Clone,
    OK: FnMut(&OS::Item) -> K,
    IK: FnMut(&IS::Item) -> K,
    F: FnMut(Option<OS::Item>, Option<IS::Item>) -> T,
    T: PartialEq,
    E: Equivalence<K> + Clone,
{
    let outer: Vec<OS::Item> = outer.into_iter().collect();
    let inner: Vec<IS::Item> = inner.into_iter().collect();

    let mut rows: Vec<T> = left_join(
        outer.iter().cloned(),
        inner.iter().cloned(),
        &mut outer_key,
        &mut inner_key,
        |o, i| select(Some(o), i),
        eq.clone(),
    )
    .collect();

    let right = right_join(
        outer,
        inner,
        &mut outer_key,
        &mut inner_key,
        |o, i| select(o, Some(i)),
        eq,
    );

    for row in right {
        if !rows.contains(&row) {
            rows.push(row);
        }
    }

    Rows::new(rows)
}
