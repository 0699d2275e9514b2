use crate::{
    distinct::{Distinct, DistinctBy, distinct, distinct_by},
    equivalence::Equivalence,
    join::{LeftJoin, RightJoin, left_join, outer_join, right_join},
    position::position_of,
    rows::Rows,
};
use std::hash::Hash;

///
/// SequenceExt
///
/// Method-call sugar over the free functions, for pipelines that read
/// left-to-right. Every method delegates; the free functions stay the single
/// source of semantics.
///

pub trait SequenceExt: Iterator + Sized {
    /// See [`left_join`].
    fn left_join_on<IS, K, T, OK, IK, F, E>(
        self,
        inner: IS,
        outer_key: OK,
        inner_key: IK,
        select: F,
        eq: E,
    ) -> LeftJoin<Self, IS::Item, K, OK, F, E>
    where
        IS: IntoIterator,
        IS::Item: Clone,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&IS::Item) -> K,
        F: FnMut(Self::Item, Option<IS::Item>) -> T,
        E: Equivalence<K>,
    {
        left_join(self, inner, outer_key, inner_key, select, eq)
    }

    /// See [`right_join`].
    fn right_join_on<IS, K, T, OK, IK, F, E>(
        self,
        inner: IS,
        outer_key: OK,
        inner_key: IK,
        select: F,
        eq: E,
    ) -> RightJoin<IS::IntoIter, Self::Item, K, IK, F, E>
    where
        IS: IntoIterator,
        Self::Item: Clone,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&IS::Item) -> K,
        F: FnMut(Option<Self::Item>, IS::Item) -> T,
        E: Equivalence<K>,
    {
        right_join(self, inner, outer_key, inner_key, select, eq)
    }

    /// See [`outer_join`].
    fn outer_join_on<IS, K, T, OK, IK, F, E>(
        self,
        inner: IS,
        outer_key: OK,
        inner_key: IK,
        select: F,
        eq: E,
    ) -> Rows<T>
    where
        Self::Item: Clone,
        IS: IntoIterator,
        IS::Item: Clone,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&IS::Item) -> K,
        F: FnMut(Option<Self::Item>, Option<IS::Item>) -> T,
        T: PartialEq,
        E: Equivalence<K> + Clone,
    {
        outer_join(self, inner, outer_key, inner_key, select, eq)
    }

    /// See [`distinct`].
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        distinct(self)
    }

    /// See [`distinct_by`].
    fn distinct_by<E>(self, eq: E) -> DistinctBy<Self, E>
    where
        Self::Item: Clone,
        E: Equivalence<Self::Item>,
    {
        distinct_by(self, eq)
    }

    /// See [`position_of`].
    fn position_of<E>(self, item: &Self::Item, eq: E) -> Option<usize>
    where
        E: Equivalence<Self::Item>,
    {
        position_of(self, item, eq)
    }
}

impl<I> SequenceExt for I where I: Iterator + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::DefaultEquivalence;

    #[test]
    fn methods_delegate_to_free_functions() {
        let joined: Vec<(i32, Option<i32>)> = [1, 2]
            .into_iter()
            .left_join_on([2, 3], |o| *o, |i| *i, |o, i| (o, i), DefaultEquivalence)
            .collect();
        assert_eq!(joined, vec![(1, None), (2, Some(2))]);

        let deduped: Vec<i32> = [1, 1, 2].into_iter().distinct().collect();
        assert_eq!(deduped, vec![1, 2]);

        assert_eq!([4, 5].into_iter().position_of(&5, DefaultEquivalence), Some(1));
    }
}
