use derive_more::{Deref, IntoIterator};

///
/// Rows
/// Materialized operation result: ordered output rows.
///
/// Order is part of the contract; `Rows` never reorders what the producing
/// operation emitted.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
pub struct Rows<T>(#[into_iterator(owned, ref)] Vec<T>);

impl<T> Rows<T> {
    #[must_use]
    pub(crate) const fn new(rows: Vec<T>) -> Self {
        Self(rows)
    }

    /// Consume the container, yielding the backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Rows<T>> for Vec<T> {
    fn from(rows: Rows<T>) -> Self {
        rows.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_preserve_order() {
        let rows = Rows::new(vec![3, 1, 2]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.into_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn rows_iterate_by_ref_and_by_value() {
        let rows = Rows::new(vec!["a", "b"]);
        let by_ref: Vec<&&str> = (&rows).into_iter().collect();
        assert_eq!(by_ref, vec![&"a", &"b"]);

        let by_value: Vec<&str> = rows.into_iter().collect();
        assert_eq!(by_value, vec!["a", "b"]);
    }
}
