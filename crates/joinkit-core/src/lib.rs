//! Core engine for joinkit: relational joins, predicate-based deduplication,
//! equivalence seams, and the materialized row container.
//!
//! Every operation here is a pure, synchronous transformation over in-memory
//! sequences. Nothing is persisted, nothing is shared between invocations.

pub mod distinct;
pub mod equivalence;
pub mod ext;
pub mod join;
pub mod position;
pub mod rows;

pub use distinct::{Distinct, DistinctBy, distinct, distinct_by};
pub use equivalence::{DefaultEquivalence, Equivalence, Predicate, predicate};
pub use ext::SequenceExt;
pub use join::{LeftJoin, RightJoin, left_join, outer_join, right_join};
pub use position::position_of;
pub use rows::Rows;

///
/// Prelude
///
/// Prelude contains only the operation vocabulary.
/// Iterator internals and the equivalence seam stay one level down.
///

pub mod prelude {
    pub use crate::{
        DefaultEquivalence, Rows, SequenceExt, distinct, distinct_by, left_join, outer_join,
        position_of, predicate, right_join,
    };
}
