//! joinkit — relational joins and deduplication over in-memory sequences,
//! plus the utility helpers that grew around them.
//!
//! ## Crate layout
//! - `core`: the join/distinct engine, equivalence seam, and row container.
//! - `utils`: casing, JSON, path, id, and observed-vector helpers.
//!
//! The `prelude` mirrors the surface most callers want: the four operations,
//! the extension trait, and the default comparer.

pub use joinkit_core as core;
pub use joinkit_utils as utils;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using `as _` for the extension trait avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        DefaultEquivalence, Rows, SequenceExt as _, distinct, distinct_by, left_join, outer_join,
        position_of, predicate, right_join,
    };
}
