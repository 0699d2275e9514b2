//! Relational joins over in-memory sequences.
//!
//! All three flavors share one matching policy: for each driving row, the
//! first probe-side row whose key is equivalent wins, and later matches are
//! ignored. A driving row with N matching probe rows yields exactly one
//! output row, never N. Callers that need cross-product semantics must
//! pre-group the probe side themselves.
//!
//! The probe side is buffered once at construction, with its keys computed
//! up front, so single-pass producers are enumerated exactly once and probe
//! order survives into first-match selection.

mod left;
mod outer;
mod right;


pub use left::{LeftJoin, left_join};
pub use outer::outer_join;
pub use right::{RightJoin, right_join};
