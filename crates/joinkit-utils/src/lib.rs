//! Utility helpers that grew around the joinkit core: string casing and
//! digit grouping, JSON round-tripping, lexical path handling, ULID-backed
//! ids, and a change-notifying vector.
//!
//! Everything here is a thin, total wrapper; the algorithmic weight of the
//! project lives in `joinkit-core`.

pub mod casing;
pub mod id;
pub mod json;
pub mod observed;
pub mod paths;

pub use casing::{group_digits, to_camel, to_kebab, to_pascal, to_snake, to_title};
pub use id::{Uid, UidError};
pub use json::{JsonError, from_json, to_json, to_json_pretty};
pub use observed::{FnSink, NullSink, ObservedVec, VecEvent, VecEventSink, sink_fn};
pub use paths::{PathsError, ensure_extension, join_all, normalize};
