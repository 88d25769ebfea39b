//! Activity list collection and identifier resolution.
//!
//! # Responsibility
//! - Own the ordered activity sequence and its mutation operations.
//! - Resolve user-facing identifiers (positional index or description) in
//!   one shared place.
//!
//! # Invariants
//! - The activity sequence is compacted: no holes, insertion order kept.
//! - Every successful mutation notifies registered observers exactly once.

pub mod activity_list;
pub mod identifier;
