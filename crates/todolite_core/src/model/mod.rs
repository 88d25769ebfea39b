//! Domain model for activity records.
//!
//! # Responsibility
//! - Define the canonical activity record used by list and storage code.
//! - Own the delimited line codec used by the flat-file store.
//!
//! # Invariants
//! - Fields of an activity are independently mutable; there is no
//!   cross-field constraint.
//! - A due date of `0` means "unset".

pub mod activity;
