//! Flat-file persistence boundary.
//!
//! # Responsibility
//! - Keep file-format and I/O details out of the list collection.
//!
//! # Invariants
//! - Loading is all-or-nothing: a malformed line fails the whole file.

pub mod text_file;
