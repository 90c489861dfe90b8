//! Roster Module
//!
//! The in-memory record collection: [`StudentRecord`] plus the
//! [`RosterStore`] that holds them keyed by student id.
//!
//! ## Identity Model
//!
//! Identity is the immutable `id` alone. `name` is a regular mutable field,
//! so renaming a student is a plain field write: no re-keying, and the
//! one-entry-per-id invariant holds by construction.

mod record;
mod store;

pub use record::StudentRecord;
pub use store::{RosterStore, UpdateFields};
