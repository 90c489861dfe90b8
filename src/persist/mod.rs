//! Persistence Module
//!
//! Whole-file CSV persistence for the roster.
//!
//! ## File Format
//!
//! UTF-8 CSV with a header row:
//!
//! ```text
//! student_id,name,age,grades
//! s1,Ada Lovelace,21,80;90;85
//! s2,Grace Hopper,22,
//! ```
//!
//! The `grades` cell is itself semicolon-delimited. The file is rewritten in
//! full on every save, via a sibling temp file and rename so readers never
//! observe a half-written roster.

mod file;

pub use file::{load, save, LoadReport};
