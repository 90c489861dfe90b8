//! # rosterdb
//!
//! An in-memory student roster store with:
//! - CRUD operations keyed by student id
//! - Tolerant grade-list parsing with structured diagnostics
//! - Whole-file CSV persistence (atomic rewrite)
//! - A load path that skips bad rows instead of aborting
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      roster-cli                              │
//! │                 (clap subcommands)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Roster                                  │
//! │           (engine: mutate, then persist)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RosterStore │          │   persist   │
//!   │  (BTreeMap) │          │ (CSV file)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod grades;
pub mod roster;
pub mod persist;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use engine::Roster;
pub use grades::{parse_grades, GradeParse};
pub use persist::LoadReport;
pub use roster::{RosterStore, StudentRecord, UpdateFields};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rosterdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
