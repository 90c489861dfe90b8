//! Engine Module
//!
//! The [`Roster`] ties the in-memory store to its CSV file.
//!
//! ## Responsibilities
//! - Load the configured file on open (absent file ⇒ empty roster)
//! - Apply mutations to the store, then persist the whole file
//! - Expose read access and an explicit save/reload
//!
//! ## Lifecycle
//!
//! The caller owns the engine: construct at startup, pass by reference,
//! drop at shutdown. Validation failures (duplicate id, not found) leave
//! both memory and file untouched; only I/O failures on save propagate
//! after a mutation has been applied in memory.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::persist::{self, LoadReport};
use crate::roster::{RosterStore, StudentRecord, UpdateFields};

/// The roster engine: store + persistence lifecycle
pub struct Roster {
    /// Engine configuration
    config: Config,

    /// In-memory records keyed by id
    store: RosterStore,

    /// Report from the most recent load (open or reload)
    load_report: LoadReport,
}

impl Roster {
    /// Open a roster with the given config
    ///
    /// On startup:
    /// 1. Read the configured CSV file if it exists
    /// 2. Populate the store (bad rows already filtered by the loader)
    /// 3. Ready to serve operations
    pub fn open(config: Config) -> Result<Self> {
        let (records, load_report) = persist::load(&config.roster_path)?;

        let mut store = RosterStore::new();
        for record in records {
            // Loader deduplicates ids, so this cannot collide.
            store.add(record)?;
        }

        tracing::debug!(
            path = %config.roster_path.display(),
            loaded = load_report.loaded,
            "roster opened"
        );

        Ok(Self {
            config,
            store,
            load_report,
        })
    }

    /// Open with a file path (convenience method)
    ///
    /// Uses default config with the specified roster file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().roster_path(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Mutations (apply to store, then persist)
    // =========================================================================

    /// Add a new student, then persist
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        self.store.add(record)?;
        self.persist_if_enabled()
    }

    /// Update an existing student's fields, then persist
    pub fn update(&mut self, id: &str, fields: UpdateFields) -> Result<()> {
        self.store.update(id, fields)?;
        self.persist_if_enabled()
    }

    /// Delete a student, returning the removed record, then persist
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let removed = self.store.delete(id)?;
        self.persist_if_enabled()?;
        Ok(removed)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full roster to the configured file now
    pub fn save(&self) -> Result<()> {
        persist::save(self.store.iter(), &self.config.roster_path)
    }

    /// Discard in-memory state and re-read the file
    ///
    /// Returns the load report; a missing file leaves the roster empty.
    pub fn reload(&mut self) -> Result<&LoadReport> {
        let (records, report) = persist::load(&self.config.roster_path)?;

        self.store.clear();
        for record in records {
            self.store.add(record)?;
        }
        self.load_report = report;

        Ok(&self.load_report)
    }

    fn persist_if_enabled(&self) -> Result<()> {
        if self.config.save_on_mutate {
            self.save()?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Look up a single record by id
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.store.get(id)
    }

    /// All records, in id order
    pub fn list(&self) -> Vec<&StudentRecord> {
        self.store.list()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Report from the most recent open/reload
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Path of the roster file
    pub fn path(&self) -> &Path {
        &self.config.roster_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
