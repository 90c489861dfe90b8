//! Student record type

use serde::{Deserialize, Serialize};

/// One student in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Externally supplied identifier, unique across the store, immutable
    pub id: String,

    /// Display name, mutable
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Scores in insertion order, may be empty
    pub grades: Vec<f64>,
}

impl StudentRecord {
    /// Create a record with the given fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32, grades: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            grades,
        }
    }

    /// Average grade, defined as 0 when there are no grades
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }
}
