//! In-memory roster store
//!
//! BTreeMap-based store keyed by student id, so iteration (and therefore
//! the persisted file) is always in id order.

use std::collections::BTreeMap;

use crate::error::{Result, RosterError};

use super::StudentRecord;

/// Fields of an existing record to replace
///
/// `None` leaves the field untouched; `Some` replaces it wholesale (grades
/// are never merged with the existing list). This is how a caller expresses
/// "update only the age" without re-spelling the rest of the record.
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grades: Option<Vec<f64>>,
}

impl UpdateFields {
    /// True if no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.grades.is_none()
    }
}

/// In-memory collection of student records, keyed by id
#[derive(Debug, Default)]
pub struct RosterStore {
    records: BTreeMap<String, StudentRecord>,
}

impl RosterStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record
    ///
    /// Fails with [`RosterError::DuplicateId`] if any existing entry has the
    /// same id, regardless of name.
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        if self.records.contains_key(&record.id) {
            return Err(RosterError::DuplicateId(record.id));
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Replace fields of an existing record
    ///
    /// Fails with [`RosterError::NotFound`] if the id is absent. Supplying
    /// no fields is a successful no-op.
    pub fn update(&mut self, id: &str, fields: UpdateFields) -> Result<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        if let Some(name) = fields.name {
            record.name = name;
        }
        if let Some(age) = fields.age {
            record.age = age;
        }
        if let Some(grades) = fields.grades {
            record.grades = grades;
        }

        Ok(())
    }

    /// Remove a record, returning it
    ///
    /// Fails with [`RosterError::NotFound`] if the id is absent.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        self.records
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Look up a single record by id
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.get(id)
    }

    /// All records, in id order
    pub fn list(&self) -> Vec<&StudentRecord> {
        self.records.values().collect()
    }

    /// Iterate over records in id order
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.values()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records (used before replacing state from a file load)
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str) -> StudentRecord {
        StudentRecord::new(id, name, 20, vec![70.0, 80.0])
    }

    #[test]
    fn add_rejects_duplicate_id_regardless_of_name() {
        let mut store = RosterStore::new();
        store.add(sample("s1", "Ada")).unwrap();

        let err = store.add(sample("s1", "Grace")).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(id) if id == "s1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_renames_in_place_without_losing_fields() {
        let mut store = RosterStore::new();
        store.add(sample("s1", "Ada")).unwrap();

        store
            .update(
                "s1",
                UpdateFields {
                    name: Some("Ada L.".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.len(), 1);
        let record = store.get("s1").unwrap();
        assert_eq!(record.name, "Ada L.");
        assert_eq!(record.age, 20);
        assert_eq!(record.grades, vec![70.0, 80.0]);
    }

    #[test]
    fn update_replaces_grades_wholesale() {
        let mut store = RosterStore::new();
        store.add(sample("s1", "Ada")).unwrap();

        store
            .update(
                "s1",
                UpdateFields {
                    grades: Some(vec![95.0]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.get("s1").unwrap().grades, vec![95.0]);
    }

    #[test]
    fn update_with_no_fields_is_a_noop_success() {
        let mut store = RosterStore::new();
        store.add(sample("s1", "Ada")).unwrap();

        store.update("s1", UpdateFields::default()).unwrap();
        assert_eq!(store.get("s1").unwrap(), &sample("s1", "Ada"));
    }

    #[test]
    fn update_and_delete_report_not_found() {
        let mut store = RosterStore::new();

        assert!(matches!(
            store.update("missing", UpdateFields::default()),
            Err(RosterError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("missing"),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn delete_returns_the_removed_record() {
        let mut store = RosterStore::new();
        store.add(sample("s1", "Ada")).unwrap();

        let removed = store.delete("s1").unwrap();
        assert_eq!(removed.name, "Ada");
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_in_id_order() {
        let mut store = RosterStore::new();
        store.add(sample("s3", "Carol")).unwrap();
        store.add(sample("s1", "Ada")).unwrap();
        store.add(sample("s2", "Bob")).unwrap();

        let ids: Vec<&str> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }
}
