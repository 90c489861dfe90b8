//! CSV save/load implementation
//!
//! Loading is deliberately tolerant: a damaged row costs that row, never the
//! whole file. Saving is strict: any I/O failure propagates to the caller.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grades::parse_grades;
use crate::roster::StudentRecord;

/// Outcome of a roster load
///
/// `loaded` counts records actually produced; the other counters record what
/// the tolerant reader stepped over on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Valid records loaded
    pub loaded: usize,

    /// Rows dropped entirely (missing id/name, unreadable, duplicate id)
    pub rows_skipped: usize,

    /// Field-level problems that fell back to a default (bad age, bad grade
    /// tokens) without dropping the row
    pub soft_field_errors: usize,

    /// True when the file did not exist and the load produced an empty set
    pub file_absent: bool,
}

/// On-disk row shape; column order defines the header
#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    student_id: &'a str,
    name: &'a str,
    age: u32,
    grades: String,
}

/// Raw row for reading; all-string so numeric problems stay soft
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    student_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    age: String,
    #[serde(default)]
    grades: String,
}

/// Column header, written even when the roster is empty
const HEADER: [&str; 4] = ["student_id", "name", "age", "grades"];

/// Serialize records to `path` as CSV, atomically from the caller's view
///
/// Writes the full file to a sibling `.tmp` file first, then renames it over
/// the target. Records arrive in whatever order the iterator yields; the
/// store hands them over in id order.
pub fn save<'a>(records: impl Iterator<Item = &'a StudentRecord>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let result = write_file(records, &tmp_path, path);
    if result.is_err() {
        // Don't leave a half-written .tmp sibling behind.
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_file<'a>(
    records: impl Iterator<Item = &'a StudentRecord>,
    tmp_path: &Path,
    path: &Path,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(tmp_path)?);

    // Serde would only emit the derived header on the first record, leaving
    // an empty roster as an empty file; write the header explicitly.
    writer.write_record(HEADER)?;

    let mut count = 0usize;
    for record in records {
        writer.serialize(RosterRow {
            student_id: &record.id,
            name: &record.name,
            age: record.age,
            grades: join_grades(&record.grades),
        })?;
        count += 1;
    }

    writer.flush()?;
    drop(writer);

    fs::rename(tmp_path, path)?;
    tracing::debug!(path = %path.display(), count, "roster saved");
    Ok(())
}

/// Read records from `path`
///
/// A missing file is not an error: the result is an empty set with
/// `file_absent` set in the report. Rows missing id or name are skipped,
/// as is any row repeating an id already seen (first occurrence wins).
/// A malformed age defaults to 0; grade tokens go through the tolerant
/// grade parser. Each soft problem is logged at warn and counted.
pub fn load(path: &Path) -> Result<(Vec<StudentRecord>, LoadReport)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "roster file absent, starting empty");
            let report = LoadReport {
                file_absent: true,
                ..Default::default()
            };
            return Ok((Vec::new(), report));
        }
        Err(err) => return Err(err.into()),
    };

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    let mut report = LoadReport::default();
    let mut seen_ids: BTreeSet<String> = BTreeSet::new();

    for (index, result) in reader.deserialize::<RawRow>().enumerate() {
        // Header is row 0 in the file; data rows start at 2 for humans.
        let line = index + 2;

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(line, %err, "skipping unreadable roster row");
                report.rows_skipped += 1;
                continue;
            }
        };

        if raw.student_id.is_empty() || raw.name.is_empty() {
            tracing::warn!(line, "skipping roster row missing id or name");
            report.rows_skipped += 1;
            continue;
        }

        if !seen_ids.insert(raw.student_id.clone()) {
            tracing::warn!(line, id = %raw.student_id, "skipping duplicate student id");
            report.rows_skipped += 1;
            continue;
        }

        let age = match raw.age.parse::<u32>() {
            Ok(age) => age,
            Err(_) => {
                if !raw.age.is_empty() {
                    tracing::warn!(line, age = %raw.age, "bad age, defaulting to 0");
                    report.soft_field_errors += 1;
                }
                0
            }
        };

        let grade_parse = parse_grades(&raw.grades);
        report.soft_field_errors += grade_parse.skipped.len();

        records.push(StudentRecord {
            id: raw.student_id,
            name: raw.name,
            age,
            grades: grade_parse.values,
        });
    }

    report.loaded = records.len();
    tracing::debug!(
        path = %path.display(),
        loaded = report.loaded,
        rows_skipped = report.rows_skipped,
        "roster loaded"
    );

    Ok((records, report))
}

/// Join grades with `;` using f64's shortest round-trippable formatting
fn join_grades(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Sibling temp path: `students.csv` → `students.csv.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("students.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_empty_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (records, report) = load(&dir.path().join("nope.csv")).unwrap();

        assert!(records.is_empty());
        assert_eq!(report.loaded, 0);
        assert!(report.file_absent);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        let original = vec![
            StudentRecord::new("s1", "Ada Lovelace", 21, vec![80.0, 90.5, 85.0]),
            StudentRecord::new("s2", "Grace Hopper", 22, vec![]),
        ];
        save(original.iter(), &path).unwrap();

        let (loaded, report) = load(&path).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(report.soft_field_errors, 0);
    }

    #[test]
    fn empty_roster_saves_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        save(std::iter::empty::<&StudentRecord>(), &path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "student_id,name,age,grades\n");

        let (records, report) = load(&path).unwrap();
        assert!(records.is_empty());
        assert_eq!(report.loaded, 0);
        assert!(!report.file_absent);
    }

    #[test]
    fn failed_save_cleans_up_the_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the final rename fail.
        let path = dir.path().join("students.csv");
        fs::create_dir(&path).unwrap();

        let records = vec![StudentRecord::new("s1", "Ada", 21, vec![80.0])];
        assert!(save(records.iter(), &path).is_err());

        assert!(!dir.path().join("students.csv.tmp").exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        let records = vec![StudentRecord::new("s1", "Ada", 21, vec![80.0])];
        save(records.iter(), &path).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["students.csv".to_string()]);
    }

    #[test]
    fn rows_missing_id_or_name_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "student_id,name,age,grades\n\
             s1,Ada,21,80;90\n\
             ,Nameless,20,70\n\
             s3,,20,70\n\
             s4,Bob,19,\n",
        );

        let (records, report) = load(&path).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s4"]);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.rows_skipped, 2);
    }

    #[test]
    fn bad_age_defaults_to_zero_and_is_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "student_id,name,age,grades\n\
             s1,Ada,twenty,80;x;90\n",
        );

        let (records, report) = load(&path).unwrap();
        assert_eq!(records[0].age, 0);
        assert_eq!(records[0].grades, vec![80.0, 90.0]);
        // one bad age + one bad grade token
        assert_eq!(report.soft_field_errors, 2);
        assert_eq!(report.rows_skipped, 0);
    }

    #[test]
    fn duplicate_id_rows_keep_the_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "student_id,name,age,grades\n\
             s1,Ada,21,80\n\
             s1,Impostor,99,0\n",
        );

        let (records, report) = load(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ada");
        assert_eq!(report.rows_skipped, 1);
    }

    #[test]
    fn empty_grades_cell_loads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "student_id,name,age,grades\n\
             s1,Ada,21,\n",
        );

        let (records, report) = load(&path).unwrap();
        assert!(records[0].grades.is_empty());
        assert_eq!(records[0].average(), 0.0);
        assert_eq!(report.soft_field_errors, 0);
    }
}
