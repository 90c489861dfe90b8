//! roster-cli
//!
//! Command-line interface for the roster store. Every mutating subcommand
//! persists the roster before exiting, so the CSV file always reflects the
//! last successful operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use rosterdb::{parse_grades, Config, Roster, StudentRecord, UpdateFields};

/// roster-cli
#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(about = "CLI for the rosterdb student roster store")]
#[command(version)]
struct Args {
    /// Roster CSV file
    #[arg(short, long, default_value = "students.csv")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a student
    Add {
        /// Student id (must be unique)
        id: String,

        /// Display name
        name: String,

        /// Age in years
        age: u32,

        /// Grades, e.g. "80,90.5,85" (bad tokens are skipped with a warning)
        #[arg(short, long, default_value = "")]
        grades: String,
    },

    /// Update fields of an existing student
    Update {
        /// Student id to update
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New age (left unchanged if not a valid number)
        #[arg(long)]
        age: Option<String>,

        /// New grade list, replaces the old one wholesale
        #[arg(long)]
        grades: Option<String>,
    },

    /// Delete a student
    Del {
        /// Student id to delete
        id: String,
    },

    /// Show one student
    Show {
        /// Student id to show
        id: String,
    },

    /// List all students
    List,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosterdb=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> rosterdb::Result<()> {
    let config = Config::builder().roster_path(&args.file).build();
    let mut roster = Roster::open(config)?;

    match args.command {
        Commands::Add {
            id,
            name,
            age,
            grades,
        } => {
            let parsed = parse_grades(&grades);
            roster.add(StudentRecord::new(id.clone(), name, age, parsed.values))?;
            println!("Added student {}", id);
        }

        Commands::Update {
            id,
            name,
            age,
            grades,
        } => {
            let fields = UpdateFields {
                name,
                age: age.and_then(|text| soft_parse_age(&text)),
                grades: grades.and_then(|text| soft_parse_grades(&text)),
            };
            roster.update(&id, fields)?;
            println!("Updated student {}", id);
        }

        Commands::Del { id } => {
            let removed = roster.delete(&id)?;
            println!("Deleted student {} ({})", removed.id, removed.name);
        }

        Commands::Show { id } => match roster.get(&id) {
            Some(record) => print_records(std::iter::once(record)),
            None => {
                println!("Student not found: {}", id);
            }
        },

        Commands::List => {
            if roster.is_empty() {
                println!("No students to display.");
            } else {
                print_records(roster.list().into_iter());
            }
        }
    }

    Ok(())
}

/// Parse an age, leaving the field unchanged (None) on bad input
fn soft_parse_age(text: &str) -> Option<u32> {
    match text.trim().parse::<u32>() {
        Ok(age) => Some(age),
        Err(_) => {
            tracing::warn!(age = %text, "invalid age, leaving unchanged");
            None
        }
    }
}

/// Parse a grade list; if every token fails, leave the field unchanged
fn soft_parse_grades(text: &str) -> Option<Vec<f64>> {
    let parsed = parse_grades(text);
    if parsed.values.is_empty() && parsed.has_warnings() {
        tracing::warn!(grades = %text, "no valid grade tokens, leaving unchanged");
        return None;
    }
    Some(parsed.values)
}

fn print_records<'a>(records: impl Iterator<Item = &'a StudentRecord>) {
    println!("{:<8} {:<20} {:<5} {:<8} Grades", "ID", "Name", "Age", "Avg");
    println!("{}", "-".repeat(60));
    for record in records {
        let grades = record
            .grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<8} {:<20} {:<5} {:<8.2} {}",
            record.id,
            record.name,
            record.age,
            record.average(),
            grades
        );
    }
}
