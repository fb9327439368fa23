use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One class slot as it appears in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimetableRow {
    pub day: String,
    pub time: String,
    pub subject: String,
}

/// The full weekly timetable, loaded once at startup and never mutated.
///
/// Rows keep their source-file order; multiple rows per day are allowed and
/// are not re-sorted by time.
#[derive(Debug, Clone)]
pub struct TimetableStore {
    rows: Vec<TimetableRow>,
}

const REQUIRED_COLUMNS: [&str; 3] = ["Day", "Time", "Subject"];

impl TimetableStore {
    /// Load the timetable from a CSV file with `Day`, `Time`, `Subject` columns.
    ///
    /// A missing file or a missing required column is a startup-fatal error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open timetable file {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read timetable header from {}", path.display()))?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(anyhow!(
                    "Timetable file {} is missing required column '{}'",
                    path.display(),
                    column
                ));
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: TimetableRow = record
                .with_context(|| format!("Malformed row in timetable file {}", path.display()))?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Build a store directly from rows (test fixtures, alternate sources).
    pub fn from_rows(rows: Vec<TimetableRow>) -> Self {
        Self { rows }
    }

    /// All rows for one day, in source order. Case-sensitive exact match
    /// against the canonical day name; callers normalize input first.
    /// An unknown day yields an empty slice-like result, not an error.
    pub fn rows_for_day(&self, day: &str) -> Vec<&TimetableRow> {
        self.rows.iter().filter(|row| row.day == day).collect()
    }

    /// Distinct day names in first-occurrence order from the source file,
    /// not calendar order.
    pub fn days_in_file_order(&self) -> Vec<&str> {
        let mut days: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !days.contains(&row.day.as_str()) {
                days.push(&row.day);
            }
        }
        days
    }

    /// Render one day as "Time: Subject" lines joined by newlines.
    /// A day with no rows renders as an empty string.
    pub fn format_day_block(&self, day: &str) -> String {
        self.rows_for_day(day)
            .iter()
            .map(|row| format!("{}: {}", row.time, row.subject))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
