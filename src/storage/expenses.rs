//! CSV-backed expense store
//!
//! One record per line, `date,category,amount`, no header. Records are only
//! ever appended; every load rereads the whole file.

use std::fs::OpenOptions;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, info, warn};

use crate::config::MalformedRowPolicy;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::parse_amount;
use crate::models::Expense;

use super::file_io::{append_prefix, ensure_parent_dir, open_if_exists};
use super::RecordStore;

const FIELD_COUNT: usize = 3;

/// Expense store backed by a comma-separated file
#[derive(Debug, Clone)]
pub struct CsvExpenseStore {
    path: PathBuf,
    policy: MalformedRowPolicy,
}

impl CsvExpenseStore {
    /// Create a store for the given file, skipping malformed rows on load
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, MalformedRowPolicy::default())
    }

    /// Create a store with an explicit malformed-row policy
    pub fn with_policy(path: impl Into<PathBuf>, policy: MalformedRowPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Active malformed-row policy
    pub fn policy(&self) -> MalformedRowPolicy {
        self.policy
    }

    /// Apply the malformed-row policy to a rejected line
    fn reject(&self, line: u64, reason: String) -> ExpenseResult<()> {
        match self.policy {
            MalformedRowPolicy::Skip => {
                warn!(
                    path = %self.path.display(),
                    line,
                    %reason,
                    "skipping malformed expense row"
                );
                Ok(())
            }
            MalformedRowPolicy::Strict => Err(ExpenseError::MalformedRecord { line, reason }),
        }
    }
}

/// Convert one CSV row into an expense
fn parse_record(record: &StringRecord) -> Result<Expense, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let amount = parse_amount(&record[2])
        .map_err(|_| format!("non-numeric amount '{}'", &record[2]))?;
    Ok(Expense::new(&record[0], &record[1], amount))
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

impl RecordStore for CsvExpenseStore {
    fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        ensure_parent_dir(&self.path)?;
        let prefix = append_prefix(&self.path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Io(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        if !prefix.is_empty() {
            debug!(path = %self.path.display(), "terminating unfinished last line");
            file.write_all(prefix)?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        writer.serialize(expense)?;
        writer.flush()?;

        info!(
            path = %self.path.display(),
            date = %expense.date,
            category = %expense.category,
            amount = expense.amount,
            "expense appended"
        );
        Ok(())
    }

    fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        let Some(file) = open_if_exists(&self.path)? else {
            debug!(path = %self.path.display(), "store does not exist yet");
            return Ok(Vec::new());
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut expenses = Vec::new();
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    if is_blank(&record) {
                        continue;
                    }
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    match parse_record(&record) {
                        Ok(expense) => expenses.push(expense),
                        Err(reason) => self.reject(line, reason)?,
                    }
                }
                Err(e) => {
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        return Err(e.into());
                    }
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    self.reject(line, e.to_string())?;
                }
            }
        }

        debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "expenses loaded"
        );
        Ok(expenses)
    }
}
