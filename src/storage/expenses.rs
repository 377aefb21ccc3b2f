//! Expense store backed by a single JSON file
//!
//! The file holds one array of expense objects in insertion order. Positions
//! are 1-based and shift down when an earlier record is deleted.
//!
//! Every mutation rewrites the whole file before returning. When that write
//! fails the in-memory change is kept and the error is returned, so memory and
//! disk can diverge until the next successful save.
//!
//! The store is not safe to share between processes: the last writer wins and
//! no file locking is done.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Ordered, file-backed collection of expenses
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    records: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store that will save to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Open the store at `path`, loading any existing records
    pub fn open(path: PathBuf) -> ExpenseResult<Self> {
        let records = Self::load(&path)?;
        Ok(Self { path, records })
    }

    /// Open the store, falling back to an empty one if the file can't be read
    ///
    /// The load error is handed back so the caller can tell the user that
    /// existing data was not loaded.
    pub fn open_or_empty(path: PathBuf) -> (Self, Option<ExpenseError>) {
        match Self::load(&path) {
            Ok(records) => (Self { path, records }, None),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "starting with an empty expense list");
                (Self::new(path), Some(e))
            }
        }
    }

    /// Read all records from `path`
    ///
    /// A missing file yields no records. Records that break an invariant make
    /// the whole file count as malformed.
    pub fn load(path: &Path) -> ExpenseResult<Vec<Expense>> {
        let records: Vec<Expense> = read_json(path)?;

        for (i, expense) in records.iter().enumerate() {
            expense.validate().map_err(|e| {
                ExpenseError::Persistence(format!(
                    "Invalid expense #{} in {}: {}",
                    i + 1,
                    path.display(),
                    e
                ))
            })?;
        }

        debug!(path = %path.display(), count = records.len(), "loaded expenses");
        Ok(records)
    }

    /// Write every record to disk
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, self.records.as_slice())?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved expenses");
        Ok(())
    }

    /// The file this store saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at a 1-based position
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        let slot = self.slot(index)?;
        Ok(&self.records[slot])
    }

    /// Add a record to the end and save
    ///
    /// Returns the new record's 1-based position.
    pub fn append(&mut self, expense: Expense) -> ExpenseResult<usize> {
        validate(&expense)?;

        self.records.push(expense);
        let index = self.records.len();
        info!(index, "added expense");

        self.save()?;
        Ok(index)
    }

    /// Replace the record at a 1-based position and save
    ///
    /// Returns the record that was replaced.
    pub fn update(&mut self, index: usize, expense: Expense) -> ExpenseResult<Expense> {
        let slot = self.slot(index)?;
        validate(&expense)?;

        let previous = std::mem::replace(&mut self.records[slot], expense);
        info!(index, "updated expense");

        self.save()?;
        Ok(previous)
    }

    /// Remove the record at a 1-based position and save
    ///
    /// Later records move down one position. Returns the removed record.
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let slot = self.slot(index)?;

        let removed = self.records.remove(slot);
        info!(index, "deleted expense");

        self.save()?;
        Ok(removed)
    }

    /// Translate a 1-based position into a vector slot
    fn slot(&self, index: usize) -> ExpenseResult<usize> {
        if index == 0 || index > self.records.len() {
            return Err(ExpenseError::index_out_of_range(index, self.records.len()));
        }
        Ok(index - 1)
    }
}

fn validate(expense: &Expense) -> ExpenseResult<()> {
    expense
        .validate()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}
