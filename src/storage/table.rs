//! Whole-table CSV storage
//!
//! Every table is read in full, changed in memory and written back in full.
//! There is no locking: two processes writing the same table race and the
//! last write wins.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::FinTrackError;

use super::file_io::{read_csv, write_csv_atomic};

/// A row type stored in one of the tables
pub trait TableRecord: Serialize + DeserializeOwned + Clone {
    /// Table name, used in log output
    const TABLE: &'static str;

    /// Column names in file order; must match the serde field names
    const COLUMNS: &'static [&'static str];

    /// The user this row belongs to
    fn username(&self) -> &str;
}

/// A CSV file holding rows of one record type
#[derive(Debug, Clone)]
pub struct CsvTable<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: TableRecord> CsvTable<R> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row of the table
    pub fn read_all(&self) -> Result<Vec<R>, FinTrackError> {
        read_csv(&self.path)
    }

    /// Read the rows belonging to one user, in file order
    pub fn read_for_user(&self, username: &str) -> Result<Vec<R>, FinTrackError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| r.username() == username)
            .collect())
    }

    /// Replace the whole table
    pub fn write_all(&self, rows: &[R]) -> Result<(), FinTrackError> {
        write_csv_atomic(&self.path, R::COLUMNS, rows)?;
        debug!(
            table = R::TABLE,
            path = %self.path.display(),
            rows = rows.len(),
            "table written"
        );
        Ok(())
    }

    /// Re-read the table, add one row at the end, write it back
    pub fn append(&self, row: R) -> Result<(), FinTrackError> {
        let mut rows = self.read_all()?;
        rows.push(row);
        self.write_all(&rows)
    }

    /// Re-read the table, drop rows matching `remove`, write it back
    ///
    /// Returns the number of rows removed. The file is left untouched when
    /// nothing matched.
    pub fn remove_where<F>(&self, remove: F) -> Result<usize, FinTrackError>
    where
        F: Fn(&R) -> bool,
    {
        let rows = self.read_all()?;
        let before = rows.len();
        let kept: Vec<R> = rows.into_iter().filter(|r| !remove(r)).collect();
        let removed = before - kept.len();

        if removed > 0 {
            self.write_all(&kept)?;
        }

        Ok(removed)
    }

    /// Re-read the table, drop rows matching `replace`, append `row`, write
    pub fn replace_where<F>(&self, replace: F, row: R) -> Result<usize, FinTrackError>
    where
        F: Fn(&R) -> bool,
    {
        let rows = self.read_all()?;
        let before = rows.len();
        let mut kept: Vec<R> = rows.into_iter().filter(|r| !replace(r)).collect();
        let replaced = before - kept.len();

        kept.push(row);
        self.write_all(&kept)?;

        Ok(replaced)
    }
}
