//! RecordStore — the immutable launch record table.
//!
//! Records are parsed once from CSV and never change afterwards. All
//! accessors borrow from the shared slice, so clones of the store are
//! cheap and can be handed to every request handler.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use launchdash_core::{LaunchRecord, PayloadRange};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::rows::{LaunchRow, missing_column};

/// Read-only, thread-safe handle to the launch records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[LaunchRecord]>,
}

impl RecordStore {
    /// Load records from a CSV file on disk.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file)?;
        debug!(?path, rows = store.len(), "record store loaded");
        Ok(store)
    }

    /// Parse records from any CSV source. The header row is required and
    /// at least one data row must follow it.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| StoreError::Csv(e.to_string()))?
            .clone();
        let names: Vec<&str> = headers.iter().collect();
        if let Some(column) = missing_column(names.iter().copied()) {
            return Err(StoreError::MissingColumn(column));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result.map_err(|e| StoreError::Csv(e.to_string()))?;
            let line = raw.position().map(|p| p.line()).unwrap_or_default();
            let row: LaunchRow = raw
                .deserialize(Some(&headers))
                .map_err(|e| StoreError::Row {
                    line,
                    message: e.to_string(),
                })?;
            let record = LaunchRecord::try_from(row)
                .map_err(|message| StoreError::Row { line, message })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        Ok(Self::from_records(records))
    }

    /// Build a store from records already in memory (for testing).
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch site names, sorted ascending.
    pub fn sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.records.iter().any(|r| r.launch_site == site)
    }

    /// Smallest and largest payload in the table, `None` when empty.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        let mut payloads = self.records.iter().map(|r| r.payload_mass_kg);
        let first = payloads.next()?;
        let (low, high) = payloads.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(PayloadRange::new(low, high))
    }
}
