//! PNR status records loaded from a tabular file
//!
//! The store is a snapshot read once at startup: `pnr,train_name,status`
//! rows, one booking per line, keyed by the PNR as an integer. There is no
//! write path and no refresh during a run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single booking's status snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnrRecord {
    /// Booking reference number
    pub pnr: u64,
    /// Train the booking is on
    pub train_name: String,
    /// Booking status, e.g. "Confirmed", "Waitlisted"
    pub status: String,
}

/// Read-only mapping of PNR number -> booking record
#[derive(Debug, Clone, Default)]
pub struct PnrStore {
    records: BTreeMap<u64, PnrRecord>,
}

impl PnrStore {
    /// Load the store from a comma-separated file
    ///
    /// The first row is treated as a header when its first column is not
    /// integer-parseable. Malformed rows are skipped with a warning; an
    /// unreadable file is an error.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Data(format!("cannot read PNR file {}: {e}", path.display()))
        })?;

        let mut records = BTreeMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_row(line) {
                Some(record) => {
                    records.insert(record.pnr, record);
                }
                None if line_no == 0 => {
                    tracing::debug!(line = %line, "skipping header row");
                }
                None => {
                    tracing::warn!(
                        path = %path.display(),
                        line = line_no + 1,
                        "skipping malformed PNR row"
                    );
                }
            }
        }

        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "loaded PNR store"
        );

        Ok(Self { records })
    }

    /// Build a store from already-parsed records
    #[must_use]
    pub fn from_records(rows: Vec<PnrRecord>) -> Self {
        let records = rows.into_iter().map(|r| (r.pnr, r)).collect();
        Self { records }
    }

    /// Exact lookup by PNR number
    #[must_use]
    pub fn lookup(&self, pnr: u64) -> Option<&PnrRecord> {
        self.records.get(&pnr)
    }

    /// Number of records in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Format the status reply for a raw PNR query
    ///
    /// A missing or non-numeric PNR is a normal outcome with its own
    /// message, never an error.
    #[must_use]
    pub fn status_line(&self, raw_pnr: &str) -> String {
        let query = raw_pnr.trim();

        query
            .parse::<u64>()
            .ok()
            .and_then(|pnr| self.lookup(pnr))
            .map_or_else(
                || format!("No details found for PNR {query}."),
                |record| {
                    format!(
                        "PNR {} is booked on {}. Current status: {}.",
                        record.pnr, record.train_name, record.status
                    )
                },
            )
    }
}

/// Parse one `pnr,train_name,status` row
fn parse_row(line: &str) -> Option<PnrRecord> {
    let mut fields = line.splitn(3, ',');
    let pnr = fields.next()?.trim().parse::<u64>().ok()?;
    let train_name = fields.next()?.trim();
    let status = fields.next()?.trim();

    if train_name.is_empty() || status.is_empty() {
        return None;
    }

    Some(PnrRecord {
        pnr,
        train_name: train_name.to_string(),
        status: status.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_store() -> PnrStore {
        PnrStore::from_records(vec![
            PnrRecord {
                pnr: 1_234_567_890,
                train_name: "Rajdhani Express".to_string(),
                status: "Confirmed".to_string(),
            },
            PnrRecord {
                pnr: 9_876_543_210,
                train_name: "Shatabdi Express".to_string(),
                status: "Waitlisted".to_string(),
            },
        ])
    }

    #[test]
    fn status_line_includes_train_name_and_status() {
        let store = sample_store();
        let line = store.status_line("1234567890");
        assert!(line.contains("Rajdhani Express"));
        assert!(line.contains("Confirmed"));
    }

    #[test]
    fn status_line_miss_is_verbatim() {
        let store = sample_store();
        assert_eq!(
            store.status_line("1111111111"),
            "No details found for PNR 1111111111."
        );
    }

    #[test]
    fn status_line_non_numeric_is_a_miss() {
        let store = sample_store();
        assert_eq!(
            store.status_line("not-a-pnr"),
            "No details found for PNR not-a-pnr."
        );
    }

    #[test]
    fn load_skips_header_and_malformed_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pnr,train_name,status").unwrap();
        writeln!(file, "1234567890,Rajdhani Express,Confirmed").unwrap();
        writeln!(file, "garbage line without commas").unwrap();
        writeln!(file, "9876543210,Shatabdi Express,Waitlisted").unwrap();
        file.flush().unwrap();

        let store = PnrStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.lookup(9_876_543_210).unwrap().status,
            "Waitlisted"
        );
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = PnrStore::load(Path::new("/nonexistent/pnr.csv"));
        assert!(result.is_err());
    }
}
