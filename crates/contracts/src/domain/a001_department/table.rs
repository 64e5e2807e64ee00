use super::aggregate::{is_well_formed_code, DepartmentRecord};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

// Generated by build.rs from departments.json
include!(concat!(env!("OUT_DIR"), "/departments_gen.rs"));

static BUILTIN_TABLE: Lazy<DepartmentTable> =
    Lazy::new(|| DepartmentTable::from_checked_records(DEPARTMENTS));

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate department code: {0}")]
    DuplicateCode(String),

    #[error("malformed department code: {0:?}")]
    MalformedCode(String),

    #[error("department {code} has a non-absolute reference URL: {url}")]
    InvalidReferenceUrl { code: String, url: String },
}

// ============================================================================
// Lookup table
// ============================================================================

/// Read-only table of departments, indexed by code.
#[derive(Debug, Clone)]
pub struct DepartmentTable {
    records: &'static [DepartmentRecord],
    by_code: HashMap<&'static str, usize>,
}

impl DepartmentTable {
    /// Table built from the bundled `departments.json`.
    ///
    /// The build script rejects invalid data, so this never fails.
    pub fn builtin() -> &'static DepartmentTable {
        &BUILTIN_TABLE
    }

    /// Build a table from arbitrary records, checking integrity first.
    pub fn new(records: &'static [DepartmentRecord]) -> Result<Self, TableError> {
        let table = Self::from_checked_records(records);
        table.validate()?;
        Ok(table)
    }

    fn from_checked_records(records: &'static [DepartmentRecord]) -> Self {
        let by_code = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.code, index))
            .collect();
        Self { records, by_code }
    }

    /// Codes must be unique and well formed, URLs absolute http(s).
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in self.records {
            if !is_well_formed_code(record.code) {
                return Err(TableError::MalformedCode(record.code.to_string()));
            }
            if !seen.insert(record.code) {
                return Err(TableError::DuplicateCode(record.code.to_string()));
            }
            let url = record.reference_url;
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(TableError::InvalidReferenceUrl {
                    code: record.code.to_string(),
                    url: url.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &'static [DepartmentRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact match on the department code.
    pub fn find_by_code(&self, code: &str) -> Option<&'static DepartmentRecord> {
        self.by_code.get(code).map(|&index| &self.records[index])
    }

    /// Match typed keypad input against the table.
    ///
    /// The input is compared verbatim; a bare digit `1`-`9` is also compared
    /// against its zero-padded form ("8" finds "08").
    pub fn match_input(&self, raw: &str) -> Option<&'static DepartmentRecord> {
        if raw.is_empty() {
            return None;
        }
        self.find_by_code(raw).or_else(|| {
            normalized_candidate(raw).and_then(|padded| self.find_by_code(&padded))
        })
    }
}

/// Zero-padded alternate for a bare single digit `1`-`9`.
///
/// Returns `None` for anything else: "0", letters, or inputs of two or more
/// characters are never padded.
pub fn normalized_candidate(raw: &str) -> Option<String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(digit @ '1'..='9'), None) => Some(format!("0{digit}")),
        _ => None,
    }
}
