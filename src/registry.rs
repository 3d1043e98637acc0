//! Bundled company registration table.
//!
//! The table maps registration-number strings to the metadata known for the
//! registered company. It is constructed from a constant entry list at
//! process start, exposes read access only, and is discarded at exit.
//! Nothing is ever persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata held for a single registered company.
///
/// The only recognized field is the registration date of the procurement
/// winner. A record with no fields set serializes as `{}`; a populated one
/// serializes as `{"winner_reg_date": "DD.MM.YYYY"}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RegistrationRecord {
    /// Date the winning company was registered, in `DD.MM.YYYY` format.
    /// Stored and emitted verbatim; the format is not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_reg_date: Option<String>,
}

impl RegistrationRecord {
    /// Record with no known metadata.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record carrying a winner registration date.
    pub fn with_winner_reg_date(date: &str) -> Self {
        Self {
            winner_reg_date: Some(date.to_string()),
        }
    }

    /// True when no metadata is known for the company.
    pub fn is_empty(&self) -> bool {
        self.winner_reg_date.is_none()
    }
}

/// Bundled table entries: registration number and winner registration date.
const BUNDLED_ENTRIES: [(&str, &str); 5] = [
    ("45403000253", "26.11.2004"),
    ("42403037066", "25.02.2015"),
    ("40003026637", "20.07.2004"),
    ("41503041552", "16.04.2007"),
    ("42103005057", "25.07.1992"),
];

/// Immutable lookup table from registration number to record.
///
/// Lookups use exact string equality; no trimming, case-folding or
/// check-digit validation is applied to the requested number.
#[derive(Debug)]
pub struct Registry {
    entries: BTreeMap<String, RegistrationRecord>,
}

impl Registry {
    /// Build the table from the bundled entries.
    ///
    /// Each invocation constructs its own copy; there is no mutation API,
    /// so the table is read-only for the rest of the process lifetime.
    pub fn bundled() -> Self {
        let mut entries = BTreeMap::new();
        for (reg_num, date) in BUNDLED_ENTRIES {
            entries.insert(
                reg_num.to_string(),
                RegistrationRecord::with_winner_reg_date(date),
            );
        }
        Self { entries }
    }

    /// Look up the record for a registration number.
    pub fn get(&self, reg_num: &str) -> Option<&RegistrationRecord> {
        self.entries.get(reg_num)
    }

    /// True when the table holds an entry for the registration number.
    pub fn contains(&self, reg_num: &str) -> bool {
        self.entries.contains_key(reg_num)
    }

    /// Number of bundled entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registration numbers present in the table.
    pub fn reg_nums(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
