//! Organisation knowledge base built from a master table

use super::table::{Record, Table, CATEGORY, NAME, ORGANISATION, SECTOR};
use std::collections::HashMap;

/// Authoritative Sector/Category for one organisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganisationRecord {
    /// Name as first seen in the master table
    pub name: String,
    pub sector: String,
    pub category: String,
}

/// Organisations keyed by lowercased name. The first row seen for a name wins.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, OrganisationRecord>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a master table.
    ///
    /// The organisation name comes from `Name`, falling back to `Organisation`
    /// when `Name` is absent or blank. Rows with neither are skipped.
    pub fn from_table(table: &Table) -> Self {
        let mut kb = KnowledgeBase::new();

        for (idx, record) in table.records().enumerate() {
            let Some(name) = organisation_name(&record) else {
                tracing::debug!(row = idx + 1, "master row has no organisation name, skipped");
                continue;
            };

            let inserted = kb.insert(OrganisationRecord {
                name: name.to_string(),
                sector: record.get_or_empty(SECTOR).to_string(),
                category: record.get_or_empty(CATEGORY).to_string(),
            });
            if !inserted {
                tracing::debug!(row = idx + 1, name, "duplicate organisation in master, kept first");
            }
        }

        kb
    }

    /// Insert unless an entry with the same lowercased name exists.
    /// Returns whether the record was stored.
    pub fn insert(&mut self, record: OrganisationRecord) -> bool {
        let key = normalize_key(&record.name);
        if key.is_empty() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, record);
        true
    }

    /// Case-insensitive exact lookup
    pub fn lookup(&self, name: &str) -> Option<&OrganisationRecord> {
        self.entries.get(&normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn organisation_name<'a>(record: &Record<'a>) -> Option<&'a str> {
    [NAME, ORGANISATION]
        .into_iter()
        .filter_map(|column| record.get(column))
        .map(str::trim)
        .find(|name| !name.is_empty())
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}
