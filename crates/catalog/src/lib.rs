use std::{collections::HashSet, fs, path::Path};

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{EventDetail, EventId, EventSummary};
use thiserror::Error;
use tracing::debug;

mod fixture;

/// Outcome of a single-record lookup. Absence is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(EventDetail),
    Absent,
}

impl Lookup {
    pub fn into_option(self) -> Option<EventDetail> {
        match self {
            Lookup::Found(detail) => Some(detail),
            Lookup::Absent => None,
        }
    }
}

impl From<Option<EventDetail>> for Lookup {
    fn from(value: Option<EventDetail>) -> Self {
        value.map_or(Lookup::Absent, Lookup::Found)
    }
}

/// Read-only event queries. Callers must treat both as fallible and
/// potentially slow even though [`Catalog`] answers immediately.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// All events in summary shape, in insertion order.
    async fn list_summaries(&self) -> Result<Vec<EventSummary>>;
    async fn get_detail(&self, id: &EventId) -> Result<Lookup>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate event id '{0}'")]
    DuplicateId(EventId),
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed in-memory record set. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<EventDetail>,
}

impl Catalog {
    pub fn new(records: Vec<EventDetail>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// The five canonical testing meetups.
    pub fn canonical() -> Self {
        Self {
            records: fixture::canonical_records(),
        }
    }

    /// Parses a JSON array of event records.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<EventDetail> = serde_json::from_str(raw)?;
        Self::new(records)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), events = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summaries(&self) -> Vec<EventSummary> {
        self.records.iter().map(EventDetail::summary).collect()
    }

    pub fn find(&self, id: &EventId) -> Option<&EventDetail> {
        self.records.iter().find(|record| &record.id == id)
    }
}

#[async_trait]
impl EventSource for Catalog {
    async fn list_summaries(&self) -> Result<Vec<EventSummary>> {
        Ok(self.summaries())
    }

    async fn get_detail(&self, id: &EventId) -> Result<Lookup> {
        Ok(self.find(id).cloned().into())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
