use crate::gateway::store_size::human_bytes;
use serde_json::{Map, Value};
use std::time::Duration;

/// Cluster health reported for an index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Green,
    Yellow,
    Red,
    Unknown,
}

impl Health {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "green" => Health::Green,
            "yellow" => Health::Yellow,
            "red" => Health::Red,
            _ => Health::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Health::Green => "green",
            Health::Yellow => "yellow",
            Health::Red => "red",
            Health::Unknown => "unknown",
        }
    }
}

/// Open/close state of an index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexStatus {
    Open,
    Close,
    Unknown,
}

impl IndexStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => IndexStatus::Open,
            "close" => IndexStatus::Close,
            _ => IndexStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexStatus::Open => "open",
            IndexStatus::Close => "close",
            IndexStatus::Unknown => "unknown",
        }
    }
}

/// Snapshot of one index as listed by the backend
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionSummary {
    pub name: String,
    pub health: Health,
    pub status: IndexStatus,
    pub docs_count: u64,
    pub store_size: String,
    pub store_bytes: u64,
}

impl CollectionSummary {
    /// Size for display: binary units, or the raw size string when no byte count is known.
    pub fn display_size(&self) -> String {
        if self.store_bytes > 0 {
            return human_bytes(self.store_bytes);
        }
        let raw = self.store_size.trim();
        if raw.is_empty() {
            "n/a".to_string()
        } else {
            raw.to_string()
        }
    }
}

/// A document id with its `_source` payload.
///
/// An empty id means the backend has not assigned one yet.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DocumentRecord {
    pub id: String,
    pub source: Map<String, Value>,
}

/// One page of search hits in backend order
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchPage {
    pub documents: Vec<DocumentRecord>,
    pub took: Duration,
}
