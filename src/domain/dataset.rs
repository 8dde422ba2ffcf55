//! Immutable in-memory dataset and the selector index derived from it.

use super::record::{ResaleRecord, Segment};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Read-only handle on every record loaded at startup.
///
/// Records keep arrival order across pages. Cloning shares the same storage.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[ResaleRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<ResaleRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[ResaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to `segment`, in dataset order
    pub fn segment_records<'a>(
        &'a self,
        segment: &'a Segment,
    ) -> impl Iterator<Item = &'a ResaleRecord> + 'a {
        self.records.iter().filter(move |r| r.matches(segment))
    }

    /// Flat types observed for `town`, in first-seen order.
    ///
    /// Recomputed from the records on every call so selector options can never go stale.
    pub fn flat_types_for(&self, town: &str) -> Vec<String> {
        let mut flat_types: Vec<String> = Vec::new();
        for record in self.records.iter().filter(|r| r.town == town) {
            if !flat_types.contains(&record.flat_type) {
                flat_types.push(record.flat_type.clone());
            }
        }
        flat_types
    }
}

/// Town -> flat types mapping used to populate the selectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentIndex {
    towns: BTreeMap<String, Vec<String>>,
}

impl SegmentIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let mut towns: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in dataset.records() {
            let flat_types = towns.entry(record.town.clone()).or_default();
            if !flat_types.contains(&record.flat_type) {
                flat_types.push(record.flat_type.clone());
            }
        }
        Self { towns }
    }

    /// Towns in sorted order
    pub fn towns(&self) -> impl Iterator<Item = &str> {
        self.towns.keys().map(String::as_str)
    }

    pub fn first_town(&self) -> Option<&str> {
        self.towns.keys().next().map(String::as_str)
    }

    pub fn flat_types(&self, town: &str) -> &[String] {
        self.towns.get(town).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, segment: &Segment) -> bool {
        self.flat_types(&segment.town).contains(&segment.flat_type)
    }

    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    pub fn segment_count(&self) -> usize {
        self.towns.values().map(Vec::len).sum()
    }
}
