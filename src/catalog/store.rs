use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::criteria::SearchCriteria;
use crate::catalog::record::VehicleRecord;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Highest value accepted for ratings and condition/inspection scores.
pub const MAX_SCORE: f32 = 5.0;

/// Errors that can occur when building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vehicle at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate vehicle id '{id}'")]
    DuplicateId { id: String },

    #[error("Vehicle '{id}' has {field} {value} outside 0-5")]
    ScoreOutOfRange {
        id: String,
        field: &'static str,
        value: f32,
    },
}

/// Fixed, read-only collection of vehicle records.
///
/// Built once at startup; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

impl Catalog {
    /// Validates records and freezes them in insertion order.
    pub fn from_records(records: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
            validate_scores(record)?;
        }
        Ok(Self { records })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Loads a JSON array of records from disk.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json(&content, &format!("'{}'", path.display()))?;
        tracing::info!(path = %path.display(), vehicles = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let records: Vec<VehicleRecord> =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse {
                origin: origin.to_string(),
                source: e,
            })?;
        Self::from_records(records)
    }

    /// Returns the record with the given id. A miss is a normal outcome.
    pub fn lookup(&self, id: &str) -> Option<&VehicleRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records satisfying every present criterion, in catalog order.
    pub fn filter(&self, criteria: &SearchCriteria) -> Vec<&VehicleRecord> {
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// The first `limit` records, shown when a search comes back empty.
    pub fn featured(&self, limit: usize) -> Vec<&VehicleRecord> {
        self.records.iter().take(limit).collect()
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_scores(record: &VehicleRecord) -> Result<(), CatalogError> {
    check_score(record, "rating", record.rating)?;
    if let Some(score) = record.condition_score {
        check_score(record, "condition score", score)?;
    }
    if let Some(report) = &record.inspection_report {
        for (label, item) in report.items() {
            check_score(record, label, item.score)?;
        }
    }
    Ok(())
}

fn check_score(record: &VehicleRecord, field: &'static str, value: f32) -> Result<(), CatalogError> {
    if (0.0..=MAX_SCORE).contains(&value) {
        return Ok(());
    }
    Err(CatalogError::ScoreOutOfRange {
        id: record.id.clone(),
        field,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.records()[0].id, "988025062500208369008");
    }

    #[test]
    fn builtin_lookup_finds_every_record() {
        let catalog = Catalog::builtin().unwrap();
        for record in catalog.records() {
            assert_eq!(catalog.lookup(&record.id), Some(record));
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("__nonexistent__").is_none());
    }

    #[test]
    fn featured_caps_at_limit() {
        let catalog = Catalog::builtin().unwrap();
        let featured = catalog.featured(6);
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[5].id, "5");
        assert_eq!(catalog.featured(50).len(), 8);
    }

    #[test]
    fn builtin_make_filter_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog
            .filter(&SearchCriteria::new().with_make("LAND rover"))
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "6"]);
    }

    #[test]
    fn malformed_json_reports_origin() {
        let err = Catalog::from_json("[{", "test input").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { ref origin, .. } if origin == "test input"));
    }
}
