//! Catalog loading and read-only queries
//!
//! The catalog is loaded once at startup, validated, and never mutated
//! afterwards. All queries borrow from the loaded records.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::model::{Base, DistroRecord};
use crate::{Error, Result};

/// Bundled dataset, embedded at compile time
const BUNDLED_DATA: &str = include_str!("../data/distros.json");

/// The complete immutable ordered sequence of distribution records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DistroRecord>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON. Record order is preserved;
    /// a duplicate id rejects the whole catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<DistroRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate catalog id: {}",
                    record.id
                )));
            }
        }

        Ok(Self { records })
    }

    /// The dataset shipped inside the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATA)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the configured override path, falling back to the bundled
    /// dataset when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => {
                info!("Loading catalog from {}", p.display());
                Self::from_file(p)?
            }
            None => Self::bundled()?,
        };
        info!("Catalog loaded: {} distributions", catalog.len());
        Ok(catalog)
    }

    pub fn records(&self) -> &[DistroRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DistroRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All tags present in the catalog, sorted ascending, no duplicates.
    /// Tag sets have no iteration order of their own, so the sorted form is
    /// what keeps dropdown contents deterministic.
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .records
            .iter()
            .flat_map(|r| r.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// All bases present in the catalog, sorted ascending by display name
    pub fn distinct_bases(&self) -> Vec<Base> {
        let mut bases: Vec<Base> = Vec::new();
        for record in &self.records {
            if !bases.contains(&record.base) {
                bases.push(record.base);
            }
        }
        bases.sort_by_key(|b| b.as_str());
        bases
    }

    /// Resolve ids to records, preserving the id list's order.
    /// Ids not present in the catalog are skipped.
    pub fn resolve<'a>(&'a self, ids: &[String]) -> Vec<&'a DistroRecord> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_loads_and_validates() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());

        // Every tag in the dataset is a lowercase label
        for record in catalog.records() {
            for tag in &record.tags {
                assert_eq!(tag, &tag.to_lowercase(), "tag not lowercase: {}", tag);
            }
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "a", "name": "A", "logo": "", "description": "", "longDescription": "",
             "tags": [], "req": {"cpu": "", "ram": 1, "storage": 1},
             "links": {"homepage": "", "download": "", "documentation": ""},
             "base": "Debian", "experience": "beginner", "useCase": "general"},
            {"id": "a", "name": "A again", "logo": "", "description": "", "longDescription": "",
             "tags": [], "req": {"cpu": "", "ram": 1, "storage": 1},
             "links": {"homepage": "", "download": "", "documentation": ""},
             "base": "Debian", "experience": "beginner", "useCase": "general"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn get_finds_records_by_id() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.get("arch").unwrap().name, "Arch Linux");
        assert!(catalog.get("template-os").is_none());
        assert!(!catalog.contains("template-os"));
    }

    #[test]
    fn distinct_tags_are_sorted_and_unique() {
        let catalog = Catalog::bundled().unwrap();
        let tags = catalog.distinct_tags();
        assert!(!tags.is_empty());
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn distinct_bases_are_sorted_by_display_name() {
        let catalog = Catalog::bundled().unwrap();
        let names: Vec<&str> = catalog.distinct_bases().iter().map(|b| b.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn resolve_preserves_id_order_and_skips_unknown() {
        let catalog = Catalog::bundled().unwrap();
        let ids = vec![
            "tails".to_string(),
            "no-such-distro".to_string(),
            "ubuntu".to_string(),
        ];
        let resolved = catalog.resolve(&ids);
        let names: Vec<&str> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(names, vec!["tails", "ubuntu"]);
    }

    #[test]
    fn from_file_reads_a_catalog_on_disk() {
        let catalog = Catalog::bundled().unwrap();
        let json = serde_json::to_string(catalog.records()).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let reloaded = Catalog::from_file(file.path()).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.records()[0].id, catalog.records()[0].id);
    }
}
