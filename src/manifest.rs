//! Manifest: the serialized catalog handed to the web UI and other consumers.

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Catalog, CatalogEntry, Category};
use crate::error::IndexResult;

/// Manifest schema version.
pub const MANIFEST_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    /// RFC 3339 UTC timestamp
    pub generated: String,
    pub total: usize,
    /// Icon count per category, in category declaration order
    pub categories: IndexMap<Category, usize>,
    pub icons: Vec<CatalogEntry>,
}

impl Manifest {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            generated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            total: catalog.len(),
            categories: catalog.category_counts(),
            icons: catalog.entries().to_vec(),
        }
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn write(&self, path: impl AsRef<Path>) -> IndexResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> IndexResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRules, CatalogSource, IconFile, build_catalog, sort_catalog};
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        let rules = CatalogRules::default();
        let files: Vec<IconFile> = ["figma.svg", "github.svg", "github-color.svg", "gitlab.svg"]
            .into_iter()
            .map(IconFile::new)
            .collect();
        Catalog::new(
            sort_catalog(build_catalog(&files, &rules), &rules),
            CatalogSource::Scanned,
        )
    }

    #[test]
    fn test_manifest_document_shape() {
        let manifest = Manifest::from_catalog(&sample_catalog());
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["version"], MANIFEST_VERSION);
        assert_eq!(json["total"], 3);
        assert_eq!(json["categories"], serde_json::json!({ "dev": 2, "design": 1 }));
        assert_eq!(json["icons"][0]["name"], "figma");
        assert!(chrono::DateTime::parse_from_rfc3339(json["generated"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("manifest.json");

        let manifest = Manifest::from_catalog(&sample_catalog());
        manifest.write(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.total, 3);
        assert_eq!(loaded.icons, manifest.icons);
        assert_eq!(
            loaded.categories.keys().copied().collect::<Vec<_>>(),
            vec![Category::Dev, Category::Design]
        );
    }
}
