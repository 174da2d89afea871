//! The icon indexer: scan, build, and read icons from one source.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::Settings;
use crate::catalog::{
    Catalog, CatalogRules, CatalogSource, IconFile, Variation, build_catalog, fallback_catalog,
    sort_catalog,
};
use crate::error::{IndexError, IndexResult};

use super::walker::{FsIconSource, IconSource};

/// Builds catalogs from an [`IconSource`] with injected [`CatalogRules`].
///
/// The indexer holds no catalog itself; each call to [`IconIndexer::build`]
/// returns a fresh value for the caller to publish.
#[derive(Clone)]
pub struct IconIndexer {
    rules: Arc<CatalogRules>,
    source: Arc<dyn IconSource>,
}

impl IconIndexer {
    pub fn new(rules: CatalogRules, source: impl IconSource + 'static) -> Self {
        Self {
            rules: Arc::new(rules),
            source: Arc::new(source),
        }
    }

    /// Indexer over the configured icon directory with the configured rules.
    pub fn from_settings(settings: &Settings) -> Self {
        let directory = settings.resolve_path(&settings.icons.directory);
        Self::new(
            CatalogRules::from_config(&settings.catalog),
            FsIconSource::new(directory),
        )
    }

    pub fn location(&self) -> PathBuf {
        self.source.location()
    }

    /// List the `.svg` files of the source.
    pub fn scan(&self) -> IndexResult<Vec<IconFile>> {
        self.source.list()
    }

    /// Build a catalog from an explicit file list.
    pub fn build_from(&self, files: &[IconFile]) -> Catalog {
        let entries = sort_catalog(build_catalog(files, &self.rules), &self.rules);
        Catalog::new(entries, CatalogSource::Scanned)
    }

    /// Scan and build. A source that cannot be listed yields the fallback
    /// catalog; an existing but empty source yields an empty catalog.
    pub fn build(&self) -> Catalog {
        let start = Instant::now();

        match self.scan() {
            Ok(files) => {
                let catalog = self.build_from(&files);
                crate::log_event!(
                    "indexer",
                    "built",
                    "{} icons from {} files in {}ms",
                    catalog.len(),
                    files.len(),
                    start.elapsed().as_millis()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!("[indexer] {e}; using fallback catalog");
                fallback_catalog(&self.rules)
            }
        }
    }

    /// SVG bytes for an icon in `catalog`.
    ///
    /// Without a variation the default one is preferred. Failures are tied to
    /// this icon only.
    pub fn read_icon(
        &self,
        catalog: &Catalog,
        name: &str,
        variation: Option<Variation>,
    ) -> IndexResult<(Variation, Vec<u8>)> {
        let not_found = || IndexError::IconNotFound {
            name: name.to_string(),
            variation,
        };

        let entry = catalog.get(name).ok_or_else(not_found)?;
        let (resolved, path) = entry.path_for(variation).ok_or_else(not_found)?;

        let bytes = self
            .source
            .read(path)
            .map_err(|source| IndexError::IconRead {
                name: entry.name.clone(),
                path: self.source.location().join(path),
                source,
            })?;

        Ok((resolved, bytes))
    }
}
