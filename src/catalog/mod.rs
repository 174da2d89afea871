//! Icon catalog: identities, categories and the immutable catalog value.
//!
//! A catalog is built in one pass from a list of icon files:
//!
//! 1. [`parse_identity`] splits each filename into a base name and a variation
//! 2. [`CatalogRules`] assigns category, display name and tags per base name
//! 3. [`build_catalog`] folds all variations of a base name into one entry
//! 4. [`sort_catalog`] puts popular icons first, then orders by display name
//!
//! The result is never mutated. Rescans produce a new [`Catalog`] which is
//! swapped into a [`CatalogHandle`].

mod builder;
mod identity;
mod rules;
mod search;

pub use builder::{FALLBACK_ICONS, build_catalog, fallback_catalog, sort_catalog};
pub use identity::parse_identity;
pub use rules::{CatalogConfig, CatalogRules, CategoryKeywords};
pub use search::{DEFAULT_LIMIT, IconSummary, SearchQuery, SearchResults, resolve_icons, search};

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Rendering style of an icon. Not a separate identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variation {
    #[default]
    Default,
    Color,
    Text,
    Brand,
    Mono,
}

impl Variation {
    pub const ALL: [Variation; 5] = [
        Variation::Default,
        Variation::Color,
        Variation::Text,
        Variation::Brand,
        Variation::Mono,
    ];

    /// Suffixed variations in match order.
    pub const SUFFIXED: [Variation; 4] = [
        Variation::Color,
        Variation::Text,
        Variation::Brand,
        Variation::Mono,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variation::Default => "default",
            Variation::Color => "color",
            Variation::Text => "text",
            Variation::Brand => "brand",
            Variation::Mono => "mono",
        }
    }

    /// Filename suffix (before the extension), `None` for the default variation.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Variation::Default => None,
            Variation::Color => Some("-color"),
            Variation::Text => Some("-text"),
            Variation::Brand => Some("-brand"),
            Variation::Mono => Some("-mono"),
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variation::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown variation '{s}'"))
    }
}

/// Closed set of icon categories. Declaration order is the tie-break order
/// for keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Cloud,
    Dev,
    Framework,
    Design,
    Social,
    Database,
    Browser,
    Crypto,
    Ecommerce,
    Productivity,
    Security,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Ai,
        Category::Cloud,
        Category::Dev,
        Category::Framework,
        Category::Design,
        Category::Social,
        Category::Database,
        Category::Browser,
        Category::Crypto,
        Category::Ecommerce,
        Category::Productivity,
        Category::Security,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Cloud => "cloud",
            Category::Dev => "dev",
            Category::Framework => "framework",
            Category::Design => "design",
            Category::Social => "social",
            Category::Database => "database",
            Category::Browser => "browser",
            Category::Crypto => "crypto",
            Category::Ecommerce => "ecommerce",
            Category::Productivity => "productivity",
            Category::Security => "security",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// An `.svg` file found by a scan, named relative to the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub file_name: String,
}

impl IconFile {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Canonical identity derived from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconIdentity {
    pub base_name: String,
    pub variation: Variation,
}

/// One icon in the catalog, keyed by base name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub display_name: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub variations: BTreeSet<Variation>,
    pub paths: BTreeMap<Variation, String>,
}

impl CatalogEntry {
    /// Path for the requested variation. Without a request, prefers the
    /// default variation, then the first available one.
    pub fn path_for(&self, variation: Option<Variation>) -> Option<(Variation, &str)> {
        match variation {
            Some(v) => self.paths.get(&v).map(|p| (v, p.as_str())),
            None => self
                .paths
                .get_key_value(&Variation::Default)
                .or_else(|| self.paths.iter().next())
                .map(|(v, p)| (*v, p.as_str())),
        }
    }
}

/// Where the entries of a catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Scanned,
    Fallback,
}

/// Immutable, ordered, deduplicated set of catalog entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
    source: CatalogSource,
}

impl Catalog {
    /// Wrap already sorted entries.
    pub fn new(entries: Vec<CatalogEntry>, source: CatalogSource) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.clone(), idx))
            .collect();
        Self {
            entries,
            by_name,
            source,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), CatalogSource::Scanned)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Look up an entry by name. Exact match first, then case-insensitive.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        if let Some(&idx) = self.by_name.get(name) {
            return self.entries.get(idx);
        }
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Entry count per category in declaration order. Empty categories are omitted.
    pub fn category_counts(&self) -> IndexMap<Category, usize> {
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category).or_insert(0) += 1;
        }

        Category::ALL
            .into_iter()
            .filter_map(|c| counts.get(&c).map(|&n| (c, n)))
            .collect()
    }
}

/// Shared reference to the current catalog snapshot.
///
/// Readers hold an `Arc<Catalog>` for as long as they need it. A rescan swaps
/// in a whole new value and never touches entries a reader may still see.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Replace the catalog, returning the new snapshot.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        *self.current.write() = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: Category, variations: &[Variation]) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            display_name: name.to_string(),
            category,
            tags: vec![name.to_string()],
            variations: variations.iter().copied().collect(),
            paths: variations
                .iter()
                .map(|v| {
                    let file = match v.suffix() {
                        Some(suffix) => format!("{name}{suffix}.svg"),
                        None => format!("{name}.svg"),
                    };
                    (*v, file)
                })
                .collect(),
        }
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("AI".parse::<Category>(), Ok(Category::Ai));
        assert!("gaming".parse::<Category>().is_err());
    }

    #[test]
    fn test_path_for_prefers_default() {
        let e = entry("aws", Category::Cloud, &[Variation::Color, Variation::Default]);
        assert_eq!(e.path_for(None), Some((Variation::Default, "aws.svg")));
        assert_eq!(
            e.path_for(Some(Variation::Color)),
            Some((Variation::Color, "aws-color.svg"))
        );
        assert_eq!(e.path_for(Some(Variation::Mono)), None);

        let e = entry("aws", Category::Cloud, &[Variation::Text, Variation::Color]);
        assert_eq!(e.path_for(None), Some((Variation::Color, "aws-color.svg")));
    }

    #[test]
    fn test_category_counts_in_declaration_order() {
        let catalog = Catalog::new(
            vec![
                entry("slack", Category::Productivity, &[Variation::Default]),
                entry("openai", Category::Ai, &[Variation::Default]),
                entry("notion", Category::Productivity, &[Variation::Default]),
            ],
            CatalogSource::Scanned,
        );

        let counts: Vec<_> = catalog.category_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![(Category::Ai, 1), (Category::Productivity, 2)]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive_fallback() {
        let catalog = Catalog::new(
            vec![entry("GitHub", Category::Dev, &[Variation::Default])],
            CatalogSource::Scanned,
        );
        assert!(catalog.get("GitHub").is_some());
        assert!(catalog.get("github").is_some());
        assert!(catalog.get("gitlab").is_none());
    }

    #[test]
    fn test_handle_swap_keeps_old_snapshot() {
        let handle = CatalogHandle::new(Catalog::new(
            vec![entry("aws", Category::Cloud, &[Variation::Default])],
            CatalogSource::Scanned,
        ));

        let before = handle.snapshot();
        handle.replace(Catalog::empty());

        assert_eq!(before.len(), 1);
        assert!(handle.snapshot().is_empty());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let e = entry("aws", Category::Cloud, &[Variation::Default, Variation::Color]);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["displayName"], "aws");
        assert_eq!(json["category"], "cloud");
        assert_eq!(json["variations"], serde_json::json!(["default", "color"]));
        assert_eq!(json["paths"]["color"], "aws-color.svg");
    }
}
