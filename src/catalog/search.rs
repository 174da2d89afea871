use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogEntry, Category};

/// Default result limit for searches.
pub const DEFAULT_LIMIT: usize = 50;

/// Filters for [`search`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query; empty matches everything
    #[serde(default)]
    pub query: String,
    /// Category name, `"all"` or absent for no filter
    #[serde(default)]
    pub category: Option<String>,
    /// Maximum number of results (default: 50)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Results to skip, for pagination
    #[serde(default)]
    pub offset: usize,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// A page of matches plus the total before truncation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub items: Vec<&'a CatalogEntry>,
    pub total: usize,
}

fn matches_query(entry: &CatalogEntry, needle: &str) -> bool {
    entry.name.to_lowercase().contains(needle)
        || entry.display_name.to_lowercase().contains(needle)
        || entry.category.as_str().contains(needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Filter the catalog, keeping its order.
///
/// Unknown category names match nothing.
pub fn search<'a>(catalog: &'a Catalog, query: &SearchQuery) -> SearchResults<'a> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        .map(str::to_lowercase);
    let needle = query.query.to_lowercase();

    let matched: Vec<&CatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| {
            category
                .as_deref()
                .is_none_or(|c| entry.category.as_str() == c)
        })
        .filter(|entry| needle.is_empty() || matches_query(entry, &needle))
        .collect();

    let total = matched.len();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let items = matched.into_iter().skip(query.offset).take(limit).collect();

    SearchResults { items, total }
}

/// The fields post templates read from an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSummary {
    pub name: String,
    pub display_name: String,
    pub category: Category,
}

impl From<&CatalogEntry> for IconSummary {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            display_name: entry.display_name.clone(),
            category: entry.category,
        }
    }
}

/// Look up names for content generation. Unknown names are dropped.
pub fn resolve_icons<'a, S: AsRef<str>>(catalog: &'a Catalog, names: &[S]) -> Vec<&'a CatalogEntry> {
    names
        .iter()
        .filter_map(|name| catalog.get(name.as_ref().trim()))
        .collect()
}
