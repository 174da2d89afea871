use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

use super::{Catalog, CatalogEntry, CatalogRules, CatalogSource, IconFile, parse_identity};

/// Icons served when the icon directory cannot be read.
pub const FALLBACK_ICONS: [&str; 8] = [
    "openai",
    "anthropic",
    "github",
    "figma",
    "aws",
    "slack",
    "google",
    "microsoft",
];

/// Group files by base name into one entry each, in first-seen order.
///
/// Category, display name and tags depend only on the base name, so they are
/// computed when a base name is first seen and shared by later variations.
pub fn build_catalog(files: &[IconFile], rules: &CatalogRules) -> Vec<CatalogEntry> {
    let mut grouped: IndexMap<String, CatalogEntry> = IndexMap::new();

    for file in files {
        let identity = parse_identity(&file.file_name);

        let entry = grouped
            .entry(identity.base_name.clone())
            .or_insert_with(|| {
                let category = rules.categorize(&identity.base_name);
                CatalogEntry {
                    name: identity.base_name.clone(),
                    display_name: rules.display_name(&identity.base_name),
                    category,
                    tags: rules.generate_tags(&identity.base_name, category),
                    variations: BTreeSet::new(),
                    paths: BTreeMap::new(),
                }
            });

        entry.variations.insert(identity.variation);
        if let Some(previous) = entry
            .paths
            .insert(identity.variation, file.file_name.clone())
        {
            crate::debug_event!(
                "catalog",
                "duplicate variation",
                "{} {} replaces {previous}",
                identity.base_name,
                identity.variation
            );
        }
    }

    grouped.into_values().collect()
}

/// Popular icons first, then by display name (case-insensitive).
///
/// The sort is stable, so equal display names keep their input order.
pub fn sort_catalog(mut entries: Vec<CatalogEntry>, rules: &CatalogRules) -> Vec<CatalogEntry> {
    entries.sort_by_cached_key(|entry| {
        (
            !rules.is_popular(&entry.name),
            entry.display_name.to_lowercase(),
        )
    });
    entries
}

/// Small fixed catalog built through the regular pipeline.
pub fn fallback_catalog(rules: &CatalogRules) -> Catalog {
    let files: Vec<IconFile> = FALLBACK_ICONS
        .iter()
        .map(|name| IconFile::new(format!("{name}.svg")))
        .collect();

    let entries = sort_catalog(build_catalog(&files, rules), rules);
    Catalog::new(entries, CatalogSource::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Variation};
    use std::collections::HashSet;

    fn files(names: &[&str]) -> Vec<IconFile> {
        names.iter().map(|n| IconFile::new(*n)).collect()
    }

    #[test]
    fn test_variations_fold_into_one_entry() {
        let rules = CatalogRules::default();
        let entries = build_catalog(&files(&["aws.svg", "aws-color.svg", "aws-text.svg"]), &rules);

        assert_eq!(entries.len(), 1);
        let aws = &entries[0];
        assert_eq!(aws.name, "aws");
        assert_eq!(
            aws.variations,
            BTreeSet::from([Variation::Default, Variation::Color, Variation::Text])
        );
        assert_eq!(aws.paths[&Variation::Text], "aws-text.svg");
        assert_eq!(aws.category, Category::Cloud);
        assert_eq!(aws.display_name, "AWS");
    }

    #[test]
    fn test_one_entry_per_distinct_base_name() {
        let rules = CatalogRules::default();
        let input = files(&[
            "github.svg",
            "figma-mono.svg",
            "github-color.svg",
            "adobe-brandx.svg",
            "adobe-brand.svg",
            "figma.svg",
        ]);
        let entries = build_catalog(&input, &rules);

        let expected: HashSet<String> = input
            .iter()
            .map(|f| parse_identity(&f.file_name).base_name)
            .collect();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(entries.len(), expected.len());
        assert_eq!(names, vec!["github", "figma", "adobe-brandx", "adobe"]);
    }

    #[test]
    fn test_sort_popular_first_then_display_name() {
        let rules = CatalogRules::default();
        let entries = build_catalog(
            &files(&["zoom.svg", "bitcoin.svg", "slack.svg", "aws.svg", "asana.svg"]),
            &rules,
        );
        let sorted = sort_catalog(entries, &rules);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["aws", "slack", "asana", "bitcoin", "zoom"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_display_names() {
        let rules = CatalogRules::default();
        let entries = build_catalog(&files(&["my_tool.svg", "my-tool.svg"]), &rules);
        assert_eq!(entries[0].display_name, entries[1].display_name);

        let sorted = sort_catalog(entries, &rules);
        assert_eq!(sorted[0].name, "my_tool");
        assert_eq!(sorted[1].name, "my-tool");
    }

    #[test]
    fn test_fallback_catalog() {
        let rules = CatalogRules::default();
        let catalog = fallback_catalog(&rules);

        assert_eq!(catalog.source(), CatalogSource::Fallback);
        assert_eq!(catalog.len(), FALLBACK_ICONS.len());
        assert_eq!(catalog.get("openai").unwrap().category, Category::Ai);
        assert_eq!(catalog.get("microsoft").unwrap().category, Category::Other);
    }
}
