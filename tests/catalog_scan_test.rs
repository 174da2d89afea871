use iconkit::catalog::{FALLBACK_ICONS, SearchQuery, search};
use iconkit::{CatalogSource, Category, IconIndexer, Manifest, Settings, Variation};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn indexer_for(dir: &Path) -> IconIndexer {
    let mut settings = Settings::default();
    settings.icons.directory = dir.to_path_buf();
    IconIndexer::from_settings(&settings)
}

fn touch(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_scan_real_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch(dir, "github.svg", "<svg id=\"default\"/>");
    touch(dir, "github-color.svg", "<svg id=\"color\"/>");
    touch(dir, "figma.svg", "<svg/>");
    touch(dir, "notes.txt", "not an icon");
    fs::create_dir(dir.join("nested.svg")).unwrap();

    let indexer = indexer_for(dir);
    let catalog = indexer.build();

    assert_eq!(catalog.source(), CatalogSource::Scanned);
    assert_eq!(catalog.len(), 2);

    let github = catalog.get("github").unwrap();
    assert_eq!(github.category, Category::Dev);
    assert_eq!(
        github.paths.get(&Variation::Color).map(String::as_str),
        Some("github-color.svg")
    );

    let (variation, bytes) = indexer
        .read_icon(&catalog, "github", Some(Variation::Color))
        .unwrap();
    assert_eq!(variation, Variation::Color);
    assert_eq!(bytes, b"<svg id=\"color\"/>");

    let (variation, bytes) = indexer.read_icon(&catalog, "github", None).unwrap();
    assert_eq!(variation, Variation::Default);
    assert_eq!(bytes, b"<svg id=\"default\"/>");

    let err = indexer
        .read_icon(&catalog, "github", Some(Variation::Mono))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_empty_directory_is_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();

    let catalog = indexer_for(temp_dir.path()).build();

    assert_eq!(catalog.source(), CatalogSource::Scanned);
    assert!(catalog.is_empty());
}

#[test]
fn test_missing_directory_uses_fallback() {
    let temp_dir = TempDir::new().unwrap();

    let catalog = indexer_for(&temp_dir.path().join("missing")).build();

    assert_eq!(catalog.source(), CatalogSource::Fallback);
    assert_eq!(catalog.len(), FALLBACK_ICONS.len());
    assert!(catalog.entries().iter().all(|e| e.variations.len() == 1));

    let results = search(&catalog, &SearchQuery::new("").with_category("ai"));
    let names: Vec<&str> = results.items.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["anthropic", "openai"]);
}

#[test]
fn test_deleted_file_fails_only_that_icon() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch(dir, "slack.svg", "<svg/>");
    touch(dir, "zoom.svg", "<svg/>");

    let indexer = indexer_for(dir);
    let catalog = indexer.build();
    fs::remove_file(dir.join("zoom.svg")).unwrap();

    assert!(indexer.read_icon(&catalog, "slack", None).is_ok());
    let err = indexer.read_icon(&catalog, "zoom", None).unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("zoom"));
}

#[test]
fn test_manifest_round_trip_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let icons = temp_dir.path().join("icons");
    fs::create_dir(&icons).unwrap();
    touch(&icons, "aws.svg", "<svg/>");
    touch(&icons, "aws-mono.svg", "<svg/>");
    touch(&icons, "openai.svg", "<svg/>");

    let catalog = indexer_for(&icons).build();
    let path = temp_dir.path().join(".iconkit/manifest.json");
    Manifest::from_catalog(&catalog).write(&path).unwrap();

    let loaded = Manifest::load(&path).unwrap();
    assert_eq!(loaded.total, 2);
    assert_eq!(loaded.categories.get(&Category::Cloud), Some(&1));
    let names: Vec<&str> = loaded.icons.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["aws", "openai"]);
}

#[test]
fn test_bare_suffix_file_is_variation_of_empty_name() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch(dir, "-color.svg", "<svg/>");
    touch(dir, "figma.svg", "<svg/>");

    let catalog = indexer_for(dir).build();

    assert_eq!(catalog.len(), 2);
    let bare = catalog.get("").unwrap();
    assert_eq!(bare.variations.len(), 1);
    assert!(bare.variations.contains(&Variation::Color));
    assert_eq!(bare.category, Category::Ai);
}
