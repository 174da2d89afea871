//! Search command - query the catalog from the terminal.

use std::time::Instant;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::catalog::{CatalogEntry, SearchQuery, search};
use crate::config::Settings;
use crate::indexing::IconIndexer;
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat};

use super::scan::print_envelope;

/// Arguments for the search command.
pub struct SearchArgs {
    pub query: String,
    pub category: Option<String>,
    pub limit: Option<usize>,
    pub json: bool,
}

/// Run the search command against a fresh scan.
pub fn run(args: SearchArgs, config: &Settings) -> ExitCode {
    let start = Instant::now();
    let format = OutputFormat::from_json_flag(args.json);

    let catalog = IconIndexer::from_settings(config).build();
    let query = SearchQuery {
        query: args.query,
        category: args.category,
        limit: Some(args.limit.unwrap_or(config.icons.default_limit)),
        offset: 0,
    };
    let results = search(&catalog, &query);

    if format.is_json() {
        let count = results.items.len();
        let envelope = Envelope::success(results.items)
            .with_entity_type(EntityType::SearchResult)
            .with_count(count)
            .with_total(results.total)
            .with_query(query.query.clone())
            .with_duration_ms(start.elapsed().as_millis() as u64);
        print_envelope(&envelope);
        return ExitCode::Success;
    }

    if results.items.is_empty() {
        println!("No icons found for query: '{}'", query.query);
        return ExitCode::Success;
    }

    println!("{}", render_table(&results.items));
    if results.total > results.items.len() {
        println!(
            "Showing {} of {} matches (use --limit to see more)",
            results.items.len(),
            results.total
        );
    }

    ExitCode::Success
}

pub(crate) fn render_table(entries: &[&CatalogEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Display Name", "Category", "Variations"]);

    for entry in entries {
        let variations: Vec<&str> = entry.variations.iter().map(|v| v.as_str()).collect();
        table.add_row(vec![
            entry.name.clone(),
            entry.display_name.clone(),
            entry.category.to_string(),
            variations.join(", "),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRules, IconFile};
    use crate::indexing::FsIconSource;

    #[test]
    fn test_render_table_lists_variations() {
        let indexer = IconIndexer::new(CatalogRules::default(), FsIconSource::new("/nonexistent"));
        let catalog = indexer.build_from(&[
            IconFile::new("github.svg"),
            IconFile::new("github-mono.svg"),
        ]);
        let entries: Vec<&CatalogEntry> = catalog.entries().iter().collect();

        let rendered = render_table(&entries).to_string();
        assert!(rendered.contains("GitHub"));
        assert!(rendered.contains("default, mono"));
    }
}
