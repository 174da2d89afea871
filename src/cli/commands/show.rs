//! Show command - print a single catalog entry.

use crate::catalog::CatalogEntry;
use crate::config::Settings;
use crate::indexing::IconIndexer;
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat};

use super::scan::print_envelope;

/// Run the show command.
pub fn run(name: &str, json: bool, config: &Settings) -> ExitCode {
    let format = OutputFormat::from_json_flag(json);
    let catalog = IconIndexer::from_settings(config).build();

    let Some(entry) = catalog.get(name) else {
        if format.is_json() {
            let envelope: Envelope<CatalogEntry> =
                Envelope::not_found(format!("Icon not found: {name}"))
                    .with_entity_type(EntityType::Icon)
                    .with_query(name)
                    .with_hint("Try 'iconkit search' to list available icons");
            print_envelope(&envelope);
        } else {
            eprintln!("Icon not found: {name}");
        }
        return ExitCode::NotFound;
    };

    if format.is_json() {
        let envelope = Envelope::success(entry)
            .with_entity_type(EntityType::Icon)
            .with_count(1)
            .with_query(name);
        print_envelope(&envelope);
        return ExitCode::Success;
    }

    println!("{} ({})", entry.display_name, entry.name);
    println!("  Category:   {}", entry.category);
    println!("  Tags:       {}", entry.tags.join(", "));
    println!("  Variations:");
    for (variation, path) in &entry.paths {
        println!("    {:<8} {path}", variation.as_str());
    }

    ExitCode::Success
}
