//! Scan command - build the catalog and write the manifest.

use std::path::PathBuf;
use std::time::Instant;

use crate::catalog::{CatalogRules, CatalogSource};
use crate::config::Settings;
use crate::indexing::{FsIconSource, IconIndexer};
use crate::io::{EntityType, Envelope, ExitCode, OutputFormat, ResultCode};
use crate::manifest::Manifest;

/// Arguments for the scan command.
pub struct ScanArgs {
    pub directory: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub json: bool,
}

/// Run the scan command.
pub fn run(args: ScanArgs, config: &Settings) -> ExitCode {
    let start = Instant::now();
    let format = OutputFormat::from_json_flag(args.json);

    let indexer = match args.directory {
        Some(dir) => IconIndexer::new(
            CatalogRules::from_config(&config.catalog),
            FsIconSource::new(dir),
        ),
        None => IconIndexer::from_settings(config),
    };
    let output = args
        .output
        .unwrap_or_else(|| config.resolve_path(&config.icons.manifest_path));

    let catalog = indexer.build();
    if catalog.source() == CatalogSource::Fallback {
        eprintln!(
            "Warning: could not read {}; using the built-in fallback catalog",
            indexer.location().display()
        );
    }

    let manifest = Manifest::from_catalog(&catalog);
    if let Err(e) = manifest.write(&output) {
        let message = format!("Failed to write manifest to {}: {e}", output.display());
        if format.is_json() {
            let envelope: Envelope<()> = Envelope::error(ResultCode::IndexError, message);
            print_envelope(&envelope);
        } else {
            eprintln!("Error: {message}");
        }
        return ExitCode::GeneralError;
    }

    if format.is_json() {
        let total = manifest.total;
        let envelope = Envelope::success(manifest)
            .with_entity_type(EntityType::Manifest)
            .with_total(total)
            .with_message(format!("Manifest written to {}", output.display()))
            .with_duration_ms(start.elapsed().as_millis() as u64);
        print_envelope(&envelope);
        return ExitCode::Success;
    }

    println!(
        "Indexed {} icons from {}",
        catalog.len(),
        indexer.location().display()
    );
    for (category, count) in &manifest.categories {
        println!("  {:<14} {count}", category.as_str());
    }
    println!("Manifest written to {}", output.display());

    ExitCode::Success
}

pub(crate) fn print_envelope<T: serde::Serialize>(envelope: &Envelope<T>) {
    match envelope.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}
