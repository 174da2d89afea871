use clap::Parser;
use iconkit::Settings;
use iconkit::cli::commands::{init, scan::ScanArgs, search::SearchArgs, serve::ServeArgs};
use iconkit::cli::{Cli, Commands, commands};
use iconkit::io::ExitCode;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let Cli {
        config: config_path,
        command,
    } = Cli::parse();

    if let Commands::Init { force } = command {
        return init::run_init(force).into();
    }

    // Explicit --config skips the workspace lookup
    let loaded = match &config_path {
        Some(path) => Settings::load_from(path),
        None => {
            if let Err(warning) = Settings::check_init() {
                eprintln!("Warning: {warning}");
                eprintln!("Using default configuration for now.");
            }
            Settings::load()
        }
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::GeneralError.into();
        }
    };

    iconkit::logging::init_with_config(&config.logging);

    let code = match command {
        Commands::Init { force } => init::run_init(force),
        Commands::Config => init::run_config(&config),
        Commands::Scan {
            directory,
            output,
            json,
        } => commands::scan::run(
            ScanArgs {
                directory,
                output,
                json,
            },
            &config,
        ),
        Commands::Search {
            query,
            category,
            limit,
            json,
        } => commands::search::run(
            SearchArgs {
                query,
                category,
                limit,
                json,
            },
            &config,
        ),
        Commands::Show { name, json } => commands::show::run(&name, json, &config),
        Commands::Serve { http, bind } => {
            commands::serve::run(ServeArgs { http, bind }, config).await
        }
    };

    code.into()
}
