//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

fn heading(text: &str) -> String {
    if console::colors_enabled() {
        console::style(text).cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Create custom help text with consistent styling
fn create_custom_help() -> String {
    let mut help = String::new();

    help.push_str(&format!("{}\n", heading("Quick Start:")));
    help.push_str("  $ iconkit init                       # Create .iconkit/settings.toml\n");
    help.push_str("  $ iconkit scan ./icons               # Index a directory of SVG icons\n");
    help.push_str("  $ iconkit search git --category dev  # Search the catalog\n");
    help.push_str("  $ iconkit serve                      # MCP server on stdio\n");
    help.push_str("  $ iconkit serve --http               # REST API + MCP over HTTP\n\n");

    help.push_str("Index SVG icons into a searchable, categorized catalog.\n\n");

    help.push_str(&heading("Usage:"));
    help.push_str(" iconkit [OPTIONS] <COMMAND>\n\n");

    help.push_str(&format!("{}\n", heading("Commands:")));
    help.push_str("  init          Set up .iconkit directory\n");
    help.push_str("  config        Display active settings\n");
    help.push_str("  scan          Build the catalog and write the manifest\n");
    help.push_str("  search        Search the catalog\n");
    help.push_str("  show          Show one catalog entry\n");
    help.push_str("  serve         Start MCP server (stdio or HTTP)\n");
    help.push_str("  help          Print this message or the help of the given subcommand(s)\n\n");

    help.push_str("See 'iconkit help <command>' for more information on a specific command.\n\n");

    help.push_str(&format!("{}\n", heading("Options:")));
    help.push_str("  -c, --config <CONFIG>  Path to custom settings.toml file\n");
    help.push_str("  -h, --help             Print help\n");
    help.push_str("  -V, --version          Print version\n");

    help
}

/// SVG icon catalog
#[derive(Parser)]
#[command(
    name = "iconkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "SVG icon catalog",
    long_about = "Index SVG icons into a searchable, categorized catalog.",
    next_line_help = true,
    styles = clap_cargo_style(),
    override_help = create_custom_help()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .iconkit directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .iconkit/settings.toml")]
    Config,

    /// Scan the icon directory
    #[command(
        about = "Build the catalog and write the manifest",
        after_help = "Examples:\n  iconkit scan\n  iconkit scan ./assets/icons\n  iconkit scan --output icons.json\n  iconkit scan --json"
    )]
    Scan {
        /// Icon directory (overrides icons.directory)
        #[arg(value_name = "DIR")]
        directory: Option<PathBuf>,

        /// Manifest output path (overrides icons.manifest_path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the manifest as JSON instead of writing a summary
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog
    #[command(
        about = "Search icons by name, tag or category",
        after_help = "Examples:\n  iconkit search git\n  iconkit search --category ai\n  iconkit search cloud --limit 5 --json\n\nJSON paths:\n  search   .data[].name"
    )]
    Search {
        /// Free-text query (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Category filter, or "all"
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of results (overrides icons.default_limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show a single icon
    #[command(about = "Show one catalog entry with its variations")]
    Show {
        /// Icon name
        name: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Start MCP server
    #[command(
        about = "Start MCP server",
        long_about = "Start MCP server on stdio, or the REST API plus MCP over HTTP.",
        after_help = "Examples:\n  iconkit serve\n  iconkit serve --http\n  iconkit serve --http --bind 0.0.0.0:3000\n\nModes:\n  Default: stdio\n  --http: REST API at /api, MCP at /mcp"
    )]
    Serve {
        /// Enable HTTP server mode instead of stdio
        #[arg(long, help = "Run as HTTP server instead of stdio transport")]
        http: bool,

        /// Bind address for the HTTP server (overrides server.bind)
        #[arg(long, help = "Address to bind HTTP server to")]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["iconkit", "search", "git", "--category", "dev", "-l", "5"]);
        match cli.command {
            Commands::Search {
                query,
                category,
                limit,
                json,
            } => {
                assert_eq!(query, "git");
                assert_eq!(category.as_deref(), Some("dev"));
                assert_eq!(limit, Some(5));
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["iconkit", "show", "github", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Show { .. }));
    }

    #[test]
    fn test_search_query_defaults_to_empty() {
        let cli = Cli::parse_from(["iconkit", "search"]);
        assert!(matches!(cli.command, Commands::Search { ref query, .. } if query.is_empty()));
    }
}
